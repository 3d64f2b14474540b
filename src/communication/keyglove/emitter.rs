//! Override-then-transport dispatch for motion events

use super::hooks::MotionEventOverride;
use super::packet::{
    encode_motion_data, encode_motion_mode, PacketHeader, PacketId, MOTION_DATA_HEADER_LEN,
};
use super::transport::PacketTransport;
use crate::devices::traits::Vector3i16;

/// Emit a `motion_mode` event
///
/// Returns whether the packet was handed to the transport.
pub fn emit_motion_mode<T, O>(transport: &mut T, hooks: &mut O, sensor: u8, mode: u8) -> bool
where
    T: PacketTransport,
    O: MotionEventOverride,
{
    let payload = encode_motion_mode(sensor, mode);

    if hooks.on_motion_mode(payload[0], payload[1]) {
        crate::log_debug!("motion_mode event suppressed by override (mode {})", mode);
        return false;
    }

    transport.send_packet(
        PacketHeader::motion_event(PacketId::MotionMode, payload.len() as u8),
        &payload,
    );
    true
}

/// Emit a `motion_data` event for one filtered sample
///
/// Returns whether the packet was handed to the transport.
pub fn emit_motion_data<T, O>(
    transport: &mut T,
    hooks: &mut O,
    accel: &Vector3i16,
    gyro: &Vector3i16,
) -> bool
where
    T: PacketTransport,
    O: MotionEventOverride,
{
    let payload = encode_motion_data(accel, gyro);

    if hooks.on_motion_data(
        payload[0],
        payload[1],
        payload[2],
        &payload[MOTION_DATA_HEADER_LEN..],
    ) {
        crate::log_debug!("motion_data event suppressed by override");
        return false;
    }

    transport.send_packet(
        PacketHeader::motion_event(PacketId::MotionData, payload.len() as u8),
        &payload,
    );
    true
}
