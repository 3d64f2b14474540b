//! KGAPI packet identifiers and motion payload encoding
//!
//! Encoding is pure and total: every pair of filtered vectors maps to exactly
//! one 15-byte payload.

use crate::devices::traits::Vector3i16;

/// Sensor index of the hand-mounted sensor (single-sensor design)
pub const SENSOR_INDEX: u8 = 0x00;

/// Axis-presence flag: acceleration data present
pub const AXIS_ACCEL: u8 = 0x01;

/// Axis-presence flag: angular rate data present
pub const AXIS_GYRO: u8 = 0x02;

/// Length of the vector data block (6 axes × 2 bytes)
pub const MOTION_DATA_LEN: u8 = 12;

/// Motion data header length (sensor, flags, length)
pub const MOTION_DATA_HEADER_LEN: usize = 3;

/// Full motion data payload length
pub const MOTION_DATA_PAYLOAD_LEN: usize = MOTION_DATA_HEADER_LEN + MOTION_DATA_LEN as usize;

/// Motion mode payload length
pub const MOTION_MODE_PAYLOAD_LEN: usize = 2;

/// KGAPI packet type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketType {
    /// Asynchronous event from controller to host
    Event = 0x80,
}

/// KGAPI packet class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketClass {
    /// Motion sensor class
    Motion = 0x04,
}

/// KGAPI motion-class packet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PacketId {
    /// `motion_mode` event: sensor enabled/disabled
    MotionMode = 0x01,
    /// `motion_data` event: one filtered sample
    MotionData = 0x02,
}

/// KGAPI packet header handed to the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketHeader {
    pub packet_type: PacketType,
    /// Payload length in bytes
    pub length: u8,
    pub class: PacketClass,
    pub id: PacketId,
}

impl PacketHeader {
    /// Header for a motion-class event
    pub fn motion_event(id: PacketId, length: u8) -> Self {
        Self {
            packet_type: PacketType::Event,
            length,
            class: PacketClass::Motion,
            id,
        }
    }

    /// Wire form `[type, length, class, id]`
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            self.packet_type as u8,
            self.length,
            self.class as u8,
            self.id as u8,
        ]
    }
}

/// Encode a `motion_mode` payload
pub fn encode_motion_mode(sensor: u8, mode: u8) -> [u8; MOTION_MODE_PAYLOAD_LEN] {
    [sensor, mode]
}

/// Encode a `motion_data` payload
///
/// Layout: `[sensor=0, flags=0x03, len=12, ax, ay, az, gx, gy, gz]`, each axis
/// little-endian two's-complement.
pub fn encode_motion_data(accel: &Vector3i16, gyro: &Vector3i16) -> [u8; MOTION_DATA_PAYLOAD_LEN] {
    let mut payload = [0u8; MOTION_DATA_PAYLOAD_LEN];
    payload[0] = SENSOR_INDEX;
    payload[1] = AXIS_ACCEL | AXIS_GYRO;
    payload[2] = MOTION_DATA_LEN;

    let axes = [accel.x, accel.y, accel.z, gyro.x, gyro.y, gyro.z];
    for (chunk, axis) in payload[MOTION_DATA_HEADER_LEN..]
        .chunks_exact_mut(2)
        .zip(axes)
    {
        chunk.copy_from_slice(&axis.to_le_bytes());
    }

    payload
}
