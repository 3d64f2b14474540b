//! Packet transport collaborator
//!
//! The protocol layer frames and delivers packets; delivery failures are
//! handled there and never reported back to the motion pipeline.

use super::packet::PacketHeader;

/// KGAPI packet transport
pub trait PacketTransport {
    /// Frame and send one packet
    ///
    /// `header.length` always equals `payload.len()`.
    fn send_packet(&mut self, header: PacketHeader, payload: &[u8]);

    /// Whether a received binary packet is currently being processed
    ///
    /// While true, state changes requested by that packet are not echoed back
    /// to the host as events.
    fn in_bin_packet(&self) -> bool {
        false
    }
}
