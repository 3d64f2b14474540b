//! Recording packet transport for testing

use super::packet::{PacketHeader, MOTION_DATA_PAYLOAD_LEN};
use super::transport::PacketTransport;

/// Number of packets retained by the mock
const MAX_RECORDED_PACKETS: usize = 32;

/// One packet handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentPacket {
    pub header: PacketHeader,
    pub payload: heapless::Vec<u8, MOTION_DATA_PAYLOAD_LEN>,
}

impl SentPacket {
    /// Full wire frame: header followed by payload
    pub fn frame(&self) -> heapless::Vec<u8, { MOTION_DATA_PAYLOAD_LEN + 4 }> {
        let mut frame = heapless::Vec::new();
        let _ = frame.extend_from_slice(&self.header.to_bytes());
        let _ = frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Mock transport
///
/// Records sent packets (oldest dropped once full) and lets tests control the
/// in-binary-packet guard.
#[derive(Debug, Default)]
pub struct MockTransport {
    sent: heapless::Deque<SentPacket, MAX_RECORDED_PACKETS>,
    total_sent: u32,
    in_bin_packet: bool,
}

impl MockTransport {
    /// Create an empty transport, not inside a binary packet
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the protocol parser being inside a received packet
    pub fn set_in_bin_packet(&mut self, in_packet: bool) {
        self.in_bin_packet = in_packet;
    }

    /// Total packets sent since creation or the last `clear`
    pub fn sent_count(&self) -> u32 {
        self.total_sent
    }

    /// Most recently sent packet
    pub fn last(&self) -> Option<&SentPacket> {
        self.sent.back()
    }

    /// Retained packets, oldest first
    pub fn sent(&self) -> impl Iterator<Item = &SentPacket> {
        self.sent.iter()
    }

    /// Forget recorded packets
    pub fn clear(&mut self) {
        self.sent.clear();
        self.total_sent = 0;
    }
}

impl PacketTransport for MockTransport {
    fn send_packet(&mut self, header: PacketHeader, payload: &[u8]) {
        let mut recorded = heapless::Vec::new();
        assert!(
            recorded.extend_from_slice(payload).is_ok(),
            "payload of {} bytes exceeds {} byte motion payload",
            payload.len(),
            MOTION_DATA_PAYLOAD_LEN
        );

        if self.sent.is_full() {
            self.sent.pop_front();
        }
        let _ = self.sent.push_back(SentPacket {
            header,
            payload: recorded,
        });
        self.total_sent += 1;
    }

    fn in_bin_packet(&self) -> bool {
        self.in_bin_packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communication::keyglove::packet::PacketId;

    #[test]
    fn test_mock_transport_records_packets() {
        let mut transport = MockTransport::new();
        transport.send_packet(PacketHeader::motion_event(PacketId::MotionMode, 2), &[0, 1]);

        assert_eq!(transport.sent_count(), 1);
        let packet = transport.last().unwrap();
        assert_eq!(packet.payload.as_slice(), &[0, 1]);
        assert_eq!(packet.frame().as_slice(), &[0x80, 2, 0x04, 0x01, 0, 1]);
    }

    #[test]
    fn test_mock_transport_drops_oldest_when_full() {
        let mut transport = MockTransport::new();
        for mode in 0..(MAX_RECORDED_PACKETS as u8 + 2) {
            transport.send_packet(
                PacketHeader::motion_event(PacketId::MotionMode, 2),
                &[0, mode],
            );
        }

        assert_eq!(transport.sent_count(), MAX_RECORDED_PACKETS as u32 + 2);
        assert_eq!(transport.sent().count(), MAX_RECORDED_PACKETS);
        assert_eq!(transport.sent().next().unwrap().payload[1], 2);
    }

    #[test]
    #[should_panic(expected = "exceeds 15 byte motion payload")]
    fn test_mock_transport_rejects_oversized_payload() {
        let mut transport = MockTransport::new();
        transport.send_packet(
            PacketHeader::motion_event(PacketId::MotionData, 16),
            &[0; MOTION_DATA_PAYLOAD_LEN + 1],
        );
    }

    #[test]
    fn test_mock_transport_in_bin_packet_flag() {
        let mut transport = MockTransport::new();
        assert!(!transport.in_bin_packet());
        transport.set_in_bin_packet(true);
        assert!(transport.in_bin_packet());
    }

    #[test]
    fn test_mock_transport_clear() {
        let mut transport = MockTransport::new();
        transport.send_packet(PacketHeader::motion_event(PacketId::MotionMode, 2), &[0, 0]);
        transport.clear();
        assert_eq!(transport.sent_count(), 0);
        assert!(transport.last().is_none());
    }
}
