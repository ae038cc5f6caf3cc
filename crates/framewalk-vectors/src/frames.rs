//! Deterministic frame builders.
//!
//! Addresses are fixed so tests can assert on them; checksums are
//! computed with the reference implementations in [`crate::checksum`].

use crate::checksum::{icmpv6_checksum, internet_checksum, ipv4_header_checksum};

pub const DST_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x01];
pub const SRC_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x02];
pub const SRC_IP4: [u8; 4] = [10, 0, 0, 1];
pub const DST_IP4: [u8; 4] = [10, 0, 0, 2];
pub const SRC_IP6: [u8; 16] = [
    0xFD, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x01,
];
pub const DST_IP6: [u8; 16] = [
    0xFD, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x02,
];

/// An Ethernet frame with the fixed test MACs and the given payload.
#[must_use]
pub fn ethernet(ether_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(14 + payload.len());
    frame.extend_from_slice(&DST_MAC);
    frame.extend_from_slice(&SRC_MAC);
    frame.extend_from_slice(&ether_type.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// Insert a VLAN tag with the given TCI between the Ethernet header and
/// payload of an existing frame, rewriting the outer ether-type to
/// 802.1Q. Panics if the frame is shorter than an Ethernet header; these
/// builders are test-only.
#[must_use]
pub fn push_vlan(frame: &[u8], tci: u16) -> Vec<u8> {
    assert!(frame.len() >= 14, "frame too short for an Ethernet header");
    let mut tagged = Vec::with_capacity(frame.len() + 4);
    tagged.extend_from_slice(&frame[..12]);
    tagged.extend_from_slice(&0x8100u16.to_be_bytes());
    tagged.extend_from_slice(&tci.to_be_bytes());
    tagged.extend_from_slice(&frame[12..14]); // old ether-type
    tagged.extend_from_slice(&frame[14..]);
    tagged
}

fn ipv4_header(total_len: u16, ttl: u8, protocol: u8) -> [u8; 20] {
    let mut h = [0u8; 20];
    h[0] = 0x45;
    h[2..4].copy_from_slice(&total_len.to_be_bytes());
    h[6] = 0x40; // don't fragment
    h[8] = ttl;
    h[9] = protocol;
    h[12..16].copy_from_slice(&SRC_IP4);
    h[16..20].copy_from_slice(&DST_IP4);
    let check = ipv4_header_checksum(&h);
    h[10..12].copy_from_slice(&check.to_be_bytes());
    h
}

/// A complete Ethernet + IPv4 + ICMP echo-request frame with valid IP
/// and ICMP checksums, TTL 64, identifier 1 and the given sequence.
///
/// A 56-byte payload yields the classic 98-byte ping frame.
#[must_use]
pub fn ipv4_icmp_echo_request(sequence: u16, payload: &[u8]) -> Vec<u8> {
    let mut icmp = Vec::with_capacity(8 + payload.len());
    icmp.extend_from_slice(&[8, 0, 0, 0]); // echo request, checksum zeroed
    icmp.extend_from_slice(&1u16.to_be_bytes());
    icmp.extend_from_slice(&sequence.to_be_bytes());
    icmp.extend_from_slice(payload);
    let check = internet_checksum(&icmp);
    icmp[2..4].copy_from_slice(&check.to_be_bytes());

    let total_len = (20 + icmp.len()) as u16;
    let mut packet = Vec::with_capacity(usize::from(total_len));
    packet.extend_from_slice(&ipv4_header(total_len, 64, 1));
    packet.extend_from_slice(&icmp);
    ethernet(0x0800, &packet)
}

/// A complete Ethernet + IPv6 + ICMPv6 echo-request frame with a valid
/// pseudo-header checksum, hop limit 64, identifier 1 and the given
/// sequence.
#[must_use]
pub fn ipv6_icmpv6_echo_request(sequence: u16, payload: &[u8]) -> Vec<u8> {
    let mut icmp = Vec::with_capacity(8 + payload.len());
    icmp.extend_from_slice(&[128, 0, 0, 0]); // echo request, checksum zeroed
    icmp.extend_from_slice(&1u16.to_be_bytes());
    icmp.extend_from_slice(&sequence.to_be_bytes());
    icmp.extend_from_slice(payload);
    let check = icmpv6_checksum(&SRC_IP6, &DST_IP6, &icmp);
    icmp[2..4].copy_from_slice(&check.to_be_bytes());

    let mut packet = Vec::with_capacity(40 + icmp.len());
    packet.extend_from_slice(&[0x60, 0, 0, 0]);
    packet.extend_from_slice(&(icmp.len() as u16).to_be_bytes());
    packet.push(58); // next header: ICMPv6
    packet.push(64); // hop limit
    packet.extend_from_slice(&SRC_IP6);
    packet.extend_from_slice(&DST_IP6);
    packet.extend_from_slice(&icmp);
    ethernet(0x86DD, &packet)
}

/// A complete Ethernet + IPv4 + UDP frame. The UDP checksum is zero
/// (legitimate for UDP over IPv4: "no checksum computed").
#[must_use]
pub fn ipv4_udp(source_port: u16, dest_port: u16, payload: &[u8]) -> Vec<u8> {
    let udp_len = (8 + payload.len()) as u16;
    let mut udp = Vec::with_capacity(usize::from(udp_len));
    udp.extend_from_slice(&source_port.to_be_bytes());
    udp.extend_from_slice(&dest_port.to_be_bytes());
    udp.extend_from_slice(&udp_len.to_be_bytes());
    udp.extend_from_slice(&[0, 0]);
    udp.extend_from_slice(payload);

    let total_len = 20 + udp_len;
    let mut packet = Vec::with_capacity(usize::from(total_len));
    packet.extend_from_slice(&ipv4_header(total_len, 64, 17));
    packet.extend_from_slice(&udp);
    ethernet(0x0800, &packet)
}

/// Copy a frame into a fresh buffer with `headroom` zero bytes in front,
/// ready to back a `Frame::with_headroom`.
#[must_use]
pub fn with_headroom(frame: &[u8], headroom: usize) -> Vec<u8> {
    let mut buf = vec![0u8; headroom];
    buf.extend_from_slice(frame);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_frame_is_98_bytes() {
        let frame = ipv4_icmp_echo_request(1, &[0u8; 56]);
        assert_eq!(frame.len(), 98);
        // IPv4 checksum verifies.
        assert_eq!(internet_checksum(&frame[14..34]), 0);
        // ICMP checksum verifies.
        assert_eq!(internet_checksum(&frame[34..]), 0);
    }

    #[test]
    fn icmpv6_checksum_verifies_with_pseudo_header() {
        let frame = ipv6_icmpv6_echo_request(3, &[0u8; 8]);
        let message = &frame[54..];
        assert_eq!(icmpv6_checksum(&SRC_IP6, &DST_IP6, message), 0);
    }

    #[test]
    fn push_vlan_shifts_payload() {
        let frame = ethernet(0x0800, &[0xAA, 0xBB]);
        let tagged = push_vlan(&frame, 7);
        assert_eq!(tagged.len(), frame.len() + 4);
        assert_eq!(&tagged[12..14], &[0x81, 0x00]);
        assert_eq!(&tagged[14..16], &7u16.to_be_bytes());
        assert_eq!(&tagged[16..18], &[0x08, 0x00]);
        assert_eq!(&tagged[18..], &frame[14..]);
    }
}
