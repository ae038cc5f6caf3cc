//! In-place frame mutation primitives.
//!
//! Every operation here re-validates its byte span against the frame's
//! current end before touching it, even when a decoder already did — a
//! view may be stale if the frame changed length since it was taken.
//! Field values are read live from the frame at mutation time, not from
//! the view snapshot.

pub mod vlan;

pub use vlan::{vlan_pop, vlan_push};

use crate::constants::{ETH_ALEN, ETH_HLEN, IPV4_HLEN_MIN, IPV6_HLEN};
use crate::csum::{csum16_add, csum_replace_u16};
use crate::error::FrameError;
use crate::frame::Frame;
use crate::types::MacAddr;
use crate::wire::{EthernetHdr, IcmpHdr, Ipv4Hdr, Ipv6Hdr, TcpHdr, UdpHdr};

/// Exchange the source and destination MAC addresses in place.
pub fn swap_eth_addrs(frame: &mut Frame<'_>, eth: &EthernetHdr) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(eth.offset, ETH_HLEN)?;
    let mut tmp = [0u8; ETH_ALEN];
    tmp.copy_from_slice(&hdr[..ETH_ALEN]);
    hdr.copy_within(ETH_ALEN..2 * ETH_ALEN, 0);
    hdr[ETH_ALEN..2 * ETH_ALEN].copy_from_slice(&tmp);
    Ok(())
}

/// Overwrite the destination MAC address in place.
pub fn set_eth_dst(frame: &mut Frame<'_>, eth: &EthernetHdr, dst: MacAddr) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(eth.offset, ETH_HLEN)?;
    hdr[..ETH_ALEN].copy_from_slice(dst.as_ref());
    Ok(())
}

/// Overwrite both MAC addresses in place, the rewrite a forwarding path
/// applies after resolving the next hop.
pub fn set_eth_addrs(
    frame: &mut Frame<'_>,
    eth: &EthernetHdr,
    dst: MacAddr,
    src: MacAddr,
) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(eth.offset, ETH_HLEN)?;
    hdr[..ETH_ALEN].copy_from_slice(dst.as_ref());
    hdr[ETH_ALEN..2 * ETH_ALEN].copy_from_slice(src.as_ref());
    Ok(())
}

/// Exchange the IPv4 source and destination addresses in place.
///
/// No checksum adjustment: both 32-bit fields move symmetrically, so the
/// one's-complement sum over the header is unchanged.
pub fn swap_ipv4_addrs(frame: &mut Frame<'_>, ip: &Ipv4Hdr) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(ip.offset, IPV4_HLEN_MIN)?;
    let mut tmp = [0u8; 4];
    tmp.copy_from_slice(&hdr[12..16]);
    hdr.copy_within(16..20, 12);
    hdr[16..20].copy_from_slice(&tmp);
    Ok(())
}

/// Exchange the IPv6 source and destination addresses in place.
pub fn swap_ipv6_addrs(frame: &mut Frame<'_>, ip6: &Ipv6Hdr) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(ip6.offset, IPV6_HLEN)?;
    let mut tmp = [0u8; 16];
    tmp.copy_from_slice(&hdr[8..24]);
    hdr.copy_within(24..40, 8);
    hdr[24..40].copy_from_slice(&tmp);
    Ok(())
}

/// Decrement the IPv4 TTL by one with an incremental checksum patch,
/// returning the new TTL.
///
/// Decrementing the high byte of the TTL/protocol word subtracts 0x0100
/// from it, which adds 0x0100 to the one's-complement checksum (with the
/// end-around carry folded in). Fails with `TtlExpired` if the live TTL
/// is already at or below 1, leaving the frame untouched.
pub fn decrement_ttl(frame: &mut Frame<'_>, ip: &Ipv4Hdr) -> Result<u8, FrameError> {
    let hdr = frame.slice_mut(ip.offset, IPV4_HLEN_MIN)?;
    let ttl = hdr[8];
    if ttl <= 1 {
        return Err(FrameError::TtlExpired { ttl });
    }

    let check = u16::from_be_bytes([hdr[10], hdr[11]]);
    let check = csum16_add(check, 0x0100);
    hdr[8] = ttl - 1;
    hdr[10..12].copy_from_slice(&check.to_be_bytes());
    Ok(ttl - 1)
}

/// Decrement the IPv6 hop limit by one, returning the new value. IPv6
/// has no header checksum, so no adjustment is needed. Fails with
/// `TtlExpired` if the live hop limit is already at or below 1.
pub fn decrement_hop_limit(frame: &mut Frame<'_>, ip6: &Ipv6Hdr) -> Result<u8, FrameError> {
    let hdr = frame.slice_mut(ip6.offset, IPV6_HLEN)?;
    let hop_limit = hdr[7];
    if hop_limit <= 1 {
        return Err(FrameError::TtlExpired { ttl: hop_limit });
    }
    hdr[7] = hop_limit - 1;
    Ok(hop_limit - 1)
}

/// Rewrite an ICMP/ICMPv6 echo request into the matching reply type,
/// patching the checksum from the before/after values of the 16-bit word
/// that holds the type and code.
pub fn icmp_echo_to_reply(
    frame: &mut Frame<'_>,
    icmp: &IcmpHdr,
    reply_type: u8,
) -> Result<(), FrameError> {
    let hdr = frame.slice_mut(icmp.offset, 4)?;
    let old_word = u16::from_be_bytes([hdr[0], hdr[1]]);
    hdr[0] = reply_type;
    let new_word = u16::from_be_bytes([hdr[0], hdr[1]]);

    let check = u16::from_be_bytes([hdr[2], hdr[3]]);
    let check = csum_replace_u16(check, old_word, new_word);
    hdr[2..4].copy_from_slice(&check.to_be_bytes());
    Ok(())
}

/// Decrement the TCP destination port by one.
///
/// The transport checksum is deliberately left alone; receivers that
/// verify it will discard the segment. See DESIGN.md before relying on
/// this.
pub fn rewrite_tcp_dest_port(frame: &mut Frame<'_>, tcp: &TcpHdr) -> Result<u16, FrameError> {
    rewrite_dest_port_at(frame, tcp.offset)
}

/// Decrement the UDP destination port by one. Same checksum caveat as
/// [`rewrite_tcp_dest_port`].
pub fn rewrite_udp_dest_port(frame: &mut Frame<'_>, udp: &UdpHdr) -> Result<u16, FrameError> {
    rewrite_dest_port_at(frame, udp.offset)
}

fn rewrite_dest_port_at(frame: &mut Frame<'_>, offset: usize) -> Result<u16, FrameError> {
    // Destination port is the second 16-bit word for both TCP and UDP.
    let bytes = frame.slice_mut(offset + 2, 2)?;
    let port = u16::from_be_bytes([bytes[0], bytes[1]]).wrapping_sub(1);
    bytes.copy_from_slice(&port.to_be_bytes());
    Ok(port)
}
