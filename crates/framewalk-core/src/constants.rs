//! Wire-format constants: header sizes, ether-types, IP protocol numbers
//! and ICMP message types.
//!
//! Numeric values match the Linux uapi definitions; everything multi-byte
//! is big-endian on the wire and converted at the read/write boundary.

/// Ethernet header: 6B destination MAC + 6B source MAC + 2B ether-type.
pub const ETH_HLEN: usize = 14;
/// Length of a MAC address.
pub const ETH_ALEN: usize = 6;
/// VLAN tag: 2B TCI + 2B encapsulated ether-type.
pub const VLAN_HLEN: usize = 4;
/// Fixed portion of an IPv4 header; options extend it up to 60 bytes.
pub const IPV4_HLEN_MIN: usize = 20;
/// IPv6 headers are always exactly 40 bytes.
pub const IPV6_HLEN: usize = 40;
/// ICMP/ICMPv6 echo header: type, code, checksum, identifier, sequence.
pub const ICMP_HLEN: usize = 8;
/// TCP header without options.
pub const TCP_HLEN_MIN: usize = 20;
/// UDP header.
pub const UDP_HLEN: usize = 8;

/// Hard bound on the VLAN stack walk. Iteration stops here no matter how
/// many tags the input actually encodes.
pub const VLAN_MAX_DEPTH: usize = 5;

// Ether-types (host order).
pub const ETH_P_IP: u16 = 0x0800;
pub const ETH_P_IPV6: u16 = 0x86DD;
pub const ETH_P_8021Q: u16 = 0x8100;
pub const ETH_P_8021AD: u16 = 0x88A8;

// IP protocol numbers.
pub const IPPROTO_ICMP: u8 = 1;
pub const IPPROTO_TCP: u8 = 6;
pub const IPPROTO_UDP: u8 = 17;
pub const IPPROTO_ICMPV6: u8 = 58;

// ICMP message types.
pub const ICMP_ECHO: u8 = 8;
pub const ICMP_ECHOREPLY: u8 = 0;
pub const ICMPV6_ECHO_REQUEST: u8 = 128;
pub const ICMPV6_ECHO_REPLY: u8 = 129;

/// Is this ether-type one of the two reserved VLAN tag-protocol IDs?
#[must_use]
pub fn proto_is_vlan(ether_type: u16) -> bool {
    ether_type == ETH_P_8021Q || ether_type == ETH_P_8021AD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vlan_tpids_recognized() {
        assert!(proto_is_vlan(ETH_P_8021Q));
        assert!(proto_is_vlan(ETH_P_8021AD));
        assert!(!proto_is_vlan(ETH_P_IP));
        assert!(!proto_is_vlan(ETH_P_IPV6));
        assert!(!proto_is_vlan(0));
    }
}
