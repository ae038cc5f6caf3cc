//! Synthetic test frames for the framewalk crates.
//!
//! Builders produce deterministic, fully checksummed byte vectors for the
//! header chains the engine handles, and `checksum` holds the from-scratch
//! RFC 1071 reference that incremental updates are compared against.
//! Everything here is plain `Vec<u8>` so the crate stays independent of
//! `framewalk-core` and usable from any test context.

pub mod checksum;
pub mod frames;

pub use frames::{
    ethernet, ipv4_icmp_echo_request, ipv4_udp, ipv6_icmpv6_echo_request, push_vlan,
    with_headroom, DST_IP4, DST_IP6, DST_MAC, SRC_IP4, SRC_IP6, SRC_MAC,
};
