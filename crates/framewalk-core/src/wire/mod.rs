//! Bounds-checked header decoders.
//!
//! Each decoder reads one protocol header at the cursor, returns an owned
//! fixed-size view of its fields (host order) carrying the header's byte
//! offset within the frame, and advances the cursor past the header. On
//! failure the cursor is unchanged and no view is produced.
//!
//! The views are snapshots: any mutation of the frame that changes its
//! length (VLAN push/pop) invalidates every previously taken view, and
//! parsing must restart from a fresh [`Cursor`](crate::Cursor).

pub mod ethernet;
pub mod icmp;
pub mod ipv4;
pub mod ipv6;
pub mod transport;

pub use ethernet::{parse_ethernet, parse_ethernet_vlan, parse_vlan_stack, EthernetHdr, VlanHdr, VlanStack};
pub use icmp::{parse_icmp, parse_icmpv6, IcmpHdr};
pub use ipv4::{parse_ipv4, Ipv4Hdr};
pub use ipv6::{parse_ipv6, Ipv6Hdr};
pub use transport::{parse_tcp, parse_udp, TcpHdr, UdpHdr};
