//! Route lookup: the query/result types, the lookup trait the engine is
//! generic over, and an in-memory table implementation.
//!
//! The engine treats the FIB as a linearizable read-only key-value lookup;
//! populating and maintaining routes belongs to a control plane outside
//! this crate.

use core::fmt;
use std::collections::HashMap;
use std::net::IpAddr;

use framewalk_core::wire::{Ipv4Hdr, Ipv6Hdr};
use framewalk_core::MacAddr;

/// A network interface index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct IfIndex(pub u32);

impl fmt::Display for IfIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{}", self.0)
    }
}

/// One route query, built from a decoded IP header plus ingress context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    pub src: IpAddr,
    pub dst: IpAddr,
    pub l4_protocol: u8,
    /// IPv4 total length / IPv6 payload length, host order.
    pub tot_len: u16,
    /// IPv4 TOS byte; zero for IPv6.
    pub tos: u8,
    /// IPv6 flow info (traffic class + flow label); zero for IPv4.
    pub flowinfo: u32,
    pub ingress: IfIndex,
}

impl RouteQuery {
    pub fn from_ipv4(hdr: &Ipv4Hdr, ingress: IfIndex) -> Self {
        Self {
            src: IpAddr::V4(hdr.src),
            dst: IpAddr::V4(hdr.dst),
            l4_protocol: hdr.protocol,
            tot_len: hdr.total_len,
            tos: hdr.tos,
            flowinfo: 0,
            ingress,
        }
    }

    pub fn from_ipv6(hdr: &Ipv6Hdr, ingress: IfIndex) -> Self {
        Self {
            src: IpAddr::V6(hdr.src),
            dst: IpAddr::V6(hdr.dst),
            l4_protocol: hdr.next_header,
            tot_len: hdr.payload_len,
            tos: 0,
            flowinfo: hdr.flowinfo(),
            ingress,
        }
    }
}

/// Outcome of a route lookup.
///
/// `Success` carries everything the forwarding rewrite needs: the egress
/// interface and the resolved link-layer addresses. The failure variants
/// mirror the kernel FIB result codes; how each maps to a disposition is
/// the engine's policy, not the table's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RouteResult {
    Success {
        ifindex: IfIndex,
        smac: MacAddr,
        dmac: MacAddr,
    },
    Blackhole,
    Unreachable,
    Prohibited,
    NotForwarded,
    ForwardingDisabled,
    UnsupportedEncap,
    NoNeighbor,
    FragmentationNeeded,
}

/// Synchronous, side-effect-free route lookup.
pub trait RouteLookup {
    fn lookup(&self, query: &RouteQuery) -> RouteResult;
}

/// In-memory FIB keyed by exact destination address.
///
/// Misses resolve to [`RouteResult::NotForwarded`], which the engine
/// passes up to the normal stack rather than dropping.
pub struct StaticFib {
    routes: HashMap<IpAddr, RouteResult>,
}

impl StaticFib {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Install a forwarding entry for `dst`.
    pub fn insert_route(&mut self, dst: IpAddr, ifindex: IfIndex, smac: MacAddr, dmac: MacAddr) {
        self.routes.insert(
            dst,
            RouteResult::Success {
                ifindex,
                smac,
                dmac,
            },
        );
    }

    /// Install a non-success outcome for `dst` (blackhole, prohibited...).
    pub fn insert_outcome(&mut self, dst: IpAddr, outcome: RouteResult) {
        self.routes.insert(dst, outcome);
    }

    #[must_use]
    pub fn get(&self, dst: &IpAddr) -> Option<&RouteResult> {
        self.routes.get(dst)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for StaticFib {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteLookup for StaticFib {
    fn lookup(&self, query: &RouteQuery) -> RouteResult {
        self.routes
            .get(&query.dst)
            .copied()
            .unwrap_or(RouteResult::NotForwarded)
    }
}
