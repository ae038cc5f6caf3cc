//! Per-frame entry points.
//!
//! Each public function here is one complete program over a single frame,
//! resolving to exactly one [`Disposition`]. They share a shape: an inner
//! fallible walk over the header chain, and an outer layer that maps any
//! decode or mutation failure to `Pass`. Malformed input is deliberately
//! let through rather than dropped; a frame this engine cannot parse is
//! someone else's to judge.

use framewalk_core::constants::{
    proto_is_vlan, ETH_P_IP, ETH_P_IPV6, ICMPV6_ECHO_REPLY, ICMPV6_ECHO_REQUEST, ICMP_ECHO,
    ICMP_ECHOREPLY, IPPROTO_ICMP, IPPROTO_ICMPV6, IPPROTO_TCP, IPPROTO_UDP,
};
use framewalk_core::mutate::{
    decrement_hop_limit, decrement_ttl, icmp_echo_to_reply, rewrite_tcp_dest_port,
    rewrite_udp_dest_port, set_eth_addrs, set_eth_dst, swap_eth_addrs, swap_ipv4_addrs,
    swap_ipv6_addrs, vlan_pop, vlan_push,
};
use framewalk_core::wire::{
    parse_ethernet, parse_ethernet_vlan, parse_icmp, parse_icmpv6, parse_ipv4, parse_ipv6,
    parse_tcp, parse_udp,
};
use framewalk_core::{Cursor, Frame, FrameError, MacAddr};
use tracing::{debug, trace};

use crate::action::Disposition;
use crate::error::EngineError;
use crate::fib::{IfIndex, RouteLookup, RouteQuery, RouteResult};
use crate::redirect::{RedirectParams, TxPortTable};

/// Egress slot the source-MAC redirect variant transmits through.
const SOURCE_MAC_TX_KEY: u32 = 0;

fn pass_on(err: FrameError) -> Disposition {
    trace!(%err, "letting frame through undecoded");
    Disposition::Pass
}

/// Where a successful route sends the frame: through the egress-port
/// table when the interface is mapped, directly at it otherwise.
fn egress_disposition(ifindex: IfIndex, ports: &TxPortTable) -> Disposition {
    match ports.lookup(ifindex) {
        Some(key) => Disposition::RedirectPort { key },
        None => Disposition::RedirectInterface { ifindex },
    }
}

/// The full route-result policy table.
///
/// Black holes and administrative rejections drop; every "don't know"
/// variant passes the frame up to the normal stack instead.
pub fn route_disposition(result: &RouteResult, ports: &TxPortTable) -> Disposition {
    match result {
        RouteResult::Success { ifindex, .. } => egress_disposition(*ifindex, ports),
        RouteResult::Blackhole | RouteResult::Unreachable | RouteResult::Prohibited => {
            Disposition::Drop
        }
        RouteResult::NotForwarded
        | RouteResult::ForwardingDisabled
        | RouteResult::UnsupportedEncap
        | RouteResult::NoNeighbor
        | RouteResult::FragmentationNeeded => Disposition::Pass,
    }
}

/// FIB-driven forwarding.
///
/// Decodes through the IP header, queries the FIB, and on success
/// decrements the TTL/hop limit and rewrites the link-layer addresses to
/// the resolved next hop. Non-IP, TTL at the floor, and anything the
/// lookup cannot forward resolve per [`route_disposition`].
pub fn route<F: RouteLookup>(
    frame: &mut Frame<'_>,
    fib: &F,
    ports: &TxPortTable,
    ingress: IfIndex,
) -> Disposition {
    match try_route(frame, fib, ports, ingress) {
        Ok(disposition) => disposition,
        Err(EngineError::LookupFailed { result }) => {
            let disposition = route_disposition(&result, ports);
            debug!(?result, %disposition, "route lookup did not forward");
            disposition
        }
        Err(EngineError::Frame(err)) => pass_on(err),
    }
}

fn try_route<F: RouteLookup>(
    frame: &mut Frame<'_>,
    fib: &F,
    ports: &TxPortTable,
    ingress: IfIndex,
) -> Result<Disposition, EngineError> {
    let mut cur = Cursor::new();
    let (eth, _stack, proto) = parse_ethernet_vlan(&mut cur, frame)?;

    match proto {
        ETH_P_IP => {
            let ip = parse_ipv4(&mut cur, frame)?;
            if ip.ttl <= 1 {
                trace!(ttl = ip.ttl, "ttl at floor, not ours to expire");
                return Ok(Disposition::Pass);
            }
            let result = fib.lookup(&RouteQuery::from_ipv4(&ip, ingress));
            let RouteResult::Success {
                ifindex,
                smac,
                dmac,
            } = result
            else {
                return Err(EngineError::LookupFailed { result });
            };
            decrement_ttl(frame, &ip)?;
            set_eth_addrs(frame, &eth, dmac, smac)?;
            debug!(dst = %ip.dst, %ifindex, "forwarding");
            Ok(egress_disposition(ifindex, ports))
        }
        ETH_P_IPV6 => {
            let ip6 = parse_ipv6(&mut cur, frame)?;
            if ip6.hop_limit <= 1 {
                trace!(hop_limit = ip6.hop_limit, "hop limit at floor");
                return Ok(Disposition::Pass);
            }
            let result = fib.lookup(&RouteQuery::from_ipv6(&ip6, ingress));
            let RouteResult::Success {
                ifindex,
                smac,
                dmac,
            } = result
            else {
                return Err(EngineError::LookupFailed { result });
            };
            decrement_hop_limit(frame, &ip6)?;
            set_eth_addrs(frame, &eth, dmac, smac)?;
            debug!(dst = %ip6.dst, %ifindex, "forwarding");
            Ok(egress_disposition(ifindex, ports))
        }
        _ => Ok(Disposition::Pass),
    }
}

/// Turn ICMP/ICMPv6 echo requests around in place and transmit them back
/// out the ingress interface. Everything else passes.
pub fn icmp_echo(frame: &mut Frame<'_>) -> Disposition {
    try_icmp_echo(frame).unwrap_or_else(pass_on)
}

fn try_icmp_echo(frame: &mut Frame<'_>) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let (eth, _stack, proto) = parse_ethernet_vlan(&mut cur, frame)?;

    match proto {
        ETH_P_IP => {
            let ip = parse_ipv4(&mut cur, frame)?;
            if ip.protocol != IPPROTO_ICMP {
                return Ok(Disposition::Pass);
            }
            let icmp = parse_icmp(&mut cur, frame)?;
            if icmp.icmp_type != ICMP_ECHO {
                return Ok(Disposition::Pass);
            }
            swap_ipv4_addrs(frame, &ip)?;
            icmp_echo_to_reply(frame, &icmp, ICMP_ECHOREPLY)?;
            swap_eth_addrs(frame, &eth)?;
            trace!(seq = icmp.sequence, "echo request turned around");
            Ok(Disposition::Transmit)
        }
        ETH_P_IPV6 => {
            let ip6 = parse_ipv6(&mut cur, frame)?;
            if ip6.next_header != IPPROTO_ICMPV6 {
                return Ok(Disposition::Pass);
            }
            let icmp = parse_icmpv6(&mut cur, frame)?;
            if icmp.icmp_type != ICMPV6_ECHO_REQUEST {
                return Ok(Disposition::Pass);
            }
            swap_ipv6_addrs(frame, &ip6)?;
            icmp_echo_to_reply(frame, &icmp, ICMPV6_ECHO_REPLY)?;
            swap_eth_addrs(frame, &eth)?;
            trace!(seq = icmp.sequence, "echo request turned around");
            Ok(Disposition::Transmit)
        }
        _ => Ok(Disposition::Pass),
    }
}

/// Pop the outer VLAN tag if the frame carries one, push tag 1 if it does
/// not. Always passes the frame on afterwards.
pub fn vlan_swap(frame: &mut Frame<'_>) -> Disposition {
    try_vlan_swap(frame).unwrap_or_else(pass_on)
}

fn try_vlan_swap(frame: &mut Frame<'_>) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let eth = parse_ethernet(&mut cur, frame)?;
    if proto_is_vlan(eth.ether_type) {
        let tci = vlan_pop(frame, &eth)?;
        trace!(tci, "popped outer tag");
    } else {
        vlan_push(frame, &eth, 1)?;
        trace!("pushed tag 1");
    }
    Ok(Disposition::Pass)
}

/// Rewrite the destination MAC to a fixed next hop and redirect to a
/// fixed interface.
pub fn redirect_static(frame: &mut Frame<'_>, dmac: MacAddr, ifindex: IfIndex) -> Disposition {
    try_redirect_static(frame, dmac, ifindex).unwrap_or_else(pass_on)
}

fn try_redirect_static(
    frame: &mut Frame<'_>,
    dmac: MacAddr,
    ifindex: IfIndex,
) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let eth = parse_ethernet(&mut cur, frame)?;
    set_eth_dst(frame, &eth, dmac)?;
    Ok(Disposition::RedirectInterface { ifindex })
}

/// Look the sender up in the redirect parameters; if known, rewrite the
/// destination MAC accordingly and redirect through egress slot 0.
/// Unknown senders pass.
pub fn redirect_by_source_mac(frame: &mut Frame<'_>, params: &RedirectParams) -> Disposition {
    try_redirect_by_source_mac(frame, params).unwrap_or_else(pass_on)
}

fn try_redirect_by_source_mac(
    frame: &mut Frame<'_>,
    params: &RedirectParams,
) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let eth = parse_ethernet(&mut cur, frame)?;
    let Some(dmac) = params.lookup(&eth.src) else {
        trace!(src = %eth.src, "no redirect entry for sender");
        return Ok(Disposition::Pass);
    };
    set_eth_dst(frame, &eth, dmac)?;
    Ok(Disposition::RedirectPort {
        key: SOURCE_MAC_TX_KEY,
    })
}

/// Drop ICMP/ICMPv6 echo requests with an even sequence number; pass
/// everything else.
pub fn parity_drop(frame: &mut Frame<'_>) -> Disposition {
    try_parity_drop(frame).unwrap_or_else(pass_on)
}

fn try_parity_drop(frame: &mut Frame<'_>) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let (_eth, _stack, proto) = parse_ethernet_vlan(&mut cur, frame)?;

    let sequence = match proto {
        ETH_P_IP => {
            let ip = parse_ipv4(&mut cur, frame)?;
            if ip.protocol != IPPROTO_ICMP {
                return Ok(Disposition::Pass);
            }
            let icmp = parse_icmp(&mut cur, frame)?;
            if icmp.icmp_type != ICMP_ECHO {
                return Ok(Disposition::Pass);
            }
            icmp.sequence
        }
        ETH_P_IPV6 => {
            let ip6 = parse_ipv6(&mut cur, frame)?;
            if ip6.next_header != IPPROTO_ICMPV6 {
                return Ok(Disposition::Pass);
            }
            let icmp = parse_icmpv6(&mut cur, frame)?;
            if icmp.icmp_type != ICMPV6_ECHO_REQUEST {
                return Ok(Disposition::Pass);
            }
            icmp.sequence
        }
        _ => return Ok(Disposition::Pass),
    };

    if sequence % 2 == 0 {
        debug!(sequence, "dropping even echo");
        Ok(Disposition::Drop)
    } else {
        Ok(Disposition::Pass)
    }
}

/// Decrement the TCP/UDP destination port by one, then pass. Frames that
/// are not TCP or UDP pass untouched.
pub fn port_rewrite(frame: &mut Frame<'_>) -> Disposition {
    try_port_rewrite(frame).unwrap_or_else(pass_on)
}

fn try_port_rewrite(frame: &mut Frame<'_>) -> Result<Disposition, FrameError> {
    let mut cur = Cursor::new();
    let (_eth, _stack, proto) = parse_ethernet_vlan(&mut cur, frame)?;

    let l4 = match proto {
        ETH_P_IP => parse_ipv4(&mut cur, frame)?.protocol,
        ETH_P_IPV6 => parse_ipv6(&mut cur, frame)?.next_header,
        _ => return Ok(Disposition::Pass),
    };

    match l4 {
        IPPROTO_TCP => {
            let tcp = parse_tcp(&mut cur, frame)?;
            let port = rewrite_tcp_dest_port(frame, &tcp)?;
            trace!(port, "rewrote tcp destination port");
        }
        IPPROTO_UDP => {
            let udp = parse_udp(&mut cur, frame)?;
            let port = rewrite_udp_dest_port(frame, &udp)?;
            trace!(port, "rewrote udp destination port");
        }
        _ => {}
    }
    Ok(Disposition::Pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use framewalk_core::constants::{ETH_P_8021Q, UDP_HLEN};
    use framewalk_vectors::{
        ipv4_icmp_echo_request, ipv4_udp, push_vlan, with_headroom, SRC_MAC,
    };

    #[test]
    fn vlan_swap_pops_tagged_frame() {
        let tagged = push_vlan(&ipv4_icmp_echo_request(1, &[0u8; 16]), 42);
        let mut buf = tagged.clone();
        let mut frame = Frame::new(&mut buf);

        assert_eq!(vlan_swap(&mut frame), Disposition::Pass);
        assert_eq!(frame.len(), tagged.len() - 4);

        let mut cur = Cursor::new();
        let eth = parse_ethernet(&mut cur, &frame).unwrap();
        assert_eq!(eth.ether_type, ETH_P_IP);
    }

    #[test]
    fn vlan_swap_pushes_on_untagged_frame() {
        let plain = ipv4_icmp_echo_request(1, &[0u8; 16]);
        let mut buf = with_headroom(&plain, 4);
        let mut frame = Frame::with_headroom(&mut buf, 4, plain.len()).unwrap();

        assert_eq!(vlan_swap(&mut frame), Disposition::Pass);
        assert_eq!(frame.len(), plain.len() + 4);

        let mut cur = Cursor::new();
        let (eth, stack, proto) = parse_ethernet_vlan(&mut cur, &frame).unwrap();
        assert_eq!(eth.ether_type, ETH_P_8021Q);
        assert_eq!(stack.outer().unwrap().tci.vid(), 1);
        assert_eq!(proto, ETH_P_IP);
    }

    #[test]
    fn vlan_swap_without_headroom_passes_unchanged() {
        let plain = ipv4_icmp_echo_request(1, &[0u8; 16]);
        let mut buf = plain.clone();
        let mut frame = Frame::new(&mut buf);

        assert_eq!(vlan_swap(&mut frame), Disposition::Pass);
        assert_eq!(frame.as_bytes(), &plain[..]);
    }

    #[test]
    fn redirect_static_rewrites_dest_mac() {
        let mut buf = ipv4_icmp_echo_request(1, &[0u8; 16]);
        let mut frame = Frame::new(&mut buf);
        let next_hop = MacAddr::new([0x02, 0, 0, 0, 0, 0x33]);

        let disposition = redirect_static(&mut frame, next_hop, IfIndex(6));
        assert_eq!(
            disposition,
            Disposition::RedirectInterface {
                ifindex: IfIndex(6)
            }
        );

        let mut cur = Cursor::new();
        let eth = parse_ethernet(&mut cur, &frame).unwrap();
        assert_eq!(eth.dst, next_hop);
        assert_eq!(eth.src, MacAddr::new(SRC_MAC));
    }

    #[test]
    fn source_mac_redirect_hits_and_misses() {
        let mut params = RedirectParams::new();
        let dmac = MacAddr::new([0x02, 0, 0, 0, 0, 0x44]);
        params.insert(MacAddr::new(SRC_MAC), dmac);

        let mut buf = ipv4_icmp_echo_request(1, &[0u8; 16]);
        let mut frame = Frame::new(&mut buf);
        assert_eq!(
            redirect_by_source_mac(&mut frame, &params),
            Disposition::RedirectPort { key: 0 }
        );
        let mut cur = Cursor::new();
        assert_eq!(parse_ethernet(&mut cur, &frame).unwrap().dst, dmac);

        // Unknown sender passes with the frame untouched.
        let empty = RedirectParams::new();
        let original = ipv4_icmp_echo_request(1, &[0u8; 16]);
        let mut buf = original.clone();
        let mut frame = Frame::new(&mut buf);
        assert_eq!(
            redirect_by_source_mac(&mut frame, &empty),
            Disposition::Pass
        );
        assert_eq!(frame.as_bytes(), &original[..]);
    }

    #[test]
    fn port_rewrite_decrements_udp_port() {
        let mut buf = ipv4_udp(40000, 2000, &[0u8; 12]);
        let mut frame = Frame::new(&mut buf);

        assert_eq!(port_rewrite(&mut frame), Disposition::Pass);

        let mut cur = Cursor::new();
        let (_, _, proto) = parse_ethernet_vlan(&mut cur, &frame).unwrap();
        assert_eq!(proto, ETH_P_IP);
        let _ip = parse_ipv4(&mut cur, &frame).unwrap();
        let udp = parse_udp(&mut cur, &frame).unwrap();
        assert_eq!(udp.dest, 1999);
        assert_eq!(usize::from(udp.length), UDP_HLEN + 12);
    }

    #[test]
    fn port_rewrite_passes_icmp_untouched() {
        let original = ipv4_icmp_echo_request(5, &[0u8; 16]);
        let mut buf = original.clone();
        let mut frame = Frame::new(&mut buf);

        assert_eq!(port_rewrite(&mut frame), Disposition::Pass);
        assert_eq!(frame.as_bytes(), &original[..]);
    }
}
