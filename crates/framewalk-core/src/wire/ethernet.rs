//! Ethernet header and VLAN stack decoding.

use crate::constants::{proto_is_vlan, ETH_HLEN, VLAN_HLEN, VLAN_MAX_DEPTH};
use crate::cursor::Cursor;
use crate::error::FrameError;
use crate::frame::Frame;
use crate::types::{MacAddr, VlanTci};

/// Decoded Ethernet header. `ether_type` is host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub dst: MacAddr,
    pub src: MacAddr,
    pub ether_type: u16,
}

/// One decoded VLAN tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlanHdr {
    /// Byte offset of this tag within the frame.
    pub offset: usize,
    pub tci: VlanTci,
    /// Ether-type of the encapsulated payload (host order).
    pub encapsulated_proto: u16,
}

/// Up to [`VLAN_MAX_DEPTH`] decoded VLAN tags, outermost first.
#[derive(Debug, Clone, Copy, Default)]
pub struct VlanStack {
    tags: [Option<VlanHdr>; VLAN_MAX_DEPTH],
    depth: usize,
}

impl VlanStack {
    /// Number of tags actually decoded.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// The outermost tag, if any.
    #[must_use]
    pub fn outer(&self) -> Option<&VlanHdr> {
        self.tags[0].as_ref()
    }

    /// Iterate the decoded tags, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &VlanHdr> {
        self.tags.iter().take(self.depth).filter_map(Option::as_ref)
    }

    fn push(&mut self, tag: VlanHdr) {
        self.tags[self.depth] = Some(tag);
        self.depth += 1;
    }
}

/// Decode the fixed 14-byte Ethernet header at the cursor.
pub fn parse_ethernet(cur: &mut Cursor, frame: &Frame<'_>) -> Result<EthernetHdr, FrameError> {
    let offset = cur.offset();
    let bytes = cur.take(frame, ETH_HLEN)?;
    Ok(EthernetHdr {
        offset,
        dst: MacAddr::new([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]),
        src: MacAddr::new([bytes[6], bytes[7], bytes[8], bytes[9], bytes[10], bytes[11]]),
        ether_type: u16::from_be_bytes([bytes[12], bytes[13]]),
    })
}

/// Walk the VLAN stack starting from `ether_type`, at most
/// [`VLAN_MAX_DEPTH`] tags deep.
///
/// Returns the decoded tags and the final non-VLAN (or depth-bounded)
/// ether-type. The depth bound is a hard termination guarantee, not an
/// error: a deeper stack simply stops with the last ether-type read. A
/// truncated tag likewise stops the walk without failing, leaving the
/// cursor before the partial tag; the caller's next read reports the
/// truncation.
pub fn parse_vlan_stack(
    cur: &mut Cursor,
    frame: &Frame<'_>,
    ether_type: u16,
) -> (VlanStack, u16) {
    let mut stack = VlanStack::default();
    let mut proto = ether_type;

    for _ in 0..VLAN_MAX_DEPTH {
        if !proto_is_vlan(proto) {
            break;
        }
        let offset = cur.offset();
        let Ok(bytes) = cur.take(frame, VLAN_HLEN) else {
            break;
        };
        let tag = VlanHdr {
            offset,
            tci: VlanTci::new(u16::from_be_bytes([bytes[0], bytes[1]])),
            encapsulated_proto: u16::from_be_bytes([bytes[2], bytes[3]]),
        };
        proto = tag.encapsulated_proto;
        stack.push(tag);
    }

    (stack, proto)
}

/// Decode Ethernet plus any VLAN stack in one step, returning the final
/// payload ether-type. This is the usual entry point for a frame walk.
pub fn parse_ethernet_vlan(
    cur: &mut Cursor,
    frame: &Frame<'_>,
) -> Result<(EthernetHdr, VlanStack, u16), FrameError> {
    let eth = parse_ethernet(cur, frame)?;
    let (stack, proto) = parse_vlan_stack(cur, frame, eth.ether_type);
    Ok((eth, stack, proto))
}
