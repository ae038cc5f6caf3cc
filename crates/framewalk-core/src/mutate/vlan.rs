//! VLAN tag push and pop: the two length-changing mutations.
//!
//! Both operations slide the frame's front window within pre-reserved
//! capacity and rewrite the Ethernet header at its new position. They
//! invalidate every previously taken header view and any cursor; callers
//! restart parsing from a fresh [`Cursor`](crate::Cursor) afterwards.

use crate::constants::{proto_is_vlan, ETH_HLEN, ETH_P_8021Q, VLAN_HLEN};
use crate::error::FrameError;
use crate::frame::Frame;
use crate::wire::EthernetHdr;

/// Pop the outermost VLAN tag, returning its host-order TCI word.
///
/// Steps, each bounds-checked independently:
/// 1. the Ethernet header's ether-type must be a VLAN TPID;
/// 2. a full VLAN tag must fit after the Ethernet header;
/// 3. snapshot the Ethernet header and record the tag's TCI and
///    encapsulated protocol;
/// 4. shrink the frame at the front by one tag width;
/// 5. write the snapshot back at the new front with the encapsulated
///    protocol as its ether-type.
///
/// Failures before step 4 leave the frame unchanged. Once the shrink has
/// committed there is no rollback of the length change; step 5 cannot
/// fail bounds-wise because steps 1–2 proved the shrunk frame still holds
/// a full Ethernet header, but any error is propagated rather than
/// swallowed.
pub fn vlan_pop(frame: &mut Frame<'_>, eth: &EthernetHdr) -> Result<u16, FrameError> {
    debug_assert_eq!(eth.offset, 0, "vlan pop operates on the outermost header");
    let eth_bytes = frame.slice(eth.offset, ETH_HLEN)?;
    let ether_type = u16::from_be_bytes([eth_bytes[12], eth_bytes[13]]);
    if !proto_is_vlan(ether_type) {
        return Err(FrameError::UnsupportedProtocol { proto: ether_type });
    }

    let mut snapshot = [0u8; ETH_HLEN];
    snapshot.copy_from_slice(eth_bytes);

    let tag = frame.slice(eth.offset + ETH_HLEN, VLAN_HLEN)?;
    let tci = u16::from_be_bytes([tag[0], tag[1]]);
    let encapsulated = [tag[2], tag[3]];

    frame.shrink_head(VLAN_HLEN)?;

    let restored = frame.slice_mut(eth.offset, ETH_HLEN)?;
    restored.copy_from_slice(&snapshot);
    restored[12..14].copy_from_slice(&encapsulated);

    Ok(tci)
}

/// Push a new VLAN tag with the given host-order TCI word between the
/// Ethernet header and its payload.
///
/// Fails with `UnsupportedProtocol` if a tag is already present, and with
/// `CapacityExceeded` — before any byte is written — if the frame has no
/// headroom for the tag. On success the outer ether-type becomes 802.1Q.
pub fn vlan_push(frame: &mut Frame<'_>, eth: &EthernetHdr, tci: u16) -> Result<(), FrameError> {
    debug_assert_eq!(eth.offset, 0, "vlan push operates on the outermost header");
    let eth_bytes = frame.slice(eth.offset, ETH_HLEN)?;
    let ether_type = [eth_bytes[12], eth_bytes[13]];
    if proto_is_vlan(u16::from_be_bytes(ether_type)) {
        return Err(FrameError::UnsupportedProtocol {
            proto: u16::from_be_bytes(ether_type),
        });
    }

    let mut snapshot = [0u8; ETH_HLEN];
    snapshot.copy_from_slice(eth_bytes);

    frame.grow_head(VLAN_HLEN)?;

    let hdr = frame.slice_mut(eth.offset, ETH_HLEN + VLAN_HLEN)?;
    hdr[..ETH_HLEN].copy_from_slice(&snapshot);
    hdr[12..14].copy_from_slice(&ETH_P_8021Q.to_be_bytes());
    hdr[ETH_HLEN..ETH_HLEN + 2].copy_from_slice(&tci.to_be_bytes());
    hdr[ETH_HLEN + 2..ETH_HLEN + VLAN_HLEN].copy_from_slice(&ether_type);

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::wire::parse_ethernet;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// For any untagged frame with enough headroom,
        /// pop(push(frame, tci)) is byte-identical to the original frame
        /// and returns the pushed TCI.
        #[test]
        fn push_pop_roundtrip(
            payload in proptest::collection::vec(any::<u8>(), 0..128),
            tci: u16,
            ether_type in any::<u16>().prop_filter(
                "untagged",
                |t| !crate::constants::proto_is_vlan(*t),
            ),
        ) {
            let mut buf = vec![0u8; VLAN_HLEN];
            buf.extend_from_slice(&[0x02, 0, 0, 0, 0, 0x01]);
            buf.extend_from_slice(&[0x02, 0, 0, 0, 0, 0x02]);
            buf.extend_from_slice(&ether_type.to_be_bytes());
            buf.extend_from_slice(&payload);
            let original = buf[VLAN_HLEN..].to_vec();

            let len = buf.len() - VLAN_HLEN;
            let mut frame = Frame::with_headroom(&mut buf, VLAN_HLEN, len).unwrap();

            let mut cur = Cursor::new();
            let eth = parse_ethernet(&mut cur, &frame).unwrap();
            vlan_push(&mut frame, &eth, tci).unwrap();

            let mut cur = Cursor::new();
            let tagged = parse_ethernet(&mut cur, &frame).unwrap();
            let popped = vlan_pop(&mut frame, &tagged).unwrap();

            prop_assert_eq!(popped, tci);
            prop_assert_eq!(frame.as_bytes(), &original[..]);
        }
    }
}
