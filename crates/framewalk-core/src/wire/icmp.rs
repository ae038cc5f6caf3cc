//! ICMP and ICMPv6 header decoding.
//!
//! Both protocols share the echo message layout this engine cares about:
//! type, code, checksum, identifier, sequence. The two parse functions
//! exist so call sites stay explicit about which protocol they expect.

use crate::constants::ICMP_HLEN;
use crate::cursor::Cursor;
use crate::error::FrameError;
use crate::frame::Frame;

/// Decoded ICMP/ICMPv6 echo-shaped header. Multi-byte fields host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcmpHdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence: u16,
}

fn parse(cur: &mut Cursor, frame: &Frame<'_>) -> Result<IcmpHdr, FrameError> {
    let offset = cur.offset();
    let bytes = cur.take(frame, ICMP_HLEN)?;
    Ok(IcmpHdr {
        offset,
        icmp_type: bytes[0],
        code: bytes[1],
        checksum: u16::from_be_bytes([bytes[2], bytes[3]]),
        identifier: u16::from_be_bytes([bytes[4], bytes[5]]),
        sequence: u16::from_be_bytes([bytes[6], bytes[7]]),
    })
}

/// Decode the fixed 8-byte ICMP header at the cursor.
pub fn parse_icmp(cur: &mut Cursor, frame: &Frame<'_>) -> Result<IcmpHdr, FrameError> {
    parse(cur, frame)
}

/// Decode the fixed 8-byte ICMPv6 header at the cursor.
pub fn parse_icmpv6(cur: &mut Cursor, frame: &Frame<'_>) -> Result<IcmpHdr, FrameError> {
    parse(cur, frame)
}
