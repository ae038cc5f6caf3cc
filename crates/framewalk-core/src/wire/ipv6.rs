//! IPv6 header decoding.

use core::net::Ipv6Addr;

use crate::constants::IPV6_HLEN;
use crate::cursor::Cursor;
use crate::error::FrameError;
use crate::frame::Frame;

/// Decoded IPv6 fixed header. Multi-byte fields are host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv6Hdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub version: u8,
    /// The raw first 32-bit word: version, traffic class, flow label.
    pub vtc_flow: u32,
    pub payload_len: u16,
    pub next_header: u8,
    pub hop_limit: u8,
    pub src: Ipv6Addr,
    pub dst: Ipv6Addr,
}

impl Ipv6Hdr {
    /// Traffic class + flow label, the low 28 bits of the first word.
    #[must_use]
    pub const fn flowinfo(&self) -> u32 {
        self.vtc_flow & 0x0FFF_FFFF
    }
}

/// Decode the fixed 40-byte IPv6 header at the cursor.
pub fn parse_ipv6(cur: &mut Cursor, frame: &Frame<'_>) -> Result<Ipv6Hdr, FrameError> {
    let offset = cur.offset();
    let bytes = cur.take(frame, IPV6_HLEN)?;

    let mut src = [0u8; 16];
    src.copy_from_slice(&bytes[8..24]);
    let mut dst = [0u8; 16];
    dst.copy_from_slice(&bytes[24..40]);

    Ok(Ipv6Hdr {
        offset,
        version: bytes[0] >> 4,
        vtc_flow: u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        payload_len: u16::from_be_bytes([bytes[4], bytes[5]]),
        next_header: bytes[6],
        hop_limit: bytes[7],
        src: Ipv6Addr::from(src),
        dst: Ipv6Addr::from(dst),
    })
}
