//! TCP and UDP header decoding.
//!
//! Only the port-level view this engine needs: the fixed portions are
//! decoded, options and payload are left untouched.

use crate::constants::{TCP_HLEN_MIN, UDP_HLEN};
use crate::cursor::Cursor;
use crate::error::FrameError;
use crate::frame::Frame;

/// Decoded TCP header (fixed portion). Ports are host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpHdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub source: u16,
    pub dest: u16,
    /// Data offset in 32-bit words, as declared on the wire.
    pub data_offset: u8,
}

/// Decoded UDP header. Multi-byte fields are host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpHdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub source: u16,
    pub dest: u16,
    pub length: u16,
    pub checksum: u16,
}

/// Decode the fixed 20-byte TCP header at the cursor.
pub fn parse_tcp(cur: &mut Cursor, frame: &Frame<'_>) -> Result<TcpHdr, FrameError> {
    let offset = cur.offset();
    let bytes = cur.take(frame, TCP_HLEN_MIN)?;
    Ok(TcpHdr {
        offset,
        source: u16::from_be_bytes([bytes[0], bytes[1]]),
        dest: u16::from_be_bytes([bytes[2], bytes[3]]),
        data_offset: bytes[12] >> 4,
    })
}

/// Decode the 8-byte UDP header at the cursor.
pub fn parse_udp(cur: &mut Cursor, frame: &Frame<'_>) -> Result<UdpHdr, FrameError> {
    let offset = cur.offset();
    let bytes = cur.take(frame, UDP_HLEN)?;
    Ok(UdpHdr {
        offset,
        source: u16::from_be_bytes([bytes[0], bytes[1]]),
        dest: u16::from_be_bytes([bytes[2], bytes[3]]),
        length: u16::from_be_bytes([bytes[4], bytes[5]]),
        checksum: u16::from_be_bytes([bytes[6], bytes[7]]),
    })
}
