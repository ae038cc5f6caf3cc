//! IPv4 header decoding.

use core::net::Ipv4Addr;

use crate::constants::IPV4_HLEN_MIN;
use crate::cursor::Cursor;
use crate::error::FrameError;
use crate::frame::Frame;

/// Decoded IPv4 header. Multi-byte fields are host order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Hdr {
    /// Byte offset of this header within the frame.
    pub offset: usize,
    pub version: u8,
    /// Header length in 32-bit words, as declared on the wire.
    pub ihl: u8,
    pub tos: u8,
    pub total_len: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub src: Ipv4Addr,
    pub dst: Ipv4Addr,
}

impl Ipv4Hdr {
    /// Declared header length in bytes (`ihl * 4`).
    #[must_use]
    pub fn header_len(&self) -> usize {
        usize::from(self.ihl) * 4
    }
}

/// Decode the IPv4 header at the cursor, advancing past any options.
///
/// Reads the fixed 20 bytes first, then re-validates the declared `ihl`
/// against the frame end before skipping the variable options portion.
/// The declared length is never trusted: too short is `BadHeaderLength`,
/// past the frame end is `Truncated`, and in both cases the cursor is
/// left where it started.
pub fn parse_ipv4(cur: &mut Cursor, frame: &Frame<'_>) -> Result<Ipv4Hdr, FrameError> {
    let mut scratch = *cur;
    let offset = scratch.offset();
    let bytes = scratch.take(frame, IPV4_HLEN_MIN)?;

    let hdr = Ipv4Hdr {
        offset,
        version: bytes[0] >> 4,
        ihl: bytes[0] & 0x0F,
        tos: bytes[1],
        total_len: u16::from_be_bytes([bytes[2], bytes[3]]),
        ttl: bytes[8],
        protocol: bytes[9],
        checksum: u16::from_be_bytes([bytes[10], bytes[11]]),
        src: Ipv4Addr::new(bytes[12], bytes[13], bytes[14], bytes[15]),
        dst: Ipv4Addr::new(bytes[16], bytes[17], bytes[18], bytes[19]),
    };

    let header_len = hdr.header_len();
    if header_len < IPV4_HLEN_MIN {
        return Err(FrameError::BadHeaderLength {
            declared: header_len,
            min: IPV4_HLEN_MIN,
        });
    }
    scratch.advance(frame, header_len - IPV4_HLEN_MIN)?;

    *cur = scratch;
    Ok(hdr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::IPPROTO_ICMP;

    fn ipv4_header(ihl: u8, ttl: u8, options: &[u8]) -> Vec<u8> {
        let mut h = vec![0u8; IPV4_HLEN_MIN];
        h[0] = 0x40 | ihl;
        h[1] = 0x00;
        let total = (usize::from(ihl) * 4 + 8) as u16;
        h[2..4].copy_from_slice(&total.to_be_bytes());
        h[8] = ttl;
        h[9] = IPPROTO_ICMP;
        h[10..12].copy_from_slice(&0x1234u16.to_be_bytes());
        h[12..16].copy_from_slice(&[10, 0, 0, 1]);
        h[16..20].copy_from_slice(&[10, 0, 0, 2]);
        h.extend_from_slice(options);
        h
    }

    #[test]
    fn parses_minimal_header() {
        let mut buf = ipv4_header(5, 64, &[]);
        let frame = Frame::new(&mut buf);
        let mut cur = Cursor::new();

        let hdr = parse_ipv4(&mut cur, &frame).unwrap();
        assert_eq!(hdr.version, 4);
        assert_eq!(hdr.ihl, 5);
        assert_eq!(hdr.ttl, 64);
        assert_eq!(hdr.protocol, IPPROTO_ICMP);
        assert_eq!(hdr.checksum, 0x1234);
        assert_eq!(hdr.src, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(hdr.dst, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(cur.offset(), IPV4_HLEN_MIN);
    }

    #[test]
    fn advances_past_options() {
        let mut buf = ipv4_header(6, 64, &[0u8; 4]);
        let frame = Frame::new(&mut buf);
        let mut cur = Cursor::new();

        let hdr = parse_ipv4(&mut cur, &frame).unwrap();
        assert_eq!(hdr.header_len(), 24);
        assert_eq!(cur.offset(), 24);
    }

    #[test]
    fn declared_options_past_end_truncated() {
        // IHL says 24 bytes but only 20 are present.
        let mut buf = ipv4_header(6, 64, &[]);
        let frame = Frame::new(&mut buf);
        let mut cur = Cursor::new();

        let err = parse_ipv4(&mut cur, &frame).unwrap_err();
        assert_eq!(err, FrameError::Truncated { need: 24, have: 20 });
        assert_eq!(cur.offset(), 0);
    }

    #[test]
    fn undersized_ihl_rejected() {
        let mut buf = ipv4_header(4, 64, &[]);
        let frame = Frame::new(&mut buf);
        let mut cur = Cursor::new();

        let err = parse_ipv4(&mut cur, &frame).unwrap_err();
        assert_eq!(
            err,
            FrameError::BadHeaderLength {
                declared: 16,
                min: 20
            }
        );
        assert_eq!(cur.offset(), 0);
    }

    #[test]
    fn truncated_fixed_portion() {
        let mut buf = ipv4_header(5, 64, &[]);
        buf.truncate(IPV4_HLEN_MIN - 1);
        let frame = Frame::new(&mut buf);
        let mut cur = Cursor::new();

        let err = parse_ipv4(&mut cur, &frame).unwrap_err();
        assert_eq!(err, FrameError::Truncated { need: 20, have: 19 });
        assert_eq!(cur.offset(), 0);
    }
}
