//! Reference checksum implementations (RFC 1071, RFC 4443).
//!
//! These recompute from scratch over the covered bytes and exist purely
//! as the independent oracle for the incremental updates in
//! `framewalk-core::csum`.

/// Full one's-complement internet checksum over `bytes`, big-endian
/// 16-bit words, odd trailing byte padded with zero. Returns the
/// complemented sum ready to be written into a checksum field.
#[must_use]
pub fn internet_checksum(bytes: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    let mut chunks = bytes.chunks_exact(2);
    for word in &mut chunks {
        sum += u32::from(u16::from_be_bytes([word[0], word[1]]));
    }
    if let [last] = chunks.remainder() {
        sum += u32::from(u16::from_be_bytes([*last, 0]));
    }
    while sum > 0xFFFF {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// IPv4 header checksum: the internet checksum over the header bytes
/// with the checksum field itself zeroed.
#[must_use]
pub fn ipv4_header_checksum(header: &[u8]) -> u16 {
    internet_checksum(header)
}

/// ICMPv6 checksum: internet checksum over the RFC 4443 pseudo-header
/// (source, destination, message length, next-header 58) followed by the
/// ICMPv6 message with its checksum field zeroed.
#[must_use]
pub fn icmpv6_checksum(src: &[u8; 16], dst: &[u8; 16], message: &[u8]) -> u16 {
    let mut covered = Vec::with_capacity(40 + message.len());
    covered.extend_from_slice(src);
    covered.extend_from_slice(dst);
    covered.extend_from_slice(&(message.len() as u32).to_be_bytes());
    covered.extend_from_slice(&[0, 0, 0, 58]);
    covered.extend_from_slice(message);
    internet_checksum(&covered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        // Example header from RFC 1071 discussions: checksum of an IPv4
        // header must verify to zero when summed including the field.
        let mut header = [
            0x45u8, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0x00, 0x00, 0xC0,
            0xA8, 0x00, 0x01, 0xC0, 0xA8, 0x00, 0xC7,
        ];
        let check = ipv4_header_checksum(&header);
        assert_eq!(check, 0xB861);

        header[10..12].copy_from_slice(&check.to_be_bytes());
        // Summing with the checksum in place yields the all-ones value,
        // whose complement is zero.
        assert_eq!(internet_checksum(&header), 0);
    }

    #[test]
    fn odd_length_pads_with_zero() {
        assert_eq!(internet_checksum(&[0xFF]), internet_checksum(&[0xFF, 0x00]));
    }
}
