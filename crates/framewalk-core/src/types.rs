//! Newtype wrappers for link-layer field values.
//!
//! These keep MAC addresses and VLAN tag-control words from being mixed up
//! with the plain byte arrays and integers they wrap.

use core::fmt;

use crate::constants::ETH_ALEN;

/// Error for fallible conversions from byte slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLength {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid length: expected {} bytes, got {}",
            self.expected, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidLength {}

/// A 6-byte Ethernet MAC address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct MacAddr(pub(crate) [u8; ETH_ALEN]);

impl MacAddr {
    pub const fn new(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }

    /// The all-zero address.
    pub const ZERO: MacAddr = MacAddr([0; ETH_ALEN]);

    #[must_use]
    pub const fn octets(&self) -> [u8; ETH_ALEN] {
        self.0
    }
}

impl AsRef<[u8]> for MacAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ETH_ALEN]> for MacAddr {
    fn from(octets: [u8; ETH_ALEN]) -> Self {
        Self(octets)
    }
}

impl TryFrom<&[u8]> for MacAddr {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ETH_ALEN] = bytes.try_into().map_err(|_| InvalidLength {
            expected: ETH_ALEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

impl fmt::Debug for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddr({self})")
    }
}

/// A VLAN tag-control word: 3-bit priority, 1-bit DEI, 12-bit VLAN ID.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct VlanTci(pub(crate) u16);

impl VlanTci {
    pub const fn new(tci: u16) -> Self {
        Self(tci)
    }

    /// The raw 16-bit tag-control word (host order).
    #[must_use]
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// The 12-bit VLAN identifier.
    #[must_use]
    pub const fn vid(&self) -> u16 {
        self.0 & 0x0FFF
    }

    /// The 3-bit priority code point.
    #[must_use]
    pub const fn pcp(&self) -> u8 {
        (self.0 >> 13) as u8
    }
}

impl From<u16> for VlanTci {
    fn from(tci: u16) -> Self {
        Self(tci)
    }
}

impl fmt::Debug for VlanTci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VlanTci(vid={}, pcp={})", self.vid(), self.pcp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_display_is_colon_hex() {
        let mac = MacAddr::new([0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01]);
        assert_eq!(mac.to_string(), "de:ad:be:ef:00:01");
    }

    #[test]
    fn mac_try_from_slice() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let mac = MacAddr::try_from(&bytes[..]).unwrap();
        assert_eq!(mac.octets(), bytes);

        let err = MacAddr::try_from(&bytes[..4]).unwrap_err();
        assert_eq!(
            err,
            InvalidLength {
                expected: 6,
                actual: 4
            }
        );
    }

    #[test]
    fn tci_fields() {
        // PCP 5, DEI 0, VID 0x123
        let tci = VlanTci::new(0b101_0_0001_0010_0011);
        assert_eq!(tci.vid(), 0x123);
        assert_eq!(tci.pcp(), 5);
    }
}
