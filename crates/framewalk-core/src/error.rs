//! Error types for the framewalk-core crate.

use core::fmt;

/// Outcome of a failed decode or mutate operation.
///
/// Every variant is recoverable from the caller's point of view: the frame
/// itself is always left in a safe (if partially edited) state, and the
/// forwarding layer resolves these into a per-frame disposition rather
/// than propagating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// A header or field does not fit before the frame's current end.
    /// `need` is the absolute offset the access required, `have` the
    /// frame's valid length.
    Truncated { need: usize, have: usize },
    /// A length field read from the frame contradicts the fixed portion
    /// of its own header (e.g. IPv4 IHL below 5).
    BadHeaderLength { declared: usize, min: usize },
    /// The frame's protocol does not match the operation's precondition
    /// (e.g. VLAN pop on an untagged frame).
    UnsupportedProtocol { proto: u16 },
    /// A growth mutation has no headroom left.
    CapacityExceeded { need: usize, headroom: usize },
    /// TTL or hop limit is already at or below the decrement floor.
    TtlExpired { ttl: u8 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Truncated { need, have } => {
                write!(f, "frame truncated: need {need} bytes, have {have}")
            }
            FrameError::BadHeaderLength { declared, min } => {
                write!(
                    f,
                    "bad header length: declared {declared} bytes, minimum {min}"
                )
            }
            FrameError::UnsupportedProtocol { proto } => {
                write!(f, "unsupported protocol: 0x{proto:04x}")
            }
            FrameError::CapacityExceeded { need, headroom } => {
                write!(
                    f,
                    "capacity exceeded: need {need} bytes of headroom, have {headroom}"
                )
            }
            FrameError::TtlExpired { ttl } => write!(f, "ttl expired: {ttl}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FrameError::Truncated { need: 14, have: 9 };
        assert_eq!(err.to_string(), "frame truncated: need 14 bytes, have 9");

        let err = FrameError::BadHeaderLength {
            declared: 16,
            min: 20,
        };
        assert_eq!(
            err.to_string(),
            "bad header length: declared 16 bytes, minimum 20"
        );

        let err = FrameError::UnsupportedProtocol { proto: 0x0800 };
        assert_eq!(err.to_string(), "unsupported protocol: 0x0800");

        let err = FrameError::CapacityExceeded {
            need: 4,
            headroom: 0,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: need 4 bytes of headroom, have 0"
        );

        let err = FrameError::TtlExpired { ttl: 1 };
        assert_eq!(err.to_string(), "ttl expired: 1");
    }
}
