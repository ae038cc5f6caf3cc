//! The terminal decision for one frame.

use core::fmt;

use crate::fib::IfIndex;

/// Exactly one of these is produced per frame. `Pass` hands the frame to
/// the normal stack unmodified (or with whatever in-place edits were
/// committed before the decision), `Transmit` sends it back out the
/// ingress interface, and the two redirect variants hand it to a specific
/// egress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Disposition {
    Pass,
    Drop,
    Transmit,
    RedirectInterface { ifindex: IfIndex },
    /// Redirect through the keyed egress-port table.
    RedirectPort { key: u32 },
}

impl Disposition {
    /// Short stable name, used as the stats and tracing key.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Disposition::Pass => "pass",
            Disposition::Drop => "drop",
            Disposition::Transmit => "transmit",
            Disposition::RedirectInterface { .. } => "redirect-interface",
            Disposition::RedirectPort { .. } => "redirect-port",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::RedirectInterface { ifindex } => {
                write!(f, "redirect-interface({ifindex})")
            }
            Disposition::RedirectPort { key } => write!(f, "redirect-port({key})"),
            other => f.write_str(other.label()),
        }
    }
}
