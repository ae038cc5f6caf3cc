//! Engine error types.
//!
//! These exist for the engine's internal `Result` plumbing; nothing here
//! escapes to a caller as a failure. The public outcome of every entry
//! point is a [`Disposition`](crate::Disposition), and the outer layer of
//! each entry maps these errors to one.

use framewalk_core::FrameError;

use crate::fib::RouteResult;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("route lookup failed: {result:?}")]
    LookupFailed { result: RouteResult },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_frame_error() {
        let err: EngineError = FrameError::Truncated { need: 14, have: 9 }.into();
        assert_eq!(
            err.to_string(),
            "frame error: frame truncated: need 14 bytes, have 9"
        );
    }

    #[test]
    fn display_names_lookup_variant() {
        let err = EngineError::LookupFailed {
            result: RouteResult::Blackhole,
        };
        assert_eq!(err.to_string(), "route lookup failed: Blackhole");
    }
}
