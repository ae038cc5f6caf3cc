//! The forwarding engine built on top of `framewalk-core`.
//!
//! Each entry point in [`engine`] is one complete per-frame program: it
//! decodes the header chain, possibly mutates the frame in place, and
//! resolves to exactly one [`Disposition`]. Decode and mutation failures
//! never abort a frame; they resolve to `Pass` (fail-open), so one
//! malformed frame can never take the path down for the ones behind it.
//!
//! Route lookups, egress port mapping and stats recording are injected
//! collaborators ([`RouteLookup`], [`TxPortTable`], [`StatsSink`]) so the
//! engine itself stays a pure function of one frame plus read-only tables.

pub mod action;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod fib;
pub mod redirect;
pub mod stats;
pub mod testing;

pub use action::Disposition;
pub use dispatch::Pipeline;
pub use error::EngineError;
pub use fib::{IfIndex, RouteLookup, RouteQuery, RouteResult, StaticFib};
pub use redirect::{RedirectParams, TxPortTable};
pub use stats::{DispositionCounters, StatsSink};
