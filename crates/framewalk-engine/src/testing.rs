//! In-memory fakes and assertion helpers for engine tests.
//!
//! These are shipped as a regular module (not behind `cfg(test)`) so
//! integration tests and downstream embedders can reuse them.

use std::sync::Mutex;

use framewalk_core::wire::parse_ethernet;
use framewalk_core::{Cursor, Frame, MacAddr};

use crate::action::Disposition;
use crate::fib::{RouteLookup, RouteQuery, RouteResult};
use crate::stats::StatsSink;

/// A sink that records nothing.
#[derive(Debug, Default)]
pub struct NullStats;

impl StatsSink for NullStats {
    fn record(&self, _frame_len: usize, disposition: Disposition) -> Disposition {
        disposition
    }
}

/// A sink that remembers every `(frame_len, disposition)` it saw, for
/// asserting the record-exactly-once contract.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<(usize, Disposition)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> Vec<(usize, Disposition)> {
        self.records.lock().expect("sink lock poisoned").clone()
    }
}

impl StatsSink for RecordingSink {
    fn record(&self, frame_len: usize, disposition: Disposition) -> Disposition {
        self.records
            .lock()
            .expect("sink lock poisoned")
            .push((frame_len, disposition));
        disposition
    }
}

/// A FIB that answers every query with the same result.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoute(pub RouteResult);

impl RouteLookup for FixedRoute {
    fn lookup(&self, _query: &RouteQuery) -> RouteResult {
        self.0
    }
}

/// Assert that the frame's outer Ethernet header carries exactly these
/// endpoints.
pub fn assert_ethernet_endpoints(frame: &Frame<'_>, dst: MacAddr, src: MacAddr) {
    let mut cur = Cursor::new();
    let eth = parse_ethernet(&mut cur, frame).expect("frame too short for an Ethernet header");
    assert_eq!(eth.dst, dst, "destination MAC mismatch");
    assert_eq!(eth.src, src, "source MAC mismatch");
}
