//! Couples an engine entry with a stats sink.

use framewalk_core::Frame;

use crate::action::Disposition;
use crate::stats::StatsSink;

/// Runs one entry per frame and records the outcome exactly once.
///
/// The sink sees the frame's length as it stands after the entry ran, so
/// length-changing edits (VLAN push/pop) are reflected in the byte
/// counters.
pub struct Pipeline<S> {
    sink: S,
}

impl<S: StatsSink> Pipeline<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `entry` on the frame and pass its disposition through the sink.
    pub fn run<F>(&self, frame: &mut Frame<'_>, entry: F) -> Disposition
    where
        F: FnOnce(&mut Frame<'_>) -> Disposition,
    {
        let disposition = entry(frame);
        self.sink.record(frame.len(), disposition)
    }
}
