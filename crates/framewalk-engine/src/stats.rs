//! Per-disposition packet and byte counters.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::action::Disposition;

/// Pass-through recording hook, invoked exactly once per frame after the
/// disposition is final. Implementations return the disposition unchanged;
/// recording never overrides the decision.
pub trait StatsSink {
    fn record(&self, frame_len: usize, disposition: Disposition) -> Disposition;
}

#[derive(Debug, Default)]
struct Counter {
    packets: AtomicU64,
    bytes: AtomicU64,
}

impl Counter {
    fn bump(&self, frame_len: usize) {
        self.packets.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(frame_len as u64, Ordering::Relaxed);
    }

    fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            packets: self.packets.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time value of one counter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub packets: u64,
    pub bytes: u64,
}

/// All five counters at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub pass: CounterSnapshot,
    pub drop: CounterSnapshot,
    pub transmit: CounterSnapshot,
    pub redirect_interface: CounterSnapshot,
    pub redirect_port: CounterSnapshot,
}

/// In-memory [`StatsSink`]: one packet + byte counter pair per
/// disposition variant. Shared freely across concurrent invocations;
/// counters are relaxed atomics.
#[derive(Debug, Default)]
pub struct DispositionCounters {
    pass: Counter,
    drop: Counter,
    transmit: Counter,
    redirect_interface: Counter,
    redirect_port: Counter,
}

impl DispositionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pass: self.pass.snapshot(),
            drop: self.drop.snapshot(),
            transmit: self.transmit.snapshot(),
            redirect_interface: self.redirect_interface.snapshot(),
            redirect_port: self.redirect_port.snapshot(),
        }
    }
}

impl StatsSink for DispositionCounters {
    fn record(&self, frame_len: usize, disposition: Disposition) -> Disposition {
        let counter = match disposition {
            Disposition::Pass => &self.pass,
            Disposition::Drop => &self.drop,
            Disposition::Transmit => &self.transmit,
            Disposition::RedirectInterface { .. } => &self.redirect_interface,
            Disposition::RedirectPort { .. } => &self.redirect_port,
        };
        counter.bump(frame_len);
        disposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fib::IfIndex;

    #[test]
    fn counters_accumulate_per_variant() {
        let stats = DispositionCounters::new();
        assert_eq!(stats.record(98, Disposition::Pass), Disposition::Pass);
        assert_eq!(stats.record(64, Disposition::Pass), Disposition::Pass);
        assert_eq!(stats.record(98, Disposition::Drop), Disposition::Drop);
        let redirect = Disposition::RedirectInterface {
            ifindex: IfIndex(2),
        };
        assert_eq!(stats.record(1500, redirect), redirect);

        let snap = stats.snapshot();
        assert_eq!(snap.pass, CounterSnapshot { packets: 2, bytes: 162 });
        assert_eq!(snap.drop, CounterSnapshot { packets: 1, bytes: 98 });
        assert_eq!(
            snap.redirect_interface,
            CounterSnapshot {
                packets: 1,
                bytes: 1500
            }
        );
        assert_eq!(snap.transmit, CounterSnapshot::default());
        assert_eq!(snap.redirect_port, CounterSnapshot::default());
    }
}
