//! Engine call counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct EngineStats {
    pub existence_checks: AtomicU64,
    pub job_reads: AtomicU64,
    pub trigger_reads: AtomicU64,
    pub jobs_added: AtomicU64,
    pub jobs_replaced: AtomicU64,
    pub triggers_scheduled: AtomicU64,
    pub triggers_rescheduled: AtomicU64,
    pub job_deletes: AtomicU64,
    pub bulk_deletes: AtomicU64,
    pub key_enumerations: AtomicU64,
}

impl EngineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        for counter in [
            &self.existence_checks,
            &self.job_reads,
            &self.trigger_reads,
            &self.jobs_added,
            &self.jobs_replaced,
            &self.triggers_scheduled,
            &self.triggers_rescheduled,
            &self.job_deletes,
            &self.bulk_deletes,
            &self.key_enumerations,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a snapshot of the counters.
    pub fn snapshot(&self) -> EngineStatsSnapshot {
        EngineStatsSnapshot {
            existence_checks: self.existence_checks.load(Ordering::Relaxed),
            job_reads: self.job_reads.load(Ordering::Relaxed),
            trigger_reads: self.trigger_reads.load(Ordering::Relaxed),
            jobs_added: self.jobs_added.load(Ordering::Relaxed),
            jobs_replaced: self.jobs_replaced.load(Ordering::Relaxed),
            triggers_scheduled: self.triggers_scheduled.load(Ordering::Relaxed),
            triggers_rescheduled: self.triggers_rescheduled.load(Ordering::Relaxed),
            job_deletes: self.job_deletes.load(Ordering::Relaxed),
            bulk_deletes: self.bulk_deletes.load(Ordering::Relaxed),
            key_enumerations: self.key_enumerations.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`EngineStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineStatsSnapshot {
    pub existence_checks: u64,
    pub job_reads: u64,
    pub trigger_reads: u64,
    pub jobs_added: u64,
    pub jobs_replaced: u64,
    pub triggers_scheduled: u64,
    pub triggers_rescheduled: u64,
    pub job_deletes: u64,
    pub bulk_deletes: u64,
    pub key_enumerations: u64,
}

impl EngineStatsSnapshot {
    /// Number of calls that changed engine state.
    pub fn mutations(&self) -> u64 {
        self.jobs_added
            + self.jobs_replaced
            + self.triggers_scheduled
            + self.triggers_rescheduled
            + self.job_deletes
            + self.bulk_deletes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_and_reset() {
        let stats = EngineStats::new();
        EngineStats::bump(&stats.jobs_added);
        EngineStats::bump(&stats.triggers_rescheduled);
        EngineStats::bump(&stats.existence_checks);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.jobs_added, 1);
        assert_eq!(snapshot.mutations(), 2);

        stats.reset();
        assert_eq!(stats.snapshot(), EngineStatsSnapshot::default());
    }

    #[test]
    fn test_snapshot_serialize() {
        let snapshot = EngineStatsSnapshot {
            bulk_deletes: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["bulk_deletes"], 3);
    }
}
