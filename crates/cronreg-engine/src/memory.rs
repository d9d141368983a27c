//! In-memory scheduling engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, TimeDelta, Utc};
use cron::Schedule;
use parking_lot::RwLock;
use tracing::{debug, info};

use cronreg_protocols::{
    CronTrigger, EngineError, EngineResult, GroupMatcher, JobDetail, JobKey, MisfirePolicy,
    SchedulingEngine, TriggerKey,
};

use crate::schedule::{first_fire_time, parse_cron};
use crate::stats::EngineStats;

/// Default lateness tolerated before a fire time counts as missed.
const DEFAULT_MISFIRE_THRESHOLD_SECS: i64 = 60;

struct StoredTrigger {
    trigger: CronTrigger,
    schedule: Schedule,
    next_fire_time: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct EngineState {
    jobs: HashMap<JobKey, JobDetail>,
    triggers: HashMap<TriggerKey, StoredTrigger>,
}

/// Thread-safe in-memory scheduling engine.
pub struct MemoryEngine {
    state: RwLock<EngineState>,
    stats: EngineStats,
    shutdown: AtomicBool,
    misfire_threshold: TimeDelta,
}

impl MemoryEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState::default()),
            stats: EngineStats::new(),
            shutdown: AtomicBool::new(false),
            misfire_threshold: TimeDelta::seconds(DEFAULT_MISFIRE_THRESHOLD_SECS),
        }
    }

    /// Set how late a fire time may be before it counts as missed.
    pub fn with_misfire_threshold(mut self, threshold: TimeDelta) -> Self {
        self.misfire_threshold = threshold;
        self
    }

    /// Call counters.
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub fn job_count(&self) -> usize {
        self.state.read().jobs.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.state.read().triggers.len()
    }

    /// Next fire time of a stored trigger.
    pub fn next_fire_time(&self, key: &TriggerKey) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .triggers
            .get(key)
            .and_then(|stored| stored.next_fire_time)
    }

    /// Drop every job and trigger and reset the call counters.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.jobs.clear();
        state.triggers.clear();
        self.stats.reset();
        debug!("MemoryEngine cleared");
    }

    /// Stop accepting calls. Every later call fails with
    /// [`EngineError::Unavailable`].
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        info!("MemoryEngine shut down");
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Apply misfire handling to every trigger whose next fire time is older
    /// than `now` minus the misfire threshold.
    ///
    /// `DoNothing` triggers move to their first fire time after `now`
    /// without firing. `FireOnceNow` triggers are set to fire at `now` and
    /// their keys are returned.
    pub fn apply_misfires(&self, now: DateTime<Utc>) -> Vec<TriggerKey> {
        let cutoff = now - self.misfire_threshold;
        let mut due = Vec::new();
        let mut state = self.state.write();

        for (key, stored) in state.triggers.iter_mut() {
            let Some(next) = stored.next_fire_time else {
                continue;
            };
            if next >= cutoff {
                continue;
            }

            match stored.trigger.misfire_policy {
                MisfirePolicy::DoNothing => {
                    stored.next_fire_time = first_fire_time(
                        &stored.schedule,
                        now,
                        stored.trigger.start_time,
                        stored.trigger.end_time,
                    );
                    debug!(
                        "Trigger {} misfired at {}, next fire {:?}",
                        key, next, stored.next_fire_time
                    );
                }
                MisfirePolicy::FireOnceNow => {
                    stored.next_fire_time = Some(now);
                    due.push(key.clone());
                }
            }
        }

        due
    }

    fn ensure_running(&self) -> EngineResult<()> {
        if self.is_shutdown() {
            return Err(EngineError::Unavailable(
                "the scheduler has been shut down".to_string(),
            ));
        }
        Ok(())
    }

    fn prepare(trigger: CronTrigger) -> EngineResult<StoredTrigger> {
        let schedule = parse_cron(&trigger.cron_expression)?;
        let next_fire_time =
            first_fire_time(&schedule, Utc::now(), trigger.start_time, trigger.end_time);
        if next_fire_time.is_none() {
            return Err(EngineError::WillNeverFire(trigger.key().to_string()));
        }
        Ok(StoredTrigger {
            trigger,
            schedule,
            next_fire_time,
        })
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingEngine for MemoryEngine {
    fn check_job_exists(&self, key: &JobKey) -> EngineResult<bool> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.existence_checks);
        Ok(self.state.read().jobs.contains_key(key))
    }

    fn check_trigger_exists(&self, key: &TriggerKey) -> EngineResult<bool> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.existence_checks);
        Ok(self.state.read().triggers.contains_key(key))
    }

    fn get_job(&self, key: &JobKey) -> EngineResult<Option<JobDetail>> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.job_reads);
        Ok(self.state.read().jobs.get(key).cloned())
    }

    fn add_job(&self, job: JobDetail, replace: bool) -> EngineResult<()> {
        self.ensure_running()?;
        let mut state = self.state.write();

        let exists = state.jobs.contains_key(&job.key);
        if exists && !replace {
            return Err(EngineError::ObjectAlreadyExists(job.key.to_string()));
        }
        if !job.durable && !state.triggers.contains_key(&job.key.trigger_key()) {
            return Err(EngineError::NotDurable(job.key.to_string()));
        }

        if exists {
            EngineStats::bump(&self.stats.jobs_replaced);
        } else {
            EngineStats::bump(&self.stats.jobs_added);
        }
        debug!("Stored job {} (replaced: {})", job.key, exists);
        state.jobs.insert(job.key.clone(), job);
        Ok(())
    }

    fn get_trigger(&self, key: &TriggerKey) -> EngineResult<Option<CronTrigger>> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.trigger_reads);
        Ok(self
            .state
            .read()
            .triggers
            .get(key)
            .map(|stored| stored.trigger.clone()))
    }

    fn schedule_job(&self, trigger: CronTrigger) -> EngineResult<Option<DateTime<Utc>>> {
        self.ensure_running()?;
        let mut state = self.state.write();

        if !state.jobs.contains_key(trigger.job_key()) {
            return Err(EngineError::JobNotFound(trigger.job_key().to_string()));
        }
        if state.triggers.contains_key(trigger.key()) {
            return Err(EngineError::ObjectAlreadyExists(trigger.key().to_string()));
        }

        let stored = Self::prepare(trigger)?;
        let next = stored.next_fire_time;
        EngineStats::bump(&self.stats.triggers_scheduled);
        state.triggers.insert(stored.trigger.key().clone(), stored);
        Ok(next)
    }

    fn reschedule_job(
        &self,
        key: &TriggerKey,
        trigger: CronTrigger,
    ) -> EngineResult<Option<DateTime<Utc>>> {
        self.ensure_running()?;
        let mut state = self.state.write();

        let Some(old) = state.triggers.get(key) else {
            return Ok(None);
        };
        if old.trigger.job_key() != trigger.job_key() {
            return Err(EngineError::JobMismatch(trigger.key().to_string()));
        }

        let stored = Self::prepare(trigger)?;
        let next = stored.next_fire_time;
        state.triggers.remove(key);
        EngineStats::bump(&self.stats.triggers_rescheduled);
        state.triggers.insert(stored.trigger.key().clone(), stored);
        Ok(next)
    }

    fn delete_job(&self, key: &JobKey) -> EngineResult<bool> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.job_deletes);
        let mut state = self.state.write();
        state.triggers.retain(|_, stored| stored.trigger.job_key() != key);
        Ok(state.jobs.remove(key).is_some())
    }

    fn delete_jobs(&self, keys: &[JobKey]) -> EngineResult<bool> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.bulk_deletes);
        let mut state = self.state.write();
        let mut all_found = true;
        for key in keys {
            state.triggers.retain(|_, stored| stored.trigger.job_key() != key);
            all_found &= state.jobs.remove(key).is_some();
        }
        Ok(all_found)
    }

    fn job_keys(&self, matcher: &GroupMatcher) -> EngineResult<Vec<JobKey>> {
        self.ensure_running()?;
        EngineStats::bump(&self.stats.key_enumerations);
        let mut keys: Vec<JobKey> = self
            .state
            .read()
            .jobs
            .keys()
            .filter(|key| matcher.matches(&key.group))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
