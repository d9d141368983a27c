//! Scheduling engine protocol.
//!
//! The registration layer never parses cron expressions or computes fire
//! times itself; it drives an engine through this trait. Implementations
//! must be safe to share across threads. Callers serialize structural
//! operations themselves, so an engine only needs per-call consistency.

use chrono::{DateTime, Utc};

use crate::error::EngineResult;
use crate::job::JobDetail;
use crate::key::{GroupMatcher, JobKey, TriggerKey};
use crate::trigger::CronTrigger;

/// Capabilities the registration layer consumes from a scheduling engine.
pub trait SchedulingEngine: Send + Sync {
    /// Check whether a job with this key is stored.
    fn check_job_exists(&self, key: &JobKey) -> EngineResult<bool>;

    /// Check whether a trigger with this key is stored.
    fn check_trigger_exists(&self, key: &TriggerKey) -> EngineResult<bool>;

    /// Fetch a stored job.
    fn get_job(&self, key: &JobKey) -> EngineResult<Option<JobDetail>>;

    /// Store a job. With `replace == false` an existing job with the same key
    /// is an error.
    fn add_job(&self, job: JobDetail, replace: bool) -> EngineResult<()>;

    /// Fetch a stored trigger.
    fn get_trigger(&self, key: &TriggerKey) -> EngineResult<Option<CronTrigger>>;

    /// Schedule a new trigger for an already stored job.
    ///
    /// Returns the first fire time, if any.
    fn schedule_job(&self, trigger: CronTrigger) -> EngineResult<Option<DateTime<Utc>>>;

    /// Replace the trigger stored under `key` with `trigger`.
    ///
    /// Returns the first fire time of the new trigger, or `None` if no trigger
    /// was stored under `key`.
    fn reschedule_job(
        &self,
        key: &TriggerKey,
        trigger: CronTrigger,
    ) -> EngineResult<Option<DateTime<Utc>>>;

    /// Delete a job and its trigger. Returns `true` if the job was found.
    fn delete_job(&self, key: &JobKey) -> EngineResult<bool>;

    /// Delete every listed job. Returns `true` only if all were found.
    fn delete_jobs(&self, keys: &[JobKey]) -> EngineResult<bool>;

    /// Enumerate the keys of every stored job whose group satisfies `matcher`.
    fn job_keys(&self, matcher: &GroupMatcher) -> EngineResult<Vec<JobKey>>;
}
