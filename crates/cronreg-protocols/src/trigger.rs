//! Cron triggers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::{JobKey, TriggerKey};

/// What a trigger does when one of its fire times was missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MisfirePolicy {
    /// Skip forward to the next scheduled time without firing now.
    #[default]
    DoNothing,
    /// Fire once immediately, then resume the schedule.
    FireOnceNow,
}

/// A cron-driven firing schedule bound to exactly one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronTrigger {
    key: TriggerKey,
    job_key: JobKey,
    /// Cron expression as declared.
    pub cron_expression: String,
    /// First instant the trigger may fire.
    pub start_time: DateTime<Utc>,
    /// Last instant the trigger may fire, if bounded.
    pub end_time: Option<DateTime<Utc>>,
    /// Misfire handling.
    pub misfire_policy: MisfirePolicy,
}

impl CronTrigger {
    /// Build a trigger for `job`. The trigger key is derived from the job key.
    pub fn for_job(
        job: &JobKey,
        cron_expression: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            key: job.trigger_key(),
            job_key: job.clone(),
            cron_expression: cron_expression.into(),
            start_time,
            end_time,
            misfire_policy: MisfirePolicy::default(),
        }
    }

    /// Set the misfire policy.
    pub fn with_misfire_policy(mut self, policy: MisfirePolicy) -> Self {
        self.misfire_policy = policy;
        self
    }

    /// Trigger identity.
    pub fn key(&self) -> &TriggerKey {
        &self.key
    }

    /// Identity of the job this trigger fires.
    pub fn job_key(&self) -> &JobKey {
        &self.job_key
    }
}
