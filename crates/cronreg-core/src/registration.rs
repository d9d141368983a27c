//! Job declarations and the upsert / reconcile protocol.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use cronreg_protocols::{
    CronTrigger, EngineError, EngineResult, JobDataMap, JobDetail, JobKey, MisfirePolicy,
    SchedulingEngine,
};

/// A declaration: run `job_type` as `(name, group)` on `cron_expression`
/// between `start_time` and `end_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRegistration {
    /// Reference to the job logic.
    pub job_type: String,
    pub name: String,
    pub group: String,
    pub cron_expression: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Payload to install on creation, or merge into the stored payload.
    pub data: Option<JobDataMap>,
}

impl JobRegistration {
    /// Create a declaration starting now, unbounded, without payload.
    pub fn new(
        job_type: impl Into<String>,
        name: impl Into<String>,
        group: impl Into<String>,
        cron_expression: impl Into<String>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            name: name.into(),
            group: group.into(),
            cron_expression: cron_expression.into(),
            start_time: Utc::now(),
            end_time: None,
            data: None,
        }
    }

    pub fn starting_at(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn ending_at(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_data(mut self, data: JobDataMap) -> Self {
        self.data = Some(data);
        self
    }

    pub fn job_key(&self) -> JobKey {
        JobKey::new(self.name.clone(), self.group.clone())
    }
}

/// What happened to the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobChange {
    Created,
    /// The supplied payload changed the stored one.
    Merged,
    Unchanged,
}

/// What happened to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerChange {
    Scheduled,
    Rescheduled,
    Unchanged,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub job: JobChange,
    pub trigger: TriggerChange,
    /// First fire time reported by the engine when the trigger was
    /// (re)scheduled.
    pub next_fire_time: Option<DateTime<Utc>>,
}

impl RegistrationOutcome {
    /// Whether the registration changed any engine state.
    pub fn is_noop(&self) -> bool {
        self.job == JobChange::Unchanged && self.trigger == TriggerChange::Unchanged
    }
}

/// Add-or-merge the job, then add-or-reschedule its trigger.
///
/// Must run under the mutation lock. Stops at the first engine error
/// without undoing earlier steps.
pub(crate) fn upsert(
    engine: &dyn SchedulingEngine,
    registration: &JobRegistration,
) -> EngineResult<RegistrationOutcome> {
    let job_key = registration.job_key();
    let job = upsert_job(engine, &job_key, registration)?;

    let trigger = CronTrigger::for_job(
        &job_key,
        registration.cron_expression.clone(),
        registration.start_time,
        registration.end_time,
    )
    .with_misfire_policy(MisfirePolicy::DoNothing);
    let trigger_key = trigger.key().clone();

    let (trigger_change, next_fire_time) = if engine.check_trigger_exists(&trigger_key)? {
        let current = engine
            .get_trigger(&trigger_key)?
            .ok_or_else(|| EngineError::TriggerNotFound(trigger_key.to_string()))?;

        if current
            .cron_expression
            .eq_ignore_ascii_case(&registration.cron_expression)
        {
            debug!(
                "Trigger {} unchanged, cron expression: {}",
                trigger_key, current.cron_expression
            );
            (TriggerChange::Unchanged, None)
        } else {
            let next = engine.reschedule_job(&trigger_key, trigger)?;
            info!(
                trigger = %trigger_key,
                cron = %registration.cron_expression,
                previous = %current.cron_expression,
                start = %registration.start_time,
                end = ?registration.end_time,
                "Rescheduled job trigger"
            );
            (TriggerChange::Rescheduled, next)
        }
    } else {
        let next = engine.schedule_job(trigger)?;
        info!(
            trigger = %trigger_key,
            cron = %registration.cron_expression,
            start = %registration.start_time,
            end = ?registration.end_time,
            "Scheduled job trigger"
        );
        (TriggerChange::Scheduled, next)
    };

    Ok(RegistrationOutcome {
        job,
        trigger: trigger_change,
        next_fire_time,
    })
}

fn upsert_job(
    engine: &dyn SchedulingEngine,
    job_key: &JobKey,
    registration: &JobRegistration,
) -> EngineResult<JobChange> {
    if engine.check_job_exists(job_key)? {
        let mut detail = engine
            .get_job(job_key)?
            .ok_or_else(|| EngineError::JobNotFound(job_key.to_string()))?;

        return match &registration.data {
            Some(data) if detail.data.merge(data) => {
                engine.add_job(detail, true)?;
                debug!("Merged payload into job {}", job_key);
                Ok(JobChange::Merged)
            }
            _ => Ok(JobChange::Unchanged),
        };
    }

    let mut detail = JobDetail::new(job_key.clone(), registration.job_type.clone());
    if let Some(data) = &registration.data {
        detail = detail.with_data(data.clone());
    }
    engine.add_job(detail, false)?;
    info!(
        "Add job, job name: {}, group name: {}",
        job_key.name, job_key.group
    );
    Ok(JobChange::Created)
}
