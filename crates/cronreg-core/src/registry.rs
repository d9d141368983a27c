//! Registration facade.

use std::fmt::Display;
use std::sync::Arc;

use tracing::{error, warn};

use cronreg_config::{ConfigError, ConfigValidator, GroupMatchMode, RegistryConfig};
use cronreg_protocols::{GroupMatcher, JobKey, SchedulingEngine};

use crate::deletion;
use crate::error::RegistrationError;
use crate::lock::MutationLock;
use crate::naming::Naming;
use crate::payload::build_data_map;
use crate::registration::{self, JobRegistration, RegistrationOutcome};

/// Access point for job registration and deletion against one engine.
///
/// The two operation families report failures differently:
/// [`register_job`](Self::register_job) returns every engine error to the
/// caller, while [`delete_job`](Self::delete_job) and
/// [`delete_all_jobs`](Self::delete_all_jobs) log engine errors and report
/// `false`.
pub struct JobRegistry {
    engine: Arc<dyn SchedulingEngine>,
    lock: MutationLock,
    naming: Naming,
    group_match: GroupMatchMode,
}

impl JobRegistry {
    /// Create a registry with the default configuration.
    pub fn new(engine: Arc<dyn SchedulingEngine>) -> Self {
        let config = RegistryConfig::default();
        Self {
            engine,
            lock: MutationLock::new(config.lock.strategy),
            naming: Naming::from(&config.naming),
            group_match: config.deletion.group_match,
        }
    }

    /// Create a registry from a validated configuration.
    ///
    /// Fails with the first validation error; warnings are logged.
    pub fn from_config(
        engine: Arc<dyn SchedulingEngine>,
        config: &RegistryConfig,
    ) -> Result<Self, ConfigError> {
        for warning in ConfigValidator::validate(config).into_result()? {
            warn!("Config warning at {}", warning);
        }

        Ok(Self {
            engine,
            lock: MutationLock::new(config.lock.strategy),
            naming: Naming::from(&config.naming),
            group_match: config.deletion.group_match,
        })
    }

    /// The engine this registry drives.
    pub fn engine(&self) -> &Arc<dyn SchedulingEngine> {
        &self.engine
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    /// Build a declaration for a project schedule: derived job and group
    /// names plus the standard payload.
    pub fn schedule_registration(
        &self,
        job_type: impl Into<String>,
        project_id: i64,
        project_flow_id: i64,
        schedule_id: i64,
        cron_expression: impl Into<String>,
    ) -> JobRegistration {
        JobRegistration::new(
            job_type,
            self.naming.job_name(schedule_id),
            self.naming.group_name(project_id),
            cron_expression,
        )
        .with_data(build_data_map(project_id, project_flow_id, schedule_id))
    }

    /// Declare a job and its trigger.
    ///
    /// Creates the job if absent, otherwise merges the supplied payload
    /// into it. Schedules the trigger if absent, otherwise reschedules it
    /// only when the cron expression changed (ignoring case).
    pub fn register_job(
        &self,
        registration: &JobRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let _guard = self.lock.lock_group(&registration.group);

        registration::upsert(self.engine.as_ref(), registration).map_err(|source| {
            let key = registration.job_key();
            error!("add job failed for {}: {}", key, source);
            RegistrationError::Engine { key, source }
        })
    }

    /// Delete one job. Returns `true` if it is gone afterwards, including
    /// when it never existed.
    pub fn delete_job(&self, name: &str, group: &str) -> bool {
        let _guard = self.lock.lock_group(group);
        let key = JobKey::new(name, group);

        deletion::delete_one(self.engine.as_ref(), &key).unwrap_or_else(|e| {
            error!("delete job : {} failed: {}", name, e);
            false
        })
    }

    /// Delete every job in the matching groups. Returns `true` if every
    /// matched job was deleted, including when nothing matched.
    pub fn delete_all_jobs(&self, group: &str) -> bool {
        let _guard = self.lock.lock_all();
        let matcher = self.group_matcher(group);

        deletion::delete_group(self.engine.as_ref(), &matcher).unwrap_or_else(|e| {
            error!("delete all jobs in job group: {} failed: {}", group, e);
            false
        })
    }

    /// Delete every job registered for a project.
    pub fn delete_project_jobs(&self, project_id: impl Display) -> bool {
        self.delete_all_jobs(&self.naming.group_name(project_id))
    }

    fn group_matcher(&self, group: &str) -> GroupMatcher {
        match self.group_match {
            GroupMatchMode::Suffix => GroupMatcher::EndsWith(group.to_string()),
            GroupMatchMode::Exact => GroupMatcher::Equals(group.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
