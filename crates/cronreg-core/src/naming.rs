//! Job and group name derivation.
//!
//! Persisted schedule references embed these names, so the format is part
//! of the external contract: `<job-prefix>_<scheduleId>` and
//! `<group-prefix>_<projectId>`.

use std::fmt::Display;

use cronreg_config::{DEFAULT_GROUP_PREFIX, DEFAULT_JOB_PREFIX, NamingConfig};

const SEPARATOR: char = '_';

/// Build the job name for a schedule with the default prefix.
pub fn build_job_name(schedule_id: impl Display) -> String {
    format!("{DEFAULT_JOB_PREFIX}{SEPARATOR}{schedule_id}")
}

/// Build the group name for a project with the default prefix.
pub fn build_group_name(project_id: impl Display) -> String {
    format!("{DEFAULT_GROUP_PREFIX}{SEPARATOR}{project_id}")
}

/// Name derivation with configurable prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    job_prefix: String,
    group_prefix: String,
}

impl Naming {
    pub fn new(job_prefix: impl Into<String>, group_prefix: impl Into<String>) -> Self {
        Self {
            job_prefix: job_prefix.into(),
            group_prefix: group_prefix.into(),
        }
    }

    pub fn job_name(&self, schedule_id: impl Display) -> String {
        format!("{}{SEPARATOR}{schedule_id}", self.job_prefix)
    }

    pub fn group_name(&self, project_id: impl Display) -> String {
        format!("{}{SEPARATOR}{project_id}", self.group_prefix)
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(DEFAULT_JOB_PREFIX, DEFAULT_GROUP_PREFIX)
    }
}

impl From<&NamingConfig> for Naming {
    fn from(config: &NamingConfig) -> Self {
        Self::new(config.job_prefix.clone(), config.group_prefix.clone())
    }
}
