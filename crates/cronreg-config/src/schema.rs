//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Prefix of every job name (`job_<scheduleId>`).
pub const DEFAULT_JOB_PREFIX: &str = "job";

/// Prefix of every group name (`jobgroup_<projectId>`).
pub const DEFAULT_GROUP_PREFIX: &str = "jobgroup";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub lock: LockConfig,

    #[serde(default)]
    pub deletion: DeletionConfig,
}

/// Job and group naming.
///
/// Persisted schedule references embed these prefixes, so changing them
/// orphans every job registered under the old names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_job_prefix")]
    pub job_prefix: String,

    #[serde(default = "default_group_prefix")]
    pub group_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            job_prefix: default_job_prefix(),
            group_prefix: default_group_prefix(),
        }
    }
}

fn default_job_prefix() -> String {
    DEFAULT_JOB_PREFIX.to_string()
}

fn default_group_prefix() -> String {
    DEFAULT_GROUP_PREFIX.to_string()
}

/// How structural operations are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockStrategy {
    /// One exclusive lock for every operation.
    #[default]
    Global,
    /// One lock per group; group-wide deletion still excludes everything.
    PerGroup,
}

/// Lock configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    #[serde(default)]
    pub strategy: LockStrategy,
}

/// How `delete_all_jobs` selects groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMatchMode {
    /// Every group ending with the given name.
    #[default]
    Suffix,
    /// Only the group equal to the given name.
    Exact,
}

/// Deletion configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionConfig {
    #[serde(default)]
    pub group_match: GroupMatchMode,
}
