//! Job and trigger identities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a job: a `(name, group)` pair unique within an engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobKey {
    /// Job name.
    pub name: String,
    /// Job group.
    pub group: String,
}

impl JobKey {
    /// Create a new job key.
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }

    /// Key of the trigger bound to this job.
    pub fn trigger_key(&self) -> TriggerKey {
        TriggerKey::new(self.name.clone(), self.group.clone())
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Identity of a trigger. Always mirrors the key of the job it fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerKey {
    /// Trigger name.
    pub name: String,
    /// Trigger group.
    pub group: String,
}

impl TriggerKey {
    /// Create a new trigger key.
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }

    /// Key of the job sharing this identity.
    pub fn job_key(&self) -> JobKey {
        JobKey::new(self.name.clone(), self.group.clone())
    }
}

impl From<&JobKey> for TriggerKey {
    fn from(key: &JobKey) -> Self {
        key.trigger_key()
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Predicate over group names, used to enumerate job keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum GroupMatcher {
    /// Group equals the value.
    Equals(String),
    /// Group ends with the value.
    EndsWith(String),
    /// Group starts with the value.
    StartsWith(String),
    /// Group contains the value.
    Contains(String),
    /// Every group.
    Anything,
}

impl GroupMatcher {
    /// Check whether a group name satisfies this matcher.
    pub fn matches(&self, group: &str) -> bool {
        match self {
            GroupMatcher::Equals(value) => group == value,
            GroupMatcher::EndsWith(value) => group.ends_with(value.as_str()),
            GroupMatcher::StartsWith(value) => group.starts_with(value.as_str()),
            GroupMatcher::Contains(value) => group.contains(value.as_str()),
            GroupMatcher::Anything => true,
        }
    }
}

impl fmt::Display for GroupMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupMatcher::Equals(value) => write!(f, "group == {value:?}"),
            GroupMatcher::EndsWith(value) => write!(f, "group ends with {value:?}"),
            GroupMatcher::StartsWith(value) => write!(f, "group starts with {value:?}"),
            GroupMatcher::Contains(value) => write!(f, "group contains {value:?}"),
            GroupMatcher::Anything => write!(f, "any group"),
        }
    }
}
