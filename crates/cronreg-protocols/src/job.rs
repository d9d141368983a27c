//! Job definitions and their payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::key::JobKey;

/// Payload attached to a job: string keys mapped to arbitrary JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobDataMap(HashMap<String, Value>);

impl JobDataMap {
    /// Create an empty data map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a value, returning the previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merge `other` into this map. Colliding keys take the value from
    /// `other`; keys only present here are kept.
    ///
    /// Returns `true` if any entry changed.
    pub fn merge(&mut self, other: &JobDataMap) -> bool {
        let mut changed = false;
        for (key, value) in &other.0 {
            if self.0.get(key) != Some(value) {
                self.0.insert(key.clone(), value.clone());
                changed = true;
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for JobDataMap {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for JobDataMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A job as stored by a scheduling engine.
///
/// `job_type` names the executable job logic; it is opaque to the
/// registration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    /// Job identity.
    pub key: JobKey,
    /// Reference to the job logic.
    pub job_type: String,
    /// Job payload.
    #[serde(default)]
    pub data: JobDataMap,
    /// Whether the job survives without any trigger pointing at it.
    #[serde(default = "default_durable")]
    pub durable: bool,
}

fn default_durable() -> bool {
    true
}

impl JobDetail {
    /// Create a durable job with an empty payload.
    pub fn new(key: JobKey, job_type: impl Into<String>) -> Self {
        Self {
            key,
            job_type: job_type.into(),
            data: JobDataMap::new(),
            durable: true,
        }
    }

    /// Install a payload.
    pub fn with_data(mut self, data: JobDataMap) -> Self {
        self.data = data;
        self
    }

    /// Set durability.
    pub fn with_durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_is_additive() {
        let mut stored = JobDataMap::new().with("a", 1);
        let changed = stored.merge(&JobDataMap::new().with("b", 2));
        assert!(changed);
        assert_eq!(stored.get("a"), Some(&json!(1)));
        assert_eq!(stored.get("b"), Some(&json!(2)));
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_merge_overwrites_collisions() {
        let mut stored = JobDataMap::new().with("a", 1).with("keep", "x");
        stored.merge(&JobDataMap::new().with("a", 5));
        assert_eq!(stored.get("a"), Some(&json!(5)));
        assert_eq!(stored.get("keep"), Some(&json!("x")));
    }

    #[test]
    fn test_merge_identical_reports_unchanged() {
        let mut stored = JobDataMap::new().with("a", 1).with("b", 2);
        assert!(!stored.merge(&JobDataMap::new().with("a", 1)));
        assert!(!stored.merge(&JobDataMap::new()));
    }

    #[test]
    fn test_job_detail_defaults() {
        let detail = JobDetail::new(JobKey::new("job_1", "jobgroup_1"), "ScheduleJob");
        assert!(detail.durable);
        assert!(detail.data.is_empty());
    }

    #[test]
    fn test_job_detail_deserialize_defaults() {
        let detail: JobDetail = serde_json::from_value(json!({
            "key": {"name": "job_1", "group": "jobgroup_1"},
            "job_type": "ScheduleJob"
        }))
        .unwrap();
        assert!(detail.durable);
        assert!(detail.data.is_empty());
    }
}
