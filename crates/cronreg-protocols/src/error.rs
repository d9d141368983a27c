//! Errors reported by scheduling engines.

use thiserror::Error;

/// Errors a scheduling engine can report.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A job or trigger with this identity is already stored.
    #[error("Object already exists: {0}")]
    ObjectAlreadyExists(String),

    /// The referenced job is not stored.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// The referenced trigger is not stored.
    #[error("Trigger not found: {0}")]
    TriggerNotFound(String),

    /// A job without a trigger must be durable.
    #[error("Job {0} has no trigger and is not durable")]
    NotDurable(String),

    /// The replacement trigger targets a different job.
    #[error("Trigger {0} does not belong to the same job as the trigger it replaces")]
    JobMismatch(String),

    /// The cron expression could not be parsed.
    #[error("Invalid cron expression '{expression}': {message}")]
    InvalidCronExpression { expression: String, message: String },

    /// The trigger window never produces a fire time.
    #[error("Trigger {0} will never fire")]
    WillNeverFire(String),

    /// The engine is not accepting calls.
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cron_display() {
        let err = EngineError::InvalidCronExpression {
            expression: "bogus".to_string(),
            message: "expected 6 fields".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("bogus"));
        assert!(display.contains("expected 6 fields"));
    }

    #[test]
    fn test_not_found_display() {
        let err = EngineError::JobNotFound("jobgroup_1.job_1".to_string());
        assert!(err.to_string().contains("Job not found"));
        assert!(err.to_string().contains("jobgroup_1.job_1"));
    }
}
