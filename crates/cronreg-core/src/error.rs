//! Error types for job registration.

use thiserror::Error;

use cronreg_protocols::{EngineError, JobKey};

/// A failed registration. Always fatal for the call that produced it;
/// steps applied before the failure are not rolled back.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The engine rejected one of the registration steps.
    #[error("add job failed for {key}: {source}")]
    Engine {
        key: JobKey,
        #[source]
        source: EngineError,
    },

    /// The registration task did not run to completion.
    #[error("registration aborted: {0}")]
    Aborted(String),
}

impl RegistrationError {
    /// Identity of the job whose registration failed, if known.
    pub fn key(&self) -> Option<&JobKey> {
        match self {
            RegistrationError::Engine { key, .. } => Some(key),
            RegistrationError::Aborted(_) => None,
        }
    }
}
