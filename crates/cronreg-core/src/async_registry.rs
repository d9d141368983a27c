//! Tokio adapter for [`JobRegistry`].
//!
//! Registry calls block on the mutation lock and on the engine, so they run
//! on the blocking pool instead of an async worker.

use std::sync::Arc;

use tracing::error;

use crate::error::RegistrationError;
use crate::registration::{JobRegistration, RegistrationOutcome};
use crate::registry::JobRegistry;

/// Cloneable async handle over a shared [`JobRegistry`].
#[derive(Clone)]
pub struct AsyncJobRegistry {
    inner: Arc<JobRegistry>,
}

impl AsyncJobRegistry {
    pub fn new(inner: Arc<JobRegistry>) -> Self {
        Self { inner }
    }

    /// The wrapped registry.
    pub fn inner(&self) -> &Arc<JobRegistry> {
        &self.inner
    }

    /// See [`JobRegistry::register_job`].
    pub async fn register_job(
        &self,
        registration: JobRegistration,
    ) -> Result<RegistrationOutcome, RegistrationError> {
        let registry = self.inner.clone();
        tokio::task::spawn_blocking(move || registry.register_job(&registration))
            .await
            .map_err(|e| RegistrationError::Aborted(e.to_string()))?
    }

    /// See [`JobRegistry::delete_job`].
    pub async fn delete_job(&self, name: impl Into<String>, group: impl Into<String>) -> bool {
        let registry = self.inner.clone();
        let (name, group) = (name.into(), group.into());
        run_blocking(move || registry.delete_job(&name, &group)).await
    }

    /// See [`JobRegistry::delete_all_jobs`].
    pub async fn delete_all_jobs(&self, group: impl Into<String>) -> bool {
        let registry = self.inner.clone();
        let group = group.into();
        run_blocking(move || registry.delete_all_jobs(&group)).await
    }
}

async fn run_blocking<F>(f: F) -> bool
where
    F: FnOnce() -> bool + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap_or_else(|e| {
        error!("Blocking registry task failed: {}", e);
        false
    })
}
