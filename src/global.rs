//! Process-wide registry instance.
//!
//! The instance is installed at most once and lives until the process
//! exits.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use cronreg_core::JobRegistry;
use cronreg_engine::MemoryEngine;

static REGISTRY: OnceCell<Arc<JobRegistry>> = OnceCell::new();

/// Install the process-wide registry.
///
/// Fails with the rejected registry if one is already installed.
pub fn install(registry: Arc<JobRegistry>) -> Result<(), Arc<JobRegistry>> {
    REGISTRY.set(registry)?;
    info!("Process-wide job registry installed");
    Ok(())
}

/// The installed registry, if any.
pub fn global() -> Option<Arc<JobRegistry>> {
    REGISTRY.get().cloned()
}

/// The installed registry, installing one over a fresh [`MemoryEngine`]
/// with default configuration if none is.
pub fn global_or_init() -> Arc<JobRegistry> {
    REGISTRY
        .get_or_init(|| {
            info!("No job registry installed, using in-memory engine");
            Arc::new(JobRegistry::new(Arc::new(MemoryEngine::new())))
        })
        .clone()
}
