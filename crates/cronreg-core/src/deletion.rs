//! Single-job and group-wide deletion.
//!
//! Both functions must run under the mutation lock. Error conversion into
//! the boolean result happens in the facade.

use tracing::info;

use cronreg_protocols::{EngineResult, GroupMatcher, JobKey, SchedulingEngine};

/// Delete one job. A missing job counts as already deleted.
pub(crate) fn delete_one(engine: &dyn SchedulingEngine, key: &JobKey) -> EngineResult<bool> {
    if !engine.check_job_exists(key)? {
        return Ok(true);
    }
    info!(
        "try to delete job, job name: {}, job group name: {}",
        key.name, key.group
    );
    engine.delete_job(key)
}

/// Delete every job whose group satisfies `matcher` in one bulk call.
pub(crate) fn delete_group(
    engine: &dyn SchedulingEngine,
    matcher: &GroupMatcher,
) -> EngineResult<bool> {
    let keys = engine.job_keys(matcher)?;
    if keys.is_empty() {
        return Ok(true);
    }
    info!("try to delete {} jobs where {}", keys.len(), matcher);
    engine.delete_jobs(&keys)
}
