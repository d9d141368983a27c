//! The process-wide registry. Kept in its own test binary so no other test
//! observes the installed instance.

use std::sync::Arc;

use cronreg::{JobKey, JobRegistration, JobRegistry, MemoryEngine, SchedulingEngine};

#[test]
fn test_install_once_then_share() {
    assert!(cronreg::global().is_none());

    let engine = Arc::new(MemoryEngine::new());
    let registry = Arc::new(JobRegistry::new(engine.clone()));
    assert!(cronreg::install(registry.clone()).is_ok());

    let rejected = Arc::new(JobRegistry::new(Arc::new(MemoryEngine::new())));
    assert!(cronreg::install(rejected).is_err());

    let installed = cronreg::global().unwrap();
    assert!(Arc::ptr_eq(&installed, &registry));
    assert!(Arc::ptr_eq(&cronreg::global_or_init(), &registry));

    cronreg::global_or_init()
        .register_job(&JobRegistration::new(
            "ScheduleJob",
            "job_1",
            "jobgroup_1",
            "0 0 * * * ?",
        ))
        .unwrap();
    assert!(engine
        .check_job_exists(&JobKey::new("job_1", "jobgroup_1"))
        .unwrap());
}
