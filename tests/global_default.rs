//! Lazy installation of the process-wide registry.

use std::sync::Arc;

use cronreg::{JobRegistration, TriggerChange};

#[test]
fn test_global_or_init_installs_memory_engine() {
    let first = cronreg::global_or_init();
    let second = cronreg::global_or_init();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(cronreg::global().is_some());

    let outcome = first
        .register_job(&JobRegistration::new(
            "ScheduleJob",
            "job_1",
            "jobgroup_1",
            "0 0 * * * ?",
        ))
        .unwrap();
    assert_eq!(outcome.trigger, TriggerChange::Scheduled);
    assert!(second.delete_all_jobs("jobgroup_1"));
}
