//! Job payload assembly.

use cronreg_protocols::JobDataMap;

/// Payload key of the owning project id.
pub const PROJECT_ID: &str = "projectId";

/// Payload key of the owning project flow (job) id.
pub const PROJECT_JOB_ID: &str = "projectJobId";

/// Payload key of the schedule id.
pub const SCHEDULE_ID: &str = "scheduleId";

/// Build the payload handed to job execution.
pub fn build_data_map(project_id: i64, project_flow_id: i64, schedule_id: i64) -> JobDataMap {
    JobDataMap::new()
        .with(PROJECT_ID, project_id)
        .with(PROJECT_JOB_ID, project_flow_id)
        .with(SCHEDULE_ID, schedule_id)
}
