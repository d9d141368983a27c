//! # cronreg Protocols
//!
//! Interface definitions shared by the registration core and the scheduling
//! engines it drives. Contains no registration logic.
//!
//! ## Core Types
//!
//! - [`SchedulingEngine`] - Capabilities the registration core consumes
//! - [`JobKey`] / [`TriggerKey`] - Identity of a job and its trigger
//! - [`JobDetail`] / [`JobDataMap`] - Job definition and its payload
//! - [`CronTrigger`] - Cron-driven firing schedule bound to a job
//! - [`GroupMatcher`] - Predicate used to enumerate jobs by group
//! - [`TaskResponseContext`] - Command code / task request envelope

pub mod engine;
pub mod envelope;
pub mod error;
pub mod job;
pub mod key;
pub mod trigger;

pub use engine::SchedulingEngine;
pub use envelope::{CommandCode, TaskRequest, TaskResponseContext};
pub use error::{EngineError, EngineResult};
pub use job::{JobDataMap, JobDetail};
pub use key::{GroupMatcher, JobKey, TriggerKey};
pub use trigger::{CronTrigger, MisfirePolicy};
