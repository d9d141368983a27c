//! # cronreg
//!
//! Concurrency-safe registration of cron-scheduled jobs over a shared
//! scheduling engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │   JobRegistry / AsyncJobRegistry   (cronreg-core)        │
//! │   naming · payload · mutation lock · upsert · deletion   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ Arc<dyn SchedulingEngine>
//! ┌────────────────────────────▼─────────────────────────────┐
//! │   SchedulingEngine         (cronreg-protocols)           │
//! │   MemoryEngine             (cronreg-engine)              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Most embedders construct a [`JobRegistry`] around their own engine and
//! keep it in application state. Code that needs one registry per process
//! can [`install`] it once and reach it through [`global`].

mod global;

pub use global::{global, global_or_init, install};

pub use cronreg_config::{ConfigError, ConfigLoader, GroupMatchMode, LockStrategy, RegistryConfig};
pub use cronreg_core::{
    AsyncJobRegistry, JobChange, JobRegistration, JobRegistry, Naming, RegistrationError,
    RegistrationOutcome, TriggerChange, build_data_map, build_group_name, build_job_name,
};
pub use cronreg_engine::MemoryEngine;
pub use cronreg_protocols::{
    CronTrigger, EngineError, EngineResult, GroupMatcher, JobDataMap, JobDetail, JobKey,
    SchedulingEngine, TriggerKey,
};

pub mod protocols {
    pub use cronreg_protocols::*;
}

pub mod config {
    pub use cronreg_config::*;
}

pub mod engine {
    pub use cronreg_engine::*;
}

pub mod registry {
    pub use cronreg_core::*;
}
