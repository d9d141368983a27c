//! # cronreg Core
//!
//! Idempotent registration of cron-scheduled jobs over a shared, mutable
//! scheduling engine.
//!
//! Declaring the same job identity twice updates rather than duplicates:
//! payloads are merged additively and the trigger is only rescheduled when
//! the cron expression actually changed. Every structural operation runs
//! under one [`MutationLock`], so concurrent declarations never interleave.
//!
//! ## Key Components
//!
//! - [`JobRegistry`]: Facade exposing registration and deletion
//! - [`AsyncJobRegistry`]: Tokio adapter running the facade on the blocking pool
//! - [`JobRegistration`]: A job declaration
//! - [`Naming`]: Job and group name derivation
//! - [`build_data_map`]: Job payload assembly
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cronreg_core::{build_data_map, build_group_name, build_job_name, JobRegistration, JobRegistry};
//!
//! let registry = JobRegistry::new(Arc::new(engine));
//! let registration = JobRegistration::new(
//!     "ScheduleJob",
//!     build_job_name(42),
//!     build_group_name(7),
//!     "0 0 2 * * ?",
//! )
//! .with_data(build_data_map(7, 3, 42));
//! registry.register_job(&registration)?;
//! ```

pub mod async_registry;
pub mod error;
pub mod lock;
pub mod naming;
pub mod payload;
pub mod registration;
pub mod registry;

mod deletion;

pub use async_registry::AsyncJobRegistry;
pub use error::RegistrationError;
pub use lock::{MutationGuard, MutationLock};
pub use naming::{Naming, build_group_name, build_job_name};
pub use payload::build_data_map;
pub use registration::{JobChange, JobRegistration, RegistrationOutcome, TriggerChange};
pub use registry::JobRegistry;
