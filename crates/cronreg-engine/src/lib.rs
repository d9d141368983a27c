//! # cronreg Engine
//!
//! An in-memory [`SchedulingEngine`](cronreg_protocols::SchedulingEngine).
//! Jobs and triggers live for the lifetime of the engine value; nothing is
//! persisted. Cron expressions are parsed with the `cron` crate, which
//! expects the seconds-first format used by Quartz-style expressions.

pub mod memory;
pub mod schedule;
pub mod stats;

pub use memory::MemoryEngine;
pub use schedule::{first_fire_time, parse_cron};
pub use stats::{EngineStats, EngineStatsSnapshot};
