//! # Timesheet Dashboard
//!
//! In-memory backend for a weekly timesheet dashboard: a seeded entry store
//! behind a single-writer actor, weekly summaries rebuilt on every read, CRUD
//! over entries, and a simulated login.
//!
//! ```no_run
//! use timesheet_dashboard::{TimesheetConfig, TimesheetSystem};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = TimesheetSystem::start(TimesheetConfig::load()?)?;
//! let session = system.auth.login("admin@tentwenty.com", "admin123").await?;
//! let weeks = system.timesheet_client.list_weekly_timesheets().await?;
//! println!("{} sees {} weeks", session.user.name, weeks.len());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod aggregator;
pub mod app_system;
pub mod auth;
pub mod calendar;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod entry_actor;
pub mod seed;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, SystemError, TimesheetSystem};
pub use clients::TimesheetClient;
pub use config::TimesheetConfig;
pub use domain::{EntryCreate, EntryPatch, EntryStatus, TimesheetEntry, WeekStatus, WeeklyTimesheet};
