//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod telemetry;
pub mod timesheet_system;

pub use error::*;
pub use telemetry::*;
pub use timesheet_system::*;
