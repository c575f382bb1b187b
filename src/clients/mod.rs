//! Client handles the presentation layer calls into.

#[macro_use]
mod macros;
mod timesheet_client;

pub use timesheet_client::TimesheetClient;
