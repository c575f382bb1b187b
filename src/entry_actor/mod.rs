//! Timesheet entries as managed records of the entry store.

pub mod entity;
pub mod error;

pub use error::*;
