use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review state of a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub const ALL: [EntryStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    pub id: String,
    pub week_number: u32,
    pub date: NaiveDate,
    pub status: EntryStatus,
    pub hours: u32,
    pub project: String,
    pub description: String,
}

/// Fields supplied when logging new work. The store assigns `id` and the
/// status always starts as [`EntryStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCreate {
    pub week_number: u32,
    pub date: NaiveDate,
    pub hours: u32,
    pub project: String,
    pub description: String,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryPatch {
    pub week_number: Option<u32>,
    pub date: Option<NaiveDate>,
    pub status: Option<EntryStatus>,
    pub hours: Option<u32>,
    pub project: Option<String>,
    pub description: Option<String>,
}

impl EntryPatch {
    pub fn status(status: EntryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
