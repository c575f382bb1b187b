use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::{EntryStatus, TimesheetEntry};

/// Derived summary of one week. Rebuilt from the entry store on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTimesheet {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Widened so the sum of any number of `u32` entry hours cannot overflow.
    pub total_hours: u64,
    pub entries: Vec<TimesheetEntry>,
}

impl WeeklyTimesheet {
    /// Review status of the whole week, see [`crate::aggregator::week_status`].
    pub fn status(&self) -> WeekStatus {
        crate::aggregator::week_status(&self.entries)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.entries)
    }
}

/// Week-level review status shown next to each weekly row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekStatus {
    Empty,
    Approved,
    Pending,
    #[serde(rename = "In Review")]
    InReview,
}

impl fmt::Display for WeekStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "Empty",
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::InReview => "In Review",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(entries: &[TimesheetEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut counts, entry| {
            match entry.status {
                EntryStatus::Approved => counts.approved += 1,
                EntryStatus::Pending => counts.pending += 1,
                EntryStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.approved + self.pending + self.rejected
    }
}
