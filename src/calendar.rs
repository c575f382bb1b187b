//! Week arithmetic for the ISO 8601 week-numbering year.

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// Monday-to-Sunday span of one numbered week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Day `offset` (0 = Monday) of the week.
    pub fn day(&self, offset: u32) -> NaiveDate {
        self.start_date + TimeDelta::days(i64::from(offset.min(6)))
    }
}

/// Week calendar anchored on one year.
///
/// Week 1 is the week that contains January 4th; every later week follows on a
/// 7-day stride, so numbers past the last ISO week keep counting into the next
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCalendar {
    year: i32,
    first_monday: NaiveDate,
}

impl WeekCalendar {
    /// Returns `None` when `year` is outside the supported date range.
    pub fn new(year: i32) -> Option<Self> {
        let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
        let back = TimeDelta::days(i64::from(jan4.weekday().num_days_from_monday()));
        Some(Self {
            year,
            first_monday: jan4 - back,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Start (Monday) and end (Sunday) of `week_number`. Week 0 is treated as week 1.
    pub fn week_dates(&self, week_number: u32) -> WeekRange {
        let start_date = self.first_monday + TimeDelta::weeks(i64::from(week_number.saturating_sub(1)));
        WeekRange {
            start_date,
            end_date: start_date + TimeDelta::days(6),
        }
    }
}
