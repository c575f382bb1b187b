//! Builds the weekly summary view from a snapshot of the entry store.
//!
//! Nothing is cached: every call recomputes from the entries it is given.

use crate::calendar::WeekCalendar;
use crate::domain::{EntryStatus, TimesheetEntry, WeekStatus, WeeklyTimesheet};

/// One [`WeeklyTimesheet`] per week in `1..=weeks`, entries kept in store order.
pub fn build_weekly_timesheets(
    entries: &[TimesheetEntry],
    calendar: &WeekCalendar,
    weeks: u32,
) -> Vec<WeeklyTimesheet> {
    (1..=weeks)
        .map(|week_number| {
            let range = calendar.week_dates(week_number);
            let week_entries: Vec<TimesheetEntry> = entries
                .iter()
                .filter(|entry| entry.week_number == week_number)
                .cloned()
                .collect();
            let total_hours = week_entries.iter().map(|entry| u64::from(entry.hours)).sum();

            WeeklyTimesheet {
                week_number,
                start_date: range.start_date,
                end_date: range.end_date,
                total_hours,
                entries: week_entries,
            }
        })
        .collect()
}

/// Review status of a week.
///
/// Precedence: all Approved, then any Pending, then any Rejected. A week with
/// no entries is `Empty`.
pub fn week_status(entries: &[TimesheetEntry]) -> WeekStatus {
    let has = |status: EntryStatus| entries.iter().any(|entry| entry.status == status);

    if entries.is_empty() {
        WeekStatus::Empty
    } else if entries.iter().all(|entry| entry.status == EntryStatus::Approved) {
        WeekStatus::Approved
    } else if has(EntryStatus::Pending) {
        WeekStatus::Pending
    } else if has(EntryStatus::Rejected) {
        WeekStatus::InReview
    } else {
        WeekStatus::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{generate_entries, SequentialIds, SplitMix64};
    use chrono::{NaiveDate, TimeDelta};
    use pretty_assertions::assert_eq;

    fn entry(id: &str, week_number: u32, hours: u32, status: EntryStatus) -> TimesheetEntry {
        TimesheetEntry {
            id: id.to_string(),
            week_number,
            date: NaiveDate::from_ymd_opt(2025, 2, 13).unwrap(),
            status,
            hours,
            project: "Project Alpha".into(),
            description: "Testing".into(),
        }
    }

    fn calendar() -> WeekCalendar {
        WeekCalendar::new(2025).unwrap()
    }

    #[test]
    fn test_one_summary_per_week_with_valid_ranges() {
        let entries = generate_entries(&calendar(), 52, &mut SplitMix64::from_seed(3), &SequentialIds::default());
        let weeks = build_weekly_timesheets(&entries, &calendar(), 52);

        assert_eq!(weeks.len(), 52);
        for (index, week) in weeks.iter().enumerate() {
            assert_eq!(week.week_number, index as u32 + 1);
            assert!(week.start_date < week.end_date);
            assert_eq!(week.end_date - week.start_date, TimeDelta::days(6));
            assert_eq!(week.total_hours, week.entries.iter().map(|e| u64::from(e.hours)).sum::<u64>());
            assert!(week.entries.iter().all(|e| e.week_number == week.week_number));
        }
        let aggregated: usize = weeks.iter().map(|w| w.entries.len()).sum();
        assert_eq!(aggregated, entries.len());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let entries = generate_entries(&calendar(), 52, &mut SplitMix64::from_seed(5), &SequentialIds::default());
        assert_eq!(
            build_weekly_timesheets(&entries, &calendar(), 52),
            build_weekly_timesheets(&entries, &calendar(), 52)
        );
    }

    #[test]
    fn test_store_order_is_preserved() {
        let entries = vec![
            entry("3", 2, 1, EntryStatus::Pending),
            entry("1", 2, 2, EntryStatus::Approved),
            entry("2", 1, 4, EntryStatus::Approved),
        ];
        let weeks = build_weekly_timesheets(&entries, &calendar(), 3);
        let ids: Vec<&str> = weeks[1].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(weeks[1].total_hours, 3);
        assert_eq!(weeks[0].total_hours, 4);
    }

    #[test]
    fn test_empty_week() {
        let weeks = build_weekly_timesheets(&[], &calendar(), 52);
        let week7 = &weeks[6];
        assert_eq!(week7.week_number, 7);
        assert_eq!(week7.total_hours, 0);
        assert!(week7.entries.is_empty());
        assert_eq!(week7.status(), WeekStatus::Empty);
    }

    #[test]
    fn test_status_precedence() {
        use EntryStatus::*;
        let week = |statuses: &[EntryStatus]| {
            let entries: Vec<_> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| entry(&i.to_string(), 1, 1, *s))
                .collect();
            week_status(&entries)
        };

        assert_eq!(week(&[]), WeekStatus::Empty);
        assert_eq!(week(&[Approved, Approved]), WeekStatus::Approved);
        assert_eq!(week(&[Approved, Pending]), WeekStatus::Pending);
        assert_eq!(week(&[Rejected, Pending]), WeekStatus::Pending);
        assert_eq!(week(&[Rejected, Approved]), WeekStatus::InReview);
        assert_eq!(week(&[Rejected]), WeekStatus::InReview);
    }

    #[test]
    fn test_total_hours_beyond_u32() {
        let entries = vec![
            entry("1", 7, u32::MAX, EntryStatus::Pending),
            entry("2", 7, u32::MAX, EntryStatus::Pending),
        ];
        let weeks = build_weekly_timesheets(&entries, &calendar(), 52);
        assert_eq!(weeks[6].total_hours, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_status_counts() {
        let entries = vec![
            entry("1", 1, 1, EntryStatus::Pending),
            entry("2", 1, 1, EntryStatus::Approved),
            entry("3", 1, 1, EntryStatus::Approved),
        ];
        let weeks = build_weekly_timesheets(&entries, &calendar(), 1);
        let counts = weeks[0].status_counts();
        assert_eq!((counts.approved, counts.pending, counts.rejected), (2, 1, 0));
        assert_eq!(counts.total(), 3);
    }
}
