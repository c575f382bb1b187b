//! View helpers for the weekly dashboard: paging, headline stats, and the
//! dismissible failure notice.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::{EntryStatus, WeeklyTimesheet};

/// One page of a list plus the numbers needed for "Showing X - Y of Z".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    /// 1-based index of the first item shown.
    pub first_index: usize,
    /// 1-based index of the last item shown.
    pub last_index: usize,
    pub total_items: usize,
}

/// Slice out 1-based `page`. Pages past the end come back empty, with both
/// indices 0.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = page.saturating_sub(1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    let (first_index, last_index) = if start == end { (0, 0) } else { (start + 1, end) };

    Page {
        items: items[start..end].to_vec(),
        current_page: page,
        total_pages,
        first_index,
        last_index,
        total_items,
    }
}

const PAGE_BUTTONS: usize = 5;

/// Page numbers to show as buttons: at most five, pinned to the start for
/// pages 1-3, to the end for the last three pages, centred otherwise.
pub fn page_window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
    if total_pages <= PAGE_BUTTONS {
        1..=total_pages
    } else if current <= 3 {
        1..=PAGE_BUTTONS
    } else if current >= total_pages - 2 {
        total_pages - (PAGE_BUTTONS - 1)..=total_pages
    } else {
        current - 2..=current + 2
    }
}

/// Move to `requested` only if it is a real page; otherwise stay put.
pub fn go_to_page(current: usize, requested: usize, total_pages: usize) -> usize {
    if (1..=total_pages).contains(&requested) {
        requested
    } else {
        current
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_entries: usize,
    pub total_hours: u64,
    pub pending_entries: usize,
}

impl DashboardStats {
    pub fn from_weeks(weeks: &[WeeklyTimesheet]) -> Self {
        weeks.iter().fold(Self::default(), |mut stats, week| {
            stats.total_entries += week.entries.len();
            stats.total_hours = stats.total_hours.saturating_add(week.total_hours);
            stats.pending_entries += week
                .entries
                .iter()
                .filter(|entry| entry.status == EntryStatus::Pending)
                .count();
            stats
        })
    }
}

/// Operation whose failure is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedOperation {
    Load,
    Update,
    Delete,
}

/// Generic failure banner shown until the user dismisses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardNotice {
    message: Option<&'static str>,
}

impl DashboardNotice {
    pub fn report(&mut self, operation: FailedOperation) {
        self.message = Some(match operation {
            FailedOperation::Load => "Failed to load timesheets",
            FailedOperation::Update => "Failed to update entry",
            FailedOperation::Delete => "Failed to delete entry",
        });
    }

    pub fn message(&self) -> Option<&'static str> {
        self.message
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}
