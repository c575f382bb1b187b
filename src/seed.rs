//! Synthetic seed data for the entry store.
//!
//! The values only exist to give the dashboard something to show. Statuses are
//! drawn per entry and are not coordinated across a week.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::calendar::WeekCalendar;
use crate::domain::{EntryStatus, TimesheetEntry};

pub const PROJECTS: [&str; 5] = [
    "Project Alpha",
    "Project Beta",
    "Project Gamma",
    "Project Delta",
    "Project Epsilon",
];

pub const DESCRIPTIONS: [&str; 9] = [
    "Frontend development",
    "API integration",
    "Code review",
    "Bug fixes",
    "Testing",
    "Database optimization",
    "UI/UX improvements",
    "Documentation",
    "Meeting with client",
];

const MAX_ENTRIES_PER_WEEK: u64 = 5;
const MAX_HOURS: u64 = 8;

/// Source of pseudo-random numbers for seed generation.
pub trait SeedRng: Send {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        // Multiply-shift keeps the bias negligible for the tiny bounds used here.
        ((u128::from(self.next_u64()) * u128::from(bound)) >> 64) as u64
    }
}

fn pick<'a, T>(rng: &mut dyn SeedRng, items: &'a [T]) -> &'a T {
    &items[rng.below(items.len() as u64) as usize]
}

/// SplitMix64 generator: small, fast, and reproducible from a single seed.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from operating system entropy.
    pub fn from_entropy() -> Result<Self, getrandom::Error> {
        let mut bytes = [0u8; 8];
        getrandom::fill(&mut bytes)?;
        Ok(Self::from_seed(u64::from_le_bytes(bytes)))
    }
}

impl SeedRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Shared id sequence producing `"1"`, `"2"`, ...
///
/// Seed data and newly created entries draw from the same counter so ids stay
/// unique for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    counter: Arc<AtomicU64>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl SequentialIds {
    pub fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

/// Generate 1 to 5 entries for every week in `1..=weeks`.
pub fn generate_entries(
    calendar: &WeekCalendar,
    weeks: u32,
    rng: &mut dyn SeedRng,
    ids: &SequentialIds,
) -> Vec<TimesheetEntry> {
    let mut entries = Vec::new();

    for week_number in 1..=weeks {
        let range = calendar.week_dates(week_number);
        let count = rng.below(MAX_ENTRIES_PER_WEEK) + 1;
        debug!(week_number, count, "Generating seed entries");

        for _ in 0..count {
            let date = range.day(rng.below(7) as u32);
            let status = *pick(rng, &EntryStatus::ALL);
            let hours = (rng.below(MAX_HOURS) + 1) as u32;
            let project = pick(rng, &PROJECTS).to_string();
            let description = pick(rng, &DESCRIPTIONS).to_string();

            entries.push(TimesheetEntry {
                id: ids.next_id(),
                week_number,
                date,
                status,
                hours,
                project,
                description,
            });
        }
    }

    info!(year = calendar.year(), weeks, entries = entries.len(), "Seed data generated");
    entries
}
