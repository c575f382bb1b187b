use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::aggregator::build_weekly_timesheets;
use crate::calendar::WeekCalendar;
use crate::config::{simulate_latency, LatencyConfig};
use crate::domain::{EntryCreate, EntryPatch, TimesheetEntry, WeeklyTimesheet};
use crate::entry_actor::EntryError;

/// CRUD and summary operations over the entry store.
///
/// Every call waits out the configured simulated latency before reaching the
/// store, then behaves synchronously.
#[derive(Clone)]
pub struct TimesheetClient {
    inner: ResourceClient<TimesheetEntry>,
    calendar: WeekCalendar,
    weeks: u32,
    latency: LatencyConfig,
    validate_bounds: bool,
}

impl_client_methods!(TimesheetClient, TimesheetEntry, EntryError, entry);

impl TimesheetClient {
    pub fn new(
        inner: ResourceClient<TimesheetEntry>,
        calendar: WeekCalendar,
        weeks: u32,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            inner,
            calendar,
            weeks,
            latency,
            validate_bounds: false,
        }
    }

    /// Reject zero hours and week numbers outside `1..=weeks` on create/update.
    pub fn with_bounds_validation(mut self, enabled: bool) -> Self {
        self.validate_bounds = enabled;
        self
    }

    /// Snapshot copy of every entry, in store order.
    #[instrument(skip(self))]
    pub async fn list_entries(&self) -> Result<Vec<TimesheetEntry>, EntryError> {
        simulate_latency(self.latency.read()).await;
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn list_entries_by_week(&self, week_number: u32) -> Result<Vec<TimesheetEntry>, EntryError> {
        simulate_latency(self.latency.read()).await;
        debug!("Sending request");
        let entries = self
            .inner
            .list_where(move |entry: &TimesheetEntry| entry.week_number == week_number)
            .await?;
        debug!(count = entries.len(), "Entries loaded");
        Ok(entries)
    }

    /// Recompute every weekly summary from one store snapshot.
    #[instrument(skip(self))]
    pub async fn list_weekly_timesheets(&self) -> Result<Vec<WeeklyTimesheet>, EntryError> {
        simulate_latency(self.latency.read()).await;
        debug!("Sending request");
        let entries = self.inner.list().await?;
        Ok(build_weekly_timesheets(&entries, &self.calendar, self.weeks))
    }

    #[instrument(skip(self, entry), fields(week_number = entry.week_number, hours = entry.hours))]
    pub async fn create_entry(&self, entry: EntryCreate) -> Result<TimesheetEntry, EntryError> {
        simulate_latency(self.latency.write()).await;
        self.check_bounds(Some(entry.week_number), Some(entry.hours))?;
        debug!("Sending request");
        let created = self.inner.create(entry).await?;
        info!(entry_id = %created.id, "Entry created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_entry(&self, id: String, patch: EntryPatch) -> Result<TimesheetEntry, EntryError> {
        simulate_latency(self.latency.write()).await;
        self.check_bounds(patch.week_number, patch.hours)?;
        if patch.is_empty() {
            debug!("Empty patch, reading current entry");
            return self.inner.get(id.clone()).await?.ok_or(EntryError::NotFound(id));
        }
        debug!(?patch, "Sending request");
        match self.inner.update(id, patch).await {
            Ok(updated) => {
                info!(entry_id = %updated.id, status = %updated.status, "Entry updated");
                Ok(updated)
            }
            Err(e) => {
                let e = EntryError::from(e);
                warn!(error = %e, "Entry update failed");
                Err(e)
            }
        }
    }

    fn check_bounds(&self, week_number: Option<u32>, hours: Option<u32>) -> Result<(), EntryError> {
        if !self.validate_bounds {
            return Ok(());
        }
        if let Some(week_number) = week_number {
            if week_number == 0 || week_number > self.weeks {
                return Err(EntryError::Validation(format!(
                    "week number {} is outside 1..={}",
                    week_number, self.weeks
                )));
            }
        }
        if hours == Some(0) {
            return Err(EntryError::Validation("hours must be positive".to_string()));
        }
        Ok(())
    }
}
