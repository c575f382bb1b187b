use crate::actor_framework::Entity;
use crate::domain::{EntryCreate, EntryPatch, EntryStatus, TimesheetEntry};

impl Entity for TimesheetEntry {
    type Id = String;
    type CreatePayload = EntryCreate;
    type Patch = EntryPatch;

    fn id(&self) -> &String {
        &self.id
    }

    /// Builds a new entry from the submitted fields.
    ///
    /// New work always starts out as [`EntryStatus::Pending`].
    fn from_create(id: String, payload: EntryCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            week_number: payload.week_number,
            date: payload.date,
            status: EntryStatus::Pending,
            hours: payload.hours,
            project: payload.project,
            description: payload.description,
        })
    }

    /// Merges the supplied fields. The id is never part of a patch.
    fn on_update(&mut self, patch: EntryPatch) -> Result<(), String> {
        if let Some(week_number) = patch.week_number {
            self.week_number = week_number;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(project) = patch.project {
            self.project = project;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        Ok(())
    }
}
