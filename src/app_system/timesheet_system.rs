use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::auth::AuthService;
use crate::calendar::WeekCalendar;
use crate::clients::TimesheetClient;
use crate::config::{ConfigError, TimesheetConfig};
use crate::domain::TimesheetEntry;
use crate::seed::{generate_entries, SeedRng, SequentialIds, SplitMix64};

use super::SystemError;

/// The running application: the seeded entry store plus the services that
/// front it.
///
/// Responsible for starting the store actor, wiring clients to it, and
/// handling shutdown.
pub struct TimesheetSystem {
    pub timesheet_client: TimesheetClient,
    pub auth: AuthService,
    pub config: TimesheetConfig,
    handle: tokio::task::JoinHandle<()>,
}

impl TimesheetSystem {
    /// Generate seed data and start the entry store. Must run inside a tokio runtime.
    pub fn start(config: TimesheetConfig) -> Result<Self, SystemError> {
        config.validate()?;
        let calendar = WeekCalendar::new(config.year).ok_or_else(|| ConfigError::InvalidValue {
            field: "year".to_string(),
            reason: "outside the supported date range".to_string(),
        })?;

        let mut rng: Box<dyn SeedRng> = match config.seed {
            Some(seed) => {
                info!(seed, "Using fixed seed");
                Box::new(SplitMix64::from_seed(seed))
            }
            None => Box::new(SplitMix64::from_entropy().map_err(|e| SystemError::Seed(e.to_string()))?),
        };

        let ids = SequentialIds::default();
        let entries = generate_entries(&calendar, config.weeks, rng.as_mut(), &ids);
        Ok(Self::start_with_entries(config, calendar, ids, entries))
    }

    /// Start the store with caller-supplied contents instead of generated ones.
    ///
    /// `ids` must already have been advanced past every id in `entries`.
    pub fn start_with_entries(
        config: TimesheetConfig,
        calendar: WeekCalendar,
        ids: SequentialIds,
        entries: Vec<TimesheetEntry>,
    ) -> Self {
        info!(year = config.year, weeks = config.weeks, "Starting timesheet system");

        let (store_actor, store_client) =
            ResourceActor::<TimesheetEntry>::with_items(config.channel_buffer, move || ids.next_id(), entries);
        let handle = tokio::spawn(store_actor.run());

        let timesheet_client = TimesheetClient::new(store_client, calendar, config.weeks, config.latency)
            .with_bounds_validation(config.validate_bounds);
        let auth = AuthService::new(config.latency);

        Self {
            timesheet_client,
            auth,
            config,
            handle,
        }
    }

    /// Close the store and wait for its task to finish.
    ///
    /// The store stops once every `TimesheetClient` clone has been dropped, so
    /// callers must release their own clones first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.timesheet_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
