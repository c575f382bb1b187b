use chrono::NaiveDate;
use tracing::{error, info, warn, Instrument};

use timesheet_dashboard::dashboard::{go_to_page, page_window, paginate, DashboardNotice, DashboardStats, FailedOperation};
use timesheet_dashboard::{
    setup_tracing, EntryCreate, EntryPatch, EntryStatus, TimesheetConfig, TimesheetSystem,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = TimesheetConfig::load()?;
    info!(?config, "Starting timesheet demo");

    let system = TimesheetSystem::start(config)?;
    let client = system.timesheet_client.clone();
    let mut notice = DashboardNotice::default();

    let session = system.auth.login("admin@tentwenty.com", "admin123").await?;
    info!(user = %session.user.name, "Signed in");

    let span = tracing::info_span!("dashboard");
    async {
        let weeks = match client.list_weekly_timesheets().await {
            Ok(weeks) => weeks,
            Err(e) => {
                error!(error = %e, "Loading timesheets failed");
                notice.report(FailedOperation::Load);
                return;
            }
        };

        let stats = DashboardStats::from_weeks(&weeks);
        info!(
            total_entries = stats.total_entries,
            total_hours = stats.total_hours,
            pending = stats.pending_entries,
            "Dashboard stats"
        );

        let per_page = system.config.weeks_per_page;
        let total_pages = paginate(&weeks, 1, per_page).total_pages;
        let page_number = go_to_page(1, 2, total_pages);
        let page = paginate(&weeks, page_number, per_page);
        info!(
            "Showing weeks {} - {} of {}",
            page.first_index, page.last_index, page.total_items
        );
        let buttons: Vec<usize> = page_window(page.current_page, page.total_pages).collect();
        info!(?buttons, "Page buttons");
        for week in &page.items {
            info!(
                week = week.week_number,
                range = %format!("{} - {}", week.start_date, week.end_date),
                hours = week.total_hours,
                entries = week.entries.len(),
                status = %week.status(),
                "Week"
            );
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("entry_lifecycle");
    async {
        let created = match client
            .create_entry(EntryCreate {
                week_number: 7,
                date: NaiveDate::from_ymd_opt(2025, 2, 13).unwrap_or_default(),
                hours: 5,
                project: "Project Alpha".to_string(),
                description: "Code review".to_string(),
            })
            .await
        {
            Ok(created) => created,
            Err(e) => {
                error!(error = %e, "Create failed");
                return;
            }
        };

        if client
            .update_entry(created.id.clone(), EntryPatch::status(EntryStatus::Approved))
            .await
            .is_err()
        {
            notice.report(FailedOperation::Update);
        }

        match client.list_entries_by_week(7).await {
            Ok(entries) => info!(count = entries.len(), "Week 7 entries after update"),
            Err(e) => warn!(error = %e, "Could not reload week 7"),
        }

        if client.delete_entry(created.id.clone()).await.is_err() {
            notice.report(FailedOperation::Delete);
        }
        // A second delete of the same id fails and surfaces the notice.
        if client.delete_entry(created.id).await.is_err() {
            notice.report(FailedOperation::Delete);
        }
    }
    .instrument(span)
    .await;

    if let Some(message) = notice.message() {
        warn!(message, "Notice shown to user");
        notice.clear();
    }

    if let Ok(snapshot) = serde_json::to_string(&session.user) {
        info!(user = %snapshot, "Signing out");
    }
    system.auth.logout().await?;

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
