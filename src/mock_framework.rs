//! # Mock Framework
//!
//! Utilities for testing clients without a running store actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers
//! like [`expect_create`] or [`expect_update`] to assert what the client sent
//! and answer it.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an unfiltered List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter: None, respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekCalendar;
    use crate::clients::TimesheetClient;
    use crate::config::LatencyConfig;
    use crate::domain::{EntryCreate, EntryPatch, EntryStatus, TimesheetEntry};
    use crate::entry_actor::EntryError;
    use chrono::NaiveDate;

    fn client(inner: ResourceClient<TimesheetEntry>) -> TimesheetClient {
        TimesheetClient::new(inner, WeekCalendar::new(2025).unwrap(), 52, LatencyConfig::zero())
    }

    fn stored(id: &str) -> TimesheetEntry {
        TimesheetEntry {
            id: id.into(),
            week_number: 2,
            date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            status: EntryStatus::Pending,
            hours: 3,
            project: "Project Gamma".into(),
            description: "Bug fixes".into(),
        }
    }

    #[tokio::test]
    async fn test_mock_create() {
        let (inner, mut receiver) = create_mock_client::<TimesheetEntry>(10);
        let client = client(inner);

        let task = tokio::spawn(async move {
            client
                .create_entry(EntryCreate {
                    week_number: 2,
                    date: NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
                    hours: 3,
                    project: "Project Gamma".into(),
                    description: "Bug fixes".into(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.week_number, 2);
        responder.send(Ok(stored("new-1"))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(stored("new-1")));
    }

    #[tokio::test]
    async fn test_mock_update_not_found_maps_to_entry_error() {
        let (inner, mut receiver) = create_mock_client::<TimesheetEntry>(10);
        let client = client(inner);

        let task = tokio::spawn(async move {
            client
                .update_entry("42".into(), EntryPatch::status(EntryStatus::Approved))
                .await
        });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "42");
        assert_eq!(patch.status, Some(EntryStatus::Approved));
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        assert_eq!(task.await.unwrap(), Err(EntryError::NotFound("42".into())));
    }

    #[tokio::test]
    async fn test_mock_weekly_summary_uses_one_snapshot() {
        let (inner, mut receiver) = create_mock_client::<TimesheetEntry>(10);
        let client = client(inner);

        let task = tokio::spawn(async move { client.list_weekly_timesheets().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(vec![stored("1"), stored("2")])).unwrap();

        let weeks = task.await.unwrap().unwrap();
        assert_eq!(weeks[1].total_hours, 6);
        assert_eq!(weeks[1].entries.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_dropped_responder() {
        let (inner, mut receiver) = create_mock_client::<TimesheetEntry>(10);
        let client = client(inner);

        let task = tokio::spawn(async move { client.delete_entry("7".into()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "7");
        drop(responder);

        assert!(matches!(
            task.await.unwrap(),
            Err(EntryError::ActorCommunicationError(_))
        ));
    }
}
