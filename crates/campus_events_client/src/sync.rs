//! Sync: fetch both tables, publish the snapshot, reload a table whenever it changes.

use tokio::sync::watch;

use crate::api::Backend;
use crate::error::ClientError;
use crate::models::{ChangeNotification, Table};
use crate::snapshot::Snapshot;

/// Sole owner of the snapshot. Everyone else reads through [`SyncStore::snapshot`] or a watch receiver.
pub struct SyncStore<B> {
    backend: B,
    snapshot: watch::Sender<Snapshot>,
}

impl<B: Backend> SyncStore<B> {
    pub fn new(backend: B) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());
        Self { backend, snapshot }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    /// Initial fetch of both tables. A failing table keeps what was there before.
    pub async fn load(&self) -> Result<(), ClientError> {
        let events = self.refresh(Table::Events).await;
        let registrations = self.refresh(Table::Registrations).await;
        events.and(registrations)
    }

    /// Re-fetch one table in full and replace that half of the snapshot.
    pub async fn refresh(&self, table: Table) -> Result<(), ClientError> {
        match table {
            Table::Events => match self.backend.fetch_events().await {
                Ok(mut events) => {
                    events.sort_by_key(|e| (e.event_date, e.event_time));
                    log::debug!("[campus_events] refresh events: {} rows", events.len());
                    self.snapshot.send_modify(|s| {
                        s.events = events;
                        s.revision += 1;
                    });
                    Ok(())
                }
                Err(e) => {
                    log::warn!("[campus_events] refresh events failed, keeping previous snapshot: {}", e);
                    Err(e)
                }
            },
            Table::Registrations => match self.backend.fetch_registrations().await {
                Ok(mut registrations) => {
                    registrations.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
                    log::debug!("[campus_events] refresh registrations: {} rows", registrations.len());
                    self.snapshot.send_modify(|s| {
                        s.registrations = registrations;
                        s.revision += 1;
                    });
                    Ok(())
                }
                Err(e) => {
                    log::warn!(
                        "[campus_events] refresh registrations failed, keeping previous snapshot: {}",
                        e
                    );
                    Err(e)
                }
            },
        }
    }

    /// `kind` and `id` are ignored; the whole table is reloaded.
    pub async fn apply_notification(&self, notification: &ChangeNotification) -> Result<(), ClientError> {
        log::debug!(
            "[campus_events] change on {} ({:?}), reloading",
            notification.table,
            notification.kind
        );
        self.refresh(notification.table).await
    }
}
