//! Realtime change subscriptions over `/realtime`. One socket per table.
//!
//! The reconnect loop is shared; the socket, timer and task spawning come from the
//! platform transport (`tokio-tungstenite` natively, `gloo-net` in the browser).

use std::sync::Arc;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::watch;

use crate::api::Backend;
use crate::backoff::Backoff;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{ChangeNotification, Table};
use crate::sync::SyncStore;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
use native as transport;
#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
use web as transport;

/// Backends a subscription task can hold. Native tasks run on the tokio pool and must be `Send`.
#[cfg(not(target_arch = "wasm32"))]
pub trait ChannelBackend: Backend + Send + Sync + 'static {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Backend + Send + Sync + 'static> ChannelBackend for T {}

#[cfg(target_arch = "wasm32")]
pub trait ChannelBackend: Backend + 'static {}
#[cfg(target_arch = "wasm32")]
impl<T: Backend + 'static> ChannelBackend for T {}

/// Why a connect attempt failed.
#[derive(Debug)]
pub(crate) enum ConnectError {
    /// The server refused the token during the handshake.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    Declined,
    /// Network failure with a known cause; worth retrying.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    Unreachable(String),
    /// The transport cannot tell a refused token from a network failure.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    Unknown(String),
}

pub fn channel_url(config: &ClientConfig, table: Table, token: &str) -> String {
    format!(
        "{}/realtime?table={}&token={}",
        config.ws_url,
        table.as_str(),
        urlencoding::encode(token)
    )
}

/// `None` for frames that are not a notification for `table`.
pub fn decode_notification(text: &str, table: Table) -> Option<ChangeNotification> {
    match serde_json::from_str::<ChangeNotification>(text) {
        Ok(n) if n.table == table => Some(n),
        Ok(n) => {
            log::debug!("[campus_events] realtime: ignoring {} notification on {} channel", n.table, table);
            None
        }
        Err(e) => {
            log::debug!("[campus_events] realtime: undecodable frame on {}: {}", table, e);
            None
        }
    }
}

/// Live subscription for one table. Dropping it closes the socket.
pub struct Subscription {
    table: Table,
    abort: AbortHandle,
    declined: watch::Receiver<bool>,
}

impl Subscription {
    pub fn table(&self) -> Table {
        self.table
    }

    /// Flips to `true` when the server refuses the token; the task has stopped by then.
    pub fn declined(&self) -> watch::Receiver<bool> {
        self.declined.clone()
    }

    pub fn close(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.abort.abort();
        log::debug!("[campus_events] realtime: closed {} subscription", self.table);
    }
}

/// Reports a token the server refused. Shared by the tasks of one [`SubscriptionSet`].
type DeclinedFlag = Arc<watch::Sender<bool>>;

/// Listen for changes to `table` and reload it on each one. Every successful connect reloads the
/// table too, since changes may have landed before the socket was listening. Reconnects with
/// [`Backoff::reconnect`] until the server declines the token.
pub fn subscribe<B: ChannelBackend>(
    store: Arc<SyncStore<B>>,
    config: &ClientConfig,
    token: &str,
    table: Table,
) -> Subscription {
    let (declined, _) = watch::channel(false);
    spawn_channel(store, channel_url(config, table, token), table, Arc::new(declined))
}

fn spawn_channel<B: ChannelBackend>(
    store: Arc<SyncStore<B>>,
    url: String,
    table: Table,
    declined: DeclinedFlag,
) -> Subscription {
    let (abort, registration) = AbortHandle::new_pair();
    let receiver = declined.subscribe();
    let task = Abortable::new(run_channel(store, url, table, declined), registration);
    transport::spawn(async move {
        let _ = task.await;
    });
    Subscription {
        table,
        abort,
        declined: receiver,
    }
}

async fn run_channel<B: Backend>(store: Arc<SyncStore<B>>, url: String, table: Table, declined: DeclinedFlag) {
    let mut backoff = Backoff::reconnect();
    loop {
        match transport::connect(&url).await {
            Ok(mut channel) => {
                log::info!("[campus_events] realtime: subscribed to {}", table);
                backoff.reset();
                let _ = store.refresh(table).await;

                while let Some(text) = channel.next_text().await {
                    if let Some(n) = decode_notification(&text, table) {
                        // Failures are logged by the store; the stale snapshot stays.
                        let _ = store.apply_notification(&n).await;
                    }
                }
                log::warn!("[campus_events] realtime: {} channel dropped", table);
            }
            Err(ConnectError::Declined) => {
                log::warn!("[campus_events] realtime: token declined on {}, giving up", table);
                declined.send_replace(true);
                return;
            }
            Err(ConnectError::Unreachable(e)) => {
                log::warn!("[campus_events] realtime: connect to {} failed: {}", table, e);
            }
            Err(ConnectError::Unknown(e)) => {
                log::warn!("[campus_events] realtime: connect to {} failed: {}", table, e);
                // Ask over HTTP whether the token is still good.
                if let Err(ClientError::AuthDeclined) = store.refresh(table).await {
                    log::warn!("[campus_events] realtime: token declined on {}, giving up", table);
                    declined.send_replace(true);
                    return;
                }
            }
        }
        transport::sleep(backoff.next_delay()).await;
    }
}

/// Both table subscriptions, torn down together.
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
    declined: watch::Receiver<bool>,
}

impl SubscriptionSet {
    pub fn open<B: ChannelBackend>(store: Arc<SyncStore<B>>, config: &ClientConfig, token: &str) -> Self {
        let (sender, declined) = watch::channel(false);
        let sender = Arc::new(sender);
        let subscriptions = Table::ALL
            .iter()
            .map(|table| spawn_channel(store.clone(), channel_url(config, *table, token), *table, sender.clone()))
            .collect();
        Self { subscriptions, declined }
    }

    pub fn tables(&self) -> Vec<Table> {
        self.subscriptions.iter().map(Subscription::table).collect()
    }

    /// Flips to `true` once the server has refused the token on any table. The affected task has stopped.
    pub fn declined(&self) -> watch::Receiver<bool> {
        self.declined.clone()
    }

    pub fn close(self) {
        drop(self.subscriptions);
    }
}
