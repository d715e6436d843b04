use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    http::header::AUTHORIZATION,
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::{self, error::RecvError};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::decode_token;
use crate::models::{ChangeKind, ChangeNotification, Table};
use crate::AppState;

/// Fan-out of row-level changes to every open `/realtime` socket.
pub type BroadcastChannel = broadcast::Sender<ChangeNotification>;

#[derive(Deserialize)]
pub struct RealtimeQuery {
    table: Option<String>,
    token: Option<String>,
}

pub fn create_broadcast_channel() -> BroadcastChannel {
    broadcast::channel(100).0
}

/// `GET /realtime?table=events&token=…` upgrades to a socket that receives one
/// JSON [`ChangeNotification`] per change to `table`.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<RealtimeQuery>,
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<Response, ApiError> {
    // Browsers cannot set headers on a websocket handshake, so the query parameter wins.
    let token = query.token.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.strip_prefix("Bearer ").unwrap_or(s).to_string())
    });
    let token = token.ok_or_else(|| {
        tracing::warn!("Realtime connection attempt without token");
        ApiError::AuthDeclined
    })?;
    let user = decode_token(&token, &state.config.jwt_secret)?;

    let table: Table = query
        .table
        .as_deref()
        .ok_or_else(|| ApiError::Validation("table query parameter is required".to_string()))?
        .parse()
        .map_err(ApiError::Validation)?;

    tracing::info!("Realtime subscription opened: user={} table={}", user.user_id, table);

    let rx = state.broadcast_tx.subscribe();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, rx, table, user.user_id)))
}

async fn handle_socket(
    socket: WebSocket,
    mut rx: broadcast::Receiver<ChangeNotification>,
    table: Table,
    user_id: Uuid,
) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        loop {
            let notification = match rx.recv().await {
                Ok(n) if n.table == table => n,
                Ok(_) => continue,
                // Missed some messages; one generic notification makes the client reload anyway.
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Realtime subscriber lagged by {} messages (table={})", skipped, table);
                    ChangeNotification::new(table, ChangeKind::Update, None)
                }
                Err(RecvError::Closed) => break,
            };
            let text = match serde_json::to_string(&notification) {
                Ok(t) => t,
                Err(e) => {
                    tracing::error!("Failed to encode change notification: {:?}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    // Drain client frames until it closes; pings are answered by axum.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    tracing::info!("Realtime subscription closed: user={} table={}", user_id, table);
}

/// Publish a change for `table`. Having no subscribers is not an error.
pub fn broadcast_change(channel: &BroadcastChannel, table: Table, kind: ChangeKind, id: Option<Uuid>) {
    let _ = channel.send(ChangeNotification::new(table, kind, id));
}
