//! The realtime loop against a local WebSocket server.
#![cfg(not(target_arch = "wasm32"))]

mod common;

use std::sync::Arc;
use std::time::Duration;

use campus_events_client::realtime::subscribe;
use campus_events_client::{ClientConfig, SyncStore, Table};
use common::FakeBackend;
use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio::time::{sleep, timeout, Instant};
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{accept_async, accept_hdr_async};

/// Longer than any reconnect delay the client waits out between attempts here.
const QUIET: Duration = Duration::from_millis(1500);

async fn wait_until(what: &str, check: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !check() {
        assert!(Instant::now() < deadline, "timed out waiting for {}", what);
        sleep(Duration::from_millis(20)).await;
    }
}

async fn local_server() -> (TcpListener, ClientConfig) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, ClientConfig::new(format!("http://{}", addr)))
}

#[tokio::test]
async fn reloads_on_connect_on_each_frame_and_after_reconnect() {
    let (listener, config) = local_server().await;
    let store = Arc::new(SyncStore::new(FakeBackend::new()));
    let sub = subscribe(store.clone(), &config, "token", Table::Events);

    let (tcp, _) = timeout(QUIET, listener.accept()).await.unwrap().unwrap();
    let mut ws = accept_async(tcp).await.unwrap();
    wait_until("reload on first connect", || store.backend().event_fetches() == 1).await;

    ws.send(Message::Text(r#"{"table":"events","kind":"insert"}"#.into()))
        .await
        .unwrap();
    wait_until("reload on insert frame", || store.backend().event_fetches() == 2).await;

    // Frames for the other table are not this channel's business.
    ws.send(Message::Text(r#"{"table":"registrations","kind":"insert"}"#.into()))
        .await
        .unwrap();
    ws.close(None).await.unwrap();
    drop(ws);

    let (tcp, _) = timeout(Duration::from_secs(5), listener.accept()).await.unwrap().unwrap();
    let _ws = accept_async(tcp).await.unwrap();
    wait_until("reload after reconnect", || store.backend().event_fetches() == 3).await;
    assert_eq!(store.backend().registration_fetches(), 0);

    drop(sub);
    assert!(
        timeout(QUIET, listener.accept()).await.is_err(),
        "a dropped subscription must not reconnect"
    );
    assert_eq!(store.backend().event_fetches(), 3);
}

#[tokio::test]
async fn declined_handshake_stops_the_channel() {
    let (listener, config) = local_server().await;
    let store = Arc::new(SyncStore::new(FakeBackend::new()));
    let sub = subscribe(store.clone(), &config, "expired", Table::Registrations);

    let (tcp, _) = timeout(QUIET, listener.accept()).await.unwrap().unwrap();
    let refused = accept_hdr_async(tcp, |_: &Request, _: Response| -> Result<Response, ErrorResponse> {
        let mut response = ErrorResponse::new(Some("token declined".into()));
        *response.status_mut() = StatusCode::UNAUTHORIZED;
        Err(response)
    })
    .await;
    assert!(refused.is_err());

    let mut declined = sub.declined();
    timeout(Duration::from_secs(5), declined.wait_for(|d| *d))
        .await
        .expect("declined flag set")
        .unwrap();

    assert!(
        timeout(QUIET, listener.accept()).await.is_err(),
        "a declined token must not be retried"
    );
    assert_eq!(store.backend().registration_fetches(), 0);
}
