//! Browser transport: `gloo-net` WebSocket on the page's event loop.

use std::future::Future;
use std::time::Duration;

use futures_util::StreamExt;
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::{Message, State};

use super::ConnectError;

const OPEN_POLL: Duration = Duration::from_millis(50);

pub(super) struct Channel {
    socket: WebSocket,
}

impl Channel {
    /// Next text frame; `None` once the socket is closed or broken.
    pub(super) async fn next_text(&mut self) -> Option<String> {
        while let Some(frame) = self.socket.next().await {
            match frame {
                Ok(Message::Text(text)) => return Some(text),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("[campus_events] realtime: socket error: {}", e);
                    return None;
                }
            }
        }
        None
    }
}

/// Browsers hide the handshake status, so a refused token looks like any other failed open.
pub(super) async fn connect(url: &str) -> Result<Channel, ConnectError> {
    let socket = WebSocket::open(url).map_err(|e| ConnectError::Unknown(e.to_string()))?;
    loop {
        match socket.state() {
            State::Connecting => sleep(OPEN_POLL).await,
            State::Open => return Ok(Channel { socket }),
            State::Closing | State::Closed => {
                return Err(ConnectError::Unknown("socket closed before opening".to_string()))
            }
        }
    }
}

pub(super) async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

pub(super) fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(task);
}
