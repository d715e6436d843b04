//! Native transport: `tokio-tungstenite` on the tokio runtime.

use std::future::Future;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::ConnectError;

pub(super) struct Channel {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Channel {
    /// Next text frame; `None` once the socket is closed or broken.
    pub(super) async fn next_text(&mut self) -> Option<String> {
        while let Some(frame) = self.socket.next().await {
            match frame {
                Ok(Message::Text(text)) => return Some(text),
                Ok(Message::Close(_)) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("[campus_events] realtime: socket error: {}", e);
                    return None;
                }
            }
        }
        None
    }
}

pub(super) async fn connect(url: &str) -> Result<Channel, ConnectError> {
    match tokio_tungstenite::connect_async(url).await {
        Ok((socket, _)) => Ok(Channel { socket }),
        Err(tungstenite::Error::Http(response)) if response.status().as_u16() == 401 => Err(ConnectError::Declined),
        Err(e) => Err(ConnectError::Unreachable(e.to_string())),
    }
}

pub(super) async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

pub(super) fn spawn<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(task);
}
