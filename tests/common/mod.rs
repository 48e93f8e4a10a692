//! Shared utilities for client integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Start a programmable mock backend with async support.
///
/// The handler sees the request method and path and returns a status code
/// plus a JSON body. Returns the bound address.
pub async fn start_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String, String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = Vec::new();
                        let mut chunk = [0u8; 1024];
                        let mut header_end = None;
                        loop {
                            if header_end.is_none() {
                                header_end =
                                    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4);
                            }
                            if let Some(end) = header_end {
                                // Drain the declared body so the client never
                                // sees a reset before reading the response.
                                let head = String::from_utf8_lossy(&buf[..end]).to_string();
                                let content_length = head
                                    .lines()
                                    .find_map(|l| {
                                        let (name, value) = l.split_once(':')?;
                                        name.eq_ignore_ascii_case("content-length")
                                            .then(|| value.trim().parse::<usize>().ok())?
                                    })
                                    .unwrap_or(0);
                                if buf.len() >= end + content_length {
                                    break;
                                }
                            }
                            match socket.read(&mut chunk).await {
                                Ok(0) => break,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                                Err(_) => return,
                            }
                        }
                        let head = String::from_utf8_lossy(&buf).to_string();
                        let mut parts = head.split_whitespace();
                        let method = parts.next().unwrap_or("").to_string();
                        let path = parts.next().unwrap_or("").to_string();

                        let (status, body) = f(method, path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Tracing layer counting error-level events, for asserting the interceptor
/// logs each failure exactly once.
#[derive(Clone, Default)]
pub struct ErrorEventCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorEventCounter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorEventCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
