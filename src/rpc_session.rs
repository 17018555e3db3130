//! Request loop for the Markshelf JSON-lines protocol.
//!
//! Every request runs in its own task, so a slow summary never holds up the
//! requests behind it. Responses go through a single writer task and may come
//! back in a different order than the requests; clients match them by `id`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::app::App;
use crate::rpc_handler::handle_method;

/// Requests accepted per second before the loop answers "rate limit exceeded".
pub const MAX_REQUESTS_PER_SECOND: u32 = 200;

/// Simple rate limiter: max requests per second.
pub struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    pub fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    pub fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

/// Serves requests from `input` until it closes, writing responses to `output`.
///
/// Emits the ready event first. Returns once every request read so far has
/// been answered.
pub async fn serve<R, W>(app: Arc<Mutex<App>>, input: R, output: W)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<Value>();
    let writer = tokio::spawn(write_responses(rx, output));

    let _ = tx.send(json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}));

    let mut rate_limiter = RateLimiter::new(MAX_REQUESTS_PER_SECOND);
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("input closed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let _ = tx.send(json!({"id":null,"error":format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            log::warn!("rate limit exceeded");
            let _ = tx.send(json!({"id": id, "error": "rate limit exceeded"}));
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("").to_string();
        let params = req.get("params").cloned().unwrap_or(json!({}));
        let app = Arc::clone(&app);
        let tx = tx.clone();
        tokio::spawn(async move {
            let response = match handle_method(&app, &method, &params).await {
                Ok(val) => json!({"id": id, "result": val}),
                Err(err) => {
                    log::debug!("{} failed: {}", method, err);
                    json!({"id": id, "error": err})
                }
            };
            let _ = tx.send(response);
        });
    }

    // The writer drains until the last in-flight request drops its sender.
    drop(tx);
    if let Err(e) = writer.await {
        log::error!("response writer stopped: {}", e);
    }
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<Value>, mut output: W)
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let line = format!("{}\n", response);
        let written = match output.write_all(line.as_bytes()).await {
            Ok(()) => output.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            log::error!("could not write response: {}", e);
            break;
        }
    }
}
