//! Markshelf RPC Server: JSON-RPC over stdin/stdout for a desktop or web shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"url":"...","title":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Requests are handled concurrently, so responses can arrive out of order.
//!
//! Logs go to stderr, filtered by `MARKSHELF_LOG` (default `info`).

use std::io;
use std::sync::{Arc, Mutex};

use markshelf::app::App;
use markshelf::rpc_session::serve;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "MARKSHELF_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let config_path = std::env::args().nth(1);
    let app = Arc::new(Mutex::new(App::new(config_path)));

    serve(app, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await;
    log::info!("input closed, shutting down");
}
