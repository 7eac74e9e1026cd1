//! Live preview command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use portico_live::{LiveMessage, LiveSession};
use tokio::sync::broadcast::error::RecvError;

use crate::config::ConfigFile;

/// Run the watch command until interrupted.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>, json: bool) -> Result<()> {
    let mut live = config.live_config();
    if let Some(output) = output {
        live.output = output;
    }

    let session = LiveSession::new(live);
    let mut rx = session.hub().subscribe();

    let printer = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(msg) => report(&msg, json),
                Err(RecvError::Lagged(n)) => tracing::debug!("Skipped {} live messages", n),
                Err(RecvError::Closed) => break,
            }
        }
    });

    tokio::select! {
        result = session.run() => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Stopping"),
    }

    printer.abort();
    Ok(())
}

fn report(msg: &LiveMessage, json: bool) {
    if json {
        match serde_json::to_string(msg) {
            Ok(line) => {
                let _ = writeln!(std::io::stdout().lock(), "{}", line);
            }
            Err(e) => tracing::warn!("Failed to serialize live message: {}", e),
        }
        return;
    }

    match msg {
        LiveMessage::Saved => tracing::info!("Saved ✓"),
        LiveMessage::SaveIndicatorHidden => tracing::debug!("Save indicator hidden"),
        LiveMessage::Error { message } => tracing::error!("{}", message),
        // Logged by the session itself
        LiveMessage::PreviewUpdated { .. } | LiveMessage::Cleared => {}
    }
}
