//! Terminal rendering for progress event streams

use execbrief_core::ProgressEvent;
use std::io::{self, Write};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Drain a progress channel onto stderr, one status line overwritten in
/// place. Returns once the sending side is dropped.
pub fn spawn_renderer(mut rx: UnboundedReceiver<ProgressEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            eprint!("\r[{:>3.0}%] {:<60}", event.percent, event.message);
            io::stderr().flush().ok();
        }
        eprintln!();
    })
}
