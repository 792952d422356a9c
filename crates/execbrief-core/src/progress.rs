//! Progress reporting as a stream of discrete events
//!
//! Long-running operations (document loading, query synthesis) emit
//! `ProgressEvent`s over an unbounded channel. The caller subscribes to the
//! receiving end and decides how to consume it; a closed receiver never fails
//! the producing operation. Event order is the send order.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// A single progress update from a long-running operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEvent {
    /// Completion percentage in 0..=100.
    pub percent: f64,
    /// Human-readable status line.
    pub message: String,
}

impl ProgressEvent {
    pub fn new(percent: f64, message: impl Into<String>) -> Self {
        Self {
            percent,
            message: message.into(),
        }
    }
}

/// Sending half of a progress subscription. Cheap to clone; dropping every
/// receiver silently discards further events.
#[derive(Debug, Clone, Default)]
pub struct ProgressSink {
    tx: Option<mpsc::UnboundedSender<ProgressEvent>>,
}

impl ProgressSink {
    /// A sink that discards every event.
    pub fn discard() -> Self {
        Self { tx: None }
    }

    /// Create a subscribed sink and the receiver to drain it from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Report a progress update. Never fails: a missing or closed receiver
    /// drops the event.
    pub fn report(&self, percent: f64, message: impl Into<String>) {
        if let Some(ref tx) = self.tx {
            let _ = tx.send(ProgressEvent::new(percent, message));
        }
    }
}
