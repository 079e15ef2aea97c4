// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! Stores send events through a [`DiagnosticsHandle`]; the collector drains
//! them into a circular buffer and can summarize them as a report.

use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, NotificationEvent};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending lifecycle events to the collector.
///
/// Handles are cheap to clone. Sends never block: when the channel is full
/// the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event.
    pub fn log(&self, event: NotificationEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(event));
    }
}

/// Receives events from handles and keeps the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this once per UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, event: NotificationEvent) {
        self.buffer.push(DiagnosticEvent::new(event));
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Summarizes the buffered events.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let events = self
            .buffer
            .iter()
            .map(|event| ReportEntry {
                elapsed_ms: millis_since(self.collection_started_at, event.timestamp),
                event: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            collection_started_at: self
                .collection_started_at_utc
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            events,
        }
    }
}

fn millis_since(start: Instant, at: Instant) -> u64 {
    u64::try_from(at.saturating_duration_since(start).as_millis()).unwrap_or(u64::MAX)
}

/// Serializable snapshot of the collector.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    /// RFC 3339 wall-clock time the collector was created.
    pub collection_started_at: String,
    pub events: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Milliseconds since collection started.
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub event: NotificationEvent,
}
