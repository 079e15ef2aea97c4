// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle events.
//!
//! A store with a [`DiagnosticsHandle`] attached reports every add, removal,
//! dismissal, expiry and reset. The [`DiagnosticsCollector`] keeps the most
//! recent events in a memory-bounded circular buffer.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`NotificationEvent`]: What happened to the notification list
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Receiving and sending ends

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle, ReportEntry};
pub use events::{DiagnosticEvent, NotificationEvent};
