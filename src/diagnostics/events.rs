// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle events.

use std::time::Instant;

use serde::Serialize;

use crate::notifications::{NotificationId, Severity};

/// A lifecycle event with the moment it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: NotificationEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: NotificationEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// What happened to the notification list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A notification was appended.
    Added {
        id: NotificationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        severity: Option<Severity>,
    },

    /// A notification was removed by id.
    Removed { id: NotificationId },

    /// The user closed a notification.
    Dismissed { id: NotificationId },

    /// A dismiss request was refused because the notification is not dismissable.
    DismissRefused { id: NotificationId },

    /// A notification outlived its display duration.
    Expired { id: NotificationId },

    /// The whole list was replaced.
    Reset { count: usize },

    /// A newly assigned id was already present in the list (legacy id policy).
    IdCollision { id: NotificationId },
}

impl NotificationEvent {
    /// Returns the notification the event is about, if any.
    #[must_use]
    pub fn id(&self) -> Option<NotificationId> {
        match self {
            NotificationEvent::Added { id, .. }
            | NotificationEvent::Removed { id }
            | NotificationEvent::Dismissed { id }
            | NotificationEvent::DismissRefused { id }
            | NotificationEvent::Expired { id }
            | NotificationEvent::IdCollision { id } => Some(*id),
            NotificationEvent::Reset { .. } => None,
        }
    }
}
