// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, the `NewNotification`
//! draft callers hand to the store, and the `Severity` enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier assigned to a notification by the store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, staying at `u64::MAX` once reached.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level selects the colors a toast settles on.
///
/// Untyped notifications carry no severity (`Option<Severity>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
    Success,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Error,
        Severity::Success,
        Severity::Warning,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller-supplied part of a notification.
///
/// The store assigns the id and creation time when the draft is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub message: String,
    pub severity: Option<Severity>,
    /// Persistent notifications are never auto-dismissed.
    pub is_persistent: bool,
    /// Whether the user may close the notification.
    pub is_dismissable: bool,
}

impl NewNotification {
    /// Creates an untyped, dismissable, non-persistent draft.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: None,
            is_persistent: false,
            is_dismissable: true,
        }
    }

    /// Creates a draft with the given severity.
    pub fn typed(message: impl Into<String>, severity: Severity) -> Self {
        Self::new(message).with_severity(severity)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Marks the notification as persistent (no auto-dismiss).
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.is_persistent = true;
        self
    }

    /// Prevents the user from closing the notification.
    #[must_use]
    pub fn not_dismissable(mut self) -> Self {
        self.is_dismissable = false;
        self
    }
}

/// A notification held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Option<Severity>,
    is_persistent: bool,
    is_dismissable: bool,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn from_draft(
        id: NotificationId,
        draft: NewNotification,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            message: draft.message,
            severity: draft.severity,
            is_persistent: draft.is_persistent,
            is_dismissable: draft.is_dismissable,
            created_at,
        }
    }

    /// Builds a record with an explicit id, for [`Store::reset`](super::Store::reset).
    pub fn with_id(id: NotificationId, draft: NewNotification) -> Self {
        Self::from_draft(id, draft, Instant::now())
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.is_persistent
    }

    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        self.is_dismissable
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether the notification has outlived `lifetime` at `now`.
    ///
    /// Persistent notifications never expire.
    #[must_use]
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        !self.is_persistent && now.saturating_duration_since(self.created_at) >= lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_draft_is_untyped_dismissable_and_transient() {
        let draft = NewNotification::new("hello");
        assert_eq!(draft.message, "hello");
        assert_eq!(draft.severity, None);
        assert!(draft.is_dismissable);
        assert!(!draft.is_persistent);
    }

    #[test]
    fn draft_builder_pattern_works() {
        let draft = NewNotification::typed("disk full", Severity::Error)
            .persistent()
            .not_dismissable();

        assert_eq!(draft.severity, Some(Severity::Error));
        assert!(draft.is_persistent);
        assert!(!draft.is_dismissable);
    }

    #[test]
    fn persistent_notifications_never_expire() {
        let created = Instant::now();
        let note = Notification::from_draft(
            NotificationId::new(0),
            NewNotification::new("sticky").persistent(),
            created,
        );
        let much_later = created + Duration::from_secs(3600);
        assert!(!note.is_expired(much_later, Duration::from_secs(1)));
    }

    #[test]
    fn transient_notifications_expire_after_lifetime() {
        let created = Instant::now();
        let note =
            Notification::from_draft(NotificationId::new(0), NewNotification::new("x"), created);
        let lifetime = Duration::from_secs(5);

        assert!(!note.is_expired(created + Duration::from_secs(4), lifetime));
        assert!(note.is_expired(created + lifetime, lifetime));
    }

    #[test]
    fn severity_names_are_lowercase() {
        let names: Vec<_> = Severity::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["info", "error", "success", "warning"]);
    }

    #[test]
    fn ids_order_and_display() {
        assert!(NotificationId::new(1) < NotificationId::new(2));
        assert_eq!(NotificationId::new(7).next(), NotificationId::new(8));
        assert_eq!(NotificationId::new(3).to_string(), "3");
    }

    #[test]
    fn next_saturates_at_max() {
        let last = NotificationId::new(u64::MAX);
        assert_eq!(last.next(), last);
    }
}
