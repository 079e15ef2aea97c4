// SPDX-License-Identifier: MPL-2.0
//! Notification list ownership and lifecycle.
//!
//! The `Store` keeps notifications in insertion order, assigns their ids,
//! expires transient ones and forwards animation descriptors to the renderer.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::notification::{NewNotification, Notification, NotificationId, Severity};
use crate::animation::{AnimationBuilder, AnimationRenderer};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, NotificationEvent};
use crate::error::Result;

/// How the store picks the id of a new notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// A counter that only grows; ids are never reused until it reaches
    /// `u64::MAX`, after which every new notification gets that id.
    #[default]
    Sequential,
    /// The current list length. After a removal the next id can equal one
    /// still in the list; lookups and removals then act on the oldest match.
    ListLength,
}

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user closed a notification.
    Dismiss(NotificationId),
    /// Periodic tick for auto-dismiss.
    Tick,
}

/// Owns the notification list.
#[derive(Debug)]
pub struct Store {
    notifications: Vec<Notification>,
    next_id: NotificationId,
    id_policy: IdPolicy,
    /// Lifetime of transient notifications; `None` disables auto-dismiss.
    display_duration: Option<Duration>,
    animations: AnimationBuilder,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: NotificationId::default(),
            id_policy: IdPolicy::default(),
            display_duration: Config::default().display_duration(),
            animations: AnimationBuilder::default(),
            diagnostics: None,
        }
    }
}

impl Store {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store from a loaded configuration.
    ///
    /// Fails only when a palette override is invalid.
    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            id_policy: config.id_policy,
            display_duration: config.display_duration(),
            animations: AnimationBuilder::new(config.palette()?, config.timings()),
            ..Self::default()
        })
    }

    /// Sets the diagnostics handle for recording lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    #[must_use]
    pub fn animations(&self) -> &AnimationBuilder {
        &self.animations
    }

    /// Replaces the entire list.
    ///
    /// Under [`IdPolicy::Sequential`] the counter moves past the largest id
    /// in `notifications`, so later additions stay unique.
    pub fn reset(&mut self, notifications: Vec<Notification>) {
        if let Some(max) = notifications.iter().map(Notification::id).max() {
            self.next_id = self.next_id.max(max.next());
        }
        self.notifications = notifications;
        self.log(NotificationEvent::Reset {
            count: self.notifications.len(),
        });
    }

    /// Appends a notification and returns the id it was given.
    pub fn add(&mut self, draft: NewNotification) -> NotificationId {
        let id = self.assign_id();
        let severity = draft.severity;

        if self.get_by_id(id).is_some() {
            self.log(NotificationEvent::IdCollision { id });
        }

        self.notifications
            .push(Notification::from_draft(id, draft, Instant::now()));
        self.log(NotificationEvent::Added { id, severity });
        id
    }

    /// Appends an untyped, dismissable, non-persistent notification.
    pub fn add_simple(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(NewNotification::new(message))
    }

    /// Appends a dismissable, non-persistent notification of the given severity.
    pub fn add_typed(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.add(NewNotification::typed(message, severity))
    }

    #[must_use]
    pub fn get_by_id(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Removes the notification with `id`, if present.
    ///
    /// The remaining notifications keep their order and ids.
    pub fn remove_by_id(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.notifications.iter().position(|n| n.id() == id)?;
        let removed = self.notifications.remove(pos);
        self.log(NotificationEvent::Removed { id });
        Some(removed)
    }

    /// Closes a notification on the user's behalf.
    ///
    /// Returns `true` if it was found and is dismissable.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.notifications.iter().position(|n| n.id() == id) else {
            return false;
        };

        if !self.notifications[pos].is_dismissable() {
            self.log(NotificationEvent::DismissRefused { id });
            return false;
        }

        self.notifications.remove(pos);
        self.log(NotificationEvent::Dismissed { id });
        true
    }

    /// Removes every transient notification that has outlived the display
    /// duration at `now`, returning their ids.
    pub fn expire(&mut self, now: Instant) -> Vec<NotificationId> {
        let Some(lifetime) = self.display_duration else {
            return Vec::new();
        };

        let expired: Vec<NotificationId> = self
            .notifications
            .iter()
            .filter(|n| n.is_expired(now, lifetime))
            .map(Notification::id)
            .collect();

        if !expired.is_empty() {
            self.notifications.retain(|n| !n.is_expired(now, lifetime));
            for &id in &expired {
                self.log(NotificationEvent::Expired { id });
            }
        }

        expired
    }

    /// Expires notifications against the current time.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        self.expire(Instant::now())
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Builds the enter animation for a listed notification.
    ///
    /// Returns `None` without calling the renderer when `id` is absent.
    pub fn creation_animation<R: AnimationRenderer>(
        &self,
        renderer: &mut R,
        id: NotificationId,
    ) -> Option<R::Output> {
        let severity = self.get_by_id(id)?.severity();
        Some(renderer.build(self.animations.creation(severity)))
    }

    /// Builds the exit animation.
    pub fn removal_animation<R: AnimationRenderer>(&self, renderer: &mut R) -> R::Output {
        renderer.build(self.animations.removal())
    }

    /// Notifications in insertion order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    fn assign_id(&mut self) -> NotificationId {
        match self.id_policy {
            IdPolicy::Sequential => {
                let id = self.next_id;
                self.next_id = id.next();
                id
            }
            IdPolicy::ListLength => NotificationId::new(self.notifications.len() as u64),
        }
    }

    fn log(&self, event: NotificationEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
