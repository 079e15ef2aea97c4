// SPDX-License-Identifier: MPL-2.0
//! Toast notification list for user feedback.
//!
//! Notifications are short messages shown on top of the UI. The [`Store`]
//! owns them in insertion order; the UI renders [`Store::notifications`]
//! and asks the store for enter/exit animations as toasts mount and unmount.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `NewNotification` draft, `Severity`
//! - [`store`] - `Store` for ids, lookup, removal and expiry
//!
//! # Usage
//!
//! ```
//! use global_notifications::notifications::{Severity, Store};
//!
//! let mut store = Store::new();
//! let id = store.add_typed("Image saved", Severity::Success);
//!
//! assert_eq!(store.get_by_id(id).map(|n| n.message()), Some("Image saved"));
//! store.remove_by_id(id);
//! assert!(store.is_empty());
//! ```

mod notification;
mod store;

pub use notification::{NewNotification, Notification, NotificationId, Severity};
pub use store::{IdPolicy, Message, Store};
