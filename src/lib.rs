// SPDX-License-Identifier: MPL-2.0
//! `global_notifications` keeps the list of toast notifications a web UI
//! shows and describes how each toast animates in and out.
//!
//! The crate holds no rendering code. UI components own a
//! [`notifications::Store`], render its list, and pass the step sequences
//! from [`animation`] to their own animation renderer.

#![doc(html_root_url = "https://docs.rs/global_notifications/0.1.0")]

pub mod animation;
pub mod config;
pub mod design_tokens;
pub mod diagnostics;
pub mod error;
pub mod notifications;
