// SPDX-License-Identifier: MPL-2.0
//! Data-only animation descriptors for toasts.
//!
//! Nothing here runs an animation. The builders produce step sequences and
//! an [`AnimationRenderer`] supplied by the UI turns them into something
//! that plays.
//!
//! # Components
//!
//! - [`step`] - `AnimationStep`, `StyleStep` and their wire shape
//! - [`builder`] - enter/exit sequences per severity
//! - [`renderer`] - the `AnimationRenderer` trait

mod builder;
mod renderer;
mod step;

pub use builder::{creation_steps, removal_steps, AnimationBuilder, AnimationTimings};
pub use renderer::AnimationRenderer;
pub use step::{animate, style, AnimationStep, StepKind, StyleStep, StyleValue};
