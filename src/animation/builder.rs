// SPDX-License-Identifier: MPL-2.0
//! Enter and exit step sequences for toasts.
//!
//! Entering toasts fade in from transparent white, flash the highlight color,
//! then settle on the accent pair of their severity. Exiting toasts slide up
//! and fade out above their siblings.

use std::time::Duration;

use super::step::{animate, style, AnimationStep, StyleStep};
use crate::config::{DEFAULT_EXIT_MS, DEFAULT_HIGHLIGHT_MS, DEFAULT_SETTLE_MS};
use crate::design_tokens::{motion, opacity, padding, Palette};
use crate::notifications::Severity;

/// Durations and motion used when building step sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    pub highlight: Duration,
    pub settle: Duration,
    pub exit: Duration,
    pub exit_offset_px: u32,
    pub exit_z_index: i32,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            highlight: Duration::from_millis(DEFAULT_HIGHLIGHT_MS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            exit: Duration::from_millis(DEFAULT_EXIT_MS),
            exit_offset_px: motion::EXIT_OFFSET_PX,
            exit_z_index: motion::EXIT_Z_INDEX,
        }
    }
}

/// Builds step sequences from a palette and a set of timings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationBuilder {
    palette: Palette,
    timings: AnimationTimings,
}

impl AnimationBuilder {
    #[must_use]
    pub fn new(palette: Palette, timings: AnimationTimings) -> Self {
        Self { palette, timings }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn timings(&self) -> &AnimationTimings {
        &self.timings
    }

    /// Three-step enter sequence for a toast of the given severity.
    #[must_use]
    pub fn creation(&self, severity: Option<Severity>) -> Vec<AnimationStep> {
        let accent = self.palette.accent(severity);

        vec![
            style(
                StyleStep::new()
                    .with("opacity", opacity::TRANSPARENT)
                    .with("backgroundColor", self.palette.white),
            ),
            animate(
                self.timings.highlight,
                StyleStep::new()
                    .with("backgroundColor", self.palette.light_blue)
                    .with("opacity", opacity::OPAQUE)
                    .with("padding", padding::HIGHLIGHT),
            ),
            animate(
                self.timings.settle,
                StyleStep::new()
                    .with("backgroundColor", accent.background)
                    .with("color", accent.foreground)
                    .with("opacity", opacity::OPAQUE)
                    .with("padding", padding::SETTLED),
            ),
        ]
    }

    /// Two-step exit sequence.
    #[must_use]
    pub fn removal(&self) -> Vec<AnimationStep> {
        vec![
            style(
                StyleStep::new()
                    .with("opacity", opacity::OPAQUE)
                    .with("transform", "translateY(0px)"),
            ),
            animate(
                self.timings.exit,
                StyleStep::new()
                    .with("opacity", opacity::TRANSPARENT)
                    .with(
                        "transform",
                        format!("translateY(-{}px)", self.timings.exit_offset_px),
                    )
                    .with("z-index", self.timings.exit_z_index),
            ),
        ]
    }
}

/// Enter sequence with the default palette and timings.
#[must_use]
pub fn creation_steps(severity: Option<Severity>) -> Vec<AnimationStep> {
    AnimationBuilder::default().creation(severity)
}

/// Exit sequence with the default timings.
#[must_use]
pub fn removal_steps() -> Vec<AnimationStep> {
    AnimationBuilder::default().removal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{StepKind, StyleValue};
    use crate::design_tokens::palette;

    fn durations(steps: &[AnimationStep]) -> Vec<Option<u128>> {
        steps
            .iter()
            .map(|s| s.timings().map(|d| d.as_millis()))
            .collect()
    }

    fn assert_settles_on(
        severity: Option<Severity>,
        background: iced_core::Color,
        foreground: iced_core::Color,
    ) {
        let steps = creation_steps(severity);
        assert_eq!(steps.len(), 3);
        assert_eq!(durations(&steps), vec![None, Some(400), Some(1000)]);

        let last = steps[2].style();
        assert_eq!(last.get("backgroundColor"), Some(&StyleValue::Color(background)));
        assert_eq!(last.get("color"), Some(&StyleValue::Color(foreground)));
        assert_eq!(last.get("opacity"), Some(&StyleValue::Number(1.0)));
        assert_eq!(last.get("padding"), Some(&StyleValue::from("10px 5px")));
    }

    #[test]
    fn info_animation_settles_on_info_pair() {
        assert_settles_on(Some(Severity::Info), palette::INFO_LIGHT, palette::INFO_DARK);
    }

    #[test]
    fn error_animation_settles_on_error_pair() {
        assert_settles_on(Some(Severity::Error), palette::ERROR_LIGHT, palette::ERROR_DARK);
    }

    #[test]
    fn success_animation_settles_on_success_pair() {
        assert_settles_on(Some(Severity::Success), palette::SUCCESS_LIGHT, palette::SUCCESS_DARK);
    }

    #[test]
    fn warning_animation_settles_on_warning_pair() {
        assert_settles_on(Some(Severity::Warning), palette::WARNING_LIGHT, palette::WARNING_DARK);
    }

    #[test]
    fn default_animation_settles_on_fair_pink() {
        assert_settles_on(None, palette::FAIR_PINK, palette::BLAZE_ORANGE);
    }

    #[test]
    fn creation_starts_transparent_white_and_flashes_light_blue() {
        let steps = creation_steps(Some(Severity::Info));

        assert_eq!(steps[0].kind(), StepKind::Style);
        let start = steps[0].style();
        assert_eq!(start.len(), 2);
        assert_eq!(start.get("opacity"), Some(&StyleValue::Number(0.0)));
        assert_eq!(start.get("backgroundColor"), Some(&StyleValue::Color(palette::WHITE)));
        assert_eq!(start.offset(), None);

        assert_eq!(steps[1].kind(), StepKind::Animate);
        let flash = steps[1].style();
        assert_eq!(flash.get("backgroundColor"), Some(&StyleValue::Color(palette::LIGHT_BLUE)));
        assert_eq!(flash.get("padding"), Some(&StyleValue::from("15px 8px")));
        assert_eq!(flash.get("color"), None);
    }

    #[test]
    fn removal_slides_up_and_fades_out() {
        let steps = removal_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(durations(&steps), vec![None, Some(500)]);

        let start = steps[0].style();
        assert_eq!(start.get("opacity"), Some(&StyleValue::Number(1.0)));
        assert_eq!(start.get("transform"), Some(&StyleValue::from("translateY(0px)")));

        let end = steps[1].style();
        assert_eq!(end.get("opacity"), Some(&StyleValue::Number(0.0)));
        assert_eq!(end.get("transform"), Some(&StyleValue::from("translateY(-100px)")));
        assert_eq!(end.get("z-index"), Some(&StyleValue::Integer(100)));
    }

    #[test]
    fn custom_timings_change_durations_and_offset() {
        let builder = AnimationBuilder::new(
            Palette::default(),
            AnimationTimings {
                highlight: Duration::from_millis(10),
                settle: Duration::from_millis(20),
                exit: Duration::from_millis(30),
                exit_offset_px: 42,
                ..AnimationTimings::default()
            },
        );

        assert_eq!(durations(&builder.creation(None)), vec![None, Some(10), Some(20)]);
        let removal = builder.removal();
        assert_eq!(durations(&removal), vec![None, Some(30)]);
        assert_eq!(
            removal[1].style().get("transform"),
            Some(&StyleValue::from("translateY(-42px)"))
        );
    }
}
