// SPDX-License-Identifier: MPL-2.0
//! Declarative animation steps.
//!
//! A step is either a static `Style` (applied immediately) or an `Animate`
//! transition towards a style over a duration. Steps serialize to the
//! `{type, styles, offset, timings}` shape the renderer expects, with the
//! renderer's numeric step codes.

use std::collections::BTreeMap;
use std::time::Duration;

use iced_core::Color;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::design_tokens::to_css_hex;

/// Renderer step codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepKind {
    Animate = 4,
    Style = 6,
}

impl StepKind {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A single CSS property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Integer(i32),
    Text(String),
    Color(Color),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Integer(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => serializer.serialize_f32(*n),
            StyleValue::Integer(i) => serializer.serialize_i32(*i),
            StyleValue::Text(s) => serializer.serialize_str(s),
            StyleValue::Color(c) => serializer.serialize_str(&to_css_hex(*c)),
        }
    }
}

/// A set of style properties with an optional keyframe offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleStep {
    styles: BTreeMap<&'static str, StyleValue>,
    offset: Option<f32>,
}

impl StyleStep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<StyleValue>) -> Self {
        self.styles.insert(property, value.into());
        self
    }

    #[must_use]
    pub fn at_offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.styles.get(property)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.styles.iter().map(|(k, v)| (*k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    #[must_use]
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }
}

impl Serialize for StyleStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StyleStep", 3)?;
        state.serialize_field("type", &StepKind::Style.code())?;
        state.serialize_field("styles", &self.styles)?;
        state.serialize_field("offset", &self.offset)?;
        state.end()
    }
}

/// One entry of an animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationStep {
    /// Applied immediately.
    Style(StyleStep),
    /// Transition to `style` over `timings`.
    Animate { style: StyleStep, timings: Duration },
}

impl AnimationStep {
    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self {
            AnimationStep::Style(_) => StepKind::Style,
            AnimationStep::Animate { .. } => StepKind::Animate,
        }
    }

    #[must_use]
    pub fn style(&self) -> &StyleStep {
        match self {
            AnimationStep::Style(style) | AnimationStep::Animate { style, .. } => style,
        }
    }

    /// Duration of the step; unset for static styles.
    #[must_use]
    pub fn timings(&self) -> Option<Duration> {
        match self {
            AnimationStep::Style(_) => None,
            AnimationStep::Animate { timings, .. } => Some(*timings),
        }
    }
}

impl Serialize for AnimationStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnimationStep::Style(style) => style.serialize(serializer),
            AnimationStep::Animate { style, timings } => {
                let mut state = serializer.serialize_struct("AnimateStep", 3)?;
                state.serialize_field("type", &StepKind::Animate.code())?;
                state.serialize_field("styles", style)?;
                state.serialize_field("timings", &duration_millis(*timings))?;
                state.end()
            }
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Shorthand for a static style step.
#[must_use]
pub fn style(style: StyleStep) -> AnimationStep {
    AnimationStep::Style(style)
}

/// Shorthand for a timed transition.
#[must_use]
pub fn animate(timings: Duration, style: StyleStep) -> AnimationStep {
    AnimationStep::Animate { style, timings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciborium::value::Value;

    fn field<'a>(map: &'a Value, key: &str) -> &'a Value {
        map.as_map()
            .and_then(|entries| {
                entries
                    .iter()
                    .find(|(k, _)| k.as_text() == Some(key))
                    .map(|(_, v)| v)
            })
            .unwrap_or_else(|| panic!("missing field {key}"))
    }

    #[test]
    fn step_codes_match_renderer() {
        assert_eq!(StepKind::Animate.code(), 4);
        assert_eq!(StepKind::Style.code(), 6);
    }

    #[test]
    fn style_step_has_no_timings() {
        let step = style(StyleStep::new().with("opacity", 0.0_f32));
        assert_eq!(step.kind(), StepKind::Style);
        assert_eq!(step.timings(), None);
        assert_eq!(step.style().get("opacity"), Some(&StyleValue::Number(0.0)));
    }

    #[test]
    fn with_replaces_existing_property() {
        let step = StyleStep::new().with("opacity", 0.0_f32).with("opacity", 1.0_f32);
        assert_eq!(step.len(), 1);
        assert_eq!(step.get("opacity"), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn animate_step_serializes_nested_style() {
        let step = animate(
            Duration::from_millis(400),
            StyleStep::new().with("backgroundColor", Color::WHITE),
        );
        let value = Value::serialized(&step).expect("serialize step");

        assert_eq!(field(&value, "type"), &Value::from(4u8));
        assert_eq!(field(&value, "timings"), &Value::from(400u64));

        let nested = field(&value, "styles");
        assert_eq!(field(nested, "type"), &Value::from(6u8));
        assert_eq!(field(nested, "offset"), &Value::Null);
        assert_eq!(
            field(field(nested, "styles"), "backgroundColor"),
            &Value::from("#ffffff")
        );
    }

    #[test]
    fn offset_serializes_when_set() {
        let step = style(StyleStep::new().at_offset(0.5));
        let value = Value::serialized(&step).expect("serialize step");
        assert_eq!(field(&value, "offset"), &Value::Float(0.5));
    }
}
