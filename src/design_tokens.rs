// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

Visual constants shared by the notification animations.

## Organization

- **Palette**: Base colors and the severity accent table
- **Opacity**: Start and end opacity of the fades
- **Padding**: CSS padding shorthands for the toast box
- **Motion**: Exit translation and stacking order

## Examples

```
use global_notifications::design_tokens::{palette, to_css_hex};

assert_eq!(to_css_hex(palette::WHITE), "#ffffff");
```
"##]

use std::collections::BTreeMap;

use iced_core::Color;

use crate::error::ColorError;
use crate::notifications::Severity;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const LIGHT_BLUE: Color = Color::from_rgb8(0xad, 0xd8, 0xe6);

    // Severity pairs (background / foreground)
    pub const INFO_LIGHT: Color = Color::from_rgb8(0xd1, 0xec, 0xf1);
    pub const INFO_DARK: Color = Color::from_rgb8(0x0c, 0x54, 0x60);
    pub const ERROR_LIGHT: Color = Color::from_rgb8(0xf8, 0xd7, 0xda);
    pub const ERROR_DARK: Color = Color::from_rgb8(0x72, 0x1c, 0x24);
    pub const SUCCESS_LIGHT: Color = Color::from_rgb8(0xd4, 0xed, 0xda);
    pub const SUCCESS_DARK: Color = Color::from_rgb8(0x15, 0x57, 0x24);
    pub const WARNING_LIGHT: Color = Color::from_rgb8(0xff, 0xf3, 0xcd);
    pub const WARNING_DARK: Color = Color::from_rgb8(0x85, 0x64, 0x04);

    // Untyped notifications
    pub const FAIR_PINK: Color = Color::from_rgb8(0xff, 0xef, 0xec);
    pub const BLAZE_ORANGE: Color = Color::from_rgb8(0xff, 0x66, 0x00);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Padding
// ============================================================================

pub mod padding {
    /// Padding while the highlight flash is showing.
    pub const HIGHLIGHT: &str = "15px 8px";

    /// Padding of a settled toast.
    pub const SETTLED: &str = "10px 5px";
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Distance an exiting toast travels upward, in pixels.
    pub const EXIT_OFFSET_PX: u32 = 100;

    /// Stacking order of an exiting toast so it slides over its siblings.
    pub const EXIT_Z_INDEX: i32 = 100;
}

/// Formats a color as a CSS hex string (`#rrggbb`, or `#rrggbbaa` when translucent).
#[must_use]
pub fn to_css_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Parses a CSS hex color.
pub fn parse_css_hex(value: &str) -> Result<Color, ColorError> {
    let trimmed = value.trim();
    if !trimmed.starts_with('#') || !trimmed.is_ascii() {
        return Err(ColorError::InvalidHex(value.to_string()));
    }
    trimmed
        .parse::<Color>()
        .map_err(|_| ColorError::InvalidHex(value.to_string()))
}

/// Background/foreground pair a settled toast fades to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentPair {
    pub background: Color,
    pub foreground: Color,
}

/// The color lookup table used by the enter animation.
///
/// Every entry can be overridden from the settings file by its token name
/// (see [`Palette::TOKENS`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub white: Color,
    pub light_blue: Color,
    pub info: AccentPair,
    pub error: AccentPair,
    pub success: AccentPair,
    pub warning: AccentPair,
    pub default: AccentPair,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: palette::WHITE,
            light_blue: palette::LIGHT_BLUE,
            info: AccentPair {
                background: palette::INFO_LIGHT,
                foreground: palette::INFO_DARK,
            },
            error: AccentPair {
                background: palette::ERROR_LIGHT,
                foreground: palette::ERROR_DARK,
            },
            success: AccentPair {
                background: palette::SUCCESS_LIGHT,
                foreground: palette::SUCCESS_DARK,
            },
            warning: AccentPair {
                background: palette::WARNING_LIGHT,
                foreground: palette::WARNING_DARK,
            },
            default: AccentPair {
                background: palette::FAIR_PINK,
                foreground: palette::BLAZE_ORANGE,
            },
        }
    }
}

impl Palette {
    /// Token names accepted by [`Palette::with_overrides`].
    pub const TOKENS: [&'static str; 12] = [
        "white",
        "light-blue",
        "info-light",
        "info-dark",
        "error-light",
        "error-dark",
        "success-light",
        "success-dark",
        "warning-light",
        "warning-dark",
        "fair-pink",
        "blaze-orange",
    ];

    /// Returns the accent pair for a severity; `None` maps to the default pair.
    #[must_use]
    pub fn accent(&self, severity: Option<Severity>) -> AccentPair {
        match severity {
            Some(Severity::Info) => self.info,
            Some(Severity::Error) => self.error,
            Some(Severity::Success) => self.success,
            Some(Severity::Warning) => self.warning,
            None => self.default,
        }
    }

    /// Returns a copy with the given `token -> "#hex"` overrides applied.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, ColorError> {
        for (token, value) in overrides {
            let color = parse_css_hex(value)?;
            *self.slot_mut(token)? = color;
        }
        Ok(self)
    }

    fn slot_mut(&mut self, token: &str) -> Result<&mut Color, ColorError> {
        let slot = match token {
            "white" => &mut self.white,
            "light-blue" => &mut self.light_blue,
            "info-light" => &mut self.info.background,
            "info-dark" => &mut self.info.foreground,
            "error-light" => &mut self.error.background,
            "error-dark" => &mut self.error.foreground,
            "success-light" => &mut self.success.background,
            "success-dark" => &mut self.success.foreground,
            "warning-light" => &mut self.warning.background,
            "warning-dark" => &mut self.warning.foreground,
            "fair-pink" => &mut self.default.background,
            "blaze-orange" => &mut self.default.foreground,
            other => return Err(ColorError::UnknownToken(other.to_string())),
        };
        Ok(slot)
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(motion::EXIT_OFFSET_PX > 0);
};
