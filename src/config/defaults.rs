// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a non-persistent notification stays listed
//! - **Animation**: Enter/exit transition durations
//! - **Diagnostics**: Event buffer and channel sizes

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default lifetime of a non-persistent notification (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 5_000;

/// Minimum notification lifetime (in milliseconds).
pub const MIN_DISPLAY_DURATION_MS: u64 = 1_000;

/// Maximum notification lifetime (in milliseconds).
pub const MAX_DISPLAY_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the highlight flash of the enter animation (in milliseconds).
pub const DEFAULT_HIGHLIGHT_MS: u64 = 400;

/// Duration of the fade to the severity colors (in milliseconds).
pub const DEFAULT_SETTLE_MS: u64 = 1_000;

/// Duration of the exit animation (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 500;

/// Upper bound for any single animation step (in milliseconds).
pub const MAX_ANIMATION_STEP_MS: u64 = 10_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4_096;

/// Number of events that may wait in the channel between two drains.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Display validation
    assert!(MIN_DISPLAY_DURATION_MS > 0);
    assert!(MAX_DISPLAY_DURATION_MS >= MIN_DISPLAY_DURATION_MS);
    assert!(DEFAULT_DISPLAY_DURATION_MS >= MIN_DISPLAY_DURATION_MS);
    assert!(DEFAULT_DISPLAY_DURATION_MS <= MAX_DISPLAY_DURATION_MS);

    // Animation validation
    assert!(DEFAULT_HIGHLIGHT_MS <= MAX_ANIMATION_STEP_MS);
    assert!(DEFAULT_SETTLE_MS <= MAX_ANIMATION_STEP_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_ANIMATION_STEP_MS);

    // The whole enter animation must finish before the toast can expire
    assert!(DEFAULT_HIGHLIGHT_MS + DEFAULT_SETTLE_MS < DEFAULT_DISPLAY_DURATION_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
};
