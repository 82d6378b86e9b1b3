//! Theme module for the cloud atlas TUI
//!
//! This module provides a centralized color palette and styling constants
//! for the "night sky field guide" aesthetic.

use ratatui::style::Color;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color - night sky (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Background for the highlighted (selected) row (#1a1f26)
pub const BG_HIGHLIGHT: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary sky-blue accent color (#38bdf8)
pub const SKY_PRIMARY: Color = Color::Rgb(56, 189, 248);

/// Dimmed sky-blue for secondary elements (#0e7490)
pub const SKY_DIM: Color = Color::Rgb(14, 116, 144);

/// Amber accent for the precipitation marker (#fbbf24)
pub const AMBER_RAIN: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
