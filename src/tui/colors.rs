//! Color constants for the terminal timeline.

use ratatui::style::Color;

/// Task bars
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Process bars
pub const TEAL: Color = Color::Rgb(0, 150, 136);
/// Weekend column shading
pub const WEEKEND_SHADE: Color = Color::Rgb(48, 48, 48);
/// Header and status bar background
pub const DARK_PURPLE: Color = Color::Rgb(86, 60, 92);
