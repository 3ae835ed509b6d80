//! Parrot/neon theme tokens for the FundLens TUI
//!
//! Neon accents on a dark background:
//! - **Accent**: Electric cyan (primary highlights, focus)
//! - **Positive**: Neon green (low threat, selected checkboxes)
//! - **Negative**: Hot pink (high threat, errors)
//! - **Warning**: Neon orange (medium threat, warnings)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

use fundlens_core::Level;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Cycle used for per-segment series on charts.
const SERIES: [Color; 6] = [ACCENT, POSITIVE, WARNING, NEUTRAL, NEGATIVE, MUTED];

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Threat/relevance color: High is hot, Low is calm.
pub fn level_color(level: Level) -> Color {
    match level {
        Level::High => NEGATIVE,
        Level::Medium => WARNING,
        Level::Low => POSITIVE,
    }
}

pub fn level_style(level: Level) -> Style {
    Style::default().fg(level_color(level))
}

/// Stable color for the `i`-th series.
pub fn series_color(i: usize) -> Color {
    SERIES[i % SERIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_colors_are_distinct() {
        assert_eq!(level_color(Level::High), NEGATIVE);
        assert_eq!(level_color(Level::Medium), WARNING);
        assert_eq!(level_color(Level::Low), POSITIVE);
    }

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), ACCENT);
        assert_eq!(series_color(SERIES.len()), ACCENT);
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn active_border_uses_accent() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
