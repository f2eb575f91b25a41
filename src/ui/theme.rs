//! Theme definitions for glowcard
//!
//! Provides three built-in themes for the chrome around the demo area:
//! Midnight, Nord, and Transparent. The demo backdrop and the cards keep
//! their own colors regardless of theme.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Accent color
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Midnight => Self::midnight(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Midnight theme (default): near-black chrome so the glow pops
    pub fn midnight() -> Self {
        Self {
            bg: Color::Rgb(0, 0, 0),              // #000000
            fg: Color::Rgb(224, 224, 224),        // #e0e0e0
            fg_dim: Color::Rgb(112, 112, 112),    // #707070

            accent: Color::Rgb(0, 255, 136),      // #00ff88

            success: Color::Rgb(0, 255, 136),     // #00ff88
            error: Color::Rgb(255, 85, 85),       // #ff5555

            border: Color::Rgb(48, 48, 48),       // #303030
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),           // #2e3440
            fg: Color::Rgb(236, 239, 244),        // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),      // #4c566a

            accent: Color::Rgb(136, 192, 208),    // #88c0d0

            success: Color::Rgb(163, 190, 140),   // #a3be8c
            error: Color::Rgb(191, 97, 106),      // #bf616a

            border: Color::Rgb(59, 66, 82),       // #3b4252
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,

            accent: Color::Cyan,

            success: Color::Green,
            error: Color::Red,

            border: Color::DarkGray,
        }
    }

    // Style helpers for common UI patterns

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let midnight = Theme::from_name(ThemeName::Midnight);
        assert_eq!(midnight.bg, Color::Rgb(0, 0, 0));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }
}
