//! Dark and light color palettes.
//!
//! The palette is picked once at startup from the configured `ThemeMode`;
//! `Auto` asks the OS through `dark-light`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Title bar and popup borders
    pub brand: Color,
    /// Focused group borders and other chrome
    pub primary: Color,
    /// Focus and selection highlight
    pub accent: Color,
    /// Confirmation messages and the dropdown add entry
    pub success: Color,
    /// Error overlay and error status line
    pub error: Color,

    /// Labels
    pub text: Color,
    /// Tab titles and sheet headers
    pub text_secondary: Color,
    /// Hints, placeholders and empty sheet cells
    pub text_muted: Color,

    /// Screen background
    pub background: Color,
    /// Background of the highlighted menu or list row
    pub highlight_bg: Color,
    /// Component cells, popups and sheet headers
    pub surface: Color,
    /// Unfocused group borders and grid lines
    pub inactive: Color,
}

impl Theme {
    /// Palette matching the OS appearance. Falls back to dark.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Palette for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            brand: Color::Rgb(33, 163, 102),
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),
            inactive: Color::Gray,
        }
    }

    /// Palette for light terminals.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            brand: Color::Rgb(16, 124, 65),
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(243, 243, 243),
            inactive: Color::Rgb(180, 180, 180),
        }
    }

    /// Palette for a configured mode. Only `Auto` queries the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_skip_detection() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.text, theme.background);
            assert_ne!(theme.accent, theme.background);
            assert_ne!(theme.highlight_bg, theme.accent);
        }
    }

    #[test]
    fn test_light_accent_is_not_yellow() {
        // Yellow is unreadable on white
        assert_ne!(Theme::light().accent, Color::Yellow);
    }

    #[test]
    fn test_detect_returns_a_known_palette() {
        let theme = Theme::detect();
        assert!(theme == Theme::dark() || theme == Theme::light());
    }
}
