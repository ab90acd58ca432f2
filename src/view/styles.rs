//! Theme palettes and color configuration.
//!
//! Two palettes built from three semantic tokens: `bg`, `primary`,
//! and `secondary`, plus a per-card accent. All colors route
//! through [`ColorConfig`] so `--no-color` and the `NO_COLOR` env var
//! degrade every style to the terminal default.

use crate::model::{Accent, ThemeMode};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Resolved style palette for one theme mode.
pub struct Theme {
    mode: ThemeMode,
    colors: ColorConfig,
}

impl Theme {
    /// Build the palette for `mode` under `colors`.
    pub fn new(mode: ThemeMode, colors: ColorConfig) -> Self {
        Self { mode, colors }
    }

    /// The active mode.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Page background color (`bg` token: #f4f4ee light, #000000 dark).
    pub fn background(&self) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        match self.mode {
            ThemeMode::Light => Style::default().bg(Color::Rgb(0xf4, 0xf4, 0xee)),
            ThemeMode::Dark => Style::default().bg(Color::Rgb(0x00, 0x00, 0x00)),
        }
    }

    /// Primary text (`primary` token: black on light, white on dark).
    pub fn primary(&self) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        match self.mode {
            ThemeMode::Light => Style::default().fg(Color::Rgb(0x00, 0x00, 0x00)),
            ThemeMode::Dark => Style::default().fg(Color::Rgb(0xff, 0xff, 0xff)),
        }
    }

    /// Muted text (`secondary` token: #757575 light, #8f8f8f dark).
    pub fn secondary(&self) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        match self.mode {
            ThemeMode::Light => Style::default().fg(Color::Rgb(0x75, 0x75, 0x75)),
            ThemeMode::Dark => Style::default().fg(Color::Rgb(0x8f, 0x8f, 0x8f)),
        }
    }

    /// Section/category heading style.
    pub fn heading(&self) -> Style {
        self.primary().add_modifier(Modifier::BOLD)
    }

    /// Accent color for a card, picked per theme mode.
    pub fn card_accent(&self, accent: Accent) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        let [r, g, b] = match self.mode {
            ThemeMode::Light => accent.light,
            ThemeMode::Dark => accent.dark,
        };
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Text on a card face (white on the accent gradient, both modes).
    pub fn card_text(&self) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        Style::default().fg(Color::Rgb(0xff, 0xff, 0xff))
    }

    /// Fill for a card face: white text over the accent color.
    pub fn card_face(&self, accent: Accent) -> Style {
        if !self.colors.colors_enabled() {
            return Style::default();
        }
        let [r, g, b] = match self.mode {
            ThemeMode::Light => accent.light,
            ThemeMode::Dark => accent.dark,
        };
        Style::default()
            .bg(Color::Rgb(r, g, b))
            .fg(Color::Rgb(0xff, 0xff, 0xff))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_ACCENT;
    use serial_test::serial;

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_flag() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled(), "--no-color flag should disable colors");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        assert!(!config.colors_enabled(), "NO_COLOR env var should disable colors");
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(no_color_env)]
    fn color_config_defaults_to_enabled() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    #[serial(no_color_env)]
    fn light_and_dark_backgrounds_differ() {
        std::env::remove_var("NO_COLOR");
        let colors = ColorConfig::from_env_and_args(false);
        let light = Theme::new(ThemeMode::Light, colors);
        let dark = Theme::new(ThemeMode::Dark, colors);
        assert_ne!(light.background(), dark.background());
        assert_ne!(light.secondary(), dark.secondary());
    }

    #[test]
    #[serial(no_color_env)]
    fn card_accent_picks_the_mode_variant() {
        std::env::remove_var("NO_COLOR");
        let colors = ColorConfig::from_env_and_args(false);

        let light = Theme::new(ThemeMode::Light, colors).card_accent(DEFAULT_ACCENT);
        let dark = Theme::new(ThemeMode::Dark, colors).card_accent(DEFAULT_ACCENT);

        assert_eq!(light.fg, Some(Color::Rgb(0x00, 0x88, 0xff)));
        assert_eq!(dark.fg, Some(Color::Rgb(0x55, 0xbb, 0xff)));
    }

    #[test]
    #[serial(no_color_env)]
    fn disabled_colors_degrade_every_style_to_default() {
        std::env::remove_var("NO_COLOR");
        let colors = ColorConfig::from_env_and_args(true);
        let theme = Theme::new(ThemeMode::Dark, colors);

        assert_eq!(theme.background(), Style::default());
        assert_eq!(theme.primary(), Style::default());
        assert_eq!(theme.secondary(), Style::default());
        assert_eq!(theme.card_accent(DEFAULT_ACCENT), Style::default());
        assert_eq!(theme.card_text(), Style::default());
    }
}
