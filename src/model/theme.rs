//! Theme mode selection.

use std::str::FromStr;
use thiserror::Error;

/// Which of the two palettes is active.
///
/// Light mode is the default; the resolved value flows from config/CLI
/// into `AppState` and can be flipped at runtime with the theme-toggle
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette (the default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Canonical lowercase name, as accepted on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Error for unrecognized theme names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
