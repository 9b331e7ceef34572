//! Theme preference value object and startup resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a stored theme string fails.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

/// The display palette the presentation layer should select.
///
/// Always exactly one of two values; after startup resolution a mode is
/// never absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The persisted wire form (`"light"` / `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub fn flip(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the active mode at mount time.
    ///
    /// Priority: an explicitly persisted value wins, else the platform's
    /// ambient signal, else light. Absence of either source is a valid
    /// state, not an error.
    pub fn resolve(stored: Option<ThemeMode>, ambient: Option<ThemeMode>) -> ThemeMode {
        stored.or(ambient).unwrap_or(ThemeMode::Light)
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_stored_over_ambient() {
        assert_eq!(
            ThemeMode::resolve(Some(ThemeMode::Light), Some(ThemeMode::Dark)),
            ThemeMode::Light
        );
    }

    #[test]
    fn resolve_falls_back_to_ambient() {
        assert_eq!(
            ThemeMode::resolve(None, Some(ThemeMode::Dark)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn resolve_defaults_to_light() {
        assert_eq!(ThemeMode::resolve(None, None), ThemeMode::Light);
    }

    #[test]
    fn flip_round_trips() {
        assert_eq!(ThemeMode::Dark.flip(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.flip().flip(), ThemeMode::Dark);
    }

    #[test]
    fn parse_round_trips_wire_form() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "solarized".parse::<ThemeMode>().unwrap_err();
        assert_eq!(err, ParseThemeModeError("solarized".to_string()));
    }

    #[test]
    fn serde_uses_lowercase() {
        #[derive(Serialize)]
        struct Wrap {
            mode: ThemeMode,
        }
        let s = toml::to_string(&Wrap {
            mode: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(s.trim(), "mode = \"dark\"");
    }
}
