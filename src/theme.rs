//! The two-valued theme and its pure derivations.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key under which the serialized theme is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Document appearance mode. There is no third "follow the system" state:
/// the system preference is consulted once at startup and never again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Serialized form written to the persistent store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Strict parse of a persisted value. Anything but exactly `"light"` or
    /// `"dark"` is `None`, so a corrupted entry falls back to the system
    /// preference branch instead of leaking into document state.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Glyph shown on the toggle control: the action it will perform next,
    /// not the mode currently active.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the document root's dark flag should be set.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
