//! Theme preference model.
//!
//! Rendering a theme is a frontend concern; core only owns the persisted
//! preference value and its flip semantics.

use serde::{Deserialize, Serialize};

/// Persisted appearance preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Default appearance.
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Stable lowercase name used on the wire and in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
