//! Presentation mode and legacy token normalization.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{TITLE_ACTOR, TITLE_DJ, TOKEN_ACTOR, TOKEN_DJ};

/// Which persona the page is presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    Actor,
    Dj,
}

/// Deprecated tokens still accepted from old links and old saved preferences.
const LEGACY_ALIASES: &[(&str, PresentationMode)] = &[
    ("ark", PresentationMode::Dj),
    ("abraham", PresentationMode::Actor),
];

impl PresentationMode {
    pub const ALL: [Self; 2] = [Self::Actor, Self::Dj];

    /// Canonical token, the only form ever persisted or placed in a URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actor => TOKEN_ACTOR,
            Self::Dj => TOKEN_DJ,
        }
    }

    /// Parse a canonical token only.
    #[must_use]
    pub fn from_canonical(token: &str) -> Option<Self> {
        match token {
            TOKEN_ACTOR => Some(Self::Actor),
            TOKEN_DJ => Some(Self::Dj),
            _ => None,
        }
    }

    /// Parse a canonical token or a legacy alias.
    #[must_use]
    pub fn normalize(token: &str) -> Option<Self> {
        Self::from_canonical(token).or_else(|| {
            LEGACY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == token)
                .map(|(_, mode)| *mode)
        })
    }

    /// Anything that isn't `dj` after normalization is the actor persona.
    #[must_use]
    pub fn coerce(token: &str) -> Self {
        match Self::normalize(token) {
            Some(Self::Dj) => Self::Dj,
            _ => Self::Actor,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Actor => Self::Dj,
            Self::Dj => Self::Actor,
        }
    }

    #[must_use]
    pub const fn is_dj(self) -> bool {
        matches!(self, Self::Dj)
    }

    /// Canonical route for the mode, e.g. `/dj`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }

    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Actor => TITLE_ACTOR,
            Self::Dj => TITLE_DJ,
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
