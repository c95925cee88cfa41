//! Site configuration loaded from JSON with per-field defaults.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    AUTOPLAY_PERIOD_MS, CONFIRMATION_COLOR, CONFIRMATION_LABEL, FORM_RESET_MS,
    MODE_STORAGE_KEY, NAV_SCROLL_THRESHOLD_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use crate::mode::PresentationMode;

/// Which routing behavior the site runs with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingVariant {
    /// Path routing, legacy query rewrite and per-mode document titles.
    #[default]
    Full,
    /// Query and saved preference only; no address rewrite, no titles.
    Reduced,
}

impl RoutingVariant {
    #[must_use]
    pub const fn routes_paths(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Errors raised when site configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("reveal threshold must be between 0.00 and 1.00 (got {value:.2})")]
    RevealThreshold { value: f64 },
    #[error("nav scroll threshold must not be negative (got {value:.2})")]
    NegativeScrollThreshold { value: f64 },
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOptions {
    #[serde(default = "RevealOptions::default_threshold")]
    pub threshold: f64,
    #[serde(default = "RevealOptions::default_root_margin")]
    pub root_margin: String,
}

impl RevealOptions {
    const fn default_threshold() -> f64 {
        REVEAL_THRESHOLD
    }

    fn default_root_margin() -> String {
        REVEAL_ROOT_MARGIN.to_string()
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            root_margin: Self::default_root_margin(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeTitles {
    #[serde(default = "ModeTitles::default_actor")]
    pub actor: String,
    #[serde(default = "ModeTitles::default_dj")]
    pub dj: String,
}

impl ModeTitles {
    fn default_actor() -> String {
        PresentationMode::Actor.default_title().to_string()
    }

    fn default_dj() -> String {
        PresentationMode::Dj.default_title().to_string()
    }

    #[must_use]
    pub fn for_mode(&self, mode: PresentationMode) -> &str {
        match mode {
            PresentationMode::Actor => &self.actor,
            PresentationMode::Dj => &self.dj,
        }
    }
}

impl Default for ModeTitles {
    fn default() -> Self {
        Self {
            actor: Self::default_actor(),
            dj: Self::default_dj(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default = "Confirmation::default_label")]
    pub label: String,
    #[serde(default = "Confirmation::default_color")]
    pub color: String,
}

impl Confirmation {
    fn default_label() -> String {
        CONFIRMATION_LABEL.to_string()
    }

    fn default_color() -> String {
        CONFIRMATION_COLOR.to_string()
    }
}

impl Default for Confirmation {
    fn default() -> Self {
        Self {
            label: Self::default_label(),
            color: Self::default_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub variant: RoutingVariant,
    #[serde(default = "SiteConfig::default_storage_key")]
    pub storage_key: String,
    #[serde(default = "SiteConfig::default_autoplay_period_ms")]
    pub autoplay_period_ms: u32,
    #[serde(default = "SiteConfig::default_form_reset_ms")]
    pub form_reset_ms: u32,
    #[serde(default = "SiteConfig::default_nav_scroll_threshold_px")]
    pub nav_scroll_threshold_px: f64,
    #[serde(default)]
    pub reveal: RevealOptions,
    #[serde(default)]
    pub titles: ModeTitles,
    #[serde(default)]
    pub confirmation: Confirmation,
}

impl SiteConfig {
    fn default_storage_key() -> String {
        MODE_STORAGE_KEY.to_string()
    }

    const fn default_autoplay_period_ms() -> u32 {
        AUTOPLAY_PERIOD_MS
    }

    const fn default_form_reset_ms() -> u32 {
        FORM_RESET_MS
    }

    const fn default_nav_scroll_threshold_px() -> f64 {
        NAV_SCROLL_THRESHOLD_PX
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check invariants that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.autoplay_period_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "autoplay_period_ms",
            });
        }
        if self.form_reset_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "form_reset_ms",
            });
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::RevealThreshold {
                value: self.reveal.threshold,
            });
        }
        if self.nav_scroll_threshold_px < 0.0 {
            return Err(ConfigError::NegativeScrollThreshold {
                value: self.nav_scroll_threshold_px,
            });
        }
        Ok(())
    }

    /// Title to show for `mode`, or `None` when the variant leaves the title alone.
    #[must_use]
    pub fn title_for(&self, mode: PresentationMode) -> Option<&str> {
        self.variant
            .routes_paths()
            .then(|| self.titles.for_mode(mode))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            variant: RoutingVariant::default(),
            storage_key: Self::default_storage_key(),
            autoplay_period_ms: Self::default_autoplay_period_ms(),
            form_reset_ms: Self::default_form_reset_ms(),
            nav_scroll_threshold_px: Self::default_nav_scroll_threshold_px(),
            reveal: RevealOptions::default(),
            titles: ModeTitles::default(),
            confirmation: Confirmation::default(),
        }
    }
}
