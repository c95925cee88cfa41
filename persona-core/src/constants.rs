//! Fixed values shared by the persona site logic.
//!
//! Tunable values (periods, thresholds, titles) are mirrored as defaults in
//! [`crate::config::SiteConfig`]; everything here is part of the markup or
//! storage contract and only changes together with the page.

// Storage ------------------------------------------------------------------
pub const MODE_STORAGE_KEY: &str = "mode";

// Mode tokens --------------------------------------------------------------
pub const TOKEN_ACTOR: &str = "actor";
pub const TOKEN_DJ: &str = "dj";
pub const QUERY_MODE_PARAM: &str = "mode";

// Timing -------------------------------------------------------------------
pub const AUTOPLAY_PERIOD_MS: u32 = 4_500;
pub const FORM_RESET_MS: u32 = 2_500;

// Scroll -------------------------------------------------------------------
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 10.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// Presentation -------------------------------------------------------------
pub const TITLE_ACTOR: &str = "Abraham Woo \u{2014} Actor & Voice Actor";
pub const TITLE_DJ: &str = "Ark \u{2014} DJ & Music Curator";
pub const CONFIRMATION_LABEL: &str = "Sent!";
pub const CONFIRMATION_COLOR: &str = "#2ECC71";

// CSS classes --------------------------------------------------------------
pub const CLASS_DJ_MODE: &str = "dj-mode";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_VISIBLE: &str = "visible";
