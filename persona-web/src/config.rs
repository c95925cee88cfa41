//! Embedded site configuration.
use persona_core::SiteConfig;

const DEFAULT_SITE_DATA: &str = include_str!("../static/site.json");

/// Load the bundled configuration, falling back to built-in defaults.
#[must_use]
pub fn load_site_config() -> SiteConfig {
    load_from_str(DEFAULT_SITE_DATA)
}

fn load_from_str(json: &str) -> SiteConfig {
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("invalid site config, using defaults: {err}");
        SiteConfig::default()
    })
}
