//! Attaches every site behavior to the loaded document.
//!
//! Each behavior is wired independently; one failing to attach is logged and
//! does not stop the others.

pub mod anchors;
pub mod contact;
pub mod menu;
pub mod mode;
pub mod scroll;

use crate::config::load_site_config;
use crate::dom;

pub use mode::{SharedSite, WebSite};

fn report(behavior: &str, result: anyhow::Result<()>) {
    if let Err(err) = result {
        log::error!("{behavior} wiring failed: {err:#}");
    }
}

/// Wire the whole site. Returns the shared mode/carousel state.
///
/// # Errors
/// Returns an error if there is no document, or the mode controls cannot be wired.
pub fn wire_all() -> anyhow::Result<SharedSite> {
    let document = dom::document().ok_or_else(|| anyhow::anyhow!("document unavailable"))?;
    let config = load_site_config();

    let site = mode::install(config.clone(), &document)?;
    report(
        "nav scroll",
        scroll::install_nav(&document, config.nav_scroll_threshold_px),
    );
    report("mobile menu", menu::install(&document));
    report("scroll reveal", scroll::install_reveal(&document, &config.reveal));
    report("anchor scroll", anchors::install(&document));
    report(
        "contact form",
        contact::install(&document, config.confirmation.clone(), config.form_reset_ms),
    );
    Ok(site)
}
