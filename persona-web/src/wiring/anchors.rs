//! Smooth scrolling for same-page hash links.
use persona_core::fragment_selector;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

use crate::{dom, selectors};

/// # Errors
/// Returns an error if a click listener cannot be attached.
pub fn install(document: &Document) -> anyhow::Result<()> {
    for anchor in dom::query_all(document, selectors::HASH_LINKS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = fragment_selector(&href).and_then(|sel| dom::query(&doc, sel))
            else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })
        .map_err(|e| dom::js_error(&e))?;
    }
    Ok(())
}
