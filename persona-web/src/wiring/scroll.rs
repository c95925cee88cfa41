//! Nav bar scroll style and reveal-on-scroll.
use std::cell::RefCell;
use std::rc::Rc;

use persona_core::constants::{CLASS_SCROLLED, CLASS_VISIBLE};
use persona_core::{RevealOptions, RevealTracker, nav_is_scrolled};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::{dom, selectors};

fn sync_nav(nav: &Element, threshold_px: f64) {
    let offset = dom::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or_default();
    dom::set_class(nav, CLASS_SCROLLED, nav_is_scrolled(offset, threshold_px));
}

/// Keep `.site-nav` in its scrolled style past the threshold.
///
/// # Errors
/// Returns an error if the scroll listener cannot be attached.
pub fn install_nav(document: &Document, threshold_px: f64) -> anyhow::Result<()> {
    let (Some(win), Some(nav)) = (dom::window(), dom::query(document, selectors::SITE_NAV)) else {
        return Ok(());
    };
    sync_nav(&nav, threshold_px);
    dom::listen_passive(&win, "scroll", move |_| sync_nav(&nav, threshold_px))
        .map_err(|e| dom::js_error(&e))
}

/// Observe every reveal target and mark it visible the first time it shows.
///
/// # Errors
/// Returns an error if the observer cannot be created.
pub fn install_reveal(document: &Document, options: &RevealOptions) -> anyhow::Result<()> {
    let targets = dom::query_all(document, selectors::REVEAL_TARGETS);
    if targets.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let observed = targets.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(idx) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(idx, entry.is_intersecting()) {
                    dom::set_class(&target, CLASS_VISIBLE, true);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| dom::js_error(&e))?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}
