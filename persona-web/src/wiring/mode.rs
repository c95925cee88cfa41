//! Mode resolution at load, the mode toggle, history pops and carousel dots.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use persona_core::{AddressUpdate, PersonaSite, SiteConfig};
use web_sys::Document;

use crate::carousel::{DomSlides, IntervalTimer};
use crate::location;
use crate::storage::LocalPreferenceStore;
use crate::surface::DocumentSurface;
use crate::{dom, selectors};

pub type WebSite = PersonaSite<DocumentSurface, LocalPreferenceStore, DomSlides, IntervalTimer>;
pub type SharedSite = Rc<RefCell<WebSite>>;

/// Build the site state over the current document. The autoplay timer only
/// holds a weak handle back to the site.
#[must_use]
pub fn build_site(config: SiteConfig, document: &Document) -> SharedSite {
    Rc::new_cyclic(|weak: &Weak<RefCell<WebSite>>| {
        let weak = weak.clone();
        let timer = IntervalTimer::new(move || {
            if let Some(site) = weak.upgrade()
                && let Ok(mut site) = site.try_borrow_mut()
            {
                site.tick();
            }
        });
        RefCell::new(PersonaSite::new(
            config,
            DocumentSurface::find(document),
            LocalPreferenceStore,
            DomSlides::find(document),
            timer,
        ))
    })
}

fn update_address(update: Option<AddressUpdate>) {
    if let Some(update) = update
        && let Err(err) = location::apply_address_update(&update)
    {
        log::warn!("could not update address: {}", dom::js_error_message(&err));
    }
}

/// Resolve the initial mode and wire every mode-related control.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn install(config: SiteConfig, document: &Document) -> anyhow::Result<SharedSite> {
    let site = build_site(config, document);

    let rewrite = site.borrow_mut().boot(&location::current_location());
    update_address(rewrite);

    if let Some(toggle) = dom::query(document, selectors::MODE_TOGGLE) {
        let site = Rc::clone(&site);
        dom::listen(&toggle, "click", move |_| {
            let push = site.borrow_mut().toggle();
            update_address(push);
        })
        .map_err(|e| dom::js_error(&e))?;
    }

    let routes_paths = site.borrow().config().variant.routes_paths();
    if routes_paths && let Some(win) = dom::window() {
        let site = Rc::clone(&site);
        dom::listen(&win, "popstate", move |_| {
            site.borrow_mut().on_pop(&location::current_path());
        })
        .map_err(|e| dom::js_error(&e))?;
    }

    for (idx, dot) in DomSlides::find_dots(document).into_iter().enumerate() {
        let site = Rc::clone(&site);
        dom::listen(&dot, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            site.borrow_mut().select_slide(idx);
        })
        .map_err(|e| dom::js_error(&e))?;
    }

    Ok(site)
}
