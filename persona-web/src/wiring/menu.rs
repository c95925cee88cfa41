//! Mobile hamburger menu.
use std::cell::RefCell;
use std::rc::Rc;

use persona_core::NavMenu;
use persona_core::constants::CLASS_OPEN;
use web_sys::{Document, Element};

use crate::{dom, selectors};

fn render(menu: NavMenu, hamburger: &Element, links: Option<&Element>) {
    dom::set_class(hamburger, CLASS_OPEN, menu.is_open());
    if let Some(links) = links {
        dom::set_class(links, CLASS_OPEN, menu.is_open());
    }
}

/// # Errors
/// Returns an error if a click listener cannot be attached.
pub fn install(document: &Document) -> anyhow::Result<()> {
    let Some(hamburger) = dom::query(document, selectors::NAV_HAMBURGER) else {
        return Ok(());
    };
    let links = dom::query(document, selectors::NAV_LINKS);
    let menu = Rc::new(RefCell::new(NavMenu::default()));

    {
        let menu = Rc::clone(&menu);
        let button = hamburger.clone();
        let links = links.clone();
        dom::listen(&hamburger, "click", move |_| {
            let mut state = menu.borrow_mut();
            state.toggle();
            render(*state, &button, links.as_ref());
        })
        .map_err(|e| dom::js_error(&e))?;
    }

    let Some(container) = links else {
        return Ok(());
    };
    for link in dom::query_all_in(&container, selectors::NAV_LINK) {
        let menu = Rc::clone(&menu);
        let button = hamburger.clone();
        let container = container.clone();
        dom::listen(&link, "click", move |_| {
            let mut state = menu.borrow_mut();
            state.close();
            render(*state, &button, Some(&container));
        })
        .map_err(|e| dom::js_error(&e))?;
    }
    Ok(())
}
