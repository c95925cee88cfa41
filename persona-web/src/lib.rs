#![forbid(unsafe_code)]
//! Browser entry point for the persona site. Wires the core logic onto the
//! server-rendered markup; nothing here renders new elements.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod carousel;
pub mod config;
pub mod dom;
pub mod location;
pub mod selectors;
pub mod storage;
pub mod surface;
pub mod wiring;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SITE: std::cell::RefCell<Option<wiring::SharedSite>> = const { std::cell::RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second init (e.g. in tests) keeps the first logger.
    let _ = console_log::init_with_level(level);

    match wiring::wire_all() {
        Ok(site) => SITE.with(|slot| *slot.borrow_mut() = Some(site)),
        Err(err) => log::error!("persona site failed to start: {err:#}"),
    }
}
