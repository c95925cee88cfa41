//! Address bar access: reading the current location and rewriting history.
use persona_core::{AddressUpdate, LocationSnapshot};
use wasm_bindgen::JsValue;

use crate::dom;

/// Path, query and fragment of the current page. Unreadable parts are empty.
#[must_use]
pub fn current_location() -> LocationSnapshot {
    let Some(location) = dom::window().map(|win| win.location()) else {
        return LocationSnapshot::default();
    };
    LocationSnapshot::new(
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default(),
        location.hash().unwrap_or_default(),
    )
}

/// Current path only, as needed after back/forward navigation.
#[must_use]
pub fn current_path() -> String {
    dom::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default()
}

/// Carry out an address change without reloading the page.
///
/// # Errors
/// Returns an error if the window is unavailable or the history API rejects the URL.
pub fn apply_address_update(update: &AddressUpdate) -> Result<(), JsValue> {
    let history = dom::window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .history()?;
    let state = js_sys::Object::new();
    match update {
        AddressUpdate::Replace(url) => {
            history.replace_state_with_url(&state, "", Some(url.as_str()))
        }
        AddressUpdate::Push(url) => history.push_state_with_url(&state, "", Some(url.as_str())),
    }
}
