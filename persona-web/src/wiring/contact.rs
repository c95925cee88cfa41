//! Contact form acknowledgement.
use std::cell::RefCell;
use std::rc::Rc;

use persona_core::{ButtonLook, Confirmation, SubmitFeedback};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement};

use crate::{dom, selectors};

fn paint(button: &HtmlElement, look: &ButtonLook) {
    button.set_text_content(Some(look.label.as_str()));
    let style = button.style();
    let _ = match &look.background {
        Some(color) => style.set_property("background", color),
        None => style.remove_property("background").map(|_| ()),
    };
}

/// # Errors
/// Returns an error if the submit listener cannot be attached.
pub fn install(
    document: &Document,
    confirmation: Confirmation,
    reset_ms: u32,
) -> anyhow::Result<()> {
    let Some(form) = dom::query(document, selectors::CONTACT_FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let feedback = Rc::new(RefCell::new(SubmitFeedback::new(confirmation)));
    let delay = i32::try_from(reset_ms).unwrap_or(i32::MAX);
    let target = form.clone();

    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        let Some(button) = dom::query_in(&form, selectors::SUBMIT_BUTTON)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let current = button.text_content().unwrap_or_default();
        let look = feedback.borrow_mut().submit(&current);
        paint(&button, &look);

        let feedback = Rc::clone(&feedback);
        let form = form.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::sleep_ms(delay).await {
                log::warn!("form reset timer failed: {}", dom::js_error_message(&err));
            }
            let Some(reset) = feedback.borrow_mut().elapse() else {
                return;
            };
            paint(&button, &reset.look);
            form.reset();
        });
    })
    .map_err(|e| dom::js_error(&e))
}
