//! DOM renderer and `setInterval` timer for the hero carousel.
use std::rc::Rc;

use persona_core::constants::CLASS_ACTIVE;
use persona_core::{AutoplayTimer, SlideRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement};

use crate::{dom, selectors};

/// Hero images and their indicator dots, paired by position.
pub struct DomSlides {
    images: Vec<HtmlElement>,
    dots: Vec<Element>,
}

impl DomSlides {
    #[must_use]
    pub fn find(document: &Document) -> Self {
        let images = dom::query(document, selectors::HERO_CAROUSEL)
            .map(|carousel| dom::query_all_in(&carousel, selectors::HERO_IMAGE))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            images,
            dots: Self::find_dots(document),
        }
    }

    /// Indicator dots in position order.
    #[must_use]
    pub fn find_dots(document: &Document) -> Vec<Element> {
        dom::query(document, selectors::HERO_DOTS)
            .map(|container| dom::query_all_in(&container, selectors::HERO_DOT))
            .unwrap_or_default()
    }
}

impl SlideRenderer for DomSlides {
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn render(&mut self, active: usize) {
        for (idx, img) in self.images.iter().enumerate() {
            let opacity = if idx == active { "1" } else { "0" };
            let _ = img.style().set_property("opacity", opacity);
        }
        for (idx, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, CLASS_ACTIVE, idx == active);
        }
    }
}

/// Repeating `setInterval` trigger. Holds at most one interval; arming
/// replaces whatever was running.
pub struct IntervalTimer {
    on_tick: Rc<dyn Fn()>,
    active: Option<(i32, Closure<dyn FnMut()>)>,
}

impl IntervalTimer {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            active: None,
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.active.is_some()
    }
}

impl AutoplayTimer for IntervalTimer {
    fn arm(&mut self, period_ms: u32) {
        self.cancel();
        let Some(win) = dom::window() else {
            return;
        };
        let Ok(timeout) = i32::try_from(period_ms) else {
            log::warn!("autoplay period {period_ms}ms is out of range");
            return;
        };
        let tick = Rc::clone(&self.on_tick);
        let closure = Closure::wrap(Box::new(move || tick()) as Box<dyn FnMut()>);
        match win.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(id) => self.active = Some((id, closure)),
            Err(err) => log::error!("could not arm autoplay: {}", dom::js_error_message(&err)),
        }
    }

    fn cancel(&mut self) {
        if let Some((id, closure)) = self.active.take() {
            if let Some(win) = dom::window() {
                win.clear_interval_with_handle(id);
            }
            drop(closure);
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
