//! Page-level mode presentation: the body flag, toggle labels and title.
use persona_core::constants::{CLASS_ACTIVE, CLASS_DJ_MODE};
use persona_core::{ModeSurface, PresentationMode};
use web_sys::{Document, Element, HtmlElement};

use crate::{dom, selectors};

pub struct DocumentSurface {
    document: Document,
    body: Option<HtmlElement>,
    voice_label: Option<Element>,
    dj_label: Option<Element>,
}

impl DocumentSurface {
    /// Look up the mode-bearing elements once; missing ones are skipped.
    #[must_use]
    pub fn find(document: &Document) -> Self {
        Self {
            document: document.clone(),
            body: document.body(),
            voice_label: dom::query(document, selectors::VOICE_LABEL),
            dj_label: dom::query(document, selectors::DJ_LABEL),
        }
    }

    /// Whether the body currently carries the DJ flag.
    #[must_use]
    pub fn shows_dj(&self) -> bool {
        self.body
            .as_ref()
            .is_some_and(|body| body.class_list().contains(CLASS_DJ_MODE))
    }
}

impl ModeSurface for DocumentSurface {
    fn present(&mut self, mode: PresentationMode, title: Option<&str>) {
        if let Some(body) = &self.body {
            dom::set_class(body, CLASS_DJ_MODE, mode.is_dj());
        }
        if let Some(title) = title {
            self.document.set_title(title);
        }
        if let Some(label) = &self.voice_label {
            dom::set_class(label, CLASS_ACTIVE, !mode.is_dj());
        }
        if let Some(label) = &self.dj_label {
            dom::set_class(label, CLASS_ACTIVE, mode.is_dj());
        }
    }
}
