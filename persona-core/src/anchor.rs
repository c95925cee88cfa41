//! Same-page anchor links.

/// Selector to look up for a same-page link, or `None` when the href is not
/// a usable fragment (external link, or a bare `#`).
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    (!fragment.is_empty()).then_some(href)
}
