//! Mode resolution from the address bar and saved preference.
//!
//! Precedence (full variant): path, then `?mode=`, then saved preference,
//! then the actor default. The reduced variant skips path routing and never
//! forces a mode when nothing is found.
use url::form_urlencoded;

use crate::config::RoutingVariant;
use crate::constants::QUERY_MODE_PARAM;
use crate::mode::PresentationMode;

/// The parts of `window.location` the resolver cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub path: String,
    /// Raw search string, with or without the leading `?`.
    pub query: String,
    /// Raw fragment, with or without the leading `#`.
    pub hash: String,
}

impl LocationSnapshot {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        query: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
            hash: hash.into(),
        }
    }

    /// Snapshot with only a path, as seen on pop navigation.
    #[must_use]
    pub fn at_path(path: impl Into<String>) -> Self {
        Self::new(path, "", "")
    }
}

/// Where a resolved mode came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Path,
    Query,
    Persisted,
    Default,
    /// Reduced variant with nothing to go on; the page keeps its markup defaults.
    Unforced,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub mode: Option<PresentationMode>,
    pub source: ModeSource,
    /// Canonical address to `replaceState` to, set only for a query-string hit
    /// in the full variant.
    pub rewrite: Option<String>,
}

impl Resolution {
    const fn forced(mode: PresentationMode, source: ModeSource) -> Self {
        Self {
            mode: Some(mode),
            source,
            rewrite: None,
        }
    }
}

/// Mode carried by a structured path (`/dj`, `/actor/`), if any.
#[must_use]
pub fn mode_from_path(path: &str) -> Option<PresentationMode> {
    let trimmed = path.trim_end_matches('/');
    trimmed
        .strip_prefix('/')
        .and_then(PresentationMode::from_canonical)
}

/// First `mode` query parameter, form-decoded and normalized through the
/// alias table.
#[must_use]
pub fn mode_from_query(query: &str) -> Option<PresentationMode> {
    let raw = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find_map(|(key, value)| (key == QUERY_MODE_PARAM).then_some(value))?;
    PresentationMode::normalize(&raw)
}

/// Saved preference, normalized; any unrecognized non-empty value reads as actor.
#[must_use]
pub fn mode_from_persisted(saved: Option<&str>) -> Option<PresentationMode> {
    saved
        .filter(|token| !token.is_empty())
        .map(PresentationMode::coerce)
}

/// Canonical address for `mode`, keeping the fragment.
#[must_use]
pub fn canonical_address(mode: PresentationMode, hash: &str) -> String {
    let fragment = hash.trim_start_matches('#');
    if fragment.is_empty() {
        mode.path()
    } else {
        format!("{}#{fragment}", mode.path())
    }
}

/// Resolve the mode for a fresh page load.
#[must_use]
pub fn resolve_initial(
    variant: RoutingVariant,
    location: &LocationSnapshot,
    saved: Option<&str>,
) -> Resolution {
    if variant.routes_paths()
        && let Some(mode) = mode_from_path(&location.path)
    {
        return Resolution::forced(mode, ModeSource::Path);
    }

    if let Some(mode) = mode_from_query(&location.query) {
        let rewrite = variant
            .routes_paths()
            .then(|| canonical_address(mode, &location.hash));
        return Resolution {
            mode: Some(mode),
            source: ModeSource::Query,
            rewrite,
        };
    }

    if let Some(mode) = mode_from_persisted(saved) {
        return Resolution::forced(mode, ModeSource::Persisted);
    }

    match variant {
        RoutingVariant::Full => Resolution::forced(PresentationMode::Actor, ModeSource::Default),
        RoutingVariant::Reduced => Resolution {
            mode: None,
            source: ModeSource::Unforced,
            rewrite: None,
        },
    }
}

/// Resolve the mode after back/forward navigation.
///
/// The query string is never consulted here; without a path mode only an
/// exact saved `dj` selects the DJ persona. The reduced variant does no path
/// routing and never pushes history, so a pop leaves the mode untouched.
#[must_use]
pub fn resolve_pop(variant: RoutingVariant, path: &str, saved: Option<&str>) -> Resolution {
    if !variant.routes_paths() {
        return Resolution {
            mode: None,
            source: ModeSource::Unforced,
            rewrite: None,
        };
    }
    if let Some(mode) = mode_from_path(path) {
        return Resolution::forced(mode, ModeSource::Path);
    }
    let mode = if saved == Some(PresentationMode::Dj.as_str()) {
        PresentationMode::Dj
    } else {
        PresentationMode::Actor
    };
    let source = if saved.is_some() {
        ModeSource::Persisted
    } else {
        ModeSource::Default
    };
    Resolution::forced(mode, source)
}
