mod common;

use common::{MemoryStore, site_with};
use persona_core::{
    AddressUpdate, AutoplayState, LocationSnapshot, ModeSource, PresentationMode, RoutingVariant,
    SiteConfig, resolve_initial,
};

fn reduced() -> SiteConfig {
    SiteConfig {
        variant: RoutingVariant::Reduced,
        ..SiteConfig::default()
    }
}

#[test]
fn path_beats_query_beats_saved_preference() {
    let location = LocationSnapshot::new("/dj", "?mode=actor", "");
    let resolution = resolve_initial(RoutingVariant::Full, &location, Some("actor"));
    assert_eq!(resolution.mode, Some(PresentationMode::Dj));
    assert_eq!(resolution.source, ModeSource::Path);
    assert_eq!(resolution.rewrite, None);

    let location = LocationSnapshot::new("/", "?mode=actor", "");
    let resolution = resolve_initial(RoutingVariant::Full, &location, Some("dj"));
    assert_eq!(resolution.mode, Some(PresentationMode::Actor));
    assert_eq!(resolution.source, ModeSource::Query);
}

#[test]
fn legacy_query_rewrites_to_canonical_path_with_fragment() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::default(), 3);
    let update = site.boot(&LocationSnapshot::new("/", "?mode=ark", "#music"));
    assert_eq!(update, Some(AddressUpdate::Replace("/dj#music".to_string())));
    assert_eq!(site.mode(), PresentationMode::Dj);
    assert_eq!(site.prefs().writes, vec!["dj".to_string()]);
}

#[test]
fn canonical_path_never_rewrites() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::default(), 3);
    assert_eq!(site.boot(&LocationSnapshot::new("/actor/", "", "#about")), None);
    assert_eq!(site.mode(), PresentationMode::Actor);
}

#[test]
fn saved_aliases_are_normalized_and_rewritten_canonically() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::with_saved("ark"), 2);
    site.boot(&LocationSnapshot::at_path("/"));
    assert_eq!(site.mode(), PresentationMode::Dj);
    assert_eq!(site.prefs().values.get("mode").map(String::as_str), Some("dj"));

    let (mut site, _clock) =
        site_with(SiteConfig::default(), MemoryStore::with_saved("abraham"), 2);
    site.boot(&LocationSnapshot::at_path("/"));
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert_eq!(site.prefs().writes, vec!["actor".to_string()]);
}

#[test]
fn fresh_visit_defaults_to_actor_on_first_slide() {
    let (mut site, clock) = site_with(SiteConfig::default(), MemoryStore::default(), 3);
    let update = site.boot(&LocationSnapshot::default());
    assert_eq!(update, None);
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert_eq!(site.carousel().current(), 0);
    assert_eq!(site.carousel().renderer().visible(), vec![0]);
    assert_eq!(site.carousel().state(), AutoplayState::Running);
    assert_eq!(clock.active_intervals(), 1);

    let surface = site.surface();
    assert!(!surface.dj_flag);
    assert!(surface.voice_label_active);
    assert!(!surface.dj_label_active);
    assert_eq!(surface.title.as_deref(), Some("Abraham Woo \u{2014} Actor & Voice Actor"));
}

#[test]
fn pop_navigation_ignores_query_and_uses_saved_mode() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::default(), 2);
    site.boot(&LocationSnapshot::new("/", "?mode=dj", ""));
    assert_eq!(site.mode(), PresentationMode::Dj);

    site.on_pop("/actor");
    assert_eq!(site.mode(), PresentationMode::Actor);

    // Saved value is now "actor"; a root pop keeps it.
    site.on_pop("/");
    assert_eq!(site.mode(), PresentationMode::Actor);

    site.on_pop("/dj/");
    site.on_pop("/");
    assert_eq!(site.mode(), PresentationMode::Dj);
}

#[test]
fn reduced_variant_pop_leaves_mode_alone() {
    let (mut site, _clock) = site_with(reduced(), MemoryStore::default(), 2);
    site.boot(&LocationSnapshot::at_path("/"));
    assert!(!site.mode_forced());

    site.on_pop("/dj");
    site.on_pop("/");
    assert!(!site.mode_forced());
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert!(site.prefs().writes.is_empty());
    assert_eq!(site.surface().presentations, 0);

    site.toggle();
    site.on_pop("/actor");
    assert_eq!(site.mode(), PresentationMode::Dj);
    assert_eq!(site.prefs().writes, vec!["dj"]);
}

#[test]
fn toggle_pushes_canonical_path_in_full_variant_only() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::default(), 2);
    site.boot(&LocationSnapshot::default());
    assert_eq!(site.toggle(), Some(AddressUpdate::Push("/dj".to_string())));
    assert_eq!(site.mode(), PresentationMode::Dj);
    assert_eq!(site.surface().title.as_deref(), Some("Ark \u{2014} DJ & Music Curator"));

    let (mut site, _clock) = site_with(reduced(), MemoryStore::default(), 2);
    site.boot(&LocationSnapshot::default());
    assert_eq!(site.toggle(), None);
    assert_eq!(site.mode(), PresentationMode::Dj);
    assert_eq!(site.surface().title, None);
}

#[test]
fn reduced_variant_skips_paths_and_forces_nothing_without_input() {
    let (mut site, clock) = site_with(reduced(), MemoryStore::default(), 3);
    let update = site.boot(&LocationSnapshot::at_path("/dj"));
    assert_eq!(update, None);
    assert!(!site.mode_forced());
    assert_eq!(site.surface().presentations, 0);
    assert!(site.prefs().writes.is_empty());
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert_eq!(clock.active_intervals(), 1);
}

#[test]
fn reduced_variant_accepts_query_without_rewriting() {
    let (mut site, _clock) = site_with(reduced(), MemoryStore::with_saved("actor"), 3);
    let update = site.boot(&LocationSnapshot::new("/", "?mode=ark", "#top"));
    assert_eq!(update, None);
    assert_eq!(site.mode(), PresentationMode::Dj);
}

#[test]
fn unreadable_storage_falls_back_to_default() {
    let store = MemoryStore {
        offline: true,
        ..MemoryStore::default()
    };
    let (mut site, _clock) = site_with(SiteConfig::default(), store, 2);
    site.boot(&LocationSnapshot::default());
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert!(site.mode_forced());
}

#[test]
fn unknown_tokens_apply_as_actor() {
    let (mut site, _clock) = site_with(SiteConfig::default(), MemoryStore::default(), 2);
    site.apply_token("dj");
    assert_eq!(site.mode(), PresentationMode::Dj);
    site.apply_token("moonwalk");
    assert_eq!(site.mode(), PresentationMode::Actor);
    assert_eq!(site.prefs().writes, vec!["dj".to_string(), "actor".to_string()]);
}
