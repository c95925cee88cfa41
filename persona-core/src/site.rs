//! The page-lifetime state container and the only place the mode changes.
use crate::carousel::{AutoplayTimer, CarouselEngine, SlideRenderer};
use crate::config::SiteConfig;
use crate::mode::PresentationMode;
use crate::resolver::{self, LocationSnapshot, ModeSource, Resolution};

/// Trait for abstracting the saved mode preference.
/// Platform-specific implementations should provide this.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read the saved preference under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Save `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Trait for the page-level presentation of a mode: root flag, toggle labels
/// and (optionally) the document title.
pub trait ModeSurface {
    fn present(&mut self, mode: PresentationMode, title: Option<&str>);
}

/// Address bar change a caller must carry out after a mode change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressUpdate {
    /// `history.replaceState` to the given address.
    Replace(String),
    /// `history.pushState` to the given address.
    Push(String),
}

pub struct PersonaSite<S, P, R, T> {
    config: SiteConfig,
    mode: PresentationMode,
    forced: bool,
    surface: S,
    prefs: P,
    carousel: CarouselEngine<R, T>,
}

impl<S, P, R, T> PersonaSite<S, P, R, T>
where
    S: ModeSurface,
    P: PreferenceStore,
    R: SlideRenderer,
    T: AutoplayTimer,
{
    pub fn new(config: SiteConfig, surface: S, prefs: P, renderer: R, timer: T) -> Self {
        let period = config.autoplay_period_ms;
        Self {
            config,
            mode: PresentationMode::default(),
            forced: false,
            surface,
            prefs,
            carousel: CarouselEngine::new(renderer, timer, period),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Whether any resolution or toggle has applied a mode yet.
    #[must_use]
    pub const fn mode_forced(&self) -> bool {
        self.forced
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn carousel(&self) -> &CarouselEngine<R, T> {
        &self.carousel
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub const fn prefs(&self) -> &P {
        &self.prefs
    }

    /// Apply `mode` to the page: root flag, labels, title, carousel reset,
    /// autoplay restart and persistence.
    pub fn apply_mode(&mut self, mode: PresentationMode) {
        self.mode = mode;
        self.forced = true;
        let title = self.config.title_for(mode);
        self.surface.present(mode, title);
        self.carousel.reset();
        self.carousel.start(mode);
        if let Err(err) = self.prefs.save(&self.config.storage_key, mode.as_str()) {
            log::warn!("could not persist mode {mode}: {err}");
        }
    }

    /// Apply a raw mode token; anything but `dj` means actor.
    pub fn apply_token(&mut self, token: &str) {
        self.apply_mode(PresentationMode::coerce(token));
    }

    fn saved_preference(&self) -> Option<String> {
        match self.prefs.load(&self.config.storage_key) {
            Ok(saved) => saved,
            Err(err) => {
                log::warn!("could not read saved mode: {err}");
                None
            }
        }
    }

    /// Resolve and apply the mode for a fresh page load, then start the carousel.
    ///
    /// Returns the address rewrite to perform, if the page was reached through
    /// a legacy `?mode=` link.
    pub fn boot(&mut self, location: &LocationSnapshot) -> Option<AddressUpdate> {
        let saved = self.saved_preference();
        let resolution = resolver::resolve_initial(self.config.variant, location, saved.as_deref());
        let update = self.apply_resolution(&resolution);
        self.carousel.reset();
        self.carousel.start(self.mode);
        log::info!(
            "persona site ready: mode {} via {:?}, {} slides",
            self.mode,
            resolution.source,
            self.carousel.count()
        );
        update
    }

    /// Back/forward navigation landed on `path`.
    pub fn on_pop(&mut self, path: &str) {
        let saved = self.saved_preference();
        let resolution = resolver::resolve_pop(self.config.variant, path, saved.as_deref());
        self.apply_resolution(&resolution);
    }

    fn apply_resolution(&mut self, resolution: &Resolution) -> Option<AddressUpdate> {
        let Some(mode) = resolution.mode else {
            debug_assert_eq!(resolution.source, ModeSource::Unforced);
            log::debug!("mode left to page defaults");
            return None;
        };
        log::debug!("mode {mode} resolved from {:?}", resolution.source);
        self.apply_mode(mode);
        resolution.rewrite.clone().map(AddressUpdate::Replace)
    }

    /// The visitor flipped the mode toggle.
    pub fn toggle(&mut self) -> Option<AddressUpdate> {
        let next = self.mode.toggled();
        self.apply_mode(next);
        self.config
            .variant
            .routes_paths()
            .then(|| AddressUpdate::Push(next.path()))
    }

    /// Autoplay trigger fired.
    pub fn tick(&mut self) {
        self.carousel.advance(self.mode);
    }

    /// Indicator `index` was clicked.
    pub fn select_slide(&mut self, index: usize) {
        self.carousel.select(index, self.mode);
    }
}
