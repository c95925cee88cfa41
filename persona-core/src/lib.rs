//! Persona Site Core
//!
//! Platform-agnostic presentation logic for the actor/DJ persona site: mode
//! resolution and application, the hero carousel, scroll reveal bookkeeping,
//! the mobile menu and contact form feedback.
//! This crate has no browser dependencies; the web crate supplies the
//! platform through the traits re-exported below.

pub mod anchor;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod contact;
pub mod menu;
pub mod mode;
pub mod resolver;
pub mod scroll;
pub mod site;

// Re-export commonly used types
pub use anchor::fragment_selector;
pub use carousel::{AutoplayState, AutoplayTimer, CarouselEngine, SlideRenderer};
pub use config::{
    ConfigError, Confirmation, ModeTitles, RevealOptions, RoutingVariant, SiteConfig,
};
pub use contact::{ButtonLook, FeedbackState, FormReset, SubmitFeedback};
pub use menu::NavMenu;
pub use mode::PresentationMode;
pub use resolver::{LocationSnapshot, ModeSource, Resolution, resolve_initial, resolve_pop};
pub use scroll::{RevealTracker, nav_is_scrolled};
pub use site::{AddressUpdate, ModeSurface, PersonaSite, PreferenceStore};
