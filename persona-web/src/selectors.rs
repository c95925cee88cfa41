//! Markup contract: every element the site wires up is found through these.

pub const MODE_TOGGLE: &str = ".mode-toggle";
pub const VOICE_LABEL: &str = ".toggle-label--voice";
pub const DJ_LABEL: &str = ".toggle-label--dj";

pub const HERO_CAROUSEL: &str = ".hero-carousel--actor";
pub const HERO_IMAGE: &str = ".hero-img";
pub const HERO_DOTS: &str = ".hero-dots--actor";
pub const HERO_DOT: &str = ".hero-dot";

pub const SITE_NAV: &str = ".site-nav";
pub const NAV_HAMBURGER: &str = ".nav-hamburger";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK: &str = "a";

pub const REVEAL_TARGETS: &str = ".reveal, .reveal-stagger";
pub const HASH_LINKS: &str = "a[href^=\"#\"]";

pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = ".btn-submit";
