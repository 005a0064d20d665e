//! Shared literal values: storage key, thresholds, markup hooks, styles.

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the document element that carries the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Presentation flag used for the open menu and the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Distance below the scroll offset used to pick the current section.
pub const SECTION_LOOK_AHEAD: f64 = 100.0;

/// Scroll offset above which the navbar gets the elevated shadow.
pub const SHADOW_THRESHOLD: f64 = 50.0;

pub const SHADOW_ELEVATED: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)";
pub const SHADOW_FLAT: &str = "0 1px 3px rgba(0, 0, 0, 0.1)";

// --- Element ids ---

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MENU_BUTTON_ID: &str = "mobileMenuBtn";
pub const MENU_ID: &str = "navLinks";
pub const NAVBAR_ID: &str = "navbar";
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

// --- Selectors ---

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const PLACEHOLDER_SELECTOR: &str = "a[href=\"#\"]";
pub const FADE_SELECTOR: &str = ".card, .project-card";

// --- Fade-in ---

pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_HIDDEN_OPACITY: &str = "0";
pub const FADE_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const FADE_SHOWN_OPACITY: &str = "1";
pub const FADE_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const PLACEHOLDER_MESSAGE: &str = "This is a placeholder link. Please update with your actual project URL.";

// --- JS exports ---

/// Parameter and body of the variadic wrapper returned by the JS `debounce`
/// export. It packs every argument into one array for the Rust side.
pub const DEBOUNCE_SHIM_PARAM: &str = "fire";
pub const DEBOUNCE_SHIM_BODY: &str = "return function (...args) { fire(args); };";
