//! Page configuration: markup hooks and tuning values.
//!
//! Defaults describe the stock portfolio markup. A page may override any
//! subset by embedding a JSON block:
//!
//! ```html
//! <script id="folio-config" type="application/json">
//!   { "shadow_threshold": 80, "default_theme": "dark" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FolioError;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme_toggle_id: String,
    pub menu_button_id: String,
    pub menu_id: String,
    pub navbar_id: String,
    pub nav_link_selector: String,
    pub section_selector: String,
    pub anchor_selector: String,
    pub placeholder_selector: String,
    pub fade_selector: String,
    pub storage_key: String,
    pub default_theme: Theme,
    pub look_ahead: f64,
    pub shadow_threshold: f64,
    pub placeholder_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: THEME_TOGGLE_ID.to_owned(),
            menu_button_id: MENU_BUTTON_ID.to_owned(),
            menu_id: MENU_ID.to_owned(),
            navbar_id: NAVBAR_ID.to_owned(),
            nav_link_selector: NAV_LINK_SELECTOR.to_owned(),
            section_selector: SECTION_SELECTOR.to_owned(),
            anchor_selector: ANCHOR_SELECTOR.to_owned(),
            placeholder_selector: PLACEHOLDER_SELECTOR.to_owned(),
            fade_selector: FADE_SELECTOR.to_owned(),
            storage_key: THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Light,
            look_ahead: SECTION_LOOK_AHEAD,
            shadow_threshold: SHADOW_THRESHOLD,
            placeholder_message: PLACEHOLDER_MESSAGE.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a config block, filling unspecified fields from the defaults.
    ///
    /// Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| FolioError::Config(e.to_string()))
    }
}
