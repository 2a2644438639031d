//! Page binding configuration.
//!
//! Every field has a default matching the portfolio markup, so embedders
//! only override what differs. Parsed from JSON when supplied by the host
//! page; missing keys fall back to their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{SCROLL_DEBOUNCE_MS, SCROLL_THRESHOLD_PX, THEME_STORAGE_KEY};

/// CSS selectors for every element the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav: String,
    pub scroll_button: String,
    pub menu_panel: String,
    pub cancel_button: String,
    pub menu_links: String,
    pub theme_toggle: String,
    /// Icon inside the theme toggle, relative to it.
    pub theme_icon: String,
    pub year: String,
    pub contact_form: String,
    pub skill_bars: String,
    pub skills_section: String,
    pub menu_button: String,
    pub anchors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav: "nav".into(),
            scroll_button: ".scroll-button a".into(),
            menu_panel: ".navbar".into(),
            cancel_button: ".cancel-btn".into(),
            menu_links: ".menu li a".into(),
            theme_toggle: "#theme-toggle".into(),
            theme_icon: "i".into(),
            year: "#year".into(),
            contact_form: "#contact-form".into(),
            skill_bars: ".skill-bar".into(),
            skills_section: ".skills".into(),
            menu_button: ".menu-btn".into(),
            anchors: "a[href^=\"#\"]".into(),
        }
    }
}

/// Tunables and selectors for a [`crate::page::PageCore`] and its browser host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub scroll_threshold_px: f64,
    pub scroll_debounce_ms: u32,
    pub theme_storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            theme_storage_key: THEME_STORAGE_KEY.into(),
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON, defaulting any absent field.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when `raw` is not a JSON
    /// object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
