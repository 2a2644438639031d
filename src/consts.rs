//! Shared constants for the page controller.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset in pixels past which the nav becomes sticky.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Quiet period before a burst of scroll events is handled.
pub const SCROLL_DEBOUNCE_MS: u32 = 50;

// ── Storage ─────────────────────────────────────────────────────

/// localStorage key holding `"true"` / `"false"`.
pub const THEME_STORAGE_KEY: &str = "darkMode";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_STICKY: &str = "sticky";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DARK: &str = "dark";
pub const CLASS_ICON_LIGHT: &str = "fa-moon";
pub const CLASS_ICON_DARK: &str = "fa-sun";

// ── Attributes ──────────────────────────────────────────────────

/// Skill-bar attribute holding the target CSS width.
pub const ATTR_SKILL_LEVEL: &str = "data-level";

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_NOTICE: &str = "Thank you for your message! I will get back to you soon.";
