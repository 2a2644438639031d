//! Browser-free page state and behavior.
//!
//! `PageCore` owns the little state the page has (theme flag, menu flag)
//! and answers every event with a list of [`Action`]s. The
//! host applies them to a [`crate::surface::Surface`]; nothing here touches
//! the DOM, so the whole behavior is testable natively.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::consts::{CLASS_ACTIVE, CLASS_DARK, CLASS_ICON_DARK, CLASS_ICON_LIGHT, CLASS_STICKY, CONTACT_NOTICE};
use crate::contact::ContactSubmission;
use crate::viewport::{VerticalRect, intersects};

/// Elements the controller writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    Nav,
    ScrollButton,
    MenuPanel,
    MenuButton,
    ThemeIcon,
    Year,
    /// Skill bar by document order.
    SkillBar(usize),
}

/// Presentation changes produced by [`PageCore`] for the host to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetClass { target: Target, class: &'static str, on: bool },
    SetStyle { target: Target, property: &'static str, value: String },
    SetText { target: Target, text: String },
    /// Smooth scroll to an absolute document offset.
    ScrollTo { top: f64 },
    Persist { key: String, value: String },
    LogSubmission(ContactSubmission),
    Notify(String),
    ResetForm,
}

impl Action {
    fn class(target: Target, class: &'static str, on: bool) -> Self {
        Self::SetClass { target, class, on }
    }

    fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}

/// Live measurements taken by the host when a scroll is handled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Skills section bounds, if the section exists.
    pub skills: Option<VerticalRect>,
    /// Each skill bar's level attribute, read for this pass, in document order.
    pub skill_levels: Vec<Option<String>>,
}

impl ScrollSnapshot {
    fn skills_visible(&self) -> bool {
        self.skills.is_some_and(|rect| intersects(rect, self.viewport_height))
    }
}

/// True for keys that activate a button: Enter and Space.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Element id named by an in-page `href`, or `None` for `#` and non-fragments.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct PageCore {
    config: PageConfig,
    dark: bool,
    menu_open: bool,
}

impl PageCore {
    #[must_use]
    pub fn new(config: PageConfig) -> Self {
        Self { config, dark: false, menu_open: false }
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    // --- Startup ---

    /// Everything that runs once when the page binds: theme restore, footer
    /// year, and an eager scroll pass.
    pub fn startup(&mut self, stored_theme: Option<&str>, year: i32, snapshot: ScrollSnapshot) -> Vec<Action> {
        let mut actions = self.restore_theme(stored_theme);
        actions.push(Action::SetText { target: Target::Year, text: year.to_string() });
        actions.extend(self.on_scroll(&snapshot));
        actions
    }

    // --- Theme ---

    /// Apply the stored preference without writing it back. Only `"true"`
    /// selects dark mode.
    pub fn restore_theme(&mut self, stored: Option<&str>) -> Vec<Action> {
        self.dark = stored == Some("true");
        log::debug!("restored theme: dark={}", self.dark);
        self.theme_actions()
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&mut self) -> Vec<Action> {
        self.dark = !self.dark;
        let mut actions = self.theme_actions();
        actions.push(Action::Persist {
            key: self.config.theme_storage_key.clone(),
            value: self.dark.to_string(),
        });
        actions
    }

    fn theme_actions(&self) -> Vec<Action> {
        vec![
            Action::class(Target::Body, CLASS_DARK, self.dark),
            Action::class(Target::ThemeIcon, CLASS_ICON_LIGHT, !self.dark),
            Action::class(Target::ThemeIcon, CLASS_ICON_DARK, self.dark),
        ]
    }

    // --- Scroll ---

    /// Debounced scroll handling: sticky nav, scroll button, skill bars.
    #[must_use]
    pub fn on_scroll(&self, snapshot: &ScrollSnapshot) -> Vec<Action> {
        let scrolled = snapshot.scroll_y > self.config.scroll_threshold_px;
        let mut actions = vec![
            Action::class(Target::Nav, CLASS_STICKY, scrolled),
            Action::class(Target::ScrollButton, CLASS_ACTIVE, scrolled),
        ];
        if snapshot.skills_visible() {
            actions.extend(Self::animate_skill_bars(&snapshot.skill_levels));
        }
        actions
    }

    /// Set every skill bar's width to its level. Bars without a level are
    /// left alone.
    #[must_use]
    pub fn animate_skill_bars(levels: &[Option<String>]) -> Vec<Action> {
        levels
            .iter()
            .enumerate()
            .filter_map(|(i, level)| level.as_ref().map(|level| Action::style(Target::SkillBar(i), "width", level)))
            .collect()
    }

    /// Smooth scroll back to the top of the document.
    #[must_use]
    pub fn scroll_to_top(&self) -> Vec<Action> {
        vec![Action::ScrollTo { top: 0.0 }]
    }

    /// Scroll so the anchor target sits just below the nav bar.
    ///
    /// `target_offset_top` is `None` when the fragment did not resolve, in
    /// which case nothing happens.
    #[must_use]
    pub fn scroll_to_anchor(&self, target_offset_top: Option<f64>, nav_height: f64) -> Vec<Action> {
        target_offset_top
            .map(|top| vec![Action::ScrollTo { top: top - nav_height }])
            .unwrap_or_default()
    }

    // --- Mobile menu ---

    /// Open or close the slide-out menu. Repeating the current state emits
    /// the same (idempotent) writes again.
    pub fn set_menu_open(&mut self, open: bool) -> Vec<Action> {
        self.menu_open = open;
        let (opacity, pointer, overflow) = if open { ("0", "none", "hidden") } else { ("1", "auto", "auto") };
        vec![
            Action::class(Target::MenuPanel, CLASS_ACTIVE, open),
            Action::style(Target::MenuButton, "opacity", opacity),
            Action::style(Target::MenuButton, "pointer-events", pointer),
            Action::style(Target::Body, "overflow", overflow),
            Action::style(Target::ScrollButton, "pointer-events", pointer),
        ]
    }

    /// Document-level click: closes an open menu unless the click landed in
    /// the menu panel or on the opener.
    pub fn on_document_click(&mut self, inside_menu: bool, inside_opener: bool) -> Vec<Action> {
        if self.menu_open && !inside_menu && !inside_opener {
            return self.set_menu_open(false);
        }
        Vec::new()
    }

    /// Writes that return the page to its unbound state before the
    /// listeners go away: an open menu would otherwise keep scrolling
    /// locked with nothing left to close it.
    pub fn teardown(&mut self) -> Vec<Action> {
        self.set_menu_open(false)
    }

    // --- Contact form ---

    /// Local-only submit: log, acknowledge, reset.
    #[must_use]
    pub fn submit_contact(&self, submission: ContactSubmission) -> Vec<Action> {
        vec![Action::LogSubmission(submission), Action::Notify(CONTACT_NOTICE.into()), Action::ResetForm]
    }
}
