//! Element lookup against the page markup.
//!
//! Lookup order is fixed and fails on the first required element that is
//! missing. The contact form is optional; the link and skill-bar lists may
//! be empty.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use crate::config::Selectors;
use crate::error::InitError;
use crate::page::Target;

/// Query access to a document.
pub trait ElementSource {
    type Element: Clone;

    fn body(&self) -> Option<Self::Element>;
    fn first(&self, selector: &str) -> Option<Self::Element>;
    fn all(&self, selector: &str) -> Vec<Self::Element>;
    fn first_within(&self, parent: &Self::Element, selector: &str) -> Option<Self::Element>;
}

/// Every element the controller binds to, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Elements<E> {
    pub body: E,
    pub nav: E,
    pub scroll_button: E,
    pub menu_panel: E,
    pub cancel_button: E,
    pub menu_links: Vec<E>,
    pub theme_toggle: E,
    pub theme_icon: E,
    pub year: E,
    pub contact_form: Option<E>,
    pub skill_bars: Vec<E>,
    pub menu_button: E,
    pub anchors: Vec<E>,
}

fn required<S: ElementSource>(source: &S, selector: &str) -> Result<S::Element, InitError> {
    source.first(selector).ok_or_else(|| InitError::ElementNotFound { selector: selector.to_owned() })
}

impl<E: Clone> Elements<E> {
    /// Resolve all elements.
    ///
    /// # Errors
    ///
    /// [`InitError::ElementNotFound`] naming the first selector that matched
    /// nothing. A missing theme icon is reported as `"<toggle> <icon>"`.
    pub fn query<S: ElementSource<Element = E>>(source: &S, selectors: &Selectors) -> Result<Self, InitError> {
        let nav = required(source, &selectors.nav)?;
        let scroll_button = required(source, &selectors.scroll_button)?;
        let body = source.body().ok_or_else(|| InitError::ElementNotFound { selector: "body".into() })?;
        let menu_panel = required(source, &selectors.menu_panel)?;
        let cancel_button = required(source, &selectors.cancel_button)?;
        let menu_links = source.all(&selectors.menu_links);
        let theme_toggle = required(source, &selectors.theme_toggle)?;
        let theme_icon = source.first_within(&theme_toggle, &selectors.theme_icon).ok_or_else(|| {
            InitError::ElementNotFound { selector: format!("{} {}", selectors.theme_toggle, selectors.theme_icon) }
        })?;
        let year = required(source, &selectors.year)?;
        let contact_form = source.first(&selectors.contact_form);
        let skill_bars = source.all(&selectors.skill_bars);
        let menu_button = required(source, &selectors.menu_button)?;
        let anchors = source.all(&selectors.anchors);

        Ok(Self {
            body,
            nav,
            scroll_button,
            menu_panel,
            cancel_button,
            menu_links,
            theme_toggle,
            theme_icon,
            year,
            contact_form,
            skill_bars,
            menu_button,
            anchors,
        })
    }

    /// Element written by actions aimed at `target`.
    #[must_use]
    pub fn target(&self, target: Target) -> Option<&E> {
        match target {
            Target::Body => Some(&self.body),
            Target::Nav => Some(&self.nav),
            Target::ScrollButton => Some(&self.scroll_button),
            Target::MenuPanel => Some(&self.menu_panel),
            Target::MenuButton => Some(&self.menu_button),
            Target::ThemeIcon => Some(&self.theme_icon),
            Target::Year => Some(&self.year),
            Target::SkillBar(i) => self.skill_bars.get(i),
        }
    }
}
