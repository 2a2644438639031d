//! DOM bindings: element source, event sink and the browser [`Surface`].
//!
//! Writes that the browser rejects are dropped, as are storage failures
//! (private mode, quota, sandboxing).

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollToOptions, Storage,
    Window,
};

use crate::bindings::EventSink;
use crate::consts::ATTR_SKILL_LEVEL;
use crate::elements::{ElementSource, Elements};
use crate::page::{ScrollSnapshot, Target};
use crate::surface::Surface;
use crate::viewport::VerticalRect;

/// [`ElementSource`] over a live document. Non-HTML matches are ignored.
pub struct DomSource<'a>(pub &'a Document);

impl ElementSource for DomSource<'_> {
    type Element = HtmlElement;

    fn body(&self) -> Option<HtmlElement> {
        self.0.body()
    }

    fn first(&self, selector: &str) -> Option<HtmlElement> {
        self.0.query_selector(selector).ok().flatten()?.dyn_into().ok()
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into().ok())
            .collect()
    }

    fn first_within(&self, parent: &HtmlElement, selector: &str) -> Option<HtmlElement> {
        parent.query_selector(selector).ok().flatten()?.dyn_into().ok()
    }
}

/// `addEventListener` / `removeEventListener`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomEvents;

impl EventSink for DomEvents {
    type Target = EventTarget;
    type Handler = Closure<dyn FnMut(Event)>;

    fn attach(&self, target: &EventTarget, event: &str, handler: &Self::Handler) -> bool {
        target
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .is_ok()
    }

    fn detach(&self, target: &EventTarget, event: &str, handler: &Self::Handler) {
        let _ = target.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    }
}

/// Browser [`Surface`] writing to the bound elements.
pub struct DomSurface {
    window: Window,
    document: Document,
    storage: Option<Storage>,
    elements: Elements<HtmlElement>,
}

impl DomSurface {
    #[must_use]
    pub fn new(window: Window, document: Document, elements: Elements<HtmlElement>) -> Self {
        let storage = window.local_storage().ok().flatten();
        Self { window, document, storage, elements }
    }

    #[must_use]
    pub fn elements(&self) -> &Elements<HtmlElement> {
        &self.elements
    }

    /// Stored value for `key`, or `None` when absent or storage is unavailable.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    /// Current scroll offset, viewport height, skills-section bounds and
    /// skill-bar levels.
    #[must_use]
    pub fn scroll_snapshot(&self, skills_selector: &str) -> ScrollSnapshot {
        let root = self.document.document_element();
        let scroll_y = self
            .window
            .scroll_y()
            .ok()
            .filter(|y| *y > 0.0)
            .or_else(|| root.as_ref().map(|el| f64::from(el.scroll_top())))
            .unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .or_else(|| root.as_ref().map(|el| f64::from(el.client_height())))
            .unwrap_or(0.0);
        let skills = self
            .document
            .query_selector(skills_selector)
            .ok()
            .flatten()
            .map(|el: Element| {
                let rect = el.get_bounding_client_rect();
                VerticalRect::new(rect.top(), rect.bottom())
            });
        let skill_levels = self.elements.skill_bars.iter().map(|bar| bar.get_attribute(ATTR_SKILL_LEVEL)).collect();
        ScrollSnapshot { scroll_y, viewport_height, skills, skill_levels }
    }

    /// Document offset of the element with `id`, if it exists.
    #[must_use]
    pub fn offset_top_of(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }

    #[must_use]
    pub fn nav_height(&self) -> f64 {
        f64::from(self.elements.nav.offset_height())
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, target: Target, class: &str, on: bool) {
        if let Some(el) = self.elements.target(target) {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(el) = self.elements.target(target) {
            let _ = el.style().set_property(property, value);
        }
    }

    fn set_text(&mut self, target: Target, text: &str) {
        if let Some(el) = self.elements.target(target) {
            el.set_text_content(Some(text));
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn reset_form(&mut self) {
        if let Some(form) = self.elements.contact_form.as_ref().and_then(|el| el.dyn_ref::<HtmlFormElement>()) {
            form.reset();
        }
    }
}
