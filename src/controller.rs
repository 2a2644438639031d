//! Browser host for [`PageCore`]: listener wiring and lifecycle.
//!
//! LIFECYCLE
//! =========
//! `initialize` resolves elements, applies the startup state and registers
//! every listener. A failure at any step drops the partially built
//! controller, whose [`Bindings`] detach whatever was already attached.
//! `dispose` (also run on drop) closes the mobile menu, cancels a pending
//! scroll pass and removes all listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement, KeyboardEvent};

use crate::bindings::Bindings;
use crate::config::PageConfig;
use crate::contact::{ContactSubmission, FormValue};
use crate::debounce::{Debounce, TimeoutScheduler};
use crate::dom::{DomEvents, DomSource, DomSurface};
use crate::elements::Elements;
use crate::error::InitError;
use crate::page::{Action, PageCore, fragment_id, is_activation_key};
use crate::surface::apply;

struct Shared {
    core: PageCore,
    surface: DomSurface,
}

impl Shared {
    fn run(&mut self, f: impl FnOnce(&mut PageCore, &DomSurface) -> Vec<Action>) {
        let actions = f(&mut self.core, &self.surface);
        apply(&mut self.surface, &actions);
    }
}

pub struct PageController {
    shared: Rc<RefCell<Shared>>,
    bindings: Bindings<DomEvents, TimeoutScheduler>,
}

impl PageController {
    /// Bind to `document`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] when the document has no window, a required
    /// element is missing, or a listener cannot be registered.
    pub fn initialize(document: &Document, config: PageConfig) -> Result<Self, InitError> {
        let window = document.default_view().ok_or(InitError::NoWindow)?;
        let elements = Elements::query(&DomSource(document), &config.selectors)?;

        let delay_ms = config.scroll_debounce_ms;
        let surface = DomSurface::new(window.clone(), document.clone(), elements);
        let shared = Rc::new(RefCell::new(Shared { core: PageCore::new(config), surface }));

        {
            let mut state = shared.borrow_mut();
            let key = state.core.config().theme_storage_key.clone();
            let skills = state.core.config().selectors.skills_section.clone();
            let stored = state.surface.stored(&key);
            let snapshot = state.surface.scroll_snapshot(&skills);
            let year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default();
            state.run(|core, _| core.startup(stored.as_deref(), year, snapshot));
        }

        let shared_for_scroll = Rc::clone(&shared);
        let debounce = Debounce::new(TimeoutScheduler, delay_ms, move || {
            shared_for_scroll.borrow_mut().run(|core, surface| {
                core.on_scroll(&surface.scroll_snapshot(&core.config().selectors.skills_section))
            });
        });

        let mut controller = Self { shared, bindings: Bindings::new(DomEvents, debounce) };
        controller.bind(&window, document)?;
        log::info!("page controller bound ({} listeners)", controller.bindings.len());
        Ok(controller)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), InitError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.bindings.register(target.clone(), event, closure)
    }

    /// Listener that runs a core operation and applies its actions.
    fn on(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        f: impl Fn(&Event, &mut PageCore, &DomSurface) -> Vec<Action> + 'static,
    ) -> Result<(), InitError> {
        let shared = Rc::clone(&self.shared);
        self.listen(target, event, move |ev| {
            shared.borrow_mut().run(|core, surface| f(&ev, core, surface));
        })
    }

    /// Click plus Enter/Space activation for a menu button.
    fn on_menu_button(&mut self, target: &EventTarget, open: bool) -> Result<(), InitError> {
        self.on(target, "click", move |_, core, _| core.set_menu_open(open))?;
        self.on(target, "keydown", move |ev, core, _| {
            let Some(key_event) = ev.dyn_ref::<KeyboardEvent>() else {
                return Vec::new();
            };
            if !is_activation_key(&key_event.key()) {
                return Vec::new();
            }
            ev.prevent_default();
            core.set_menu_open(open)
        })
    }

    fn bind(&mut self, window: &web_sys::Window, document: &Document) -> Result<(), InitError> {
        let elements: Elements<HtmlElement> = self.shared.borrow().surface.elements().clone();

        // Theme
        self.on(&elements.theme_toggle, "click", |_, core, _| core.toggle_theme())?;

        // Scroll
        let debounce = self.bindings.debounce();
        self.listen(window, "scroll", move |_| debounce.trigger())?;

        // Mobile menu
        self.on_menu_button(&elements.menu_button, true)?;
        self.on_menu_button(&elements.cancel_button, false)?;
        for link in &elements.menu_links {
            self.on(link, "click", |_, core, _| core.set_menu_open(false))?;
        }
        self.on(document, "click", |ev, core, _| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return Vec::new();
            };
            let selectors = &core.config().selectors;
            let inside = |selector: &str| target.closest(selector).ok().flatten().is_some();
            let inside_menu = inside(&selectors.menu_panel);
            let inside_opener = inside(&selectors.menu_button);
            core.on_document_click(inside_menu, inside_opener)
        })?;

        // Smooth anchors
        for anchor in &elements.anchors {
            let href_source = anchor.clone();
            self.on(anchor, "click", move |ev, core, surface| {
                ev.prevent_default();
                let href = href_source.get_attribute("href").unwrap_or_default();
                let offset = fragment_id(&href).and_then(|id| surface.offset_top_of(id));
                core.scroll_to_anchor(offset, surface.nav_height())
            })?;
        }

        // Scroll to top
        self.on(&elements.scroll_button, "click", |ev, core, _| {
            ev.prevent_default();
            core.scroll_to_top()
        })?;

        // Contact form
        match elements.contact_form.and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
            Some(form) => {
                let form_source = form.clone();
                self.on(&form, "submit", move |ev, core, _| {
                    ev.prevent_default();
                    core.submit_contact(collect_fields(&form_source))
                })?;
            }
            None => log::debug!("no contact form on page"),
        }

        Ok(())
    }

    /// Close the menu, cancel any pending scroll pass and remove every listener.
    pub fn dispose(&mut self) {
        if let Ok(mut state) = self.shared.try_borrow_mut() {
            state.run(|core, _| core.teardown());
        }
        self.bindings.dispose();
    }
}

impl Drop for PageController {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Form entries as name/value pairs; non-string values are file inputs.
fn collect_fields(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) else {
        return ContactSubmission::default();
    };
    let pairs = entries.flatten().filter_map(|entry| {
        let pair = entry.dyn_into::<js_sys::Array>().ok()?;
        let name = pair.get(0).as_string()?;
        let value = pair.get(1).as_string().map_or(FormValue::File, FormValue::Text);
        Some((name, value))
    });
    ContactSubmission::from_form_entries(pairs)
}
