//! # folio
//!
//! WASM controller for a static portfolio page: persisted dark mode, sticky
//! nav, slide-out mobile menu, smooth anchor scrolling, scroll-to-top,
//! skill-bar fill on visibility, and a local-only contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Browser-free page state and the [`page::Action`]s it produces |
//! | [`surface`] | Presentation seam that applies actions |
//! | [`debounce`] | Trailing debounce over a pluggable timer |
//! | [`elements`] | Element lookup with a fixed required-element order |
//! | [`bindings`] | Listener bookkeeping and disposal |
//! | [`viewport`] | Vertical viewport intersection |
//! | [`contact`] | Contact form submissions |
//! | [`config`] | Selectors and tunables |
//! | [`error`] | Initialization errors |
//! | [`consts`] | Shared constants (threshold, storage key, class names) |
//! | `dom`, `controller` | web-sys bindings and listener lifecycle (`hydrate` only) |

pub mod bindings;
pub mod config;
pub mod consts;
pub mod contact;
pub mod debounce;
pub mod elements;
pub mod error;
pub mod page;
pub mod surface;
pub mod viewport;

#[cfg(feature = "hydrate")]
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;

    use crate::config::PageConfig;
    use crate::controller::PageController;
    use crate::error::InitError;

    thread_local! {
        static ACTIVE: RefCell<Option<PageController>> = const { RefCell::new(None) };
    }

    fn mount(config: PageConfig) {
        let document = web_sys::window().and_then(|w| w.document()).ok_or(InitError::NoDocument);
        match document.and_then(|document| PageController::initialize(&document, config)) {
            Ok(controller) => ACTIVE.with(|slot| *slot.borrow_mut() = Some(controller)),
            Err(e) => log::error!("page controller failed to start: {e}"),
        }
    }

    /// Mount now, or once `DOMContentLoaded` fires if the document is still loading.
    fn mount_when_ready(config: PageConfig) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("page controller failed to start: no document available");
            return;
        };
        if document.ready_state() != "loading" {
            mount(config);
            return;
        }
        let mut pending = Some(config);
        let on_ready = Closure::wrap(Box::new(move || {
            if let Some(config) = pending.take() {
                mount(config);
            }
        }) as Box<dyn FnMut()>);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_err()
        {
            log::error!("page controller failed to start: cannot wait for DOMContentLoaded");
            return;
        }
        on_ready.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"folio: logger already initialised".into());
        }
        mount_when_ready(PageConfig::default());
    }

    /// Rebind with a JSON [`PageConfig`], replacing the running controller.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON; the running controller is left untouched.
    #[wasm_bindgen]
    pub fn remount_with_config(json: &str) -> Result<(), JsValue> {
        let config = PageConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        dispose_page();
        mount(config);
        Ok(())
    }

    /// Close the menu and remove every listener installed by the running controller.
    #[wasm_bindgen]
    pub fn dispose_page() {
        let controller = ACTIVE.with(|slot| slot.borrow_mut().take());
        if let Some(mut controller) = controller {
            controller.dispose();
        }
    }
}
