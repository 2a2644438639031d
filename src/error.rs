//! Initialization failures for the browser controller.

/// Error returned by `PageController::initialize`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document attached.
    #[error("no document available")]
    NoDocument,
    /// A required element did not match its selector.
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },
    /// `addEventListener` rejected a registration.
    #[error("failed to register {event} listener")]
    Listener { event: String },
}
