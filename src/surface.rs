//! Presentation seam between [`PageCore`](crate::page::PageCore) and the page.

use crate::page::{Action, Target};

#[cfg(test)]
#[path = "surface_memory.rs"]
pub mod memory;

/// Sink for presentation writes. The browser implementation targets the
/// DOM; tests use [`memory::MemorySurface`].
pub trait Surface {
    fn set_class(&mut self, target: Target, class: &str, on: bool);
    fn set_style(&mut self, target: Target, property: &str, value: &str);
    fn set_text(&mut self, target: Target, text: &str);
    fn scroll_to(&mut self, top: f64);
    fn persist(&mut self, key: &str, value: &str);
    fn notify(&mut self, message: &str);
    fn reset_form(&mut self);
}

/// Apply `actions` in order.
pub fn apply<S: Surface + ?Sized>(surface: &mut S, actions: &[Action]) {
    for action in actions {
        match action {
            Action::SetClass { target, class, on } => surface.set_class(*target, class, *on),
            Action::SetStyle { target, property, value } => surface.set_style(*target, property, value),
            Action::SetText { target, text } => surface.set_text(*target, text),
            Action::ScrollTo { top } => surface.scroll_to(*top),
            Action::Persist { key, value } => surface.persist(key, value),
            Action::LogSubmission(submission) => log::info!("contact form submitted: {}", submission.to_json()),
            Action::Notify(message) => surface.notify(message),
            Action::ResetForm => surface.reset_form(),
        }
    }
}
