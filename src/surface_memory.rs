//! In-memory [`Surface`] recording the resulting page state.

use std::collections::{BTreeSet, HashMap};

use super::Surface;
use crate::page::Target;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySurface {
    pub classes: HashMap<Target, BTreeSet<String>>,
    pub styles: HashMap<(Target, String), String>,
    pub texts: HashMap<Target, String>,
    pub scrolls: Vec<f64>,
    pub storage: HashMap<String, String>,
    pub storage_writes: usize,
    pub notices: Vec<String>,
    pub form_resets: usize,
}

impl MemorySurface {
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes.get(&target).is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles.get(&(target, property.to_owned())).map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn set_class(&mut self, target: Target, class: &str, on: bool) {
        let set = self.classes.entry(target).or_default();
        if on {
            set.insert(class.to_owned());
        } else {
            set.remove(class);
        }
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        self.styles.insert((target, property.to_owned()), value.to_owned());
    }

    fn set_text(&mut self, target: Target, text: &str) {
        self.texts.insert(target, text.to_owned());
    }

    fn scroll_to(&mut self, top: f64) {
        self.scrolls.push(top);
    }

    fn persist(&mut self, key: &str, value: &str) {
        self.storage_writes += 1;
        self.storage.insert(key.to_owned(), value.to_owned());
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }
}
