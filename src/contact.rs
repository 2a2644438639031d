//! Contact form submissions.
//!
//! Local-only: a submission is logged and acknowledged, never transmitted.
//! There is no backend wired to the form yet.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// One `FormData` entry value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// File input; not representable in the submission.
    File,
}

/// Field values captured from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactSubmission {
    fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// Collect `(name, value)` pairs; a repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fields }
    }

    /// Collect form entries, skipping file inputs.
    pub fn from_form_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, FormValue)>,
    {
        Self::from_pairs(entries.into_iter().filter_map(|(name, value)| match value {
            FormValue::Text(text) => Some((name, text)),
            FormValue::File => None,
        }))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flat JSON object of the submitted fields.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_else(|_| String::from("{}"))
    }
}
