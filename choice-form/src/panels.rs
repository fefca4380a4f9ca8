//! The three inspection panels shown next to the form.

use serde::Serialize;

use crate::ChoicePage;

/// A heading over a pretty-printed JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub heading: &'static str,
    pub body: String,
}

impl Panel {
    pub fn new<T: Serialize>(heading: &'static str, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            heading,
            body: serde_json::to_string_pretty(value)?,
        })
    }
}

/// Live values of both fields.
pub fn watch_panel(page: &ChoicePage) -> Result<Panel, serde_json::Error> {
    Panel::new("Watch", &page.watched())
}

/// The last captured submission, `{}` when there is none.
pub fn submission_panel(page: &ChoicePage) -> Result<Panel, serde_json::Error> {
    Panel::new("Form Submission Data", page.submission())
}

/// Errors, dirty/submitting flags, touched fields and submit count.
pub fn form_state_panel(page: &ChoicePage) -> Result<Panel, serde_json::Error> {
    Panel::new("Form States", &page.meta())
}

/// All three panels in display order.
pub fn panels(page: &ChoicePage) -> Result<[Panel; 3], serde_json::Error> {
    Ok([
        watch_panel(page)?,
        submission_panel(page)?,
        form_state_panel(page)?,
    ])
}
