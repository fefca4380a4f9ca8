//! Exclusive-choice selection: a radio group.

use choice_form_types::{OptionList, SelectionEvent};
use tracing::debug;

use crate::SelectionAdapter;

/// A group of mutually exclusive options.
///
/// Choosing an option reports its `value`; the group does not change its own
/// selection. The selection only moves once the consumer writes the value back
/// through `set_value`.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    label: String,
    options: OptionList,
    value: Option<String>,
    error: Option<String>,
    /// Option under the keyboard cursor.
    highlight: usize,
}

impl RadioGroup {
    pub fn new(label: impl Into<String>, options: impl Into<OptionList>) -> Self {
        Self {
            label: label.into(),
            options: options.into(),
            value: None,
            error: None,
            highlight: 0,
        }
    }

    /// Start with a controlled value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(Some(value.into()));
        self
    }

    /// Get the option index under the keyboard cursor.
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Move the keyboard cursor down, wrapping around.
    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlight = (self.highlight + 1) % self.options.len();
        }
    }

    /// Move the keyboard cursor up, wrapping around.
    pub fn highlight_prev(&mut self) {
        if !self.options.is_empty() {
            let len = self.options.len();
            self.highlight = (self.highlight + len - 1) % len;
        }
    }

    /// Choose the option at `index`.
    ///
    /// Returns `None` when there is no such option.
    pub fn select(&mut self, index: usize) -> Option<SelectionEvent> {
        let option = self.options.get(index)?;
        self.highlight = index;
        debug!(label = %self.label, value = option.value(), "radio option chosen");
        Some(SelectionEvent::Change(option.value().to_string()))
    }

    /// Choose the option under the keyboard cursor.
    pub fn select_highlighted(&mut self) -> Option<SelectionEvent> {
        self.select(self.highlight)
    }

    /// Check whether the option at `index` is rendered as selected.
    pub fn is_checked(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }
}

impl SelectionAdapter for RadioGroup {
    fn label(&self) -> &str {
        &self.label
    }

    fn options(&self) -> &OptionList {
        &self.options
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn set_value(&mut self, value: Option<String>) {
        self.value = value;
        if let Some(idx) = self.selected_index() {
            self.highlight = idx;
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn blur(&mut self) -> SelectionEvent {
        SelectionEvent::Blur
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choice_form_types::SelectOption;

    fn storage() -> RadioGroup {
        RadioGroup::new(
            "Radio Group",
            vec![
                SelectOption::new(1, "Startup", "startup").with_desc("12GB"),
                SelectOption::new(2, "Business", "business").with_desc("16GB"),
            ],
        )
    }

    #[test]
    fn select_reports_only_the_value() {
        let mut group = storage();
        assert_eq!(group.select(1), Some(SelectionEvent::Change("business".into())));
        assert_eq!(group.select(0), Some(SelectionEvent::Change("startup".into())));
    }

    #[test]
    fn select_does_not_move_controlled_value() {
        let mut group = storage();
        group.select(1);
        assert_eq!(group.value(), None);
        assert_eq!(group.selected_index(), None);
    }

    #[test]
    fn controlled_value_selects_matching_option() {
        let mut group = storage();
        group.set_value(Some("business".into()));
        assert_eq!(group.selected_index(), Some(1));
        assert!(group.is_checked(1));
        assert!(!group.is_checked(0));
        assert_eq!(group.highlight(), 1);
    }

    #[test]
    fn unknown_or_absent_value_selects_nothing() {
        let mut group = storage();
        group.set_value(Some("enterprise".into()));
        assert_eq!(group.selected_option(), None);
        group.set_value(None);
        assert_eq!(group.selected_option(), None);
    }

    #[test]
    fn empty_group_is_inert() {
        let mut group = RadioGroup::new("Empty", OptionList::empty());
        group.highlight_next();
        group.highlight_prev();
        assert_eq!(group.select_highlighted(), None);
        assert_eq!(group.selected_index(), None);
    }

    #[test]
    fn highlight_wraps() {
        let mut group = storage();
        group.highlight_prev();
        assert_eq!(group.highlight(), 1);
        group.highlight_next();
        assert_eq!(group.highlight(), 0);
    }

    #[test]
    fn blur_reports_blur() {
        assert!(storage().blur().is_blur());
    }

    #[test]
    fn duplicate_values_check_only_the_first() {
        let mut group = RadioGroup::new(
            "Radio Group",
            vec![
                SelectOption::new(1, "First", "same"),
                SelectOption::new(2, "Second", "same"),
            ],
        );
        assert_eq!(group.select(1), Some(SelectionEvent::Change("same".into())));
        group.set_value(Some("same".into()));
        assert!(group.is_checked(0));
        assert!(!group.is_checked(1));
    }

    #[test]
    fn selecting_any_option_reports_exactly_its_value() {
        for len in 0..6u32 {
            let options: Vec<_> = (0..len)
                .map(|i| SelectOption::new(i, format!("Label {i}"), format!("v{}", i % 3)))
                .collect();
            let mut group = RadioGroup::new("Radio Group", options.clone());
            for (i, option) in options.iter().enumerate() {
                let expected = option.value().to_string();
                assert_eq!(group.select(i), Some(SelectionEvent::Change(expected)));
            }
            assert_eq!(group.select(len as usize), None);
            assert_eq!(group.value(), None);
        }
    }
}
