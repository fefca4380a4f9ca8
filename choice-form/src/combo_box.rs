//! Filterable-choice selection: a combo box.
//!
//! Text typed into the box narrows the option list by label. Choosing an
//! option reports its `value` and closes the list; leaving without choosing
//! puts the text back to the committed option's label.

use choice_form_types::{OptionList, SelectOption, SelectionEvent};
use tracing::debug;

use crate::SelectionAdapter;

/// Where the combo box is in its open/filter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComboState {
    /// List hidden; the text shows the committed label.
    #[default]
    Closed,
    /// List open with every option visible.
    OpenUnfiltered,
    /// List open and narrowed by the typed query.
    OpenFiltered,
}

/// A single-choice selection with a text filter.
#[derive(Debug, Clone)]
pub struct ComboBox {
    label: String,
    options: OptionList,
    value: Option<String>,
    error: Option<String>,
    query: String,
    state: ComboState,
    /// Position within `visible()` under the keyboard cursor.
    highlight: usize,
    /// Option chosen here whose value has not been written back yet.
    pending: Option<usize>,
}

impl ComboBox {
    pub fn new(label: impl Into<String>, options: impl Into<OptionList>) -> Self {
        Self {
            label: label.into(),
            options: options.into(),
            value: None,
            error: None,
            query: String::new(),
            state: ComboState::Closed,
            highlight: 0,
            pending: None,
        }
    }

    /// Start with a controlled value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(Some(value.into()));
        self
    }

    /// Get the open/filter state.
    pub fn state(&self) -> ComboState {
        self.state
    }

    /// Check if the option list is showing.
    pub fn is_open(&self) -> bool {
        self.state != ComboState::Closed
    }

    /// Get the cursor position within `visible()`.
    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// The text shown in the input box.
    ///
    /// The typed query while open, the committed option's label (or nothing)
    /// while closed.
    pub fn display_text(&self) -> &str {
        if self.is_open() {
            &self.query
        } else {
            self.committed().map_or("", SelectOption::label)
        }
    }

    /// Position of the option the closed box shows.
    ///
    /// A choice made here counts until the controlled value catches up.
    pub fn committed_index(&self) -> Option<usize> {
        self.pending.or_else(|| self.selected_index())
    }

    fn committed(&self) -> Option<&SelectOption> {
        self.committed_index().and_then(|idx| self.options.get(idx))
    }

    /// Open the list without filtering (focus or click).
    pub fn open(&mut self) {
        if self.state == ComboState::Closed {
            self.state = ComboState::OpenUnfiltered;
            self.highlight = self.committed_index().unwrap_or(0);
        }
    }

    /// Type a character into the filter.
    pub fn input(&mut self, c: char) {
        self.query.push(c);
        self.filtered();
    }

    /// Delete the last character of the filter.
    ///
    /// Emptying the text does not clear the committed value.
    pub fn backspace(&mut self) {
        self.query.pop();
        self.filtered();
    }

    /// Replace the filter text.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered();
    }

    fn filtered(&mut self) {
        self.state = ComboState::OpenFiltered;
        self.highlight = 0;
    }

    /// Positions (into `options()`) of the options currently listed.
    ///
    /// Empty while closed.
    pub fn visible(&self) -> Vec<usize> {
        match self.state {
            ComboState::Closed => Vec::new(),
            ComboState::OpenUnfiltered => (0..self.options.len()).collect(),
            ComboState::OpenFiltered => self.options.filter_by_label(&self.query),
        }
    }

    /// The options currently listed.
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        self.visible()
            .into_iter()
            .filter_map(|idx| self.options.get(idx))
            .collect()
    }

    /// Move the cursor down the visible list, wrapping.
    pub fn highlight_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.highlight = (self.highlight + 1) % len;
        }
    }

    /// Move the cursor up the visible list, wrapping.
    pub fn highlight_prev(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.highlight = (self.highlight + len - 1) % len;
        }
    }

    /// Choose the listed option at `visible_index`.
    ///
    /// Reports the option's `value`, shows its label and closes the list.
    /// Returns `None` if nothing is listed at that position.
    pub fn choose(&mut self, visible_index: usize) -> Option<SelectionEvent> {
        let idx = *self.visible().get(visible_index)?;
        let option = self.options.get(idx)?;
        let event = SelectionEvent::Change(option.value().to_string());
        self.query = option.label().to_string();
        self.state = ComboState::Closed;
        self.highlight = 0;
        self.pending = Some(idx);
        debug!(label = %self.label, value = event.value(), "combo option chosen");
        Some(event)
    }

    /// Choose the option under the keyboard cursor.
    pub fn choose_highlighted(&mut self) -> Option<SelectionEvent> {
        self.choose(self.highlight)
    }

    /// Close without choosing; the text goes back to the committed label.
    pub fn escape(&mut self) {
        self.state = ComboState::Closed;
        self.highlight = 0;
        self.revert_query();
    }

    fn revert_query(&mut self) {
        self.query = self
            .committed()
            .map(|o| o.label().to_string())
            .unwrap_or_default();
    }
}

impl SelectionAdapter for ComboBox {
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
        self.pending = None;
        if !self.is_open() {
            self.revert_query();
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn blur(&mut self) -> SelectionEvent {
        self.escape();
        SelectionEvent::Blur
    }
}
