//! The contract shared by both selection widgets.

use choice_form_types::{OptionList, SelectOption, SelectionEvent};

/// A controlled single-choice widget over an `OptionList`.
///
/// The current value is always supplied from outside as a scalar. The widget
/// resolves which option to show as selected by comparing that scalar with
/// each option's `value`; the first match wins. Events leaving the widget are
/// `SelectionEvent`s and therefore never carry an option record.
pub trait SelectionAdapter {
    /// Label shown above the control.
    fn label(&self) -> &str;

    /// The options in display order.
    fn options(&self) -> &OptionList;

    /// The externally controlled value, if any.
    fn value(&self) -> Option<&str>;

    /// Inject a new controlled value (from the form, a URL, ...).
    fn set_value(&mut self, value: Option<String>);

    /// Validation message shown next to the control.
    fn error(&self) -> Option<&str>;

    fn set_error(&mut self, error: Option<String>);

    /// Focus left the control.
    fn blur(&mut self) -> SelectionEvent;

    /// Position of the option rendered as selected.
    fn selected_index(&self) -> Option<usize> {
        self.value().and_then(|v| self.options().position_of(v))
    }

    /// The option rendered as selected.
    fn selected_option(&self) -> Option<&SelectOption> {
        self.selected_index().and_then(|idx| self.options().get(idx))
    }
}
