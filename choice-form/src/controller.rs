//! Bridge between one form field and a selection adapter.

use choice_form_types::{FieldName, FormError, Rule, SelectionEvent};
use tracing::trace;

use crate::{Form, SelectionAdapter};

/// Binds a named form field to a selection widget.
///
/// Downstream it feeds the widget the field's value and error; upstream it
/// turns the widget's events into form writes.
#[derive(Debug, Clone)]
pub struct Controller {
    name: FieldName,
    rules: Vec<Rule>,
}

impl Controller {
    pub fn new(name: impl Into<FieldName>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// A controller whose field must not be left empty.
    pub fn required(name: impl Into<FieldName>, message: impl Into<String>) -> Self {
        Self::new(name, vec![Rule::required(message)])
    }

    /// Get the bound field's name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Declare the field on a form under construction.
    pub fn declare(&self, form: Form) -> Form {
        form.with_field(self.name.clone(), self.rules.clone())
    }

    /// Push the field's current value and error into the widget.
    ///
    /// The value is only written when it differs, so a widget's keyboard
    /// cursor survives re-syncs.
    pub fn sync<A>(&self, form: &Form, adapter: &mut A)
    where
        A: SelectionAdapter + ?Sized,
    {
        let value = form.watch(&self.name);
        if adapter.value() != value {
            trace!(field = %self.name, ?value, "syncing widget value");
            adapter.set_value(value.map(str::to_string));
        }
        adapter.set_error(form.error(&self.name).map(|e| e.message.clone()));
    }

    /// Apply a widget event to the form.
    pub fn dispatch(&self, form: &mut Form, event: SelectionEvent) -> Result<(), FormError> {
        match event {
            SelectionEvent::Change(value) => form.set_value(&self.name, Some(value)),
            SelectionEvent::Blur => form.mark_touched(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadioGroup;
    use choice_form_types::SelectOption;

    fn setup() -> (Form, Controller, RadioGroup) {
        let controller = Controller::required("storage", "Please select a storage option");
        let form = controller.declare(Form::new());
        let group = RadioGroup::new(
            "Radio Group",
            vec![
                SelectOption::new(1, "Startup", "startup"),
                SelectOption::new(2, "Business", "business"),
            ],
        );
        (form, controller, group)
    }

    #[test]
    fn change_writes_value_and_marks_dirty() {
        let (mut form, controller, mut group) = setup();
        let event = group.select(1).unwrap();
        controller.dispatch(&mut form, event).unwrap();
        assert_eq!(form.watch(controller.name()), Some("business"));
        assert!(form.is_dirty());

        controller.sync(&form, &mut group);
        assert_eq!(group.selected_index(), Some(1));
    }

    #[test]
    fn blur_marks_touched() {
        let (mut form, controller, mut group) = setup();
        let event = group.blur();
        controller.dispatch(&mut form, event).unwrap();
        assert!(form.field(controller.name()).unwrap().is_touched());
        assert!(!form.is_dirty());
    }

    #[test]
    fn sync_carries_error_and_clears_it() {
        let (mut form, controller, mut group) = setup();
        form.handle_submit(|_| {});
        controller.sync(&form, &mut group);
        assert_eq!(group.error(), Some("Please select a storage option"));

        let event = group.select(0).unwrap();
        controller.dispatch(&mut form, event).unwrap();
        controller.sync(&form, &mut group);
        assert_eq!(group.error(), None);
    }

    #[test]
    fn sync_keeps_cursor_when_value_unchanged() {
        let (form, controller, mut group) = setup();
        group.highlight_next();
        controller.sync(&form, &mut group);
        assert_eq!(group.highlight(), 1);
    }

    #[test]
    fn declare_adds_field_with_rules() {
        let (form, controller, _) = setup();
        let field = form.field(controller.name()).unwrap();
        assert_eq!(field.rules(), &[Rule::required("Please select a storage option")]);
        assert_eq!(field.value(), None);
    }
}
