//! The storage/user demo page: a radio group and a combo box bound to a
//! two-field form, plus the last submitted snapshot.

use choice_form_types::{FieldValues, FormError, OptionList, SelectOption, SelectionEvent};
use tracing::info;

use crate::{ComboBox, Controller, Form, FormMeta, RadioGroup, SelectionAdapter, SubmitOutcome};

pub const STORAGE_FIELD: &str = "storage";
pub const USER_FIELD: &str = "user";

pub const STORAGE_REQUIRED: &str = "Please select a storage option";
pub const USER_REQUIRED: &str = "Please select a user";

/// Plans offered by the radio group.
pub fn storage_options() -> OptionList {
    OptionList::new(vec![
        SelectOption::new(1, "Startup", "startup").with_desc("12GB"),
        SelectOption::new(2, "Business", "business").with_desc("16GB"),
    ])
}

/// Users offered by the combo box.
pub fn user_options() -> OptionList {
    OptionList::new(vec![
        SelectOption::new(1, "Wade Cooper", "wade"),
        SelectOption::new(2, "Arlene Mccoy", "arlene"),
    ])
}

/// The whole page state.
#[derive(Debug, Clone)]
pub struct ChoicePage {
    form: Form,
    storage: RadioGroup,
    user: ComboBox,
    storage_ctl: Controller,
    user_ctl: Controller,
    submission: FieldValues,
}

impl Default for ChoicePage {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoicePage {
    pub fn new() -> Self {
        let storage_ctl = Controller::required(STORAGE_FIELD, STORAGE_REQUIRED);
        let user_ctl = Controller::required(USER_FIELD, USER_REQUIRED);
        let form = user_ctl.declare(storage_ctl.declare(Form::new()));

        Self {
            form,
            storage: RadioGroup::new("Radio Group", storage_options()),
            user: ComboBox::new("Combo Box", user_options()),
            storage_ctl,
            user_ctl,
            submission: FieldValues::new(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn storage(&self) -> &RadioGroup {
        &self.storage
    }

    pub fn user(&self) -> &ComboBox {
        &self.user
    }

    /// Live values of both fields.
    pub fn watched(&self) -> FieldValues {
        self.form.watch_all()
    }

    /// The values captured by the last valid submit; empty if none since the
    /// last prefill.
    pub fn submission(&self) -> &FieldValues {
        &self.submission
    }

    pub fn meta(&self) -> FormMeta {
        self.form.meta()
    }

    /// Validate both fields and capture the values when they pass.
    ///
    /// An invalid submit leaves the previous snapshot in place.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut captured = None;
        let outcome = self
            .form
            .handle_submit(|values| captured = Some(values.clone()));
        if let Some(values) = captured {
            self.submission = values;
        }
        self.sync_widgets();
        outcome
    }

    /// Put values from outside (the URL) into the form.
    ///
    /// With both values present the form is reset to them; otherwise both
    /// fields are emptied. The submission snapshot is cleared either way.
    pub fn apply_external_values(&mut self, storage: Option<&str>, user: Option<&str>) {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }

        let values = match (present(storage), present(user)) {
            (Some(storage), Some(user)) => {
                info!(storage, user, "prefilling form");
                FieldValues::new()
                    .with(STORAGE_FIELD, storage)
                    .with(USER_FIELD, user)
            }
            _ => {
                info!("clearing form");
                FieldValues::new()
            }
        };
        self.form.reset(&values);
        self.submission = FieldValues::new();
        self.sync_widgets();
    }

    pub fn storage_highlight_next(&mut self) {
        self.storage.highlight_next();
    }

    pub fn storage_highlight_prev(&mut self) {
        self.storage.highlight_prev();
    }

    /// Choose the storage option at `index`.
    pub fn select_storage(&mut self, index: usize) -> Result<(), FormError> {
        let event = self.storage.select(index);
        self.route_storage(event)
    }

    pub fn select_storage_highlighted(&mut self) -> Result<(), FormError> {
        let event = self.storage.select_highlighted();
        self.route_storage(event)
    }

    pub fn blur_storage(&mut self) -> Result<(), FormError> {
        let event = self.storage.blur();
        self.route_storage(Some(event))
    }

    pub fn user_open(&mut self) {
        self.user.open();
    }

    pub fn user_input(&mut self, c: char) {
        self.user.input(c);
    }

    pub fn user_backspace(&mut self) {
        self.user.backspace();
    }

    pub fn user_highlight_next(&mut self) {
        self.user.highlight_next();
    }

    pub fn user_highlight_prev(&mut self) {
        self.user.highlight_prev();
    }

    /// Choose the listed user at `visible_index`.
    pub fn choose_user(&mut self, visible_index: usize) -> Result<(), FormError> {
        let event = self.user.choose(visible_index);
        self.route_user(event)
    }

    pub fn choose_user_highlighted(&mut self) -> Result<(), FormError> {
        let event = self.user.choose_highlighted();
        self.route_user(event)
    }

    pub fn user_escape(&mut self) {
        self.user.escape();
    }

    pub fn blur_user(&mut self) -> Result<(), FormError> {
        let event = self.user.blur();
        self.route_user(Some(event))
    }

    fn route_storage(&mut self, event: Option<SelectionEvent>) -> Result<(), FormError> {
        if let Some(event) = event {
            self.storage_ctl.dispatch(&mut self.form, event)?;
        }
        self.sync_widgets();
        Ok(())
    }

    fn route_user(&mut self, event: Option<SelectionEvent>) -> Result<(), FormError> {
        if let Some(event) = event {
            self.user_ctl.dispatch(&mut self.form, event)?;
        }
        self.sync_widgets();
        Ok(())
    }

    fn sync_widgets(&mut self) {
        self.storage_ctl.sync(&self.form, &mut self.storage);
        self.user_ctl.sync(&self.form, &mut self.user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choice_form_types::FieldName;

    #[test]
    fn starts_empty() {
        let page = ChoicePage::new();
        assert_eq!(page.watched().get(&FieldName::new(STORAGE_FIELD)), None);
        assert!(page.submission().is_empty());
        assert_eq!(page.storage().selected_index(), None);
        assert_eq!(page.user().display_text(), "");
    }

    #[test]
    fn prefill_with_unknown_values_selects_nothing() {
        let mut page = ChoicePage::new();
        page.apply_external_values(Some("enterprise"), Some("bob"));
        assert_eq!(page.watched().get(&FieldName::new(STORAGE_FIELD)), Some("enterprise"));
        assert_eq!(page.storage().selected_option(), None);
        assert_eq!(page.user().display_text(), "");
    }

    #[test]
    fn empty_prefill_value_counts_as_absent() {
        let mut page = ChoicePage::new();
        page.apply_external_values(Some("business"), Some(""));
        assert_eq!(page.watched().get(&FieldName::new(STORAGE_FIELD)), None);

        page.apply_external_values(Some(""), Some("arlene"));
        assert_eq!(page.watched().get(&FieldName::new(USER_FIELD)), None);

        page.apply_external_values(Some("business"), Some("arlene"));
        assert_eq!(page.watched().get(&FieldName::new(STORAGE_FIELD)), Some("business"));
        assert_eq!(page.user().display_text(), "Arlene Mccoy");
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut page = ChoicePage::new();
        page.select_storage(7).unwrap();
        assert!(!page.meta().is_dirty);
    }
}
