//! Form state container: per-field values, touched flags and validation
//! errors, plus whole-form dirty/submitting/submit-count bookkeeping.

use std::collections::BTreeMap;

use choice_form_types::{FieldName, FieldValues, FormError, Rule};
use serde::Serialize;
use tracing::{debug, info};

/// A validation failure recorded on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The rule that failed, e.g. `"required"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Bookkeeping for one registered field.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: Option<String>,
    default: Option<String>,
    touched: bool,
    error: Option<FieldError>,
    rules: Vec<Rule>,
}

impl FieldState {
    /// Get the current value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value the field was last reset to.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Check if the field has been blurred since the last reset.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Get the recorded validation failure, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Get the rules checked on validation.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run the rules in order and keep the first failure.
    fn validate(&mut self) -> bool {
        self.error = self.rules.iter().find_map(|rule| {
            rule.check(self.value.as_deref())
                .err()
                .map(|message| FieldError {
                    kind: rule.kind().to_string(),
                    message,
                })
        });
        self.error.is_none()
    }
}

/// Result of a submit attempt. Failure is not an error: the details are on
/// the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Valid,
    Invalid,
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Snapshot of the form's meta-state, shaped for the "Form States" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMeta {
    pub errors: BTreeMap<FieldName, FieldError>,
    pub is_dirty: bool,
    pub is_submitting: bool,
    pub touched_fields: BTreeMap<FieldName, bool>,
    pub submit_count: u32,
}

/// The form-state container.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: BTreeMap<FieldName, FieldState>,
    is_dirty: bool,
    is_submitting: bool,
    submit_count: u32,
}

impl Form {
    /// Create an empty form with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field declaration. A later declaration of the same name
    /// replaces the earlier one.
    pub fn with_field(mut self, name: impl Into<FieldName>, rules: Vec<Rule>) -> Self {
        self.fields.insert(
            name.into(),
            FieldState {
                rules,
                ..FieldState::default()
            },
        );
        self
    }

    pub fn field(&self, name: &FieldName) -> Result<&FieldState, FormError> {
        self.fields
            .get(name)
            .ok_or_else(|| FormError::UnknownField(name.clone()))
    }

    fn field_mut(&mut self, name: &FieldName) -> Result<&mut FieldState, FormError> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.clone()))
    }

    /// Current value of a field; `None` for unknown fields too.
    pub fn watch(&self, name: &FieldName) -> Option<&str> {
        self.fields.get(name).and_then(FieldState::value)
    }

    /// Current values of every registered field.
    pub fn watch_all(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for (name, field) in &self.fields {
            values.set(name.clone(), field.value.clone());
        }
        values
    }

    /// Write a field's value and mark the form dirty.
    ///
    /// Once the form has been submitted, or while the field shows an error,
    /// the field is re-validated on every change.
    pub fn set_value(&mut self, name: &FieldName, value: Option<String>) -> Result<(), FormError> {
        let submitted = self.submit_count > 0;
        let field = self.field_mut(name)?;
        field.value = value;
        if submitted || field.error.is_some() {
            field.validate();
        }
        self.is_dirty = true;
        Ok(())
    }

    pub fn mark_touched(&mut self, name: &FieldName) -> Result<(), FormError> {
        self.field_mut(name)?.touched = true;
        Ok(())
    }

    pub fn error(&self, name: &FieldName) -> Option<&FieldError> {
        self.fields.get(name).and_then(FieldState::error)
    }

    /// Run every field's rules, recording errors. Returns whether all passed.
    pub fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in self.fields.values_mut() {
            valid &= field.validate();
        }
        valid
    }

    /// Validate and, when valid, hand the values to `on_valid`.
    ///
    /// The submit count goes up either way.
    pub fn handle_submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(&FieldValues),
    {
        self.is_submitting = true;
        let valid = self.validate();
        self.submit_count += 1;

        let outcome = if valid {
            on_valid(&self.watch_all());
            SubmitOutcome::Valid
        } else {
            SubmitOutcome::Invalid
        };
        self.is_submitting = false;

        info!(
            submit_count = self.submit_count,
            valid = outcome.is_valid(),
            "form submitted"
        );
        outcome
    }

    /// Replace every field's value and default with `values`.
    ///
    /// Fields missing from `values` become empty. Errors, touched flags, the
    /// dirty flag and the submit count are cleared.
    pub fn reset(&mut self, values: &FieldValues) {
        for (name, field) in self.fields.iter_mut() {
            let value = values.get(name).map(str::to_string);
            field.default = value.clone();
            field.value = value;
            field.touched = false;
            field.error = None;
        }
        self.is_dirty = false;
        self.is_submitting = false;
        self.submit_count = 0;
        debug!(?values, "form reset");
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Names of the fields that have been blurred at least once.
    pub fn touched_fields(&self) -> impl Iterator<Item = &FieldName> {
        self.fields
            .iter()
            .filter(|(_, f)| f.touched)
            .map(|(name, _)| name)
    }

    pub fn meta(&self) -> FormMeta {
        FormMeta {
            errors: self
                .fields
                .iter()
                .filter_map(|(name, f)| f.error.clone().map(|e| (name.clone(), e)))
                .collect(),
            is_dirty: self.is_dirty,
            is_submitting: self.is_submitting,
            touched_fields: self.touched_fields().map(|n| (n.clone(), true)).collect(),
            submit_count: self.submit_count,
        }
    }
}
