use crate::FieldName;

/// Error type for form wiring operations.
///
/// Validation failures are not errors; they live on the field as state.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The field was never declared on the form.
    #[error("Unknown field: {0}")]
    UnknownField(FieldName),
}
