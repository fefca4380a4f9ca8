//! Core types for the choice-form crate.
//!
//! This crate provides the passive data model shared by the selection
//! adapters and the form:
//! - `SelectOption` and `OptionList` - The selectable items and their display order
//! - `FieldName` and `FieldValues` - Field keys and the scalar values exchanged with the form
//! - `Rule` - Validation rules attached to a field
//! - `SelectionEvent` - The only thing an adapter ever reports to its consumer

mod field_name;
pub use field_name::FieldName;

mod field_values;
pub use field_values::FieldValues;

mod select_option;
pub use select_option::{OptionList, SelectOption};

mod rule;
pub use rule::Rule;

mod selection_event;
pub use selection_event::SelectionEvent;

mod error;
pub use error::FormError;
