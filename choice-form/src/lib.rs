//! # choice-form
//!
//! Selection widgets that hand their consumer the chosen option's scalar
//! `value` instead of the option record, wired to a small form-state
//! container.
//!
//! ## Usage
//!
//! ```rust
//! use choice_form::{ChoicePage, PrefillParams, PrefillSync};
//!
//! let mut page = ChoicePage::new();
//! let mut prefill = PrefillSync::new();
//! prefill.sync(&mut page, &PrefillParams::from_query("?storage=business&user=arlene"));
//!
//! page.select_storage(0).unwrap();
//! assert!(page.submit().is_valid());
//! assert_eq!(
//!     serde_json::to_string(page.submission()).unwrap(),
//!     r#"{"storage":"startup","user":"arlene"}"#
//! );
//! ```
//!
//! ## Pieces
//!
//! - `RadioGroup` - exclusive choice
//! - `ComboBox` - exclusive choice with a label filter
//! - `Controller` - binds a form field to either widget
//! - `Form` - values, touched flags, errors, submit bookkeeping
//! - `ChoicePage` - the storage/user page built from the above
//! - `PrefillParams` / `PrefillSync` - URL query prefill
//!
//! Front ends live in separate crates, e.g. `choice-form-ratatui`.

// Re-export all types from choice-form-types
pub use choice_form_types::*;

mod adapter;
pub use adapter::SelectionAdapter;

mod radio_group;
pub use radio_group::RadioGroup;

mod combo_box;
pub use combo_box::{ComboBox, ComboState};

mod form;
pub use form::{FieldError, FieldState, Form, FormMeta, SubmitOutcome};

mod controller;
pub use controller::Controller;

pub mod page;
pub use page::ChoicePage;

mod prefill;
pub use prefill::{NavLink, PrefillError, PrefillParams, PrefillSync};

pub mod panels;
pub use panels::Panel;
