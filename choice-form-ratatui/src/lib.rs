//! # choice-form-ratatui
//!
//! Ratatui front end for choice-form.
//!
//! Draws the storage/user page in three columns: the form (radio group,
//! combo box, submit button and prefill link), the watched values with the
//! last submission, and the form state. Tab/Shift+Tab move between controls.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use choice_form::PrefillParams;
//! use choice_form_ratatui::RatatuiPageBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let params = PrefillParams::from_query("?storage=business&user=arlene");
//!     let submitted = RatatuiPageBackend::new().run(params)?;
//!     println!("{}", serde_json::to_string_pretty(&submitted)?);
//!     Ok(())
//! }
//! ```

mod app;
mod backend;
mod draw;

pub use app::{AppAction, Focus, PageApp};
pub use backend::{RatatuiPageBackend, RatatuiPageError, Theme};
pub use draw::draw_page;
