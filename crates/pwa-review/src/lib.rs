//! Product review form.
//!
//! This crate owns the editable review draft and its validation:
//!
//! - **Incremental validation**: editing a text field re-validates only that
//!   field and replaces only its error entry
//! - **Full validation**: every rule runs in a fixed order over the draft and
//!   the error map is replaced as a whole
//! - **Submission gating**: the submit callback is only called for a draft
//!   without validation errors
//!
//! Validation never fails; it only adds or clears error entries.
//!
//! # Example
//!
//! ```ignore
//! use pwa_review::{ReviewConfig, ReviewForm, ReviewRecord, TextField};
//!
//! let mut form = ReviewForm::initialize(
//!     ReviewConfig::default(),
//!     ReviewRecord::default(),
//!     "Jane",
//!     Some("P1".to_string()),
//! );
//! form.set_rate(Some(4));
//! form.update_field(TextField::Title, "Great fit");
//! form.submit(&submitter);
//! ```

mod config;
mod draft;
mod field;
mod form;
mod message;
mod rules;

pub use config::ReviewConfig;
pub use draft::{ReviewDraft, ReviewRecord};
pub use field::{Field, TextField};
pub use form::{ReviewForm, ReviewFormView, ReviewSubmitter};
pub use message::{ValidationErrors, ValidationMessage};
pub use rules::{validate_all, validate_author, validate_length, validate_rate};
