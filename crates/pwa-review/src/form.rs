//! The review form controller.

use crate::config::ReviewConfig;
use crate::draft::{ReviewDraft, ReviewRecord};
use crate::field::{Field, TextField};
use crate::message::ValidationErrors;
use crate::rules::{validate_all, validate_text_field};

/// Receives a valid draft on submission.
///
/// Network failures after this point belong to the implementor.
pub trait ReviewSubmitter {
    /// Submit `draft`. `is_update` is true when the review existed before.
    fn submit(&self, draft: &ReviewDraft, is_update: bool);
}

impl<F> ReviewSubmitter for F
where
    F: Fn(&ReviewDraft, bool),
{
    fn submit(&self, draft: &ReviewDraft, is_update: bool) {
        self(draft, is_update);
    }
}

/// Render output of the review form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormView {
    pub rate: Option<u32>,
    pub author: String,
    pub title: String,
    pub review: String,
    pub errors: ValidationErrors,
}

impl ReviewFormView {
    /// Error text shown under a field.
    pub fn error_text(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(|message| message.to_string())
    }
}

/// Review form state: the incoming record and the editable draft.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    config: ReviewConfig,
    original: ReviewRecord,
    draft: ReviewDraft,
}

impl ReviewForm {
    /// Create a form for `existing`, falling back to `fallback_author` for
    /// the author name. No field is considered invalid yet.
    pub fn initialize(
        config: ReviewConfig,
        existing: ReviewRecord,
        fallback_author: &str,
        product_id: Option<String>,
    ) -> Self {
        let draft = ReviewDraft::from_record(&existing, fallback_author, product_id);
        Self {
            config,
            original: existing,
            draft,
        }
    }

    /// Re-create the draft after the incoming review or author name changed.
    ///
    /// Unsaved edits and validation errors are discarded; the target product
    /// is kept.
    pub fn receive_props(&mut self, existing: ReviewRecord, fallback_author: &str) {
        let product_id = self.draft.product_id.take();
        self.draft = ReviewDraft::from_record(&existing, fallback_author, product_id);
        self.original = existing;
    }

    /// Current draft.
    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// The review as it was before editing.
    pub fn original(&self) -> &ReviewRecord {
        &self.original
    }

    /// Current validation errors.
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.draft.validation_errors
    }

    /// Set a text field and re-validate only that field.
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        let outcome = validate_text_field(field, &value, self.config.max_length);

        *self.draft.text_mut(field) = value;
        self.draft
            .validation_errors
            .set(Field::from(field), outcome);
    }

    /// Set or clear the rating. It is not validated until the next full
    /// validation.
    pub fn set_rate(&mut self, rate: Option<u32>) {
        self.draft.rate = rate;
    }

    /// Run every rule and replace the error map. Returns whether the draft
    /// is valid.
    pub fn validate_all(&mut self) -> bool {
        let errors = validate_all(&self.draft, self.config.max_length);
        let valid = errors.is_empty();
        tracing::debug!(valid, failing = errors.len(), "review validated");
        self.draft.validation_errors = errors;
        valid
    }

    /// Validate and, when valid, hand the draft to `submitter`.
    ///
    /// Whether this is an update depends on the original review having a
    /// rating, not on the draft. Returns whether the submitter was called.
    pub fn submit(&mut self, submitter: &dyn ReviewSubmitter) -> bool {
        if !self.validate_all() {
            tracing::debug!("review submission blocked by validation errors");
            return false;
        }

        let is_update = self.original.has_rate();
        submitter.submit(&self.draft, is_update);
        true
    }

    /// Render output, or `None` when there is no target product.
    pub fn render(&self) -> Option<ReviewFormView> {
        self.draft.product_id.as_ref()?;

        Some(ReviewFormView {
            rate: self.draft.rate,
            author: self.draft.author.clone(),
            title: self.draft.title.clone(),
            review: self.draft.review.clone(),
            errors: self.draft.validation_errors.clone(),
        })
    }
}
