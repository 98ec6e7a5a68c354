//! Incoming review records and the editable draft.

use serde::{Deserialize, Serialize};

use crate::field::TextField;
use crate::message::ValidationErrors;

/// An existing review as received from outside the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRecord {
    pub author: Option<String>,
    pub title: Option<String>,
    pub review: Option<String>,
    pub rate: Option<u32>,
}

impl ReviewRecord {
    /// Whether the record carries a rating. Zero counts as unset.
    pub fn has_rate(&self) -> bool {
        self.rate.is_some_and(|rate| rate > 0)
    }
}

/// The in-progress, possibly invalid copy of a review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub author: String,
    pub title: String,
    pub review: String,
    pub rate: Option<u32>,
    /// Target product. `None` means there is nothing to review.
    pub product_id: Option<String>,
    pub validation_errors: ValidationErrors,
}

impl ReviewDraft {
    /// Build a draft from an incoming record.
    ///
    /// An empty or missing author falls back to `fallback_author`.
    pub fn from_record(
        record: &ReviewRecord,
        fallback_author: &str,
        product_id: Option<String>,
    ) -> Self {
        let author = record
            .author
            .as_deref()
            .filter(|author| !author.is_empty())
            .unwrap_or(fallback_author);

        Self {
            author: author.to_string(),
            title: record.title.clone().unwrap_or_default(),
            review: record.review.clone().unwrap_or_default(),
            rate: record.rate,
            product_id,
            validation_errors: ValidationErrors::new(),
        }
    }

    /// Current value of a text field.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Author => &self.author,
            TextField::Title => &self.title,
            TextField::Review => &self.review,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Author => &mut self.author,
            TextField::Title => &mut self.title,
            TextField::Review => &mut self.review,
        }
    }
}
