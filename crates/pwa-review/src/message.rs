//! Validation messages and the per-field error map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationMessage {
    /// No rating was chosen.
    RateRequired,
    /// The author name is empty.
    AuthorRequired,
    /// The text is longer than `max` characters.
    TooLong { max: usize },
}

impl ValidationMessage {
    /// Translation key for this message.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RateRequired => "reviews.review_form_rate_error",
            Self::AuthorRequired => "reviews.review_form_error_author_empty",
            Self::TooLong { .. } => "reviews.review_form_error_length",
        }
    }
}

impl std::fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RateRequired => f.write_str("Please select a rating"),
            Self::AuthorRequired => f.write_str("Please enter your name"),
            Self::TooLong { max } => write!(f, "Maximum of {max} characters allowed"),
        }
    }
}

/// Validation errors keyed by field.
///
/// Only failing fields have an entry; a passing field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, ValidationMessage>,
}

impl ValidationErrors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a field, if it is failing.
    pub fn get(&self, field: Field) -> Option<ValidationMessage> {
        self.entries.get(&field).copied()
    }

    /// Whether no field is failing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record a failure, replacing any earlier entry for the same field.
    pub fn insert(&mut self, field: Field, message: ValidationMessage) {
        self.entries.insert(field, message);
    }

    /// Set or clear the entry for one field.
    pub fn set(&mut self, field: Field, outcome: Option<ValidationMessage>) {
        match outcome {
            Some(message) => {
                self.entries.insert(field, message);
            }
            None => {
                self.entries.remove(&field);
            }
        }
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationMessage)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, *message))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (field, message)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}
