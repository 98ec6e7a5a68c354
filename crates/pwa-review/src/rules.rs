//! Validation rules.
//!
//! Full validation folds an ordered list of `(field, rule)` pairs into one
//! error map. A failing rule writes its field's entry, replacing an entry an
//! earlier rule wrote for the same field; a passing rule writes nothing.

use crate::draft::ReviewDraft;
use crate::field::{Field, TextField};
use crate::message::{ValidationErrors, ValidationMessage};

/// A single validation rule applied to one field of a draft.
type Rule = fn(Field, &ReviewDraft, usize) -> Option<ValidationMessage>;

/// Rules in evaluation order.
///
/// Author is checked twice: for presence and length by the author rule,
/// then for length alone by the generic length rule.
const RULES: &[(Field, Rule)] = &[
    (Field::Rate, rate_rule),
    (Field::Author, author_rule),
    (Field::Author, length_rule),
    (Field::Title, length_rule),
    (Field::Review, length_rule),
];

/// Rating must be set and non-zero.
pub fn validate_rate(rate: Option<u32>) -> Option<ValidationMessage> {
    match rate {
        Some(rate) if rate > 0 => None,
        _ => Some(ValidationMessage::RateRequired),
    }
}

/// Author must be non-empty and at most `max_length` characters.
pub fn validate_author(author: &str, max_length: usize) -> Option<ValidationMessage> {
    if author.is_empty() {
        Some(ValidationMessage::AuthorRequired)
    } else {
        validate_length(author, max_length)
    }
}

/// Non-empty text must be at most `max_length` characters.
pub fn validate_length(value: &str, max_length: usize) -> Option<ValidationMessage> {
    if !value.is_empty() && value.chars().count() > max_length {
        Some(ValidationMessage::TooLong { max: max_length })
    } else {
        None
    }
}

fn rate_rule(_: Field, draft: &ReviewDraft, _: usize) -> Option<ValidationMessage> {
    validate_rate(draft.rate)
}

fn author_rule(_: Field, draft: &ReviewDraft, max_length: usize) -> Option<ValidationMessage> {
    validate_author(&draft.author, max_length)
}

fn length_rule(field: Field, draft: &ReviewDraft, max_length: usize) -> Option<ValidationMessage> {
    let value = match field {
        Field::Author => &draft.author,
        Field::Title => &draft.title,
        Field::Review => &draft.review,
        Field::Rate => return None,
    };
    validate_length(value, max_length)
}

/// Run every rule over the draft and collect the failures.
pub fn validate_all(draft: &ReviewDraft, max_length: usize) -> ValidationErrors {
    RULES
        .iter()
        .fold(ValidationErrors::new(), |mut errors, (field, rule)| {
            if let Some(message) = rule(*field, draft, max_length) {
                errors.insert(*field, message);
            }
            errors
        })
}

/// Run the rule scoped to a single edited text field.
pub(crate) fn validate_text_field(
    field: TextField,
    value: &str,
    max_length: usize,
) -> Option<ValidationMessage> {
    match field {
        TextField::Author => validate_author(value, max_length),
        TextField::Title | TextField::Review => validate_length(value, max_length),
    }
}
