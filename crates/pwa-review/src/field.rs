//! Form field identifiers.

use serde::{Deserialize, Serialize};

/// Every field that can carry a validation error.
///
/// The ordering is the display order of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Rate,
    Author,
    Title,
    Review,
}

impl Field {
    /// Form field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::Author => "author",
            Self::Title => "title",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields edited through a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Author,
    Title,
    Review,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Author => Field::Author,
            TextField::Title => Field::Title,
            TextField::Review => Field::Review,
        }
    }
}
