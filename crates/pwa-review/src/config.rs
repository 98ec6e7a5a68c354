//! Review form configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Maximum number of characters for author, title and review text.
    pub max_length: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self { max_length: 5000 }
    }
}
