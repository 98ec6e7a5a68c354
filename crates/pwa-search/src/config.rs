//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the search overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period in milliseconds before a typed phrase is committed.
    ///
    /// Every keystroke restarts the period.
    pub debounce_ms: u64,

    /// Query parameter used to seed the input when the overlay opens.
    pub query_param: String,

    /// Placeholder shown in the empty input.
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 250,
            query_param: pwa_navigation::SEARCH_QUERY_PARAM.to_string(),
            placeholder: "Search".to_string(),
        }
    }
}

impl SearchConfig {
    /// Debounce period as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
