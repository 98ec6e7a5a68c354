//! Tab bar actions.

use crate::INDEX_PATH;
use crate::history::{History, ParsedLink};

/// The "home" entry of the tab bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabBarHomeAction;

impl TabBarHomeAction {
    /// Handle a click on the home tab.
    ///
    /// Navigates to the start page unless it is already the current page.
    /// Returns whether a navigation happened.
    pub fn handle_click(&self, current_path: &str, history: &dyn History) -> bool {
        if current_path == INDEX_PATH {
            return false;
        }

        ParsedLink::new(INDEX_PATH).open(history);
        true
    }
}
