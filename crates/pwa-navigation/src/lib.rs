//! Navigation collaborators for the storefront client.
//!
//! Only the subset of routing the interactive components depend on:
//!
//! - **Query params** (`location`): read `?s=...` style parameters
//! - **History** (`history`): open a link by pushing it onto the history
//! - **Tab bar** (`tab_bar`): the home action of the bottom tab bar

mod history;
mod location;
mod tab_bar;

pub use history::{History, ParsedLink};
pub use location::{Location, QueryParams};
pub use tab_bar::TabBarHomeAction;

/// Path of the start page.
pub const INDEX_PATH: &str = "/";

/// Query parameter holding the current search phrase.
pub const SEARCH_QUERY_PARAM: &str = "s";
