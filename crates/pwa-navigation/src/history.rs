//! History collaborator and link opening.

/// Destination for navigation requests.
pub trait History {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}

/// A link that can be opened through a [`History`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLink {
    href: String,
}

impl ParsedLink {
    /// Create a link for `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// Open the link.
    pub fn open(&self, history: &dyn History) {
        tracing::debug!(href = %self.href, "opening link");
        history.push(&self.href);
    }
}
