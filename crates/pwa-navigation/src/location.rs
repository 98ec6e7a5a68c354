//! Current location and query parameter access.

use std::collections::HashMap;

/// Read access to the query parameters of the current route.
pub trait QueryParams {
    /// Value of the query parameter `name`, if present.
    fn query_param(&self, name: &str) -> Option<String>;
}

/// A parsed route location (`/path?key=value`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    query: HashMap<String, String>,
}

impl Location {
    /// Parse a location from a path with an optional query string.
    ///
    /// The query string is form-decoded (`+` and `%20` both become a space).
    /// When a key repeats, the first value wins. A fragment is ignored.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, query) = href.split_once('?').unwrap_or((href, ""));

        let mut params = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        let pathname = if path.is_empty() { "/" } else { path };
        Self {
            pathname: pathname.to_string(),
            query: params,
        }
    }

    /// Path component of the location.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }
}

impl QueryParams for Location {
    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }
}
