//! Browser location parsing and history base handling

/// Location split into parts.
/// Only `path` takes part in route matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parse `path?query#fragment`.
    /// Empty path becomes `/`, malformed query is dropped.
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag.to_string())),
            None => (raw, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        let query = serde_urlencoded::from_str(query).unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    /// First value of query key
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Remove history base from path.
///
/// Paths outside of base are returned as is.
pub fn strip_base<'p>(base: &str, path: &'p str) -> &'p str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }

    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Prefix app path with history base
pub fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    match (base.is_empty(), path.starts_with('/')) {
        (true, true) => path.to_string(),
        (true, false) => format!("/{path}"),
        (false, true) => format!("{base}{path}"),
        (false, false) => format!("{base}/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let loc = Location::parse("/coin/42?range=7d&currency=usd#chart");
        assert_eq!(loc.path, "/coin/42");
        assert_eq!(loc.query_value("range"), Some("7d"));
        assert_eq!(loc.query_value("currency"), Some("usd"));
        assert_eq!(loc.query_value("missing"), None);
        assert_eq!(loc.fragment.as_deref(), Some("chart"));

        let loc = Location::parse("");
        assert_eq!(loc.path, "/");
        assert!(loc.query.is_empty());
        assert_eq!(loc.fragment, None);

        let loc = Location::parse("/about#top?not=query");
        assert_eq!(loc.path, "/about");
        assert!(loc.query.is_empty());
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/", "/about"), "/about");
        assert_eq!(strip_base("", "/about"), "/about");
        assert_eq!(strip_base("/app", "/app/about"), "/about");
        assert_eq!(strip_base("/app/", "/app"), "/");
        assert_eq!(strip_base("/app", "/application"), "/application");
        assert_eq!(strip_base("/app", "/other"), "/other");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("/", "/about"), "/about");
        assert_eq!(join_base("/app", "/coin/1"), "/app/coin/1");
        assert_eq!(join_base("/app/", "about"), "/app/about");
        assert_eq!(strip_base("/app", &join_base("/app", "/")), "/");
    }
}
