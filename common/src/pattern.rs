//! Route path patterns

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatternError;
use crate::params::Params;

/// Parameter segment regex: `:name` or `:name(.*)`
static PARAM_REX: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^:([A-Za-z_][A-Za-z0-9_]*)(\(\.\*\))?$").unwrap()
);

/// Parameter name bound by a bare `*` segment
pub const DEFAULT_WILDCARD: &str = "pathMatch";

/// Single segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches identical input segment
    Literal(String),
    /// Matches any non-empty segment and binds it
    Capture(String),
    /// Matches all remaining segments, including none
    Wildcard(String),
}

/// Parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parse pattern string.
    ///
    /// Syntax:
    /// - `/about` - literal segment
    /// - `/coin/:id` - named capture
    /// - `/:rest(.*)` or `/*` - wildcard capture, must be last
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let mut segments: Vec<Segment> = Vec::new();

        for part in source.split('/').filter(|s| !s.is_empty()) {
            if let Some(Segment::Wildcard(_)) = segments.last() {
                return Err(PatternError::WildcardNotLast);
            }

            let segment = if part == "*" {
                Segment::Wildcard(DEFAULT_WILDCARD.to_string())
            } else if part.starts_with(':') {
                let caps = PARAM_REX
                    .captures(part)
                    .ok_or_else(|| PatternError::InvalidSegment(part.to_string()))?;
                let name = caps[1].to_string();
                match caps.get(2) {
                    Some(_) => Segment::Wildcard(name),
                    None => Segment::Capture(name),
                }
            } else if part.contains('*') || part.contains('(') {
                return Err(PatternError::InvalidSegment(part.to_string()));
            } else {
                Segment::Literal(part.to_string())
            };

            if let Some(name) = segment.param_name() {
                if segments.iter().any(|s| s.param_name() == Some(name)) {
                    return Err(PatternError::DuplicateParam(name.to_string()));
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Pattern string this was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Pattern is a single wildcard, so it matches every path
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Names of all parameters in pattern order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Match already split and decoded path segments.
    ///
    /// Whole input must be consumed, except by a trailing wildcard.
    pub fn match_segments<S: AsRef<str>>(&self, input: &[S]) -> Option<Params> {
        let mut params = Params::new();
        let mut rest = input;

        for segment in &self.segments {
            match segment {
                Segment::Wildcard(name) => {
                    let tail = rest
                        .iter()
                        .map(|s| s.as_ref())
                        .collect::<Vec<&str>>()
                        .join("/");
                    params.insert(name.clone(), tail);
                    return Some(params);
                },
                Segment::Literal(lit) => {
                    let (head, tail) = rest.split_first()?;
                    if head.as_ref() != lit.as_str() {
                        return None;
                    }
                    rest = tail;
                },
                Segment::Capture(name) => {
                    let (head, tail) = rest.split_first()?;
                    // Empty segment never binds
                    if head.as_ref().is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), head.as_ref().to_string());
                    rest = tail;
                },
            }
        }

        rest.is_empty().then_some(params)
    }

    /// Match path string. See [`split_path`] for normalization rules.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        self.match_segments(&split_path(path))
    }

    /// Build path from parameters.
    ///
    /// Returns `Err(name)` with the first parameter that is missing or empty.
    pub fn reverse(&self, params: &Params) -> Result<String, String> {
        let mut path = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    path.push('/');
                    path.push_str(lit);
                },
                Segment::Capture(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| name.clone())?;
                    path.push('/');
                    path.push_str(&urlencoding::encode(value));
                },
                Segment::Wildcard(name) => {
                    // Wildcard may bind nothing
                    let value = params.get(name).unwrap_or_default();
                    for part in value.split('/').filter(|p| !p.is_empty()) {
                        path.push('/');
                        path.push_str(&urlencoding::encode(part));
                    }
                },
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }
}

impl Segment {
    /// Bound parameter name, `None` for literals
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Capture(name) | Segment::Wildcard(name) => Some(name),
        }
    }
}

/// Split path into percent-decoded segments.
///
/// Leading slash and one trailing slash are ignored, so `/` and `` have no
/// segments and `/coin/` is the single segment `coin`.
pub fn split_path(path: &str) -> Vec<Cow<'_, str>> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        return vec![];
    }

    path.split('/')
        .map(|raw| urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let pattern = Pattern::parse("/coin/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            [
                Segment::Literal("coin".into()),
                Segment::Capture("id".into()),
            ]
        );
        assert!(!pattern.is_catch_all());

        let root = Pattern::parse("/").unwrap();
        assert!(root.segments().is_empty());
    }

    #[test]
    fn test_parse_wildcards() {
        let named = Pattern::parse("/:catchAll(.*)").unwrap();
        assert_eq!(named.segments(), [Segment::Wildcard("catchAll".into())]);
        assert!(named.is_catch_all());

        let bare = Pattern::parse("/*").unwrap();
        assert_eq!(bare.segments(), [Segment::Wildcard(DEFAULT_WILDCARD.into())]);

        let nested = Pattern::parse("/files/:rest(.*)").unwrap();
        assert!(!nested.is_catch_all());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Pattern::parse("/*/about"),
            Err(PatternError::WildcardNotLast)
        );
        assert_eq!(
            Pattern::parse("/a/:id/b/:id"),
            Err(PatternError::DuplicateParam("id".into()))
        );
        assert_eq!(
            Pattern::parse("/:1abc"),
            Err(PatternError::InvalidSegment(":1abc".into()))
        );
        assert_eq!(
            Pattern::parse("/coin*"),
            Err(PatternError::InvalidSegment("coin*".into()))
        );
    }

    #[test]
    fn test_split_path() {
        assert!(split_path("/").is_empty());
        assert!(split_path("").is_empty());
        assert_eq!(split_path("/coin/"), ["coin"]);
        assert_eq!(split_path("/coin//"), ["coin", ""]);
        assert_eq!(split_path("/a%20b/c"), ["a b", "c"]);
    }

    #[test]
    fn test_literal_match() {
        let pattern = Pattern::parse("/about").unwrap();
        assert!(pattern.match_path("/about").is_some());
        assert!(pattern.match_path("/about/").is_some());
        assert!(pattern.match_path("/about/more").is_none());
        assert!(pattern.match_path("/About").is_none());
        assert!(pattern.match_path("/").is_none());
    }

    #[test]
    fn test_capture_match() {
        let pattern = Pattern::parse("/coin/:id").unwrap();
        let params = pattern.match_path("/coin/bitcoin").unwrap();
        assert_eq!(params.get("id"), Some("bitcoin"));

        assert!(pattern.match_path("/coin/").is_none());
        assert!(pattern.match_path("/coin//").is_none());
        assert!(pattern.match_path("/coin/a/b").is_none());
    }

    #[test]
    fn test_wildcard_match() {
        let pattern = Pattern::parse("/files/:rest(.*)").unwrap();
        let params = pattern.match_path("/files/a/b/c").unwrap();
        assert_eq!(params.get("rest"), Some("a/b/c"));

        let params = pattern.match_path("/files").unwrap();
        assert_eq!(params.get("rest"), Some(""));
    }

    #[test]
    fn test_reverse() {
        let pattern = Pattern::parse("/coin/:id").unwrap();
        let params = Params::from_iter([("id", "usd coin")]);
        assert_eq!(pattern.reverse(&params), Ok("/coin/usd%20coin".to_string()));
        assert_eq!(pattern.reverse(&Params::new()), Err("id".to_string()));

        let root = Pattern::parse("/").unwrap();
        assert_eq!(root.reverse(&Params::new()), Ok("/".to_string()));

        let wild = Pattern::parse("/:catchAll(.*)").unwrap();
        let params = Params::from_iter([("catchAll", "a b/c")]);
        assert_eq!(wild.reverse(&params), Ok("/a%20b/c".to_string()));
    }
}
