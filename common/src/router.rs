//! Route table and dispatcher

use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{ConfigError, NavigationError};
use crate::location::Location;
use crate::params::Params;
use crate::pattern::{split_path, Pattern};

/// Route as written in the application config
#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    pub pattern: &'static str,
    pub name: &'static str,
    pub view: V,
}

/// Named binding of a pattern to a view identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V> {
    name: String,
    pattern: Pattern,
    view: V,
}

impl<V> Route<V> {
    pub fn new(name: impl Into<String>, pattern: Pattern, view: V) -> Self {
        Self {
            name: name.into(),
            pattern,
            view,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Result of dispatching a path
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'t, V> {
    pub route: &'t Route<V>,
    pub params: Params,
}

impl<'t, V> Match<'t, V> {
    pub fn name(&self) -> &'t str {
        &self.route.name
    }

    pub fn view(&self) -> &'t V {
        &self.route.view
    }
}

/// Navigation request
#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget {
    /// Raw path, may contain query and fragment
    Path(String),
    /// Route name with parameters
    Named {
        name: String,
        params: Params,
    },
}

impl NavTarget {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Add parameter to named target. No-op for paths.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(key, value);
        }
        self
    }
}

/// Walk routes in order, return first one that matches the whole path
pub fn first_match<'t, V>(routes: &'t [Route<V>], path: &str) -> Option<Match<'t, V>> {
    let segments = split_path(path);
    routes.iter().find_map(|route| {
        route.pattern
            .match_segments(&segments)
            .map(|params| Match { route, params })
    })
}

/// Validated, immutable route table.
///
/// Last route is always a catch-all, so [`RouteTable::dispatch`] is total.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Parse and validate descriptors
    pub fn new(descriptors: impl IntoIterator<Item = RouteDescriptor<V>>) -> Result<Self, ConfigError> {
        let routes = descriptors
            .into_iter()
            .map(|RouteDescriptor { pattern, name, view }| {
                Pattern::parse(pattern)
                    .map(|parsed| Route::new(name, parsed, view))
                    .map_err(|source| ConfigError::InvalidPattern {
                        name: name.to_string(),
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_routes(routes)
    }

    /// Validate already parsed routes
    pub fn from_routes(routes: Vec<Route<V>>) -> Result<Self, ConfigError> {
        let (last, rest) = routes.split_last().ok_or(ConfigError::Empty)?;

        if let Some(name) = routes.iter().map(Route::name).duplicates().next() {
            return Err(ConfigError::DuplicateName(name.to_string()));
        }
        if !last.pattern.is_catch_all() {
            return Err(ConfigError::MissingCatchAll(last.name.clone()));
        }
        if let Some(early) = rest.iter().find(|r| r.pattern.is_catch_all()) {
            return Err(ConfigError::CatchAllNotLast(early.name.clone()));
        }

        info!(
            count = routes.len(),
            fallback = last.name.as_str(),
            "route table built"
        );
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Route by name
    pub fn get(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Resolve location to exactly one route.
    /// Query and fragment are ignored.
    pub fn dispatch(&self, location: &str) -> Match<'_, V> {
        let location = Location::parse(location);
        let matched = first_match(&self.routes, &location.path)
            .unwrap_or_else(|| self.fallback(&location.path));

        debug!(path = location.path.as_str(), route = matched.name(), "dispatched");
        matched
    }

    /// Catch-all match, only reachable if patterns disagree with validation
    fn fallback(&self, path: &str) -> Match<'_, V> {
        let route = &self.routes[self.routes.len() - 1];
        let mut params = Params::new();
        if let Some(name) = route.pattern.param_names().next() {
            let rest = split_path(path).join("/");
            params.insert(name, rest);
        }
        Match { route, params }
    }

    /// Build path of named route
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let route = self
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        route.pattern
            .reverse(params)
            .map_err(|param| NavigationError::MissingParam {
                route: name.to_string(),
                param,
            })
    }

    /// Turn navigation target into app path
    pub fn resolve(&self, target: &NavTarget) -> Result<String, NavigationError> {
        match target {
            NavTarget::Path(path) => Ok(path.clone()),
            NavTarget::Named { name, params } => self.url_for(name, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&'static str, &'static str)]) -> Result<RouteTable<usize>, ConfigError> {
        RouteTable::new(
            entries
                .iter()
                .enumerate()
                .map(|(view, &(name, pattern))| RouteDescriptor { pattern, name, view })
        )
    }

    #[test]
    fn test_validation() {
        assert_eq!(table(&[]), Err(ConfigError::Empty));
        assert_eq!(
            table(&[("a", "/a"), ("a", "/b"), ("all", "/*")]),
            Err(ConfigError::DuplicateName("a".into()))
        );
        assert_eq!(
            table(&[("a", "/a"), ("b", "/b")]),
            Err(ConfigError::MissingCatchAll("b".into()))
        );
        assert_eq!(
            table(&[("a", "/a"), ("files", "/files/*")]),
            Err(ConfigError::MissingCatchAll("files".into()))
        );
        assert_eq!(
            table(&[("all", "/*"), ("a", "/a"), ("rest", "/:rest(.*)")]),
            Err(ConfigError::CatchAllNotLast("all".into()))
        );
        assert!(matches!(
            table(&[("bad", "/*/a"), ("all", "/*")]),
            Err(ConfigError::InvalidPattern { name, .. }) if name == "bad"
        ));
        assert!(table(&[("a", "/a"), ("all", "/*")]).is_ok());
    }

    #[test]
    fn test_first_match_order() {
        let routes = vec![
            Route::new("home", Pattern::parse("/").unwrap(), 0),
            Route::new("all", Pattern::parse("/*").unwrap(), 1),
            Route::new("about", Pattern::parse("/about").unwrap(), 2),
        ];
        let matched = first_match(&routes, "/about").unwrap();
        assert_eq!(matched.name(), "all");
        assert_eq!(matched.params.get("pathMatch"), Some("about"));

        let matched = first_match(&routes[2..], "/about").unwrap();
        assert_eq!(matched.name(), "about");
        assert!(first_match(&routes[2..], "/").is_none());
    }

    #[test]
    fn test_dispatch_ignores_query() {
        let table = table(&[("coin", "/coin/:id"), ("all", "/*")]).unwrap();
        let matched = table.dispatch("/coin/eth?range=30d#chart");
        assert_eq!(matched.name(), "coin");
        assert_eq!(matched.params.get("id"), Some("eth"));
        assert_eq!(*matched.view(), 0);
    }

    #[test]
    fn test_url_for() {
        let table = table(&[("coin", "/coin/:id"), ("all", "/*")]).unwrap();
        let params = Params::from_iter([("id", "btc")]);
        assert_eq!(table.url_for("coin", &params), Ok("/coin/btc".to_string()));
        assert_eq!(
            table.url_for("coin", &Params::new()),
            Err(NavigationError::MissingParam { route: "coin".into(), param: "id".into() })
        );
        assert_eq!(
            table.url_for("nope", &params),
            Err(NavigationError::UnknownRoute("nope".into()))
        );
    }

    #[test]
    fn test_resolve_targets() {
        let table = table(&[("coin", "/coin/:id"), ("all", "/*")]).unwrap();
        let named = NavTarget::named("coin").param("id", "doge");
        assert_eq!(table.resolve(&named), Ok("/coin/doge".to_string()));

        let path = NavTarget::path("/anything?x=1").param("ignored", "1");
        assert_eq!(table.resolve(&path), Ok("/anything?x=1".to_string()));
    }
}
