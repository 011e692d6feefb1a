use std::rc::Rc;

use coinview_common::{
    location::{join_base, strip_base},
    Location, NavTarget, NavigationError, Params, RouteTable, View,
};
use gloo::history::{BrowserHistory, History};
use tracing::{debug, warn};
use yew::prelude::*;

/// Route the router currently renders
#[derive(Clone, PartialEq, Debug)]
pub struct ActiveRoute {
    pub name: String,
    pub view: View,
    pub params: Params,
    /// App location, history base removed
    pub location: Location,
}

impl ActiveRoute {
    /// Dispatch app location through the table
    pub fn resolve(routes: &RouteTable<View>, location: &str) -> Self {
        let matched = routes.dispatch(location);
        Self {
            name: matched.name().to_string(),
            view: *matched.view(),
            params: matched.params,
            location: Location::parse(location),
        }
    }
}

/// Pushes navigation targets onto browser history
#[derive(Clone)]
pub struct Navigator {
    history: BrowserHistory,
    routes: Rc<RouteTable<View>>,
    base: AttrValue,
}

impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.routes, &other.routes) && self.base == other.base
    }
}

impl Navigator {
    /// Browser url of target, history base included
    pub fn href(&self, target: &NavTarget) -> Result<String, NavigationError> {
        target_href(&self.routes, &self.base, target)
    }

    /// Navigate to target. Failed targets are logged and skipped.
    pub fn push(&self, target: &NavTarget) -> Result<(), NavigationError> {
        let href = self.href(target).map_err(|e| {
            warn!(?target, %e, "navigation skipped");
            e
        })?;
        debug!(href, "navigate");
        self.history.push(href);
        Ok(())
    }

    /// Same as [`Navigator::push`], but replaces current history entry
    pub fn replace(&self, target: &NavTarget) -> Result<(), NavigationError> {
        let href = self.href(target).map_err(|e| {
            warn!(?target, %e, "navigation skipped");
            e
        })?;
        debug!(href, "navigate (replace)");
        self.history.replace(href);
        Ok(())
    }

    pub fn back(&self) {
        self.history.back();
    }
}

fn target_href(
    routes: &RouteTable<View>,
    base: &str,
    target: &NavTarget,
) -> Result<String, NavigationError> {
    routes
        .resolve(target)
        .map(|path| join_base(base, &path))
}

/// Routing state shared with descendants of [`Router`]
#[derive(Clone, PartialEq)]
pub struct RouterContext {
    pub active: ActiveRoute,
    pub navigator: Navigator,
}

#[derive(Properties, PartialEq)]
pub struct RouterProps {
    pub routes: Rc<RouteTable<View>>,
    #[prop_or(AttrValue::Static("/"))]
    pub base: AttrValue,
    pub children: Children,
}

/// App location of the browser: path without base, query and hash
fn current_location(history: &BrowserHistory, base: &str) -> String {
    let loc = history.location();
    format!(
        "{}{}{}",
        strip_base(base, loc.path()),
        loc.query_str(),
        loc.hash()
    )
}

/// Dispatches browser location and re-dispatches on every history change
#[function_component]
pub fn Router(props: &RouterProps) -> Html {
    let history = use_memo(|_| BrowserHistory::new(), ());
    let location = {
        let history = history.clone();
        let base = props.base.clone();
        use_state(move || current_location(&history, &base))
    };

    {
        let history = history.clone();
        let location = location.clone();
        let base = props.base.clone();
        use_effect_with_deps(move |_| {
            let listener = {
                let handle = history.clone();
                history.listen(move || location.set(current_location(&handle, &base)))
            };
            // Unsubscribes on drop
            move || drop(listener)
        }, props.base.clone());
    }

    let context = RouterContext {
        active: ActiveRoute::resolve(&props.routes, &location),
        navigator: Navigator {
            history: (*history).clone(),
            routes: props.routes.clone(),
            base: props.base.clone(),
        },
    };

    html! {
        <ContextProvider<RouterContext> {context}>
            { for props.children.iter() }
        </ContextProvider<RouterContext>>
    }
}

/// Route rendered by the closest [`Router`]
#[hook]
pub fn use_route() -> Option<ActiveRoute> {
    use_context::<RouterContext>().map(|ctx| ctx.active)
}

#[hook]
pub fn use_navigator() -> Option<Navigator> {
    use_context::<RouterContext>().map(|ctx| ctx.navigator)
}
