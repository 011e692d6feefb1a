use anyhow::Context as _;
use coinview_common::routes::COIN_ID;
use tracing::info;

use crate::component::prelude::*;
use crate::component::nav::NavBar;
use crate::page::{about::About, coin::CoinDetail, home::Home, not_found::NotFound};
use crate::plugin::{Extensions, Installer, Plugin};
use crate::route::{ActiveRoute, Router};

pub fn switch(route: &ActiveRoute) -> Html {
    match route.view {
        View::Home => html! { <Home /> },
        View::About => html! { <About /> },
        View::CoinDetail => {
            let id = AttrValue::from(route.params.get(COIN_ID).unwrap_or_default().to_string());
            html! { <CoinDetail {id} /> }
        },
        View::Error => {
            let path = AttrValue::from(route.location.path.clone());
            html! { <NotFound {path} /> }
        },
    }
}

/// Page root inside the router
#[function_component]
fn Root() -> Html {
    let route = use_route().expect("router context");

    html! {
        <main>
            <NavBar />
            <div class="page-content">
                { switch(&route) }
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub routes: Rc<RouteTable<View>>,
    pub extensions: Extensions,
    pub base: AttrValue,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Extensions> context={props.extensions.clone()}>
            <Router routes={props.routes.clone()} base={props.base.clone()}>
                <Root />
            </Router>
        </ContextProvider<Extensions>>
    }
}

/// Application before mount: route table, history base and plugins
pub struct Application {
    routes: RouteTable<View>,
    base: String,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Application {
    pub fn new(routes: RouteTable<View>) -> Self {
        Self {
            routes,
            base: "/".to_string(),
            plugins: vec![],
        }
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Add plugin, plugins are installed in the order they were added
    #[must_use]
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run plugins and collect what they provide
    fn install_plugins(&self) -> Extensions {
        let mut installer = Installer::default();
        for plugin in &self.plugins {
            info!(plugin = plugin.name(), "installing plugin");
            plugin.install(&mut installer);
        }
        installer.finish()
    }

    /// Install plugins and render into element with `root_id`
    pub fn mount(self, root_id: &str) -> anyhow::Result<()> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(root_id))
            .with_context(|| format!("mount element `#{root_id}` not found"))?;

        let props = AppProps {
            extensions: self.install_plugins(),
            routes: Rc::new(self.routes),
            base: self.base.into(),
        };

        yew::Renderer::<App>::with_root_and_props(root, props).render();
        info!(root_id, "app mounted");
        Ok(())
    }
}
