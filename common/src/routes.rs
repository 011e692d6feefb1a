//! Application views and the route table binding them to paths

use enum_iterator::Sequence;
use serde::{Serialize, Deserialize};

use crate::error::ConfigError;
use crate::router::{RouteDescriptor, RouteTable};

/// Route names
pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const COIN_DETAIL: &str = "coin-detail";
pub const ERROR: &str = "error";

/// Parameter of [`View::CoinDetail`]
pub const COIN_ID: &str = "id";

/// Parameter bound by the catch-all route
pub const CATCH_ALL: &str = "catchAll";

/// Logical page identifiers.
/// Pages themselves are created by the frontend.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    About,
    CoinDetail,
    Error,
}

impl View {
    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::CoinDetail => "Coin",
            View::Error => "Not Found",
        }
    }

    /// Whether page can be reached without parameters and belongs in navigation
    pub fn in_menu(&self) -> bool {
        matches!(self, View::Home | View::About)
    }
}

/// Route config, order matters: first match wins and catch-all goes last
pub fn descriptors() -> [RouteDescriptor<View>; 4] {
    [
        RouteDescriptor { pattern: "/", name: HOME, view: View::Home },
        RouteDescriptor { pattern: "/about", name: ABOUT, view: View::About },
        RouteDescriptor { pattern: "/coin/:id", name: COIN_DETAIL, view: View::CoinDetail },
        RouteDescriptor { pattern: "/:catchAll(.*)", name: ERROR, view: View::Error },
    ]
}

/// Build application route table
pub fn app_routes() -> Result<RouteTable<View>, ConfigError> {
    RouteTable::new(descriptors())
}

/// Route name of a view in the application table
pub fn route_name(view: View) -> &'static str {
    match view {
        View::Home => HOME,
        View::About => ABOUT,
        View::CoinDetail => COIN_DETAIL,
        View::Error => ERROR,
    }
}
