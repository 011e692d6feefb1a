use coinview_common::routes::route_name;

use super::link::AppLink;
use super::prelude::*;

/// Top bar with links to pages that take no parameters
#[function_component]
pub fn NavBar() -> Html {
    let active = use_route().map(|route| route.view);

    let links = enum_iterator::all::<View>()
        .filter(View::in_menu)
        .map(|view| {
            let class = classes!(
                "nav-link",
                (active == Some(view)).then_some("active")
            );
            html! {
                <AppLink {class} to={NavTarget::named(route_name(view))}>
                    { view.title() }
                </AppLink>
            }
        });

    html! {
        <nav class="nav-bar">
            <span class="brand">{ "coinview" }</span>
            { for links }
        </nav>
    }
}
