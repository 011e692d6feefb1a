use coinview_common::routes::HOME;

use super::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Path that matched nothing
    pub path: AttrValue,
}

#[function_component]
pub fn NotFound(props: &Props) -> Html {
    let nav = use_navigator().expect("navigator context");
    let onback = Callback::from(move |_: MouseEvent| nav.back());

    html! {
        <div class="error-page">
            <div class="label">{ "Not Found" }</div>
            <div class="path">{ props.path.clone() }</div>
            <div class="button" onclick={onback}>{ "Go back" }</div>
            <AppLink class="home-link" to={NavTarget::named(HOME)}>
                { "Back to markets" }
            </AppLink>
        </div>
    }
}
