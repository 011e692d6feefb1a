use tracing::warn;

use super::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: NavTarget,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Replace current history entry instead of adding one
    #[prop_or_default]
    pub replace: bool,
}

/// A link that can be clicked or opened in new tab.
/// On click it changes current page without reload.
/// With a modifier key pressed the browser handles it as usual.
#[function_component]
pub fn AppLink(props: &LinkProps) -> Html {
    let nav = use_navigator().expect("navigator context");

    let href = match nav.href(&props.to) {
        Ok(href) => href,
        Err(e) => {
            warn!(%e, "broken link");
            "#".to_string()
        }
    };

    let to = props.to.clone();
    let replace = props.replace;
    let onclick = Callback::from(move |ev: MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        // Prevent redirect on click
        ev.prevent_default();
        let res = if replace { nav.replace(&to) } else { nav.push(&to) };
        res.ok();
    });

    html! {
        <a class={props.class.clone()} {href} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
