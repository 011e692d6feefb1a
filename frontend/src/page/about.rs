use super::prelude::*;

#[function_component]
pub fn About() -> Html {
    html! {
        <div class="about-page">
            <h1>{ "About" }</h1>
            <p>
                { "coinview shows price charts of crypto coins." }
            </p>
            <p class="version">
                { "Version " }{ env!("CARGO_PKG_VERSION") }
            </p>
        </div>
    }
}
