use coinview_common::routes::{COIN_DETAIL, COIN_ID};

use super::prelude::*;

/// Coins linked from the landing page
const FEATURED: [(&str, &str); 4] = [
    ("bitcoin", "Bitcoin"),
    ("ethereum", "Ethereum"),
    ("solana", "Solana"),
    ("dogecoin", "Dogecoin"),
];

#[function_component]
pub fn Home() -> Html {
    let coins = FEATURED
        .into_iter()
        .map(|(id, label)| html! {
            <AppLink
                class="coin-card"
                to={NavTarget::named(COIN_DETAIL).param(COIN_ID, id)}>
                { label }
            </AppLink>
        });

    html! {
        <div class="home-page">
            <h1>{ "Markets" }</h1>
            <div class="coin-list">
                { for coins }
            </div>
        </div>
    }
}
