use crate::component::chart::{LineChart, Series};

use super::prelude::*;

/// Selectable chart ranges, first is default
const RANGES: [&str; 4] = ["7d", "30d", "90d", "1y"];

/// Coin page props
#[derive(PartialEq, Properties)]
pub struct Props {
    pub id: AttrValue,
}

/// Chart range from `?range=`, unknown values fall back to default
fn selected_range(location: Option<&Location>) -> &'static str {
    location
        .and_then(|loc| loc.query_value("range"))
        .and_then(|range| RANGES.iter().copied().find(|r| *r == range))
        .unwrap_or(RANGES[0])
}

/// Page of a single coin. Price history is provided by a data source
/// outside of the shell, until then the chart is empty.
#[function_component]
pub fn CoinDetail(props: &Props) -> Html {
    let route = use_route();
    let range = selected_range(route.as_ref().map(|r| &r.location));

    // Current path, only the query changes
    let path = route
        .as_ref()
        .map(|r| r.location.path.clone())
        .unwrap_or_default();

    let ranges = RANGES.into_iter().map(|r| {
        let class = classes!("button", (r == range).then_some("active"));
        html! {
            <AppLink {class} replace=true to={NavTarget::path(format!("{path}?range={r}"))}>
                { r }
            </AppLink>
        }
    });

    let series = vec![Series {
        label: props.id.clone(),
        values: vec![],
    }];

    html! {
        <div class="coin-page">
            <h1 class="coin-id">{ props.id.clone() }</h1>
            <div class="ranges">
                { for ranges }
            </div>
            <LineChart {series} />
        </div>
    }
}
