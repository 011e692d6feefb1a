//! Line chart drawn as SVG, styled by [`ChartOptions`]

use crate::plugin::{chart::ChartOptions, use_extension};

use super::prelude::*;

/// Named sequence of values, drawn left to right
#[derive(Clone, PartialEq, Debug)]
pub struct Series {
    pub label: AttrValue,
    pub values: Vec<f64>,
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub series: Vec<Series>,
}

/// `points` attribute of an SVG polyline fitting values into the box.
/// Flat series are drawn in the middle.
pub fn polyline_points(values: &[f64], width: u32, height: u32) -> String {
    let (width, height) = (f64::from(width), f64::from(height));
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = match values.len() {
        0 | 1 => 0.,
        n => width / (n - 1) as f64,
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if span > 0. {
                height - (v - min) / span * height
            } else {
                height / 2.
            };
            format!("{:.1},{:.1}", i as f64 * step, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[function_component]
pub fn LineChart(props: &ChartProps) -> Html {
    let options = use_extension::<ChartOptions>().unwrap_or_default();

    if props.series.iter().all(|s| s.values.is_empty()) {
        return html! {
            <div class="chart-empty">{ options.empty_text }</div>
        };
    }

    let view_box = format!("0 0 {} {}", options.width, options.height);
    let lines = props.series
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let points = polyline_points(&s.values, options.width, options.height);
            html! {
                <polyline {points} fill="none" stroke={options.color(idx)} stroke-width="2" />
            }
        });

    let legend = props.series
        .iter()
        .enumerate()
        .map(|(idx, s)| html! {
            <div class="legend-item">
                <span class="legend-color" style={format!("background-color: {}", options.color(idx))} />
                <span class="legend-label">{ s.label.clone() }</span>
            </div>
        });

    html! {
        <div class="chart">
            <svg viewBox={view_box} preserveAspectRatio="none">
                { for lines }
            </svg>
            if options.legend {
                <div class="legend">
                    { for legend }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_points() {
        assert_eq!(polyline_points(&[1., 3., 2.], 100, 50), "0.0,50.0 50.0,0.0 100.0,25.0");
        assert_eq!(polyline_points(&[5., 5.], 10, 10), "0.0,5.0 10.0,5.0");
        assert_eq!(polyline_points(&[4.], 10, 10), "0.0,5.0");
        assert_eq!(polyline_points(&[], 10, 10), "");
    }
}
