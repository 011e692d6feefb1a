use tracing::debug;

use super::{Installer, Plugin};

/// Series colors, cycled
const PALETTE: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// Defaults for every chart in the app
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub palette: Vec<&'static str>,
    pub width: u32,
    pub height: u32,
    pub legend: bool,
    /// Shown instead of a chart without points
    pub empty_text: &'static str,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            palette: PALETTE.to_vec(),
            width: 800,
            height: 300,
            legend: true,
            empty_text: "No data",
        }
    }
}

impl ChartOptions {
    /// Color of n-th series
    pub fn color(&self, idx: usize) -> &'static str {
        match self.palette.len() {
            0 => "currentColor",
            len => self.palette[idx % len],
        }
    }
}

/// Makes [`ChartOptions`] available to chart components
#[derive(Default)]
pub struct ChartPlugin {
    options: ChartOptions,
}

impl ChartPlugin {
    pub fn with_options(options: ChartOptions) -> Self {
        Self { options }
    }
}

impl Plugin for ChartPlugin {
    fn name(&self) -> &'static str {
        "chart"
    }

    fn install(&self, app: &mut Installer) {
        debug!(
            width = self.options.width,
            height = self.options.height,
            "chart defaults installed"
        );
        app.provide(self.options.clone());
    }
}
