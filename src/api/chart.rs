use serde::{Deserialize, Serialize};

use crate::core::OeeBreakdown;

/// Fixed bar category order for every populated chart.
pub const BAR_CATEGORIES: [&str; 4] = ["Availability", "Performance", "Quality", "OEE"];

/// Fixed y-axis percentage range. Bars are not clamped to it; values past
/// 100 simply overflow the visible range on the host's chart widget.
pub const Y_AXIS_RANGE: [f64; 2] = [0.0, 100.0];

/// Bar colors in fixed category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Blue,
    Green,
    Orange,
    Red,
}

impl BarColor {
    /// One color per category, in `BAR_CATEGORIES` order.
    pub const SEQUENCE: [BarColor; 4] = [
        BarColor::Blue,
        BarColor::Green,
        BarColor::Orange,
        BarColor::Red,
    ];

    /// CSS color name as the host chart widget expects it.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            BarColor::Blue => "blue",
            BarColor::Green => "green",
            BarColor::Orange => "orange",
            BarColor::Red => "red",
        }
    }
}

/// One bar group: categories, values, colors, and per-bar text labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub categories: [String; 4],
    pub values: [f64; 4],
    pub colors: [BarColor; 4],
    pub labels: [String; 4],
}

/// Chart payload handed to the host UI layer.
///
/// An empty chart is the same shape with a zero-length `series` vector; the
/// y-axis range is always present so hosts render a stable frame either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub series: Vec<BarSeries>,
    pub y_axis_range: [f64; 2],
}

impl BarChartData {
    /// The blank chart shown for unselected or idle display slots.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            series: Vec::new(),
            y_axis_range: Y_AXIS_RANGE,
        }
    }

    /// Builds the populated single-series chart for a computed breakdown.
    #[must_use]
    pub fn from_breakdown(breakdown: &OeeBreakdown) -> Self {
        let values = [
            breakdown.availability,
            breakdown.performance,
            breakdown.quality,
            breakdown.oee,
        ];
        let categories = BAR_CATEGORIES.map(str::to_owned);
        let labels = [
            format_bar_label(BAR_CATEGORIES[0], values[0]),
            format_bar_label(BAR_CATEGORIES[1], values[1]),
            format_bar_label(BAR_CATEGORIES[2], values[2]),
            format_bar_label(BAR_CATEGORIES[3], values[3]),
        ];

        Self {
            series: vec![BarSeries {
                categories,
                values,
                colors: BarColor::SEQUENCE,
                labels,
            }],
            y_axis_range: Y_AXIS_RANGE,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

fn format_bar_label(category: &str, value: f64) -> String {
    format!("{category}: {value:.2}%")
}
