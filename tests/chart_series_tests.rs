use approx::assert_relative_eq;
use oee_core::api::{BAR_CATEGORIES, BarChartData, BarColor, Y_AXIS_RANGE};
use oee_core::core::{LineInputs, compute_breakdown};

#[test]
fn empty_chart_keeps_axis_range_with_no_series() {
    let chart = BarChartData::empty();
    assert!(chart.is_empty());
    assert_eq!(chart.y_axis_range, [0.0, 100.0]);
}

#[test]
fn populated_chart_uses_fixed_categories_and_colors() {
    let breakdown = compute_breakdown(LineInputs::new(8.0, 1.0, 90.0, 100.0, 85.0))
        .expect("finite breakdown");
    let chart = BarChartData::from_breakdown(&breakdown);

    assert_eq!(chart.series.len(), 1);
    let series = &chart.series[0];
    assert_eq!(series.categories, BAR_CATEGORIES.map(str::to_owned));
    assert_eq!(
        series.colors,
        [BarColor::Blue, BarColor::Green, BarColor::Orange, BarColor::Red]
    );
}

#[test]
fn bar_values_follow_breakdown_order() {
    let breakdown = compute_breakdown(LineInputs::new(8.0, 1.0, 90.0, 100.0, 85.0))
        .expect("finite breakdown");
    let chart = BarChartData::from_breakdown(&breakdown);
    let values = chart.series[0].values;

    assert_relative_eq!(values[0], 87.5);
    assert_relative_eq!(values[1], 90.0);
    assert_relative_eq!(values[2], breakdown.quality);
    assert_relative_eq!(values[3], breakdown.oee);
}

#[test]
fn bar_labels_show_two_decimal_percentages() {
    let breakdown = compute_breakdown(LineInputs::new(8.0, 1.0, 90.0, 100.0, 85.0))
        .expect("finite breakdown");
    let chart = BarChartData::from_breakdown(&breakdown);
    let labels = &chart.series[0].labels;

    assert_eq!(labels[0], "Availability: 87.50%");
    assert_eq!(labels[1], "Performance: 90.00%");
    assert_eq!(labels[2], "Quality: 94.44%");
    assert_eq!(labels[3], "OEE: 74.38%");
}

#[test]
fn axis_range_stays_fixed_when_values_exceed_100() {
    let breakdown = compute_breakdown(LineInputs::new(10.0, 0.0, 150.0, 100.0, 150.0))
        .expect("finite breakdown");
    let chart = BarChartData::from_breakdown(&breakdown);

    assert!(chart.series[0].values[1] > 100.0);
    assert_eq!(chart.y_axis_range, Y_AXIS_RANGE);
}

#[test]
fn bar_colors_expose_css_names() {
    assert_eq!(BarColor::Blue.as_css(), "blue");
    assert_eq!(BarColor::Green.as_css(), "green");
    assert_eq!(BarColor::Orange.as_css(), "orange");
    assert_eq!(BarColor::Red.as_css(), "red");
}
