use approx::assert_abs_diff_eq;
use interval_chart::core::{SurfacePoint, YIntervalSeries, YIntervalSeriesCollection};
use interval_chart::entity::{StandardXyUrlGenerator, XyUrlGenerator};
use interval_chart::render::{TextHAlign, TextVAlign};
use interval_chart::renderer::{
    IntervalXyItemLabelGenerator, ItemLabelAnchor, ItemLabelPosition,
    StandardXyItemLabelGenerator, TextAnchor, XyItemLabelGenerator, XyToolTipGenerator,
};

fn dataset() -> YIntervalSeriesCollection {
    let mut series = YIntervalSeries::new("Rates").expect("series");
    series.add_values(1.0, 2.5, 1.25, 3.75).expect("item");
    series.add_values(2.0, f64::NAN, 1.0, 2.0).expect("item");
    YIntervalSeriesCollection::new()
        .with_series(series)
        .expect("collection")
}

#[test]
fn standard_generator_formats_series_and_values() {
    let dataset = dataset();

    let label = StandardXyItemLabelGenerator::default()
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(label, "2.50");

    let tool_tip = StandardXyItemLabelGenerator::tool_tips()
        .generate_tool_tip(&dataset, 0, 0)
        .expect("tool tip");
    assert_eq!(tool_tip, "Rates: (1.00, 2.50)");

    let custom = StandardXyItemLabelGenerator::new("{0}@{1}")
        .with_decimals(0)
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(custom, "Rates@1");
}

#[test]
fn inserted_text_is_not_expanded_again() {
    let mut series = YIntervalSeries::new("{2}").expect("series");
    series.add_values(1.0, 5.0, 4.0, 6.0).expect("item");
    let dataset = YIntervalSeriesCollection::new()
        .with_series(series)
        .expect("collection");

    let label = StandardXyItemLabelGenerator::new("{0}: {1}")
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(label, "{2}: 1.00");

    let literal = StandardXyItemLabelGenerator::new("{x} {9} {2")
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(literal, "{x} {9} {2");
}

#[test]
fn missing_values_render_as_null() {
    let dataset = dataset();

    let label = StandardXyItemLabelGenerator::default()
        .generate_label(&dataset, 0, 1)
        .expect("label");
    assert_eq!(label, "null");
}

#[test]
fn interval_generator_exposes_interval_ends() {
    let dataset = dataset();

    let label = IntervalXyItemLabelGenerator::default()
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(label, "1.25 - 3.75");

    let precise = IntervalXyItemLabelGenerator::new("[{3}, {4}] around {2}")
        .with_decimals(3)
        .generate_label(&dataset, 0, 0)
        .expect("label");
    assert_eq!(precise, "[1.250, 3.750] around 2.500");
}

#[test]
fn center_anchor_keeps_the_point() {
    let point = SurfacePoint::new(10.0, 20.0);
    assert_eq!(ItemLabelAnchor::Center.anchor_point(point, 2.0), point);
}

#[test]
fn inside_anchors_use_one_offset_and_outside_anchors_two() {
    let point = SurfacePoint::new(10.0, 20.0);

    let inside3 = ItemLabelAnchor::Inside3.anchor_point(point, 2.0);
    assert_abs_diff_eq!(inside3.x, 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(inside3.y, 20.0, epsilon = 1e-12);

    let outside9 = ItemLabelAnchor::Outside9.anchor_point(point, 2.0);
    assert_abs_diff_eq!(outside9.x, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(outside9.y, 20.0, epsilon = 1e-12);

    let outside1 = ItemLabelAnchor::Outside1.anchor_point(point, 2.0);
    assert_abs_diff_eq!(outside1.x, 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(outside1.y, 20.0 - 4.0 * 30f64.to_radians().cos(), epsilon = 1e-12);

    let inside8 = ItemLabelAnchor::Inside8.anchor_point(point, 2.0);
    assert_abs_diff_eq!(inside8.x, 10.0 - 2.0 * 30f64.to_radians().cos(), epsilon = 1e-12);
    assert_abs_diff_eq!(inside8.y, 21.0, epsilon = 1e-12);
}

#[test]
fn text_anchors_resolve_to_alignment() {
    assert_eq!(
        TextAnchor::BottomCenter.alignment(),
        (TextHAlign::Center, TextVAlign::Bottom)
    );
    assert_eq!(
        TextAnchor::TopLeft.alignment(),
        (TextHAlign::Left, TextVAlign::Top)
    );
    assert_eq!(
        TextAnchor::CenterRight.alignment(),
        (TextHAlign::Right, TextVAlign::Middle)
    );
}

#[test]
fn default_positions_sit_above_and_below_the_point() {
    let above = ItemLabelPosition::default();
    assert_eq!(above.item_label_anchor, ItemLabelAnchor::Outside12);
    assert_eq!(above.text_anchor, TextAnchor::BottomCenter);

    let below = ItemLabelPosition::below().with_angle(0.5);
    assert_eq!(below.item_label_anchor, ItemLabelAnchor::Outside6);
    assert_eq!(below.text_anchor, TextAnchor::TopCenter);
    assert_eq!(below.angle_rad, 0.5);
}

#[test]
fn url_generator_appends_query_parameters() {
    let dataset = dataset();

    let plain = StandardXyUrlGenerator::default()
        .generate_url(&dataset, 0, 1)
        .expect("url");
    assert_eq!(plain, "index.html?series=0&item=1");

    let with_query = StandardXyUrlGenerator::new("chart.php?view=full")
        .with_parameter_names("s", "i")
        .generate_url(&dataset, 2, 3)
        .expect("url");
    assert_eq!(with_query, "chart.php?view=full&s=2&i=3");
}
