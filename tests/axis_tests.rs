use approx::assert_relative_eq;
use interval_chart::ChartError;
use interval_chart::core::{NumberAxis, PlotArea, Range, RectangleEdge, ValueAxis};

fn area() -> PlotArea {
    PlotArea::new(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn horizontal_edges_map_left_to_right() {
    let axis = NumberAxis::fixed(0.0, 10.0).expect("axis");

    let x = axis
        .value_to_surface(5.0, area(), RectangleEdge::Bottom)
        .expect("map");
    assert_relative_eq!(x, 100.0);

    let shifted = PlotArea::new(50.0, 0.0, 200.0, 100.0);
    let x = axis
        .value_to_surface(10.0, shifted, RectangleEdge::Top)
        .expect("map");
    assert_relative_eq!(x, 250.0);
}

#[test]
fn vertical_edges_map_bottom_to_top() {
    let axis = NumberAxis::fixed(0.0, 10.0).expect("axis");

    let bottom = axis
        .value_to_surface(0.0, area(), RectangleEdge::Left)
        .expect("map");
    let top = axis
        .value_to_surface(10.0, area(), RectangleEdge::Right)
        .expect("map");
    let quarter = axis
        .value_to_surface(2.5, area(), RectangleEdge::Left)
        .expect("map");

    assert_relative_eq!(bottom, 100.0);
    assert_relative_eq!(top, 0.0);
    assert_relative_eq!(quarter, 75.0);
}

#[test]
fn inverted_axis_swaps_the_span() {
    let axis = NumberAxis::fixed(0.0, 10.0)
        .expect("axis")
        .with_inverted(true);

    let y = axis
        .value_to_surface(0.0, area(), RectangleEdge::Left)
        .expect("map");
    let x = axis
        .value_to_surface(0.0, area(), RectangleEdge::Bottom)
        .expect("map");

    assert_relative_eq!(y, 0.0);
    assert_relative_eq!(x, 200.0);
}

#[test]
fn surface_to_value_inverts_the_mapping() {
    let axis = NumberAxis::fixed(-4.0, 12.0).expect("axis");

    let y = axis
        .value_to_surface(3.25, area(), RectangleEdge::Left)
        .expect("map");
    let value = axis
        .surface_to_value(y, area(), RectangleEdge::Left)
        .expect("unmap");

    assert_relative_eq!(value, 3.25, epsilon = 1e-9);
}

#[test]
fn non_finite_values_are_rejected() {
    let axis = NumberAxis::fixed(0.0, 10.0).expect("axis");

    let err = axis
        .value_to_surface(f64::NAN, area(), RectangleEdge::Bottom)
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn degenerate_ranges_and_negative_margins_are_rejected() {
    assert!(NumberAxis::new(1.0, 1.0).is_err());
    assert!(NumberAxis::new(2.0, 1.0).is_err());
    assert!(
        NumberAxis::default()
            .with_margins(-0.1, 0.05)
            .is_err()
    );
    assert!(
        NumberAxis::default()
            .with_auto_range_minimum_size(0.0)
            .is_err()
    );
}

#[test]
fn auto_range_applies_margins() {
    let mut axis = NumberAxis::new(0.0, 1.0).expect("axis");

    axis.auto_adjust_range(Some(Range::new(2.0, 9.0).expect("range")))
        .expect("adjust");

    assert_relative_eq!(axis.range().lower(), 1.65, epsilon = 1e-12);
    assert_relative_eq!(axis.range().upper(), 9.35, epsilon = 1e-12);
}

#[test]
fn auto_range_widens_zero_length_data() {
    let mut axis = NumberAxis::default()
        .with_margins(0.0, 0.0)
        .expect("margins")
        .with_auto_range_minimum_size(2.0)
        .expect("minimum size");

    axis.auto_adjust_range(Some(Range::new(5.0, 5.0).expect("range")))
        .expect("adjust");

    assert_relative_eq!(axis.range().lower(), 4.0);
    assert_relative_eq!(axis.range().upper(), 6.0);
}

#[test]
fn auto_range_widens_single_large_values_relative_to_magnitude() {
    let mut axis = NumberAxis::default();
    let x = 1_700_000_000.0;

    axis.auto_adjust_range(Some(Range::new(x, x).expect("range")))
        .expect("adjust");

    let range = axis.range();
    assert!(range.length() > 0.0);
    assert!(range.lower() < x && range.upper() > x);
    assert_relative_eq!(range.central_value(), x, epsilon = 1e-3);
    let mapped = axis
        .value_to_surface(x, area(), RectangleEdge::Bottom)
        .expect("map");
    assert_relative_eq!(mapped, 100.0, epsilon = 1e-6);
}

#[test]
fn fixed_ranges_survive_auto_adjust() {
    let mut axis = NumberAxis::new(0.0, 1.0).expect("axis");
    axis.set_range(10.0, 20.0).expect("set range");
    assert!(!axis.is_auto_range());

    axis.auto_adjust_range(Some(Range::new(2.0, 9.0).expect("range")))
        .expect("adjust");
    axis.auto_adjust_range(None).expect("adjust");

    assert_eq!(axis.range(), Range::new(10.0, 20.0).expect("range"));
}

#[test]
fn axis_json_fills_defaults() {
    let axis: NumberAxis =
        serde_json::from_str(r#"{"range":{"lower":0.0,"upper":2.0}}"#).expect("parse");

    assert!(axis.is_auto_range());
    assert!(!axis.is_inverted());
    assert_eq!(axis.margins(), (0.05, 0.05));
    assert_eq!(axis.range(), Range::new(0.0, 2.0).expect("range"));
}

#[test]
fn range_helpers_include_and_expand() {
    let a = Range::new(1.0, 3.0).expect("range");

    assert_eq!(a.include(7.0).upper(), 7.0);
    assert_eq!(a.include(f64::NAN), a);
    assert_relative_eq!(a.central_value(), 2.0);
    assert!(a.contains(3.0));
    assert!(!a.contains(3.5));

    let expanded = a.expand(0.5, 0.25).expect("expand");
    assert_relative_eq!(expanded.lower(), 0.0);
    assert_relative_eq!(expanded.upper(), 3.5);
    assert!(Range::new(f64::INFINITY, 1.0).is_err());
}
