use interval_chart::ChartError;
use interval_chart::render::{Color, ItemShape, LineStrokeStyle};
use interval_chart::renderer::{
    DEFAULT_SERIES_PALETTE, ItemLabelAnchor, ItemLabelPosition, RendererStyle, SeriesOverrides,
    TextAnchor,
};

#[test]
fn defaults_match_the_documented_policy() {
    let style = RendererStyle::default();

    assert_eq!(style.item_shape(0, 0), ItemShape::Square { size: 6.0 });
    assert_eq!(style.item_stroke_width(0, 0), 1.0);
    assert_eq!(style.item_stroke_style(0, 0), LineStrokeStyle::Solid);
    assert!(!style.is_item_label_visible(0, 0));
    assert!(style.is_series_visible(3));
    assert_eq!(
        style.positive_item_label_position(0, 0).item_label_anchor,
        ItemLabelAnchor::Outside12
    );
    assert_eq!(
        style.negative_item_label_position(0, 0).text_anchor,
        TextAnchor::TopCenter
    );
    assert_eq!(style.item_label_anchor_offset, 2.0);
}

#[test]
fn paint_cycles_through_the_palette_until_a_base_paint_is_set() {
    let style = RendererStyle::default();
    assert_eq!(style.item_paint(0, 0), DEFAULT_SERIES_PALETTE[0]);
    assert_eq!(
        style.item_paint(DEFAULT_SERIES_PALETTE.len() + 1, 0),
        DEFAULT_SERIES_PALETTE[1]
    );

    let fixed = Color::rgb(0.1, 0.2, 0.3);
    let style = style.with_base_paint(fixed);
    assert_eq!(style.item_paint(5, 0), fixed);
}

#[test]
fn series_overrides_win_over_base_values() {
    let mut style = RendererStyle::default();
    let accent = Color::rgb(0.9, 0.1, 0.1);
    style.series_paint.set(2, Some(accent));
    style.series_stroke_style.set(2, Some(LineStrokeStyle::Dashed));
    style.series_item_label_visible.set(1, Some(true));
    style
        .series_negative_item_label_position
        .set(1, Some(ItemLabelPosition::new(ItemLabelAnchor::Inside6, TextAnchor::Center)));

    assert_eq!(style.item_paint(2, 7), accent);
    assert_eq!(style.item_stroke_style(2, 0), LineStrokeStyle::Dashed);
    assert_eq!(style.item_stroke_style(1, 0), LineStrokeStyle::Solid);
    assert!(style.is_item_label_visible(1, 0));
    assert!(!style.is_item_label_visible(0, 0));
    assert_eq!(
        style.negative_item_label_position(1, 0).item_label_anchor,
        ItemLabelAnchor::Inside6
    );

    style.series_paint.set(2, None);
    assert_eq!(style.item_paint(2, 0), DEFAULT_SERIES_PALETTE[2]);
}

#[test]
fn clearing_an_unset_override_does_not_grow_the_table() {
    let mut overrides = SeriesOverrides::<f64>::default();
    overrides.set(10, None);
    assert_eq!(overrides, SeriesOverrides::default());

    overrides.set(1, Some(2.5));
    assert_eq!(overrides.get(0), None);
    assert_eq!(overrides.get(1), Some(2.5));
    assert_eq!(overrides.get(9), None);
}

#[test]
fn style_round_trips_through_json() {
    let mut style = RendererStyle::default()
        .with_base_shape(ItemShape::Diamond { size: 9.0 })
        .with_base_item_label_visible(true);
    style.series_stroke_width.set(1, Some(2.5));

    let json = style.to_json_pretty().expect("json");
    let parsed = RendererStyle::from_json_str(&json).expect("parse");

    assert_eq!(parsed, style);
}

#[test]
fn partial_json_uses_defaults() {
    let style = RendererStyle::from_json_str(r#"{"base_stroke_width": 3.0}"#).expect("parse");

    assert_eq!(style.item_stroke_width(0, 0), 3.0);
    assert_eq!(style.item_shape(0, 0), ItemShape::default());
}

#[test]
fn invalid_style_values_are_rejected() {
    let err = RendererStyle::from_json_str(r#"{"base_stroke_width": 0.0}"#)
        .expect_err("zero stroke");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut style = RendererStyle::default();
    style
        .series_shape
        .set(0, Some(ItemShape::Circle { diameter: -1.0 }));
    assert!(style.validate().is_err());

    let style = RendererStyle {
        base_item_label_paint: Color::rgba(1.5, 0.0, 0.0, 1.0),
        ..RendererStyle::default()
    };
    assert!(style.validate().is_err());

    let style = RendererStyle {
        item_label_anchor_offset: f64::NAN,
        ..RendererStyle::default()
    };
    assert!(style.validate().is_err());
}
