use std::sync::Arc;

use interval_chart::render::{Color, ItemShape};
use interval_chart::renderer::{
    IntervalXyItemLabelGenerator, RendererStyle, StandardXyItemLabelGenerator,
    XyItemLabelGenerator, YIntervalRenderer,
};

#[test]
fn identically_constructed_renderers_are_equal() {
    assert_eq!(YIntervalRenderer::new(), YIntervalRenderer::new());

    let style = RendererStyle::default().with_base_paint(Color::rgb(0.2, 0.4, 0.6));
    let a = YIntervalRenderer::with_style(style.clone()).expect("renderer");
    let b = YIntervalRenderer::with_style(style).expect("renderer");
    assert_eq!(a, b);
}

#[test]
fn shared_generator_reference_keeps_renderers_equal() {
    let generator: Arc<dyn XyItemLabelGenerator> =
        Arc::new(IntervalXyItemLabelGenerator::default());
    let mut a = YIntervalRenderer::new();
    let mut b = YIntervalRenderer::new();

    a.set_additional_item_label_generator(Some(Arc::clone(&generator)));
    assert_ne!(a, b);

    b.set_additional_item_label_generator(Some(generator));
    assert_eq!(a, b);
}

#[test]
fn distinct_generator_instances_compare_by_reference() {
    let mut a = YIntervalRenderer::new();
    let mut b = YIntervalRenderer::new();
    a.set_additional_item_label_generator(Some(Arc::new(IntervalXyItemLabelGenerator::default())));
    b.set_additional_item_label_generator(Some(Arc::new(IntervalXyItemLabelGenerator::default())));

    assert_ne!(a, b);
}

#[test]
fn base_state_participates_in_equality() {
    let a = YIntervalRenderer::new();
    let mut b = YIntervalRenderer::new();
    b.base_mut()
        .update_style(|style| style.base_shape = ItemShape::Diamond { size: 7.0 })
        .expect("style");
    assert_ne!(a, b);

    let mut c = YIntervalRenderer::new();
    c.base_mut()
        .set_item_label_generator(Some(Arc::new(StandardXyItemLabelGenerator::default())));
    assert_ne!(a, c);
}

#[test]
fn clone_shares_generator_references() {
    let mut renderer = YIntervalRenderer::new();
    renderer.set_additional_item_label_generator(Some(Arc::new(
        IntervalXyItemLabelGenerator::default(),
    )));
    renderer
        .base_mut()
        .set_item_label_generator(Some(Arc::new(StandardXyItemLabelGenerator::default())));

    let copy = renderer.clone();

    assert_eq!(copy, renderer);
    let original = renderer
        .additional_item_label_generator()
        .expect("original generator");
    let copied = copy
        .additional_item_label_generator()
        .expect("copied generator");
    assert!(Arc::ptr_eq(&original, &copied));
}

#[test]
fn duplicate_is_independent_after_mutation() {
    let renderer = YIntervalRenderer::new();
    let mut copy = renderer.duplicate();

    copy.set_additional_item_label_generator(Some(Arc::new(
        IntervalXyItemLabelGenerator::default(),
    )));

    assert!(renderer.additional_item_label_generator().is_none());
    assert_ne!(copy, renderer);
}
