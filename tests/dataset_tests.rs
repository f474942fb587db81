use chrono::{TimeZone, Utc};
use interval_chart::ChartError;
use interval_chart::core::{
    IntervalXyDataset, XyDataset, YIntervalDataItem, YIntervalSeries, YIntervalSeriesCollection,
};
use rust_decimal::Decimal;

#[test]
fn series_keeps_items_sorted_by_x() {
    let mut series = YIntervalSeries::new("S1").expect("series");
    series.add_values(3.0, 1.0, 0.0, 2.0).expect("item");
    series.add_values(1.0, 1.0, 0.0, 2.0).expect("item");
    series.add_values(2.0, 1.0, 0.0, 2.0).expect("item");

    let xs: Vec<f64> = series.items().iter().map(|item| item.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}

#[test]
fn duplicate_xs_keep_arrival_order() {
    let mut series = YIntervalSeries::new("S1").expect("series");
    series.add_values(1.0, 10.0, 0.0, 2.0).expect("item");
    series.add_values(1.0, 20.0, 0.0, 2.0).expect("item");

    assert_eq!(series.get(0).map(|item| item.y), Some(10.0));
    assert_eq!(series.get(1).map(|item| item.y), Some(20.0));
}

#[test]
fn unsorted_series_keeps_insertion_order() {
    let mut series = YIntervalSeries::new("S1")
        .expect("series")
        .with_auto_sort(false);
    series.add_values(3.0, 1.0, 0.0, 2.0).expect("item");
    series.add_values(1.0, 1.0, 0.0, 2.0).expect("item");

    assert_eq!(series.get(0).map(|item| item.x), Some(3.0));
}

#[test]
fn duplicate_xs_can_be_rejected() {
    let mut series = YIntervalSeries::new("S1")
        .expect("series")
        .with_allow_duplicate_xs(false);
    series.add_values(1.0, 1.0, 0.0, 2.0).expect("item");

    let err = series
        .add_values(1.0, 5.0, 4.0, 6.0)
        .expect_err("duplicate x");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(series.len(), 1);
}

#[test]
fn item_validation_allows_missing_y_but_not_infinite_values() {
    assert!(YIntervalDataItem::new(1.0, f64::NAN, f64::NAN, f64::NAN).is_ok());
    assert!(YIntervalDataItem::new(f64::NAN, 1.0, 0.0, 2.0).is_err());
    assert!(YIntervalDataItem::new(1.0, 1.0, f64::NEG_INFINITY, 2.0).is_err());
    assert!(YIntervalSeries::new("").is_err());
}

#[test]
fn decimal_time_input_is_converted() {
    let time = Utc
        .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .expect("time");
    let item = YIntervalDataItem::from_decimal_time(
        time,
        Decimal::new(1_050, 2),
        Decimal::new(975, 2),
        Decimal::new(11_25, 2),
    )
    .expect("item");

    assert_eq!(item.x, time.timestamp() as f64);
    assert_eq!((item.y, item.y_low, item.y_high), (10.5, 9.75, 11.25));
}

#[test]
fn collection_exposes_the_interval_dataset_contract() {
    let mut first = YIntervalSeries::new("first").expect("series");
    first.add_values(1.0, 5.0, 4.0, 6.0).expect("item");
    let second = YIntervalSeries::new("second").expect("series");
    let collection = YIntervalSeriesCollection::new()
        .with_series(first)
        .expect("first")
        .with_series(second)
        .expect("second");

    assert_eq!(collection.series_count(), 2);
    assert_eq!(collection.series_key(1), Some("second"));
    assert_eq!(collection.series_key(2), None);
    assert_eq!(collection.item_count(0), 1);
    assert_eq!(collection.item_count(1), 0);
    assert_eq!(collection.x_value(0, 0), 1.0);
    assert_eq!(collection.y_value(0, 0), 5.0);
    assert_eq!(collection.start_y_value(0, 0), 4.0);
    assert_eq!(collection.end_y_value(0, 0), 6.0);
    assert!(collection.end_y_value(0, 1).is_nan());
    assert!(collection.x_value(5, 0).is_nan());
}

#[test]
fn series_keys_are_unique_and_removal_preserves_order() {
    let mut collection = YIntervalSeriesCollection::new();
    for key in ["a", "b", "c"] {
        collection
            .add_series(YIntervalSeries::new(key).expect("series"))
            .expect("add");
    }

    let err = collection
        .add_series(YIntervalSeries::new("b").expect("series"))
        .expect_err("duplicate key");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert!(collection.remove_series("b").is_some());
    assert_eq!(collection.index_of("c"), Some(1));
    assert_eq!(collection.series_key(1), Some("c"));
}

#[test]
fn collection_round_trips_through_json() {
    let mut series = YIntervalSeries::new("S1").expect("series");
    series.add_values(1.0, 2.0, 1.5, 2.5).expect("item");
    series.add_values(2.0, 3.0, 2.5, 3.5).expect("item");
    let collection = YIntervalSeriesCollection::new()
        .with_series(series)
        .expect("collection");

    let json = collection.to_json_pretty().expect("json");
    let parsed = YIntervalSeriesCollection::from_json_str(&json).expect("parse");

    assert_eq!(parsed, collection);
    assert!(YIntervalSeriesCollection::from_json_str("{").is_err());
}

#[test]
fn collection_json_must_respect_series_invariants() {
    let item = |x: f64| format!(r#"{{"x":{x:?},"y":2.0,"y_low":1.0,"y_high":3.0}}"#);
    let collection = |map_key: &str, key: &str, items: &[String], extra: &str| {
        format!(
            r#"{{"series":{{"{map_key}":{{"key":"{key}","items":[{}]{extra}}}}}}}"#,
            items.join(",")
        )
    };

    let valid = collection("S1", "S1", &[item(1.0), item(2.0)], "");
    let parsed = YIntervalSeriesCollection::from_json_str(&valid).expect("valid dataset");
    assert_eq!(parsed.index_of("S1"), Some(0));

    let mismatched_key = collection("other", "S1", &[item(1.0)], "");
    let err = YIntervalSeriesCollection::from_json_str(&mismatched_key)
        .expect_err("map key must match the series key");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let unsorted = collection("S1", "S1", &[item(2.0), item(1.0)], "");
    assert!(YIntervalSeriesCollection::from_json_str(&unsorted).is_err());
    let unsorted_allowed = collection(
        "S1",
        "S1",
        &[item(2.0), item(1.0)],
        r#","auto_sort":false"#,
    );
    assert!(YIntervalSeriesCollection::from_json_str(&unsorted_allowed).is_ok());

    let empty_key = collection("", "", &[], "");
    assert!(YIntervalSeriesCollection::from_json_str(&empty_key).is_err());

    let duplicates = collection(
        "S1",
        "S1",
        &[item(1.0), item(1.0)],
        r#","allow_duplicate_xs":false"#,
    );
    assert!(YIntervalSeriesCollection::from_json_str(&duplicates).is_err());
}

#[test]
fn series_mutation_through_the_collection() {
    let mut collection = YIntervalSeriesCollection::new()
        .with_series(YIntervalSeries::new("S1").expect("series"))
        .expect("collection");

    let series = collection.series_mut("S1").expect("series");
    series.add_values(1.0, 2.0, 1.0, 3.0).expect("item");
    series.add_values(2.0, 2.0, 1.0, 3.0).expect("item");
    assert!(series.remove(0).is_some());
    assert!(series.remove(5).is_none());

    assert_eq!(collection.item_count(0), 1);
    collection.series_mut("S1").expect("series").clear();
    assert!(collection.series(0).expect("series").is_empty());
}
