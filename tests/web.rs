//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use rogeo::api;
use rogeo::road::{IntersectionIndex, RoadDraft, RoadError, RoadLayer};
use rogeo::Coord;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn parse_and_measure() {
    let coordinates = api::parse_coordinate_text(Some("0, 0; 0, 1".into()));
    assert_eq!(coordinates, vec![Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)]);
    let lengths = api::compute_segment_lengths(coordinates);
    assert_eq!(lengths.len(), 1);
    assert!((lengths[0] - 111_194.93).abs() < 1.0);
}

#[wasm_bindgen_test]
fn point_from_wkt() {
    let point = api::extract_point_from_wkt(Some("POINT(95.65 16.733333)".into())).unwrap();
    assert_eq!(point.lon(), "95.65");
    assert_eq!(point.lat(), "16.733333");
    assert!(api::extract_point_from_wkt(None).is_none());
}

#[wasm_bindgen_test]
fn road_form() {
    let mut index = IntersectionIndex::new();
    for (id, geometry) in [("a", "POINT(96.1 16.8)"), ("b", "POINT(96.2 16.9)")] {
        index.push_location(
            id.into(),
            Some("yangon".into()),
            Some("intersection".into()),
            Some(geometry.into()),
        );
    }
    let draft = RoadDraft::new("yangon".into(), vec!["a".into(), "b".into()], "".into());
    let geometry = draft.resolve(&index).unwrap();
    assert_eq!(geometry.get_length_m().len(), 1);

    let draft = RoadDraft::new("".into(), vec![], "".into());
    assert_eq!(draft.resolve(&index).err(), Some(RoadError::MissingCity));

    let mut layer = RoadLayer::new();
    assert!(layer.push_road("r".into(), "Road".into(), geometry.to_wkt()));
    assert_eq!(layer.len(), 1);
    assert_eq!(layer.get_roads()[0].positions(), vec![16.8, 96.1, 16.9, 96.2]);
}
