//! Functions exported to JavaScript.
//!
//! `null` and `undefined` arguments behave like empty strings, so none of these
//! throw on partial input.

use crate::geo_types::Coord;
use crate::wkt::WktPoint;
use crate::{measure, road, text, wkt};
use wasm_bindgen::prelude::*;

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[wasm_bindgen(js_name = parseCoordinateText)]
/// Parses a free-text block of `lon, lat` lines (`;` also separates lines).
pub fn parse_coordinate_text(input: Option<String>) -> Vec<Coord> {
    text::parse_coordinate_text(or_empty(&input))
}

#[wasm_bindgen(js_name = formatCoordinateText)]
/// Renders coordinates as an editable `lon, lat` block.
pub fn format_coordinate_text(coordinates: Vec<Coord>) -> String {
    text::format_coordinate_text(&coordinates)
}

#[wasm_bindgen(js_name = extractPointFromWkt)]
/// Raw components of a `POINT` geometry, or `undefined`.
pub fn extract_point_from_wkt(wkt: Option<String>) -> Option<WktPoint> {
    wkt::extract_point_from_wkt(or_empty(&wkt))
}

#[wasm_bindgen(js_name = extractLineStringCoordinates)]
/// Coordinates of a `LINESTRING` geometry; invalid pairs are dropped.
pub fn extract_line_string_coordinates(wkt: Option<String>) -> Vec<Coord> {
    wkt::extract_line_string_coordinates(or_empty(&wkt))
}

#[wasm_bindgen(js_name = formatLineStringForEditor)]
/// Pairs of a `LINESTRING` geometry one per line, as written in the WKT.
pub fn format_line_string_for_editor(wkt: Option<String>) -> String {
    wkt::format_line_string_for_editor(or_empty(&wkt))
}

#[wasm_bindgen(js_name = toLineStringWkt)]
/// `LINESTRING(...)` for at least two coordinates, otherwise `undefined`.
pub fn to_line_string_wkt(coordinates: Vec<Coord>) -> Option<String> {
    wkt::to_line_string_wkt(&coordinates)
}

#[wasm_bindgen(js_name = computeSegmentLengths)]
/// Great-circle length in meters of each consecutive coordinate pair.
pub fn compute_segment_lengths(coordinates: Vec<Coord>) -> Vec<f64> {
    measure::compute_segment_lengths(&coordinates)
}

#[wasm_bindgen(js_name = totalLength)]
pub fn total_length(segment_lengths: &[f64]) -> f64 {
    measure::total_length(segment_lengths)
}

#[wasm_bindgen(js_name = parseCoordinatePayload)]
/// Coordinates of a JSON `coordinates` payload; invalid JSON yields none.
pub fn parse_coordinate_payload(json: Option<String>) -> Vec<Coord> {
    match serde_json::from_str::<serde_json::Value>(or_empty(&json)) {
        Ok(value) => road::parse_coordinate_payload(&value),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_types::coord::coord;

    #[test]
    fn missing_input() {
        assert_eq!(parse_coordinate_text(None), vec![]);
        assert_eq!(extract_point_from_wkt(None), None);
        assert_eq!(extract_line_string_coordinates(None), vec![]);
        assert_eq!(format_line_string_for_editor(None), "");
        assert_eq!(parse_coordinate_payload(None), vec![]);
        assert_eq!(parse_coordinate_payload(Some("{not json".into())), vec![]);
        assert_eq!(compute_segment_lengths(vec![]), Vec::<f64>::new());
        assert_eq!(to_line_string_wkt(vec![]), None);
    }

    #[test]
    /// Linestring to coordinates to editable text and back.
    fn editor_round_trip() {
        let wkt = Some("LINESTRING(95.1 16.1, 95.2 16.2, 95.3 16.3)".to_string());
        let coordinates = extract_line_string_coordinates(wkt.clone());
        let text = format_coordinate_text(coordinates.clone());
        assert_eq!(parse_coordinate_text(Some(text)), coordinates);

        let raw = format_line_string_for_editor(wkt);
        assert_eq!(raw, "95.1 16.1\n95.2 16.2\n95.3 16.3");
        assert_eq!(parse_coordinate_text(Some(raw)), vec![]);
    }

    #[test]
    fn lengths() {
        let lengths = compute_segment_lengths(vec![
            coord!(lon: 0.0, lat: 0.0),
            coord!(lon: 0.0, lat: 1.0),
            coord!(lon: 0.0, lat: 2.0),
        ]);
        assert_eq!(lengths.len(), 2);
        assert_eq!(total_length(&lengths), lengths[0] + lengths[1]);
    }

    #[test]
    fn payload() {
        assert_eq!(
            parse_coordinate_payload(Some(r#"[[96.1, 16.8], {"lon": 96.2, "lat": 16.9}]"#.into())),
            vec![coord!(lon: 96.1, lat: 16.8), coord!(lon: 96.2, lat: 16.9)]
        );
    }
}
