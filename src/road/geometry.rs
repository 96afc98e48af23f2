use crate::geo_types::Coord;
use crate::measure::{compute_segment_lengths, total_length};
use crate::text::{parse_coordinate_text, parse_number};
use crate::wkt::{to_line_string_wkt, WGS84_SRID_PREFIX};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq)]
#[wasm_bindgen]
/// The geometry of a road as sent to the API: its coordinates and the length
/// of each segment in meters.
pub struct RoadGeometry {
    coordinates: Vec<Coord>,
    /// Parallel to the consecutive coordinate pairs.
    length_m: Vec<f64>,
}

#[wasm_bindgen]
impl RoadGeometry {
    #[wasm_bindgen(constructor)]
    pub fn new(coordinates: Vec<Coord>) -> RoadGeometry {
        let length_m = compute_segment_lengths(&coordinates);
        RoadGeometry {
            coordinates,
            length_m,
        }
    }

    pub fn get_coordinates(&self) -> Vec<Coord> {
        self.coordinates.clone()
    }

    #[wasm_bindgen(js_name = getLengthM)]
    pub fn get_length_m(&self) -> Vec<f64> {
        self.length_m.clone()
    }

    #[wasm_bindgen(js_name = totalLength)]
    pub fn total_length(&self) -> f64 {
        total_length(&self.length_m)
    }

    #[wasm_bindgen(js_name = toWkt)]
    pub fn to_wkt(&self) -> Option<String> {
        to_line_string_wkt(&self.coordinates)
    }

    /// WKT with an `SRID=4326;` prefix.
    #[wasm_bindgen(js_name = toEwkt)]
    pub fn to_ewkt(&self) -> Option<String> {
        self.to_wkt().map(|wkt| format!("{}{}", WGS84_SRID_PREFIX, wkt))
    }

    /// The `coordinates` and `length_m` fields of a road create/update
    /// request.
    #[wasm_bindgen(js_name = toPayloadJSON)]
    pub fn to_payload_json(&self) -> String {
        self.to_payload().to_string()
    }
}

impl RoadGeometry {
    pub fn coordinates(&self) -> &[Coord] {
        &self.coordinates
    }

    pub fn length_m(&self) -> &[f64] {
        &self.length_m
    }

    pub fn to_payload(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .coordinates
            .iter()
            .map(|coord| [coord.lon(), coord.lat()])
            .collect();
        json!({
            "coordinates": coordinates,
            "length_m": self.length_m,
        })
    }
}

/// Reads a `coordinates` payload: a free-text block, a list of
/// `[lon, lat, ...]` arrays, or a list of objects with `lon`/`lat` (or
/// `longitude`/`latitude`) keys. Components may be numbers or numeric strings.
/// Unusable entries are dropped.
pub fn parse_coordinate_payload(value: &Value) -> Vec<Coord> {
    match value {
        Value::String(text) => parse_coordinate_text(text),
        Value::Array(items) => items.iter().filter_map(coord_from_item).collect(),
        _ => Vec::new(),
    }
}

fn coord_from_item(item: &Value) -> Option<Coord> {
    let (lon, lat) = match item {
        Value::Array(pair) if pair.len() >= 2 => (&pair[0], &pair[1]),
        Value::Object(fields) => (
            fields.get("lon").or_else(|| fields.get("longitude"))?,
            fields.get("lat").or_else(|| fields.get("latitude"))?,
        ),
        _ => return None,
    };
    Coord::finite(json_number(lon)?, json_number(lat)?)
}

fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}
