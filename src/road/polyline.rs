use crate::geo_types::{Coord, LineString};
use crate::wkt::extract_line_string_coordinates;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

/// Name shown for a road: English name, Burmese name, road type, then id.
#[wasm_bindgen(js_name = roadDisplayName)]
pub fn road_display_name(
    english_name: Option<String>,
    burmese_name: Option<String>,
    road_type: Option<String>,
    id: String,
) -> String {
    [english_name, burmese_name, road_type]
        .iter()
        .flatten()
        .find(|name| !name.is_empty())
        .cloned()
        .unwrap_or(id)
}

#[derive(Debug, Clone)]
#[wasm_bindgen]
/// A stored road prepared for drawing on the map.
pub struct RoadPolyline {
    id: String,
    name: String,
    line: LineString,
    length_meters: f64,
}

#[wasm_bindgen]
impl RoadPolyline {
    #[wasm_bindgen(js_name = fromWkt)]
    /// Returns nothing if the geometry has fewer than two usable coordinates.
    pub fn from_wkt(id: String, name: String, wkt: &str) -> Option<RoadPolyline> {
        let coordinates = extract_line_string_coordinates(wkt);
        if coordinates.len() < 2 {
            return None;
        }
        let line = LineString::new(coordinates);
        let length_meters = line.total_length();
        Some(RoadPolyline {
            id,
            name,
            line,
            length_meters,
        })
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn get_coords(&self) -> Vec<Coord> {
        self.line.get_coords()
    }

    /// Flat `[lat0, lon0, lat1, lon1, ...]` positions, in the axis order the
    /// map library expects.
    pub fn positions(&self) -> Vec<f64> {
        self.line
            .coords()
            .flat_map(|coord| [coord.lat(), coord.lon()])
            .collect()
    }

    #[wasm_bindgen(js_name = lengthMeters)]
    pub fn length_meters(&self) -> f64 {
        self.length_meters
    }

    #[wasm_bindgen(js_name = toGeoJSON)]
    /// Returns the road as GeoJSON feature.
    pub fn to_geojson(&self) -> String {
        self.to_feature().to_string()
    }
}

impl RoadPolyline {
    pub fn to_feature(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self
            .line
            .coords()
            .map(|coord| [coord.lon(), coord.lat()])
            .collect();
        json!({
            "type": "Feature",
            "id": self.id,
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "name": self.name,
                "length_m": self.length_meters,
            },
        })
    }
}

#[derive(Debug, Default)]
#[wasm_bindgen]
/// The roads of a city as drawn on the road form's map.
pub struct RoadLayer {
    roads: Vec<RoadPolyline>,
}

#[wasm_bindgen]
impl RoadLayer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RoadLayer {
        RoadLayer::default()
    }

    #[wasm_bindgen(js_name = pushRoad)]
    /// Adds a road unless its geometry has fewer than two coordinates.
    /// Returns whether it was added.
    pub fn push_road(&mut self, id: String, name: String, geometry: Option<String>) -> bool {
        match RoadPolyline::from_wkt(id, name, geometry.as_deref().unwrap_or_default()) {
            Some(road) => {
                self.roads.push(road);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = roadsLength)]
    /// Returns number of stored roads.
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn get_roads(&self) -> Vec<RoadPolyline> {
        self.roads.clone()
    }

    #[wasm_bindgen(js_name = totalLength)]
    /// Length of all roads in meters.
    pub fn total_length(&self) -> f64 {
        self.roads.iter().map(RoadPolyline::length_meters).sum()
    }

    #[wasm_bindgen(js_name = toGeoJSON)]
    /// Returns all roads as GeoJSON feature collection.
    pub fn to_geojson(&self) -> String {
        let features: Vec<Value> = self.roads.iter().map(RoadPolyline::to_feature).collect();
        json!({
            "type": "FeatureCollection",
            "features": features,
        })
        .to_string()
    }
}

impl RoadLayer {
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}
