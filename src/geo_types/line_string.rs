use super::Coord;
use crate::measure;
use crate::wkt;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq)]
#[wasm_bindgen]
/// An ordered path of geographic coordinates.
///
/// Unlike a strict linestring, fewer than two coordinates are allowed; such a
/// path simply has no segments.
pub struct LineString(geo::LineString<f64>);

#[wasm_bindgen]
impl LineString {
    #[wasm_bindgen(constructor)]
    pub fn new(coords: Vec<Coord>) -> LineString {
        let converted = geo::LineString::new(coords.into_iter().map(|x| x.into()).collect());
        LineString(converted)
    }

    /// Number of coordinates.
    #[wasm_bindgen(js_name = coordsCount)]
    pub fn coords_count(&self) -> usize {
        self.0 .0.len()
    }

    pub fn get_coords(&self) -> Vec<Coord> {
        self.coords().collect()
    }

    /// Great-circle length of every segment in meters.
    #[wasm_bindgen(js_name = segmentLengths)]
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.0
            .lines()
            .map(|line| measure::haversine_distance(line.start.into(), line.end.into()))
            .collect()
    }

    /// Sum of all segment lengths in meters.
    #[wasm_bindgen(js_name = totalLength)]
    pub fn total_length(&self) -> f64 {
        measure::total_length(&self.segment_lengths())
    }

    /// Renders the path as `LINESTRING(lon lat, ...)`, or nothing below two
    /// coordinates.
    #[wasm_bindgen(js_name = toWkt)]
    pub fn to_wkt(&self) -> Option<String> {
        wkt::to_line_string_wkt(&self.get_coords())
    }
}

impl LineString {
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0.coords().map(|coord| Coord::from(*coord))
    }
}

impl From<LineString> for geo::LineString<f64> {
    fn from(value: LineString) -> Self {
        value.0
    }
}

impl From<geo::LineString<f64>> for LineString {
    fn from(value: geo::LineString<f64>) -> LineString {
        LineString(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_types::coord::coord;

    #[test]
    fn segment_lengths_follow_coordinate_order() {
        let line = LineString::new(vec![
            coord!(lon: 0.0, lat: 0.0),
            coord!(lon: 0.0, lat: 1.0),
            coord!(lon: 0.0, lat: 1.0),
        ]);
        let lengths = line.segment_lengths();
        assert_eq!(lengths.len(), 2);
        assert!((lengths[0] - 111_194.93).abs() < 1.0);
        assert_eq!(lengths[1], 0.0);
        assert_eq!(line.total_length(), lengths[0]);
    }

    #[test]
    fn short_paths_have_no_segments() {
        assert_eq!(LineString::new(vec![]).segment_lengths().len(), 0);
        let single = LineString::new(vec![coord!(lon: 5.0, lat: 5.0)]);
        assert_eq!(single.coords_count(), 1);
        assert_eq!(single.segment_lengths().len(), 0);
        assert_eq!(single.total_length(), 0.0);
        assert_eq!(single.to_wkt(), None);
    }

    #[test]
    fn to_wkt() {
        let line = LineString::new(vec![coord!(lon: 95.1, lat: 16.1), coord!(lon: -0.5, lat: 2.0)]);
        assert_eq!(line.to_wkt().unwrap(), "LINESTRING(95.1 16.1, -0.5 2)");
    }
}
