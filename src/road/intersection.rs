use crate::debug::debug_log;
use crate::geo_types::Coord;
use crate::text::format_coordinate_text;
use crate::wkt::extract_point_from_wkt;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, PartialEq)]
#[wasm_bindgen]
/// A location of type intersection; roads are drawn between these.
pub struct Intersection {
    id: String,
    city_id: Option<String>,
    /// `POINT` WKT as returned by the API.
    geometry: Option<String>,
}

#[wasm_bindgen]
impl Intersection {
    #[wasm_bindgen(constructor)]
    pub fn new(id: String, city_id: Option<String>, geometry: Option<String>) -> Intersection {
        Intersection {
            id,
            city_id,
            geometry,
        }
    }

    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    pub fn get_city_id(&self) -> Option<String> {
        self.city_id.clone()
    }

    pub fn get_geometry(&self) -> Option<String> {
        self.geometry.clone()
    }

    /// The intersection's point, if its geometry holds finite coordinates.
    pub fn coord(&self) -> Option<Coord> {
        extract_point_from_wkt(self.geometry.as_deref()?)?.to_coord()
    }
}

impl Intersection {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_in_city(&self, city_id: &str) -> bool {
        self.city_id.as_deref() == Some(city_id)
    }
}

/// Key used to match coordinates against intersections, rounded to six
/// decimals (about 0.1 m).
pub fn coordinate_key(coord: Coord) -> String {
    format!("{:.6},{:.6}", coord.lon(), coord.lat())
}

#[derive(Debug, Default)]
#[wasm_bindgen]
/// Intersections by id and by rounded coordinate.
pub struct IntersectionIndex {
    intersections: Vec<Intersection>,
    by_id: HashMap<String, usize>,
    by_coordinate: HashMap<String, String>,
}

#[wasm_bindgen]
impl IntersectionIndex {
    #[wasm_bindgen(constructor)]
    pub fn new() -> IntersectionIndex {
        IntersectionIndex::default()
    }

    #[wasm_bindgen(js_name = intersectionsLength)]
    /// Returns number of stored intersections.
    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    #[wasm_bindgen(js_name = pushLocation)]
    /// Adds a location if its type names an intersection. Returns whether it
    /// was added.
    pub fn push_location(
        &mut self,
        id: String,
        city_id: Option<String>,
        location_type: Option<String>,
        geometry: Option<String>,
    ) -> bool {
        let is_intersection = location_type
            .map(|kind| kind.to_lowercase().contains("intersection"))
            .unwrap_or(false);
        if is_intersection {
            self.push_intersection(Intersection::new(id, city_id, geometry));
        }
        is_intersection
    }

    #[wasm_bindgen(js_name = inCity)]
    /// Intersections of the given city, in insertion order.
    pub fn in_city(&self, city_id: &str) -> Vec<Intersection> {
        self.intersections
            .iter()
            .filter(|intersection| intersection.is_in_city(city_id))
            .cloned()
            .collect()
    }

    #[wasm_bindgen(js_name = findByCoord)]
    pub fn find_by_coord(&self, coord: &Coord) -> Option<String> {
        self.by_coordinate.get(&coordinate_key(*coord)).cloned()
    }

    #[wasm_bindgen(js_name = derivedCoordinateText)]
    /// Coordinate text for a selection of at least two intersections, one
    /// `lon, lat` per line. Empty if fewer are selected or any of them has
    /// no usable point.
    pub fn derived_coordinate_text(&self, ids: Vec<String>) -> String {
        if ids.len() < 2 {
            return String::new();
        }
        match self.coordinates_for(&ids) {
            Ok(coordinates) => format_coordinate_text(&coordinates),
            Err(_) => String::new(),
        }
    }

    #[wasm_bindgen(js_name = matchCoordinates)]
    /// Intersection ids for every coordinate of a path. Empty unless every
    /// coordinate matches an intersection.
    pub fn match_coordinates(&self, coordinates: Vec<Coord>) -> Vec<String> {
        self.match_path(&coordinates)
    }
}

impl IntersectionIndex {
    /// Adds an intersection, replacing one with the same id.
    pub fn push_intersection(&mut self, intersection: Intersection) {
        let position = match self.by_id.get(&intersection.id) {
            Some(&position) => {
                let previous = &self.intersections[position];
                if let Some(key) = previous.coord().map(coordinate_key) {
                    if self.by_coordinate.get(&key) == Some(&previous.id) {
                        self.by_coordinate.remove(&key);
                    }
                }
                self.intersections[position] = intersection;
                position
            }
            None => {
                self.intersections.push(intersection);
                self.intersections.len() - 1
            }
        };
        let intersection = &self.intersections[position];
        self.by_id.insert(intersection.id.clone(), position);
        match intersection.coord() {
            Some(coord) => {
                self.by_coordinate
                    .insert(coordinate_key(coord), intersection.id.clone());
            }
            None => {
                debug_log!("intersection {} has no usable point", intersection.id);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Intersection> {
        self.by_id
            .get(id)
            .map(|&position| &self.intersections[position])
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    /// Points of the given intersections in order, or the ids that are
    /// unknown or have no usable point.
    pub fn coordinates_for(&self, ids: &[String]) -> Result<Vec<Coord>, Vec<String>> {
        let mut coordinates = Vec::with_capacity(ids.len());
        let mut unresolved = Vec::new();
        for id in ids {
            match self.get(id).and_then(Intersection::coord) {
                Some(coord) => coordinates.push(coord),
                None => unresolved.push(id.clone()),
            }
        }
        if unresolved.is_empty() {
            Ok(coordinates)
        } else {
            Err(unresolved)
        }
    }

    pub fn match_path(&self, coordinates: &[Coord]) -> Vec<String> {
        let matched: Option<Vec<String>> = coordinates
            .iter()
            .map(|coord| self.find_by_coord(coord))
            .collect();
        matched.unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::geo_types::coord::coord;

    pub(crate) fn index() -> IntersectionIndex {
        let mut index = IntersectionIndex::new();
        for (id, city, geometry) in [
            ("a", "yangon", "POINT(96.1561 16.8409)"),
            ("b", "yangon", "POINT(96.17 16.85)"),
            ("c", "yangon", "POINT(96.195 16.8)"),
            ("m", "mandalay", "POINT(96.0891 21.9588)"),
            ("broken", "yangon", "POINT(abc def)"),
        ] {
            index.push_location(
                id.into(),
                Some(city.into()),
                Some("Road Intersection".into()),
                Some(geometry.into()),
            );
        }
        index
    }

    #[test]
    fn push_location() {
        let mut index = index();
        assert_eq!(index.len(), 5);
        assert!(!index.push_location(
            "shop".into(),
            Some("yangon".into()),
            Some("landmark".into()),
            Some("POINT(1 2)".into()),
        ));
        assert!(!index.push_location("none".into(), None, None, None));
        assert_eq!(index.len(), 5);
        assert_eq!(index.get("shop"), None);
        assert_eq!(index.get("a").unwrap().coord(), Some(coord!(lon: 96.1561, lat: 16.8409)));
        assert_eq!(index.get("broken").unwrap().coord(), None);
    }

    #[test]
    fn in_city() {
        let index = index();
        let ids: Vec<String> = index.in_city("yangon").iter().map(|i| i.get_id()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "broken"]);
        assert_eq!(index.in_city("unknown").len(), 0);
    }

    #[test]
    fn find_by_coord() {
        let index = index();
        assert_eq!(index.find_by_coord(&coord!(lon: 96.17, lat: 16.85)), Some("b".into()));
        assert_eq!(
            index.find_by_coord(&coord!(lon: 96.1700001, lat: 16.8499999)),
            Some("b".into())
        );
        assert_eq!(index.find_by_coord(&coord!(lon: 96.171, lat: 16.85)), None);
    }

    #[test]
    /// Re-adding an id replaces the intersection and its coordinate.
    fn replace() {
        let mut index = index();
        index.push_intersection(Intersection::new(
            "b".into(),
            Some("yangon".into()),
            Some("POINT(1 2)".into()),
        ));
        assert_eq!(index.len(), 5);
        assert_eq!(index.find_by_coord(&coord!(lon: 96.17, lat: 16.85)), None);
        assert_eq!(index.find_by_coord(&coord!(lon: 1.0, lat: 2.0)), Some("b".into()));
    }

    #[test]
    fn derived_coordinate_text() {
        let index = index();
        assert_eq!(
            index.derived_coordinate_text(vec!["a".into(), "c".into()]),
            "96.1561, 16.8409\n96.195, 16.8"
        );
        assert_eq!(index.derived_coordinate_text(vec!["a".into()]), "");
        assert_eq!(index.derived_coordinate_text(vec!["a".into(), "x".into()]), "");
        assert_eq!(index.derived_coordinate_text(vec!["a".into(), "broken".into()]), "");
    }

    #[test]
    fn match_coordinates() {
        let index = index();
        let path = vec![coord!(lon: 96.195, lat: 16.8), coord!(lon: 96.1561, lat: 16.8409)];
        assert_eq!(index.match_coordinates(path.clone()), vec!["c", "a"]);
        assert_eq!(
            index.match_coordinates(vec![path[0], coord!(lon: 0.0, lat: 0.0)]),
            Vec::<String>::new()
        );
        assert_eq!(index.match_coordinates(vec![]), Vec::<String>::new());
    }
}
