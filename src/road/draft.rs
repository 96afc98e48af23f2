use crate::debug::debug_log;
use crate::road::{IntersectionIndex, RoadGeometry};
use crate::text::{format_coordinate_text, parse_coordinate_text};
use crate::wkt::extract_line_string_coordinates;
use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[wasm_bindgen]
pub enum RoadError {
    #[error("Please select a city.")]
    MissingCity,
    #[error("Unable to resolve coordinates for all selected intersections.")]
    UnresolvedIntersections,
    #[error("Please select at least two intersections or provide coordinates.")]
    TooFewCoordinates,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[wasm_bindgen]
/// The geometry part of the road form.
///
/// A road is drawn either through a selection of intersections or from a
/// free-text coordinate block.
pub struct RoadDraft {
    /// Set when editing an existing road.
    id: Option<String>,
    city_id: String,
    intersection_ids: Vec<String>,
    coordinates: String,
}

#[wasm_bindgen]
impl RoadDraft {
    #[wasm_bindgen(constructor)]
    pub fn new(city_id: String, intersection_ids: Vec<String>, coordinates: String) -> RoadDraft {
        RoadDraft {
            id: None,
            city_id,
            intersection_ids,
            coordinates,
        }
    }

    #[wasm_bindgen(js_name = forEdit)]
    /// Rebuilds the draft of a stored road from its `LINESTRING` geometry.
    ///
    /// The coordinate text uses the editable `lon, lat` form. Intersections
    /// are only selected when every coordinate matches one.
    pub fn for_edit(
        id: String,
        city_id: String,
        geometry: Option<String>,
        index: &IntersectionIndex,
    ) -> RoadDraft {
        let coordinates = extract_line_string_coordinates(geometry.as_deref().unwrap_or_default());
        RoadDraft {
            id: Some(id),
            city_id,
            intersection_ids: index.match_path(&coordinates),
            coordinates: format_coordinate_text(&coordinates),
        }
    }

    pub fn get_id(&self) -> Option<String> {
        self.id.clone()
    }

    pub fn get_city_id(&self) -> String {
        self.city_id.clone()
    }

    pub fn get_intersection_ids(&self) -> Vec<String> {
        self.intersection_ids.clone()
    }

    pub fn get_coordinates(&self) -> String {
        self.coordinates.clone()
    }

    #[wasm_bindgen(js_name = unresolvedIntersections)]
    /// Selected intersections that are unknown, belong to another city or
    /// have no usable point.
    pub fn unresolved_intersections(&self, index: &IntersectionIndex) -> Vec<String> {
        self.intersection_ids
            .iter()
            .filter(|id| {
                let resolvable = index.get(id).map_or(false, |intersection| {
                    intersection.is_in_city(&self.city_id) && intersection.coord().is_some()
                });
                !resolvable
            })
            .cloned()
            .collect()
    }

    /// Resolves the road's coordinates and segment lengths.
    ///
    /// A selection of two or more intersections takes precedence over the
    /// coordinate text.
    pub fn resolve(&self, index: &IntersectionIndex) -> Result<RoadGeometry, RoadError> {
        if self.city_id.trim().is_empty() {
            return Err(RoadError::MissingCity);
        }

        let mut coordinates = Vec::new();
        if self.intersection_ids.len() >= 2 {
            let unresolved = self.unresolved_intersections(index);
            if !unresolved.is_empty() {
                debug_log!("unresolved intersections: {:?}", unresolved);
                return Err(RoadError::UnresolvedIntersections);
            }
            coordinates = index
                .coordinates_for(&self.intersection_ids)
                .map_err(|_| RoadError::UnresolvedIntersections)?;
            debug_log!("resolved {} intersections", coordinates.len());
        }

        if coordinates.len() < 2 {
            coordinates = parse_coordinate_text(&self.coordinates);
            debug_log!("parsed {} coordinates from text", coordinates.len());
        }

        if coordinates.len() < 2 {
            return Err(RoadError::TooFewCoordinates);
        }
        Ok(RoadGeometry::new(coordinates))
    }
}
