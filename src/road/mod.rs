//! Road form support: turning intersection selections or typed coordinates
//! into the geometry stored with a road, and preparing stored roads for the
//! map.

mod draft;
pub use draft::{RoadDraft, RoadError};

pub mod geometry;
pub use geometry::{parse_coordinate_payload, RoadGeometry};

pub mod intersection;
pub use intersection::{coordinate_key, Intersection, IntersectionIndex};

mod polyline;
pub use polyline::{road_display_name, RoadLayer, RoadPolyline};
