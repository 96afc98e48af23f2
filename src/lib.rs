#![warn(missing_docs)]
//! ROGEO - Road Geometry for the map dashboard
//!
//! Parses the coordinate text and WKT geometries handled by the road and
//! location forms, and measures roads along great circles. All functions are
//! lenient: malformed input yields empty results instead of errors.

mod debug;
pub mod api;
pub mod geo_types;
pub mod measure;
pub mod road;
pub mod text;
pub mod wkt;

pub use geo_types::{Coord, LineString};
pub use measure::{compute_segment_lengths, haversine_distance, total_length, EARTH_RADIUS_M};
pub use text::{format_coordinate_text, parse_coordinate_text};
pub use wkt::{
    extract_line_string_coordinates, extract_point_from_wkt, format_line_string_for_editor,
    WktError, WktPoint,
};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
/// Sets up hooks so that panics are forwarded to console.error.
///
/// If you want this behaviour, call the function one time in your code.
pub fn init_hooks() {
    #[cfg(feature = "console_error_panic_hook")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}
