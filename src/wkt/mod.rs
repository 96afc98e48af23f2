//! Reading and writing the WKT geometries returned by the persistence API.
//!
//! Only `POINT(lon lat)` and `LINESTRING(lon lat, ...)` are supported. The
//! strict `parse_*` functions report why a string was rejected; the
//! `extract_*` functions never fail and return an absent or empty result
//! instead, so they can run on every keystroke.

mod scanner;

use crate::debug::debug_log;
use crate::geo_types::Coord;
use crate::text::parse_number;
use scanner::{is_numeric_token, Scanner};
use thiserror::Error;
use wasm_bindgen::prelude::*;

const POINT: &str = "POINT";
const LINESTRING: &str = "LINESTRING";

/// SRID prefix used when handing geometries to the persistence API.
pub const WGS84_SRID_PREFIX: &str = "SRID=4326;";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WktError {
    #[error("No {0} geometry found")]
    MissingKeyword(&'static str),
    #[error("Expected `(` after {0}")]
    MissingOpeningParen(&'static str),
    #[error("{0} geometry is not closed")]
    Unclosed(&'static str),
    #[error("{0} geometry is empty")]
    Empty(&'static str),
    #[error("Expected {expected} coordinate components, found {found}")]
    Arity { expected: usize, found: usize },
    #[error("Invalid number `{0}`")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[wasm_bindgen]
/// The components of a `POINT` exactly as written in the WKT string.
///
/// The tokens are only checked to consist of numeric characters; use
/// [`WktPoint::to_coord`] to get a finite coordinate.
pub struct WktPoint {
    lon: String,
    lat: String,
}

#[wasm_bindgen]
impl WktPoint {
    pub fn lon(&self) -> String {
        self.lon.clone()
    }

    pub fn lat(&self) -> String {
        self.lat.clone()
    }

    /// Converts both components, returning nothing unless both are finite.
    #[wasm_bindgen(js_name = toCoord)]
    pub fn to_coord(&self) -> Option<Coord> {
        Coord::finite(parse_number(&self.lon)?, parse_number(&self.lat)?)
    }
}

impl WktPoint {
    pub fn raw(&self) -> (&str, &str) {
        (&self.lon, &self.lat)
    }
}

/// Runs `parse` on every occurrence of `keyword` and returns the first
/// success, or the error of the first occurrence.
fn first_match<'a, T>(
    wkt: &'a str,
    keyword: &'static str,
    parse: impl Fn(&'a str) -> Result<T, WktError>,
) -> Result<T, WktError> {
    let mut first_error = None;
    for scanner in Scanner::find_all(wkt, keyword) {
        match scanner.body(keyword).and_then(&parse) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }
    Err(first_error.unwrap_or(WktError::MissingKeyword(keyword)))
}

/// Parses the first `POINT(lon lat)` in `wkt`.
pub fn parse_point(wkt: &str) -> Result<WktPoint, WktError> {
    first_match(wkt, POINT, |body| {
        let tokens: Vec<&str> = body.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(WktError::Arity {
                expected: 2,
                found: tokens.len(),
            });
        }
        if let Some(token) = tokens.iter().find(|token| !is_numeric_token(token)) {
            return Err(WktError::InvalidNumber(token.to_string()));
        }
        Ok(WktPoint {
            lon: tokens[0].into(),
            lat: tokens[1].into(),
        })
    })
}

/// Returns the raw contents between the parentheses of the first
/// `LINESTRING(...)` in `wkt`.
fn line_string_body(wkt: &str) -> Result<&str, WktError> {
    first_match(wkt, LINESTRING, Ok)
}

/// Parses a single `lon lat` pair; further components are ignored.
fn parse_pair(pair: &str) -> Result<Coord, WktError> {
    let parts: Vec<&str> = pair.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(WktError::Arity {
            expected: 2,
            found: parts.len(),
        });
    }
    let number = |token: &str| {
        parse_number(token).ok_or_else(|| WktError::InvalidNumber(token.to_string()))
    };
    Ok(Coord::new(number(parts[0])?, number(parts[1])?))
}

/// Parses the first `LINESTRING(...)` in `wkt`, rejecting it if any
/// coordinate pair is invalid.
pub fn parse_line_string(wkt: &str) -> Result<Vec<Coord>, WktError> {
    line_string_body(wkt)?
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(parse_pair)
        .collect()
}

/// Extracts the point of a `POINT` geometry; nothing if there is none.
pub fn extract_point_from_wkt(wkt: &str) -> Option<WktPoint> {
    if wkt.is_empty() {
        return None;
    }
    parse_point(wkt)
        .map_err(|err| {
            debug_log!("no point in {:?}: {}", wkt, err);
        })
        .ok()
}

/// Extracts the coordinates of a `LINESTRING` geometry, dropping invalid
/// pairs.
pub fn extract_line_string_coordinates(wkt: &str) -> Vec<Coord> {
    if wkt.is_empty() {
        return Vec::new();
    }
    let body = match line_string_body(wkt) {
        Ok(body) => body,
        Err(err) => {
            debug_log!("no linestring in {:?}: {}", wkt, err);
            return Vec::new();
        }
    };
    body.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            parse_pair(pair)
                .map_err(|err| {
                    debug_log!("skipping pair {:?}: {}", pair, err);
                })
                .ok()
        })
        .collect()
}

/// Renders the pairs of a `LINESTRING` one per line, keeping each pair as
/// written (`lon lat`, space separated).
///
/// This is a display form; [`crate::text::parse_coordinate_text`] expects a
/// comma between longitude and latitude and will not read it back. Use
/// [`crate::text::format_coordinate_text`] for an editable block.
pub fn format_line_string_for_editor(wkt: &str) -> String {
    match line_string_body(wkt) {
        Ok(body) => body.split(',').map(str::trim).collect::<Vec<_>>().join("\n"),
        Err(_) => String::new(),
    }
}

/// Renders `POINT(lon lat)`.
pub fn to_point_wkt(coord: Coord) -> String {
    format!("POINT({} {})", coord.lon(), coord.lat())
}

/// Renders `LINESTRING(lon lat, ...)`, or nothing below two coordinates.
pub fn to_line_string_wkt(coordinates: &[Coord]) -> Option<String> {
    if coordinates.len() < 2 {
        return None;
    }
    let pairs: Vec<String> = coordinates
        .iter()
        .map(|coord| format!("{} {}", coord.lon(), coord.lat()))
        .collect();
    Some(format!("LINESTRING({})", pairs.join(", ")))
}
