use geo::geometry as geo;
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
#[wasm_bindgen]
/// Geographic coordinate in degrees, stored as x = longitude, y = latitude.
pub struct Coord(geo::Coord<f64>);

#[wasm_bindgen]
impl Coord {
    #[wasm_bindgen(constructor)]
    pub fn new(lon: f64, lat: f64) -> Coord {
        Coord(geo::Coord { x: lon, y: lat })
    }

    pub fn lon(&self) -> f64 {
        self.0.x
    }

    pub fn lat(&self) -> f64 {
        self.0.y
    }

    /// Whether both components are finite numbers.
    #[wasm_bindgen(js_name = isFinite)]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl Coord {
    /// Builds a coordinate only if both components are finite.
    pub fn finite(lon: f64, lat: f64) -> Option<Coord> {
        let coord = Coord::new(lon, lat);
        if coord.is_finite() {
            Some(coord)
        } else {
            None
        }
    }
}

impl From<geo::Coord<f64>> for Coord {
    fn from(value: geo::Coord<f64>) -> Coord {
        Coord(value)
    }
}

impl From<Coord> for geo::Coord<f64> {
    fn from(value: Coord) -> geo::Coord<f64> {
        value.0
    }
}

impl From<Coord> for geo::Point<f64> {
    fn from(value: Coord) -> geo::Point<f64> {
        geo::Point(value.0)
    }
}

#[cfg(test)]
/// Create a geographic coordinate.
macro_rules! coord {
    (lon: $lon:expr, lat: $lat:expr $(,)* ) => {
        crate::geo_types::Coord::new($lon, $lat)
    };
}

#[cfg(test)]
pub(crate) use coord;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite() {
        assert_eq!(Coord::finite(1.0, 2.0), Some(coord!(lon: 1.0, lat: 2.0)));
        assert_eq!(Coord::finite(f64::NAN, 2.0), None);
        assert_eq!(Coord::finite(1.0, f64::INFINITY), None);
        assert!(!Coord::new(f64::NEG_INFINITY, 0.0).is_finite());
    }

    #[test]
    fn axis_order() {
        let coord = coord!(lon: 95.65, lat: 16.733333);
        let inner: geo::Coord<f64> = coord.into();
        assert_eq!(inner.x, 95.65);
        assert_eq!(inner.y, 16.733333);
        assert_eq!(coord.lon(), 95.65);
        assert_eq!(coord.lat(), 16.733333);
    }
}
