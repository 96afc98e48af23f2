//! Great-circle measurements over coordinate sequences.

use crate::geo_types::Coord;

/// Earth radius used for all distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates in meters.
///
/// Degree ranges are not validated. Identical coordinates yield exactly 0.
pub fn haversine_distance(from: Coord, to: Coord) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.lon().to_radians() - from.lon().to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Distance of each consecutive pair, so the result has one element less than
/// `coordinates`, or none below two coordinates.
pub fn compute_segment_lengths(coordinates: &[Coord]) -> Vec<f64> {
    coordinates
        .windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .collect()
}

/// Sum of segment lengths.
pub fn total_length(segment_lengths: &[f64]) -> f64 {
    segment_lengths.iter().sum()
}
