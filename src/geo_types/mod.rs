pub mod coord;
pub use coord::Coord;

pub mod line_string;
pub use line_string::LineString;
