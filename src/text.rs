//! Free-text coordinate blocks as typed into the road form.
//!
//! One `lon, lat` pair per line; `;` works as a line break too.

use crate::debug::debug_log;
use crate::geo_types::Coord;

/// Parses a numeric component, accepting only finite values.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Converts a typed component the way the dashboard's number inputs do: an
/// empty component is `0` and unsigned `0x`/`0o`/`0b` integer literals are
/// accepted. Only finite values are returned.
fn parse_typed_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Some(0.0);
    }
    let radix = match value.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return parse_number(value),
    };
    let digits = &value[2..];
    if digits.is_empty() {
        return None;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |number, digit| {
            digit
                .to_digit(radix)
                .map(|digit| number * f64::from(radix) + f64::from(digit))
        })
        .filter(|number| number.is_finite())
}

/// Parses a free-text coordinate block.
///
/// Blank lines, lines without a comma and lines whose first two components
/// are not finite numbers are skipped. An empty component reads as `0`.
/// Never fails; the result may be empty.
pub fn parse_coordinate_text(input: &str) -> Vec<Coord> {
    input
        .split(|c: char| c == '\n' || c == ';')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_coordinate_line)
        .collect()
}

fn parse_coordinate_line(line: &str) -> Option<Coord> {
    let mut parts = line.split(',');
    let (lon, lat) = match (parts.next(), parts.next()) {
        (Some(lon), Some(lat)) => (lon, lat),
        _ => {
            debug_log!("skipping coordinate line without comma: {:?}", line);
            return None;
        }
    };
    match (parse_typed_number(lon), parse_typed_number(lat)) {
        (Some(lon), Some(lat)) => Some(Coord::new(lon, lat)),
        _ => {
            debug_log!("skipping coordinate line with invalid numbers: {:?}", line);
            None
        }
    }
}

/// Renders coordinates as a free-text block, one `lon, lat` per line.
///
/// The output parses back into the same coordinates.
pub fn format_coordinate_text(coordinates: &[Coord]) -> String {
    coordinates
        .iter()
        .map(|coord| format!("{}, {}", coord.lon(), coord.lat()))
        .collect::<Vec<_>>()
        .join("\n")
}
