//! Algebraic cell naming: "A1" through "H8".

use crate::game_state::cell::Coord;

/// Parses a two-character algebraic name into a coordinate. The file letter
/// is accepted in either case.
pub fn parse_coord(name: &str) -> Result<Coord, String> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("invalid cell name '{}': expected two characters", name));
    }

    let file = bytes[0].to_ascii_uppercase();
    if !(b'A'..=b'H').contains(&file) {
        return Err(format!("invalid file '{}' in '{}'", bytes[0] as char, name));
    }

    let rank = bytes[1];
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("invalid rank '{}' in '{}'", bytes[1] as char, name));
    }

    Ok(Coord::new((rank - b'0') as i8, (file - b'A' + 1) as i8))
}

/// Formats a coordinate as its algebraic name.
#[inline]
pub fn format_coord(coord: Coord) -> String {
    coord.to_string()
}
