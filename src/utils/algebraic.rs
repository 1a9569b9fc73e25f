//! Square index <-> algebraic coordinate conversion.
//!
//! Converts between human-readable square names (for example `e4`) and the
//! internal `0..=63` indices. The conversion is total and bijective over the
//! 64 valid squares; everything else is rejected.

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert an algebraic square name (for example "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its algebraic name (for example "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(square));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn corner_squares_convert() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 7);
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 56);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
    }

    #[test]
    fn conversion_is_bijective_over_all_squares() {
        for sq in 0..64u8 {
            let name = square_to_algebraic(sq).expect("valid square should convert");
            assert_eq!(algebraic_to_square(&name).expect("name should parse"), sq);
        }
    }

    #[test]
    fn bad_names_are_rejected() {
        for bad in ["", "e", "e44", "i4", "a0", "a9", "E4", "44"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(square_to_algebraic(64).is_err());
    }
}
