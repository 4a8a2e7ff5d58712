//! Algebraic coordinate parsing and formatting.
//!
//! Squares use the usual `a1`..`h8` form; moves are long algebraic,
//! source square then destination with an optional promotion suffix
//! (`e7e8q`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Coord, PieceKind};

pub fn parse_square(text: &str) -> ChessResult<Coord> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    }
    let col = (file - b'a') as usize;
    let row = (b'8' - rank) as usize;
    Ok(Coord::new(row, col))
}

pub fn format_square(at: Coord) -> String {
    at.to_string()
}

/// Parses a long algebraic move such as `e2e4` or `a7a8q`.
pub fn parse_move(text: &str) -> ChessResult<(Coord, Coord, Option<PieceKind>)> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(text.to_string()));
    }
    let from = parse_square(&text[..2])?;
    let to = parse_square(&text[2..4])?;
    let promotion = match &text[4..] {
        "" => None,
        "q" => Some(PieceKind::Queen),
        "n" => Some(PieceKind::Knight),
        "b" => Some(PieceKind::Bishop),
        "r" => Some(PieceKind::Rook),
        _ => return Err(ChessError::InvalidAlgebraic(text.to_string())),
    };
    Ok((from, to, promotion))
}

pub fn format_move(from: Coord, to: Coord, promotion: Option<PieceKind>) -> String {
    let suffix = match promotion {
        Some(PieceKind::Queen) => "q",
        Some(PieceKind::Knight) => "n",
        Some(PieceKind::Bishop) => "b",
        Some(PieceKind::Rook) => "r",
        _ => "",
    };
    format!("{from}{to}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::{format_move, parse_move, parse_square};
    use crate::game_state::chess_types::{Coord, PieceKind};

    #[test]
    fn squares_parse_across_the_board() {
        assert_eq!(parse_square("a1").unwrap(), Coord::new(7, 0));
        assert_eq!(parse_square("h8").unwrap(), Coord::new(0, 7));
        assert_eq!(parse_square("e4").unwrap(), Coord::new(4, 4));
        assert!(parse_square("i1").is_err());
        assert!(parse_square("a9").is_err());
        assert!(parse_square("e").is_err());
    }

    #[test]
    fn moves_round_trip_with_and_without_promotion() {
        let (from, to, promotion) = parse_move("e2e4").unwrap();
        assert_eq!(format_move(from, to, promotion), "e2e4");

        let (from, to, promotion) = parse_move("a7a8q").unwrap();
        assert_eq!(promotion, Some(PieceKind::Queen));
        assert_eq!(format_move(from, to, promotion), "a7a8q");

        assert!(parse_move("e2e9").is_err());
        assert!(parse_move("e2e4x").is_err());
    }
}
