//! Immutable record of one committed half-move.
//!
//! Records carry full pre-move snapshots of the pieces they touched so
//! `Board::undo` can restore occupancy, `has_moved` flags and king check
//! state exactly, including for castling, en passant and promotion. The
//! history is append-only during play and popped from the tail on undo.

use crate::game_state::chess_types::{Coord, PieceKind};
use crate::game_state::piece::Piece;

/// Rook relocation paired with a castling king move.
#[derive(Debug, Clone)]
pub struct CastlingRook {
    pub from: Coord,
    pub to: Coord,
    /// Snapshot of the rook before it was relocated.
    pub rook: Piece,
}

#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    /// The mover as it was before the move (flags included).
    pub piece_moved: Piece,
    /// Captured piece and the square it stood on. The coordinate differs
    /// from `to` for en passant captures.
    pub captured: Option<(Piece, Coord)>,
    pub castling_rook: Option<CastlingRook>,
    pub promoted_to: Option<PieceKind>,
}

impl MoveRecord {
    #[inline]
    pub fn pawn_moved(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn
    }

    #[inline]
    pub fn piece_captured(&self) -> bool {
        self.captured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::MoveRecord;
    use crate::game_state::chess_types::{Color, Coord, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn derived_flags_reflect_pawn_and_capture() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Coord::new(6, 4));
        let target = Piece::new(PieceKind::Knight, Color::Black, Coord::new(5, 5));
        let record = MoveRecord {
            from: Coord::new(6, 4),
            to: Coord::new(5, 5),
            piece_moved: pawn,
            captured: Some((target, Coord::new(5, 5))),
            castling_rook: None,
            promoted_to: None,
        };
        assert!(record.pawn_moved());
        assert!(record.piece_captured());

        let quiet = MoveRecord {
            from: Coord::new(7, 6),
            to: Coord::new(5, 5),
            piece_moved: Piece::new(PieceKind::Knight, Color::White, Coord::new(7, 6)),
            captured: None,
            castling_rook: None,
            promoted_to: None,
        };
        assert!(!quiet.pawn_moved());
        assert!(!quiet.piece_captured());
    }
}
