//! Board cell holding at most one piece.
//!
//! A square's coordinate is fixed at board construction; occupancy changes
//! through `place` / `take`, which transfer piece ownership. Rendering
//! concerns such as highlighting live entirely outside the engine.

use crate::game_state::chess_types::Coord;
use crate::game_state::piece::Piece;

#[derive(Debug, Clone)]
pub struct Square {
    row: usize,
    col: usize,
    pub piece: Option<Piece>,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            piece: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    #[inline]
    pub fn contains_piece(&self) -> bool {
        self.piece.is_some()
    }

    /// Places a piece here, updating its position bookkeeping and returning
    /// any opposite-color occupant as captured. Placing onto a same-color
    /// occupant is an API misuse; the incoming piece wins and the resident
    /// is still returned so no piece is ever silently dropped.
    pub fn place(&mut self, mut piece: Piece, lookahead: bool) -> Option<Piece> {
        debug_assert!(
            self.piece
                .as_ref()
                .map_or(true, |resident| !resident.is_same_color(&piece)),
            "placed {:?} onto own {:?} at {}",
            piece.kind,
            self.piece.as_ref().map(|p| p.kind),
            self.coord()
        );
        piece.set_position(self.coord(), lookahead);
        self.piece.replace(piece)
    }

    /// Removes and returns the occupant, if any.
    #[inline]
    pub fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::game_state::chess_types::{Color, Coord, PieceKind};
    use crate::game_state::piece::Piece;

    #[test]
    fn place_returns_captured_opponent() {
        let mut square = Square::new(3, 3);
        let defender = Piece::new(PieceKind::Knight, Color::Black, Coord::new(3, 3));
        assert!(square.place(defender, false).is_none());

        let attacker = Piece::new(PieceKind::Bishop, Color::White, Coord::new(5, 5));
        let captured = square.place(attacker, false).expect("knight is captured");
        assert_eq!(captured.kind, PieceKind::Knight);
        assert_eq!(square.piece.as_ref().map(|p| p.kind), Some(PieceKind::Bishop));
    }

    #[test]
    fn place_updates_piece_coordinates() {
        let mut square = Square::new(2, 6);
        let rook = Piece::new(PieceKind::Rook, Color::White, Coord::new(7, 0));
        square.place(rook, false);
        let resident = square.piece.as_ref().unwrap();
        assert_eq!(resident.coord(), Coord::new(2, 6));
        assert!(resident.has_moved);
    }
}
