//! Central mutable board state.
//!
//! `Board` owns the 8x8 square grid, the side to move, the move history and
//! the terminal-state bookkeeping, and drives move application, undo and
//! draw declarations. The search and the legality filter explore candidate
//! moves through the scoped `probe` guard, which mutates this same board in
//! place and restores it exactly on every exit path; at any instant exactly
//! one logical position exists.
//!
//! The side to move and the game mode are ordinary fields consulted
//! explicitly by move generation and search, never ambient state.

use crate::chess_errors::{ChessError, ChessResult};
use crate::events::{EventSink, GameEvent};
use crate::game_state::chess_types::{Color, Coord, EndReason, GameMode, PieceKind};
use crate::game_state::move_record::{CastlingRook, MoveRecord};
use crate::game_state::piece::Piece;
use crate::game_state::square::Square;
use crate::move_generation::move_generator::legal_moves;
use crate::rules::check_tracking::refresh_check_state;
use crate::rules::end_of_game::check_end_of_game;

/// Saved state for one in-flight probe; consumed by `end_probe`.
pub struct ProbeUndo {
    from: Coord,
    to: Coord,
    mover: Option<Piece>,
    captured: Option<Piece>,
    king_states: Vec<(Coord, bool, Vec<Coord>)>,
    prev_lookahead: bool,
}

pub struct Board {
    grid: Vec<Vec<Square>>,
    pub side_to_move: Color,
    pub mode: GameMode,
    /// Set while a probe is open so flag updates stay reversible and en
    /// passant is never simulated inside the search.
    pub lookahead: bool,
    pub history: Vec<MoveRecord>,
    pub captured_pieces: Vec<Piece>,
    pub game_over: bool,
    pub end_reason: Option<EndReason>,
    move_undone: bool,
    draw_declared: bool,
    sink: Option<Box<dyn EventSink>>,
}

impl Board {
    /// An empty board with no pieces; used for custom positions in tests
    /// and analysis.
    pub fn empty(mode: GameMode) -> Self {
        let grid = (0..8)
            .map(|row| (0..8).map(|col| Square::new(row, col)).collect())
            .collect();
        Self {
            grid,
            side_to_move: Color::White,
            mode,
            lookahead: false,
            history: Vec::new(),
            captured_pieces: Vec::new(),
            game_over: false,
            end_reason: None,
            move_undone: false,
            draw_declared: false,
            sink: None,
        }
    }

    /// A board with the standard starting position, White to move.
    pub fn new_game(mode: GameMode) -> Self {
        let mut board = Self::empty(mode);
        board.setup_starting_position();
        board.emit(GameEvent::game_started());
        board
    }

    /// Resets this board to the starting position, clearing history and
    /// captured pieces, and announces a new game to the event sink.
    pub fn reset(&mut self) {
        for row in 0..8 {
            for col in 0..8 {
                self.grid[row][col].take();
            }
        }
        self.side_to_move = Color::White;
        self.lookahead = false;
        self.history.clear();
        self.captured_pieces.clear();
        self.game_over = false;
        self.end_reason = None;
        self.move_undone = false;
        self.draw_declared = false;
        self.setup_starting_position();
        self.emit(GameEvent::game_started());
    }

    fn setup_starting_position(&mut self) {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in back_rank.iter().enumerate() {
            self.put_piece(kind, Color::Black, Coord::new(0, col));
            self.put_piece(kind, Color::White, Coord::new(7, col));
        }
        for col in 0..8 {
            self.put_piece(PieceKind::Pawn, Color::Black, Coord::new(1, col));
            self.put_piece(PieceKind::Pawn, Color::White, Coord::new(6, col));
        }
    }

    /// Creates a fresh, unmoved piece at `at`, replacing any occupant.
    pub fn put_piece(&mut self, kind: PieceKind, color: Color, at: Coord) {
        self.grid[at.row][at.col].piece = Some(Piece::new(kind, color, at));
    }

    /// Routes `GameStarted` / `GameWon` notifications to `sink`. The sink is
    /// fire-and-forget: the board never reads anything back from it.
    pub fn set_event_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    pub fn take_event_sink(&mut self) -> Option<Box<dyn EventSink>> {
        self.sink.take()
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_event(&event);
        }
    }

    #[inline]
    pub fn square(&self, at: Coord) -> &Square {
        &self.grid[at.row][at.col]
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.grid[at.row][at.col].piece.as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, at: Coord) -> Option<&mut Piece> {
        self.grid[at.row][at.col].piece.as_mut()
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, at: Coord) -> Option<Piece> {
        self.grid[at.row][at.col].take()
    }

    #[inline]
    pub(crate) fn place_piece(&mut self, at: Coord, piece: Piece) -> Option<Piece> {
        let lookahead = self.lookahead;
        self.grid[at.row][at.col].place(piece, lookahead)
    }

    /// Writes a piece snapshot back into a slot without touching its
    /// position bookkeeping. Restore path only.
    #[inline]
    fn restore_piece(&mut self, at: Coord, piece: Piece) {
        self.grid[at.row][at.col].piece = Some(piece);
    }

    /// Every coordinate in row-major order. Iteration order matters: move
    /// selection tie-breaks follow it.
    pub fn all_coords() -> impl Iterator<Item = Coord> {
        (0..8).flat_map(|row| (0..8).map(move |col| Coord::new(row, col)))
    }

    /// Locates the king of `color`.
    pub fn king_coord(&self, color: Color) -> Option<Coord> {
        Self::all_coords().find(|&c| {
            self.piece_at(c)
                .map_or(false, |p| p.kind == PieceKind::King && p.color == color)
        })
    }

    /// Asserts the two board invariants search correctness depends on:
    /// exactly one king per color, and agreement between each piece's
    /// stored coordinates and the square it sits on.
    pub fn assert_consistent(&self) -> ChessResult<()> {
        let mut kings = [0usize; 2];
        for at in Self::all_coords() {
            if let Some(piece) = self.piece_at(at) {
                if piece.coord() != at {
                    return Err(ChessError::InconsistentState(format!(
                        "piece at {at} believes it is at {}",
                        piece.coord()
                    )));
                }
                if piece.kind == PieceKind::King {
                    kings[piece.color.index()] += 1;
                }
            }
        }
        if !self.game_over && kings != [1, 1] {
            return Err(ChessError::InconsistentState(format!(
                "expected one king per color, found {kings:?}"
            )));
        }
        Ok(())
    }

    // --- Probe (make/unmake) machinery -----------------------------------

    /// Opens a probe: relocates the piece on `from` to `to` (capturing any
    /// occupant) under lookahead rules and snapshots everything needed to
    /// unwind, including both kings' check state. Callers must pass the
    /// returned token to `end_probe`; prefer `probe` which cannot forget.
    pub fn begin_probe(&mut self, from: Coord, to: Coord) -> ProbeUndo {
        let prev_lookahead = self.lookahead;
        self.lookahead = true;

        let king_states = Self::all_coords()
            .filter_map(|c| {
                self.piece_at(c).and_then(|p| {
                    (p.kind == PieceKind::King).then(|| (c, p.in_check, p.threats.clone()))
                })
            })
            .collect();

        // A probe on an empty source square degenerates to a no-op.
        let moving = self.take_piece(from);
        let mover = moving.clone();
        let captured = moving.and_then(|piece| self.place_piece(to, piece));

        ProbeUndo {
            from,
            to,
            mover,
            captured,
            king_states,
            prev_lookahead,
        }
    }

    /// Closes a probe, restoring occupancy, piece flags and king check
    /// state byte for byte.
    pub fn end_probe(&mut self, undo: ProbeUndo) {
        let ProbeUndo {
            from,
            to,
            mover,
            captured,
            king_states,
            prev_lookahead,
        } = undo;

        if let Some(mover) = mover {
            self.take_piece(to);
            self.restore_piece(from, mover);
        }
        if let Some(captured) = captured {
            self.restore_piece(to, captured);
        }

        for (at, in_check, threats) in king_states {
            if let Some(piece) = self.piece_at_mut(at) {
                if piece.kind == PieceKind::King {
                    piece.in_check = in_check;
                    piece.threats = threats;
                }
            }
        }

        self.lookahead = prev_lookahead;
    }

    /// Runs `f` against the board with the candidate move applied, then
    /// restores the prior position regardless of how `f` exits with a
    /// value. This is the only sanctioned way for the legality filter and
    /// the search to look ahead.
    pub fn probe<T>(&mut self, from: Coord, to: Coord, f: impl FnOnce(&mut Board) -> T) -> T {
        let undo = self.begin_probe(from, to);
        let out = f(self);
        self.end_probe(undo);
        out
    }

    // --- Move commit ------------------------------------------------------

    /// Legal destination squares for the piece on `at`: its pseudo-legal
    /// moves minus everything that would leave its own king attacked.
    pub fn legal_moves(&mut self, at: Coord) -> Vec<Coord> {
        legal_moves(self, at)
    }

    /// Commits one half-move. Rejections leave the board untouched:
    /// `IllegalMoveRequested` when the move is not currently legal,
    /// `PromotionPending` when a pawn reaches the far rank and `promotion`
    /// is `None`. Returns the captured piece, if any, for display.
    pub fn apply_move(
        &mut self,
        from: Coord,
        to: Coord,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Option<Piece>> {
        if self.game_over {
            return Err(ChessError::IllegalMoveRequested { from, to });
        }

        let (mover_kind, mover_color, mover_snapshot) = match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {
                (piece.kind, piece.color, piece.clone())
            }
            _ => return Err(ChessError::IllegalMoveRequested { from, to }),
        };

        if !self.legal_moves(from).contains(&to) {
            return Err(ChessError::IllegalMoveRequested { from, to });
        }

        let promotion_row = mover_snapshot.promotion_row();
        let promoting = mover_kind == PieceKind::Pawn && to.row == promotion_row;
        let promotion_kind = if promoting {
            match promotion {
                None => return Err(ChessError::PromotionPending { from, to }),
                Some(
                    kind @ (PieceKind::Queen
                    | PieceKind::Knight
                    | PieceKind::Bishop
                    | PieceKind::Rook),
                ) => Some(kind),
                Some(_) => return Err(ChessError::InvalidPromotion),
            }
        } else {
            None
        };

        // A double-stepped pawn stays capturable en passant only until the
        // next half-move commits; every other pawn's window closes now.
        if let Some(last_to) = self.history.last().map(|record| record.to) {
            for at in Self::all_coords() {
                if at == last_to {
                    continue;
                }
                if let Some(piece) = self.piece_at_mut(at) {
                    if piece.kind == PieceKind::Pawn {
                        piece.en_passant_possible = false;
                    }
                }
            }
        }

        let mover = self.take_piece(from).ok_or_else(|| {
            ChessError::InconsistentState(format!("source square {from} emptied during validation"))
        })?;

        // En passant: a pawn sliding diagonally onto an empty square takes
        // the pawn it passed.
        let mut captured_at = to;
        let mut captured = None;
        if mover_kind == PieceKind::Pawn && from.col != to.col && !self.square(to).contains_piece()
        {
            let victim_row = if mover_snapshot.on_opposite_side {
                to.row - 1
            } else {
                to.row + 1
            };
            captured_at = Coord::new(victim_row, to.col);
            captured = self.take_piece(captured_at);
        }

        if let Some(direct) = self.place_piece(to, mover) {
            captured_at = to;
            captured = Some(direct);
        }
        if let Some(piece) = captured.clone() {
            self.captured_pieces.push(piece);
        }

        // A king travelling two columns is castling; bring the paired rook
        // alongside it.
        let mut castling_rook = None;
        if mover_kind == PieceKind::King && from.col.abs_diff(to.col) > 1 {
            castling_rook = self.relocate_castling_rook(to);
            if let Some(piece) = self.piece_at_mut(to) {
                piece.has_moved = true;
            }
        }

        if let Some(kind) = promotion_kind {
            self.put_piece(kind, mover_color, to);
        }

        refresh_check_state(self);

        self.history.push(MoveRecord {
            from,
            to,
            piece_moved: mover_snapshot,
            captured: captured.clone().map(|piece| (piece, captured_at)),
            castling_rook,
            promoted_to: promotion_kind,
        });
        self.move_undone = false;
        self.side_to_move = self.side_to_move.opposite();

        check_end_of_game(self);
        if self.end_reason == Some(EndReason::Checkmate) {
            self.emit(GameEvent::game_won(mover_color));
        }

        Ok(captured)
    }

    fn relocate_castling_rook(&mut self, king_to: Coord) -> Option<CastlingRook> {
        let (rook_from, rook_to) = if king_to.col == 6 {
            (Coord::new(king_to.row, 7), Coord::new(king_to.row, 5))
        } else {
            (Coord::new(king_to.row, 0), Coord::new(king_to.row, 3))
        };

        let is_rook = self
            .piece_at(rook_from)
            .map_or(false, |p| p.kind == PieceKind::Rook);
        if !is_rook {
            return None;
        }

        let snapshot = self.piece_at(rook_from).cloned()?;
        let rook = self.take_piece(rook_from)?;
        self.place_piece(rook_to, rook);
        if let Some(piece) = self.piece_at_mut(rook_to) {
            piece.has_moved = true;
        }

        Some(CastlingRook {
            from: rook_from,
            to: rook_to,
            rook: snapshot,
        })
    }

    // --- Undo -------------------------------------------------------------

    /// Whether `undo` would do anything right now. Two-player games allow
    /// one undo at a time; against the computer the human's and the
    /// engine's half-moves must both be present so they come off together.
    pub fn can_undo(&self) -> bool {
        if self.draw_declared {
            return false;
        }
        match self.mode {
            GameMode::TwoPlayer => !self.history.is_empty() && !self.move_undone,
            GameMode::VsComputer { human_color } => {
                if self.history.is_empty() || self.move_undone {
                    return false;
                }
                match human_color {
                    Color::White => self.history.len() % 2 == 0,
                    Color::Black => self.history.len() > 1 && self.history.len() % 2 == 1,
                }
            }
        }
    }

    /// Undoes the last half-move (two against the computer, so turn parity
    /// is preserved). Check state is recomputed from the restored position
    /// rather than snapshotted. Returns false if no eligible move exists.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }

        let record = match self.history.pop() {
            Some(record) => record,
            None => return false,
        };
        self.undo_record(record);

        match self.mode {
            GameMode::TwoPlayer => {
                self.move_undone = true;
                self.side_to_move = self.side_to_move.opposite();
            }
            GameMode::VsComputer { .. } => {
                // can_undo's parity rule guarantees the paired half-move.
                if let Some(second) = self.history.pop() {
                    self.undo_record(second);
                }
            }
        }

        refresh_check_state(self);
        self.game_over = false;
        self.end_reason = None;
        check_end_of_game(self);
        true
    }

    fn undo_record(&mut self, record: MoveRecord) {
        self.take_piece(record.to);
        if let Some(castling) = record.castling_rook {
            self.take_piece(castling.to);
            self.restore_piece(castling.from, castling.rook);
        }
        self.restore_piece(record.from, record.piece_moved);
        if let Some((piece, at)) = record.captured {
            self.restore_piece(at, piece);
            self.captured_pieces.pop();
        }
    }

    // --- Draw declarations ------------------------------------------------

    /// Fifty-move rule window: at least 100 half-moves recorded and none of
    /// the last 100 moved a pawn or captured a piece. An offer, not a
    /// forced termination.
    pub fn can_declare_draw(&self) -> bool {
        if self.game_over || self.history.len() < 100 {
            return false;
        }
        self.history
            .iter()
            .rev()
            .take(100)
            .all(|record| !record.pawn_moved() && !record.piece_captured())
    }

    /// Claims the fifty-move draw if the window is open.
    pub fn declare_fifty_move_draw(&mut self) -> bool {
        if !self.can_declare_draw() {
            return false;
        }
        self.game_over = true;
        self.draw_declared = true;
        self.end_reason = Some(EndReason::DrawFiftyMove);
        true
    }

    /// Ends the game as a draw agreed between the players.
    pub fn declare_draw(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        self.draw_declared = true;
        self.end_reason = Some(EndReason::DrawDeclared);
        true
    }

    /// Terminal status as a pair, for boundary callers.
    pub fn is_game_over(&self) -> (bool, Option<EndReason>) {
        (self.game_over, self.end_reason)
    }
}
