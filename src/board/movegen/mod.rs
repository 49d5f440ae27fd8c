//! Move generation: pseudo-legal generation plus the legality filter.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use super::position::Position;
use super::types::{Move, PieceKind};

impl Position {
    /// Generate pseudo-legal moves for the side to move: every move that
    /// obeys piece movement rules, without checking whether it leaves the
    /// mover's own king in check. Output order is unspecified.
    #[must_use]
    pub fn generate_pseudo_legal(&self) -> Vec<Move> {
        let color = self.side_to_move;
        let mut moves = Vec::with_capacity(48);
        for (from, piece) in self.occupied() {
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                PieceKind::Knight => self.generate_knight_moves(from, color, &mut moves),
                PieceKind::King => self.generate_king_moves(from, color, &mut moves),
                kind => self.generate_slider_moves(from, color, kind, &mut moves),
            }
        }
        moves
    }

    /// Generate all legal moves for the side to move.
    ///
    /// A pseudo-legal move survives if the mover's king is not in check
    /// after applying it.
    #[must_use]
    pub fn generate_moves(&self) -> Vec<Move> {
        let mover = self.side_to_move;
        self.generate_pseudo_legal()
            .into_iter()
            .filter(|mv| !self.make_move(mv).is_in_check(mover))
            .collect()
    }

    /// No legal moves while in check.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// No legal moves while not in check.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    /// The standard correctness benchmark for move generation.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| self.make_move(mv).perft(depth - 1))
            .sum()
    }
}
