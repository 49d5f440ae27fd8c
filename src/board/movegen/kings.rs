//! King move generation, including castling.

use crate::board::geometry::{castle_geometry, step, KING_OFFSETS};
use crate::board::position::Position;
use crate::board::types::{Color, Move, PieceKind, Square};

impl Position {
    pub(super) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for dir in KING_OFFSETS {
            let Some(to) = step(from, dir) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::normal(from, to, PieceKind::King)),
                Some(target) if target.color != color => {
                    moves.push(Move::capture(from, to, PieceKind::King, target.kind));
                }
                Some(_) => {}
            }
        }

        self.generate_castles(from, color, moves);
    }

    /// Castling requires the right, the king on its home square and not
    /// in check, the path between king and rook empty, and every square
    /// the king crosses (destination included) unattacked.
    fn generate_castles(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let enemy = color.opponent();
        for kingside in [true, false] {
            if !self.castling.has(color, kingside) {
                continue;
            }
            let geometry = castle_geometry(color, kingside);
            if from != geometry.king_from {
                continue;
            }
            let rook_ok = self
                .piece_at(geometry.rook_from)
                .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
            if !rook_ok {
                continue;
            }
            if geometry
                .must_be_empty
                .iter()
                .any(|&sq| self.piece_at(sq).is_some())
            {
                continue;
            }
            if self.is_square_attacked(geometry.king_from, enemy) {
                continue;
            }
            if geometry
                .must_be_safe
                .iter()
                .any(|&sq| self.is_square_attacked(sq, enemy))
            {
                continue;
            }
            moves.push(Move::castle(geometry.king_from, geometry.king_to, kingside));
        }
    }
}
