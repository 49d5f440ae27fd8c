//! Knight move generation.

use crate::board::geometry::{knight_target, KNIGHT_OFFSETS};
use crate::board::position::Position;
use crate::board::types::{Color, Move, PieceKind, Square};

impl Position {
    pub(super) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for offset in KNIGHT_OFFSETS {
            let Some(to) = knight_target(from, offset) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::normal(from, to, PieceKind::Knight)),
                Some(target) if target.color != color => {
                    moves.push(Move::capture(from, to, PieceKind::Knight, target.kind));
                }
                Some(_) => {}
            }
        }
    }
}
