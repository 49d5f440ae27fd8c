//! Sliding piece move generation (bishop, rook, queen).

use crate::board::geometry::{step, DIAGONAL_DIRS, KING_OFFSETS, ORTHOGONAL_DIRS};
use crate::board::position::Position;
use crate::board::types::{Color, Move, PieceKind, Square};

impl Position {
    pub(super) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        kind: PieceKind,
        moves: &mut Vec<Move>,
    ) {
        let dirs: &[i32] = match kind {
            PieceKind::Bishop => &DIAGONAL_DIRS,
            PieceKind::Rook => &ORTHOGONAL_DIRS,
            _ => &KING_OFFSETS, // queen slides in all eight directions
        };

        for &dir in dirs {
            let mut current = from;
            while let Some(to) = step(current, dir) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::normal(from, to, kind));
                        current = to;
                    }
                    Some(target) if target.color != color => {
                        moves.push(Move::capture(from, to, kind, target.kind));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
