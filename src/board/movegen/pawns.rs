//! Pawn move generation.

use crate::board::geometry::{step, EAST, WEST};
use crate::board::position::Position;
use crate::board::types::{Color, Move, PieceKind, Square, PROMOTION_PIECES};

impl Position {
    pub(super) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let start_rank = match color {
            Color::White => 1,
            Color::Black => 6,
        };
        let promotion_rank = match color {
            Color::White => 7,
            Color::Black => 0,
        };

        // Single push, and a double push from the starting rank
        if let Some(to) = step(from, dir) {
            if self.piece_at(to).is_none() {
                if to.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, to, promo, None));
                    }
                } else {
                    moves.push(Move::normal(from, to, PieceKind::Pawn));
                    if from.rank() == start_rank {
                        if let Some(two) = step(to, dir) {
                            if self.piece_at(two).is_none() {
                                moves.push(Move::normal(from, two, PieceKind::Pawn));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures, including en passant
        for side in [EAST, WEST] {
            let Some(to) = step(from, dir + side) else {
                continue;
            };
            if let Some(target) = self.piece_at(to) {
                if target.color != color {
                    if to.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion(from, to, promo, Some(target.kind)));
                        }
                    } else {
                        moves.push(Move::capture(from, to, PieceKind::Pawn, target.kind));
                    }
                }
            } else if self.en_passant == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }
    }
}
