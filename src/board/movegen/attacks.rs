//! Attacked-square detection.

use crate::board::geometry::{
    knight_target, step, DIAGONAL_DIRS, KING_OFFSETS, KNIGHT_OFFSETS, NORTH_EAST, NORTH_WEST,
    ORTHOGONAL_DIRS, SOUTH_EAST, SOUTH_WEST,
};
use crate::board::position::Position;
use crate::board::types::{Color, PieceKind, Square};

impl Position {
    /// Is `sq` attacked by any piece of `by_color`?
    ///
    /// Checks pawns, knights, and the king by offset, then walks the
    /// orthogonal and diagonal rays until a blocker is hit.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        // A pawn of by_color attacks sq from one square diagonally
        // behind it, relative to its advance direction.
        let pawn_origins = match by_color {
            Color::White => [SOUTH_WEST, SOUTH_EAST],
            Color::Black => [NORTH_WEST, NORTH_EAST],
        };
        for dir in pawn_origins {
            if let Some(from) = step(sq, dir) {
                if let Some(piece) = self.piece_at(from) {
                    if piece.kind == PieceKind::Pawn && piece.color == by_color {
                        return true;
                    }
                }
            }
        }

        for offset in KNIGHT_OFFSETS {
            if let Some(from) = knight_target(sq, offset) {
                if let Some(piece) = self.piece_at(from) {
                    if piece.kind == PieceKind::Knight && piece.color == by_color {
                        return true;
                    }
                }
            }
        }

        for dir in KING_OFFSETS {
            if let Some(from) = step(sq, dir) {
                if let Some(piece) = self.piece_at(from) {
                    if piece.kind == PieceKind::King && piece.color == by_color {
                        return true;
                    }
                }
            }
        }

        if self.ray_attack(sq, by_color, &ORTHOGONAL_DIRS, PieceKind::Rook) {
            return true;
        }
        self.ray_attack(sq, by_color, &DIAGONAL_DIRS, PieceKind::Bishop)
    }

    /// Walk each ray until a blocker; a matching slider or queen attacks.
    fn ray_attack(&self, sq: Square, by_color: Color, dirs: &[i32], slider: PieceKind) -> bool {
        for &dir in dirs {
            let mut current = sq;
            while let Some(next) = step(current, dir) {
                if let Some(piece) = self.piece_at(next) {
                    if piece.color == by_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    /// Is `color`'s king currently attacked?
    ///
    /// A board without that king (only possible through direct
    /// construction) is reported as not in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }
}
