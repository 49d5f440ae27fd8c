//! Piece-square tables (the Tomasz Michniewski "simplified evaluation"
//! set).
//!
//! Tables are written from White's viewpoint and indexed directly by the
//! rank-major square index, so the first row below is rank 1. A Black
//! piece looks up the vertically mirrored square.

pub(crate) const PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    5, 10, 10, -20, -20, 10, 10, 5, //
    5, -5, -10, 0, 0, -10, -5, 5, //
    0, 0, 0, 20, 20, 0, 0, 0, //
    5, 5, 10, 25, 25, 10, 5, 5, //
    10, 10, 20, 30, 30, 20, 10, 10, //
    50, 50, 50, 50, 50, 50, 50, 50, //
    0, 0, 0, 0, 0, 0, 0, 0,
];

pub(crate) const KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, //
    -40, -20, 0, 5, 5, 0, -20, -40, //
    -30, 5, 10, 15, 15, 10, 5, -30, //
    -30, 0, 15, 20, 20, 15, 0, -30, //
    -30, 5, 15, 20, 20, 15, 5, -30, //
    -30, 0, 10, 15, 15, 10, 0, -30, //
    -40, -20, 0, 0, 0, 0, -20, -40, //
    -50, -40, -30, -30, -30, -30, -40, -50,
];

pub(crate) const BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, //
    -10, 5, 0, 0, 0, 0, 5, -10, //
    -10, 10, 10, 10, 10, 10, 10, -10, //
    -10, 0, 10, 10, 10, 10, 0, -10, //
    -10, 5, 5, 10, 10, 5, 5, -10, //
    -10, 0, 5, 10, 10, 5, 0, -10, //
    -10, 0, 0, 0, 0, 0, 0, -10, //
    -20, -10, -10, -10, -10, -10, -10, -20,
];

pub(crate) const ROOK_PST: [i32; 64] = [
    0, 0, 0, 5, 5, 0, 0, 0, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    -5, 0, 0, 0, 0, 0, 0, -5, //
    5, 10, 10, 10, 10, 10, 10, 5, //
    0, 0, 0, 0, 0, 0, 0, 0,
];

pub(crate) const QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, //
    -10, 0, 5, 0, 0, 0, 0, -10, //
    -10, 5, 5, 5, 5, 5, 0, -10, //
    0, 0, 5, 5, 5, 5, 0, -5, //
    -5, 0, 5, 5, 5, 5, 0, -5, //
    -10, 0, 5, 5, 5, 5, 0, -10, //
    -10, 0, 0, 0, 0, 0, 0, -10, //
    -20, -10, -10, -5, -5, -10, -10, -20,
];

pub(crate) const KING_MIDGAME_PST: [i32; 64] = [
    20, 30, 10, 0, 0, 10, 30, 20, //
    20, 20, 0, 0, 0, 0, 20, 20, //
    -10, -20, -20, -20, -20, -20, -20, -10, //
    -20, -30, -30, -40, -40, -30, -30, -20, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30, //
    -30, -40, -40, -50, -50, -40, -40, -30,
];

pub(crate) const KING_ENDGAME_PST: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -50, -50, //
    -30, -30, 0, 0, 0, 0, -30, -30, //
    -30, -10, 20, 30, 30, 20, -10, -30, //
    -30, -10, 30, 40, 40, 30, -10, -30, //
    -30, -10, 30, 40, 40, 30, -10, -30, //
    -30, -10, 20, 30, 30, 20, -10, -30, //
    -30, -20, -10, 0, 0, -10, -20, -30, //
    -50, -40, -30, -20, -20, -30, -40, -50,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_pst_anchors() {
        // Blocking center pawns on their home squares is discouraged...
        assert_eq!(PAWN_PST[11], -20); // d2
        assert_eq!(PAWN_PST[12], -20); // e2
        // ...while advanced central pawns are rewarded
        assert_eq!(PAWN_PST[28], 20); // e4
        assert_eq!(PAWN_PST[51], 50); // d7
    }

    #[test]
    fn test_king_pst_anchors() {
        // Castled corners are good in the middlegame
        assert_eq!(KING_MIDGAME_PST[6], 30); // g1
        assert_eq!(KING_MIDGAME_PST[60], -50); // e8 from White's view
        // Central kings are good in the endgame
        assert_eq!(KING_ENDGAME_PST[27], 40); // d4
        assert_eq!(KING_ENDGAME_PST[0], -50); // a1
    }

    #[test]
    fn test_knight_pst_prefers_center() {
        assert_eq!(KNIGHT_PST[28], 20); // e4
        assert_eq!(KNIGHT_PST[0], -50); // a1
        assert_eq!(KNIGHT_PST[63], -50); // h8
    }
}
