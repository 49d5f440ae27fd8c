//! Board geometry: offset tables and castling layout.
//!
//! All offsets are signed deltas between square indexes in the
//! rank-major encoding (index = rank * 8 + file).

use super::types::{Color, Square};

pub(crate) const NORTH: i32 = 8;
pub(crate) const SOUTH: i32 = -8;
pub(crate) const EAST: i32 = 1;
pub(crate) const WEST: i32 = -1;
pub(crate) const NORTH_EAST: i32 = 9;
pub(crate) const NORTH_WEST: i32 = 7;
pub(crate) const SOUTH_EAST: i32 = -7;
pub(crate) const SOUTH_WEST: i32 = -9;

pub(crate) const ORTHOGONAL_DIRS: [i32; 4] = [NORTH, SOUTH, EAST, WEST];
pub(crate) const DIAGONAL_DIRS: [i32; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];
pub(crate) const KING_OFFSETS: [i32; 8] = [
    NORTH, SOUTH, EAST, WEST, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];
pub(crate) const KNIGHT_OFFSETS: [i32; 8] = [17, 15, -15, -17, 10, -6, 6, -10];

/// Step one square in a ray or king direction.
///
/// A single orthogonal or diagonal step never shifts the file by more
/// than one; a larger shift means the index arithmetic wrapped around
/// the board edge.
#[inline]
#[must_use]
pub(crate) fn step(from: Square, dir: i32) -> Option<Square> {
    let to = from.index() as i32 + dir;
    if !(0..64).contains(&to) {
        return None;
    }
    let to = Square::from_index(to as usize);
    if (to.file() as i32 - from.file() as i32).abs() > 1 {
        return None;
    }
    Some(to)
}

/// Resolve a knight offset, rejecting wrap-around.
///
/// A real knight move changes file and rank by {1,2} or {2,1}.
#[inline]
#[must_use]
pub(crate) fn knight_target(from: Square, offset: i32) -> Option<Square> {
    let to = from.index() as i32 + offset;
    if !(0..64).contains(&to) {
        return None;
    }
    let to = Square::from_index(to as usize);
    let file_delta = (to.file() as i32 - from.file() as i32).abs();
    let rank_delta = (to.rank() as i32 - from.rank() as i32).abs();
    if (file_delta, rank_delta) == (1, 2) || (file_delta, rank_delta) == (2, 1) {
        Some(to)
    } else {
        None
    }
}

/// Static layout of one castling move: where the king and rook start
/// and land, which squares must be empty, and which squares the king
/// passes through (destination included) that must not be attacked.
pub(crate) struct CastleGeometry {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    pub must_be_empty: &'static [Square],
    pub must_be_safe: &'static [Square],
}

const WHITE_KINGSIDE: CastleGeometry = CastleGeometry {
    king_from: Square::from_index(4),
    king_to: Square::from_index(6),
    rook_from: Square::from_index(7),
    rook_to: Square::from_index(5),
    must_be_empty: &[Square::from_index(5), Square::from_index(6)],
    must_be_safe: &[Square::from_index(5), Square::from_index(6)],
};

const WHITE_QUEENSIDE: CastleGeometry = CastleGeometry {
    king_from: Square::from_index(4),
    king_to: Square::from_index(2),
    rook_from: Square::from_index(0),
    rook_to: Square::from_index(3),
    must_be_empty: &[
        Square::from_index(1),
        Square::from_index(2),
        Square::from_index(3),
    ],
    must_be_safe: &[Square::from_index(3), Square::from_index(2)],
};

const BLACK_KINGSIDE: CastleGeometry = CastleGeometry {
    king_from: Square::from_index(60),
    king_to: Square::from_index(62),
    rook_from: Square::from_index(63),
    rook_to: Square::from_index(61),
    must_be_empty: &[Square::from_index(61), Square::from_index(62)],
    must_be_safe: &[Square::from_index(61), Square::from_index(62)],
};

const BLACK_QUEENSIDE: CastleGeometry = CastleGeometry {
    king_from: Square::from_index(60),
    king_to: Square::from_index(58),
    rook_from: Square::from_index(56),
    rook_to: Square::from_index(59),
    must_be_empty: &[
        Square::from_index(57),
        Square::from_index(58),
        Square::from_index(59),
    ],
    must_be_safe: &[Square::from_index(59), Square::from_index(58)],
};

#[must_use]
pub(crate) fn castle_geometry(color: Color, kingside: bool) -> &'static CastleGeometry {
    match (color, kingside) {
        (Color::White, true) => &WHITE_KINGSIDE,
        (Color::White, false) => &WHITE_QUEENSIDE,
        (Color::Black, true) => &BLACK_KINGSIDE,
        (Color::Black, false) => &BLACK_QUEENSIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rejects_edge_wraps() {
        let h4 = Square::new(7, 3);
        assert_eq!(step(h4, EAST), None);
        assert_eq!(step(h4, NORTH_EAST), None);
        assert_eq!(step(h4, SOUTH_EAST), None);
        assert_eq!(step(h4, NORTH), Some(Square::new(7, 4)));

        let a1 = Square::new(0, 0);
        assert_eq!(step(a1, WEST), None);
        assert_eq!(step(a1, SOUTH), None);
        assert_eq!(step(a1, SOUTH_WEST), None);
        assert_eq!(step(a1, NORTH_EAST), Some(Square::new(1, 1)));
    }

    #[test]
    fn test_knight_targets_from_corner() {
        let a1 = Square::new(0, 0);
        let targets: Vec<Square> = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&off| knight_target(a1, off))
            .collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::new(1, 2))); // b3
        assert!(targets.contains(&Square::new(2, 1))); // c2
    }

    #[test]
    fn test_knight_targets_from_center() {
        let e4 = Square::new(4, 3);
        let count = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&off| knight_target(e4, off))
            .count();
        assert_eq!(count, 8);
    }

    #[test]
    fn test_castle_geometry_squares() {
        let wk = castle_geometry(Color::White, true);
        assert_eq!(wk.king_from.to_string(), "e1");
        assert_eq!(wk.king_to.to_string(), "g1");
        assert_eq!(wk.rook_from.to_string(), "h1");
        assert_eq!(wk.rook_to.to_string(), "f1");

        let bq = castle_geometry(Color::Black, false);
        assert_eq!(bq.king_to.to_string(), "c8");
        assert_eq!(bq.rook_from.to_string(), "a8");
        assert_eq!(bq.rook_to.to_string(), "d8");
        assert_eq!(bq.must_be_empty.len(), 3);
        assert_eq!(bq.must_be_safe.len(), 2);
    }
}
