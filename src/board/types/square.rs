//! Board squares.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// One of the 64 board squares.
///
/// The backing index is rank-major, `rank * 8 + file`: a1 is 0, h1 is
/// 7, h8 is 63. Piece-square tables and the Zobrist key arrays are
/// addressed with this same index, and all move deltas in the geometry
/// tables are differences between these indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Build a square from file and rank coordinates, both 0-7.
    /// Out-of-range coordinates wrap silently; see `try_new`.
    #[inline]
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Self {
        Square((rank * 8 + file) as u8)
    }

    /// Checked constructor: `None` when either coordinate leaves the board
    #[must_use]
    pub const fn try_new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square::new(file, rank))
        } else {
            None
        }
    }

    /// File coordinate, 0 (the a-file) through 7 (the h-file)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// Rank coordinate, 0 (rank 1) through 7 (rank 8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Mirror across the board's horizontal midline (a2 becomes a7).
    /// This is the lookup transform for Black in the piece-square tables.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// The raw rank-major index, 0-63
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Recover a square from its rank-major index
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Build a square from algebraic characters like `'e'` and `'4'`.
    /// Anything outside `a`-`h` / `1`-`8` yields `None`.
    #[must_use]
    pub(crate) fn from_chars(file: char, rank: char) -> Option<Self> {
        let file = (file as u32).wrapping_sub('a' as u32);
        let rank = (rank as u32).wrapping_sub('1' as u32);
        if file < 8 && rank < 8 {
            Some(Square::new(file as usize, rank as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = b'a' + self.0 % 8;
        write!(f, "{}{}", file as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                Square::from_chars(file, rank).ok_or_else(|| SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square::new(file, rank))
    }
}
