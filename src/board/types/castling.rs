//! Castling rights.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 0b0001;
pub(crate) const CASTLE_WHITE_Q: u8 = 0b0010;
pub(crate) const CASTLE_BLACK_K: u8 = 0b0100;
pub(crate) const CASTLE_BLACK_Q: u8 = 0b1000;

/// The four independent castling rights, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No rights at all
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All four rights
    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q)
    }

    #[inline]
    const fn bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit(color, kingside) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit(color, kingside);
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit(color, kingside);
    }

    /// Drop both of a color's rights (after any king move)
    #[inline]
    pub fn revoke_both(&mut self, color: Color) {
        self.revoke(color, true);
        self.revoke(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CastlingRights {
    /// FEN castling field ("KQkq" or "-")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.has(Color::White, true) {
            write!(f, "K")?;
        }
        if self.has(Color::White, false) {
            write!(f, "Q")?;
        }
        if self.has(Color::Black, true) {
            write!(f, "k")?;
        }
        if self.has(Color::Black, false) {
            write!(f, "q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_revoke() {
        let mut rights = CastlingRights::none();
        assert!(rights.is_empty());

        rights.grant(Color::White, true);
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));

        rights.revoke(Color::White, true);
        assert!(rights.is_empty());
    }

    #[test]
    fn test_revoke_both() {
        let mut rights = CastlingRights::all();
        rights.revoke_both(Color::White);
        assert!(!rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_display() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::none().to_string(), "-");

        let mut rights = CastlingRights::none();
        rights.grant(Color::Black, false);
        assert_eq!(rights.to_string(), "q");
    }
}
