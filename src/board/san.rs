//! Standard Algebraic Notation (SAN) and coordinate notation.
//!
//! SAN examples: "e4", "Nf3", "Bxc6", "O-O", "e8=Q". Check and mate
//! suffixes ("+", "#") are accepted on input but never emitted; the
//! caller holding the resulting position decides whether to append them.

use super::error::{MoveParseError, SanError};
use super::position::Position;
use super::types::{Move, MoveKind, PieceKind, Square};

impl Position {
    /// Format a move in Standard Algebraic Notation.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        match mv.kind {
            MoveKind::CastleKing => return "O-O".to_string(),
            MoveKind::CastleQueen => return "O-O-O".to_string(),
            _ => {}
        }

        let mut san = String::new();
        if mv.piece == PieceKind::Pawn {
            if mv.is_capture() {
                san.push((b'a' + mv.from.file() as u8) as char);
            }
        } else {
            san.push(mv.piece.to_char().to_ascii_uppercase());
            let (needs_file, needs_rank) = self.needs_disambiguation(mv);
            if needs_file {
                san.push((b'a' + mv.from.file() as u8) as char);
            }
            if needs_rank {
                san.push((b'1' + mv.from.rank() as u8) as char);
            }
        }

        if mv.is_capture() {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }
        san
    }

    /// Disambiguate by file first, then rank, then both.
    fn needs_disambiguation(&self, mv: &Move) -> (bool, bool) {
        let moves = self.generate_moves();
        let rivals: Vec<&Move> = moves
            .iter()
            .filter(|m| m.to == mv.to && m.piece == mv.piece && m.from != mv.from)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }
        let shares_file = rivals.iter().any(|m| m.from.file() == mv.from.file());
        let shares_rank = rivals.iter().any(|m| m.from.rank() == mv.from.rank());
        match (shares_file, shares_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts "e4", "Nf3", "Bxc6", "O-O", "e8=Q", with optional
    /// trailing check indicators.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let san = san.trim();
        if san.is_empty() {
            return Err(SanError::Empty);
        }
        let stripped = san.trim_end_matches(['+', '#']);

        if stripped == "O-O" || stripped == "0-0" {
            return self.find_castling_move(true);
        }
        if stripped == "O-O-O" || stripped == "0-0-0" {
            return self.find_castling_move(false);
        }

        let chars: Vec<char> = stripped.chars().collect();
        if chars.is_empty() {
            return Err(SanError::Empty);
        }
        let (piece, rest) = if chars[0].is_ascii_uppercase() {
            let p = PieceKind::from_char(chars[0]).ok_or(SanError::InvalidPiece {
                char: chars[0],
            })?;
            (p, &chars[1..])
        } else {
            (PieceKind::Pawn, &chars[..])
        };

        let (disambig_file, disambig_rank, dest, promotion) = parse_san_body(rest)?;
        if dest.len() != 2 {
            return Err(SanError::InvalidSquare {
                notation: dest.iter().collect(),
            });
        }
        let to = Square::from_chars(dest[0], dest[1]).ok_or_else(|| SanError::InvalidSquare {
            notation: dest.iter().collect(),
        })?;

        let mut matching: Vec<Move> = Vec::new();
        for mv in self.generate_moves() {
            if mv.to != to || mv.piece != piece || mv.promotion != promotion {
                continue;
            }
            if let Some(f) = disambig_file {
                if mv.from.file() != f {
                    continue;
                }
            }
            if let Some(r) = disambig_rank {
                if mv.from.rank() != r {
                    continue;
                }
            }
            matching.push(mv);
        }

        match matching.len() {
            0 => Err(SanError::NoMatchingMove {
                san: san.to_string(),
            }),
            1 => Ok(matching[0]),
            _ => Err(SanError::AmbiguousMove {
                san: san.to_string(),
            }),
        }
    }

    fn find_castling_move(&self, kingside: bool) -> Result<Move, SanError> {
        let wanted = if kingside {
            MoveKind::CastleKing
        } else {
            MoveKind::CastleQueen
        };
        self.generate_moves()
            .into_iter()
            .find(|mv| mv.kind == wanted)
            .ok_or_else(|| SanError::NoMatchingMove {
                san: if kingside { "O-O" } else { "O-O-O" }.to_string(),
            })
    }

    /// Parse a move in coordinate notation ("e2e4", "e7e8q").
    ///
    /// Returns the matching legal move, or an error describing why
    /// parsing failed.
    pub fn parse_coord(&self, coord: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = coord.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        let (from, to) = match (
            Square::from_chars(chars[0], chars[1]),
            Square::from_chars(chars[2], chars[3]),
        ) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(MoveParseError::InvalidSquare {
                    notation: coord.to_string(),
                })
            }
        };

        let promotion = if chars.len() == 5 {
            let kind = PieceKind::from_char(chars[4]).ok_or(MoveParseError::InvalidPromotion {
                char: chars[4],
            })?;
            if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                return Err(MoveParseError::InvalidPromotion { char: chars[4] });
            }
            Some(kind)
        } else {
            None
        };

        self.generate_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: coord.to_string(),
            })
    }
}

type SanBody = (Option<usize>, Option<usize>, Vec<char>, Option<PieceKind>);

/// Parse the SAN tail after the piece letter:
/// `[file][rank][x]<dest>[=promotion]`
fn parse_san_body(chars: &[char]) -> Result<SanBody, SanError> {
    let mut idx = 0;
    let mut disambig_file = None;
    let mut disambig_rank = None;
    let mut dest = Vec::new();
    let mut promotion = None;

    while idx < chars.len() {
        let c = chars[idx];
        if c == 'x' {
            idx += 1;
        } else if c == '=' {
            idx += 1;
            if idx < chars.len() {
                let promo_char = chars[idx];
                let kind = PieceKind::from_char(promo_char)
                    .ok_or(SanError::InvalidPromotion { char: promo_char })?;
                if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                    return Err(SanError::InvalidPromotion { char: promo_char });
                }
                promotion = Some(kind);
                idx += 1;
            }
        } else if c.is_ascii_lowercase() && idx + 1 < chars.len() {
            let next = chars[idx + 1];
            if next.is_ascii_digit() {
                // Destination square; an earlier square becomes the
                // disambiguation (e.g. "Qd1d4")
                if dest.len() == 2 {
                    disambig_file = Some(dest[0] as usize - 'a' as usize);
                    disambig_rank = Some(dest[1] as usize - '1' as usize);
                    dest.clear();
                }
                dest.push(c);
                dest.push(next);
                idx += 2;
            } else if next == 'x' || next.is_ascii_lowercase() {
                disambig_file = Some(c as usize - 'a' as usize);
                idx += 1;
            } else {
                dest.push(c);
                idx += 1;
            }
        } else if c.is_ascii_digit() && dest.is_empty() {
            let rank = (c as usize).wrapping_sub('1' as usize);
            if rank >= 8 {
                return Err(SanError::InvalidSquare {
                    notation: chars.iter().collect(),
                });
            }
            disambig_rank = Some(rank);
            idx += 1;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            dest.push(c);
            idx += 1;
        } else {
            return Err(SanError::InvalidSquare {
                notation: chars.iter().collect(),
            });
        }
    }

    Ok((disambig_file, disambig_rank, dest, promotion))
}
