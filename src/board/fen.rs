//! FEN (Forsyth-Edwards Notation) import and export.

use std::str::FromStr;

use super::error::FenError;
use super::position::Position;
use super::types::{CastlingRights, Color, Piece, PieceKind, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a position from FEN notation.
///
/// Requires the piece placement, side, castling, and en passant fields;
/// the halfmove clock and fullmove number default to 0 and 1 when absent.
/// Rejects placements without exactly one king per side.
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let mut pos = Position::empty();
    let fields: Vec<&str> = fen.split_whitespace().collect();

    if fields.len() < 4 {
        return Err(FenError::TooFewFields {
            found: fields.len(),
        });
    }

    // Piece placement, rank 8 down to rank 1
    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::BadRankCount { found: ranks.len() });
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx;
        let mut file = 0usize;
        for c in rank_str.chars() {
            // Empty runs are 1-8; '0' and '9' are as malformed as any letter
            if let '1'..='8' = c {
                file += c as usize - '0' as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::RankOverflow { rank });
                }
                pos.set_piece(Square::new(file, rank), piece);
                file += 1;
            }
        }
        if file > 8 {
            return Err(FenError::RankOverflow { rank });
        }
        if file < 8 {
            return Err(FenError::RankUnderflow { rank, files: file });
        }
    }

    // Side to move
    pos.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    // Castling rights
    pos.castling = CastlingRights::none();
    for c in fields[2].chars() {
        match c {
            'K' => pos.castling.grant(Color::White, true),
            'Q' => pos.castling.grant(Color::White, false),
            'k' => pos.castling.grant(Color::Black, true),
            'q' => pos.castling.grant(Color::Black, false),
            '-' => {}
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }

    // En passant target
    pos.en_passant = if fields[3] == "-" {
        None
    } else {
        match fields[3].parse::<Square>() {
            Ok(sq) => Some(sq),
            Err(_) => {
                return Err(FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                })
            }
        }
    };

    // Optional clocks
    pos.halfmove_clock = match fields.get(4) {
        Some(s) => s.parse().map_err(|_| FenError::InvalidClock {
            found: (*s).to_string(),
        })?,
        None => 0,
    };
    pos.fullmove_number = match fields.get(5) {
        Some(s) => s.parse().map_err(|_| FenError::InvalidClock {
            found: (*s).to_string(),
        })?,
        None => 1,
    };

    for color in [Color::White, Color::Black] {
        let kings = pos.count_pieces(color, PieceKind::King);
        if kings != 1 {
            return Err(FenError::KingCount {
                color,
                found: kings as usize,
            });
        }
    }

    Ok(pos)
}

/// Parse a FEN string, falling back to the starting position when it is
/// malformed. The failure is logged rather than surfaced.
#[must_use]
pub fn parse_fen_safe(fen: &str) -> Position {
    match parse_fen(fen) {
        Ok(pos) => pos,
        Err(_err) => {
            #[cfg(feature = "logging")]
            log::warn!("falling back to starting position, bad FEN {fen:?}: {_err}");
            Position::starting()
        }
    }
}

/// Check whether a string parses as FEN
#[must_use]
pub fn is_valid_fen(fen: &str) -> bool {
    parse_fen(fen).is_ok()
}

/// Convert a position to its FEN string. All six fields are emitted, so
/// `parse_fen(to_fen(pos)) == pos` for any well-formed position.
#[must_use]
pub fn to_fen(pos: &Position) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for file in 0..8 {
            if let Some(piece) = pos.piece_at(Square::new(file, rank)) {
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                row.push(piece.to_fen_char());
            } else {
                empty += 1;
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }

    let side = match pos.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let ep = pos
        .en_passant
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());

    format!(
        "{} {} {} {} {} {}",
        rows.join("/"),
        side,
        pos.castling,
        ep,
        pos.halfmove_clock,
        pos.fullmove_number
    )
}

impl Position {
    /// See [`parse_fen`]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    /// See [`to_fen`]
    #[must_use]
    pub fn to_fen(&self) -> String {
        to_fen(self)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}
