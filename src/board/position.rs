//! The immutable position record.

use std::fmt;

use super::types::{CastlingRights, Color, Piece, PieceKind, Square};

/// Complete game state needed to generate legal moves.
///
/// Positions are immutable values: `make_move` returns a new `Position`
/// rather than mutating in place, which keeps undo/redo and search
/// bookkeeping trivial.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// The square a pawn may capture onto, not the pawn's own square
    pub en_passant: Option<Square>,
    /// Plies since the last pawn move or capture; 100 means a 50-move draw
    pub halfmove_clock: u32,
    /// Starts at 1, increments after Black's move
    pub fullmove_number: u32,
}

/// How a finished (or unfinished) game stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
    FiftyMoveDraw,
    InsufficientMaterial,
}

impl Position {
    /// An empty board with White to move and no rights; used as the
    /// staging value by the FEN parser.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut pos = Position::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            pos.set_piece(Square::new(file, 0), Piece::new(kind, Color::White));
            pos.set_piece(Square::new(file, 1), Piece::new(PieceKind::Pawn, Color::White));
            pos.set_piece(Square::new(file, 6), Piece::new(PieceKind::Pawn, Color::Black));
            pos.set_piece(Square::new(file, 7), Piece::new(kind, Color::Black));
        }
        pos.castling = CastlingRights::all();
        pos
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.board[sq.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.board[sq.index()] = None;
    }

    /// Locate the king of `color`. A well-formed position always has
    /// exactly one; `None` only occurs for hand-built boards.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.board.iter().position(|p| {
            matches!(p, Some(piece) if piece.kind == PieceKind::King && piece.color == color)
        })
        .map(Square::from_index)
    }

    /// Count pieces of one kind and color
    #[must_use]
    pub(crate) fn count_pieces(&self, color: Color, kind: PieceKind) -> u32 {
        self.board
            .iter()
            .flatten()
            .filter(|p| p.color == color && p.kind == kind)
            .count() as u32
    }

    /// Iterate occupied squares with their pieces
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.map(|piece| (Square::from_index(idx), piece)))
    }

    /// Draw by bare material: bare kings, king + single minor, or
    /// bishops that all sit on the same square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0u32;
        let mut bishop_square_colors = [false; 2];
        for (sq, piece) in self.occupied() {
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Knight => minors += 1,
                PieceKind::Bishop => {
                    minors += 1;
                    bishop_square_colors[(sq.file() + sq.rank()) % 2] = true;
                }
                _ => return false,
            }
        }
        match minors {
            0 | 1 => true,
            _ => {
                let knights = self.count_pieces(Color::White, PieceKind::Knight)
                    + self.count_pieces(Color::Black, PieceKind::Knight);
                knights == 0 && !(bishop_square_colors[0] && bishop_square_colors[1])
            }
        }
    }

    /// Current status of the game in this position.
    #[must_use]
    pub fn game_status(&self) -> GameStatus {
        if self.generate_moves().is_empty() {
            return if self.is_in_check(self.side_to_move) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.halfmove_clock >= 100 {
            return GameStatus::FiftyMoveDraw;
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::InProgress
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl fmt::Display for Position {
    /// Board diagram with rank 8 at the top, used in debugging output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
