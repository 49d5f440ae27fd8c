//! Static position evaluation.
//!
//! All scores are centipawns from White's point of view: positive favors
//! White. The evaluation is the sum of seven components (material,
//! piece-square positioning, mobility, king safety, center control, pawn
//! structure, and piece activity), with checkmate and stalemate scored
//! directly when the side to move has no legal moves.

mod pst;

use crate::board::{Color, PieceKind, Position, Square};

use pst::{
    BISHOP_PST, KING_ENDGAME_PST, KING_MIDGAME_PST, KNIGHT_PST, PAWN_PST, QUEEN_PST, ROOK_PST,
};

/// Score of a checkmated side to move (negated for the winner)
pub const MATE_SCORE: i32 = 100_000;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

const MOBILITY_WEIGHT: i32 = 5;
const CASTLED_BONUS: i32 = 30;
const EXPOSED_KING_PENALTY: i32 = -20;
const KING_ZONE_ATTACK_PENALTY: i32 = -10;
const CENTER_OCCUPANCY_BONUS: i32 = 15;
const CENTER_ATTACK_BONUS: i32 = 5;
const EXTENDED_CENTER_BONUS: i32 = 5;
const DOUBLED_PAWN_PENALTY: i32 = -20;
const ISOLATED_PAWN_PENALTY: i32 = -15;
const BISHOP_PAIR_BONUS: i32 = 30;
const ROOK_OPEN_FILE_BONUS: i32 = 20;

/// The four central squares d4, e4, d5, e5
const CENTER_SQUARES: [Square; 4] = [
    Square::from_index(27),
    Square::from_index(28),
    Square::from_index(35),
    Square::from_index(36),
];

/// Per-component evaluation, each from White's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: i32,
    pub positioning: i32,
    pub mobility: i32,
    pub king_safety: i32,
    pub center_control: i32,
    pub pawn_structure: i32,
    pub piece_activity: i32,
    pub total: i32,
}

/// Crude phase detection: queens are off, or almost nothing but kings
/// and pawns remains. Only controls which king table is used.
#[must_use]
pub fn is_endgame(pos: &Position) -> bool {
    let mut queens = 0u32;
    let mut heavy_pieces = 0u32;
    for (_, piece) in pos.occupied() {
        match piece.kind {
            PieceKind::Queen => {
                queens += 1;
                heavy_pieces += 1;
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => heavy_pieces += 1,
            _ => {}
        }
    }
    queens == 0 || (queens <= 2 && heavy_pieces <= 2)
}

/// Evaluate the position in centipawns from White's point of view.
///
/// When the side to move has no legal moves the position is terminal:
/// checkmate scores `MATE_SCORE` against the mated side, stalemate
/// scores `DRAW_SCORE`.
#[must_use]
pub fn evaluate(pos: &Position) -> i32 {
    let mover_moves = pos.generate_moves().len();
    if mover_moves == 0 {
        if pos.is_in_check(pos.side_to_move) {
            return match pos.side_to_move {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        return DRAW_SCORE;
    }
    breakdown_with_mover_mobility(pos, mover_moves).total
}

/// Compute every evaluation component. Exposed so callers can explain a
/// score; `evaluate` is the sum.
#[must_use]
pub fn evaluation_breakdown(pos: &Position) -> EvalBreakdown {
    breakdown_with_mover_mobility(pos, pos.generate_moves().len())
}

fn breakdown_with_mover_mobility(pos: &Position, mover_moves: usize) -> EvalBreakdown {
    let mut breakdown = EvalBreakdown {
        material: material(pos),
        positioning: positioning(pos),
        mobility: mobility(pos, mover_moves),
        king_safety: king_safety(pos),
        center_control: center_control(pos),
        pawn_structure: pawn_structure(pos),
        piece_activity: piece_activity(pos),
        total: 0,
    };
    breakdown.total = breakdown.material
        + breakdown.positioning
        + breakdown.mobility
        + breakdown.king_safety
        + breakdown.center_control
        + breakdown.pawn_structure
        + breakdown.piece_activity;
    breakdown
}

fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// Piece values signed by color. Kings cancel out and are excluded.
fn material(pos: &Position) -> i32 {
    pos.occupied()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .map(|(_, piece)| signed(piece.color, piece.kind.value()))
        .sum()
}

/// Piece-square table sums; Black looks up the vertically mirrored
/// square. The king uses its endgame table once queens are traded.
fn positioning(pos: &Position) -> i32 {
    let endgame = is_endgame(pos);
    pos.occupied()
        .map(|(sq, piece)| {
            let lookup = match piece.color {
                Color::White => sq,
                Color::Black => sq.flip_vertical(),
            };
            let table = match piece.kind {
                PieceKind::Pawn => &PAWN_PST,
                PieceKind::Knight => &KNIGHT_PST,
                PieceKind::Bishop => &BISHOP_PST,
                PieceKind::Rook => &ROOK_PST,
                PieceKind::Queen => &QUEEN_PST,
                PieceKind::King => {
                    if endgame {
                        &KING_ENDGAME_PST
                    } else {
                        &KING_MIDGAME_PST
                    }
                }
            };
            signed(piece.color, table[lookup.index()])
        })
        .sum()
}

/// Legal move count difference, five centipawns per move.
///
/// The opponent's count comes from handing them the move with the en
/// passant target cleared; mobility never recurses into `evaluate`.
fn mobility(pos: &Position, mover_moves: usize) -> i32 {
    let mut flipped = *pos;
    flipped.side_to_move = pos.side_to_move.opponent();
    flipped.en_passant = None;
    let opponent_moves = flipped.generate_moves().len();
    let diff = MOBILITY_WEIGHT * (mover_moves as i32 - opponent_moves as i32);
    signed(pos.side_to_move, diff)
}

fn king_safety(pos: &Position) -> i32 {
    king_safety_for(pos, Color::White) - king_safety_for(pos, Color::Black)
}

fn king_safety_for(pos: &Position, color: Color) -> i32 {
    let Some(king) = pos.king_square(color) else {
        return 0;
    };
    let mut score = 0;

    if king.rank() == color.home_rank() {
        if king.file() <= 1 || king.file() >= 6 {
            score += CASTLED_BONUS;
        } else if king.file() == 3 || king.file() == 4 {
            score += EXPOSED_KING_PENALTY;
        }
    }

    let enemy = color.opponent();
    for file_delta in -1i32..=1 {
        for rank_delta in -1i32..=1 {
            let file = king.file() as i32 + file_delta;
            let rank = king.rank() as i32 + rank_delta;
            if !(0..8).contains(&file) || !(0..8).contains(&rank) {
                continue;
            }
            let sq = Square::new(file as usize, rank as usize);
            if pos.is_square_attacked(sq, enemy) {
                score += KING_ZONE_ATTACK_PENALTY;
            }
        }
    }
    score
}

fn center_control(pos: &Position) -> i32 {
    let mut score = 0;
    for sq in CENTER_SQUARES {
        if let Some(piece) = pos.piece_at(sq) {
            if piece.kind != PieceKind::King {
                score += signed(piece.color, CENTER_OCCUPANCY_BONUS);
            }
        }
        if pos.is_square_attacked(sq, Color::White) {
            score += CENTER_ATTACK_BONUS;
        }
        if pos.is_square_attacked(sq, Color::Black) {
            score -= CENTER_ATTACK_BONUS;
        }
    }

    // The 4x4 block c3..f6 minus the four true center squares
    for file in 2..=5 {
        for rank in 2..=5 {
            let sq = Square::new(file, rank);
            if CENTER_SQUARES.contains(&sq) {
                continue;
            }
            if let Some(piece) = pos.piece_at(sq) {
                if piece.kind != PieceKind::Pawn && piece.kind != PieceKind::King {
                    score += signed(piece.color, EXTENDED_CENTER_BONUS);
                }
            }
        }
    }
    score
}

fn pawn_structure(pos: &Position) -> i32 {
    pawn_structure_for(pos, Color::White) - pawn_structure_for(pos, Color::Black)
}

fn pawn_structure_for(pos: &Position, color: Color) -> i32 {
    let mut files = [0i32; 8];
    for (sq, piece) in pos.occupied() {
        if piece.kind == PieceKind::Pawn && piece.color == color {
            files[sq.file()] += 1;
        }
    }

    let mut score = 0;
    for (file, &count) in files.iter().enumerate() {
        if count > 1 {
            score += DOUBLED_PAWN_PENALTY * (count - 1);
        }
        if count > 0 {
            let left = file.checked_sub(1).map_or(0, |f| files[f]);
            let right = if file < 7 { files[file + 1] } else { 0 };
            if left == 0 && right == 0 {
                score += ISOLATED_PAWN_PENALTY * count;
            }
        }
    }
    score
}

fn piece_activity(pos: &Position) -> i32 {
    piece_activity_for(pos, Color::White) - piece_activity_for(pos, Color::Black)
}

fn piece_activity_for(pos: &Position, color: Color) -> i32 {
    let mut pawn_files = [false; 8];
    for (sq, piece) in pos.occupied() {
        if piece.kind == PieceKind::Pawn {
            pawn_files[sq.file()] = true;
        }
    }

    let mut score = 0;
    if pos.count_pieces(color, PieceKind::Bishop) >= 2 {
        score += BISHOP_PAIR_BONUS;
    }
    for (sq, piece) in pos.occupied() {
        if piece.kind == PieceKind::Rook && piece.color == color && !pawn_files[sq.file()] {
            score += ROOK_OPEN_FILE_BONUS;
        }
    }
    score
}
