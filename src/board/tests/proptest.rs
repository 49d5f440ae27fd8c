//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{parse_fen, to_fen, Color, Piece, PieceKind, Position, Square};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `num_moves` random legal moves from the starting position
fn random_position(seed: u64, num_moves: usize) -> Position {
    use rand::prelude::*;

    let mut pos = Position::starting();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = pos.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos = pos.make_move(&mv);
    }
    pos
}

/// Mirror a position vertically and swap the colors of every piece
fn color_swapped_mirror(pos: &Position) -> Position {
    let mut mirrored = Position::empty();
    for rank in 0..8 {
        for file in 0..8 {
            let sq = Square::new(file, rank);
            if let Some(piece) = pos.piece_at(sq) {
                mirrored.set_piece(
                    sq.flip_vertical(),
                    Piece::new(piece.kind, piece.color.opponent()),
                );
            }
        }
    }
    mirrored.side_to_move = pos.side_to_move.opponent();
    for kingside in [true, false] {
        if pos.castling.has(Color::White, kingside) {
            mirrored.castling.grant(Color::Black, kingside);
        }
        if pos.castling.has(Color::Black, kingside) {
            mirrored.castling.grant(Color::White, kingside);
        }
    }
    mirrored.en_passant = pos.en_passant.map(Square::flip_vertical);
    mirrored.halfmove_clock = pos.halfmove_clock;
    mirrored.fullmove_number = pos.fullmove_number;
    mirrored
}

proptest! {
    /// Property: FEN round-trip preserves the position exactly
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        let fen = to_fen(&pos);
        let restored = parse_fen(&fen).unwrap();
        prop_assert_eq!(restored, pos);
        prop_assert_eq!(to_fen(&restored), fen);
    }

    /// Property: legal moves never leave the mover's king in check
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        let mover = pos.side_to_move;
        for mv in pos.generate_moves() {
            prop_assert!(
                !pos.make_move(&mv).is_in_check(mover),
                "Legal move left king in check: {:?}", mv
            );
        }
    }

    /// Property: no legal moves if and only if checkmate or stalemate
    #[test]
    fn prop_no_moves_means_mate_or_stalemate(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        let no_moves = pos.generate_moves().is_empty();
        prop_assert_eq!(no_moves, pos.is_checkmate() || pos.is_stalemate());
        if no_moves {
            prop_assert_ne!(pos.is_checkmate(), pos.is_stalemate());
        }
    }

    /// Property: the hash depends only on the resulting position, not on
    /// the path that produced it
    #[test]
    fn prop_hash_is_path_independent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        let reparsed = parse_fen(&to_fen(&pos)).unwrap();
        prop_assert_eq!(pos.zobrist_hash(), reparsed.zobrist_hash());
    }

    /// Property: a mover's pawns never sit on their own promotion rank
    #[test]
    fn prop_no_pawns_on_final_ranks(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let pos = random_position(seed, num_moves);
        for rank in [0usize, 7] {
            for file in 0..8 {
                let piece = pos.piece_at(Square::new(file, rank));
                prop_assert!(!matches!(piece, Some(p) if p.kind == PieceKind::Pawn));
            }
        }
    }

    /// Property: evaluation negates under color swap and vertical mirror
    #[test]
    fn prop_eval_symmetry(seed in seed_strategy(), num_moves in 0..12usize) {
        let pos = random_position(seed, num_moves);
        let mirrored = color_swapped_mirror(&pos);
        let eval = crate::eval::evaluate(&pos);
        let mirrored_eval = crate::eval::evaluate(&mirrored);
        prop_assert!(
            (eval + mirrored_eval).abs() <= 1,
            "evaluate({}) = {}, evaluate(mirror) = {}",
            to_fen(&pos), eval, mirrored_eval
        );
    }
}
