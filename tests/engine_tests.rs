//! Integration tests for the public engine API.

use woodpusher::board::{
    is_valid_fen, parse_fen, parse_fen_safe, to_fen, Color, GameStatus, MoveKind, PieceKind,
    Position, STARTING_FEN,
};
use woodpusher::eval::{evaluate, evaluation_breakdown};

#[test]
fn test_fen_api_round_trip() {
    let fens = [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1",
    ];
    for fen in fens {
        assert!(is_valid_fen(fen));
        let pos = parse_fen(fen).unwrap();
        assert_eq!(to_fen(&pos), fen);
        assert_eq!(parse_fen(&to_fen(&pos)).unwrap(), pos);
    }
}

#[test]
fn test_parse_fen_safe_never_fails() {
    assert_eq!(parse_fen_safe("garbage"), Position::starting());
    assert_eq!(parse_fen_safe(STARTING_FEN), Position::starting());
}

#[test]
fn test_playing_a_short_game_in_san() {
    // Scholar's mate
    let mut pos = Position::starting();
    for san in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6"] {
        let mv = pos.parse_san(san).unwrap();
        pos = pos.make_move(&mv);
        assert_eq!(pos.game_status(), GameStatus::InProgress);
    }

    let mate = pos.parse_san("Qxf7").unwrap();
    assert!(mate.is_capture());
    pos = pos.make_move(&mate);

    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert_eq!(pos.game_status(), GameStatus::Checkmate);
    assert!(pos.is_in_check(Color::Black));
    assert!(pos.generate_moves().is_empty());
}

#[test]
fn test_coordinate_and_san_agree() {
    let pos = Position::starting();
    let from_san = pos.parse_san("Nf3").unwrap();
    let from_coord = pos.parse_coord("g1f3").unwrap();
    assert_eq!(from_san, from_coord);
    assert_eq!(from_coord.to_coord(), "g1f3");
}

#[test]
fn test_castling_through_the_api() {
    let pos: Position = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1"
        .parse()
        .unwrap();
    let castle = pos.parse_san("O-O").unwrap();
    assert_eq!(castle.kind, MoveKind::CastleKing);
    let next = pos.make_move(&castle);
    assert_eq!(to_fen(&next), "r4rk1/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQ - 1 2");
}

#[test]
fn test_promotion_through_the_api() {
    let pos: Position = "8/P7/8/8/8/8/8/4K2k w - - 0 1".parse().unwrap();
    let promo = pos.parse_coord("a7a8n").unwrap();
    assert_eq!(promo.promotion, Some(PieceKind::Knight));
    let next = pos.make_move(&promo);
    assert_eq!(
        next.piece_at("a8".parse().unwrap()).unwrap().kind,
        PieceKind::Knight
    );
}

#[test]
fn test_breakdown_total_is_the_sum_of_components() {
    let pos: Position = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4"
        .parse()
        .unwrap();
    let breakdown = evaluation_breakdown(&pos);
    let sum = breakdown.material
        + breakdown.positioning
        + breakdown.mobility
        + breakdown.king_safety
        + breakdown.center_control
        + breakdown.pawn_structure
        + breakdown.piece_activity;
    assert_eq!(breakdown.total, sum);
    assert_eq!(evaluate(&pos), breakdown.total);
}

#[test]
fn test_material_breakdown_matches_captures() {
    let pos = Position::starting();
    assert_eq!(evaluation_breakdown(&pos).material, 0);

    // Remove Black's rook: +500 for White
    let no_rook: Position = "1nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQk - 0 1"
        .parse()
        .unwrap();
    assert_eq!(evaluation_breakdown(&no_rook).material, 500);
}

#[test]
fn test_evaluation_is_white_centric() {
    // White up a queen: positive either way the turn goes
    let white_to_move: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    let black_to_move: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        .parse()
        .unwrap();
    assert!(evaluate(&white_to_move) > 0);
    assert!(evaluate(&black_to_move) > 0);
}

#[test]
fn test_display_diagram() {
    let rendered = Position::starting().to_string();
    assert!(rendered.contains("r n b q k b n r"));
    assert!(rendered.contains("a b c d e f g h"));
    assert!(rendered.ends_with("White to move"));
}
