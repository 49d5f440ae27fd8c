//! Special positions and rule corners.

use crate::board::{Color, GameStatus, MoveKind, Position};

#[test]
fn test_pinned_piece_cannot_move() {
    // The d2 knight shields the king from the d-file rook
    let pos: Position = "3r3k/8/8/8/8/8/3N4/3K4 w - - 0 1".parse().unwrap();
    let knight_moves = pos
        .generate_moves()
        .into_iter()
        .filter(|m| m.from.to_string() == "d2")
        .count();
    assert_eq!(knight_moves, 0);
}

#[test]
fn test_check_must_be_answered() {
    let pos: Position = "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1".parse().unwrap();
    assert!(pos.is_in_check(Color::White));
    for mv in pos.generate_moves() {
        assert!(!pos.make_move(&mv).is_in_check(Color::White));
    }
}

#[test]
fn test_en_passant_discovers_check() {
    // Capturing en passant would expose the white king to the h5 rook
    let pos: Position = "8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1".parse().unwrap();
    let has_ep = pos
        .generate_moves()
        .iter()
        .any(|m| m.kind == MoveKind::EnPassant);
    assert!(!has_ep);
}

#[test]
fn test_double_check_forces_king_move() {
    // Knight on f3 and rook on e8 both give check
    let pos: Position = "k3r3/8/8/8/8/5n2/8/4K3 w - - 0 1".parse().unwrap();
    assert!(pos.is_in_check(Color::White));
    for mv in pos.generate_moves() {
        assert_eq!(mv.from, pos.king_square(Color::White).unwrap());
    }
}

#[test]
fn test_castling_through_occupied_square() {
    let pos: Position = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R2QK2R w KQkq - 0 1"
        .parse()
        .unwrap();
    let has_queenside = pos
        .generate_moves()
        .iter()
        .any(|m| m.kind == MoveKind::CastleQueen);
    assert!(!has_queenside);
}

#[test]
fn test_fifty_move_draw_status() {
    let pos: Position = "4k3/8/8/8/8/8/8/R3K3 w - - 100 80".parse().unwrap();
    assert_eq!(pos.game_status(), GameStatus::FiftyMoveDraw);
}

#[test]
fn test_checkmate_and_stalemate_status() {
    let mate: Position = "rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    assert_eq!(mate.game_status(), GameStatus::Checkmate);

    let stale: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
    assert_eq!(stale.game_status(), GameStatus::Stalemate);

    let bare: Position = "8/8/8/8/8/8/8/K6k w - - 0 1".parse().unwrap();
    assert_eq!(bare.game_status(), GameStatus::InsufficientMaterial);
}

#[test]
fn test_black_pawn_direction() {
    let pos: Position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
        .parse()
        .unwrap();
    let moves: Vec<String> = pos.generate_moves().iter().map(|m| m.to_string()).collect();
    assert!(moves.contains(&"e7e5".to_string()));
    assert!(moves.contains(&"e7e6".to_string()));
    assert!(!moves.contains(&"e7e8".to_string()));
}

#[test]
fn test_black_promotion_rank() {
    let pos: Position = "4k3/8/8/8/8/8/p7/4K3 b - - 0 1".parse().unwrap();
    let promos = pos
        .generate_moves()
        .into_iter()
        .filter(|m| m.promotion.is_some())
        .count();
    assert_eq!(promos, 4);
}
