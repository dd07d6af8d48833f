use kestrel::{movegen, Board, Color, Position};
use pretty_assertions::assert_eq;

#[test]
fn startpos_has_twenty_moves() {
    let mut b = Board::startpos();
    assert_eq!(movegen::legal_moves(&mut b, Color::White).len(), 20);
    assert_eq!(movegen::legal_moves(&mut b, Color::Black).len(), 20);
}

#[test]
fn fools_mate_is_checkmate() {
    let mut pos = Position::from_moves(&["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
    assert_eq!(pos.side_to_move(), Color::White);
    let b = pos.board_mut();
    assert!(movegen::is_king_in_check(b, Color::White));
    assert!(movegen::legal_moves(b, Color::White).is_empty());
    assert!(movegen::is_checkmate(b, Color::White));
    assert!(!movegen::is_stalemate(b, Color::White));
}

#[test]
fn legal_moves_are_exactly_the_king_safe_pseudo_moves() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1",
        "4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1",
    ];
    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let side = pos.side_to_move();
        let b = pos.board_mut();
        let legal = movegen::legal_moves(b, side);
        let squares: Vec<_> = b.squares(side).collect();
        for from in squares {
            for mv in movegen::pseudo_legal_moves(b, from) {
                let safe = {
                    let child = b.play(mv);
                    !movegen::is_king_in_check(&child, side)
                };
                assert_eq!(legal.contains(&mv), safe, "{} in {}", mv, fen);
            }
        }
    }
}

#[test]
fn captures_are_the_legal_moves_onto_enemies() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1").unwrap();
    let b = pos.board_mut();
    let caps = movegen::capture_moves(b, Color::White);
    let expected: Vec<_> = movegen::legal_moves(b, Color::White).into_iter().filter(|m| m.captured.is_some()).collect();
    assert_eq!(caps, expected);
    assert_eq!(caps.len(), 8);
}

fn sorted_core_moves(fen: &str) -> Vec<String> {
    let mut pos = Position::from_fen(fen).unwrap();
    let side = pos.side_to_move();
    let mut v: Vec<String> = movegen::legal_moves(pos.board_mut(), side).iter().map(|m| m.to_string()).collect();
    v.sort();
    v
}

fn sorted_reference_moves(fen: &str) -> Vec<String> {
    let b = cozy_chess::Board::from_fen(fen, false).unwrap();
    let mut v = Vec::new();
    b.generate_moves(|ml| { for m in ml { v.push(format!("{}", m)); } false });
    v.sort();
    v
}

#[test]
fn matches_reference_generator_without_special_moves() {
    // No castling rights, no en-passant square, no pawn one step from promotion.
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 b - - 0 10",
        "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1",
    ];
    for fen in fens {
        assert_eq!(sorted_core_moves(fen), sorted_reference_moves(fen), "{}", fen);
    }
}
