use kestrel::eval::{Evaluator, MasterEvaluator};
use kestrel::search::{AlphaBeta, Minimax, SearchParams};
use kestrel::{Board, Color, Position};
use std::sync::Arc;
use pretty_assertions::assert_eq;

fn plain_alphabeta(evaluator: Arc<dyn Evaluator>) -> AlphaBeta {
    let mut p = SearchParams::default();
    p.use_tt = false;
    p.use_quiescence = false;
    AlphaBeta::with_params(evaluator, p)
}

#[test]
fn pruning_never_changes_the_root_value() {
    let fens = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 2 3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1",
    ];
    let evaluator: Arc<dyn Evaluator> = Arc::new(MasterEvaluator::default());
    for fen in fens {
        let mut pos = Position::from_fen(fen).unwrap();
        let side = pos.side_to_move();
        let before = pos.board().clone();

        let mm = Minimax::new(evaluator.clone()).search(pos.board_mut(), side, 3);
        let ab = plain_alphabeta(evaluator.clone()).search(pos.board_mut(), side, 3);
        assert_eq!(ab.score, mm.score, "root value differs in {}", fen);
        assert!(ab.nodes < mm.nodes, "alpha-beta {} vs minimax {} nodes in {}", ab.nodes, mm.nodes, fen);
        assert_eq!(pos.board(), &before);
    }
}

#[test]
fn pruned_best_move_scores_the_same_under_minimax() {
    let evaluator: Arc<dyn Evaluator> = Arc::new(MasterEvaluator::default());
    let mut b = Board::startpos();
    let ab = plain_alphabeta(evaluator.clone()).search(&mut b, Color::White, 3);
    let mv = ab.best_move.unwrap();
    // Minimax value of the reply tree after the chosen move equals the root value.
    let mut child = b.play(mv);
    let reply = Minimax::new(evaluator).search(&mut child, Color::Black, 2);
    assert_eq!(reply.score, ab.score);
}
