use crate::board::{Board, Color, Move, PieceKind};
use crate::eval::Evaluator;
use crate::movegen;
use crate::search::ordering::order_moves;
use std::sync::Arc;

/// Recursion cap for the capture search.
pub const QSEARCH_MAX_DEPTH: u32 = 10;
/// Margin on top of a queen for delta pruning.
pub const DELTA_MARGIN: i32 = 200;

/// Capture-only search run at the main search horizon.
pub struct QuiescenceSearch {
    evaluator: Arc<dyn Evaluator>,
    max_depth: u32,
    nodes: u64,
}

impl QuiescenceSearch {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator, max_depth: QSEARCH_MAX_DEPTH, nodes: 0 }
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn reset_nodes(&mut self) { self.nodes = 0; }

    /// Score for `color` (positive is good for `color`) inside `(alpha, beta)`.
    pub fn search_captures(&mut self, board: &mut Board, color: Color, alpha: i32, beta: i32) -> i32 {
        self.search(board, color, alpha, beta, self.max_depth)
    }

    fn search(&mut self, board: &mut Board, color: Color, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.nodes += 1;
        let stand = self.evaluator.evaluate(board) * color.sign();
        if depth == 0 { return stand; }
        if stand >= beta { return beta; }
        if stand > alpha { alpha = stand; }
        if stand + PieceKind::Queen.value() + DELTA_MARGIN < alpha { return alpha; }

        let mut captures = movegen::capture_moves(board, color);
        order_moves(&mut captures);
        for mv in captures {
            if is_losing_capture(board, &mv) { continue; }
            let score = {
                let mut child = board.play(mv);
                -self.search(&mut child, color.opposite(), -beta, -alpha, depth - 1)
            };
            if score >= beta { return beta; }
            if score > alpha { alpha = score; }
        }
        alpha
    }
}

/// A capture is losing when the target square is defended and the attacker
/// is worth more than the victim plus the cheapest defender.
pub fn is_losing_capture(board: &Board, mv: &Move) -> bool {
    let Some(victim) = mv.captured else { return false };
    match movegen::cheapest_attacker(board, mv.to, victim.color) {
        Some(defender) => mv.piece.value() > victim.value() + defender.value(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, Square};
    use crate::eval::Material;

    fn capture(p: &mut Position, uci: &str) -> Move {
        let side = p.side_to_move();
        movegen::capture_moves(p.board_mut(), side).into_iter().find(|m| m.to_string() == uci).unwrap()
    }

    #[test]
    fn queen_taking_pawn_defended_by_pawn_is_losing() {
        let mut p = Position::from_fen("4k3/8/2p5/3p4/8/8/3Q4/4K3 w - - 0 1").unwrap();
        let m = capture(&mut p, "d2d5");
        assert!(is_losing_capture(p.board(), &m));
    }

    #[test]
    fn undefended_victim_is_never_losing() {
        let mut p = Position::from_fen("4k3/8/8/3p4/8/8/3Q4/4K3 w - - 0 1").unwrap();
        let m = capture(&mut p, "d2d5");
        assert!(!is_losing_capture(p.board(), &m));
    }

    #[test]
    fn winning_capture_raises_score() {
        // Black bishop can take the hanging white queen.
        let mut p = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
        let mut qs = QuiescenceSearch::new(Arc::new(Material));
        let stand = Material.evaluate(p.board()) * Color::Black.sign();
        let score = qs.search_captures(p.board_mut(), Color::Black, -crate::search::INFINITY, crate::search::INFINITY);
        assert!(score > stand + 800, "qsearch {score} vs stand {stand}");
        assert_eq!(p.board().get(Square::parse("f4").unwrap()).map(|q| q.kind), Some(PieceKind::Queen));
    }
}
