use crate::board::{Board, Color, Move};
use crate::eval::{Evaluator, MasterEvaluator};
use crate::movegen;
use crate::search::{terminal_score, Algorithm, SearchResult, INFINITY};
use std::sync::Arc;

/// Full-width minimax. White maximizes, Black minimizes; scores stay White-relative.
pub struct Minimax {
    evaluator: Arc<dyn Evaluator>,
    nodes: u64,
}

impl Default for Minimax {
    fn default() -> Self { Self::new(Arc::new(MasterEvaluator::default())) }
}

impl Minimax {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator, nodes: 0 }
    }

    pub fn search(&mut self, board: &mut Board, color: Color, depth: u32) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        let moves = movegen::legal_moves(board, color);
        if moves.is_empty() {
            return SearchResult { best_move: None, score: terminal_score(board, color) * color.sign(), nodes: 0 };
        }

        let maximize = color == Color::White;
        let mut best: Option<Move> = None;
        let mut best_score = if maximize { -INFINITY } else { INFINITY };
        for mv in moves {
            let score = {
                let mut child = board.play(mv);
                self.minimax(&mut child, color.opposite(), depth - 1)
            };
            if (maximize && score > best_score) || (!maximize && score < best_score) {
                best_score = score;
                best = Some(mv);
            }
        }
        log::debug!(
            "minimax depth {} nodes {} score {} best {}",
            depth, self.nodes, best_score, best.map(|m| m.to_string()).unwrap_or_default()
        );
        SearchResult { best_move: best, score: best_score, nodes: self.nodes }
    }

    fn minimax(&mut self, board: &mut Board, color: Color, depth: u32) -> i32 {
        self.nodes += 1;
        if depth == 0 { return self.evaluator.evaluate(board); }
        let moves = movegen::legal_moves(board, color);
        if moves.is_empty() { return terminal_score(board, color) * color.sign(); }

        let maximize = color == Color::White;
        let mut best = if maximize { -INFINITY } else { INFINITY };
        for mv in moves {
            let mut child = board.play(mv);
            let score = self.minimax(&mut child, color.opposite(), depth - 1);
            best = if maximize { best.max(score) } else { best.min(score) };
        }
        best
    }
}

impl Algorithm for Minimax {
    fn find_best_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move> {
        self.search(board, color, depth).best_move
    }

    fn nodes_searched(&self) -> u64 { self.nodes }
}
