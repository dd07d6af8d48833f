use crate::board::{zobrist, Board, Color, Move};
use crate::eval::{Evaluator, MasterEvaluator};
use crate::movegen;
use crate::search::ordering::{hoist, order_moves};
use crate::search::qsearch::QuiescenceSearch;
use crate::search::tt::{Bound, TranspositionTable};
use crate::search::{terminal_score, Algorithm, SearchParams, SearchResult, INFINITY};
use std::sync::Arc;

/// Negamax alpha-beta with MVV-LVA ordering, quiescence at the horizon and an
/// optional transposition table.
pub struct AlphaBeta {
    evaluator: Arc<dyn Evaluator>,
    qsearch: QuiescenceSearch,
    tt: TranspositionTable,
    params: SearchParams,
    nodes: u64,
    tt_hits: u64,
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::with_params(Arc::new(MasterEvaluator::default()), SearchParams::default())
    }
}

impl AlphaBeta {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self::with_params(evaluator, SearchParams::default())
    }

    pub fn with_params(evaluator: Arc<dyn Evaluator>, params: SearchParams) -> Self {
        let qsearch = QuiescenceSearch::new(evaluator.clone()).with_max_depth(params.qsearch_depth);
        Self {
            evaluator,
            qsearch,
            tt: TranspositionTable::new(params.tt_entries),
            params,
            nodes: 0,
            tt_hits: 0,
        }
    }

    pub fn tt(&self) -> &TranspositionTable { &self.tt }
    pub fn tt_mut(&mut self) -> &mut TranspositionTable { &mut self.tt }

    /// Transposition key: placement hash plus side to move.
    #[inline]
    pub fn tt_key(board: &Board, color: Color) -> u64 {
        board.hash() ^ zobrist::side_key(color)
    }

    pub fn search(&mut self, board: &mut Board, color: Color, depth: u32) -> SearchResult {
        let depth = depth.max(1);
        self.nodes = 0;
        self.tt_hits = 0;
        self.qsearch.reset_nodes();
        self.tt.bump_age();

        let mut moves = movegen::legal_moves(board, color);
        if moves.is_empty() {
            return SearchResult { best_move: None, score: terminal_score(board, color) * color.sign(), nodes: 0 };
        }
        let key = Self::tt_key(board, color);
        order_moves(&mut moves);
        if self.params.use_tt {
            hoist(&mut moves, self.tt.probe(key).and_then(|e| e.best));
        }

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<Move> = None;
        let mut best_score = -INFINITY;
        for mv in moves {
            let score = {
                let mut child = board.play(mv);
                -self.negamax(&mut child, color.opposite(), depth - 1, -beta, -alpha)
            };
            if score > best_score { best_score = score; best = Some(mv); }
            if score > alpha { alpha = score; }
        }
        if self.params.use_tt {
            self.tt.store(key, best_score, depth, Bound::Exact, best, self.tt.age());
        }

        let nodes = self.nodes + self.qsearch.nodes();
        log::debug!(
            "alphabeta depth {} nodes {} score {} best {}",
            depth, nodes, best_score * color.sign(), best.map(|m| m.to_string()).unwrap_or_default()
        );
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("tt hits {} occupancy {}/{}", self.tt_hits, self.tt.len(), self.tt.capacity());
        }
        SearchResult { best_move: best, score: best_score * color.sign(), nodes }
    }

    /// Score relative to `color`.
    fn negamax(&mut self, board: &mut Board, color: Color, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 { return self.horizon(board, color, alpha, beta); }

        let key = Self::tt_key(board, color);
        let orig_alpha = alpha;
        let mut tt_move = None;
        if self.params.use_tt {
            if let Some(e) = self.tt.probe(key) {
                tt_move = e.best;
                if e.depth >= depth {
                    self.tt_hits += 1;
                    match e.bound {
                        Bound::Exact => return e.score,
                        Bound::Lower => alpha = alpha.max(e.score),
                        Bound::Upper => beta = beta.min(e.score),
                    }
                    if alpha >= beta { return e.score; }
                }
            }
        }

        let mut moves = movegen::legal_moves(board, color);
        if moves.is_empty() { return terminal_score(board, color); }
        order_moves(&mut moves);
        hoist(&mut moves, tt_move);

        let mut best = -INFINITY;
        let mut best_move: Option<Move> = None;
        for mv in moves {
            let score = {
                let mut child = board.play(mv);
                -self.negamax(&mut child, color.opposite(), depth - 1, -beta, -alpha)
            };
            if score > best { best = score; best_move = Some(mv); }
            if best > alpha { alpha = best; }
            if alpha >= beta { break; }
        }

        if self.params.use_tt {
            let bound = if best <= orig_alpha { Bound::Upper } else if best >= beta { Bound::Lower } else { Bound::Exact };
            self.tt.store(key, best, depth, bound, best_move, self.tt.age());
        }
        best
    }

    fn horizon(&mut self, board: &mut Board, color: Color, alpha: i32, beta: i32) -> i32 {
        if self.params.use_quiescence {
            self.qsearch.search_captures(board, color, alpha, beta)
        } else {
            self.evaluator.evaluate(board) * color.sign()
        }
    }
}

impl Algorithm for AlphaBeta {
    fn find_best_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move> {
        self.search(board, color, depth).best_move
    }

    fn nodes_searched(&self) -> u64 { self.nodes + self.qsearch.nodes() }
}
