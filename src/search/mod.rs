pub mod alphabeta;
pub mod minimax;
pub mod ordering;
pub mod qsearch;
pub mod random;
pub mod tt;

use crate::board::{Board, Color, Move};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;
pub use qsearch::QuiescenceSearch;
pub use random::Random;
pub use tt::{Bound, Entry, TranspositionTable};

// Mate is scored as a fixed value with no distance adjustment; INFINITY bounds every window.
pub const MATE_SCORE: i32 = 100_000;
pub const DRAW_SCORE: i32 = 0;
pub const INFINITY: i32 = 1_000_000;

/// A search strategy over a board it borrows exclusively for the whole call.
pub trait Algorithm {
    /// Best move for `color`, or `None` when it has no legal move.
    /// A depth of 0 is searched as depth 1.
    fn find_best_move(&mut self, board: &mut Board, color: Color, depth: u32) -> Option<Move>;

    /// Nodes visited by the last `find_best_move` call.
    fn nodes_searched(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub depth: u32,
    pub use_tt: bool,
    pub use_quiescence: bool,
    pub qsearch_depth: u32,
    pub tt_entries: usize,
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 3,
            use_tt: true,
            use_quiescence: true,
            qsearch_depth: qsearch::QSEARCH_MAX_DEPTH,
            tt_entries: tt::DEFAULT_ENTRIES,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read search config: {}", path.as_ref().display()))?;
        serde_json::from_str(&text).context("parse search config")
    }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Centipawns from White's point of view.
    pub score: i32,
    pub nodes: u64,
}

/// Score of a node whose side to move has no legal move, relative to that side.
pub(crate) fn terminal_score(board: &Board, color: Color) -> i32 {
    if crate::movegen::is_king_in_check(board, color) { -MATE_SCORE } else { DRAW_SCORE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let p: SearchParams = serde_json::from_str(r#"{ "depth": 5, "use_tt": false }"#).unwrap();
        assert_eq!(p.depth, 5);
        assert!(!p.use_tt);
        assert!(p.use_quiescence);
        assert_eq!(p.qsearch_depth, qsearch::QSEARCH_MAX_DEPTH);
    }
}
