use crate::board::{Board, Color, Move};
use crate::movegen;
use crate::search::{Algorithm, SearchParams};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks a legal move uniformly at random. Depth is ignored.
pub struct Random {
    rng: SmallRng,
    nodes: u64,
}

impl Default for Random {
    fn default() -> Self {
        Self { rng: SmallRng::from_entropy(), nodes: 0 }
    }
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), nodes: 0 }
    }

    pub fn with_params(params: &SearchParams) -> Self {
        params.seed.map_or_else(Self::default, Self::new)
    }
}

impl Algorithm for Random {
    fn find_best_move(&mut self, board: &mut Board, color: Color, _depth: u32) -> Option<Move> {
        let moves = movegen::legal_moves(board, color);
        // Not a search metric, just the number of candidates.
        self.nodes = moves.len() as u64;
        moves.choose(&mut self.rng).copied()
    }

    fn nodes_searched(&self) -> u64 { self.nodes }
}
