pub mod material;
pub mod pawns;
pub mod pst;

use crate::board::Board;

pub use material::Material;
pub use pawns::PawnStructure;
pub use pst::PieceSquare;

/// Static position score in centipawns; positive favors White.
///
/// Implementations hold no per-position state, so one instance can be
/// shared by any number of independent searches.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Sum of sub-evaluators. Order does not matter; adding or removing one
/// changes the total by exactly that evaluator's score.
pub struct MasterEvaluator {
    parts: Vec<Box<dyn Evaluator>>,
}

impl MasterEvaluator {
    pub fn new() -> Self { Self { parts: Vec::new() } }

    pub fn with<E: Evaluator + 'static>(mut self, e: E) -> Self {
        self.parts.push(Box::new(e));
        self
    }

    pub fn len(&self) -> usize { self.parts.len() }
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }
}

impl Default for MasterEvaluator {
    fn default() -> Self {
        Self::new().with(Material).with(PieceSquare).with(PawnStructure)
    }
}

impl Evaluator for MasterEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        self.parts.iter().map(|e| e.evaluate(board)).sum()
    }
}
