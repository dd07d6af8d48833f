use crate::board::{Board, Color};
use crate::eval::Evaluator;

/// Plain material count: P=100 N=320 B=330 R=500 Q=900 K=20000.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl Evaluator for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        let side = |c: Color| -> i32 { board.squares(c).filter_map(|s| board.get(s)).map(|p| p.value()).sum() };
        side(Color::White) - side(Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    #[test]
    fn startpos_material_is_balanced() {
        assert_eq!(Material.evaluate(&Board::startpos()), 0);
    }

    #[test]
    fn extra_rook_counts_for_its_owner() {
        let w = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(Material.evaluate(w.board()), 500);
        let b = Position::from_fen("r3k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(Material.evaluate(b.board()), -500);
    }
}
