use crate::board::Move;

/// Most valuable victim, least valuable attacker. Quiet moves score 0.
#[inline]
pub fn mvv_lva(mv: &Move) -> i32 {
    match mv.captured {
        Some(victim) => 10 * victim.value() - mv.piece.value(),
        None => 0,
    }
}

/// Scores every move and sorts best first. Ties keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    for m in moves.iter_mut() { m.score = mvv_lva(m); }
    moves.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Moves `first` to the front if present, leaving the rest in order.
pub fn hoist(moves: &mut Vec<Move>, first: Option<Move>) {
    if let Some(m) = first {
        if let Some(pos) = moves.iter().position(|&mv| mv == m) {
            let mv = moves.remove(pos);
            moves.insert(0, mv);
        }
    }
}
