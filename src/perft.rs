use crate::board::{Board, Color, Move};
use crate::movegen;

// Make/unmake perft over the core generator (no cloning).
pub fn perft(board: &mut Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = movegen::legal_moves(board, color);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.play(mv);
        nodes += perft(&mut child, color.opposite(), depth - 1);
    }
    nodes
}

/// Leaf counts below each root move.
pub fn perft_divide(board: &mut Board, color: Color, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    movegen::legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let mut child = board.play(mv);
            (mv, perft(&mut child, color.opposite(), depth - 1))
        })
        .collect()
}
