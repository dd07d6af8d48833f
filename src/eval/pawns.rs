use crate::board::{Board, Color, PieceKind, Square};
use crate::eval::Evaluator;

/// Pawn structure is only scored once this few pieces (kings included) remain.
pub const LATE_GAME_PIECES: u32 = 16;

const PASSED_BASE: f64 = 10.0;
const PASSED_GROWTH: f64 = 1.6;
const PROTECTED_FACTOR: f64 = 1.5;
const CENTRAL_FACTOR: f64 = 1.2;

/// Late-game passed pawn bonus, growing exponentially as the pawn nears promotion.
#[derive(Clone, Copy, Debug, Default)]
pub struct PawnStructure;

fn is_pawn_of(board: &Board, sq: Square, color: Color) -> bool {
    board.get(sq).map_or(false, |p| p.kind == PieceKind::Pawn && p.color == color)
}

/// No enemy pawn on the same or an adjacent file between `sq` and promotion.
pub fn is_passed(board: &Board, sq: Square, color: Color) -> bool {
    let enemy = color.opposite();
    let mut row = sq.row + color.forward();
    while (0..8).contains(&row) {
        for dc in -1..=1 {
            if is_pawn_of(board, Square::new(row, sq.col + dc), enemy) { return false; }
        }
        row += color.forward();
    }
    true
}

/// Rows left to the promotion rank.
#[inline]
fn distance_to_promotion(sq: Square, color: Color) -> i32 {
    match color { Color::White => sq.row as i32, Color::Black => 7 - sq.row as i32 }
}

fn passed_bonus(board: &Board, sq: Square, color: Color) -> f64 {
    let dist = distance_to_promotion(sq, color);
    let mut bonus = PASSED_BASE * PASSED_GROWTH.powi(6 - dist);
    let behind = -color.forward();
    if is_pawn_of(board, sq.offset(behind, -1), color) || is_pawn_of(board, sq.offset(behind, 1), color) {
        bonus *= PROTECTED_FACTOR;
    }
    if (2..=5).contains(&sq.col) {
        bonus *= CENTRAL_FACTOR;
    }
    bonus
}

impl Evaluator for PawnStructure {
    fn evaluate(&self, board: &Board) -> i32 {
        if board.piece_count() > LATE_GAME_PIECES { return 0; }
        let mut score = 0.0;
        for &color in &Color::ALL {
            for sq in board.squares(color) {
                if is_pawn_of(board, sq, color) && is_passed(board, sq, color) {
                    score += color.sign() as f64 * passed_bonus(board, sq, color);
                }
            }
        }
        score.round() as i32
    }
}
