//! Pseudo-legal and legal move generation over a `Board`.
//!
//! Only plain piece moves and simple captures are generated. Castling, en
//! passant and promotion belong to the layer that drives a game; a pawn
//! reaching the last rank here simply stays a pawn.

pub mod attacks;

use crate::board::{Board, Color, Move, Piece, PieceKind, Square};
use attacks::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};

pub use attacks::{cheapest_attacker, is_square_attacked};

/// Moves obeying the movement rule of the piece on `from`, ignoring king safety.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.get(from) {
        push_pseudo_legal(board, from, piece, &mut out);
    }
    out
}

fn push_pseudo_legal(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => push_pawn(board, from, piece, out),
        PieceKind::Knight => push_steps(board, from, piece, &KNIGHT_OFFSETS, out),
        PieceKind::King => push_steps(board, from, piece, &KING_OFFSETS, out),
        PieceKind::Bishop => push_slides(board, from, piece, &DIAGONAL, out),
        PieceKind::Rook => push_slides(board, from, piece, &ORTHOGONAL, out),
        PieceKind::Queen => {
            push_slides(board, from, piece, &ORTHOGONAL, out);
            push_slides(board, from, piece, &DIAGONAL, out);
        }
    }
}

fn push_steps(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        let to = from.offset(dr, dc);
        if !to.is_valid() { continue; }
        match board.get(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(p) if p.color != piece.color => out.push(Move::new(from, to, piece, Some(p))),
            Some(_) => {}
        }
    }
}

fn push_slides(board: &Board, from: Square, piece: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while to.is_valid() {
            match board.get(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(p) => {
                    if p.color != piece.color { out.push(Move::new(from, to, piece, Some(p))); }
                    break;
                }
            }
            to = to.offset(dr, dc);
        }
    }
}

fn push_pawn(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let fwd = piece.color.forward();
    let start_row = match piece.color { Color::White => 6, Color::Black => 1 };

    let one = from.offset(fwd, 0);
    if one.is_valid() && board.get(one).is_none() {
        out.push(Move::new(from, one, piece, None));
        let two = from.offset(2 * fwd, 0);
        if from.row == start_row && board.get(two).is_none() {
            out.push(Move::new(from, two, piece, None));
        }
    }
    for dc in [-1, 1] {
        let to = from.offset(fwd, dc);
        if let Some(p) = board.get(to) {
            if p.color != piece.color { out.push(Move::new(from, to, piece, Some(p))); }
        }
    }
}

/// Plays `mv` on the live board, checks `color`'s king and takes it back.
pub fn is_legal(board: &mut Board, mv: &Move, color: Color) -> bool {
    let child = board.play(*mv);
    !is_king_in_check(&child, color)
}

pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let king = board.king_square(color).or_else(|| {
        board.squares(color).find(|&s| board.get(s).map_or(false, |p| p.kind == PieceKind::King))
    });
    match king {
        Some(sq) => is_square_attacked(board, sq, color.opposite()),
        None => false,
    }
}

/// Every pseudo-legal move of `color` that does not leave its own king attacked.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for from in board.squares(color) {
        if let Some(piece) = board.get(from) {
            push_pseudo_legal(board, from, piece, &mut moves);
        }
    }
    moves.retain(|m| is_legal(board, m, color));
    moves
}

/// Legal moves of `color` landing on an opposing piece.
pub fn capture_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    for from in board.squares(color) {
        if let Some(piece) = board.get(from) {
            push_pseudo_legal(board, from, piece, &mut moves);
        }
    }
    moves.retain(|m| m.is_capture() && is_legal(board, m, color));
    moves
}

pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    for from in board.squares(color) {
        if let Some(piece) = board.get(from) {
            push_pseudo_legal(board, from, piece, &mut pseudo);
        }
    }
    pseudo.iter().any(|m| is_legal(board, m, color))
}

pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_legal_move(board, color)
}

pub fn is_stalemate(board: &mut Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_legal_move(board, color)
}
