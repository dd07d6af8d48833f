use crate::board::{Piece, Square};
use std::fmt;

/// A plain piece move. Applying it mutates a `Board`; undoing it with the same
/// value restores the board exactly.
///
/// `captured` is read from the board when the move is generated. `score` is a
/// scratch field for move ordering and never takes part in equality.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub score: i32,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Self { from, to, piece, captured, score: 0 }
    }

    #[inline]
    pub fn is_capture(&self) -> bool { self.captured.is_some() }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.piece == other.piece && self.captured == other.captured
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
