pub mod cache;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;
pub mod square;
pub mod zobrist;

pub use cache::PieceCache;
pub use error::{FenError, MoveError};
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
pub use square::Square;

use std::fmt;
use std::ops::{Deref, DerefMut};

/// Authoritative position: grid, incremental Zobrist hash, king squares and
/// per-color occupancy. All four are updated together by `set`, so every
/// mutation path (`set`, `apply`, `undo`) keeps them consistent.
///
/// The board does not know whose turn it is; callers pass the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; 64],
    hash: u64,
    kings: [Option<Square>; 2],
    cache: PieceCache,
}

impl Default for Board {
    fn default() -> Self { Self::empty() }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self { grid: [None; 64], hash: 0, kings: [None; 2], cache: PieceCache::default() }
    }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for col in 0..8 {
            b.set(Square::new(0, col), Some(Piece::new(BACK_RANK[col as usize], Color::Black)));
            b.set(Square::new(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            b.set(Square::new(6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            b.set(Square::new(7, col), Some(Piece::new(BACK_RANK[col as usize], Color::White)));
        }
        b
    }

    /// Piece on `sq`; off-board squares read as empty.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        sq.index().and_then(|i| self.grid[i])
    }

    #[inline]
    pub(crate) fn piece_at_index(&self, idx: usize) -> Option<Piece> {
        self.grid[idx]
    }

    /// Replaces the contents of `sq`, updating hash, piece cache and king
    /// squares. Off-board squares are ignored.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        let Some(idx) = sq.index() else { return };
        if let Some(old) = self.grid[idx] {
            self.hash ^= zobrist::key(idx, old);
            self.cache.remove(old.color, idx);
            if old.kind == PieceKind::King && self.kings[old.color.index()] == Some(sq) {
                self.kings[old.color.index()] = None;
            }
        }
        if let Some(new) = piece {
            self.hash ^= zobrist::key(idx, new);
            self.cache.insert(new.color, idx);
            if new.kind == PieceKind::King {
                self.kings[new.color.index()] = Some(sq);
            }
        }
        self.grid[idx] = piece;
    }

    /// Moves the piece on `mv.from` to `mv.to`, replacing whatever stood there.
    /// `mv.captured` is overwritten with the piece actually found on `mv.to`,
    /// so `undo` restores the board even from a hand-built or stale move.
    /// Moves touching off-board squares are ignored.
    pub fn apply(&mut self, mv: &mut Move) {
        if !mv.from.is_valid() || !mv.to.is_valid() { return; }
        mv.captured = self.get(mv.to);
        let piece = self.get(mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, None);
    }

    /// Exact inverse of `apply` for the move `apply` updated. Must be called in LIFO order.
    pub fn undo(&mut self, mv: &Move) {
        if !mv.from.is_valid() || !mv.to.is_valid() { return; }
        let piece = self.get(mv.to);
        debug_assert!(self.get(mv.from).is_none(), "undo of {} onto an occupied source square", mv);
        self.set(mv.from, piece);
        self.set(mv.to, mv.captured);
    }

    /// Applies `mv` and returns a guard that undoes it when dropped.
    pub fn play(&mut self, mut mv: Move) -> Played<'_> {
        self.apply(&mut mv);
        Played { board: self, mv }
    }

    #[inline]
    pub fn hash(&self) -> u64 { self.hash }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> { self.kings[color.index()] }

    #[inline]
    pub fn cache(&self) -> &PieceCache { &self.cache }

    /// Occupied squares of `color`, ascending.
    pub fn squares(&self, color: Color) -> cache::Squares { self.cache.squares(color) }

    /// Total pieces of both colors, kings included.
    pub fn piece_count(&self) -> u32 {
        self.cache.count(Color::White) + self.cache.count(Color::Black)
    }
}

/// Scoped application of one move. Dereferences to the board in its
/// post-move state; dropping it undoes the move, so unwinding a search
/// frame by any path restores the parent position.
pub struct Played<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Played<'_> {
    type Target = Board;
    fn deref(&self) -> &Board { self.board }
}

impl DerefMut for Played<'_> {
    fn deref_mut(&mut self) -> &mut Board { self.board }
}

impl Drop for Played<'_> {
    fn drop(&mut self) {
        self.board.undo(&self.mv);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.get(Square::new(row, col)) {
                    Some(p) => write!(f, " {}", p)?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
