use crate::board::{Color, Square};

/// Occupied squares per color, one bit per dense square index.
///
/// Kept in lockstep with the grid by `Board::set` so lookups that need
/// "all pieces of a color" never scan 64 squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceCache {
    occupied: [u64; 2],
}

impl PieceCache {
    #[inline]
    pub fn insert(&mut self, color: Color, idx: usize) {
        self.occupied[color.index()] |= 1u64 << idx;
    }

    #[inline]
    pub fn remove(&mut self, color: Color, idx: usize) {
        self.occupied[color.index()] &= !(1u64 << idx);
    }

    #[inline]
    pub fn contains(&self, color: Color, idx: usize) -> bool {
        self.occupied[color.index()] & (1u64 << idx) != 0
    }

    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.occupied[color.index()].count_ones()
    }

    /// Squares of `color` in ascending index order.
    pub fn squares(&self, color: Color) -> Squares {
        Squares(self.occupied[color.index()])
    }
}

pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 { return None; }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}
