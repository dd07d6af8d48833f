use std::fmt;

/// Board coordinate. Row 0 is rank 8 (Black's back rank), column 0 is file a.
///
/// A `Square` may lie off the board: sliding generation steps past the edge
/// and `Board` treats such squares as empty and unwritable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self { Self { row, col } }

    #[inline]
    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Dense index `row * 8 + col`, or `None` off the board.
    #[inline]
    pub fn index(self) -> Option<usize> {
        if self.is_valid() { Some(self.row as usize * 8 + self.col as usize) } else { None }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self { row: (idx / 8) as i8, col: (idx % 8) as i8 }
    }

    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Self {
        Self { row: self.row + dr, col: self.col + dc }
    }

    /// Parses coordinate notation such as `e2`.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 2 { return None; }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) { return None; }
        Some(Self { row: (b'8' - r) as i8, col: (f - b'a') as i8 })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() { return write!(f, "??"); }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_eight_is_row_zero() {
        let a8 = Square::parse("a8").unwrap();
        assert_eq!(a8, Square::new(0, 0));
        let h1 = Square::parse("h1").unwrap();
        assert_eq!(h1, Square::new(7, 7));
        assert_eq!(format!("{}", Square::new(6, 4)), "e2");
    }

    #[test]
    fn off_board_has_no_index() {
        assert_eq!(Square::new(-1, 3).index(), None);
        assert_eq!(Square::new(3, 8).index(), None);
        assert_eq!(Square::new(7, 7).index(), Some(63));
        assert!(Square::parse("i1").is_none());
        assert!(Square::parse("e9").is_none());
    }
}
