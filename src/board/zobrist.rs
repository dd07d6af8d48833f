use crate::board::{Board, Color, Piece};
use std::sync::OnceLock;

fn piece_index(piece: Piece) -> usize {
    piece.color.index() * 6 + piece.kind.index()
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; 12 * 64]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn table() -> &'static [u64; 12 * 64] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; 12 * 64];
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

/// Key for `piece` standing on the square with dense index `sq`.
#[inline]
pub fn key(sq: usize, piece: Piece) -> u64 {
    table()[piece_index(piece) * 64 + sq]
}

/// Mixed into transposition keys when Black is to move. Board hashes never include it.
pub fn side_key(color: Color) -> u64 {
    match color {
        Color::White => 0,
        Color::Black => *SIDE_KEY.get_or_init(|| splitmix64(0xABCDEF1234567890)),
    }
}

/// Hash recomputed from the grid alone. `Board::hash` must always equal this.
pub fn compute(board: &Board) -> u64 {
    let mut h = 0u64;
    for idx in 0..64 {
        if let Some(p) = board.piece_at_index(idx) {
            h ^= key(idx, p);
        }
    }
    h
}
