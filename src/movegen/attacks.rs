use crate::board::{Board, Color, Piece, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Calls `f` with every piece of color `by` whose movement pattern covers `sq`.
/// Stops early once `f` returns true.
fn scan_attackers(board: &Board, sq: Square, by: Color, mut f: impl FnMut(Piece) -> bool) {
    let is = |s: Square, kind: PieceKind| board.get(s).filter(|p| p.color == by && p.kind == kind);

    // A pawn of `by` attacks diagonally forward, so it stands one row behind `sq`.
    for dc in [-1, 1] {
        if let Some(p) = is(sq.offset(-by.forward(), dc), PieceKind::Pawn) {
            if f(p) { return; }
        }
    }
    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(p) = is(sq.offset(dr, dc), PieceKind::Knight) {
            if f(p) { return; }
        }
    }
    for (dirs, slider) in [(&DIAGONAL, PieceKind::Bishop), (&ORTHOGONAL, PieceKind::Rook)] {
        for &(dr, dc) in dirs.iter() {
            let mut s = sq.offset(dr, dc);
            while s.is_valid() {
                if let Some(p) = board.get(s) {
                    if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                        if f(p) { return; }
                    }
                    break;
                }
                s = s.offset(dr, dc);
            }
        }
    }
    for (dr, dc) in KING_OFFSETS {
        if let Some(p) = is(sq.offset(dr, dc), PieceKind::King) {
            if f(p) { return; }
        }
    }
}

pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let mut hit = false;
    scan_attackers(board, sq, by, |_| { hit = true; true });
    hit
}

/// Lowest-valued piece of color `by` attacking `sq`, if any.
pub fn cheapest_attacker(board: &Board, sq: Square, by: Color) -> Option<Piece> {
    let mut best: Option<Piece> = None;
    scan_attackers(board, sq, by, |p| {
        if best.map_or(true, |b| p.value() < b.value()) { best = Some(p); }
        p.kind == PieceKind::Pawn
    });
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn sq(s: &str) -> Square { Square::parse(s).unwrap() }

    #[test]
    fn pawn_attacks_point_forward() {
        let p = Position::from_fen("8/8/8/3p4/8/8/3P4/8 w - - 0 1").unwrap();
        // Black pawn on d5 covers c4 and e4, not c6.
        assert!(is_square_attacked(p.board(), sq("c4"), Color::Black));
        assert!(is_square_attacked(p.board(), sq("e4"), Color::Black));
        assert!(!is_square_attacked(p.board(), sq("c6"), Color::Black));
        // White pawn on d2 covers e3.
        assert!(is_square_attacked(p.board(), sq("e3"), Color::White));
        assert!(!is_square_attacked(p.board(), sq("e1"), Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let p = Position::from_fen("8/8/8/8/R2p3k/8/8/8 b - - 0 1").unwrap();
        assert!(is_square_attacked(p.board(), sq("d4"), Color::White));
        assert!(!is_square_attacked(p.board(), sq("h4"), Color::White));
    }

    #[test]
    fn cheapest_attacker_prefers_lower_value() {
        let p = Position::from_fen("8/8/8/3q4/2P5/8/8/3R4 w - - 0 1").unwrap();
        let a = cheapest_attacker(p.board(), sq("d5"), Color::White).unwrap();
        assert_eq!(a.kind, PieceKind::Pawn);
        assert!(cheapest_attacker(p.board(), sq("h8"), Color::White).is_none());
    }
}
