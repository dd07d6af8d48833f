use crate::board::{Board, Color, FenError, Move, MoveError, Piece, Square};
use crate::movegen;

/// A board plus the side to move, with FEN import and coordinate-move play.
///
/// Only moves the core generator emits can be played here: castling,
/// en passant and promotion are applied by whoever drives the game, through
/// `board_mut().set(..)`.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side: Color,
}

impl Position {
    pub fn new(board: Board, side: Color) -> Self { Self { board, side } }

    pub fn startpos() -> Self {
        Self { board: Board::startpos(), side: Color::White }
    }

    /// Reads piece placement and side to move. Castling, en-passant and clock
    /// fields are accepted and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 { return Err(FenError::RankCount(ranks.len())); }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    col += d as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::UnknownPiece(c))?;
                if col < 8 { board.set(Square::new(row as i8, col as i8), Some(piece)); }
                col += 1;
            }
            if col != 8 { return Err(FenError::FileCount { rank: 8 - row, files: col }); }
        }

        let side = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::SideToMove(other.to_string())),
        };
        Ok(Self { board, side })
    }

    /// Starts from the initial position and plays each coordinate move in turn.
    pub fn from_moves<S: AsRef<str>>(moves: &[S]) -> Result<Self, MoveError> {
        let mut pos = Self::startpos();
        for m in moves { pos.play_uci(m.as_ref())?; }
        Ok(pos)
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn board_mut(&mut self) -> &mut Board { &mut self.board }
    pub fn side_to_move(&self) -> Color { self.side }
    pub fn set_side_to_move(&mut self, side: Color) { self.side = side; }

    /// Finds the legal move matching `uci` (e.g. `e2e4`), plays it and passes the turn.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, MoveError> {
        let (from, to) = match (uci.get(0..2).and_then(Square::parse), uci.get(2..4).and_then(Square::parse)) {
            (Some(f), Some(t)) if uci.len() == 4 => (f, t),
            _ => return Err(MoveError::Malformed(uci.to_string())),
        };
        let mut mv = movegen::legal_moves(&mut self.board, self.side)
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or_else(|| MoveError::Illegal(uci.to_string()))?;
        self.board.apply(&mut mv);
        self.side = self.side.opposite();
        Ok(mv)
    }

    pub fn legal_moves_count(&mut self) -> usize {
        movegen::legal_moves(&mut self.board, self.side).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn startpos_fen_matches_startpos_board() {
        let p = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(p.board(), &Board::startpos());
        assert_eq!(p.side_to_move(), Color::White);
    }

    #[test]
    fn fen_errors_are_reported() {
        assert_eq!(Position::from_fen("").unwrap_err(), FenError::Empty);
        assert_eq!(Position::from_fen("8/8/8/8 w").unwrap_err(), FenError::RankCount(4));
        assert_eq!(Position::from_fen("8/8/8/8/8/8/8/7 w").unwrap_err(), FenError::FileCount { rank: 1, files: 7 });
        assert_eq!(Position::from_fen("8/8/8/8/8/8/8/7x w").unwrap_err(), FenError::UnknownPiece('x'));
        assert_eq!(Position::from_fen("8/8/8/8/8/8/8/8 x").unwrap_err(), FenError::SideToMove("x".into()));
    }

    #[test]
    fn play_uci_moves_and_passes_turn() {
        let mut p = Position::startpos();
        let mv = p.play_uci("g1f3").unwrap();
        assert_eq!(mv.piece, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(p.side_to_move(), Color::Black);
        assert_eq!(p.play_uci("e2e4").unwrap_err(), MoveError::Illegal("e2e4".into()));
        assert_eq!(p.play_uci("e7").unwrap_err(), MoveError::Malformed("e7".into()));
    }

    #[test]
    fn move_count_follows_the_side_to_move() {
        let mut p = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        // Rook a2-a8 and b1-d1, king d1 d2 e2 f2 f1.
        assert_eq!(p.legal_moves_count(), 15);
        p.set_side_to_move(Color::Black);
        assert_eq!(p.side_to_move(), Color::Black);
        assert_eq!(p.legal_moves_count(), 5);
        assert_eq!(Position::startpos().legal_moves_count(), 20);
    }
}
