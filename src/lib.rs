// Chess search core: board with make/unmake, move generation, evaluation and search
pub mod board;
pub mod eval;
pub mod movegen;
pub mod perft;
pub mod search;

pub use board::{Board, Color, Move, Piece, PieceKind, Position, Square};
pub use search::{Algorithm, AlphaBeta, Minimax, Random, SearchParams, SearchResult};
