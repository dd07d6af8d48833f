use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is empty")]
    Empty,
    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files, expected 8")]
    FileCount { rank: usize, files: usize },
    #[error("unknown piece character '{0}'")]
    UnknownPiece(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("malformed coordinate move '{0}'")]
    Malformed(String),
    #[error("illegal move '{0}'")]
    Illegal(String),
}
