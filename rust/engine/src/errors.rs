use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand card index {index} out of range (hand holds {len})")]
    InvalidHandIndex { index: usize, len: usize },
    #[error("Table card index {index} out of range (table holds {len})")]
    InvalidTableIndex { index: usize, len: usize },
    #[error("Invalid rank: {0} (expected 1-13)")]
    InvalidRank(u8),
}
