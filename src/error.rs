//! Recoverable errors raised at the turn-driver and protocol boundary.
//!
//! The board itself treats illegal placements as caller bugs and panics;
//! these types exist for the layers that accept untrusted input.

use crate::board::{Move, Side};

/// Reasons a requested move cannot be applied to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[error("illegal move: ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
    /// Point is not empty.
    #[error("illegal move: {0} is not empty")]
    Occupied(Move),
    /// The game has already been won or drawn.
    #[error("illegal move: game is over")]
    GameOver,
    /// The move was submitted for the side that is not on turn.
    #[error("illegal move: {expected} to play, got {got}")]
    WrongSide { expected: Side, got: Side },
}

/// Failures when parsing text input (vertices, colors, difficulty names).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid vertex: {0}")]
    Vertex(String),
    #[error("invalid color: {0}")]
    Color(String),
    #[error("invalid difficulty: {0}")]
    Difficulty(String),
}

/// Reasons a purchase or skin change is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("unknown skin: {0}")]
    UnknownItem(String),
    #[error("not enough coins: {price} needed, {coins} available")]
    InsufficientCoins { price: u32, coins: u32 },
    #[error("already owned: {0}")]
    AlreadyOwned(String),
    #[error("not owned: {0}")]
    NotOwned(String),
}
