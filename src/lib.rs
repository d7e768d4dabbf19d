//! Gomoku: five-in-a-row on a 15x15 board against a computer opponent.
//!
//! This crate provides the game rules, a one-ply move engine at three
//! strengths, a turn driver that records matches for replay, and a
//! GTP-style text protocol for driving it all from another program.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, strategy weights and reward values
//! - [`board`] - Board state, win detection and neighbor queries
//! - [`patterns`] - Chain length and line pattern scoring
//! - [`ai`] - Easy, Medium and Hard move selection
//! - [`game`] - Turn alternation, validation and match outcome
//! - [`record`] - Match records, history and replay
//! - [`progress`] - Coins and rank progression
//! - [`gtp`] - Text protocol front end
//! - [`error`] - Errors for untrusted input
//!
//! ## Example
//!
//! ```
//! use gomoku::ai::{select_move, Difficulty};
//! use gomoku::board::{Board, Move, Side};
//!
//! let mut board = Board::new();
//! let mut rng = fastrand::Rng::with_seed(7);
//!
//! // Every difficulty opens in the center
//! let mv = select_move(&mut board, Side::Black, Difficulty::Hard, &mut rng);
//! assert_eq!(mv, Move::CENTER);
//!
//! board.place(mv.row, mv.col, Side::Black);
//! let reply = select_move(&mut board, Side::White, Difficulty::Hard, &mut rng);
//! println!("White plays {reply}");
//! ```

pub mod ai;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod gtp;
pub mod patterns;
pub mod progress;
pub mod record;
