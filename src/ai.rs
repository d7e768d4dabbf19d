//! Computer opponent move selection.
//!
//! Three strategies of increasing strength share one signature and are
//! selected by [`Difficulty`]:
//!
//! - **Easy**: random play next to existing stones, blocking an immediate
//!   loss only occasionally.
//! - **Medium**: wins or blocks when it can, otherwise greedily extends its
//!   longest chain with a bias toward the center.
//! - **Hard**: scores every nearby point by its attacking and defending
//!   line patterns and plays the best one.
//!
//! None of them search deeper than the move being played. All randomness
//! comes from the caller's [`fastrand::Rng`] so games can be reproduced
//! from a seed.

use std::fmt;
use std::str::FromStr;

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Move, Side};
use crate::constants::{
    CENTER, DEFENSE_WEIGHT, EASY_BLOCK_PROB, EASY_RADIUS, HARD_RADIUS, MEDIUM_CHAIN_WEIGHT, N,
    TIE_TOLERANCE,
};
use crate::error::ParseError;
use crate::patterns::{evaluate_cell, max_chain_length};

/// Signature shared by every strategy.
pub type Strategy = fn(&mut Board, Side, &mut Rng) -> Move;

/// Engine strength, fixed for the duration of a match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The strategy this difficulty plays with.
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => easy_move,
            Difficulty::Medium => medium_move,
            Difficulty::Hard => hard_move,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseError::Difficulty(s.to_string())),
        }
    }
}

/// Choose the next move for `side`.
///
/// The board is borrowed mutably only for trial placements, which are
/// reverted before this returns. An empty board always yields the center.
///
/// # Panics
///
/// Panics if the board is full.
pub fn select_move(
    board: &mut Board,
    side: Side,
    difficulty: Difficulty,
    rng: &mut Rng,
) -> Move {
    assert!(!board.is_full(), "select_move called on a full board");

    if board.is_empty() {
        return Move::CENTER;
    }

    let mv = (difficulty.strategy())(board, side, rng);
    debug_assert!(board.at(mv).is_none(), "strategy returned occupied {mv}");
    debug!(%side, %difficulty, %mv, "engine move");
    mv
}

/// First point in row-major order where `side` would complete five.
pub fn find_winning_move(board: &mut Board, side: Side) -> Option<Move> {
    let points: Vec<Move> = board.empty_points().collect();
    points.into_iter().find(|&mv| {
        let trial = board.trial(mv, side);
        trial.check_winner(mv.row, mv.col, side).is_some()
    })
}

/// Uniform choice from `moves`.
fn pick(rng: &mut Rng, moves: &[Move]) -> Option<Move> {
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.usize(..moves.len())])
    }
}

/// Mostly random play adjacent to existing stones.
pub fn easy_move(board: &mut Board, side: Side, rng: &mut Rng) -> Move {
    if rng.f64() < EASY_BLOCK_PROB {
        if let Some(mv) = find_winning_move(board, side.opponent()) {
            debug!(%mv, "easy: blocking");
            return mv;
        }
    }

    let candidates: Vec<Move> = if board.is_empty() {
        vec![Move::CENTER]
    } else {
        board
            .empty_points()
            .filter(|mv| board.count_neighbors(mv.row, mv.col, EASY_RADIUS) > 0)
            .collect()
    };

    pick(rng, &candidates).unwrap_or(Move::CENTER)
}

/// Win, else block, else extend the longest chain nearest the center.
pub fn medium_move(board: &mut Board, side: Side, rng: &mut Rng) -> Move {
    if let Some(mv) = find_winning_move(board, side) {
        return mv;
    }
    if let Some(mv) = find_winning_move(board, side.opponent()) {
        debug!(%mv, "medium: blocking");
        return mv;
    }

    let mut best_score = i32::MIN;
    let mut best_moves = Vec::new();

    let points: Vec<Move> = board.empty_points().collect();
    for mv in points {
        let chain = {
            let trial = board.trial(mv, side);
            max_chain_length(&trial, mv, side)
        };
        let score = chain as i32 * MEDIUM_CHAIN_WEIGHT + centrality(mv);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    pick(rng, &best_moves).unwrap_or(Move::CENTER)
}

/// `N` minus the Manhattan distance to the center.
fn centrality(mv: Move) -> i32 {
    let c = CENTER as i32;
    N as i32 - (mv.row as i32 - c).abs() - (mv.col as i32 - c).abs()
}

/// Combined attack and defense score used by the Hard strategy.
pub fn hard_score(board: &Board, mv: Move, side: Side) -> f64 {
    let attack = evaluate_cell(board, mv, side) as f64;
    let defense = evaluate_cell(board, mv, side.opponent()) as f64;
    attack + defense * DEFENSE_WEIGHT
}

/// Best pattern score among points near existing stones.
///
/// Ties are collected against the running best as the scan proceeds, not
/// against the final maximum, so the pool depends on row-major scan order.
pub fn hard_move(board: &mut Board, side: Side, rng: &mut Rng) -> Move {
    if board.is_empty() {
        return Move::CENTER;
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_moves = Vec::new();

    for mv in board.empty_points() {
        if board.count_neighbors(mv.row, mv.col, HARD_RADIUS) == 0 {
            continue;
        }

        let total = hard_score(board, mv, side);

        if total > best_score {
            best_score = total;
            best_moves.clear();
            best_moves.push(mv);
        } else if (total - best_score).abs() < TIE_TOLERANCE {
            best_moves.push(mv);
        }
    }

    debug!(best_score, ties = best_moves.len(), "hard: scored");
    pick(rng, &best_moves).unwrap_or(Move::CENTER)
}
