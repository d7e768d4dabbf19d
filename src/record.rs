//! Match records, bounded history, and replay.
//!
//! A finished match is stored as its ordered move list. Replaying the first
//! `k` moves onto an empty board always reproduces the board as it stood
//! after move `k`, which is all the replay viewer needs.

use std::collections::VecDeque;

use crate::ai::Difficulty;
use crate::board::{Board, Move, Side};
use crate::constants::HISTORY_LEN;

/// One placement in a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub side: Side,
}

/// A finished match. `winner` is `None` for a draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<Side>,
    pub moves: Vec<MoveRecord>,
    pub difficulty: Difficulty,
    /// Stone skin the match was played with.
    pub skin: String,
}

impl GameRecord {
    pub fn turn_count(&self) -> usize {
        self.moves.len()
    }
}

/// Rebuild the board after the first `step` moves. `step` is clamped to
/// the length of the move list.
///
/// # Panics
///
/// Panics if the move list places two stones on the same point.
pub fn replay_board(moves: &[MoveRecord], step: usize) -> Board {
    let mut board = Board::new();
    for r in &moves[..step.min(moves.len())] {
        board.place(r.mv.row, r.mv.col, r.side);
    }
    board
}

/// Most recent finished matches, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    games: VecDeque<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished match, dropping the oldest beyond the cap.
    pub fn push(&mut self, record: GameRecord) {
        self.games.push_front(record);
        self.games.truncate(HISTORY_LEN);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.games.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.games.iter()
    }
}

/// Position within a recorded match. Step 0 is the empty board and step
/// `len` is the final position.
#[derive(Clone, Debug)]
pub struct ReplayCursor<'a> {
    record: &'a GameRecord,
    step: usize,
}

impl<'a> ReplayCursor<'a> {
    /// Start at the empty board.
    pub fn new(record: &'a GameRecord) -> Self {
        Self { record, step: 0 }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.record.turn_count()
    }

    pub fn is_empty(&self) -> bool {
        self.record.moves.is_empty()
    }

    pub fn at_end(&self) -> bool {
        self.step >= self.len()
    }

    pub fn start(&mut self) {
        self.step = 0;
    }

    pub fn end(&mut self) {
        self.step = self.len();
    }

    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Advance one move. Returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Jump to `step`, clamped to the match length.
    pub fn seek(&mut self, step: usize) {
        self.step = step.min(self.len());
    }

    pub fn board(&self) -> Board {
        replay_board(&self.record.moves, self.step)
    }

    /// The move that produced the current position.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.step.checked_sub(1).and_then(|i| self.record.moves.get(i))
    }
}
