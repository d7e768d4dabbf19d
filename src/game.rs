//! Turn driver for a single match.
//!
//! A [`Game`] owns the live board, alternates sides starting with Black,
//! validates every placement, detects wins and draws, and keeps the move
//! log the replay viewer reconstructs boards from. Human and engine moves
//! go through the same [`Game::play`] path.

use std::time::Duration;

use fastrand::Rng;
use tracing::info;

use crate::ai::{select_move, Difficulty};
use crate::board::{Board, Move, Side, WinResult};
use crate::constants::{DEFAULT_SKIN, ENGINE_TURN_SECS, HUMAN_TURN_SECS};
use crate::error::MoveError;
use crate::record::{GameRecord, MoveRecord};

/// The side controlled by the human player.
pub const HUMAN: Side = Side::Black;

/// State of a match after the last move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won(WinResult),
    Draw,
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// A match in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Side,
    difficulty: Difficulty,
    moves: Vec<MoveRecord>,
    status: Status,
}

impl Game {
    /// Start a new match at the given difficulty. Black moves first.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            to_move: Side::Black,
            difficulty,
            moves: Vec::new(),
            status: Status::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().map(|r| r.mv)
    }

    /// Play `mv` for the side on turn.
    pub fn play(&mut self, mv: Move) -> Result<&Status, MoveError> {
        self.play_as(self.to_move, mv)
    }

    /// Play `mv` for `side`, which must be the side on turn.
    pub fn play_as(&mut self, side: Side, mv: Move) -> Result<&Status, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if side != self.to_move {
            return Err(MoveError::WrongSide {
                expected: self.to_move,
                got: side,
            });
        }
        self.board.try_place(mv, side)?;
        self.moves.push(MoveRecord { mv, side });

        if let Some(win) = self.board.check_winner(mv.row, mv.col, side) {
            info!(winner = %side, moves = self.moves.len(), "game won");
            self.status = Status::Won(win);
        } else if self.board.is_full() {
            info!(moves = self.moves.len(), "game drawn");
            self.status = Status::Draw;
        } else {
            self.to_move = side.opponent();
        }

        Ok(&self.status)
    }

    /// Let the engine choose and play a move for the side on turn.
    pub fn genmove(&mut self, rng: &mut Rng) -> Result<Move, MoveError> {
        self.genmove_with(self.difficulty, rng)
    }

    /// Like [`Game::genmove`] but at an explicit strength, for engine
    /// versus engine play.
    pub fn genmove_with(
        &mut self,
        difficulty: Difficulty,
        rng: &mut Rng,
    ) -> Result<Move, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let mv = select_move(&mut self.board, self.to_move, difficulty, rng);
        self.play(mv)?;
        Ok(mv)
    }

    /// Time allowed for the side on turn before [`Game::on_timeout`] applies.
    ///
    /// The game keeps no clock. Whoever schedules turns (a UI or a protocol
    /// controller) times the budget and calls [`Game::on_timeout`] when it
    /// runs out.
    pub fn turn_budget(&self) -> Duration {
        if self.to_move == HUMAN {
            Duration::from_secs(HUMAN_TURN_SECS)
        } else {
            Duration::from_secs(ENGINE_TURN_SECS)
        }
    }

    /// The side on turn ran out of time: the engine moves on its behalf.
    pub fn on_timeout(&mut self, rng: &mut Rng) -> Result<Move, MoveError> {
        info!(side = %self.to_move, "turn timed out");
        self.genmove(rng)
    }

    /// Reset to an empty board, keeping the difficulty.
    pub fn restart(&mut self) {
        *self = Game::new(self.difficulty);
    }

    /// Summary of a finished match, or `None` while it is still playing.
    /// The record carries the default skin; callers tracking skins
    /// overwrite it.
    pub fn to_record(&self) -> Option<GameRecord> {
        let winner = match &self.status {
            Status::Playing => return None,
            Status::Won(win) => Some(win.winner),
            Status::Draw => None,
        };
        Some(GameRecord {
            winner,
            moves: self.moves.clone(),
            difficulty: self.difficulty,
            skin: DEFAULT_SKIN.to_string(),
        })
    }
}
