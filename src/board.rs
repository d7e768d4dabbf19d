//! Board representation and geometric queries.
//!
//! The board is a fixed 15x15 grid of optional stones. All queries take the
//! board explicitly; nothing here keeps global state. Coordinates are
//! `(row, col)` with row 0 at the top.
//!
//! Placing a stone out of range or on an occupied point is a caller bug and
//! panics. The turn driver validates user input with [`Board::try_place`]
//! before it ever reaches the unchecked path.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::constants::{CENTER, DIRECTIONS, EMPTY, N, STONE_BLACK, STONE_WHITE, WIN_LENGTH};
use crate::error::{MoveError, ParseError};

/// Column letters used in vertex notation. `I` is skipped as in Go notation.
const COLUMNS: &[u8; N] = b"ABCDEFGHJKLMNOP";

/// One of the two players. Black always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Character used for this side's stones in board diagrams.
    pub fn stone(self) -> char {
        match self {
            Side::Black => STONE_BLACK,
            Side::White => STONE_WHITE,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Side::Black),
            "w" | "white" => Ok(Side::White),
            _ => Err(ParseError::Color(s.to_string())),
        }
    }
}

/// A point on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// The center point, (7, 7) on a 15x15 board.
    pub const CENTER: Move = Move::new(CENTER, CENTER);

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `(dr, dc)` away from this point, or `None` past the wall.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Move> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < N && col < N).then_some(Move { row, col })
    }

    /// Whether the coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < N && self.col < N
    }
}

impl fmt::Display for Move {
    /// Vertex notation: column letter, then row number counted from the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMNS.get(self.col) {
            Some(&letter) if self.row < N => write!(f, "{}{}", letter as char, N - self.row),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Vertex(s.to_string());
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let col = COLUMNS
            .iter()
            .position(|&c| c as char == letter)
            .ok_or_else(invalid)?;
        let digits = chars.as_str();
        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let number: usize = digits.parse().map_err(|_| invalid())?;
        if number == 0 || number > N {
            return Err(invalid());
        }
        Ok(Move::new(N - number, col))
    }
}

/// The winning side and the contiguous cells that make up the line.
///
/// `line` starts with the placed stone, followed by the stones found
/// scanning forward along the axis, then those found scanning backward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinResult {
    pub winner: Side,
    pub line: Vec<Move>,
}

/// A 15x15 board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Side>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Side> {
        self.cells[row][col]
    }

    #[inline]
    pub fn at(&self, mv: Move) -> Option<Side> {
        self.cells[mv.row][mv.col]
    }

    /// Place a stone.
    ///
    /// # Panics
    ///
    /// Panics if the point is off the board or already occupied.
    pub fn place(&mut self, row: usize, col: usize, side: Side) {
        assert!(
            self.cells[row][col].is_none(),
            "place on occupied point ({row}, {col})"
        );
        self.cells[row][col] = Some(side);
    }

    /// Validate and place a stone, reporting why the placement is illegal.
    pub fn try_place(&mut self, mv: Move, side: Side) -> Result<(), MoveError> {
        if !mv.in_range() {
            return Err(MoveError::OutOfRange {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.at(mv).is_some() {
            return Err(MoveError::Occupied(mv));
        }
        self.place(mv.row, mv.col, side);
        Ok(())
    }

    /// Temporarily place a stone for evaluation.
    ///
    /// The stone is removed when the returned guard is dropped, including
    /// during unwinding, so the board is never left with a trial stone.
    pub fn trial(&mut self, mv: Move, side: Side) -> Trial<'_> {
        self.place(mv.row, mv.col, side);
        Trial { board: self, mv }
    }

    /// Check whether the stone just placed at `(row, col)` completes a line.
    ///
    /// Axes are tried in the order horizontal, vertical, diagonal down-right,
    /// diagonal down-left. The first axis with at least five contiguous
    /// stones of `side` wins; its full contiguous run is returned.
    pub fn check_winner(&self, row: usize, col: usize, side: Side) -> Option<WinResult> {
        let origin = Move::new(row, col);

        for &(dr, dc) in &DIRECTIONS {
            let mut line = vec![origin];
            line.extend(self.run(origin, dr, dc, side));
            line.extend(self.run(origin, -dr, -dc, side));

            if line.len() >= WIN_LENGTH {
                return Some(WinResult { winner: side, line });
            }
        }

        None
    }

    /// True iff every point is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// True iff no stone has been placed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Number of stones within Chebyshev distance `radius`, excluding the
    /// center point itself.
    pub fn count_neighbors(&self, row: usize, col: usize, radius: usize) -> usize {
        let r = radius as isize;
        let center = Move::new(row, col);
        let mut count = 0;

        for dr in -r..=r {
            for dc in -r..=r {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(p) = center.offset(dr, dc) {
                    if self.at(p).is_some() {
                        count += 1;
                    }
                }
            }
        }

        count
    }

    /// Empty points in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Move> + '_ {
        (0..N)
            .flat_map(|row| (0..N).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.at(mv).is_none())
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Points and contents walking outward from `from` (exclusive) in
    /// direction `(dr, dc)` until the wall.
    pub fn ray(
        &self,
        from: Move,
        dr: isize,
        dc: isize,
    ) -> impl Iterator<Item = (Move, Option<Side>)> + '_ {
        std::iter::successors(from.offset(dr, dc), move |p| p.offset(dr, dc))
            .map(move |p| (p, self.at(p)))
    }

    /// Contiguous stones of `side` walking outward from `from` (exclusive).
    pub fn run(
        &self,
        from: Move,
        dr: isize,
        dc: isize,
        side: Side,
    ) -> impl Iterator<Item = Move> + '_ {
        self.ray(from, dr, dc)
            .take_while(move |&(_, cell)| cell == Some(side))
            .map(|(p, _)| p)
    }
}

/// A stone placed by [`Board::trial`]; removed again on drop.
pub struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.cells[self.mv.row][self.mv.col] = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for &letter in COLUMNS {
            write!(f, " {}", letter as char)?;
        }
        writeln!(f)?;
        for row in 0..N {
            write!(f, "{:>3}", N - row)?;
            for col in 0..N {
                let ch = self.get(row, col).map_or(EMPTY, Side::stone);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
