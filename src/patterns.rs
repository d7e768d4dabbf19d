//! Line pattern evaluation.
//!
//! Every evaluator here looks at the four axes through a single point and
//! treats that point as holding the given side, whether or not a stone is
//! actually there. Two measures are provided:
//!
//! ## Chain length
//! The longest contiguous run of one side through a point. Used by the
//! greedy Medium strategy.
//!
//! ## Pattern score
//! Each axis is classified by its run length and the number of open ends
//! (run ends bordered by an empty point rather than a wall or an enemy
//! stone), mapped through a fixed threat table, and summed:
//!
//! | run | open ends | score     |
//! |-----|-----------|-----------|
//! | ≥5  | any       | 1,000,000 |
//! | 4   | 2         | 500,000   |
//! | 4   | 1         | 10,000    |
//! | 3   | 2         | 5,000     |
//! | 3   | 1         | 100       |
//! | 2   | 2         | 100       |
//! | -   | -         | 1         |

use crate::board::{Board, Move, Side};
use crate::constants::{
    DIRECTIONS, SCORE_BASE, SCORE_DEAD_FOUR, SCORE_DEAD_THREE, SCORE_FIVE, SCORE_LIVE_FOUR,
    SCORE_LIVE_THREE, SCORE_LIVE_TWO, WIN_LENGTH,
};

/// Shape of the run through a point along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineInfo {
    /// Stones in the run, counting the point itself.
    pub consecutive: usize,
    /// Run ends (0, 1 or 2) that stop at an empty point.
    pub open_ends: usize,
}

impl LineInfo {
    /// Threat score for this shape.
    pub fn score(self) -> u32 {
        match (self.consecutive, self.open_ends) {
            (c, _) if c >= WIN_LENGTH => SCORE_FIVE,
            (4, 2) => SCORE_LIVE_FOUR,
            (4, 1) => SCORE_DEAD_FOUR,
            (3, 2) => SCORE_LIVE_THREE,
            (3, 1) => SCORE_DEAD_THREE,
            (2, 2) => SCORE_LIVE_TWO,
            _ => SCORE_BASE,
        }
    }
}

/// Measure the run of `side` through `mv` along axis `(dr, dc)`.
pub fn line_info(board: &Board, mv: Move, (dr, dc): (isize, isize), side: Side) -> LineInfo {
    let mut info = LineInfo {
        consecutive: 1,
        open_ends: 0,
    };

    for (dr, dc) in [(dr, dc), (-dr, -dc)] {
        for (_, cell) in board.ray(mv, dr, dc) {
            match cell {
                Some(s) if s == side => info.consecutive += 1,
                None => {
                    info.open_ends += 1;
                    break;
                }
                // Enemy stone
                Some(_) => break,
            }
        }
    }

    info
}

/// Sum of the threat scores on all four axes for `side` playing at `mv`.
pub fn evaluate_cell(board: &Board, mv: Move, side: Side) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&dir| line_info(board, mv, dir, side).score())
        .sum()
}

/// Longest contiguous run of `side` through `mv` across the four axes.
pub fn max_chain_length(board: &Board, mv: Move, side: Side) -> usize {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            1 + board.run(mv, dr, dc, side).count() + board.run(mv, -dr, -dc, side).count()
        })
        .max()
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: usize, cols: std::ops::Range<usize>, side: Side) {
        for col in cols {
            board.place(row, col, side);
        }
    }

    #[test]
    fn test_score_table() {
        let score = |consecutive, open_ends| LineInfo { consecutive, open_ends }.score();
        assert_eq!(score(6, 0), 1_000_000);
        assert_eq!(score(5, 2), 1_000_000);
        assert_eq!(score(4, 2), 500_000);
        assert_eq!(score(4, 1), 10_000);
        assert_eq!(score(4, 0), 1);
        assert_eq!(score(3, 2), 5_000);
        assert_eq!(score(3, 1), 100);
        assert_eq!(score(3, 0), 1);
        assert_eq!(score(2, 2), 100);
        assert_eq!(score(2, 1), 1);
        assert_eq!(score(1, 2), 1);
    }

    #[test]
    fn test_line_info_open_and_blocked() {
        let mut board = Board::new();
        row_of(&mut board, 7, 5..7, Side::Black);
        // Extending to the right: run of three, both ends open.
        let info = line_info(&board, Move::new(7, 7), (0, 1), Side::Black);
        assert_eq!(info, LineInfo { consecutive: 3, open_ends: 2 });

        board.place(7, 4, Side::White);
        let info = line_info(&board, Move::new(7, 7), (0, 1), Side::Black);
        assert_eq!(info, LineInfo { consecutive: 3, open_ends: 1 });
    }

    #[test]
    fn test_line_info_wall_is_not_open() {
        let mut board = Board::new();
        row_of(&mut board, 0, 0..3, Side::White);
        let info = line_info(&board, Move::new(0, 3), (0, 1), Side::White);
        assert_eq!(info, LineInfo { consecutive: 4, open_ends: 1 });
    }

    #[test]
    fn test_evaluate_cell_isolated() {
        // Four axes with nothing around score the base value each.
        let board = Board::new();
        assert_eq!(evaluate_cell(&board, Move::CENTER, Side::Black), 4);
    }

    #[test]
    fn test_evaluate_cell_live_four() {
        let mut board = Board::new();
        row_of(&mut board, 7, 4..7, Side::Black);
        // Playing (7,7) makes an open four horizontally; other axes are singles.
        assert_eq!(evaluate_cell(&board, Move::new(7, 7), Side::Black), 500_000 + 3);
        // For White the same point is just isolated.
        assert_eq!(evaluate_cell(&board, Move::new(7, 7), Side::White), 4);
    }

    #[test]
    fn test_max_chain_length() {
        let mut board = Board::new();
        row_of(&mut board, 3, 2..4, Side::Black);
        board.place(4, 4, Side::Black);
        board.place(5, 5, Side::Black);
        board.place(6, 6, Side::Black);
        assert_eq!(max_chain_length(&board, Move::new(3, 4), Side::Black), 3);
        // Diagonal (3,3)-(6,6) extended at either end makes five.
        assert_eq!(max_chain_length(&board, Move::new(2, 2), Side::Black), 5);
        assert_eq!(max_chain_length(&board, Move::new(7, 7), Side::Black), 5);
        assert_eq!(max_chain_length(&board, Move::new(10, 10), Side::Black), 1);
    }
}
