//! Integration tests for the gomoku engine
//!
//! These exercise the public API the way a turn driver would: build
//! positions, ask the engine for moves, and check wins, draws and replays.

use fastrand::Rng;

use gomoku::ai::{find_winning_move, hard_score, select_move, Difficulty};
use gomoku::board::{Board, Move, Side};
use gomoku::constants::{DIRECTIONS, N};
use gomoku::game::{Game, Status};
use gomoku::patterns::evaluate_cell;
use gomoku::record::{replay_board, MoveRecord};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Place stones directly, without turn alternation.
fn setpos(black: &[(usize, usize)], white: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(r, c) in black {
        board.place(r, c, Side::Black);
    }
    for &(r, c) in white {
        board.place(r, c, Side::White);
    }
    board
}

/// A run of `len` points starting at `start` along `(dr, dc)`.
fn line(start: (usize, usize), (dr, dc): (isize, isize), len: usize) -> Vec<(usize, usize)> {
    (0..len as isize)
        .map(|i| {
            (
                start.0.checked_add_signed(dr * i).unwrap(),
                start.1.checked_add_signed(dc * i).unwrap(),
            )
        })
        .collect()
}

/// Filled board with no five anywhere: rows pair up in a shifted
/// checkerboard so every run is at most two long.
fn drawn_board() -> Board {
    let mut board = Board::new();
    for row in 0..N {
        for col in 0..N {
            let side = if (row / 2 + col) % 2 == 0 {
                Side::Black
            } else {
                Side::White
            };
            board.place(row, col, side);
        }
    }
    board
}

// =============================================================================
// Win detection
// =============================================================================

#[test]
fn test_win_on_every_axis() {
    for &(dr, dc) in &DIRECTIONS {
        // Start far enough from every wall for a run of five in either diagonal.
        let start = (3, 8);
        let stones = line(start, (dr, dc), 5);

        // Place the middle stone last and check from there.
        let (last, rest): (Vec<_>, Vec<_>) = stones.iter().copied().partition(|&p| p == stones[2]);
        let mut board = setpos(&rest, &[]);
        board.place(last[0].0, last[0].1, Side::Black);

        let win = board
            .check_winner(last[0].0, last[0].1, Side::Black)
            .unwrap_or_else(|| panic!("no win along ({dr}, {dc})"));
        assert_eq!(win.winner, Side::Black);
        assert_eq!(win.line.len(), 5);
        assert_eq!(win.line[0], Move::new(last[0].0, last[0].1));
        for &(r, c) in &stones {
            assert!(win.line.contains(&Move::new(r, c)));
        }
    }
}

#[test]
fn test_run_of_six_returns_all_cells() {
    let stones = line((7, 2), (0, 1), 6);
    let board = setpos(&stones, &[]);
    let win = board.check_winner(7, 4, Side::Black).unwrap();
    assert_eq!(win.line.len(), 6);
    for &(r, c) in &stones {
        assert!(win.line.contains(&Move::new(r, c)));
    }
}

#[test]
fn test_no_winner_without_five() {
    // Broken five: gap at (7,6).
    let board = setpos(&[(7, 3), (7, 4), (7, 5), (7, 7), (7, 8)], &[(7, 6)]);
    for col in [3, 4, 5, 7, 8] {
        assert!(board.check_winner(7, col, Side::Black).is_none());
    }
}

#[test]
fn test_winner_is_checked_for_given_side_only() {
    let board = setpos(&line((2, 2), (1, 1), 5), &[]);
    assert!(board.check_winner(4, 4, Side::Black).is_some());
    assert!(board.check_winner(4, 4, Side::White).is_none());
}

#[test]
fn test_is_full() {
    let board = drawn_board();
    assert!(board.is_full());

    let mut almost = Board::new();
    for row in 0..N {
        for col in 0..N {
            if (row, col) != (3, 11) {
                almost.place(row, col, board.get(row, col).unwrap());
            }
        }
    }
    assert!(!almost.is_full());
}

#[test]
fn test_drawn_board_has_no_winner() {
    let board = drawn_board();
    for row in 0..N {
        for col in 0..N {
            let side = board.get(row, col).unwrap();
            assert!(board.check_winner(row, col, side).is_none());
        }
    }
}

// =============================================================================
// Move engine
// =============================================================================

#[test]
fn test_all_difficulties_open_in_center() {
    for difficulty in Difficulty::ALL {
        let mut board = Board::new();
        let mv = select_move(&mut board, Side::Black, difficulty, &mut Rng::with_seed(3));
        assert_eq!(mv, Move::new(7, 7));
    }
}

#[test]
fn test_never_plays_occupied_point() {
    for difficulty in Difficulty::ALL {
        let mut rng = Rng::with_seed(17);
        let mut game = Game::new(difficulty);
        while !game.status().is_over() {
            let before = game.board().clone();
            let mv = game.genmove(&mut rng).unwrap();
            assert!(before.at(mv).is_none(), "{difficulty} played {mv} twice");
        }
    }
}

#[test]
fn test_live_four_is_completed() {
    let black = [(7, 4), (7, 5), (7, 6), (7, 7)];
    let white = [(8, 5), (8, 6), (6, 9)];
    for difficulty in [Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..5 {
            let mut board = setpos(&black, &white);
            let mv = select_move(&mut board, Side::Black, difficulty, &mut Rng::with_seed(seed));
            assert!(
                mv == Move::new(7, 3) || mv == Move::new(7, 8),
                "{difficulty} chose {mv}"
            );
        }
    }
}

#[test]
fn test_open_three_block_beats_distant_point() {
    // White has an open three on column 4; Black to move.
    let white = [(5, 4), (6, 4), (7, 4)];
    let black = [(7, 7), (8, 8)];
    let mut board = setpos(&black, &white);

    let mv = select_move(&mut board, Side::Black, Difficulty::Hard, &mut Rng::with_seed(8));
    let distant = Move::new(0, 14);

    let block_defense = evaluate_cell(&board, mv, Side::White);
    let distant_defense = evaluate_cell(&board, distant, Side::White);
    assert!(
        block_defense > distant_defense,
        "{mv} defends {block_defense}, {distant} defends {distant_defense}"
    );
    assert!(hard_score(&board, mv, Side::Black) > hard_score(&board, distant, Side::Black));
}

#[test]
fn test_winning_move_finder_is_deterministic() {
    let black = line((1, 1), (0, 1), 4);
    let mut board = setpos(&black, &[(1, 0)]);
    let first = find_winning_move(&mut board, Side::Black);
    for _ in 0..5 {
        assert_eq!(find_winning_move(&mut board, Side::Black), first);
    }
    assert_eq!(first, Some(Move::new(1, 5)));
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed| {
        let mut game = Game::new(Difficulty::Hard);
        let mut rng = Rng::with_seed(seed);
        for _ in 0..20 {
            if game.genmove(&mut rng).is_err() {
                break;
            }
        }
        game.moves().to_vec()
    };
    assert_eq!(play(99), play(99));
}

// =============================================================================
// Turn driver and replay
// =============================================================================

#[test]
fn test_replay_reproduces_board() {
    let moves = [
        MoveRecord {
            mv: Move::new(7, 7),
            side: Side::Black,
        },
        MoveRecord {
            mv: Move::new(7, 8),
            side: Side::White,
        },
        MoveRecord {
            mv: Move::new(8, 7),
            side: Side::Black,
        },
    ];
    let direct = setpos(&[(7, 7), (8, 7)], &[(7, 8)]);
    assert_eq!(replay_board(&moves, moves.len()), direct);
}

#[test]
fn test_finished_game_replays_to_final_board() {
    let mut game = Game::new(Difficulty::Medium);
    let mut rng = Rng::with_seed(21);
    while !game.status().is_over() {
        game.genmove(&mut rng).unwrap();
    }
    let record = game.to_record().unwrap();
    assert_eq!(&replay_board(&record.moves, record.turn_count()), game.board());

    match game.status() {
        Status::Won(win) => {
            assert_eq!(record.winner, Some(win.winner));
            assert!(win.line.contains(&game.last_move().unwrap()));
        }
        Status::Draw => assert!(record.winner.is_none()),
        Status::Playing => unreachable!(),
    }
}
