//! Constants for board geometry, engine weights, and match bookkeeping.
//!
//! The board size and win length are fixed. Everything the strategies and
//! the turn driver tune against lives here so the numbers are in one place.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 15;

/// Number of contiguous stones needed to win.
pub const WIN_LENGTH: usize = 5;

/// Row and column index of the center point.
pub const CENTER: usize = N / 2;

/// Axis directions scanned by every line query, as (row delta, col delta).
/// Order: horizontal, vertical, diagonal down-right, diagonal down-left.
/// The win check reports the first qualifying axis in this order.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// =============================================================================
// Candidate Generation
// =============================================================================

/// Neighborhood radius used by the Easy strategy to pick candidates.
pub const EASY_RADIUS: usize = 1;

/// Neighborhood radius used by the Hard strategy to skip isolated cells.
pub const HARD_RADIUS: usize = 2;

// =============================================================================
// Strategy Weights
// =============================================================================

/// Probability that the Easy strategy looks for an opponent win to block.
pub const EASY_BLOCK_PROB: f64 = 0.2;

/// Weight of the chain length in the Medium score (centrality breaks ties).
pub const MEDIUM_CHAIN_WEIGHT: i32 = 100;

/// Weight applied to the defensive pattern score in the Hard strategy.
pub const DEFENSE_WEIGHT: f64 = 0.8;

/// Totals closer than this to the running best are treated as ties.
pub const TIE_TOLERANCE: f64 = 1.0;

// =============================================================================
// Pattern Scores
// =============================================================================

/// Five or more in a row.
pub const SCORE_FIVE: u32 = 1_000_000;

/// Four with both ends open (cannot be stopped).
pub const SCORE_LIVE_FOUR: u32 = 500_000;

/// Four with one open end.
pub const SCORE_DEAD_FOUR: u32 = 10_000;

/// Three with both ends open.
pub const SCORE_LIVE_THREE: u32 = 5_000;

/// Three with one open end.
pub const SCORE_DEAD_THREE: u32 = 100;

/// Two with both ends open.
pub const SCORE_LIVE_TWO: u32 = 100;

/// Anything else.
pub const SCORE_BASE: u32 = 1;

// =============================================================================
// Turn Timer
// =============================================================================

/// Seconds the human side gets per move before the engine moves for them.
pub const HUMAN_TURN_SECS: u64 = 30;

/// Seconds of countdown shown before the computer side moves.
pub const ENGINE_TURN_SECS: u64 = 3;

// =============================================================================
// Match History and Progress
// =============================================================================

/// Number of finished matches kept in the history.
pub const HISTORY_LEN: usize = 20;

/// Coins awarded for a win and for any other result.
pub const REWARD_WIN: u32 = 50;
pub const REWARD_OTHER: u32 = 10;

/// Rank experience awarded for a win and for any other result.
pub const XP_WIN: u32 = 25;
pub const XP_OTHER: u32 = 5;

/// Experience needed to advance one rank.
pub const XP_PER_RANK: u32 = 100;

/// Maximum number of wins counted toward the daily goal.
pub const DAILY_GOAL: u32 = 3;

/// Rank titles, lowest first.
pub const RANKS: [&str; 5] = [
    "Cardboard Box",
    "Window Sill",
    "Comfy Cushion",
    "Heated Blanket",
    "Sunbeam God",
];

// =============================================================================
// Stone Skins
// =============================================================================

/// Skin every player owns from the start.
pub const DEFAULT_SKIN: &str = "clay";

/// Purchasable stone skins as (id, display name, price in coins).
pub const SKINS: [(&str, &str, u32); 3] = [
    ("clay", "Classic Clay", 0),
    ("wood", "Carved Wood", 150),
    ("porcelain", "Blue Porcelain", 300),
];

// =============================================================================
// Text Markers
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
