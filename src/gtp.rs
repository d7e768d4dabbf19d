//! Text protocol front end (GTP-style).
//!
//! The framing follows version 2 of the Go Text Protocol so existing GTP
//! tooling can drive the engine: each command is one line, optionally
//! prefixed by a numeric id, and each response is `=id message` on success
//! or `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Only 15 is accepted
//! - `clear_board` - Start a new match
//! - `play <color> <vertex>` - Play a move for the given color
//! - `genmove <color>` - Let the engine move for the given color
//! - `difficulty [easy|medium|hard]` - Query or set engine strength; only
//!   between matches
//! - `showboard` - Print the current board
//! - `stats` - Coins, rank and daily wins
//! - `history` - Finished matches, newest first
//! - `replay <index> <step>` - Board of a finished match after `step` moves
//! - `shop` - Skins with their prices and ownership
//! - `buy <skin>` - Spend coins on a skin and switch to it
//! - `equip <skin>` - Switch to an owned skin
//!
//! Vertices are a column letter `A`-`P` (no `I`) followed by a row number
//! counted from the bottom, e.g. `H8` for the center.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fastrand::Rng;
use tracing::{debug, info, warn};

use crate::ai::Difficulty;
use crate::board::{Move, Side};
use crate::constants::{N, SKINS};
use crate::error::ShopError;
use crate::game::{Game, Status, HUMAN};
use crate::progress::{skin_price, Progress};
use crate::record::{History, ReplayCursor};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "buy",
    "clear_board",
    "difficulty",
    "equip",
    "genmove",
    "history",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "replay",
    "shop",
    "showboard",
    "stats",
    "version",
];

/// Protocol engine state.
pub struct GtpEngine {
    /// Current match
    game: Game,
    /// Source of all engine randomness
    rng: Rng,
    /// Finished matches
    history: History,
    /// Rewards for the human side
    progress: Progress,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create an engine at the default difficulty with a random seed.
    pub fn new() -> Self {
        Self::with_config(Difficulty::default(), Rng::new())
    }

    /// Create an engine with a given difficulty and random source.
    pub fn with_config(difficulty: Difficulty, rng: Rng) -> Self {
        Self {
            game: Game::new(difficulty),
            rng,
            history: History::new(),
            progress: Progress::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }

        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(%command, ?args, "execute");

        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&arg.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game.restart();
                info!(difficulty = %self.game.difficulty(), "new game");
                (true, String::new())
            }

            "difficulty" => match args.first() {
                None => (true, self.game.difficulty().to_string()),
                Some(arg) => match arg.parse::<Difficulty>() {
                    // Difficulty is fixed for a match, so changing it starts a new one.
                    Ok(_) if !self.game.moves().is_empty() && !self.game.status().is_over() => {
                        (false, "match in progress, clear_board first".to_string())
                    }
                    Ok(difficulty) => {
                        self.game = Game::new(difficulty);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                },
            },

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let side = match color.parse::<Side>() {
                    Ok(side) => side,
                    Err(e) => return (false, e.to_string()),
                };
                let mv = match vertex.parse::<Move>() {
                    Ok(mv) => mv,
                    Err(e) => return (false, e.to_string()),
                };
                match self.game.play_as(side, mv) {
                    Ok(_) => {
                        self.finish_if_over();
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let side = match color.parse::<Side>() {
                    Ok(side) => side,
                    Err(e) => return (false, e.to_string()),
                };
                if side != self.game.to_move() && !self.game.status().is_over() {
                    return (false, format!("{} to play", self.game.to_move()));
                }
                match self.game.genmove(&mut self.rng) {
                    Ok(mv) => {
                        self.finish_if_over();
                        (true, mv.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "stats" => {
                let p = &self.progress;
                (
                    true,
                    format!(
                        "coins {} rank {} ({}%) daily {}",
                        p.coins,
                        p.rank_title(),
                        p.rank_progress,
                        p.daily_wins
                    ),
                )
            }

            "history" => {
                let lines: Vec<String> = self
                    .history
                    .iter()
                    .enumerate()
                    .map(|(i, g)| {
                        let winner = g.winner.map_or("draw".to_string(), |s| s.to_string());
                        format!("{i} {winner} {} {} moves", g.difficulty, g.turn_count())
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            "replay" => {
                let [index, step, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let (Ok(index), Ok(step)) = (index.parse::<usize>(), step.parse::<usize>()) else {
                    return (false, "invalid arguments".to_string());
                };
                let Some(record) = self.history.get(index) else {
                    return (false, format!("no game {index}"));
                };
                let mut cursor = ReplayCursor::new(record);
                cursor.seek(step);
                (true, format!("\n{}", cursor.board()))
            }

            "shop" => {
                let lines: Vec<String> = SKINS
                    .iter()
                    .map(|&(id, name, price)| {
                        let state = if id == self.progress.skin {
                            "equipped"
                        } else if self.progress.owns(id) {
                            "owned"
                        } else {
                            "for sale"
                        };
                        format!("{id} {price} {state} ({name})")
                    })
                    .collect();
                (true, lines.join("\n"))
            }

            "buy" => {
                let Some(&id) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let result = match skin_price(id) {
                    Some(price) => self.progress.buy(id, price),
                    None => Err(ShopError::UnknownItem(id.to_string())),
                };
                match result {
                    Ok(()) => {
                        info!(skin = id, coins = self.progress.coins, "skin bought");
                        (true, self.progress.coins.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "equip" => {
                let Some(&id) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match self.progress.equip(id) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Archive the match and pay out rewards once it has ended.
    fn finish_if_over(&mut self) {
        let Some(mut record) = self.game.to_record() else {
            return;
        };
        record.skin = self.progress.skin.clone();
        let victory = matches!(self.game.status(), Status::Won(w) if w.winner == HUMAN);
        info!(winner = ?record.winner, moves = record.turn_count(), "game over");
        self.progress.record_result(victory);
        self.history.push(record);
    }
}
