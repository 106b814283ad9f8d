//! Line-oriented text protocol for playing a match against the engine.
//!
//! The protocol follows the shape of GTP: one command per line, an optional
//! numeric id in front, and a response of `=[id] text` on success or
//! `?[id] message` on failure, each followed by a blank line. A front end
//! (terminal, GUI, test harness) drives a human-vs-computer game through it.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `new_game [length]` - Start a game with a random sequence
//! - `set_sequence <v>...` - Start a game from a fixed sequence
//! - `algorithm <minimax|alpha-beta>` - Choose the search strategy
//! - `depth <n|auto>` - Fix the search depth or use the depth selector
//! - `first <human|computer>` - Choose who takes the first seat
//! - `play <position>` - Human move by 0-based position; replies with the value taken
//! - `genmove` - Computer move; replies with `<value> <position>`
//! - `showboard` - Items, scores and side to move
//! - `score` - Both scores, first player first
//! - `winner` - `human`, `computer` or `draw` once the game is over
//!
//! ## Example
//!
//! ```
//! use seqduel::config::GameConfig;
//! use seqduel::session::Session;
//!
//! let mut session = Session::new(GameConfig::default());
//! let input = "set_sequence 1 1 1\nplay 0\ngenmove\nplay 0\nwinner\nquit\n";
//! let mut output = Vec::new();
//! session.run(input.as_bytes(), &mut output).unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("= human"));
//! ```

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use log::{info, warn};

use crate::config::GameConfig;
use crate::constants::{MAX_RECOMMENDED_LENGTH, MIN_RECOMMENDED_LENGTH};
use crate::rules::{Outcome, apply_move_at_position, apply_move_by_value, is_terminal, winner};
use crate::search::{Algorithm, search};
use crate::state::{GameState, Player};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "algorithm",
    "depth",
    "first",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "new_game",
    "play",
    "protocol_version",
    "quit",
    "score",
    "set_sequence",
    "showboard",
    "version",
    "winner",
];

/// Match state behind the protocol.
pub struct Session {
    /// Settings for new games and for the computer player
    config: GameConfig,
    /// Current game, if one has been started
    state: Option<GameState>,
    /// Random source for new sequences and committed computer moves
    rng: Rng,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            state: None,
            rng,
        }
    }

    /// Current game state, if any.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
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

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute one command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "new_game" => self.new_game(args),

            "set_sequence" => self.set_sequence(args),

            "algorithm" => match args.first().map(|a| a.parse::<Algorithm>()) {
                Some(Ok(algorithm)) => {
                    self.config.algorithm = algorithm;
                    (true, String::new())
                }
                Some(Err(e)) => (false, e.to_string()),
                None => (false, "missing argument".to_string()),
            },

            "depth" => match args.first() {
                Some(&"auto") => {
                    self.config.depth = None;
                    (true, String::new())
                }
                Some(arg) => match arg.parse::<u32>() {
                    Ok(depth) if depth > 0 => {
                        self.config.depth = Some(depth);
                        (true, String::new())
                    }
                    _ => (false, format!("invalid depth '{arg}'")),
                },
                None => (false, "missing argument".to_string()),
            },

            "first" => match args.first().map(|a| a.to_lowercase()) {
                Some(seat) if seat == "human" => {
                    self.config.computer_first = false;
                    (true, String::new())
                }
                Some(seat) if seat == "computer" => {
                    self.config.computer_first = true;
                    (true, String::new())
                }
                Some(seat) => (false, format!("unknown seat '{seat}'")),
                None => (false, "missing argument".to_string()),
            },

            "play" => self.play(args),

            "genmove" => self.genmove(),

            "showboard" => match &self.state {
                Some(state) => (true, state.to_string()),
                None => (false, "no game in progress".to_string()),
            },

            "score" => match &self.state {
                Some(state) => (true, format!("{} {}", state.score_a(), state.score_b())),
                None => (false, "no game in progress".to_string()),
            },

            "winner" => match &self.state {
                Some(state) if is_terminal(state) => (true, self.describe(winner(state))),
                Some(_) => (false, "game is not over".to_string()),
                None => (false, "no game in progress".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn new_game(&mut self, args: &[&str]) -> (bool, String) {
        let mut config = self.config.clone();
        if let Some(arg) = args.first() {
            match arg.parse::<usize>() {
                Ok(length) => config.length = length,
                Err(_) => return (false, format!("invalid length '{arg}'")),
            }
        }
        if !config.has_recommended_length() {
            warn!(
                "sequence length {} is outside {MIN_RECOMMENDED_LENGTH}..={MAX_RECOMMENDED_LENGTH}",
                config.length
            );
        }
        match config.new_game(&mut self.rng) {
            Ok(state) => self.start(state),
            Err(e) => (false, e.to_string()),
        }
    }

    fn set_sequence(&mut self, args: &[&str]) -> (bool, String) {
        let items: Result<Vec<u8>, _> = args.iter().map(|a| a.parse::<u8>()).collect();
        let Ok(items) = items else {
            return (false, "sequence values must be integers".to_string());
        };
        let score = self.config.start_score;
        match GameState::with_scores(items, score, score) {
            Ok(state) => self.start(state),
            Err(e) => (false, e.to_string()),
        }
    }

    fn start(&mut self, state: GameState) -> (bool, String) {
        info!(
            "new game: {} items, scores {}/{}, computer plays {}",
            state.len(),
            state.score_a(),
            state.score_b(),
            self.config.computer_seat()
        );
        let response = state.to_string();
        self.state = Some(state);
        (true, response)
    }

    /// Current state if it is `seat`'s turn in a running game.
    fn require_turn(&self, seat: Player) -> Result<&GameState, String> {
        let state = self.state.as_ref().ok_or("no game in progress")?;
        if is_terminal(state) {
            return Err("game is over".to_string());
        }
        if state.to_move() != seat {
            return Err("not your turn".to_string());
        }
        Ok(state)
    }

    fn play(&mut self, args: &[&str]) -> (bool, String) {
        let Some(arg) = args.first() else {
            return (false, "missing argument".to_string());
        };
        let Ok(position) = arg.parse::<usize>() else {
            return (false, format!("invalid position '{arg}'"));
        };
        let human = self.config.computer_seat().opponent();
        let state = match self.require_turn(human) {
            Ok(state) => state,
            Err(e) => return (false, e),
        };

        let value = state.items().get(position).copied();
        match apply_move_at_position(state, position) {
            Ok(next) => {
                self.commit(next);
                (true, value.map(|v| v.to_string()).unwrap_or_default())
            }
            Err(e) => (false, e.to_string()),
        }
    }

    fn genmove(&mut self) -> (bool, String) {
        let state = match self.require_turn(self.config.computer_seat()) {
            Ok(state) => state.clone(),
            Err(e) => return (false, e),
        };

        let algorithm = self.config.algorithm;
        let result = search(&state, algorithm, self.config.depth);
        let Some(value) = result.best_move else {
            return (false, "no legal move".to_string());
        };

        match apply_move_by_value(&state, value, &mut self.rng) {
            Ok((next, position)) => {
                info!(
                    "computer takes {value} at position {position} ({algorithm}, depth {})",
                    result.depth
                );
                self.commit(next);
                (true, format!("{value} {position}"))
            }
            Err(e) => (false, e.to_string()),
        }
    }

    fn commit(&mut self, next: GameState) {
        if is_terminal(&next) {
            info!(
                "game over: A={} B={} winner={}",
                next.score_a(),
                next.score_b(),
                self.describe(winner(&next))
            );
        }
        self.state = Some(next);
    }

    /// Name the outcome from the human/computer point of view.
    fn describe(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Draw => "draw".to_string(),
            Outcome::Win(seat) if seat == self.config.computer_seat() => "computer".to_string(),
            Outcome::Win(_) => "human".to_string(),
        }
    }
}
