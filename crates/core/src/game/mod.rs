//! A single game: board, move list, outcome and tags

mod moves;
mod status;

pub use moves::{Move, MoveEntry, MoveList, MoveType};
pub use status::{outcome_of, GameStatus, GameTags, Outcome, RESULT_TOKENS};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Color};
use crate::error::Result;
use crate::parser::{movetext_words, parse_move, parse_tag_line, write_move, PgnOptions, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingFirstMove,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    tags: GameTags,
    board: Board,
    moves: MoveList,
    status: GameStatus,
    errors: Vec<String>,
    #[serde(skip)]
    options: PgnOptions,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PgnOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn tags(&self) -> &GameTags {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut GameTags {
        &mut self.tags
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Diagnostics collected while reading
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn who_plays(&self) -> Color {
        self.moves.who_plays()
    }

    /// `Finished` once a result token has been consumed. A trailing `*`
    /// counts even though it leaves `game_is_over` false.
    pub fn phase(&self) -> GamePhase {
        let result_consumed = self.status.result.is_some()
            || self.moves.last().is_some_and(|entry| entry.mv.result.is_some());
        if self.status.game_is_over || result_consumed {
            GamePhase::Finished
        } else if self.moves.is_empty() {
            GamePhase::AwaitingFirstMove
        } else {
            GamePhase::InProgress
        }
    }

    pub fn same_moves(&self, other: &Game) -> bool {
        self.moves.same_moves(&other.moves)
    }

    /// Parses one move token and plays it. On error nothing changes.
    pub fn play(&mut self, token: &str) -> Result<()> {
        let mover = self.moves.who_plays();
        let mv = parse_move(&self.board, mover, token, &self.options)?;
        self.board.apply(&mv)?;
        debug!(
            number = self.moves.double_move_number(),
            color = %mover,
            token,
            from = %mv.from,
            to = %mv.to,
            "Resolved move"
        );
        let result = mv.result.clone();
        self.moves.add_move(mv);
        if let Some(result) = result {
            self.status.record(&result, mover)?;
        }
        Ok(())
    }

    /// Reads one game chunk: tag lines first, then movetext.
    ///
    /// Errors are recorded per token and reading carries on with the next
    /// token. Returns `false` if anything was recorded.
    pub fn read<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut movetext: Vec<String> = Vec::new();
        let mut in_tags = true;

        for raw in lines {
            let line = raw.as_ref().trim();
            if in_tags {
                if line.is_empty() {
                    continue;
                }
                if let Some((key, value)) = parse_tag_line(line) {
                    self.tags.set(key, value);
                    continue;
                }
                in_tags = false;
            }
            movetext.push(line.to_string());
        }

        let text = movetext.join(" ");
        for word in movetext_words(&text) {
            let outcome = match word {
                Word::Move(token) => self.play(token),
                Word::Result(token) => {
                    let mover = self.last_mover();
                    self.status.record_standalone(token, mover)
                }
            };
            if let Err(e) = outcome {
                let message = format!("ply {}: {}", self.moves.len() + 1, e);
                warn!(%message, "Recorded game error");
                self.errors.push(message);
            }
        }

        self.is_ok()
    }

    fn last_mover(&self) -> Color {
        self.moves
            .last()
            .map(|entry| entry.color)
            .unwrap_or_else(|| self.moves.who_plays().opponent())
    }

    /// Movetext replayed from the starting position.
    pub fn movetext_lines(&self) -> Result<Vec<String>> {
        let mut board = Board::starting();
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut full_moves = 0;

        for entry in self.moves.entries() {
            let san = write_move(&mut board, entry.color, &entry.mv)?;
            if entry.color == Color::White || line.is_empty() {
                if full_moves == self.options.moves_per_line {
                    lines.push(std::mem::take(&mut line));
                    full_moves = 0;
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                let dots = if entry.color == Color::White { "." } else { "..." };
                line.push_str(&format!("{}{} {}", entry.number, dots, san));
                full_moves += 1;
            } else {
                line.push(' ');
                line.push_str(&san);
            }
        }

        if let Some(result) = &self.status.result {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(result);
        }
        if !line.is_empty() {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Tag block, a blank line, then the movetext.
    pub fn write(&self) -> Result<Vec<String>> {
        let mut lines: Vec<String> = self
            .tags
            .iter()
            .map(|(key, value)| format!("[{} \"{}\"]", key, value))
            .collect();
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(self.movetext_lines()?);
        Ok(lines)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
