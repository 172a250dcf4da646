//! PGN game collections: splitting, tags, movetext and re-serialization

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::game::Game;

use super::options::PgnOptions;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*\[(\w+)\s+"(.*)"\]\s*$"#).expect("tag pattern is valid")
});

static MOVE_NUMBER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.").expect("move number pattern is valid"));

static MOVE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)\d+\.+\s*").expect("move number pattern is valid"));

static RESULT_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[\d/]+-[\d/]+|\*|\+\+|#)$").expect("result pattern is valid")
});

/// `[Key "Value"]` to `(Key, Value)`
pub fn parse_tag_line(line: &str) -> Option<(String, String)> {
    let caps = TAG_RE.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

fn is_header_line(line: &str) -> bool {
    TAG_RE.is_match(line) && !MOVE_NUMBER_PREFIX_RE.is_match(line)
}

/// One whitespace-delimited word of movetext
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word<'a> {
    Move(&'a str),
    Result(&'a str),
}

/// Splits joined movetext on move numbers and classifies what is left.
/// Standalone `e.p.` markers are dropped; en passant is inferred anyway.
pub fn movetext_words(text: &str) -> Vec<Word<'_>> {
    MOVE_NUMBER_RE
        .split(text)
        .flat_map(str::split_whitespace)
        .filter(|word| *word != "e.p.")
        .map(|word| {
            if word != "0-0" && RESULT_SHAPE_RE.is_match(word) {
                Word::Result(word)
            } else {
                Word::Move(word)
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameCollection {
    games: Vec<Game>,
    #[serde(skip)]
    options: PgnOptions,
}

impl GameCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PgnOptions) -> Self {
        Self {
            games: Vec::new(),
            options,
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn push(&mut self, game: Game) {
        self.games.push(game);
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn is_ok(&self) -> bool {
        self.games.iter().all(Game::is_ok)
    }

    /// Reads every game in `lines`; a new tag block closes the previous game.
    /// Returns `true` only if every game read cleanly.
    pub fn read<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chunk: Vec<String> = Vec::new();
        let mut in_header = false;
        let mut ok = true;

        for raw in lines {
            let line = raw.as_ref();
            if is_header_line(line) {
                if !in_header {
                    ok &= self.flush(&mut chunk);
                    in_header = true;
                }
            } else {
                in_header = false;
            }
            chunk.push(line.to_string());
        }
        ok &= self.flush(&mut chunk);

        info!(games = self.games.len(), ok, "Read PGN collection");
        ok
    }

    fn flush(&mut self, chunk: &mut Vec<String>) -> bool {
        if chunk.iter().all(|line| line.trim().is_empty()) {
            chunk.clear();
            return true;
        }
        let mut game = Game::with_options(self.options);
        let ok = game.read(chunk.drain(..));
        debug!(
            index = self.games.len(),
            plies = game.moves().len(),
            errors = game.errors().len(),
            "Flushed game"
        );
        self.games.push(game);
        ok
    }

    /// Every game's lines, separated by a blank line.
    pub fn write(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for (index, game) in self.games.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(game.write()?);
        }
        Ok(lines)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reads every game in `pgn`. Inspect [`GameCollection::is_ok`] or each
/// game's errors to learn whether everything parsed.
pub fn parse_pgn_string(pgn: &str) -> GameCollection {
    let mut collection = GameCollection::new();
    collection.read(pgn.lines());
    collection
}
