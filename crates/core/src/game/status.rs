//! Game outcome and header tags

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Color;
use crate::error::{Error, Result};

pub const RESULT_TOKENS: [&str; 6] = ["1-0", "0-1", "1/2-1/2", "*", "++", "#"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    White,
    Black,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::White => "1-0",
            Outcome::Black => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

/// Outcome of a result token: `Ok(None)` keeps the game open.
/// `++` and `#` are mate markers, won by the side that just moved.
pub fn outcome_of(token: &str, mover: Color) -> Result<Option<Outcome>> {
    match token {
        "1-0" => Ok(Some(Outcome::White)),
        "0-1" => Ok(Some(Outcome::Black)),
        "1/2-1/2" => Ok(Some(Outcome::Draw)),
        "*" => Ok(None),
        "++" | "#" => Ok(Some(match mover {
            Color::White => Outcome::White,
            Color::Black => Outcome::Black,
        })),
        other => Err(Error::UnknownResultToken(other.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub game_is_over: bool,
    pub who_won: Option<Outcome>,
    /// Standalone result token that closed the movetext
    pub result: Option<String>,
}

impl GameStatus {
    /// Records a result token. The first decisive outcome sticks.
    pub fn record(&mut self, token: &str, mover: Color) -> Result<()> {
        let outcome = outcome_of(token, mover)?;
        let Some(outcome) = outcome else {
            return Ok(());
        };
        if self.game_is_over {
            if self.who_won != Some(outcome) {
                let kept = self.who_won.map(|o| o.as_str());
                warn!(token, kept, "Result token conflicts with recorded outcome, keeping the first");
            }
            return Ok(());
        }
        self.game_is_over = true;
        self.who_won = Some(outcome);
        Ok(())
    }

    /// Records a result token standing on its own after the last move.
    pub fn record_standalone(&mut self, token: &str, mover: Color) -> Result<()> {
        self.record(token, mover)?;
        self.result = Some(token.to_string());
        Ok(())
    }
}

/// Header tags in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTags {
    tags: Vec<(String, String)>,
}

impl GameTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces an existing value in place, otherwise appends.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.tags.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.tags.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
