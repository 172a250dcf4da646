//! Error types for chess-pgn-core

use thiserror::Error;

use crate::board::{Color, Square};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Notation error: {0}")]
    Notation(String),

    #[error("No {0} king on the board")]
    NoKing(Color),

    #[error("Unknown piece glyph {0:?}")]
    UnknownGlyph(char),

    #[error("Board glyph string must hold 64 glyphs, got {0}")]
    GlyphCount(usize),

    #[error("Unknown result token {0:?}")]
    UnknownResultToken(String),

    #[error("Square off the board: file {file}, rank {rank}")]
    OffBoard { file: i8, rank: i8 },

    #[error("No piece on origin square {0}")]
    EmptyOrigin(Square),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn notation(token: &str, reason: impl std::fmt::Display) -> Self {
        Error::Notation(format!("{}: {}", token, reason))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
