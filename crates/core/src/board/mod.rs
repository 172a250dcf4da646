//! 8x8 board model

mod types;

pub use types::*;
pub(crate) use types::{file_from_char, rank_from_char};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::game::{Move, MoveType};

pub const STARTING_GLYPHS: &str =
    "rnbqkbnrpppppppp................................PPPPPPPPRNBQKBNR";

/// Every square holds a value; `None` is an empty square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position
    pub fn starting() -> Self {
        let mut board = Self::empty();
        // The literal above only holds known glyphs.
        for (square, glyph) in glyph_order().zip(STARTING_GLYPHS.chars()) {
            board.squares[square.index()] = Piece::from_glyph(glyph).ok().flatten();
        }
        board
    }

    pub fn from_glyph_string(glyphs: &str) -> Result<Self> {
        let mut board = Self::empty();
        board.load_from_glyph_string(glyphs)?;
        Ok(board)
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    pub fn set_empty(&mut self, square: Square) {
        self.squares[square.index()] = None;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn is_empty_or_equals(&self, square: Square, piece: Piece) -> bool {
        match self.get(square) {
            None => true,
            Some(p) => p == piece,
        }
    }

    /// Deep copy used for what-if probes
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn king_square(&self, color: Color) -> Result<Square> {
        let king = Piece::new(color, Nature::King);
        Square::all()
            .find(|&sq| self.get(sq) == Some(king))
            .ok_or(Error::NoKing(color))
    }

    /// Row-major glyphs, rank 8 first, files a to h.
    pub fn to_glyph_string(&self) -> String {
        glyph_order()
            .map(|sq| self.get(sq).map_or(EMPTY_GLYPH, Piece::glyph))
            .collect()
    }

    /// Replaces the whole position. King presence is not checked here.
    pub fn load_from_glyph_string(&mut self, glyphs: &str) -> Result<()> {
        let count = glyphs.chars().count();
        if count != 64 {
            return Err(Error::GlyphCount(count));
        }
        let mut squares = [None; 64];
        for (square, glyph) in glyph_order().zip(glyphs.chars()) {
            squares[square.index()] = Piece::from_glyph(glyph)?;
        }
        self.squares = squares;
        Ok(())
    }

    /// Plays a resolved move on the board.
    pub fn apply(&mut self, mv: &Move) -> Result<()> {
        let piece = self.get(mv.from).ok_or(Error::EmptyOrigin(mv.from))?;

        match mv.kind {
            MoveType::CastleKingside | MoveType::CastleQueenside => {
                let rook = match mv.rook {
                    Some((rook_from, rook_to)) => {
                        let rook = self.get(rook_from).ok_or(Error::EmptyOrigin(rook_from))?;
                        Some((rook_from, rook_to, rook))
                    }
                    None => None,
                };
                self.set_empty(mv.from);
                if let Some((rook_from, _, _)) = rook {
                    self.set_empty(rook_from);
                }
                self.set(mv.to, piece);
                if let Some((_, rook_to, rook)) = rook {
                    self.set(rook_to, rook);
                }
            }
            MoveType::Single | MoveType::Capture => {
                self.set_empty(mv.from);
                if mv.en_passant {
                    if let Some(captured) = mv.to.offset(0, -piece.color.forward()) {
                        self.set_empty(captured);
                    }
                }
                let landed = match mv.promotion {
                    Some(nature) => Piece::new(piece.color, nature),
                    None => piece,
                };
                self.set(mv.to, landed);
            }
        }
        Ok(())
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

fn glyph_order() -> impl Iterator<Item = Square> {
    (0..8)
        .rev()
        .flat_map(|rank| (0..8).filter_map(move |file| Square::new(file, rank)))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs: Vec<char> = self.to_glyph_string().chars().collect();
        for (row, chunk) in glyphs.chunks(8).enumerate() {
            let line: String = chunk.iter().collect();
            writeln!(f, "{} {}", 8 - row, line)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_glyph_string()
    }
}

impl TryFrom<String> for Board {
    type Error = Error;

    fn try_from(glyphs: String) -> Result<Self> {
        Board::from_glyph_string(&glyphs)
    }
}
