//! Piece, color and square types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Side of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a pawn push for this side
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank the pawns of this side start on
    pub fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Nature {
    pub const ALL: [Nature; 6] = [
        Nature::Pawn,
        Nature::Rook,
        Nature::Knight,
        Nature::Bishop,
        Nature::Queen,
        Nature::King,
    ];

    /// Letter used in algebraic notation; pawns have none
    pub fn san_letter(self) -> Option<char> {
        match self {
            Nature::Pawn => None,
            Nature::Rook => Some('R'),
            Nature::Knight => Some('N'),
            Nature::Bishop => Some('B'),
            Nature::Queen => Some('Q'),
            Nature::King => Some('K'),
        }
    }

    pub fn from_san_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Nature::Rook),
            'N' => Some(Nature::Knight),
            'B' => Some(Nature::Bishop),
            'Q' => Some(Nature::Queen),
            'K' => Some(Nature::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares hold no `Piece` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub nature: Nature,
}

/// Glyph used for a square without a piece
pub const EMPTY_GLYPH: char = '.';

const GLYPHS: [(char, Piece); 12] = [
    ('P', Piece::new(Color::White, Nature::Pawn)),
    ('R', Piece::new(Color::White, Nature::Rook)),
    ('N', Piece::new(Color::White, Nature::Knight)),
    ('B', Piece::new(Color::White, Nature::Bishop)),
    ('Q', Piece::new(Color::White, Nature::Queen)),
    ('K', Piece::new(Color::White, Nature::King)),
    ('p', Piece::new(Color::Black, Nature::Pawn)),
    ('r', Piece::new(Color::Black, Nature::Rook)),
    ('n', Piece::new(Color::Black, Nature::Knight)),
    ('b', Piece::new(Color::Black, Nature::Bishop)),
    ('q', Piece::new(Color::Black, Nature::Queen)),
    ('k', Piece::new(Color::Black, Nature::King)),
];

impl Piece {
    pub const fn new(color: Color, nature: Nature) -> Self {
        Self { color, nature }
    }

    pub fn glyph(self) -> char {
        GLYPHS
            .iter()
            .find(|(_, piece)| *piece == self)
            .map(|(glyph, _)| *glyph)
            .unwrap_or(EMPTY_GLYPH)
    }

    /// Decodes one board glyph; `Ok(None)` is the empty square.
    pub fn from_glyph(glyph: char) -> Result<Option<Self>> {
        if glyph == EMPTY_GLYPH {
            return Ok(None);
        }
        GLYPHS
            .iter()
            .find(|(g, _)| *g == glyph)
            .map(|(_, piece)| Some(*piece))
            .ok_or(Error::UnknownGlyph(glyph))
    }
}

/// A board coordinate, file and rank both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SquareCoords", into = "SquareCoords")]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    /// Returns `None` for coordinates off the board.
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn file(self) -> i8 {
        self.file
    }

    pub fn rank(self) -> i8 {
        self.rank
    }

    pub fn offset(self, files: i8, ranks: i8) -> Option<Self> {
        Self::new(self.file + files, self.rank + ranks)
    }

    pub(crate) fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file as u8) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank as u8) as char
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square { file, rank }))
    }
}

/// Unchecked wire form of a [`Square`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SquareCoords {
    file: i8,
    rank: i8,
}

impl From<Square> for SquareCoords {
    fn from(square: Square) -> Self {
        Self {
            file: square.file,
            rank: square.rank,
        }
    }
}

impl TryFrom<SquareCoords> for Square {
    type Error = Error;

    fn try_from(coords: SquareCoords) -> Result<Self> {
        Square::new(coords.file, coords.rank).ok_or(Error::OffBoard {
            file: coords.file,
            rank: coords.rank,
        })
    }
}

pub(crate) fn file_from_char(c: char) -> Option<i8> {
    ('a'..='h').contains(&c).then(|| (c as u8 - b'a') as i8)
}

pub(crate) fn rank_from_char(c: char) -> Option<i8> {
    ('1'..='8').contains(&c).then(|| (c as u8 - b'1') as i8)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => match (file_from_char(f), rank_from_char(r)) {
                (Some(file), Some(rank)) => Ok(Self { file, rank }),
                _ => Err(Error::notation(s, "not a square name")),
            },
            _ => Err(Error::notation(s, "not a square name")),
        }
    }
}

/// Partially known origin square written in a move token ("Rad1", "R1a3").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareHint {
    pub file: Option<i8>,
    pub rank: Option<i8>,
}

impl SquareHint {
    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.rank.is_none()
    }

    pub fn matches(&self, square: Square) -> bool {
        self.file.map_or(true, |f| f == square.file()) && self.rank.map_or(true, |r| r == square.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_table_is_a_bijection() {
        for (glyph, piece) in GLYPHS {
            assert_eq!(piece.glyph(), glyph);
            assert_eq!(Piece::from_glyph(glyph).unwrap(), Some(piece));
        }
        let mut glyphs: Vec<char> = GLYPHS.iter().map(|(g, _)| *g).collect();
        glyphs.push(EMPTY_GLYPH);
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 13);
    }

    #[test]
    fn test_unknown_glyph() {
        assert!(matches!(Piece::from_glyph('x'), Err(Error::UnknownGlyph('x'))));
        assert_eq!(Piece::from_glyph('.').unwrap(), None);
    }

    #[test]
    fn test_square_names() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!((e4.file(), e4.rank()), (4, 3));
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_off_board_rejected() {
        assert!(Square::new(-1, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        let h8 = Square::new(7, 7).unwrap();
        assert!(h8.offset(1, 0).is_none());
        assert_eq!(h8.offset(-7, -7), Square::new(0, 0));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_square_json_is_checked() {
        let e4: Square = "e4".parse().unwrap();
        let json = serde_json::to_string(&e4).unwrap();
        assert_eq!(json, r#"{"file":4,"rank":3}"#);
        assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), e4);
        assert!(serde_json::from_str::<Square>(r#"{"file":4,"rank":9}"#).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"file":-1,"rank":0}"#).is_err());
    }

    #[test]
    fn test_hint_matching() {
        let a1: Square = "a1".parse().unwrap();
        let d5: Square = "d5".parse().unwrap();
        let file_a = SquareHint { file: Some(0), rank: None };
        assert!(file_a.matches(a1));
        assert!(!file_a.matches(d5));
        assert!(SquareHint::default().matches(d5));
        assert!(SquareHint::default().is_empty());
    }
}
