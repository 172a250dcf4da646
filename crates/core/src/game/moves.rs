//! Moves and the ordered move list of a game

use serde::{Deserialize, Serialize};

use crate::board::{Color, Nature, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveType {
    Single,
    Capture,
    CastleKingside,
    CastleQueenside,
}

/// One resolved ply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveType,
    pub from: Square,
    pub to: Square,
    /// Rook origin and destination, castling only
    pub rook: Option<(Square, Square)>,
    pub promotion: Option<Nature>,
    pub en_passant: bool,
    /// Result suffix glued to the move token, e.g. `#`
    pub result: Option<String>,
}

impl Move {
    pub fn new(kind: MoveType, from: Square, to: Square) -> Self {
        Self {
            kind,
            from,
            to,
            rook: None,
            promotion: None,
            en_passant: false,
            result: None,
        }
    }

    pub fn castle(kind: MoveType, king_from: Square, king_to: Square, rook_from: Square, rook_to: Square) -> Self {
        Self {
            rook: Some((rook_from, rook_to)),
            ..Self::new(kind, king_from, king_to)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub number: u32,
    pub color: Color,
    pub mv: Move,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveList {
    entries: Vec<MoveEntry>,
    next_player: Color,
    double_move_number: u32,
}

impl MoveList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_player: Color::White,
            double_move_number: 1,
        }
    }

    pub fn who_plays(&self) -> Color {
        self.next_player
    }

    pub fn double_move_number(&self) -> u32 {
        self.double_move_number
    }

    /// Appends a ply for the side to move and advances the cursor.
    pub fn add_move(&mut self, mv: Move) {
        self.entries.push(MoveEntry {
            number: self.double_move_number,
            color: self.next_player,
            mv,
        });
        if self.next_player == Color::Black {
            self.double_move_number += 1;
        }
        self.next_player = self.next_player.opponent();
    }

    pub fn entries(&self) -> &[MoveEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MoveEntry> {
        self.entries.last()
    }

    /// Same (number, color, move) sequence; the cursor is not compared.
    pub fn same_moves(&self, other: &MoveList) -> bool {
        self.entries == other.entries
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}
