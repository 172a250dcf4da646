//! Chess PGN Core Library
//!
//! Reads and writes PGN games with its own board model: move tokens in
//! short algebraic notation are resolved against the position by
//! simulating piece geometry and pin checks, and written back out in
//! canonical form.

pub mod board;
pub mod error;
pub mod game;
pub mod parser;
pub mod rules;

pub use board::{Board, Color, Nature, Piece, Square};
pub use error::{Error, Result};
pub use game::{Game, GamePhase, GameStatus, GameTags, Move, MoveList, MoveType, Outcome};
pub use parser::{parse_pgn_string, GameCollection, PgnOptions};

/// Creates the standard starting position
pub fn starting_board() -> Board {
    Board::starting()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = starting_board();

        // 16 pieces a side
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.pieces().filter(|(_, p)| p.color == Color::White).count(),
            16
        );

        // White moves first
        assert_eq!(Game::new().who_plays(), Color::White);
    }
}
