//! Parser module for reading and writing PGN
//!
//! - `notation`: one short algebraic token to a resolved move
//! - `writer`: a resolved move back to its canonical token
//! - `pgn`: game collections, tag lines and movetext tokenizing

mod notation;
mod options;
pub mod pgn;
mod writer;

pub use notation::{castle_move, parse_move};
pub use options::PgnOptions;
pub use pgn::{movetext_words, parse_pgn_string, parse_tag_line, GameCollection, Word};
pub use writer::write_move;
