//! Attack and legality rules
//!
//! Stateless queries against a [`Board`](crate::board::Board): which pieces
//! can reach a square, and which of them may do so without exposing their king.

mod geometry;
mod resolver;

pub use geometry::reaching_origins;
pub use resolver::{attackers_of, candidate_origins, is_pinned, king_attacked};
