//! Attack detection and legal origin lookup

use crate::board::{Board, Color, Nature, Piece, Square};
use crate::error::Result;
use crate::game::MoveType;

use super::geometry::reaching_origins;

/// Squares whose occupant, of the color opposite to the piece on `square`,
/// could move to `square`. Pins are ignored. An empty square has no attackers.
pub fn attackers_of(board: &Board, square: Square) -> Vec<Square> {
    let Some(target) = board.get(square) else {
        return Vec::new();
    };
    let enemy = target.color.opponent();
    let mut attackers: Vec<Square> = Nature::ALL
        .iter()
        .flat_map(|&nature| {
            reaching_origins(board, Piece::new(enemy, nature), square, MoveType::Capture)
        })
        .collect();
    attackers.sort_unstable();
    attackers.dedup();
    attackers
}

/// True if `color`'s king stands attacked on `board`.
pub fn king_attacked(board: &Board, color: Color) -> Result<bool> {
    let king = board.king_square(color)?;
    Ok(!attackers_of(board, king).is_empty())
}

/// Plays the bare move on a scratch copy and reports whether it leaves
/// the mover's own king attacked.
pub fn is_pinned(board: &Board, piece: Piece, from: Square, to: Square) -> Result<bool> {
    let mut scratch = board.copy();
    scratch.set_empty(from);
    scratch.set(to, piece);
    king_attacked(&scratch, piece.color)
}

/// Every square holding `piece` that can legally make a `kind` move to `to`.
pub fn candidate_origins(
    board: &Board,
    piece: Piece,
    to: Square,
    kind: MoveType,
) -> Result<Vec<Square>> {
    let mut legal = Vec::new();
    for from in reaching_origins(board, piece, to, kind) {
        if !is_pinned(board, piece, from, to)? {
            legal.push(from);
        }
    }
    Ok(legal)
}
