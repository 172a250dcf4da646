//! Canonical short algebraic notation for resolved moves

use crate::board::{Board, Color, Piece, Square};
use crate::error::{Error, Result};
use crate::game::{Move, MoveType};
use crate::rules::{candidate_origins, king_attacked};

/// Emits the token for `mv` and plays it on `board`.
///
/// `board` must hold the position before the move; the same candidate
/// lookup the reader uses decides how much of the origin square to write.
pub fn write_move(board: &mut Board, mover: Color, mv: &Move) -> Result<String> {
    let mut san = match mv.kind {
        MoveType::CastleKingside => "O-O".to_string(),
        MoveType::CastleQueenside => "O-O-O".to_string(),
        MoveType::Single | MoveType::Capture => {
            let piece = board.get(mv.from).ok_or(Error::EmptyOrigin(mv.from))?;
            piece_move(board, piece, mv)?
        }
    };

    board.apply(mv)?;

    let mate_marker = matches!(mv.result.as_deref(), Some("#") | Some("++"));
    if !mate_marker && king_attacked(board, mover.opponent())? {
        san.push('+');
    }
    if let Some(result) = &mv.result {
        san.push_str(result);
    }
    Ok(san)
}

fn piece_move(board: &Board, piece: Piece, mv: &Move) -> Result<String> {
    let mut san = String::with_capacity(8);
    let capture = mv.kind == MoveType::Capture;

    match piece.nature.san_letter() {
        None => {
            if capture {
                san.push(mv.from.file_char());
            }
        }
        Some(letter) => {
            san.push(letter);
            san.push_str(&disambiguation(board, piece, mv)?);
        }
    }

    if capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());

    if let Some(letter) = mv.promotion.and_then(|nature| nature.san_letter()) {
        san.push('=');
        san.push(letter);
    }
    Ok(san)
}

/// File, rank, or full square of the origin, whichever is the first to
/// single it out among the pieces that can reach the same destination.
fn disambiguation(board: &Board, piece: Piece, mv: &Move) -> Result<String> {
    let others: Vec<Square> = candidate_origins(board, piece, mv.to, mv.kind)?
        .into_iter()
        .filter(|&sq| sq != mv.from)
        .collect();

    if others.is_empty() {
        return Ok(String::new());
    }

    let same_file = others.iter().any(|sq| sq.file() == mv.from.file());
    let same_rank = others.iter().any(|sq| sq.rank() == mv.from.rank());

    Ok(match (same_file, same_rank) {
        (false, _) => mv.from.file_char().to_string(),
        (true, false) => mv.from.rank_char().to_string(),
        (true, true) => mv.from.to_string(),
    })
}
