//! Movement geometry per piece nature

use crate::board::{Board, Nature, Piece, Square};
use crate::game::MoveType;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares holding `piece` that could move to `to` by geometry alone.
/// Pins are not considered.
pub fn reaching_origins(board: &Board, piece: Piece, to: Square, kind: MoveType) -> Vec<Square> {
    match piece.nature {
        Nature::Pawn => pawn_origins(board, piece, to, kind),
        Nature::Knight => KNIGHT_JUMPS
            .iter()
            .filter_map(|&(df, dr)| to.offset(df, dr))
            .filter(|&sq| board.get(sq) == Some(piece))
            .collect(),
        Nature::Bishop => slide_origins(board, piece, to, &DIAGONALS, 7),
        Nature::Rook => slide_origins(board, piece, to, &ORTHOGONALS, 7),
        Nature::Queen => slide_origins(board, piece, to, &ALL_DIRECTIONS, 7),
        Nature::King => slide_origins(board, piece, to, &ALL_DIRECTIONS, 1),
    }
}

fn pawn_origins(board: &Board, piece: Piece, to: Square, kind: MoveType) -> Vec<Square> {
    let back = -piece.color.forward();
    match kind {
        MoveType::Capture => [-1, 1]
            .iter()
            .filter_map(|&df| to.offset(df, back))
            .filter(|&sq| board.get(sq) == Some(piece))
            .collect(),
        MoveType::Single => {
            if !board.is_empty(to) {
                return Vec::new();
            }
            let Some(one_back) = to.offset(0, back) else {
                return Vec::new();
            };
            if board.get(one_back) == Some(piece) {
                return vec![one_back];
            }
            if !board.is_empty(one_back) {
                return Vec::new();
            }
            match one_back.offset(0, back) {
                Some(two_back)
                    if two_back.rank() == piece.color.pawn_rank()
                        && board.get(two_back) == Some(piece) =>
                {
                    vec![two_back]
                }
                _ => Vec::new(),
            }
        }
        MoveType::CastleKingside | MoveType::CastleQueenside => Vec::new(),
    }
}

/// Walks outward from `to`, stopping at the first occupied square of each ray.
fn slide_origins(
    board: &Board,
    piece: Piece,
    to: Square,
    directions: &[(i8, i8)],
    max_steps: i8,
) -> Vec<Square> {
    let mut origins = Vec::new();
    for &(df, dr) in directions {
        for step in 1..=max_steps {
            let Some(sq) = to.offset(df * step, dr * step) else {
                break;
            };
            match board.get(sq) {
                None => continue,
                Some(found) => {
                    if found == piece {
                        origins.push(sq);
                    }
                    break;
                }
            }
        }
    }
    origins
}
