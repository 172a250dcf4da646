//! Short algebraic notation: one move token to a resolved [`Move`]

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::board::{file_from_char, rank_from_char, Board, Color, Nature, Piece, Square, SquareHint};
use crate::error::{Error, Result};
use crate::game::{Move, MoveType};
use crate::rules::candidate_origins;

use super::options::PgnOptions;

static CASTLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<castle>O-O-O|O-O|0-0-0|0-0)\+?(?P<result>1-0|0-1|1/2-1/2|\*|\+\+|#)?$")
        .expect("castling pattern is valid")
});

/// Tried first: no origin hint between piece letter and destination.
static PLAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<piece>[KQRBN])?(?P<capture>[x-])?(?P<to>[a-h][1-8])(?:=?(?P<promo>[QRBN]))?\+?(?P<ep>e\.p\.)?(?P<result>1-0|0-1|1/2-1/2|\*|\+\+|#)?$",
    )
    .expect("move pattern is valid")
});

static HINTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<piece>[KQRBN])?(?P<file>[a-h])?(?P<rank>[1-8])?(?P<capture>[x-])?(?P<to>[a-h][1-8])(?:=?(?P<promo>[QRBN]))?\+?(?P<ep>e\.p\.)?(?P<result>1-0|0-1|1/2-1/2|\*|\+\+|#)?$",
    )
    .expect("move pattern is valid")
});

/// Resolves `token` against `board` for the side `mover`.
pub fn parse_move(board: &Board, mover: Color, token: &str, options: &PgnOptions) -> Result<Move> {
    if let Some(caps) = CASTLE_RE.captures(token) {
        let kind = if caps["castle"].len() > 3 {
            MoveType::CastleQueenside
        } else {
            MoveType::CastleKingside
        };
        let mut mv = castle_move(board, mover, kind, token)?;
        mv.result = result_of(&caps);
        return Ok(mv);
    }

    let caps = PLAIN_RE
        .captures(token)
        .or_else(|| HINTED_RE.captures(token))
        .ok_or_else(|| Error::notation(token, "unrecognized move"))?;

    let nature = match caps.name("piece") {
        Some(m) => letter_nature(m.as_str()).ok_or_else(|| Error::notation(token, "unknown piece"))?,
        None => Nature::Pawn,
    };
    let piece = Piece::new(mover, nature);
    let to: Square = caps["to"].parse()?;
    if board.get(to).is_some_and(|occupant| occupant.color == mover) {
        return Err(Error::notation(token, format!("{} holds a {} piece", to, mover)));
    }
    let hint = SquareHint {
        file: caps.name("file").and_then(|m| m.as_str().chars().next()).and_then(file_from_char),
        rank: caps.name("rank").and_then(|m| m.as_str().chars().next()).and_then(rank_from_char),
    };

    let kind = match caps.name("capture").map(|m| m.as_str()) {
        Some("x") => MoveType::Capture,
        // A dash only separates squares; it captures when something stands there.
        Some(_) if !board.is_empty(to) => MoveType::Capture,
        _ => MoveType::Single,
    };

    let promotion = match caps.name("promo") {
        Some(m) if nature == Nature::Pawn => letter_nature(m.as_str()),
        Some(_) => return Err(Error::notation(token, "only pawns promote")),
        None => None,
    };

    let from = pick_origin(board, piece, to, kind, hint, token, options)?;

    let en_passant = nature == Nature::Pawn
        && kind == MoveType::Capture
        && (caps.name("ep").is_some() || board.is_empty(to));

    Ok(Move {
        kind,
        from,
        to,
        rook: None,
        promotion,
        en_passant,
        result: result_of(&caps),
    })
}

fn pick_origin(
    board: &Board,
    piece: Piece,
    to: Square,
    kind: MoveType,
    hint: SquareHint,
    token: &str,
    options: &PgnOptions,
) -> Result<Square> {
    let candidates: Vec<Square> = candidate_origins(board, piece, to, kind)?
        .into_iter()
        .filter(|&sq| hint.matches(sq))
        .collect();

    match candidates.as_slice() {
        [] => Err(Error::notation(token, "no legal move matches")),
        [only] => Ok(*only),
        [first, ..] => {
            if hint.is_empty() || options.strict_disambiguation {
                Err(Error::notation(
                    token,
                    format!("ambiguous move, {} pieces can reach {}", candidates.len(), to),
                ))
            } else {
                Ok(*first)
            }
        }
    }
}

/// King and rook squares for castling, taken from the king's current square.
pub fn castle_move(board: &Board, mover: Color, kind: MoveType, token: &str) -> Result<Move> {
    let king = board.king_square(mover)?;
    let (king_step, rook_from, rook_to) = match kind {
        MoveType::CastleQueenside => (-2, -4, -1),
        _ => (2, 3, 1),
    };
    let square = |files: i8| {
        king.offset(files, 0)
            .ok_or_else(|| Error::notation(token, "castling runs off the board"))
    };
    Ok(Move::castle(
        kind,
        king,
        square(king_step)?,
        square(rook_from)?,
        square(rook_to)?,
    ))
}

fn letter_nature(letter: &str) -> Option<Nature> {
    letter.chars().next().and_then(Nature::from_san_letter)
}

fn result_of(caps: &Captures<'_>) -> Option<String> {
    caps.name("result").map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn parse(board: &Board, mover: Color, token: &str) -> Result<Move> {
        parse_move(board, mover, token, &PgnOptions::default())
    }

    fn board_from_rows(rows: [&str; 8]) -> Board {
        Board::from_glyph_string(&rows.concat()).unwrap()
    }

    #[test]
    fn test_pawn_push() {
        let board = Board::starting();
        let mv = parse(&board, Color::White, "e4").unwrap();
        assert_eq!(mv, Move::new(MoveType::Single, sq("e2"), sq("e4")));
        let mv = parse(&board, Color::Black, "c6").unwrap();
        assert_eq!(mv.from, sq("c7"));
    }

    #[test]
    fn test_knight_development() {
        let board = Board::starting();
        let mv = parse(&board, Color::White, "Nf3").unwrap();
        assert_eq!((mv.from, mv.to), (sq("g1"), sq("f3")));
        assert!(parse(&board, Color::White, "Nd4").is_err());
    }

    #[test]
    fn test_check_marker_and_result_suffix() {
        let board = board_from_rows([
            "....k...", "........", "........", "........",
            "........", "........", "........", "...QK...",
        ]);
        let check = parse(&board, Color::White, "Qa4+").unwrap();
        assert_eq!((check.from, check.to, check.result), (sq("d1"), sq("a4"), None));

        let mate = parse(&board, Color::White, "Qd7#").unwrap();
        assert_eq!(mate.result.as_deref(), Some("#"));
        let double = parse(&board, Color::White, "Qd7++").unwrap();
        assert_eq!(double.result.as_deref(), Some("++"));
    }

    #[test]
    fn test_file_hint_disambiguates() {
        let board = board_from_rows([
            "k.......", "........", "........", "...R....",
            "........", "........", ".......K", "R.......",
        ]);
        assert!(matches!(parse(&board, Color::White, "Rd1"), Err(Error::Notation(_))));
        let mv = parse(&board, Color::White, "Rad1").unwrap();
        assert_eq!(mv.from, sq("a1"));
        let mv = parse(&board, Color::White, "R5d1").unwrap();
        assert_eq!(mv.from, sq("d5"));
        let mv = parse(&board, Color::White, "Rd5d1").unwrap();
        assert_eq!(mv.from, sq("d5"));
    }

    #[test]
    fn test_partial_hint_takes_first_candidate() {
        // Knights on b1 and b5 both reach c3 and share the b-file.
        let board = board_from_rows([
            "k.......", "........", "........", ".N......",
            "........", "........", ".......K", ".N......",
        ]);
        let mv = parse(&board, Color::White, "Nbc3").unwrap();
        assert!(mv.from == sq("b1") || mv.from == sq("b5"));

        let strict = PgnOptions::new().strict_disambiguation();
        assert!(parse_move(&board, Color::White, "Nbc3", &strict).is_err());
        assert_eq!(
            parse_move(&board, Color::White, "N1c3", &strict).unwrap().from,
            sq("b1")
        );
    }

    #[test]
    fn test_pawn_capture_and_en_passant() {
        let board = board_from_rows([
            "....k...", "........", "........", "...pP...",
            "........", "........", "........", "....K...",
        ]);
        let mv = parse(&board, Color::White, "exd6").unwrap();
        assert_eq!((mv.from, mv.to, mv.kind), (sq("e5"), sq("d6"), MoveType::Capture));
        assert!(mv.en_passant);

        let mut after = board.copy();
        after.apply(&mv).unwrap();
        assert!(after.is_empty(sq("d5")));
        assert!(after.is_empty(sq("e5")));

        let marked = parse(&board, Color::White, "exd6e.p.").unwrap();
        assert_eq!(marked, mv);
    }

    #[test]
    fn test_black_en_passant_removes_pawn_above() {
        let board = board_from_rows([
            "....k...", "........", "........", "........",
            "...Pp...", "........", "........", "....K...",
        ]);
        let mv = parse(&board, Color::Black, "exd3").unwrap();
        assert!(mv.en_passant);
        let mut after = board.copy();
        after.apply(&mv).unwrap();
        assert!(after.is_empty(sq("d4")));
        assert_eq!(after.get(sq("d3")), Some(Piece::new(Color::Black, Nature::Pawn)));
    }

    #[test]
    fn test_promotion() {
        let board = board_from_rows([
            "...r...k", "....P...", "........", "........",
            "........", "........", "........", "....K...",
        ]);
        let push = parse(&board, Color::White, "e8=Q").unwrap();
        assert_eq!(push.promotion, Some(Nature::Queen));
        let capture = parse(&board, Color::White, "exd8=N").unwrap();
        assert_eq!((capture.kind, capture.promotion), (MoveType::Capture, Some(Nature::Knight)));
        assert!(!capture.en_passant);
        assert!(parse(&board, Color::White, "Ke2=Q").is_err());
    }

    #[test]
    fn test_castling_from_king_square() {
        let board = board_from_rows([
            "r...k..r", "........", "........", "........",
            "........", "........", "........", "R...K..R",
        ]);
        let short = parse(&board, Color::White, "O-O").unwrap();
        assert_eq!(short.kind, MoveType::CastleKingside);
        assert_eq!((short.from, short.to), (sq("e1"), sq("g1")));
        assert_eq!(short.rook, Some((sq("h1"), sq("f1"))));

        let long = parse(&board, Color::Black, "O-O-O+").unwrap();
        assert_eq!(long.kind, MoveType::CastleQueenside);
        assert_eq!((long.from, long.to), (sq("e8"), sq("c8")));
        assert_eq!(long.rook, Some((sq("a8"), sq("d8"))));
    }

    #[test]
    fn test_dash_separator() {
        let board = Board::starting();
        let mv = parse(&board, Color::White, "Ng1-f3").unwrap();
        assert_eq!((mv.kind, mv.from), (MoveType::Single, sq("g1")));
    }

    #[test]
    fn test_occupied_destination_rejected() {
        let board = Board::starting();
        for token in ["Ne2", "Nd2", "Qd2", "Ng1-e2"] {
            assert!(
                matches!(parse(&board, Color::White, token), Err(Error::Notation(_))),
                "{token} lands on a white piece"
            );
        }

        let board = board_from_rows([
            "....k...", "........", "........", "....p...",
            "....P...", "........", "........", "....K...",
        ]);
        assert!(parse(&board, Color::White, "e5").is_err());
        assert!(parse(&board, Color::Black, "e4").is_err());
    }

    #[test]
    fn test_malformed_tokens() {
        let board = Board::starting();
        for token in ["Zz9", "", "e9", "Nf", "Pe4", "exd5??"] {
            assert!(
                matches!(parse(&board, Color::White, token), Err(Error::Notation(_))),
                "{token} should not parse"
            );
        }
    }
}
