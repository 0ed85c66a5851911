//! Check and checkmate queries.
//!
//! Read-only scans over a board. The searches inherit the move rules'
//! simplifications wholesale: attacks ignore blocking, and an escape
//! square only has to be unattacked on the *current* board, so no
//! candidate move is ever applied or undone here.

use crate::board::Board;
use crate::rules;
use crate::types::{Color, Coord, Piece, PieceKind};

/// The `color` king's coordinate, or `None` if no such king remains. If
/// a hand-built position holds several kings of one colour, the first in
/// scan order wins.
pub fn king_coord(board: &Board, color: Color) -> Option<Coord> {
    board
        .occupied()
        .find(|&(_, piece)| piece.color == color && piece.kind == PieceKind::King)
        .map(|(coord, _)| coord)
}

/// Could any `by`-coloured piece reach `target` under the move geometry?
/// Pieces in between are invisible to this, and a pawn "attacks" its
/// quiet advance square as well as its diagonal.
pub fn is_square_attacked(board: &Board, target: Coord, by: Color) -> bool {
    board
        .occupied()
        .any(|(from, piece)| piece.color == by && rules::is_legal_geometry(piece, from, target))
}

/// Is the `color` king attacked? A board without that king reports no
/// check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match king_coord(board, color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => false,
    }
}

/// Is `color` checkmated?
///
/// True when the king is attacked and no escape exists. An escape is any
/// geometry-legal move by any `color` piece to an on-board square the
/// opponent does not attack right now; occupancy of that square and the
/// attack picture after the move are not consulted, so the verdict errs
/// towards `false`.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    let Some(king) = king_coord(board, color) else {
        return false;
    };
    if !is_square_attacked(board, king, !color) {
        return false;
    }

    // King steps: the whole {-1,0,1}^4 neighbourhood, funnelled through
    // the ordinary move rule. The rule accepts the zero step too, but the
    // king's own square is attacked, so it never counts as an escape.
    let king_piece = Piece::new(color, PieceKind::King);
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                for dw in -1..=1 {
                    let Some(to) = king.offset(dx, dy, dz, dw) else {
                        continue;
                    };
                    if !board.in_bounds(to) {
                        continue;
                    }
                    if rules::is_legal_geometry(king_piece, king, to)
                        && !is_square_attacked(board, to, !color)
                    {
                        return false;
                    }
                }
            }
        }
    }

    // Any other piece of this colour reaching any safe square also lifts
    // the mate, wherever that square is.
    for (from, piece) in board.occupied() {
        if piece.color != color {
            continue;
        }
        for to in board.coords() {
            if rules::is_legal_geometry(piece, from, to) && !is_square_attacked(board, to, !color) {
                return false;
            }
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
