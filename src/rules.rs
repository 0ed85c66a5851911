//! Per-piece movement geometry.
//!
//! Every predicate here is a pure function of the source and destination
//! coordinates (plus colour, for pawns). Legality is judged on the move
//! *shape* alone; occupancy and path blocking never enter into it, so
//! sliding pieces pass straight through anything between the endpoints
//! and only the board layer vetoes a same-colour destination.

use crate::types::{Color, Coord, Piece, PieceKind};

/// Absolute per-axis deltas between two coordinates.
#[inline]
fn abs_deltas(from: Coord, to: Coord) -> [u16; 4] {
    let (dx, dy, dz, dw) = from.delta_to(to);
    [
        dx.unsigned_abs(),
        dy.unsigned_abs(),
        dz.unsigned_abs(),
        dw.unsigned_abs(),
    ]
}

/// Is `from -> to` a legal move shape for `piece`?
pub fn is_legal_geometry(piece: Piece, from: Coord, to: Coord) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_legal(piece.color, from, to),
        PieceKind::Knight => knight_legal(from, to),
        PieceKind::Bishop => bishop_legal(from, to),
        PieceKind::Rook => rook_legal(from, to),
        PieceKind::Queen => queen_legal(from, to),
        PieceKind::King => king_legal(from, to),
    }
}

/// King: at most one step on every axis. The zero move (all deltas 0) is
/// a legal shape; the board layer rejects it as a self-capture.
pub fn king_legal(from: Coord, to: Coord) -> bool {
    abs_deltas(from, to).iter().all(|&d| d <= 1)
}

/// Rook: exactly one axis changes.
pub fn rook_legal(from: Coord, to: Coord) -> bool {
    abs_deltas(from, to).iter().filter(|&&d| d != 0).count() == 1
}

/// Bishop: all four axes change by the same amount.
pub fn bishop_legal(from: Coord, to: Coord) -> bool {
    let d = abs_deltas(from, to);
    d[0] != 0 && d.iter().all(|&v| v == d[0])
}

/// Queen: every axis that changes does so by the same amount. This covers
/// the rook and bishop shapes plus the partial diagonals where only two
/// or three axes move.
pub fn queen_legal(from: Coord, to: Coord) -> bool {
    let d = abs_deltas(from, to);
    match d.iter().copied().find(|&v| v != 0) {
        Some(m) => d.iter().all(|&v| v == 0 || v == m),
        None => true,
    }
}

/// Knight: a 1-step and a 2-step on two distinct axes, with the remaining
/// two axes mirroring them. Of the six ways to spread {1,1,2,2} over four
/// axes, only the four where no adjacent axis pair carries equal deltas
/// are knight shapes; (1,1,2,2) and (2,2,1,1) are not.
pub fn knight_legal(from: Coord, to: Coord) -> bool {
    let d = abs_deltas(from, to);
    matches!(
        (d[0], d[1], d[2], d[3]),
        (1, 2, 1, 2) | (1, 2, 2, 1) | (2, 1, 1, 2) | (2, 1, 2, 1)
    )
}

/// Pawn: one step along +x for white, -x for black, with an optional
/// simultaneous step along w in the same direction (the only diagonal a
/// pawn has). No double advance, no y or z movement, and the shape does
/// not distinguish captures from quiet moves.
pub fn pawn_legal(color: Color, from: Coord, to: Coord) -> bool {
    let (dx, dy, dz, dw) = from.delta_to(to);
    let forward: i16 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    dx == forward && dy == 0 && dz == 0 && (dw == 0 || dw == forward)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
