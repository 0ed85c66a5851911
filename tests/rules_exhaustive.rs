//! Exhaustive geometry counts over the full 4096-cell board.
//!
//! Each test enumerates every destination from a fixed source and checks
//! the number of legal shapes against a hand-derived value, or checks a
//! symmetry that must hold for a whole rule family. If a count is off,
//! some piece rule accepts or rejects the wrong delta family.

use tesseract_chess::rules::{self, bishop_legal, pawn_legal, queen_legal, rook_legal};
use tesseract_chess::{Color, Coord, Piece, PieceKind};

const CORNER: Coord = Coord::new(0, 0, 0, 0);
const CENTER: Coord = Coord::new(3, 3, 3, 3);

/// Every coordinate of the standard board, scan order.
fn all_coords() -> Vec<Coord> {
    let mut out = Vec::with_capacity(4096);
    for x in 0..8u8 {
        for y in 0..8u8 {
            for z in 0..8u8 {
                for w in 0..8u8 {
                    out.push(Coord::new(x, y, z, w));
                }
            }
        }
    }
    out
}

/// Every destination within +/-7 of `(7,7,7,7)` per axis. The rules never
/// consult a board, so coordinates past 7 are fine for delta coverage.
fn delta_coords() -> Vec<Coord> {
    let mut out = Vec::with_capacity(50_625);
    for x in 0..15u8 {
        for y in 0..15u8 {
            for z in 0..15u8 {
                for w in 0..15u8 {
                    out.push(Coord::new(x, y, z, w));
                }
            }
        }
    }
    out
}

/// Count legal destinations for `piece` from `from`. The source cell is
/// included whenever the zero move is a legal shape.
fn destinations(piece: Piece, from: Coord) -> usize {
    all_coords()
        .iter()
        .filter(|&&to| rules::is_legal_geometry(piece, from, to))
        .count()
}

fn white(kind: PieceKind) -> Piece {
    Piece::new(Color::White, kind)
}

// =====================================================================
// Knight
// =====================================================================

#[test]
fn knight_center_count() {
    // 4 delta patterns x 2^4 sign choices, all on the board from (3,3,3,3).
    assert_eq!(destinations(white(PieceKind::Knight), CENTER), 64);
}

#[test]
fn knight_corner_count() {
    // Only the all-positive sign choice survives at the origin.
    assert_eq!(destinations(white(PieceKind::Knight), CORNER), 4);
}

// =====================================================================
// King
// =====================================================================

#[test]
fn king_center_count() {
    // The whole 3^4 neighbourhood, zero move included.
    assert_eq!(destinations(white(PieceKind::King), CENTER), 81);
}

#[test]
fn king_corner_count() {
    assert_eq!(destinations(white(PieceKind::King), CORNER), 16);
}

// =====================================================================
// Rook
// =====================================================================

#[test]
fn rook_count_is_position_independent() {
    // 7 other positions on each of 4 axes, from anywhere.
    assert_eq!(destinations(white(PieceKind::Rook), CENTER), 28);
    assert_eq!(destinations(white(PieceKind::Rook), CORNER), 28);
    assert_eq!(destinations(white(PieceKind::Rook), Coord::new(2, 5, 0, 7)), 28);
}

// =====================================================================
// Bishop
// =====================================================================

#[test]
fn bishop_center_count() {
    // 16 sign choices; range 4 for the all-positive one, 3 otherwise:
    // 1 * 4 + 15 * 3.
    assert_eq!(destinations(white(PieceKind::Bishop), CENTER), 49);
}

#[test]
fn bishop_corner_count() {
    // One diagonal ray of length 7.
    assert_eq!(destinations(white(PieceKind::Bishop), CORNER), 7);
}

// =====================================================================
// Queen
// =====================================================================

#[test]
fn queen_center_count() {
    // 28 single-axis + 78 two-axis + 100 three-axis + 49 four-axis
    // shapes, plus the zero move.
    assert_eq!(destinations(white(PieceKind::Queen), CENTER), 256);
}

#[test]
fn queen_corner_count() {
    // 15 non-empty axis subsets, each with one sign choice of range 7,
    // plus the zero move.
    assert_eq!(destinations(white(PieceKind::Queen), CORNER), 106);
}

#[test]
fn queen_covers_rook_and_bishop() {
    for from in [CORNER, CENTER, Coord::new(0, 3, 5, 7)] {
        for &to in &all_coords() {
            if rook_legal(from, to) || bishop_legal(from, to) {
                assert!(queen_legal(from, to), "queen must cover {from} -> {to}");
            }
        }
    }
}

// =====================================================================
// Pawn
// =====================================================================

#[test]
fn pawn_counts() {
    assert_eq!(destinations(white(PieceKind::Pawn), CENTER), 2);
    assert_eq!(destinations(Piece::new(Color::Black, PieceKind::Pawn), CENTER), 2);
    // Last rank: both shapes leave the board.
    assert_eq!(destinations(white(PieceKind::Pawn), Coord::new(7, 3, 3, 3)), 0);
    assert_eq!(destinations(Piece::new(Color::Black, PieceKind::Pawn), Coord::new(0, 3, 3, 3)), 0);
    // Top of the w axis: the diagonal leaves the board, the advance stays.
    assert_eq!(destinations(white(PieceKind::Pawn), Coord::new(3, 3, 3, 7)), 1);
}

#[test]
fn pawn_rule_mirrors_under_negation() {
    let from = Coord::new(7, 7, 7, 7);
    for &to in &delta_coords() {
        let mirrored = Coord::new(14 - to.x, 14 - to.y, 14 - to.z, 14 - to.w);
        assert_eq!(
            pawn_legal(Color::White, from, to),
            pawn_legal(Color::Black, from, mirrored),
            "white {from} -> {to} must mirror the black verdict",
        );
    }
}

// =====================================================================
// Rule-family symmetries
// =====================================================================

#[test]
fn only_pawns_see_colour() {
    let from = Coord::new(7, 7, 7, 7);
    for kind in PieceKind::ALL {
        if kind == PieceKind::Pawn {
            continue;
        }
        for &to in &delta_coords() {
            assert_eq!(
                rules::is_legal_geometry(Piece::new(Color::White, kind), from, to),
                rules::is_legal_geometry(Piece::new(Color::Black, kind), from, to),
                "{kind} verdict diverged by colour for {from} -> {to}",
            );
        }
    }
}

#[test]
fn non_pawn_shapes_are_reversible() {
    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        let piece = white(kind);
        for from in [CORNER, CENTER] {
            for &to in &all_coords() {
                assert_eq!(
                    rules::is_legal_geometry(piece, from, to),
                    rules::is_legal_geometry(piece, to, from),
                    "{kind} shape {from} -> {to} must reverse",
                );
            }
        }
    }
}
