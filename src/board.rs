//! Board storage, setup and move application.
//!
//! Cells live in one flat vector indexed by the packed coordinate
//! `((x * s + y) * s + z) * s + w` for a side length `s`. "Scan order"
//! anywhere in this crate means ascending packed index, i.e. x outermost
//! and w innermost.

use std::fmt;

use crate::rules;
use crate::types::{BoardError, Color, Coord, Piece, PieceKind};

/// Back-rank piece kinds in x order, shared by both colours.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A four-dimensional board of side length `size` on every axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Side length of the standard board.
    pub const DEFAULT_SIZE: u8 = 8;

    /// An empty standard board.
    pub fn empty() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }

    /// An empty board with `size` cells per axis. Memory is `size^4`
    /// cells, so this grows quickly; the game itself is defined on 8.
    pub fn with_size(size: u8) -> Self {
        Board {
            size,
            cells: vec![None; (size as usize).pow(4)],
        }
    }

    /// A standard board with the opening position set up.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Place the opening position: both armies on the `z = 0, w = 0`
    /// plane, white on ranks `y = 0..1`, black mirrored on `y = 6..7`,
    /// pawns in front of the back rank. Cells are written directly, so
    /// whatever occupied them before is overwritten.
    pub fn initialize(&mut self) {
        debug_assert!(
            self.size >= Self::DEFAULT_SIZE,
            "standard setup needs at least an 8-wide board"
        );
        for x in 0..8u8 {
            let kind = BACK_RANK[x as usize];
            self.put(Piece::new(Color::White, kind), Coord::new(x, 0, 0, 0));
            self.put(
                Piece::new(Color::White, PieceKind::Pawn),
                Coord::new(x, 1, 0, 0),
            );
            self.put(
                Piece::new(Color::Black, PieceKind::Pawn),
                Coord::new(x, 6, 0, 0),
            );
            self.put(Piece::new(Color::Black, kind), Coord::new(x, 7, 0, 0));
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Side length per axis.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Is `c` on the board on all four axes?
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.size && c.y < self.size && c.z < self.size && c.w < self.size
    }

    /// The piece at `c`, or `None` for an empty or off-board coordinate.
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        if self.in_bounds(c) {
            self.cells[self.index(c)]
        } else {
            None
        }
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Every coordinate on the board, in scan order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.unpack(i))
    }

    /// Every occupied cell with its piece, in scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|piece| (self.unpack(i), piece)))
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Put `piece` on the empty cell `at`.
    pub fn place_piece(&mut self, piece: Piece, at: Coord) -> Result<(), BoardError> {
        if !self.in_bounds(at) {
            return Err(BoardError::OutOfBounds(at));
        }
        if self.piece_at(at).is_some() {
            return Err(BoardError::OccupiedDestination(at));
        }
        self.put(piece, at);
        Ok(())
    }

    /// Move the piece on `from` to `to`, capturing whatever opposing piece
    /// stood there. Returns the captured piece, if any.
    ///
    /// Checks run in a fixed order and the first failure wins: bounds on
    /// both endpoints, a piece on the source, the piece's move geometry,
    /// and finally the destination not holding a same-colour piece. The
    /// zero move falls out of the last rule as a self-capture. A failed
    /// move leaves the board untouched.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, BoardError> {
        if !self.in_bounds(from) {
            return Err(BoardError::OutOfBounds(from));
        }
        if !self.in_bounds(to) {
            return Err(BoardError::OutOfBounds(to));
        }
        let piece = self
            .piece_at(from)
            .ok_or(BoardError::NoPieceAtSource(from))?;
        if !rules::is_legal_geometry(piece, from, to) {
            return Err(BoardError::IllegalGeometry {
                kind: piece.kind,
                from,
                to,
            });
        }
        let captured = self.piece_at(to);
        if let Some(occupant) = captured {
            if occupant.color == piece.color {
                return Err(BoardError::OccupiedDestination(to));
            }
        }
        let i = self.index(from);
        self.cells[i] = None;
        self.put(piece, to);
        Ok(captured)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Packed index of an in-bounds coordinate.
    #[inline]
    fn index(&self, c: Coord) -> usize {
        let s = self.size as usize;
        ((c.x as usize * s + c.y as usize) * s + c.z as usize) * s + c.w as usize
    }

    /// Inverse of `index`.
    #[inline]
    fn unpack(&self, i: usize) -> Coord {
        let s = self.size as usize;
        Coord::new(
            (i / (s * s * s)) as u8,
            (i / (s * s) % s) as u8,
            (i / s % s) as u8,
            (i % s) as u8,
        )
    }

    /// Write a cell without validation.
    fn put(&mut self, piece: Piece, at: Coord) {
        let i = self.index(at);
        self.cells[i] = Some(piece);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the 2D slice at fixed `z` and `w` as text, ranks descending
    /// so white's back rank sits at the bottom. Uppercase is white,
    /// lowercase is black, `.` is empty. Axis labels are single digits.
    pub fn slice_string(&self, z: u8, w: u8) -> String {
        let mut out = String::new();
        for y in (0..self.size).rev() {
            out.push((b'0' + y % 10) as char);
            for x in 0..self.size {
                out.push(' ');
                match self.piece_at(Coord::new(x, y, z, w)) {
                    Some(piece) => out.push(piece.kind.to_char(piece.color)),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out.push(' ');
        for x in 0..self.size {
            out.push(' ');
            out.push((b'0' + x % 10) as char);
        }
        out.push('\n');
        out
    }
}

impl fmt::Display for Board {
    /// The `z = 0, w = 0` slice, where the standard setup lives.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slice_string(0, 0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
