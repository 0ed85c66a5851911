use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Single letter for board rendering: uppercase for white, lowercase
    /// for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece: colour plus kind. Moving a piece relocates it on the board;
/// the piece itself never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell on the four-dimensional board, one position per axis.
///
/// `Coord` itself carries no range guarantee: the board size is chosen at
/// `Board` construction, so whether a coordinate is on the board is a
/// question only the board can answer. Out-of-range coordinates are valid
/// *inputs* that the board operations reject; they are never board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub w: u8,
}

impl Coord {
    #[inline]
    pub const fn new(x: u8, y: u8, z: u8, w: u8) -> Self {
        Coord { x, y, z, w }
    }

    /// Apply a signed delta per axis. `None` if any component would leave
    /// the representable range; the caller still has to bounds-check the
    /// result against its board.
    pub fn offset(self, dx: i16, dy: i16, dz: i16, dw: i16) -> Option<Coord> {
        fn axis(v: u8, d: i16) -> Option<u8> {
            u8::try_from(v as i32 + d as i32).ok()
        }
        Some(Coord {
            x: axis(self.x, dx)?,
            y: axis(self.y, dy)?,
            z: axis(self.z, dz)?,
            w: axis(self.w, dw)?,
        })
    }

    /// Signed per-axis deltas from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Coord) -> (i16, i16, i16, i16) {
        (
            other.x as i16 - self.x as i16,
            other.y as i16 - self.y as i16,
            other.z as i16 - self.z as i16,
            other.w as i16 - self.w as i16,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.z, self.w)
    }
}

// ---------------------------------------------------------------------------
// BoardError
// ---------------------------------------------------------------------------

/// Failure reasons for board operations.
///
/// All of these are ordinary, recoverable outcomes the caller branches on;
/// a failed operation never leaves a partial board mutation behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    #[error("destination {0} is already occupied")]
    OccupiedDestination(Coord),

    #[error("no piece at {0}")]
    NoPieceAtSource(Coord),

    #[error("illegal {kind} move from {from} to {to}")]
    IllegalGeometry {
        kind: PieceKind,
        from: Coord,
        to: Coord,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
