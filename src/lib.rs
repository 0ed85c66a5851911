//! Rules engine for chess on a four-dimensional 8x8x8x8 board.
//!
//! The familiar six piece kinds keep their identities, with move shapes
//! generalised to four axes: rooks change exactly one coordinate, bishops
//! change all four by the same amount, queens cover every "all changed
//! axes move equally" shape in between, knights interleave a 1-step and a
//! 2-step across all four axes, and pawns advance along x with an
//! optional diagonal along w.
//!
//! Legality is deliberately geometric: sliding pieces ignore anything
//! between the endpoints and there is no turn order. The checkmate
//! search only asks whether some piece can reach a currently-unattacked
//! square. See [`rules`] and [`check`] for the exact semantics.
//!
//! ```
//! use tesseract_chess::{is_in_check, Board, Color, Coord};
//!
//! let mut board = Board::starting();
//! // A knight leaves the home plane, stepping on all four axes at once.
//! board.move_piece(Coord::new(1, 0, 0, 0), Coord::new(2, 2, 1, 2))?;
//! assert!(!is_in_check(&board, Color::Black));
//! # Ok::<(), tesseract_chess::BoardError>(())
//! ```

pub mod board;
pub mod check;
pub mod rules;
pub mod types;

pub use board::Board;
pub use check::{is_checkmate, is_in_check, is_square_attacked, king_coord};
pub use rules::is_legal_geometry;
pub use types::*;
