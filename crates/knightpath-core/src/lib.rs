//! **knightpath-core** — board and square model for knight-move pathfinding.
//!
//! This crate provides the value types shared across the *knightpath*
//! workspace: the [`Square`] coordinate, the canonical knight [`Offset`]
//! table, the [`CellState`] marking vocabulary, and the 8×8 [`Board`] the
//! search mutates in place.

pub mod board;
pub mod cell;
pub mod square;

pub use board::{Board, CELLS};
pub use cell::CellState;
pub use square::{Offset, ParseSquareError, Square, all_squares};
