//! **knightpath-search** — breadth-first shortest-path search for knight
//! moves on an 8×8 board.
//!
//! The sole entry point is [`shortest_path`], which consumes a mutable
//! [`Board`](knightpath_core::Board) (the search's in-place visited set) and
//! two squares, and returns a [`PathResult`] with the path and traversal
//! statistics. Tie-breaks among equally short paths are deterministic: strict
//! FIFO over neighbors generated in the canonical offset order.

mod bfs;
mod result;

pub use bfs::{SearchError, shortest_path};
pub use result::PathResult;
