//! The [`Board`] type — a fixed 8×8 grid of [`CellState`]s.
//!
//! A board is owned exclusively by whoever runs a query against it: the
//! search marks cells in place as its visited set, so every fresh query must
//! [`clear`](Board::clear) first. Sequential reuse of one board across many
//! queries is the expected pattern.

use crate::cell::CellState;
use crate::square::{Offset, Square};

/// Number of cells on the board.
pub const CELLS: usize = 64;

/// An 8×8 grid of cells, indexed by [`Square`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; CELLS],
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with every cell [`CellState::Unvisited`].
    pub fn new() -> Self {
        Self {
            cells: [CellState::Unvisited; CELLS],
        }
    }

    /// Reset every cell to [`CellState::Unvisited`].
    ///
    /// Precondition for every fresh search and for switching between search
    /// and move-set plotting, which share this storage.
    pub fn clear(&mut self) {
        self.cells = [CellState::Unvisited; CELLS];
    }

    /// Convert a square to a flat, file-major index. `None` if off the board.
    #[inline]
    fn idx(&self, sq: Square) -> Option<usize> {
        if !sq.is_valid() {
            return None;
        }
        Some((sq.file as usize - 'a' as usize) * 8 + (sq.rank as usize - 1))
    }

    /// Read the cell at `sq`. `None` if `sq` is off the board.
    #[inline]
    pub fn state(&self, sq: Square) -> Option<CellState> {
        self.idx(sq).map(|i| self.cells[i])
    }

    /// Write the cell at `sq`. Returns `false` (and writes nothing) if `sq`
    /// is off the board.
    #[inline]
    pub fn set(&mut self, sq: Square, state: CellState) -> bool {
        match self.idx(sq) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Mark `sq` as [`CellState::Visited`].
    #[inline]
    pub fn mark_visited(&mut self, sq: Square) -> bool {
        self.set(sq, CellState::Visited)
    }

    /// The in-bounds knight moves from `sq`, in canonical offset order.
    ///
    /// Lazy and restartable; yields at most 8 squares and the same sequence
    /// on every call.
    pub fn neighbors(&self, sq: Square) -> impl Iterator<Item = Square> + use<> {
        Offset::KNIGHT
            .into_iter()
            .filter_map(move |off| sq.checked_add(off))
    }

    /// Plot the knight's move set from `origin` for rendering.
    ///
    /// Marks `origin` Visited, then writes `MoveIndex(i + 1)` onto each
    /// in-bounds neighbor, where `i` is the offset's position in the
    /// canonical table. Out-of-bounds offsets are skipped and their index is
    /// not reused. Returns `false` (and writes nothing) if `origin` is off
    /// the board.
    ///
    /// Not consumed by the search; callers must [`clear`](Board::clear)
    /// before searching a board used for plotting.
    pub fn plot_move_set(&mut self, origin: Square) -> bool {
        if !self.mark_visited(origin) {
            return false;
        }
        for (i, off) in Offset::KNIGHT.iter().enumerate() {
            if let Some(neighbor) = origin.checked_add(*off) {
                self.set(neighbor, CellState::MoveIndex(i as u8 + 1));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::all_squares;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn new_board_is_unvisited() {
        let board = Board::new();
        for s in all_squares() {
            assert_eq!(board.state(s), Some(CellState::Unvisited));
        }
    }

    #[test]
    fn set_then_state_round_trip() {
        let mut board = Board::new();
        assert!(board.set(sq("d4"), CellState::PathStep(3)));
        assert_eq!(board.state(sq("d4")), Some(CellState::PathStep(3)));
        assert_eq!(board.state(sq("d5")), Some(CellState::Unvisited));
    }

    #[test]
    fn out_of_domain_access_is_rejected() {
        let mut board = Board::new();
        let bad = Square::new('i', 3);
        assert_eq!(board.state(bad), None);
        assert!(!board.set(bad, CellState::Visited));
        assert!(!board.mark_visited(Square::new('a', 0)));
        assert!(!board.plot_move_set(Square::new('z', 9)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = Board::new();
        board.mark_visited(sq("a1"));
        board.set(sq("h8"), CellState::MoveIndex(5));
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn corner_neighbors_in_canonical_order() {
        let board = Board::new();
        let from_a1: Vec<_> = board.neighbors(sq("a1")).collect();
        assert_eq!(from_a1, vec![sq("b3"), sq("c2")]);
        let from_h8: Vec<_> = board.neighbors(sq("h8")).collect();
        assert_eq!(from_h8, vec![sq("g6"), sq("f7")]);
    }

    #[test]
    fn center_has_eight_neighbors_in_canonical_order() {
        let board = Board::new();
        let from_d4: Vec<_> = board.neighbors(sq("d4")).collect();
        assert_eq!(
            from_d4,
            vec![
                sq("e6"),
                sq("e2"),
                sq("c6"),
                sq("c2"),
                sq("f5"),
                sq("f3"),
                sq("b5"),
                sq("b3"),
            ]
        );
    }

    #[test]
    fn neighbors_is_restartable() {
        let board = Board::new();
        let first: Vec<_> = board.neighbors(sq("b2")).collect();
        let second: Vec<_> = board.neighbors(sq("b2")).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn plot_move_set_skips_edges_without_reusing_indices() {
        let mut board = Board::new();
        assert!(board.plot_move_set(sq("b2")));
        assert_eq!(board.state(sq("b2")), Some(CellState::Visited));
        // Offsets 2, 4, 7 and 8 fall off the board from b2; their indices
        // stay unused.
        assert_eq!(board.state(sq("c4")), Some(CellState::MoveIndex(1)));
        assert_eq!(board.state(sq("a4")), Some(CellState::MoveIndex(3)));
        assert_eq!(board.state(sq("d3")), Some(CellState::MoveIndex(5)));
        assert_eq!(board.state(sq("d1")), Some(CellState::MoveIndex(6)));
        let marked = all_squares()
            .filter(|&s| board.state(s).is_some_and(CellState::is_marked))
            .count();
        assert_eq!(marked, 5);
    }
}
