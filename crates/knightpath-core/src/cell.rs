//! The [`CellState`] type — the per-square marking vocabulary.

/// State of a single board cell.
///
/// Replaces the magic sentinel integers of earlier knight-path programs with
/// an explicit tag. Only one marking mode is live on a board between
/// [`clear`](crate::Board::clear) calls: breadth-first search uses `Visited`
/// and `PathStep`, move-set plotting uses `Visited` and `MoveIndex`. Mixing
/// modes without an intervening clear is a caller contract violation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Untouched since the last clear.
    #[default]
    Unvisited,
    /// Reached by the current search or used as a plot origin.
    Visited,
    /// 0-based position of this cell along a reconstructed shortest path.
    PathStep(u8),
    /// 1-based index of the knight offset that reaches this cell.
    MoveIndex(u8),
    /// Reserved for future obstacle support; never produced today.
    Obstacle,
}

impl CellState {
    /// Whether this cell has been marked by the current marking mode.
    #[inline]
    pub const fn is_marked(self) -> bool {
        !matches!(self, CellState::Unvisited)
    }
}
