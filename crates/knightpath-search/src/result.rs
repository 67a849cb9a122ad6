//! The [`PathResult`] statistics record.

use knightpath_core::Square;

/// Outcome of one shortest-path query: the path plus traversal statistics.
///
/// Pure data, created once per query and never mutated after return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// The squares from start to target inclusive; empty when no path was
    /// found.
    pub path: Vec<Square>,
    /// Cells newly marked visited during the run (the start is not counted).
    pub squares_visited: usize,
    /// Offset evaluations performed — eight per expanded square, including
    /// candidates rejected as out of bounds.
    pub square_lookups: usize,
    /// Path length in moves: `path.len() - 1`, or 0 when nothing was found
    /// or start equals target.
    pub path_moves: usize,
    /// Whether a path was found.
    pub found: bool,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_result_round_trip() {
        let result = PathResult {
            path: vec![Square::new('a', 1), Square::new('b', 3)],
            squares_visited: 2,
            square_lookups: 8,
            path_moves: 1,
            found: true,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: PathResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
