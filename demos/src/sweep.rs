//! Exhaustive-experiment driver: shortest paths from one origin to every
//! other square, bucketed by move count.

use knightpath_core::{Board, Square, all_squares};
use knightpath_search::{SearchError, shortest_path};

/// Aggregate statistics from one exhaustive sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub squares_checked: usize,
    pub squares_with_path: usize,
    pub squares_with_no_path: usize,
    /// Longest shortest path seen, in moves.
    pub longest_path: usize,
    /// `paths_with_moves[n]` counts targets whose shortest path takes `n`
    /// moves, for `n` in 1..=6. Index 0 is unused.
    pub paths_with_moves: [usize; 7],
    pub total_squares_visited: usize,
    pub total_square_lookups: usize,
    pub total_path_moves: usize,
}

/// Run [`shortest_path`] from `start` to each of the other 63 squares in
/// [`all_squares`] order, summing counters and bucketing by move count.
pub fn sweep_from(board: &mut Board, start: Square) -> Result<SweepSummary, SearchError> {
    let mut summary = SweepSummary::default();
    for target in all_squares() {
        if target == start {
            continue;
        }
        let result = shortest_path(board, start, target)?;
        summary.squares_checked += 1;
        summary.total_squares_visited += result.squares_visited;
        summary.total_square_lookups += result.square_lookups;
        summary.total_path_moves += result.path_moves;
        if result.found {
            summary.squares_with_path += 1;
            summary.longest_path = summary.longest_path.max(result.path_moves);
            if let Some(bucket) = summary.paths_with_moves.get_mut(result.path_moves) {
                *bucket += 1;
            }
        } else {
            summary.squares_with_no_path += 1;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_from_a1_reaches_everything() {
        let mut board = Board::new();
        let summary = sweep_from(&mut board, "a1".parse().unwrap()).unwrap();
        assert_eq!(summary.squares_checked, 63);
        assert_eq!(summary.squares_with_no_path, 0);
        assert_eq!(summary.squares_with_path, 63);
        assert_eq!(summary.longest_path, 6);
        assert_eq!(summary.paths_with_moves[0], 0);
        assert_eq!(
            summary.paths_with_moves[1..=6].iter().sum::<usize>()
                + summary.squares_with_no_path,
            63,
        );
    }

    #[test]
    fn sweep_is_deterministic() {
        let mut board = Board::new();
        let start = "d4".parse().unwrap();
        let first = sweep_from(&mut board, start).unwrap();
        let second = sweep_from(&mut board, start).unwrap();
        assert_eq!(first, second);
    }
}
