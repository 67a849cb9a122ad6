//! Breadth-first shortest-path search over the knight-move graph.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use knightpath_core::{Board, CellState, Offset, Square};

use crate::result::PathResult;

/// Errors that can occur when starting a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A caller-supplied start or target square is off the 8×8 board.
    InvalidSquare(Square),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSquare(sq) => {
                write!(f, "square {}{} is outside the 8×8 board", sq.file, sq.rank)
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Compute the shortest knight path from `start` to `target`.
///
/// The board is cleared first, then mutated in place as the search's visited
/// set; on success each path square is additionally marked with its 0-based
/// [`CellState::PathStep`] so a renderer can draw the route.
///
/// The search is strict FIFO over neighbors generated in canonical offset
/// order, so among several equally short paths the returned one is always the
/// first discovered under that order. The first dequeue of `target` is via a
/// shortest route, and the search stops there.
///
/// "No path" is not an error: it yields `found = false` with an empty path
/// and the counters accumulated so far. On the unobstructed board that
/// outcome is unreachable, but the loop supports it for future obstacle
/// configurations.
pub fn shortest_path(
    board: &mut Board,
    start: Square,
    target: Square,
) -> Result<PathResult, SearchError> {
    if !start.is_valid() {
        return Err(SearchError::InvalidSquare(start));
    }
    if !target.is_valid() {
        return Err(SearchError::InvalidSquare(target));
    }

    board.clear();

    let mut result = PathResult::default();
    let mut frontier: VecDeque<Square> = VecDeque::new();
    let mut predecessor: HashMap<Square, Square> = HashMap::new();

    frontier.push_back(start);
    board.mark_visited(start);

    while let Some(current) = frontier.pop_front() {
        if current == target {
            log::trace!("reached {target}, reconstructing path");
            result.path = reconstruct(board, &predecessor, start, current);
            result.path_moves = result.path.len() - 1;
            result.found = true;
            log::debug!(
                "{start} -> {target}: {} moves, {} visited, {} lookups",
                result.path_moves,
                result.squares_visited,
                result.square_lookups,
            );
            return Ok(result);
        }

        for off in Offset::KNIGHT {
            // Every offset evaluation counts, including candidates rejected
            // as out of bounds.
            result.square_lookups += 1;
            let Some(neighbor) = current.checked_add(off) else {
                continue;
            };
            if board.state(neighbor) != Some(CellState::Unvisited) {
                continue;
            }
            board.mark_visited(neighbor);
            predecessor.insert(neighbor, current);
            frontier.push_back(neighbor);
            result.squares_visited += 1;
        }
    }

    log::debug!(
        "{start} -> {target}: no path, {} visited, {} lookups",
        result.squares_visited,
        result.square_lookups,
    );
    Ok(result)
}

/// Backtrack the predecessor mapping from `target` to `start`, reverse into
/// start…target order and write the step markers onto the board.
fn reconstruct(
    board: &mut Board,
    predecessor: &HashMap<Square, Square>,
    start: Square,
    target: Square,
) -> Vec<Square> {
    let mut path = Vec::new();
    let mut cursor = target;
    while cursor != start {
        path.push(cursor);
        // Every dequeued non-start square was recorded when enqueued.
        cursor = predecessor[&cursor];
    }
    path.push(start);
    path.reverse();
    for (i, &sq) in path.iter().enumerate() {
        board.set(sq, CellState::PathStep(i as u8));
    }
    path
}
