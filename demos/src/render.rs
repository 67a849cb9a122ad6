//! Character-grid board rendering.

use std::fmt::Write;

use knightpath_core::{Board, CellState, Square};

/// Render the board as a character grid: rank 8 at the top down to rank 1,
/// files a..h left to right.
///
/// Unvisited cells are blank, visited cells are `.`, obstacles are `*`, and
/// path-step or move-index cells show their numeric value.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for rank in (1..=8).rev() {
        let _ = write!(out, "{rank}| ");
        for file in 'a'..='h' {
            let state = board
                .state(Square::new(file, rank))
                .unwrap_or(CellState::Unvisited);
            match state {
                CellState::Unvisited => out.push_str("    "),
                CellState::Visited => out.push_str(".   "),
                CellState::Obstacle => out.push_str("*   "),
                CellState::PathStep(n) | CellState::MoveIndex(n) => {
                    let _ = write!(out, "{n:<4}");
                }
            }
        }
        out.push('\n');
        if rank > 1 {
            out.push_str(" |\n");
        }
    }
    out.push_str("   _____________________________\n   ");
    for file in 'A'..='H' {
        out.push(file);
        out.push_str("   ");
    }
    out.push('\n');
    out
}

/// The legend matching [`render`]'s glyphs.
pub fn legend() -> &'static str {
    "Legend:\n   .  -visited\n   *  -obstacle\n   #  -step/move number\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_move_set_glyphs() {
        let mut board = Board::new();
        board.plot_move_set("b2".parse().unwrap());
        let text = render(&board);
        // Rank 4 holds move indices 1 (c4) and 3 (a4).
        let rank4 = text.lines().find(|l| l.starts_with("4|")).unwrap();
        assert!(rank4.contains('3'));
        assert!(rank4.contains('1'));
        // b2 itself renders as the visited dot.
        let rank2 = text.lines().find(|l| l.starts_with("2|")).unwrap();
        assert!(rank2.contains('.'));
    }

    #[test]
    fn top_line_is_rank_eight() {
        let board = Board::new();
        let text = render(&board);
        assert!(text.starts_with("8| "));
        assert!(text.trim_end().ends_with("H"));
    }
}
