//! Knight shortest-path demonstration.
//!
//! Run: cargo run --bin knight-moves

use knightpath_core::{Board, Square};
use knightpath_demos::{legend, render, sweep_from};
use knightpath_search::shortest_path;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let b2: Square = "b2".parse()?;
    let g7: Square = "g7".parse()?;
    let g8: Square = "g8".parse()?;
    let a1: Square = "a1".parse()?;

    let mut board = Board::new();

    println!("Possible moves from {b2} & {g7}:");
    board.plot_move_set(b2);
    board.plot_move_set(g7);
    println!("{}", render(&board));
    println!("{}", legend());

    println!("Running BFS on {b2} to {g8}:");
    let result = shortest_path(&mut board, b2, g8)?;
    println!("{}", render(&board));

    println!("------------ Fun Facts ------------");
    println!("Path length:\t\t{}", result.path_moves);
    println!("Squares visited:\t{}", result.squares_visited);
    println!("Total square lookups:\t{}", result.square_lookups);
    let route: Vec<String> = result.path.iter().map(Square::to_string).collect();
    println!("Path found -\n{}", route.join(" -> "));

    let summary = sweep_from(&mut board, a1)?;
    log::info!(
        "sweep from {a1} complete: {} squares checked",
        summary.squares_checked
    );
    println!("\nChecking every path starting from {a1}:");
    println!("Squares checked:\t{}", summary.squares_checked);
    println!("Squares with a path:\t{}", summary.squares_with_path);
    println!("Squares with no path:\t{}", summary.squares_with_no_path);
    println!("Longest shortest path:\t{}", summary.longest_path);
    for moves in 1..=6 {
        println!(
            "Paths with {moves} move{}:\t{}",
            if moves == 1 { "" } else { "s" },
            summary.paths_with_moves[moves],
        );
    }
    println!("Total square lookups:\t{}", summary.total_square_lookups);
    println!("Total squares visited:\t{}", summary.total_squares_visited);

    Ok(())
}
