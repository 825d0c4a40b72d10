use sudogen::{Difficulty, Sudoku};

// Renders a puzzle of each difficulty in block format, with the hole
// count and the solution of the last one. Run with RUST_LOG=debug to see
// removal diagnostics.
fn main() {
    env_logger::init();

    for &difficulty in Difficulty::all().iter() {
        let (puzzle, solution) = Sudoku::generate_puzzle(difficulty);
        let n_holes = 81 - puzzle.n_clues();
        println!("{} ({} holes):\n{}\n", difficulty, n_holes, puzzle);

        if difficulty == Difficulty::Hard {
            println!("solution:\n{}", solution);
        }
    }
}
