use sudogen::{Difficulty, Sudoku};

// Prints a puzzle and its solution in line format, one per line.
// The difficulty name is taken from the first argument, defaulting to medium.
fn main() {
    let difficulty = std::env::args()
        .nth(1)
        .map(|name| Difficulty::from_name(&name))
        .unwrap_or_default();

    let (puzzle, solution) = Sudoku::generate_puzzle(difficulty);
    println!("{}", puzzle.to_str_line());
    println!("{}", solution.to_str_line());
}
