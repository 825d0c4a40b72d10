use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use sudogen::{Difficulty, Sudoku};

fn n_holes(sudoku: &Sudoku) -> usize {
    sudoku.iter().filter(Option::is_none).count()
}

// this test is probabilistic in nature
// if an error occurs, note down the sudoku that it generated
#[test]
fn generate_filled_sudoku_correctness() {
    for _ in 0..100 {
        let sudoku = Sudoku::generate_filled();
        if !sudoku.is_solved() {
            panic!(
                "Randomly generated an invalid solved sudoku. Please save the sudoku for debugging:\n{}",
                sudoku.to_str_line()
            );
        }
    }
}

// this test is probabilistic in nature
// if an error occurs, note down the sudoku that it generated
#[test]
fn generate_puzzle_uniqueness() {
    for _ in 0..5 {
        let (puzzle, solution) = Sudoku::generate_puzzle(Difficulty::Medium);
        if puzzle.solve_unique() != Some(solution) {
            panic!(
                "Randomly generated a non-proper puzzle. Please save the sudoku for debugging:\n{}",
                puzzle.to_str_line()
            );
        }
    }
}

#[test]
fn puzzle_agrees_with_its_solution() {
    for &difficulty in Difficulty::all().iter() {
        let (puzzle, solution) = Sudoku::generate_puzzle(difficulty);
        let puzzle = puzzle.to_bytes();
        let solution = solution.to_bytes();
        for (cell, (&p, &s)) in puzzle.iter().zip(solution.iter()).enumerate() {
            assert!(
                p == 0 || p == s,
                "puzzle disagrees with its solution in cell {}",
                cell
            );
        }
    }
}

#[test]
fn hole_counts_match_difficulty() {
    let (easy, _) = Sudoku::generate_puzzle(Difficulty::Easy);
    assert_eq!(n_holes(&easy), 38);

    let (medium, _) = Sudoku::generate_puzzle(Difficulty::Medium);
    assert_eq!(n_holes(&medium), 46);

    // uniqueness digging can in principle saturate below the hard target
    let (hard, _) = Sudoku::generate_puzzle(Difficulty::Hard);
    let holes = n_holes(&hard);
    assert!(
        (45..=52).contains(&holes),
        "hard puzzle ended up with {} holes:\n{}",
        holes,
        hard.to_str_line()
    );
}

#[test]
fn easy_puzzle_scenario() {
    let (puzzle, solution) = Sudoku::generate_puzzle(Difficulty::from_name("easy"));
    assert!(solution.is_solved());
    assert_eq!(n_holes(&puzzle), 38);
    assert_eq!(puzzle.n_clues(), 43);
    assert_eq!(puzzle.count_at_most(2), 1);
}

#[test]
fn seeded_generation_is_reproducible() {
    let board1 = Sudoku::generate_filled_with_rng(&mut Pcg64Mcg::seed_from_u64(42));
    let board2 = Sudoku::generate_filled_with_rng(&mut Pcg64Mcg::seed_from_u64(42));
    assert_eq!(board1, board2);

    let pair1 = Sudoku::generate_puzzle_with_rng(Difficulty::Hard, &mut Pcg64Mcg::seed_from_u64(42));
    let pair2 = Sudoku::generate_puzzle_with_rng(Difficulty::Hard, &mut Pcg64Mcg::seed_from_u64(42));
    assert_eq!(pair1, pair2);
}

// this test is probabilistic in nature
// two independently generated boards colliding is possible, but absurdly unlikely
#[test]
fn generated_boards_vary() {
    let board1 = Sudoku::generate_filled();
    let board2 = Sudoku::generate_filled();
    assert_ne!(board1, board2);
}

#[test]
fn solved_grid_counts_as_one_solution() {
    let solution = Sudoku::generate_filled();
    assert_eq!(solution.count_at_most(2), 1);
}

#[test]
fn empty_grid_has_multiple_solutions() {
    // the ultimate sudoku with multiple solutions
    let empty = Sudoku::from_bytes([0; 81]).unwrap();
    assert_eq!(empty.count_at_most(2), 2);
    // the early exit must also hold for larger limits
    assert_eq!(empty.count_at_most(10), 10);
    assert!(empty.solve_unique().is_none());
}

#[test]
fn unknown_difficulty_degrades_to_medium() {
    assert_eq!(Difficulty::from_name("fiendish"), Difficulty::Medium);
    let (puzzle, _) = Sudoku::generate_puzzle(Difficulty::from_name("fiendish"));
    assert_eq!(n_holes(&puzzle), 46);
}

#[test]
fn line_format_survives_generation() {
    let (puzzle, solution) = Sudoku::generate_puzzle(Difficulty::Easy);
    let reparsed = Sudoku::from_str_line(&puzzle.to_str_line()).unwrap();
    assert_eq!(reparsed, puzzle);
    assert_eq!(reparsed.solve_unique(), Some(solution));
}
