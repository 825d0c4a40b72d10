//! Random generation of solved boards and difficulty-scaled puzzles.
//!
//! A solved board is built by backtracking over the empty cells in reading
//! order, trying the digits of each cell in shuffled order. The shuffle is
//! what varies boards between calls; with a fixed order every call would
//! rebuild the same grid. A puzzle is then derived from the solved board by
//! clearing cells in random order, keeping only removals that leave the
//! puzzle with exactly one completion.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Cell, Sudoku};
use crate::Digit;

// Helper struct for the recursive fill
pub(crate) struct SudokuGenerator {
    grid: Sudoku,
}

impl SudokuGenerator {
    pub(crate) fn generate_filled<R: Rng>(rng: &mut R) -> Sudoku {
        // fill the first row with a random permutation of 1..=9
        // not necessary, but it skips the cheapest part of the search
        let mut generator = SudokuGenerator {
            grid: Sudoku([0; 81]),
        };
        let mut first_row = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        first_row.shuffle(rng);
        for (col, &num) in (0..9).zip(first_row.iter()) {
            generator.grid.set(Cell::new(col), num);
        }

        // the empty grid always admits a completion; failure here means
        // the search itself is broken and must not go unnoticed
        let filled = generator.fill_remaining(rng);
        assert!(filled, "backtracking failed to fill an empty grid");
        generator.grid
    }

    fn fill_remaining<R: Rng>(&mut self, rng: &mut R) -> bool {
        let cell = match self.first_empty_cell() {
            Some(cell) => cell,
            None => return true,
        };

        let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);
        for &num in digits.iter() {
            if self.grid.can_place(cell, Digit::new(num)) {
                self.grid.set(cell, num);
                if self.fill_remaining(rng) {
                    return true;
                }
                self.grid.set(cell, 0);
            }
        }
        false
    }

    fn first_empty_cell(&self) -> Option<Cell> {
        Cell::all().find(|&cell| self.grid.cell(cell).is_none())
    }
}

// Clearing a cell can only ever add completions, never remove one. A
// removal rejected once therefore stays unacceptable no matter what is
// cleared afterwards, so a single pass over all cells in random order is
// exhaustive and needs no retry budget: at most 81 uniqueness checks run.
pub(crate) fn remove_cells<R: Rng>(solution: &Sudoku, n_holes: u8, rng: &mut R) -> Sudoku {
    debug_assert!(solution.is_solved());

    let mut puzzle = *solution;
    let mut cells: Vec<Cell> = Cell::all().collect();
    cells.shuffle(rng);

    let mut holes = 0;
    for &cell in cells.iter() {
        if holes == n_holes {
            break;
        }
        let num = puzzle.0[cell.as_index()];
        puzzle.set(cell, 0);
        if puzzle.count_at_most(2) == 1 {
            holes += 1;
        } else {
            // removal would make the puzzle ambiguous
            puzzle.set(cell, num);
        }
    }

    if holes < n_holes {
        log::debug!(
            "cell removal stopped at {} of {} holes, every further removal breaks uniqueness",
            holes,
            n_holes
        );
    }
    puzzle
}
