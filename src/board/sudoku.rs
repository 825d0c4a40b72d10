use std::fmt;

use rand::Rng;

use crate::board::{Block, Cell, Col, Digit, Row};
use crate::consts::{ALL_DIGITS, N_CELLS};
use crate::errors::{FromBytesError, FromBytesSliceError, LineParseError};
use crate::generator::{self, SudokuGenerator};
use crate::solver::SudokuSolver;
use crate::Difficulty;

/// The main structure exposing all the functionality of the library.
///
/// A `Sudoku` is an 81-byte grid in reading order, one byte per cell,
/// `1..=9` for entries and `0` for empty cells. It is `Copy` and can be
/// passed around by value freely.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Generates a random, fully solved sudoku.
    ///
    /// Every call produces an independently randomized board.
    pub fn generate_filled() -> Self {
        Self::generate_filled_with_rng(&mut rand::thread_rng())
    }

    /// Generates a random, fully solved sudoku from the given source of randomness.
    ///
    /// Reusing a seeded `rng` reproduces the same board, which is useful
    /// for tests and fixtures.
    pub fn generate_filled_with_rng<R: Rng>(rng: &mut R) -> Self {
        SudokuGenerator::generate_filled(rng)
    }

    /// Generates a `(puzzle, solution)` pair for the given difficulty.
    ///
    /// The solution is a fully solved board. The puzzle is derived from it
    /// by clearing cells and is guaranteed to have exactly one completion,
    /// which is the returned solution.
    pub fn generate_puzzle(difficulty: Difficulty) -> (Self, Self) {
        Self::generate_puzzle_with_rng(difficulty, &mut rand::thread_rng())
    }

    /// Generates a `(puzzle, solution)` pair from the given source of randomness.
    pub fn generate_puzzle_with_rng<R: Rng>(difficulty: Difficulty, rng: &mut R) -> (Self, Self) {
        let solution = Self::generate_filled_with_rng(rng);
        let puzzle = generator::remove_cells(&solution, difficulty.n_holes(), rng);
        (puzzle, solution)
    }

    /// Creates a sudoku from a byte array. All entries must be in the range of `0..=9`.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Self, FromBytesError> {
        if bytes.iter().any(|&num| num > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice. The slice must be 81 long with all
    /// entries in the range of `0..=9`.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Self, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut array = [0; N_CELLS];
        array.copy_from_slice(bytes);
        Ok(Self::from_bytes(array)?)
    }

    /// Returns the underlying byte array.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Creates a sudoku from a string in line format: 81 characters, one per
    /// cell in reading order, `'1'..='9'` for entries and any of `'.'`, `'_'`
    /// or `'0'` for empty cells.
    pub fn from_str_line(s: &str) -> Result<Self, LineParseError> {
        let n_chars = s.chars().count();
        if n_chars != N_CELLS {
            return Err(LineParseError::WrongLength(n_chars));
        }
        let mut grid = [0; N_CELLS];
        for (pos, ch) in s.chars().enumerate() {
            grid[pos] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => return Err(LineParseError::InvalidCharacter { pos, ch }),
            };
        }
        Ok(Sudoku(grid))
    }

    /// Returns the sudoku in line format, with `'.'` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                num => (num + b'0') as char,
            })
            .collect()
    }

    /// Returns the entry of the given cell, or `None` if the cell is empty.
    pub fn cell(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn set(&mut self, cell: Cell, num: u8) {
        debug_assert!(num <= 9);
        self.0[cell.as_index()] = num;
    }

    /// Returns an iterator over the cell entries in reading order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&num| Digit::new_checked(num))
    }

    /// Counts the filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks whether the digit can be placed in the cell without clashing
    /// with its row, column or block. The cell's own entry is ignored.
    ///
    /// This is a pure check, the board is not modified.
    pub fn can_place(&self, cell: Cell, digit: Digit) -> bool {
        let num = digit.get();
        cell.row()
            .cells()
            .chain(cell.col().cells())
            .chain(cell.block().cells())
            .filter(|&other| other != cell)
            .all(|other| self.0[other.as_index()] != num)
    }

    /// Checks whether the sudoku is fully and correctly solved.
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.unit_is_complete(Row(i).cells())
                && self.unit_is_complete(Col(i).cells())
                && self.unit_is_complete(Block(i).cells())
        })
    }

    // complete: each of the 9 digits occurs, which in 9 cells means exactly once
    fn unit_is_complete(&self, cells: impl Iterator<Item = Cell>) -> bool {
        let mut seen = 0u16;
        for cell in cells {
            match self.0[cell.as_index()] {
                0 => return false,
                num => seen |= 1 << (num - 1),
            }
        }
        seen == ALL_DIGITS
    }

    /// Finds a solution to the sudoku. If multiple solutions exist, an
    /// unspecified one of them is returned. Returns `None` if no solution exists.
    pub fn solve_one(self) -> Option<Self> {
        self.solve_at_most(1).into_iter().next()
    }

    /// Finds the solution to the sudoku, if it is unique.
    /// Returns `None` if no or multiple solutions exist.
    pub fn solve_unique(self) -> Option<Self> {
        let mut solutions = self.solve_at_most(2);
        match solutions.len() {
            1 => solutions.pop(),
            _ => None,
        }
    }

    /// Finds up to `limit` solutions to the sudoku. If fewer exist, all of
    /// them are returned. No ordering of solutions is promised.
    pub fn solve_at_most(self, limit: usize) -> Vec<Self> {
        SudokuSolver::from_sudoku(self).solve_at_most(limit)
    }

    /// Counts the solutions of the sudoku, stopping as soon as `limit` is
    /// reached. The search is pruned past the limit, so counting with
    /// `limit == 2` is a cheap uniqueness check even on nearly empty boards.
    pub fn count_at_most(self, limit: usize) -> usize {
        SudokuSolver::from_sudoku(self).count_at_most(limit)
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &num) in self.0.iter().enumerate() {
            let (row, col) = (index / 9, index % 9);
            match (row, col) {
                (0, 0) => (),
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // separate blocks in rows
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " ")?, // separate blocks in columns
                _ => (),
            }
            match num {
                0 => write!(f, "_")?,
                num => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}
