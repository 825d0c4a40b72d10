//! Types for cells, digits and other things on a sudoku board
mod digit;
mod positions;
mod sudoku;

pub(crate) use self::positions::{Block, Col, Row};

pub use self::{digit::Digit, positions::Cell, sudoku::Sudoku};
