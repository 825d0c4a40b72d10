//! Errors that can occur when constructing a [`Sudoku`](crate::Sudoku)

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes)
#[derive(Debug, thiserror::Error)]
#[error("cell entries must be in the range 0..=9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Sudoku::from_bytes_slice`](crate::Sudoku::from_bytes_slice)
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice does not contain one byte per cell
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains an entry outside of `0..=9`
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}

/// Error for [`Sudoku::from_str_line`](crate::Sudoku::from_str_line)
#[derive(Debug, thiserror::Error)]
pub enum LineParseError {
    /// Line does not contain one character per cell
    #[error("line should contain 81 cell characters, found {0}")]
    WrongLength(usize),
    /// Line contains a character that denotes neither a digit nor an empty cell
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter {
        /// Offset of the offending character in the line
        pos: usize,
        /// The offending character
        ch: char,
    },
}
