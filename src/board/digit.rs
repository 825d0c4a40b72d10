use std::num::NonZeroU8;

use crate::consts::N_DIGITS;

// stored as NonZeroU8 so Option<Digit> stays 1 byte
/// A digit that can be entered into a cell of the board.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > N_DIGITS {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=N_DIGITS).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as a `usize` in `0..9`, i.e. `digit - 1`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}
