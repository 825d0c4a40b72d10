//! Serde support for [`Sudoku`] and [`Difficulty`].
//!
//! A sudoku serializes as its line format in human readable formats and as
//! its 81 raw bytes otherwise. A difficulty serializes as its lowercase
//! name and deserializes with the same fallback as
//! [`Difficulty::from_name`], so stored session data can never fail to
//! load over an unknown difficulty.

use std::fmt;

use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Difficulty, Sudoku};

impl Serialize for Sudoku {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_str_line())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

struct SudokuVisitor;

impl<'de> Visitor<'de> for SudokuVisitor {
    type Value = Sudoku;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sudoku in line format or as 81 bytes")
    }

    fn visit_str<E: Error>(self, line: &str) -> Result<Sudoku, E> {
        Sudoku::from_str_line(line).map_err(E::custom)
    }

    fn visit_bytes<E: Error>(self, bytes: &[u8]) -> Result<Sudoku, E> {
        Sudoku::from_bytes_slice(bytes).map_err(E::custom)
    }

    // some binary formats hand out byte arrays as sequences
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Sudoku, A::Error> {
        let mut bytes = Vec::with_capacity(81);
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        Sudoku::from_bytes_slice(&bytes).map_err(A::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Sudoku {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(SudokuVisitor)
        } else {
            deserializer.deserialize_bytes(SudokuVisitor)
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct DifficultyVisitor;

impl<'de> Visitor<'de> for DifficultyVisitor {
    type Value = Difficulty;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a difficulty name")
    }

    fn visit_str<E: Error>(self, name: &str) -> Result<Difficulty, E> {
        Ok(Difficulty::from_name(name))
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DifficultyVisitor)
    }
}
