//! Board coordinates and the letter+number notation used at the human boundary.
//!
//! Internally every position is a `(row, col)` pair. Rows are named by letters
//! (`A` is row 0) and columns by 1-based numbers, so `"B7"` is row 1, column 6.

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::common::CoordinateError;

/// Largest board that still has one letter per row.
pub const MAX_LETTERS: usize = 26;

/// A cell on the board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate for a linear cursor position (`row * size + col`).
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Linear cursor position of this coordinate on a `size`×`size` board.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The up to eight cells surrounding this one. Cells that would fall below
    /// row or column 0 are left out; the upper bound is the caller's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { row, col } = self;
        (-1isize..=1)
            .flat_map(move |dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                Some(Coordinate::new(r, c))
            })
    }

    /// Letter naming this coordinate's row, if the row fits in the alphabet.
    pub fn row_letter(self) -> Option<char> {
        if self.row < MAX_LETTERS {
            Some((b'A' + self.row as u8) as char)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row_letter() {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Convert a row letter and 1-based column number into a [`Coordinate`].
///
/// The letter is case-insensitive and must be one of the first `size` letters
/// of the alphabet; the number must lie in `1..=size`.
pub fn from_letter_number(letter: char, number: usize, size: usize) -> Result<Coordinate, CoordinateError> {
    let upper = letter.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return Err(CoordinateError::InvalidLetter { letter, size });
    }
    let row = (upper as u8 - b'A') as usize;
    if row >= size {
        return Err(CoordinateError::InvalidLetter { letter, size });
    }
    if number == 0 || number > size {
        return Err(CoordinateError::InvalidNumber { number, size });
    }
    Ok(Coordinate::new(row, number - 1))
}

/// Parse a coordinate written as `"A1"`, `"c10"` or `" J 3 "`.
pub fn parse_coordinate(input: &str, size: usize) -> Result<Coordinate, CoordinateError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = compact.chars();
    let letter = chars
        .next()
        .ok_or_else(|| CoordinateError::Malformed(String::from(input)))?;
    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(CoordinateError::Malformed(String::from(input)));
    }
    let number = digits
        .parse::<usize>()
        .map_err(|_| CoordinateError::Malformed(String::from(input)))?;
    from_letter_number(letter, number, size)
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses against the default 10×10 board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s, crate::config::BOARD_SIZE)
    }
}
