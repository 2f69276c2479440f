//! Common types for the engine: shot outcomes and the error taxonomy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coordinate;

/// Result of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// The shot struck a ship that is still afloat.
    Hit(Coordinate),
    /// The shot struck the last intact cell of a ship.
    Sunk(Coordinate),
    /// The shot struck open water.
    Miss(Coordinate),
    /// The cell had been shot before; nothing changed.
    AlreadyShot(Coordinate),
}

/// Outcome tag without the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Hit,
    Sunk,
    Miss,
    AlreadyShot,
}

impl ShotOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ShotOutcome::Hit(_) => OutcomeKind::Hit,
            ShotOutcome::Sunk(_) => OutcomeKind::Sunk,
            ShotOutcome::Miss(_) => OutcomeKind::Miss,
            ShotOutcome::AlreadyShot(_) => OutcomeKind::AlreadyShot,
        }
    }

    pub fn coord(&self) -> Coordinate {
        match *self {
            ShotOutcome::Hit(c)
            | ShotOutcome::Sunk(c)
            | ShotOutcome::Miss(c)
            | ShotOutcome::AlreadyShot(c) => c,
        }
    }

    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_) | ShotOutcome::Sunk(_))
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit(c) => write!(f, "Hit({})", c),
            ShotOutcome::Sunk(c) => write!(f, "Sunk({})", c),
            ShotOutcome::Miss(c) => write!(f, "Miss({})", c),
            ShotOutcome::AlreadyShot(c) => write!(f, "Already shot here ({})", c),
        }
    }
}

/// Errors raised while building a ship.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShipError {
    #[error("invalid orientation '{0}': must be 'H' (horizontal) or 'V' (vertical)")]
    InvalidOrientation(String),
    #[error("ship length must be at least 1")]
    ZeroLength,
    #[error("ship extends past the largest addressable coordinate")]
    OutOfRange,
}

/// Errors raised when translating letter+number notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("row letter '{letter}' is outside A..{} for a board of size {size}", last_letter(.size))]
    InvalidLetter { letter: char, size: usize },
    #[error("column number {number} is outside 1..={size}")]
    InvalidNumber { number: usize, size: usize },
    #[error("malformed coordinate '{0}': expected a letter followed by a number, e.g. A1")]
    Malformed(String),
}

fn last_letter(size: &usize) -> char {
    match *size {
        0 => 'A',
        n if n <= crate::coord::MAX_LETTERS => (b'A' + (n - 1) as u8) as char,
        _ => 'Z',
    }
}

/// Why a batch of ships was refused by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Committing the batch would exceed the configured count for a length.
    TooManyShips { length: usize, limit: usize, requested: usize },
    /// A ship cell lies outside the board.
    OutOfBounds,
    /// Two ships of the batch share a cell.
    OverlapsIncoming,
    /// A ship of the batch shares a cell with a ship already on the board.
    OverlapsExisting,
    /// Two ships of the batch touch, diagonals included.
    TooCloseToIncoming,
    /// A ship of the batch touches a ship already on the board.
    TooCloseToExisting,
    /// Random placement ran out of attempts.
    NoRoom { length: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TooManyShips { length, limit, requested } => write!(
                f,
                "too many ships of length {}: {} requested, limit {}",
                length, requested, limit
            ),
            Violation::OutOfBounds => write!(f, "ship leaves the board"),
            Violation::OverlapsIncoming => write!(f, "new ships overlap each other"),
            Violation::OverlapsExisting => write!(f, "new ship overlaps a placed ship"),
            Violation::TooCloseToIncoming => write!(f, "new ships are too close to each other"),
            Violation::TooCloseToExisting => write!(f, "new ship is too close to a placed ship"),
            Violation::NoRoom { length } => write!(f, "no room left for a ship of length {}", length),
        }
    }
}

/// A rejected placement batch. The board is unchanged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("placement rejected: {violation} at {}", format_cells(.cells))]
pub struct PlacementError {
    pub violation: Violation,
    /// Offending cells: the ship cell first, then the conflicting cell if any.
    pub cells: Vec<Coordinate>,
}

impl PlacementError {
    pub fn new(violation: Violation, cells: Vec<Coordinate>) -> Self {
        Self { violation, cells }
    }
}

fn format_cells(cells: &[Coordinate]) -> String {
    use core::fmt::Write;
    let mut out = String::new();
    for (i, c) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", c);
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside 1..=26")]
    BoardSize(usize),
    #[error("fleet limits are empty")]
    EmptyFleet,
}
