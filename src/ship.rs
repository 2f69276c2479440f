//! Ship definitions: orientation, standard classes and hit tracking.

use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::common::ShipError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Extends along the row, column by column.
    Horizontal,
    /// Extends down the column, row by row.
    Vertical,
}

impl Orientation {
    pub fn code(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl FromStr for Orientation {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("h") || trimmed.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if trimmed.eq_ignore_ascii_case("v") || trimmed.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(ShipError::InvalidOrientation(s.to_string()))
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = ShipError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            _ => Err(ShipError::InvalidOrientation(c.to_string())),
        }
    }
}

/// A named ship class and its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Standard class for a given length, if there is one.
    pub fn for_length(length: usize) -> Option<ShipClass> {
        crate::config::SHIP_CLASSES
            .iter()
            .copied()
            .find(|class| class.length == length)
    }
}

/// A ship with a fixed footprint and a growing set of hit cells.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    cells: Vec<Coordinate>,
    hits: BTreeSet<Coordinate>,
}

impl Ship {
    /// Build a ship starting at `origin`.
    ///
    /// Board bounds and collisions are not checked here; that happens when the
    /// ship is committed to a [`Board`](crate::Board).
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Result<Self, ShipError> {
        if length == 0 {
            return Err(ShipError::ZeroLength);
        }
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => origin.col.checked_add(i).map(|c| Coordinate::new(origin.row, c)),
                Orientation::Vertical => origin.row.checked_add(i).map(|r| Coordinate::new(r, origin.col)),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(ShipError::OutOfRange)?;
        Ok(Ship {
            origin,
            length,
            orientation,
            cells,
            hits: BTreeSet::new(),
        })
    }

    /// Build a ship from a textual orientation code such as `"H"` or `"v"`.
    pub fn from_code(origin: Coordinate, length: usize, code: &str) -> Result<Self, ShipError> {
        let orientation = code.parse::<Orientation>()?;
        Ship::new(origin, length, orientation)
    }

    /// Record a hit at `coord`. Returns `false`, leaving the ship untouched,
    /// when the coordinate is not part of this ship.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        if self.occupies(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (every cell hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.cells.len()
    }

    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// `true` when `coord` is in the 8-neighbourhood of any cell of this ship
    /// (or on the ship itself).
    pub fn touches(&self, coord: Coordinate) -> bool {
        self.cells.iter().any(|c| {
            c.row.abs_diff(coord.row) <= 1 && c.col.abs_diff(coord.col) <= 1
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, from the origin outward.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn hits(&self) -> &BTreeSet<Coordinate> {
        &self.hits
    }

    pub fn class(&self) -> Option<ShipClass> {
        ShipClass::for_length(self.length)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, orientation: {:?}, origin: {}, hits: {}/{} }}",
            self.length,
            self.orientation,
            self.origin,
            self.hits.len(),
            self.cells.len(),
        )
    }
}
