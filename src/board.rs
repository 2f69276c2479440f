//! Game board: owned ships, placement rules and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::common::{PlacementError, ShotOutcome, Violation};
use crate::config::{FleetLimits, GameConfig, BOARD_SIZE};
use crate::coord::Coordinate;
use crate::ship::Ship;

/// Stable handle to a ship owned by a [`Board`]; an index into its ship list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShipId(pub usize);

/// Main board state: ship placements and every cell shot so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    limits: FleetLimits,
    ships: Vec<Ship>,
    shots: BTreeSet<Coordinate>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE, FleetLimits::default())
    }
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed, no shots).
    pub fn new(size: usize, limits: FleetLimits) -> Self {
        Board {
            size,
            limits,
            ships: Vec::new(),
            shots: BTreeSet::new(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Board::new(config.board_size, config.fleet_limits.clone())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn limits(&self) -> &FleetLimits {
        &self.limits
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<(ShipId, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.occupies(coord))
            .map(|(i, ship)| (ShipId(i), ship))
    }

    pub fn shots(&self) -> &BTreeSet<Coordinate> {
        &self.shots
    }

    pub fn is_shot(&self, coord: Coordinate) -> bool {
        self.shots.contains(&coord)
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when every ship is sunk.
    ///
    /// A board with no ships reports `true` as well, so this must not be used
    /// to decide whether a game has been set up.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Check a batch of new ships against the board without changing it.
    ///
    /// Checks run in a fixed order and the first violation wins: per-length
    /// counts, bounds, overlap within the batch, overlap with placed ships,
    /// then the one-cell buffer around every ship (diagonals included).
    pub fn validate_batch(&self, incoming: &[Ship]) -> Result<(), PlacementError> {
        self.check_counts(incoming)?;
        self.check_bounds(incoming)?;
        Self::check_batch_overlap(incoming)?;
        self.check_existing_overlap(incoming)?;
        self.check_spacing(incoming)
    }

    /// Validate and commit a batch of ships. Either every ship is added or,
    /// on error, the board is left exactly as it was.
    pub fn add_all(&mut self, incoming: Vec<Ship>) -> Result<Vec<ShipId>, PlacementError> {
        if let Err(err) = self.validate_batch(&incoming) {
            warn!("rejected batch of {} ships: {}", incoming.len(), err);
            return Err(err);
        }
        let start = self.ships.len();
        self.ships.extend(incoming);
        let ids: Vec<ShipId> = (start..self.ships.len()).map(ShipId).collect();
        info!("committed {} ships, {} on board", ids.len(), self.ships.len());
        Ok(ids)
    }

    /// Fire at `coord` and report what happened.
    ///
    /// A repeated shot is reported as [`ShotOutcome::AlreadyShot`] without
    /// touching any ship. Shots outside the board are misses and are not
    /// recorded.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        if !coord.in_bounds(self.size) {
            warn!("shot at {:?} is outside the {}x{} board", coord, self.size, self.size);
            return ShotOutcome::Miss(coord);
        }
        if !self.shots.insert(coord) {
            debug!("{} already shot", coord);
            return ShotOutcome::AlreadyShot(coord);
        }
        // Ships never overlap, so at most one can claim the cell.
        let outcome = self
            .ships
            .iter_mut()
            .find_map(|ship| {
                if ship.register_hit(coord) {
                    Some(if ship.is_sunk() {
                        ShotOutcome::Sunk(coord)
                    } else {
                        ShotOutcome::Hit(coord)
                    })
                } else {
                    None
                }
            })
            .unwrap_or(ShotOutcome::Miss(coord));
        debug!("shot {} -> {:?}", coord, outcome.kind());
        outcome
    }

    fn check_counts(&self, incoming: &[Ship]) -> Result<(), PlacementError> {
        for ship in incoming {
            let length = ship.length();
            let existing = self.ships.iter().filter(|s| s.length() == length).count();
            let added = incoming.iter().filter(|s| s.length() == length).count();
            let limit = self.limits.limit(length);
            if existing + added > limit {
                return Err(PlacementError::new(
                    Violation::TooManyShips {
                        length,
                        limit,
                        requested: existing + added,
                    },
                    ship.cells().to_vec(),
                ));
            }
        }
        Ok(())
    }

    fn check_bounds(&self, incoming: &[Ship]) -> Result<(), PlacementError> {
        for ship in incoming {
            if let Some(&cell) = ship.cells().iter().find(|c| !c.in_bounds(self.size)) {
                return Err(PlacementError::new(Violation::OutOfBounds, vec![cell]));
            }
        }
        Ok(())
    }

    fn check_batch_overlap(incoming: &[Ship]) -> Result<(), PlacementError> {
        for (i, ship) in incoming.iter().enumerate() {
            for &cell in ship.cells() {
                if incoming[..i].iter().any(|other| other.occupies(cell)) {
                    return Err(PlacementError::new(Violation::OverlapsIncoming, vec![cell]));
                }
            }
        }
        Ok(())
    }

    fn check_existing_overlap(&self, incoming: &[Ship]) -> Result<(), PlacementError> {
        for ship in incoming {
            for &cell in ship.cells() {
                if self.ships.iter().any(|placed| placed.occupies(cell)) {
                    return Err(PlacementError::new(Violation::OverlapsExisting, vec![cell]));
                }
            }
        }
        Ok(())
    }

    fn check_spacing(&self, incoming: &[Ship]) -> Result<(), PlacementError> {
        for (i, ship) in incoming.iter().enumerate() {
            for &cell in ship.cells() {
                for near in cell.neighbors().filter(|n| n.in_bounds(self.size)) {
                    if self.ships.iter().any(|placed| placed.occupies(near)) {
                        return Err(PlacementError::new(
                            Violation::TooCloseToExisting,
                            vec![cell, near],
                        ));
                    }
                    let crowded = incoming
                        .iter()
                        .enumerate()
                        .any(|(j, other)| j != i && other.occupies(near));
                    if crowded {
                        return Err(PlacementError::new(
                            Violation::TooCloseToIncoming,
                            vec![cell, near],
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
