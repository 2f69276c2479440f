use alloc::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::common::ConfigError;
use crate::coord::MAX_LETTERS;
use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const ROUND_BUDGET: usize = 10;
pub const STORE_PATH: &str = "data/shoot_data.json";

/// Default `(length, count)` ceilings for a fleet.
pub const DEFAULT_FLEET: [(usize, usize); 5] = [(5, 1), (4, 1), (3, 2), (2, 3), (1, 5)];

pub const SHIP_CLASSES: [ShipClass; 5] = [
    ShipClass::new("Aircraft carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Cruiser", 2),
    ShipClass::new("Destroyer", 1),
];

/// Maximum number of ships allowed per length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FleetLimits(BTreeMap<usize, usize>);

impl FleetLimits {
    pub fn new(limits: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self(limits.into_iter().collect())
    }

    /// Ceiling for `length`; lengths that are not configured allow no ships.
    pub fn limit(&self, length: usize) -> usize {
        self.0.get(&length).copied().unwrap_or(0)
    }

    pub fn total_ships(&self) -> usize {
        self.0.values().sum()
    }

    /// Configured lengths, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().rev().copied()
    }

    /// `(length, count)` pairs, longest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().rev().map(|(&len, &count)| (len, count))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FleetLimits {
    fn default() -> Self {
        Self::new(DEFAULT_FLEET)
    }
}

/// Settings fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet_limits: FleetLimits,
    pub round_budget: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet_limits: FleetLimits::default(),
            round_budget: ROUND_BUDGET,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_LETTERS {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.fleet_limits.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(())
    }
}
