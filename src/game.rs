use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, ShipId},
    common::{ConfigError, CoordinateError, PlacementError, ShotOutcome},
    config::GameConfig,
    coord::{parse_coordinate, Coordinate},
    ship::Ship,
    shooter::{Shooter, SweepReport, SweepStatus},
    statistics::{summarize, StatisticsSummary},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No ships committed yet.
    Setup,
    InProgress,
    /// Every ship is sunk.
    Won,
    /// The last automatic sweep ran out of rounds.
    RoundLimitReached,
}

/// One game: configuration, the board behind its shooter, and the
/// bookkeeping needed to report on it.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    shooter: Shooter,
    round_limited: bool,
}

impl GameEngine {
    /// Create a game with an empty board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::from_config(&config);
        Ok(Self {
            config,
            shooter: Shooter::new(board),
            round_limited: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        self.shooter.board()
    }

    pub fn shooter(&self) -> &Shooter {
        &self.shooter
    }

    /// Commit a batch of ships. The board is untouched on error.
    pub fn setup(&mut self, ships: Vec<Ship>) -> Result<Vec<ShipId>, PlacementError> {
        self.shooter.board_mut().add_all(ships)
    }

    /// Fire a manual shot.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        self.shooter.shoot(coord)
    }

    /// Fire a manual shot given in letter+number form, e.g. `"C4"`.
    pub fn shoot_at(&mut self, notation: &str) -> Result<ShotOutcome, CoordinateError> {
        let coord = parse_coordinate(notation, self.config.board_size)?;
        Ok(self.shoot(coord))
    }

    /// Let the shooter sweep the board with the configured round budget.
    pub fn auto_play(&mut self) -> SweepReport {
        let report = self.shooter.auto_shoot_all(self.config.round_budget);
        self.round_limited = report.status == SweepStatus::RoundLimitReached;
        report
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        let board = self.shooter.board();
        if board.ships().is_empty() {
            GameStatus::Setup
        } else if board.all_sunk() {
            GameStatus::Won
        } else if self.round_limited {
            GameStatus::RoundLimitReached
        } else {
            GameStatus::InProgress
        }
    }

    pub fn summary(&self) -> StatisticsSummary {
        summarize(self.shooter.outcomes())
    }

    /// Append this game's summary to `store`. A failure here leaves the game
    /// and its summary intact.
    #[cfg(feature = "std")]
    pub fn record(
        &self,
        store: &crate::store::SummaryStore,
    ) -> Result<StatisticsSummary, crate::store::PersistenceError> {
        let summary = self.summary();
        let count = store.append(&summary)?;
        log::info!("recorded game {} in {}", count, store.path().display());
        Ok(summary)
    }
}
