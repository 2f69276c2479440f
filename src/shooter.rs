//! Deterministic stride-based targeting.
//!
//! The shooter walks a linear cursor (`row * size + col`) over the board and,
//! after each shot, advances it by a stride chosen from the outcome: wide
//! steps while probing open water, single steps once a ship has been found.
//! One pass does not necessarily cover every cell, so [`Shooter::auto_shoot_all`]
//! wraps the cursor and sweeps again until the fleet is sunk or the round
//! budget runs out.

use alloc::vec::Vec;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{OutcomeKind, ShotOutcome};
use crate::coord::Coordinate;

pub const MISS_STRIDE: usize = 5;
pub const HIT_STRIDE: usize = 1;
pub const SUNK_SINGLE_STRIDE: usize = 2;
pub const SUNK_STRIDE: usize = 1;
pub const ALREADY_SHOT_STRIDE: usize = 1;

/// Cursor advance after a shot with the given outcome. `sunk_length` is the
/// length of the ship the shot sank, when it sank one.
pub fn stride(kind: OutcomeKind, sunk_length: Option<usize>) -> usize {
    match (kind, sunk_length) {
        (OutcomeKind::Miss, _) => MISS_STRIDE,
        (OutcomeKind::Hit, _) => HIT_STRIDE,
        // A one-cell ship has water on both sides.
        (OutcomeKind::Sunk, Some(1)) => SUNK_SINGLE_STRIDE,
        (OutcomeKind::Sunk, _) => SUNK_STRIDE,
        (OutcomeKind::AlreadyShot, _) => ALREADY_SHOT_STRIDE,
    }
}

/// Where the cursor stands within the current sweep. The cursor never
/// exceeds `size * size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepState {
    Scanning,
    Exhausted,
}

/// How an automatic sweep ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepStatus {
    /// Every ship on the board is sunk.
    AllSunk,
    /// The round budget ran out first; the log holds the shots made so far.
    RoundLimitReached,
}

/// Result of [`Shooter::auto_shoot_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub status: SweepStatus,
    /// Completed sweeps (cursor wraps) during this call.
    pub rounds: usize,
    /// Full outcome log of the shooter, including earlier shots.
    pub outcomes: Vec<ShotOutcome>,
}

/// Stateful targeting controller with exclusive ownership of one board.
#[derive(Debug, Clone)]
pub struct Shooter {
    board: Board,
    cursor: usize,
    log: Vec<ShotOutcome>,
}

impl Shooter {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cursor: 0,
            log: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Give the board back, ending the game.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ordered log of every outcome produced so far.
    pub fn outcomes(&self) -> &[ShotOutcome] {
        &self.log
    }

    fn cells(&self) -> usize {
        self.board.size() * self.board.size()
    }

    pub fn state(&self) -> SweepState {
        if self.cursor < self.cells() {
            SweepState::Scanning
        } else {
            SweepState::Exhausted
        }
    }

    /// Fire a manual shot at `coord` and log it. The cursor does not move.
    pub fn shoot(&mut self, coord: Coordinate) -> ShotOutcome {
        let outcome = self.board.shoot(coord);
        self.log.push(outcome);
        outcome
    }

    /// Fire at the next unshot cell at or after the cursor, then advance the
    /// cursor by the stride for the outcome. Returns `None` once the cursor
    /// has run off the end of the board.
    pub fn auto_shoot_next(&mut self) -> Option<ShotOutcome> {
        let size = self.board.size();
        let cells = self.cells();
        while self.cursor < cells && self.board.is_shot(Coordinate::from_index(self.cursor, size)) {
            self.cursor += 1;
        }
        if self.cursor >= cells {
            return None;
        }

        let coord = Coordinate::from_index(self.cursor, size);
        let outcome = self.shoot(coord);
        let sunk_length = match outcome {
            ShotOutcome::Sunk(c) => self.board.ship_at(c).map(|(_, ship)| ship.length()),
            _ => None,
        };
        let step = stride(outcome.kind(), sunk_length);
        debug!("cursor {} -> {:?}, stride {}", self.cursor, outcome.kind(), step);
        self.cursor = (self.cursor + step).min(cells);
        Some(outcome)
    }

    /// Keep sweeping until every ship is sunk or `round_budget` sweeps have
    /// wrapped. Running out of rounds is reported in the status, not as an
    /// error.
    pub fn auto_shoot_all(&mut self, round_budget: usize) -> SweepReport {
        let fired_before = self.log.len();
        let mut rounds = 0;
        let status = loop {
            if self.board.all_sunk() {
                break SweepStatus::AllSunk;
            }
            if rounds >= round_budget {
                break SweepStatus::RoundLimitReached;
            }
            if self.auto_shoot_next().is_none() {
                self.cursor = 0;
                rounds += 1;
            }
        };

        let fired = self.log.len() - fired_before;
        match status {
            SweepStatus::AllSunk => info!("fleet sunk after {} shots ({} rounds wrapped)", fired, rounds),
            SweepStatus::RoundLimitReached => warn!(
                "round limit {} reached with {} ships afloat after {} shots",
                round_budget,
                self.board.remaining_ships(),
                fired
            ),
        }
        SweepReport {
            status,
            rounds,
            outcomes: self.log.clone(),
        }
    }
}
