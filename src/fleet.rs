//! Random fleet generation.
//!
//! Placements are drawn at random and kept only if the growing batch still
//! passes [`Board::validate_batch`], so a generated fleet always satisfies the
//! same rules as a hand-placed one.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{PlacementError, Violation};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

const ATTEMPTS_PER_SHIP: usize = 100;
const FLEET_RESTARTS: usize = 50;

/// Draw a random placement of a ship of `length` that fits `board` alongside
/// the ships already in `batch`, and push it onto `batch`.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    board: &Board,
    batch: &mut Vec<Ship>,
    length: usize,
) -> Result<(), PlacementError> {
    let size = board.size();
    let no_room = || PlacementError::new(Violation::NoRoom { length }, Vec::new());
    let Some(span) = size.checked_sub(length).filter(|_| length > 0) else {
        return Err(no_room());
    };
    for _ in 0..ATTEMPTS_PER_SHIP {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (size - 1, span),
            Orientation::Vertical => (span, size - 1),
        };
        let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        let ship = Ship::new(origin, length, orientation).map_err(|_| no_room())?;
        batch.push(ship);
        if board.validate_batch(batch).is_ok() {
            return Ok(());
        }
        batch.pop();
    }
    Err(no_room())
}

/// Generate a batch that fills every remaining per-length quota of `board`,
/// longest ships first. The batch is not committed.
pub fn random_fleet<R: Rng>(rng: &mut R, board: &Board) -> Result<Vec<Ship>, PlacementError> {
    let quotas: Vec<(usize, usize)> = board
        .limits()
        .iter()
        .map(|(length, limit)| {
            let placed = board.ships().iter().filter(|s| s.length() == length).count();
            (length, limit.saturating_sub(placed))
        })
        .collect();

    let mut last_err = None;
    for attempt in 0..FLEET_RESTARTS {
        match try_fleet(rng, board, &quotas) {
            Ok(batch) => {
                debug!("random fleet of {} ships after {} restarts", batch.len(), attempt);
                return Ok(batch);
            }
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| PlacementError::new(Violation::NoRoom { length: 0 }, Vec::new())))
}

fn try_fleet<R: Rng>(
    rng: &mut R,
    board: &Board,
    quotas: &[(usize, usize)],
) -> Result<Vec<Ship>, PlacementError> {
    let mut batch = Vec::new();
    for &(length, count) in quotas {
        for _ in 0..count {
            random_placement(rng, board, &mut batch, length)?;
        }
    }
    Ok(batch)
}
