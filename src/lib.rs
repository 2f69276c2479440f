#![cfg_attr(not(feature = "std"), no_std)]
//! Turn-based grid combat engine: ship placement with spacing rules, shot
//! resolution, a deterministic stride-based shooter and post-game statistics.

extern crate alloc;

mod board;
mod common;
mod config;
pub mod coord;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
pub mod shooter;
pub mod statistics;
#[cfg(feature = "std")]
pub mod store;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::{from_letter_number, parse_coordinate, Coordinate};
pub use fleet::random_fleet;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
pub use shooter::{stride, Shooter, SweepReport, SweepState, SweepStatus};
pub use statistics::{aggregate, summarize, HistoryReport, StatisticsSummary};
#[cfg(feature = "std")]
pub use store::{PersistenceError, SummaryStore};
