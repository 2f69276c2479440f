//! Post-game statistics over a shooter's outcome log.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::common::ShotOutcome;

/// Summary counts and percentages for one game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// 1-based position of the first `Hit` or `Sunk`, if any.
    pub first_hit_shot: Option<usize>,
    pub total_shots: usize,
    /// `Hit` plus `Sunk` outcomes.
    pub hits: usize,
    pub misses: usize,
    /// Ships sunk.
    pub ships: usize,
    /// Repeated shots.
    pub already: usize,
    pub hit_percentage: f64,
    pub miss_percentage: f64,
}

/// Summarize an ordered outcome log.
///
/// Percentages are taken over the shots that were not repeats and rounded to
/// two decimals; with no such shots both are zero.
pub fn summarize(outcomes: &[ShotOutcome]) -> StatisticsSummary {
    let mut summary = StatisticsSummary {
        first_hit_shot: None,
        total_shots: outcomes.len(),
        hits: 0,
        misses: 0,
        ships: 0,
        already: 0,
        hit_percentage: 0.0,
        miss_percentage: 0.0,
    };

    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            ShotOutcome::Hit(_) => summary.hits += 1,
            ShotOutcome::Sunk(_) => {
                summary.hits += 1;
                summary.ships += 1;
            }
            ShotOutcome::Miss(_) => summary.misses += 1,
            ShotOutcome::AlreadyShot(_) => summary.already += 1,
        }
        if summary.first_hit_shot.is_none() && outcome.is_hit() {
            summary.first_hit_shot = Some(i + 1);
        }
    }

    let actual = summary.total_shots - summary.already;
    summary.hit_percentage = percentage(summary.hits, actual);
    summary.miss_percentage = percentage(summary.misses, actual);
    summary
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:=<40}", "")?;
        writeln!(f, "SHOT STATISTICS")?;
        writeln!(f, "{:=<40}", "")?;
        match self.first_hit_shot {
            Some(n) => writeln!(f, "First hit:          shot {}", n)?,
            None => writeln!(f, "First hit:          none")?,
        }
        writeln!(f, "Total shots:        {}", self.total_shots)?;
        writeln!(f, "Hits (hit + sunk):  {}", self.hits)?;
        writeln!(f, "Ships sunk:         {}", self.ships)?;
        writeln!(f, "Misses:             {}", self.misses)?;
        writeln!(f, "Already shot:       {}", self.already)?;
        writeln!(f, "Hit %:              {:.2}", self.hit_percentage)?;
        writeln!(f, "Miss %:             {:.2}", self.miss_percentage)?;
        write!(f, "{:=<40}", "")
    }
}

/// Aggregate over many stored game summaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub games: usize,
    pub average_shots: f64,
    pub average_hit_percentage: f64,
    /// Fewest shots any game needed.
    pub best_shots: Option<usize>,
    /// Most shots any game needed.
    pub worst_shots: Option<usize>,
}

pub fn aggregate(summaries: &[StatisticsSummary]) -> HistoryReport {
    let games = summaries.len();
    let (average_shots, average_hit_percentage) = if games == 0 {
        (0.0, 0.0)
    } else {
        let shots: usize = summaries.iter().map(|s| s.total_shots).sum();
        let hit_pct: f64 = summaries.iter().map(|s| s.hit_percentage).sum();
        (
            round2(shots as f64 / games as f64),
            round2(hit_pct / games as f64),
        )
    };
    HistoryReport {
        games,
        average_shots,
        average_hit_percentage,
        best_shots: summaries.iter().map(|s| s.total_shots).min(),
        worst_shots: summaries.iter().map(|s| s.total_shots).max(),
    }
}

impl fmt::Display for HistoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games recorded:     {}", self.games)?;
        writeln!(f, "Average shots:      {:.2}", self.average_shots)?;
        writeln!(f, "Average hit %:      {:.2}", self.average_hit_percentage)?;
        if let (Some(best), Some(worst)) = (self.best_shots, self.worst_shots) {
            write!(f, "Best / worst game:  {} / {} shots", best, worst)?;
        }
        Ok(())
    }
}
