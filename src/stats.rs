use chrono::prelude::*;
use csv::Writer;
use std::fs::OpenOptions;
use std::path::Path;

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// Statistics & CSV logging
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub grid_width: usize,
    pub grid_height: usize,
    pub open_cells: usize,
    pub agents_spawned: usize,
    pub agents_arrived: usize,
    pub ticks: u64,
    pub total_moves: usize,
    pub total_stalls: usize,
    pub first_arrival_tick: Option<u64>,
    pub last_arrival_tick: Option<u64>,
}

impl RunStatistics {
    pub fn new(grid_width: usize, grid_height: usize, open_cells: usize) -> Self {
        RunStatistics {
            grid_width,
            grid_height,
            open_cells,
            ..RunStatistics::default()
        }
    }

    pub fn record_arrival(&mut self, tick: u64) {
        self.agents_arrived += 1;
        self.first_arrival_tick.get_or_insert(tick);
        self.last_arrival_tick = Some(tick);
    }

    pub fn agents_active(&self) -> usize {
        self.agents_spawned - self.agents_arrived
    }
}

const HEADER: [&str; 11] = [
    "timestamp",
    "grid_width",
    "grid_height",
    "open_cells",
    "agents_spawned",
    "agents_arrived",
    "ticks",
    "total_moves",
    "total_stalls",
    "first_arrival_tick",
    "last_arrival_tick",
];

fn optional(tick: Option<u64>) -> String {
    tick.map(|t| t.to_string()).unwrap_or_default()
}

/// Appends one row to `path`, writing the header first if the file is new.
pub fn save_statistics(path: &Path, stats: &RunStatistics) -> Result<(), StatsError> {
    let file_exists = path.exists();
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut wtr = Writer::from_writer(file);

    if !file_exists {
        wtr.write_record(HEADER)?;
    }

    wtr.write_record(&[
        Local::now().to_rfc3339(),
        stats.grid_width.to_string(),
        stats.grid_height.to_string(),
        stats.open_cells.to_string(),
        stats.agents_spawned.to_string(),
        stats.agents_arrived.to_string(),
        stats.ticks.to_string(),
        stats.total_moves.to_string(),
        stats.total_stalls.to_string(),
        optional(stats.first_arrival_tick),
        optional(stats.last_arrival_tick),
    ])?;

    wtr.flush()?;
    Ok(())
}
