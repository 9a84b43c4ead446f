use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::grid::Node;
use crate::maze::validate_layout;

/// Tick cap used by headless runs when none is given.
pub const DEFAULT_HEADLESS_TICKS: u64 = 10_000;

/// Static configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Viewer width in pixels.
    pub window_width: usize,
    /// Viewer height in pixels.
    pub window_height: usize,
    /// Pixels per grid cell; grid dimensions are the window divided by this.
    pub cell_size: usize,
    pub agent_count: usize,
    /// Radius of the agent marker in pixels.
    pub agent_radius: usize,
    /// Initial simulation speed.
    pub ticks_per_sec: u32,
    /// Optional RNG seed for reproducible mazes and walks.
    pub rng_seed: Option<u64>,
    /// Stop after this many ticks even if agents are still walking.
    pub max_ticks: Option<u64>,
    pub stats_path: PathBuf,
    pub show_trails: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cell_size: 20,
            agent_count: 5,
            agent_radius: 8,
            ticks_per_sec: 10,
            rng_seed: None,
            max_ticks: None,
            stats_path: PathBuf::from("stats.csv"),
            show_trails: false,
        }
    }
}

impl SimulationConfig {
    pub fn grid_width(&self) -> usize {
        self.window_width / self.cell_size
    }

    pub fn grid_height(&self) -> usize {
        self.window_height / self.cell_size
    }

    /// Top-left cell.
    pub fn start(&self) -> Node {
        Node::new(0, 0)
    }

    /// Bottom-right cell. Only meaningful once `validate` has passed.
    pub fn end(&self) -> Node {
        Node::new(self.grid_width() as i32 - 1, self.grid_height() as i32 - 1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be non-zero"));
        }
        if i32::try_from(self.grid_width()).is_err() || i32::try_from(self.grid_height()).is_err()
        {
            return Err(ConfigError::Invalid("grid dimensions must fit in i32"));
        }
        if self.agent_count == 0 {
            return Err(ConfigError::Invalid("agent_count must be non-zero"));
        }
        if self.ticks_per_sec == 0 {
            return Err(ConfigError::Invalid("ticks_per_sec must be non-zero"));
        }
        if self.agent_radius > self.cell_size {
            return Err(ConfigError::Invalid("agent_radius cannot exceed cell_size"));
        }
        validate_layout(self.grid_width(), self.grid_height(), self.start(), self.end())?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "maze_walkers",
    version,
    about = "Random walkers loose in a recursive-division maze"
)]
pub struct Cli {
    /// Window width in pixels.
    #[arg(long, env = "MAZE_WINDOW_WIDTH", default_value_t = 800)]
    pub window_width: usize,

    /// Window height in pixels.
    #[arg(long, env = "MAZE_WINDOW_HEIGHT", default_value_t = 600)]
    pub window_height: usize,

    /// Pixels per maze cell.
    #[arg(long, env = "MAZE_CELL_SIZE", default_value_t = 20)]
    pub cell_size: usize,

    /// Number of agents released at the start cell.
    #[arg(short, long, env = "MAZE_AGENTS", default_value_t = 5)]
    pub agents: usize,

    /// Agent marker radius in pixels.
    #[arg(long, env = "MAZE_AGENT_RADIUS", default_value_t = 8)]
    pub agent_radius: usize,

    /// Initial speed in ticks per second (+/- adjust it in the viewer).
    #[arg(long, env = "MAZE_TICKS_PER_SEC", default_value_t = 10)]
    pub ticks_per_sec: u32,

    /// Seed for a reproducible run.
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Stop after this many ticks.
    #[arg(long, env = "MAZE_MAX_TICKS")]
    pub max_ticks: Option<u64>,

    /// CSV file run statistics are appended to.
    #[arg(long, env = "MAZE_STATS_PATH", default_value = "stats.csv")]
    pub stats_path: PathBuf,

    /// Draw each agent's path.
    #[arg(long)]
    pub trails: bool,

    /// Run without a window and print the result.
    #[arg(long)]
    pub headless: bool,
}

impl From<&Cli> for SimulationConfig {
    fn from(cli: &Cli) -> Self {
        SimulationConfig {
            window_width: cli.window_width,
            window_height: cli.window_height,
            cell_size: cli.cell_size,
            agent_count: cli.agents,
            agent_radius: cli.agent_radius,
            ticks_per_sec: cli.ticks_per_sec,
            rng_seed: cli.seed,
            max_ticks: cli.max_ticks,
            stats_path: cli.stats_path.clone(),
            show_trails: cli.trails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn defaults_give_forty_by_thirty_grid() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid_width(), 40);
        assert_eq!(config.grid_height(), 30);
        assert_eq!(config.end(), Node::new(39, 29));
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn rejects_zero_cell_size() {
        let config = SimulationConfig {
            cell_size: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_grid_smaller_than_three_cells() {
        let config = SimulationConfig {
            window_width: 50,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Maze(MazeError::InvalidDimensions {
                width: 2,
                height: 30
            }))
        ));
    }

    #[test]
    fn rejects_grid_wider_than_i32() {
        let config = SimulationConfig {
            window_width: 1 << 31,
            window_height: 10,
            cell_size: 1,
            agent_radius: 1,
            ..SimulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SimulationConfig {
            window_width: 10,
            window_height: usize::MAX,
            ..config
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn cli_maps_onto_config() {
        let cli = Cli::try_parse_from([
            "maze_walkers",
            "--agents",
            "12",
            "--seed",
            "7",
            "--cell-size",
            "10",
            "--trails",
            "--headless",
        ])
        .expect("valid arguments");
        assert!(cli.headless);

        let config = SimulationConfig::from(&cli);
        assert_eq!(config.agent_count, 12);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.grid_width(), 80);
        assert!(config.show_trails);
        assert_eq!(config.stats_path, PathBuf::from("stats.csv"));
    }
}
