use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use maze_walkers::config::DEFAULT_HEADLESS_TICKS;
use maze_walkers::random::seeded_rng;
use maze_walkers::viewer::run_viewer;
use maze_walkers::{Cli, Simulation, SimulationConfig, save_statistics};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = SimulationConfig::from(&cli);
    config.validate().context("invalid simulation settings")?;

    let mut sim = Simulation::generate(
        config.grid_width(),
        config.grid_height(),
        config.start(),
        config.end(),
        config.agent_count,
        seeded_rng(config.rng_seed),
    )
    .context("maze generation failed")?;

    if cli.headless {
        let max_ticks = config.max_ticks.unwrap_or(DEFAULT_HEADLESS_TICKS);
        let summary = sim.run_until(max_ticks);
        info!(
            ticks = summary.ticks,
            arrived = summary.arrived,
            still_active = summary.still_active,
            "headless run finished"
        );
        print!("{}", sim.grid());
        println!(
            "{} of {} agents reached the goal in {} ticks, {} still walking",
            summary.arrived,
            config.agent_count,
            summary.ticks,
            sim.stats().agents_active()
        );
    } else {
        run_viewer(&mut sim, &config)?;
    }

    if let Err(e) = save_statistics(&config.stats_path, sim.stats()) {
        warn!(error = %e, path = %config.stats_path.display(), "could not save statistics");
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
