use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::random::RandomSource;
use crate::render::{Frame, SceneParams, render_scene};
use crate::simulation::Simulation;
use crate::stats::save_statistics;

const TITLE: &str = "Maze walkers";

/// Ticks per second, adjusted with `+` / `-`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Speed(u32);

impl Speed {
    pub fn new(ticks_per_sec: u32) -> Self {
        Speed(ticks_per_sec.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn faster(self) -> Self {
        Speed(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Speed::new(self.0.saturating_sub(1))
    }

    pub fn interval(self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.0))
    }
}

/// Opens a window and runs `sim` until the window closes or Escape is hit.
///
/// Keys: `+`/`=` faster, `-` slower, `T` trails, `R` new maze.
pub fn run_viewer<R: RandomSource>(
    sim: &mut Simulation<R>,
    config: &SimulationConfig,
) -> Result<()> {
    let (width, height) = (config.window_width, config.window_height);
    let mut window = Window::new(TITLE, width, height, WindowOptions::default())
        .map_err(|e| anyhow!("window creation failed: {e:?}"))?;
    window.set_target_fps(60);

    let mut frame = Frame::new(width, height, config.cell_size);
    let mut speed = Speed::new(config.ticks_per_sec);
    let mut show_trails = config.show_trails;
    let mut last_tick = Instant::now();
    let mut reported_finish = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Equal, KeyRepeat::Yes)
            || window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes)
        {
            speed = speed.faster();
            debug!(ticks_per_sec = speed.get(), "speed up");
        }
        if window.is_key_pressed(Key::Minus, KeyRepeat::Yes)
            || window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes)
        {
            speed = speed.slower();
            debug!(ticks_per_sec = speed.get(), "slow down");
        }
        if window.is_key_pressed(Key::T, KeyRepeat::No) {
            show_trails = !show_trails;
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            if let Err(e) = save_statistics(&config.stats_path, sim.stats()) {
                warn!(error = %e, "could not save statistics");
            }
            sim.regenerate()?;
            reported_finish = false;
            info!("maze regenerated");
        }

        let under_cap = config.max_ticks.is_none_or(|cap| sim.tick_count() < cap);
        if !sim.is_finished() && under_cap && last_tick.elapsed() >= speed.interval() {
            sim.tick();
            last_tick = Instant::now();
        }
        if sim.is_finished() && !reported_finish {
            info!(ticks = sim.tick_count(), "all agents reached the goal");
            reported_finish = true;
        }

        render_scene(
            &mut frame,
            &SceneParams {
                grid: sim.grid(),
                start: sim.start(),
                end: sim.end(),
                agents: sim.agents(),
                agent_radius: config.agent_radius,
                show_trails,
            },
        );
        window.set_title(&format!(
            "{TITLE} | tick {} | {} walking | {} ticks/s",
            sim.tick_count(),
            sim.agents().len(),
            speed.get()
        ));
        window
            .update_with_buffer(frame.buffer(), frame.width(), frame.height())
            .map_err(|e| anyhow!("frame update failed: {e:?}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_never_drops_below_one() {
        let speed = Speed::new(2).slower().slower().slower();
        assert_eq!(speed.get(), 1);
        assert_eq!(Speed::new(0).get(), 1);
    }

    #[test]
    fn interval_follows_speed() {
        assert_eq!(Speed::new(10).interval(), Duration::from_millis(100));
        assert_eq!(Speed::new(10).faster().get(), 11);
        assert_eq!(Speed::new(1).interval(), Duration::from_secs(1));
    }
}
