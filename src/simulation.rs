//! Tick loop that walks every active agent once per tick and retires the ones
//! standing on the goal.

use tracing::{debug, info, warn};

use crate::agent::{Agent, StepOutcome};
use crate::error::MazeError;
use crate::grid::{Grid, Node};
use crate::maze::generate_maze;
use crate::random::RandomSource;
use crate::stats::RunStatistics;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub moved: usize,
    pub stalled: usize,
    /// Ids of agents removed this tick.
    pub arrived: Vec<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub arrived: usize,
    pub still_active: usize,
    pub hit_tick_cap: bool,
}

pub struct Simulation<R: RandomSource> {
    grid: Grid,
    start: Node,
    end: Node,
    agent_count: usize,
    agents: Vec<Agent>,
    tick: u64,
    rng: R,
    stats: RunStatistics,
}

impl<R: RandomSource> Simulation<R> {
    /// Generates a fresh maze and spawns `agent_count` agents on `start`.
    pub fn generate(
        width: usize,
        height: usize,
        start: Node,
        end: Node,
        agent_count: usize,
        mut rng: R,
    ) -> Result<Self, MazeError> {
        let grid = generate_maze(width, height, start, end, &mut rng)?;
        Self::with_grid(grid, start, end, agent_count, rng)
    }

    /// Runs on an existing grid. `start` and `end` must be open cells of it.
    pub fn with_grid(
        grid: Grid,
        start: Node,
        end: Node,
        agent_count: usize,
        rng: R,
    ) -> Result<Self, MazeError> {
        for node in [start, end] {
            if !grid.in_bounds(node) {
                return Err(MazeError::OutOfBounds {
                    node,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
            if !grid.is_open(node) {
                return Err(MazeError::ClosedEndpoint { node });
            }
        }

        let mut sim = Simulation {
            grid,
            start,
            end,
            agent_count,
            agents: Vec::new(),
            tick: 0,
            rng,
            stats: RunStatistics::default(),
        };
        sim.spawn_agents();
        Ok(sim)
    }

    /// Replaces the maze with a new one of the same size and respawns agents.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        self.grid = generate_maze(
            self.grid.width(),
            self.grid.height(),
            self.start,
            self.end,
            &mut self.rng,
        )?;
        self.spawn_agents();
        Ok(())
    }

    fn spawn_agents(&mut self) {
        self.agents = (0..self.agent_count)
            .map(|id| Agent::new(id, self.start, self.end))
            .collect();
        self.tick = 0;
        self.stats = RunStatistics::new(
            self.grid.width(),
            self.grid.height(),
            self.grid.open_count(),
        );
        self.stats.agents_spawned = self.agent_count;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Node {
        self.start
    }

    pub fn end(&self) -> Node {
        self.end
    }

    /// Agents still walking.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.agents.is_empty()
    }

    /// Moves every active agent once, then drops those on the goal.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        for agent in self.agents.iter_mut() {
            match agent.step(&self.grid, &mut self.rng) {
                StepOutcome::Moved { .. } => report.moved += 1,
                StepOutcome::Stalled => report.stalled += 1,
            }
        }

        for agent in self.agents.iter().filter(|a| a.at_goal()) {
            info!(
                agent = agent.id(),
                tick = self.tick,
                path_len = agent.path().len(),
                "agent reached the goal"
            );
            report.arrived.push(agent.id());
            self.stats.record_arrival(self.tick);
        }
        self.agents.retain(|a| !a.at_goal());

        self.stats.ticks = self.tick;
        self.stats.total_moves += report.moved;
        self.stats.total_stalls += report.stalled;

        debug!(
            tick = report.tick,
            moved = report.moved,
            stalled = report.stalled,
            arrived = report.arrived.len(),
            active = self.agents.len(),
            "tick"
        );
        report
    }

    /// Ticks until every agent has arrived or `max_ticks` ticks have run.
    pub fn run_until(&mut self, max_ticks: u64) -> RunSummary {
        while !self.is_finished() && self.tick < max_ticks {
            self.tick();
        }

        let hit_tick_cap = !self.is_finished();
        if hit_tick_cap {
            warn!(
                max_ticks,
                still_active = self.agents.len(),
                "tick cap reached with agents still walking"
            );
        }

        RunSummary {
            ticks: self.tick,
            arrived: self.stats.agents_arrived,
            still_active: self.agents.len(),
            hit_tick_cap,
        }
    }
}
