use crate::grid::{Grid, Node};
use crate::random::RandomSource;

// ---------------------------------------------------------------------------
// Movement directions
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Down,
    Right,
    Up,
    Left,
}

impl Direction {
    /// Candidate order before shuffling. `y` grows downwards.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepOutcome {
    Moved { from: Node, to: Node },
    /// No open, in-bounds neighbour other than the previous cell.
    Stalled,
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// A random walker that refuses to step straight back where it came from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Agent {
    id: usize,
    goal: Node,
    position: Node,
    last_position: Option<Node>,
    path: Vec<Node>,
}

impl Agent {
    pub fn new(id: usize, start: Node, goal: Node) -> Self {
        Agent {
            id,
            goal,
            position: start,
            last_position: None,
            path: vec![start],
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Node {
        self.position
    }

    pub fn last_position(&self) -> Option<Node> {
        self.last_position
    }

    pub fn goal(&self) -> Node {
        self.goal
    }

    /// Every visited cell, starting with the spawn cell.
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    pub fn moves_made(&self) -> usize {
        self.path.len() - 1
    }

    pub fn at_goal(&self) -> bool {
        self.position == self.goal
    }

    /// Tries the four neighbours in shuffled order and takes the first one
    /// that is on the grid, open, and not the cell we just left.
    ///
    /// When the previous cell is the only way out the agent stays put; in a
    /// one-exit dead end it will stay there for good.
    pub fn step<R: RandomSource>(&mut self, grid: &Grid, rng: &mut R) -> StepOutcome {
        let mut directions = Direction::ALL;
        rng.shuffle(&mut directions);

        for dir in directions {
            let (dx, dy) = dir.delta();
            let target = self.position.offset(dx, dy);
            if !grid.is_open(target) || Some(target) == self.last_position {
                continue;
            }

            let from = self.position;
            self.last_position = Some(from);
            self.position = target;
            self.path.push(target);
            return StepOutcome::Moved { from, to: target };
        }

        StepOutcome::Stalled
    }
}
