use crate::agent::Agent;
use crate::grid::{Grid, Node, Tile};

pub const BLACK: u32 = 0x00000000;
pub const WHITE: u32 = 0x00FFFFFF;
pub const WALL_COLOR: u32 = 0x00323232;
pub const AGENT_COLOR: u32 = 0x000096FF;
pub const START_COLOR: u32 = 0x0000FF00;
pub const END_COLOR: u32 = 0x00FF0000;
pub const TRAIL_COLOR: u32 = 0x00ADD8E6;

/// A pixel buffer laid out the way `minifb::Window::update_with_buffer` reads it.
pub struct Frame {
    width: usize,
    height: usize,
    cell_size: usize,
    buffer: Vec<u32>,
}

pub struct SceneParams<'a> {
    pub grid: &'a Grid,
    pub start: Node,
    pub end: Node,
    pub agents: &'a [Agent],
    pub agent_radius: usize,
    pub show_trails: bool,
}

impl Frame {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Self {
        Frame {
            width,
            height,
            cell_size,
            buffer: vec![BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }

    pub fn fill(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    fn cell_center(&self, node: Node) -> (i32, i32) {
        let half = (self.cell_size / 2) as i32;
        let size = self.cell_size as i32;
        (node.x * size + half, node.y * size + half)
    }

    pub fn draw_cell(&mut self, node: Node, color: u32) {
        let x0 = node.ux() * self.cell_size;
        let y0 = node.uy() * self.cell_size;
        if x0 >= self.width || y0 >= self.height {
            return;
        }
        let x1 = (x0 + self.cell_size).min(self.width);
        let y1 = (y0 + self.cell_size).min(self.height);
        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    pub fn draw_circle(&mut self, node: Node, radius: usize, color: u32) {
        let (cx, cy) = self.cell_center(node);
        let (cx, cy) = (cx as usize, cy as usize);
        let r2 = (radius * radius) as isize;

        let y_lo = cy.saturating_sub(radius);
        let y_hi = (cy + radius).min(self.height.saturating_sub(1));
        let x_lo = cx.saturating_sub(radius);
        let x_hi = (cx + radius).min(self.width.saturating_sub(1));

        for y in y_lo..=y_hi {
            let dy = y as isize - cy as isize;
            for x in x_lo..=x_hi {
                let dx = x as isize - cx as isize;
                if dx * dx + dy * dy <= r2 {
                    self.buffer[y * self.width + x] = color;
                }
            }
        }
    }

    /// Bresenham line between two cell centres.
    pub fn draw_link(&mut self, a: Node, b: Node, color: u32) {
        let (mut x0, mut y0) = self.cell_center(a);
        let (x1, y1) = self.cell_center(b);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x0 >= 0 && y0 >= 0 && (x0 as usize) < self.width && (y0 as usize) < self.height {
                self.buffer[y0 as usize * self.width + x0 as usize] = color;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

pub fn render_scene(frame: &mut Frame, scene: &SceneParams<'_>) {
    frame.fill(BLACK);

    for (node, tile) in scene.grid.cells() {
        let color = match tile {
            Tile::Wall => WALL_COLOR,
            Tile::Open => WHITE,
        };
        frame.draw_cell(node, color);
    }

    frame.draw_cell(scene.start, START_COLOR);
    frame.draw_cell(scene.end, END_COLOR);

    if scene.show_trails {
        for agent in scene.agents {
            for w in agent.path().windows(2) {
                frame.draw_link(w[0], w[1], TRAIL_COLOR);
            }
        }
    }

    for agent in scene.agents {
        frame.draw_circle(agent.position(), scene.agent_radius, AGENT_COLOR);
    }
}
