//! Recursive-division maze generator.
//!
//! The grid starts solid, the outer ring is opened, and each division carves
//! an open corridor through the current region before recursing into the two
//! halves. Nothing here checks that `start` and `end` end up connected.

use tracing::{debug, info};

use crate::error::MazeError;
use crate::grid::{Grid, Node, Tile};
use crate::random::RandomSource;

/// Smallest grid that still has an interior to divide.
pub const MIN_SIDE: usize = 3;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct Region {
    x: usize,
    y: usize,
    w: usize,
    h: usize,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Orientation {
    Vertical,
    Horizontal,
}

impl Region {
    fn can_divide(&self) -> bool {
        self.w > 2 && self.h > 2
    }

    fn orientation(&self) -> Orientation {
        if self.w > self.h {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Checks dimensions and endpoints without touching the random source.
pub fn validate_layout(
    width: usize,
    height: usize,
    start: Node,
    end: Node,
) -> Result<(), MazeError> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(MazeError::TooLarge { width, height });
    }
    for node in [start, end] {
        let inside =
            node.x >= 0 && node.y >= 0 && node.ux() < width && node.uy() < height;
        if !inside {
            return Err(MazeError::OutOfBounds {
                node,
                width,
                height,
            });
        }
    }
    Ok(())
}

pub fn generate_maze<R: RandomSource>(
    width: usize,
    height: usize,
    start: Node,
    end: Node,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    validate_layout(width, height, start, end)?;

    let mut grid = Grid::filled(width, height, Tile::Wall);
    open_perimeter(&mut grid);
    divide(
        &mut grid,
        Region {
            x: 1,
            y: 1,
            w: width - 2,
            h: height - 2,
        },
        rng,
    );

    grid.set(start.ux(), start.uy(), Tile::Open);
    grid.set(end.ux(), end.uy(), Tile::Open);

    info!(
        width,
        height,
        open_cells = grid.open_count(),
        %start,
        %end,
        "maze generated"
    );
    Ok(grid)
}

fn open_perimeter(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    for x in 0..width {
        grid.set(x, 0, Tile::Open);
        grid.set(x, height - 1, Tile::Open);
    }
    for y in 0..height {
        grid.set(0, y, Tile::Open);
        grid.set(width - 1, y, Tile::Open);
    }
}

fn divide<R: RandomSource>(grid: &mut Grid, region: Region, rng: &mut R) {
    if !region.can_divide() {
        return;
    }

    let Region { x, y, w, h } = region;
    match region.orientation() {
        Orientation::Vertical => {
            let wx = x + rng.range_inclusive(1, w - 2);
            debug!(?region, wx, "vertical cut");
            for row in y..y + h {
                grid.set(wx, row, Tile::Open);
            }
            divide(grid, Region { x, y, w: wx - x, h }, rng);
            divide(
                grid,
                Region {
                    x: wx + 1,
                    y,
                    w: x + w - wx - 1,
                    h,
                },
                rng,
            );
        }
        Orientation::Horizontal => {
            let wy = y + rng.range_inclusive(1, h - 2);
            debug!(?region, wy, "horizontal cut");
            for col in x..x + w {
                grid.set(col, wy, Tile::Open);
            }
            divide(grid, Region { x, y, w, h: wy - y }, rng);
            divide(
                grid,
                Region {
                    x,
                    y: wy + 1,
                    w,
                    h: y + h - wy - 1,
                },
                rng,
            );
        }
    }
}
