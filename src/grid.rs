use std::fmt;

// ---------------------------------------------------------------------------
// Grid coordinates
// ---------------------------------------------------------------------------

/// A cell coordinate. Signed so neighbour offsets can step off the grid and
/// be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub x: i32,
    pub y: i32,
}

impl Node {
    pub const fn new(x: i32, y: i32) -> Self {
        Node { x, y }
    }

    pub fn ux(self) -> usize {
        self.x as usize
    }

    pub fn uy(self) -> usize {
        self.y as usize
    }

    pub fn offset(self, dx: i32, dy: i32) -> Node {
        Node {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance; 1 means the two nodes are axis neighbours.
    pub fn manhattan(self, other: Node) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Grid model
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Tile {
    Wall,
    Open,
}

/// Row-major wall/open matrix produced by the maze generator.
///
/// The grid is only mutable inside the crate; once `generate_maze` hands it
/// out it is read through `&Grid` by every agent and by the viewer.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    pub(crate) fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Grid {
            width,
            height,
            cells: vec![tile; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, node: Node) -> bool {
        node.x >= 0 && node.y >= 0 && node.ux() < self.width && node.uy() < self.height
    }

    /// Tile at `node`, or `None` when the node is off the grid.
    pub fn tile(&self, node: Node) -> Option<Tile> {
        if self.in_bounds(node) {
            Some(self.cells[self.index(node.ux(), node.uy())])
        } else {
            None
        }
    }

    pub fn is_open(&self, node: Node) -> bool {
        self.tile(node) == Some(Tile::Open)
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t == Tile::Open).count()
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Node, Tile)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &tile)| {
            let node = Node::new((i % self.width) as i32, (i / self.width) as i32);
            (node, tile)
        })
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.index(x, y);
        self.cells[idx] = tile;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

/// `#` for walls, `.` for open cells, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for tile in row {
                let ch = match tile {
                    Tile::Wall => '#',
                    Tile::Open => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_lookup_rejects_out_of_bounds() {
        let grid = Grid::filled(4, 3, Tile::Open);
        assert_eq!(grid.tile(Node::new(3, 2)), Some(Tile::Open));
        assert_eq!(grid.tile(Node::new(4, 0)), None);
        assert_eq!(grid.tile(Node::new(0, 3)), None);
        assert_eq!(grid.tile(Node::new(-1, 0)), None);
        assert!(!grid.is_open(Node::new(0, -1)));
    }

    #[test]
    fn set_is_row_major() {
        let mut grid = Grid::filled(3, 2, Tile::Wall);
        grid.set(2, 1, Tile::Open);
        assert!(grid.is_open(Node::new(2, 1)));
        assert!(!grid.is_open(Node::new(1, 2)));
        assert_eq!(grid.open_count(), 1);
    }

    #[test]
    fn display_renders_rows() {
        let mut grid = Grid::filled(3, 2, Tile::Wall);
        grid.set(0, 0, Tile::Open);
        grid.set(2, 1, Tile::Open);
        assert_eq!(grid.to_string(), ".##\n##.\n");
    }

    #[test]
    fn cells_yield_coordinates() {
        let grid = Grid::filled(2, 2, Tile::Open);
        let nodes: Vec<Node> = grid.cells().map(|(n, _)| n).collect();
        assert_eq!(
            nodes,
            vec![
                Node::new(0, 0),
                Node::new(1, 0),
                Node::new(0, 1),
                Node::new(1, 1)
            ]
        );
    }
}
