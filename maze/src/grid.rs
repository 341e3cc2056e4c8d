use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::render::render_text;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    #[default]
    Open,
}

impl Cell {
    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order neighbors are generated.
    /// Breadth-first tie-breaking between equally long paths depends on this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(anyhow!("Invalid direction: {}", s)),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The point one step away in `direction`, or `None` if that would leave
    /// the non-negative quadrant. Upper bounds are checked by the maze.
    pub fn step(self, direction: Direction) -> Option<Point> {
        let Point { row, col } = self;
        match direction {
            Direction::Up => Some(Point::new(row.checked_sub(1)?, col)),
            Direction::Down => Some(Point::new(row + 1, col)),
            Direction::Left => Some(Point::new(row, col.checked_sub(1)?)),
            Direction::Right => Some(Point::new(row, col + 1)),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular maze with walls, a start and an exit.
///
/// Immutable once constructed; the solver only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    start: Point,
    exit: Point,
}

impl Maze {
    /// Build a maze from a row-major grid of cells.
    ///
    /// The grid must be non-empty and rectangular, and both `start` and `exit`
    /// must be open cells inside it.
    pub fn new(cells: Vec<Vec<Cell>>, start: Point, exit: Point) -> Result<Self, anyhow::Error> {
        let rows = cells.len();
        let columns = cells.first().map(|row| row.len()).unwrap_or(0);

        if rows == 0 || columns == 0 {
            return Err(anyhow!("Maze must have at least one cell"));
        }
        if let Some(row) = cells.iter().position(|row| row.len() != columns) {
            return Err(anyhow!(
                "Maze must be rectangular: row {} has {} cells, expected {}",
                row,
                cells[row].len(),
                columns
            ));
        }

        let maze = Self {
            rows,
            columns,
            cells,
            start,
            exit,
        };

        for (name, point) in [("start", start), ("exit", exit)] {
            if !maze.in_bounds(point) {
                return Err(anyhow!("The {} point {} is outside the maze", name, point));
            }
            if maze.is_wall(point) {
                return Err(anyhow!("The {} point {} is a wall", name, point));
            }
        }

        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.row < self.rows && point.col < self.columns
    }

    /// Out-of-bounds points are not walls; combine with [`Maze::in_bounds`].
    pub fn is_wall(&self, point: Point) -> bool {
        self.in_bounds(point) && self.cells[point.row][point.col].is_wall()
    }

    /// Return an iterator over the reachable neighbors of `point` together
    /// with the direction taken to get there, in [`Direction::ALL`] order.
    pub fn neighbors(&self, point: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            point
                .step(direction)
                .filter(|p| self.in_bounds(*p) && !self.is_wall(*p))
                .map(|p| (direction, p))
        })
    }

    /// Iterate over every point of the maze, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Point { row, col }))
    }

    /// Scales the maze by the given factor, i.e. to make it twice as large, pass 2.
    /// Every cell is repeated `factor` times in both directions and the start
    /// and exit keep the top-left copy of their cell.
    pub fn scale_up(&mut self, factor: usize) {
        if factor <= 1 {
            return;
        }

        let mut new_cells = vec![vec![Cell::default(); self.columns * factor]; self.rows * factor];

        for row in 0..self.rows {
            for col in 0..self.columns {
                for r in 0..factor {
                    for c in 0..factor {
                        new_cells[row * factor + r][col * factor + c] = self.cells[row][col];
                    }
                }
            }
        }

        self.rows *= factor;
        self.columns *= factor;
        self.cells = new_cells;
        self.start = Point::new(self.start.row * factor, self.start.col * factor);
        self.exit = Point::new(self.exit.row * factor, self.exit.col * factor);
    }
}

/// The plain text view of the maze, without any search results.
impl Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_text(self, None, None))
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn create_basic_map() -> Maze {
        use Cell::*;
        Maze::new(
            vec![
                vec![Open, Wall, Open],
                vec![Open, Open, Open],
                vec![Wall, Open, Open],
            ],
            Point::new(0, 0),
            Point::new(2, 2),
        )
        .unwrap()
    }

    #[test]
    fn test_neighbors_fixed_order() {
        let maze = create_basic_map();

        let neighbors: Vec<_> = maze.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Down, Point::new(2, 1)),
                (Direction::Left, Point::new(1, 0)),
                (Direction::Right, Point::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_neighbors_at_corner() {
        let maze = create_basic_map();

        // up and left would underflow, right is a wall
        let neighbors: Vec<_> = maze.neighbors(Point::new(0, 0)).collect();
        assert_eq!(neighbors, vec![(Direction::Down, Point::new(1, 0))]);

        let neighbors: Vec<_> = maze.neighbors(Point::new(2, 2)).collect();
        assert_eq!(
            neighbors,
            vec![
                (Direction::Up, Point::new(1, 2)),
                (Direction::Left, Point::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_predicates() {
        let maze = create_basic_map();

        assert!(maze.in_bounds(Point::new(2, 2)));
        assert!(!maze.in_bounds(Point::new(3, 0)));
        assert!(!maze.in_bounds(Point::new(0, 3)));
        assert!(maze.is_wall(Point::new(0, 1)));
        assert!(!maze.is_wall(Point::new(1, 1)));
        assert!(!maze.is_wall(Point::new(7, 7)));
    }

    #[test]
    fn test_new_rejects_invalid() {
        use Cell::*;

        assert!(Maze::new(vec![], Point::new(0, 0), Point::new(0, 0)).is_err());
        assert!(Maze::new(
            vec![vec![Open, Open], vec![Open]],
            Point::new(0, 0),
            Point::new(0, 1)
        )
        .is_err());
        assert!(Maze::new(
            vec![vec![Open, Wall]],
            Point::new(0, 0),
            Point::new(0, 1)
        )
        .is_err());
        assert!(Maze::new(
            vec![vec![Open, Open]],
            Point::new(0, 0),
            Point::new(1, 0)
        )
        .is_err());
    }

    #[test]
    fn test_scale_up() {
        let mut maze = create_basic_map();
        maze.scale_up(2);

        assert_eq!(maze.rows(), 6);
        assert_eq!(maze.columns(), 6);
        assert_eq!(maze.exit(), Point::new(4, 4));
        assert!(maze.is_wall(Point::new(1, 3)));
        assert!(maze.is_wall(Point::new(5, 0)));
        assert!(!maze.is_wall(Point::new(3, 3)));
    }

    #[test]
    fn test_display_shows_markers() {
        let maze = create_basic_map();

        assert_eq!(maze.to_string(), "A█ \n   \n█ B\n");
    }

    #[test]
    fn test_direction_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
        assert!("north".parse::<Direction>().is_err());
    }
}
