//! Text and raster views of a maze and, optionally, of a finished search.
//!
//! Renderers only read the solver's results; they never change them.

use std::{collections::HashSet, path::Path};

use anyhow::{anyhow, Context};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::{
    grid::{Maze, Point},
    search::Solution,
};

const WALL: Rgba<u8> = Rgba([44, 53, 57, 255]);
const START: Rgba<u8> = Rgba([255, 167, 0, 255]);
const EXIT: Rgba<u8> = Rgba([255, 79, 0, 255]);
const SOLUTION: Rgba<u8> = Rgba([255, 133, 77, 255]);
const EXPLORED: Rgba<u8> = Rgba([0, 179, 255, 255]);
const OPEN: Rgba<u8> = Rgba([245, 245, 245, 255]);

/// Largest accepted side length of a cell in pixels.
pub const MAX_CELL_SIZE: u32 = 1024;
/// Largest image that will be allocated, in pixels (1 GiB of RGBA).
pub const MAX_PIXELS: u64 = 1 << 28;

/// What a single cell shows, in order of precedence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Tile {
    Wall,
    Start,
    Exit,
    Solution,
    Explored,
    Open,
}

fn tile_at(
    maze: &Maze,
    point: Point,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
) -> Tile {
    if maze.is_wall(point) {
        Tile::Wall
    } else if point == maze.start() {
        Tile::Start
    } else if point == maze.exit() {
        Tile::Exit
    } else if solution.is_some_and(|s| s.contains(point)) {
        Tile::Solution
    } else if explored.is_some_and(|e| e.contains(&point)) {
        Tile::Explored
    } else {
        Tile::Open
    }
}

/// Render the maze as text, one line per row.
///
/// Walls are `█`, the start and exit `A` and `B`, solution cells `*` and
/// explored cells `^`.
pub fn render_text(
    maze: &Maze,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
) -> String {
    let mut output = String::with_capacity(maze.rows() * (maze.columns() * 3 + 1));

    for row in 0..maze.rows() {
        for col in 0..maze.columns() {
            output.push(match tile_at(maze, Point { row, col }, solution, explored) {
                Tile::Wall => '█',
                Tile::Start => 'A',
                Tile::Exit => 'B',
                Tile::Solution => '*',
                Tile::Explored => '^',
                Tile::Open => ' ',
            });
        }
        output.push('\n');
    }

    output
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Side length of a cell in pixels.
    pub cell_size: u32,
    /// Pixels left transparent on each side of a cell.
    pub cell_border: u32,
    pub show_solution: bool,
    pub show_explored: bool,
}

impl ImageOptions {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(anyhow!(
                "cell_size must be between 1 and {}, got {}",
                MAX_CELL_SIZE,
                self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            cell_size: 64,
            cell_border: 1,
            show_solution: true,
            show_explored: false,
        }
    }
}

/// Width and height in pixels of the rendered maze, refusing anything that
/// overflows `u32` or exceeds [`MAX_PIXELS`].
fn image_size(maze: &Maze, cell_size: u32) -> Result<(u32, u32), anyhow::Error> {
    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|n| n.checked_mul(cell_size))
    };

    let (Some(width), Some(height)) = (side(maze.columns()), side(maze.rows())) else {
        return Err(anyhow!(
            "image of {}x{} cells at {} pixels per cell is too large",
            maze.columns(),
            maze.rows(),
            cell_size
        ));
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(anyhow!(
            "image of {}x{} pixels exceeds the limit of {} pixels",
            width,
            height,
            MAX_PIXELS
        ));
    }

    Ok((width, height))
}

/// Render the maze as an image with one filled square per cell.
///
/// Solution and explored cells are only highlighted when a solution exists.
pub fn render_image(
    maze: &Maze,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
    options: &ImageOptions,
) -> Result<RgbaImage, anyhow::Error> {
    options.validate()?;
    let size = options.cell_size;
    let border = options.cell_border.min(size / 2);
    let (width, height) = image_size(maze, size)?;

    let solution = solution.filter(|_| options.show_solution);
    let explored = explored.filter(|_| options.show_explored && solution.is_some());

    let mut img = RgbaImage::new(width, height);

    for point in maze.points() {
        let fill = match tile_at(maze, point, solution, explored) {
            Tile::Wall => WALL,
            Tile::Start => START,
            Tile::Exit => EXIT,
            Tile::Solution => SOLUTION,
            Tile::Explored => EXPLORED,
            Tile::Open => OPEN,
        };

        let x0 = point.col as u32 * size;
        let y0 = point.row as u32 * size;
        for y in y0 + border..y0 + size - border {
            for x in x0 + border..x0 + size - border {
                img.put_pixel(x, y, fill);
            }
        }
    }

    Ok(img)
}

/// Render to an image and save it; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(
    path: P,
    maze: &Maze,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
    options: &ImageOptions,
) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    render_image(maze, solution, explored, options)?
        .save(path)
        .with_context(|| format!("writing image {}", path.display()))
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::{frontier::Strategy, search::Solver};

    fn create_basic_map() -> Maze {
        "\
#####
#A  #
# # #
#  B#
#####"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_text_without_search() {
        let maze = create_basic_map();

        assert_eq!(
            render_text(&maze, None, None),
            "█████\n█A  █\n█ █ █\n█  B█\n█████\n"
        );
    }

    #[test]
    fn test_text_with_solution() {
        let maze = create_basic_map();
        let mut solver = Solver::new(&maze, Strategy::Queue);
        solver.solve().unwrap();

        assert_eq!(
            render_text(&maze, solver.solution(), Some(solver.explored())),
            "█████\n█A^^█\n█*█^█\n█**B█\n█████\n"
        );
    }

    #[test]
    fn test_image_colors() {
        let maze = create_basic_map();
        let mut solver = Solver::new(&maze, Strategy::Queue);
        solver.solve().unwrap();

        let options = ImageOptions {
            cell_size: 4,
            cell_border: 1,
            show_solution: true,
            show_explored: true,
        };
        let img =
            render_image(&maze, solver.solution(), Some(solver.explored()), &options).unwrap();

        assert_eq!(img.dimensions(), (20, 20));
        let center = |row: u32, col: u32| *img.get_pixel(col * 4 + 1, row * 4 + 1);
        assert_eq!(center(0, 0), WALL);
        assert_eq!(center(1, 1), START);
        assert_eq!(center(3, 3), EXIT);
        assert_eq!(center(2, 1), SOLUTION);
        assert_eq!(center(1, 2), EXPLORED);
        assert_eq!(center(2, 3), EXPLORED);
        // border pixels stay transparent
        assert_eq!(img.get_pixel(4, 4).0[3], 0);
    }

    #[test]
    fn test_image_hides_search_without_solution() {
        let maze = create_basic_map();
        let explored: HashSet<Point> = [Point::new(1, 2)].into_iter().collect();

        let options = ImageOptions {
            cell_size: 2,
            cell_border: 0,
            show_solution: true,
            show_explored: true,
        };
        let img = render_image(&maze, None, Some(&explored), &options).unwrap();

        assert_eq!(*img.get_pixel(4, 2), OPEN);
    }

    #[test]
    fn test_image_rejects_bad_cell_size() {
        let maze: Maze = format!("A{}B", " ".repeat(62)).parse().unwrap();

        for cell_size in [0, MAX_CELL_SIZE + 1, 66_100_000, u32::MAX] {
            let options = ImageOptions {
                cell_size,
                ..Default::default()
            };
            assert!(render_image(&maze, None, None, &options).is_err());
        }
    }

    #[test]
    fn test_image_rejects_oversized_maze() {
        // 300 cells at the largest cell size is over the pixel limit
        let maze: Maze = format!("A{}B", " ".repeat(298)).parse().unwrap();
        let options = ImageOptions {
            cell_size: MAX_CELL_SIZE,
            ..Default::default()
        };

        let err = render_image(&maze, None, None, &options).unwrap_err();
        assert!(err.to_string().contains("exceeds"));

        let path = std::env::temp_dir().join(format!("oversized-{}.png", std::process::id()));
        assert!(save_image(&path, &maze, None, None, &options).is_err());
        assert!(!path.exists());
    }
}
