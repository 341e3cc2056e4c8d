use std::{fs, path::Path, str::FromStr};

use anyhow::{anyhow, Context};

use crate::grid::{Cell, Maze, Point};

pub const START: char = 'A';
pub const EXIT: char = 'B';

/// Parse the textual maze format.
///
/// `A` marks the start and `B` the exit, each exactly once. A space is an open
/// cell and any other character is a wall. Empty lines before and after the
/// maze are ignored; shorter lines are padded with open cells up to the
/// longest one.
pub fn parse_maze(text: &str) -> Result<Maze, anyhow::Error> {
    if text.matches(START).count() != 1 {
        return Err(anyhow!("Maze must have exactly one start point"));
    }
    if text.matches(EXIT).count() != 1 {
        return Err(anyhow!("Maze must have exactly one exit point"));
    }

    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|line| !line.is_empty()).unwrap_or(0);
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(first, |i| i + 1);
    let lines = &lines[first..last];

    let columns = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut cells = vec![vec![Cell::Open; columns]; lines.len()];
    let mut start = None;
    let mut exit = None;

    for (row, line) in lines.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            match c {
                START => start = Some(Point { row, col }),
                EXIT => exit = Some(Point { row, col }),
                ' ' => {}
                _ => cells[row][col] = Cell::Wall,
            }
        }
    }

    // both markers were counted above, so they are always found
    let start = start.ok_or_else(|| anyhow!("Maze must have exactly one start point"))?;
    let exit = exit.ok_or_else(|| anyhow!("Maze must have exactly one exit point"))?;

    Maze::new(cells, start, exit)
}

impl FromStr for Maze {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}

pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<Maze, anyhow::Error> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading maze {}", path.display()))?;

    parse_maze(&text).with_context(|| format!("parsing maze {}", path.display()))
}
