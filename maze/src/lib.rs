//! Maze solving by uninformed search over a grid of walls.
//!
//! A [`Maze`] is loaded from text, a [`Solver`] explores it with a
//! depth-first or breadth-first [`Frontier`] and the result can be rendered
//! as text or as an image.

pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod parse;
pub mod render;
pub mod search;

pub use config::Config;
pub use error::SolveError;
pub use frontier::{Frontier, QueueFrontier, StackFrontier, Strategy};
pub use grid::{Cell, Direction, Maze, Point};
pub use node::{Node, NodeArena, NodeId};
pub use parse::{load_maze, parse_maze};
pub use render::{render_image, render_text, save_image, ImageOptions};
pub use search::{Solution, Solver, SolverState};
