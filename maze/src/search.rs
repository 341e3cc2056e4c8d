//! The frontier-driven solver.
//!
//! A run seeds the frontier with the start, then repeatedly removes a node,
//! tests it against the exit and expands it. A cell is added to the frontier
//! at most once per run: only when it is neither explored nor already pending.
//! Each run therefore ends after at most `rows * columns` removals.

use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use crate::{
    error::SolveError,
    frontier::{Frontier, Strategy},
    grid::{Direction, Maze, Point},
    node::{Node, NodeArena},
};

/// The moves from the start to the exit, excluding the start itself and
/// including the exit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Solution {
    steps: Vec<(Direction, Point)>,
}

impl Solution {
    pub fn steps(&self) -> &[(Direction, Point)] {
        &self.steps
    }

    pub fn actions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().map(|(action, _)| *action)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().map(|(_, cell)| *cell)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells().any(|cell| cell == point)
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Direction, Point)> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a (Direction, Point);
    type IntoIter = std::slice::Iter<'a, (Direction, Point)>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverState {
    /// No run started yet.
    Ready,
    Running,
    Solved(Solution),
    /// The frontier was exhausted without reaching the exit.
    Failed,
}

impl SolverState {
    pub fn is_done(&self) -> bool {
        matches!(self, SolverState::Solved(_) | SolverState::Failed)
    }
}

pub struct Solver<'m> {
    maze: &'m Maze,
    strategy: Strategy,
    frontier: Box<dyn Frontier>,
    nodes: NodeArena,
    explored: HashSet<Point>,
    num_explored: usize,
    high_water: usize,
    state: SolverState,
}

impl<'m> Solver<'m> {
    pub fn new(maze: &'m Maze, strategy: Strategy) -> Self {
        Self {
            maze,
            strategy,
            frontier: strategy.frontier(),
            nodes: NodeArena::new(),
            explored: HashSet::new(),
            num_explored: 0,
            high_water: 0,
            state: SolverState::Ready,
        }
    }

    /// Throw away everything from a previous run and seed the emptied
    /// frontier with the start.
    fn reset(&mut self) {
        debug!(
            "solving {}x{} maze from {} to {} using {} frontier",
            self.maze.rows(),
            self.maze.columns(),
            self.maze.start(),
            self.maze.exit(),
            self.strategy
        );

        self.frontier.clear();
        self.frontier.add(Node::root(self.maze.start()));
        self.nodes.clear();
        self.explored.clear();
        self.num_explored = 0;
        self.high_water = self.frontier.len();
        self.state = SolverState::Running;
    }

    /// Remove and process a single node.
    ///
    /// A `Ready` solver starts a new run first. Once the run is over the
    /// final state is returned again without doing any work; a failed run
    /// keeps returning [`SolveError::NoSolution`].
    pub fn step(&mut self) -> Result<&SolverState, SolveError> {
        match self.state {
            SolverState::Ready => self.reset(),
            SolverState::Running => {}
            SolverState::Solved(_) => return Ok(&self.state),
            SolverState::Failed => return Err(self.no_solution()),
        }

        if self.frontier.is_empty() {
            debug!("no solution after exploring {} states", self.num_explored);
            self.state = SolverState::Failed;
            return Err(self.no_solution());
        }

        let node = self.frontier.remove()?;
        self.num_explored += 1;

        if node.state == self.maze.exit() {
            let solution = Solution {
                steps: self.nodes.backtrack(&node),
            };
            debug!(
                "found exit after exploring {} states, path has {} moves",
                self.num_explored,
                solution.len()
            );
            self.state = SolverState::Solved(solution);
            return Ok(&self.state);
        }

        self.explored.insert(node.state);
        let id = self.nodes.insert(node);

        for (action, state) in self.maze.neighbors(node.state) {
            if !self.explored.contains(&state) && !self.frontier.contains_state(state) {
                trace!("{} -> {} ({})", node.state, state, action);
                self.frontier.add(Node::child(state, id, action));
            }
        }
        self.high_water = self.high_water.max(self.frontier.len());

        Ok(&self.state)
    }

    /// Run a fresh search to completion.
    ///
    /// Any earlier run is discarded, so calling this twice gives the same
    /// result both times.
    pub fn solve(&mut self) -> Result<&Solution, SolveError> {
        self.state = SolverState::Ready;

        while !self.step()?.is_done() {}

        match &self.state {
            SolverState::Solved(solution) => Ok(solution),
            _ => Err(self.no_solution()),
        }
    }

    fn no_solution(&self) -> SolveError {
        SolveError::NoSolution {
            explored: self.num_explored,
        }
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn solution(&self) -> Option<&Solution> {
        match &self.state {
            SolverState::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Cells that were removed from the frontier and expanded. The exit is
    /// never part of it.
    pub fn explored(&self) -> &HashSet<Point> {
        &self.explored
    }

    /// Number of nodes removed from the frontier, including the exit.
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }

    /// Largest number of nodes that were waiting in the frontier at once.
    pub fn frontier_high_water(&self) -> usize {
        self.high_water
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
