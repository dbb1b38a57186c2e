mod astar;
mod bfs;

pub use astar::AStarSolver;
pub use bfs::BfsSolver;

use std::fmt;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    array::Array2D,
    dims::Indices,
    gameboard::{CellState, Model},
};

/// Path search algorithms a controller can pick from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum SolverKind {
    Bfs,
    #[default]
    #[value(name = "astar")]
    AStar,
}

impl SolverKind {
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Bfs => "bfs",
            SolverKind::AStar => "astar",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finds a route from a start cell to the model's `End` cell, marking its progress and the
/// final path through the model.
pub trait MazeSolver {
    fn solve(&mut self, start_x: i32, start_y: i32) -> SolveOutcome;
}

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct PathResult {
    /// Cells from start to goal, both included.
    pub path: Vec<Indices>,
    pub start: Indices,
    pub goal: Indices,
    /// Number of steps, one less than the number of cells.
    pub length: usize,
    /// How many cells were taken off the frontier.
    pub expanded: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    NoPathFound,
    PathFound(PathResult),
}

impl SolveOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::PathFound(_))
    }

    pub fn path(&self) -> Option<&PathResult> {
        match self {
            SolveOutcome::PathFound(result) => Some(result),
            SolveOutcome::NoPathFound => None,
        }
    }
}

/// Clears marks from an earlier run and checks the start. Returns the goal when a search
/// makes sense at all.
fn prepare(model: &mut Model, start: Indices) -> Option<Indices> {
    model.clear_search_marks();

    let Some(goal) = model.end() else {
        debug!("No end cell set, nothing to solve");
        return None;
    };

    match model.get(start) {
        Some(state) if state.is_passable() => Some(goal),
        _ => {
            debug!("Start {:?} is outside the grid or a wall", start);
            None
        }
    }
}

fn is_passable(model: &Model, pos: Indices) -> bool {
    model.get(pos).is_some_and(CellState::is_passable)
}

/// Marks a cell unless it already has that state, so listeners don't see repeats.
fn mark(model: &mut Model, pos: Indices, state: CellState) {
    if model.get(pos) != Some(state) {
        model.update_model(pos.x, pos.y, state);
    }
}

/// Walks the predecessor links back from the goal, marks the cells in between as
/// [`CellState::Path`] and builds the result.
fn finish(
    model: &mut Model,
    came_from: &Array2D<Option<Indices>>,
    start: Indices,
    goal: Indices,
    expanded: usize,
) -> SolveOutcome {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(prev) = came_from[current] else {
            break;
        };
        if prev != start {
            model.update_model(prev.x, prev.y, CellState::Path);
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();

    let length = path.len() - 1;
    debug!(
        "Found path {:?} -> {:?} of length {} after expanding {} cells",
        start, goal, length, expanded
    );

    SolveOutcome::PathFound(PathResult {
        path,
        start,
        goal,
        length,
        expanded,
    })
}
