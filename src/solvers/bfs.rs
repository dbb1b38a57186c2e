use std::collections::VecDeque;

use log::debug;

use super::{finish, is_passable, mark, prepare, MazeSolver, SolveOutcome};
use crate::{
    array::Array2D,
    dims::Indices,
    gameboard::{CellState, Model},
};

/// Breadth-first search. Finds a path with the fewest steps.
pub struct BfsSolver<'a> {
    model: &'a mut Model,
}

impl<'a> BfsSolver<'a> {
    pub fn new(model: &'a mut Model) -> Self {
        Self { model }
    }
}

impl MazeSolver for BfsSolver<'_> {
    fn solve(&mut self, start_x: i32, start_y: i32) -> SolveOutcome {
        let start = Indices::new(start_x, start_y);
        let Some(goal) = prepare(self.model, start) else {
            return SolveOutcome::NoPathFound;
        };

        let size = self.model.size();
        let mut came_from = Array2D::new_square(None, size);
        let mut discovered = Array2D::new_square(false, size);
        let mut queue = VecDeque::from([start]);
        discovered[start] = true;

        let mut expanded = 0;
        while let Some(current) = queue.pop_front() {
            expanded += 1;
            if current == goal {
                return finish(self.model, &came_from, start, goal, expanded);
            }
            mark(self.model, current, CellState::VisitedCell);

            for next in current.neighbors() {
                if !is_passable(self.model, next) || discovered[next] {
                    continue;
                }

                discovered[next] = true;
                came_from[next] = Some(current);
                mark(self.model, next, CellState::FrontierCell);
                queue.push_back(next);
            }
        }

        debug!("BFS exhausted {} cells without reaching {:?}", expanded, goal);
        SolveOutcome::NoPathFound
    }
}
