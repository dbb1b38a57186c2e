use std::{cmp::Ordering, collections::BinaryHeap};

use log::debug;

use super::{finish, is_passable, mark, prepare, MazeSolver, SolveOutcome};
use crate::{
    array::Array2D,
    dims::Indices,
    gameboard::{CellState, Model},
};

/// A* with the Manhattan distance as heuristic, which never overestimates on a
/// 4-connected grid with unit steps.
pub struct AStarSolver<'a> {
    model: &'a mut Model,
}

impl<'a> AStarSolver<'a> {
    pub fn new(model: &'a mut Model) -> Self {
        Self { model }
    }
}

/// The objects that we store in the priority queue
#[derive(Debug)]
struct ToVisit {
    cost: u32,
    heuristic: u32,
    seq: usize,
    point: Indices,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for BinaryHeap to be a min-heap; ties go to the cell closer to the goal,
        // then to the one queued first
        self.cost
            .cmp(&other.cost)
            .then(self.heuristic.cmp(&other.heuristic))
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &ToVisit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &ToVisit) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ToVisit {}

impl MazeSolver for AStarSolver<'_> {
    fn solve(&mut self, start_x: i32, start_y: i32) -> SolveOutcome {
        let start = Indices::new(start_x, start_y);
        let Some(goal) = prepare(self.model, start) else {
            return SolveOutcome::NoPathFound;
        };

        let size = self.model.size();
        let mut came_from = Array2D::new_square(None, size);
        let mut best = Array2D::new_square(u32::MAX, size);
        let mut closed = Array2D::new_square(false, size);

        let mut seq = 0;
        let mut visit_list = BinaryHeap::new();
        best[start] = 0;
        visit_list.push(ToVisit {
            cost: start.manhattan(goal),
            heuristic: start.manhattan(goal),
            seq,
            point: start,
        });

        let mut expanded = 0;
        while let Some(ToVisit { point: current, .. }) = visit_list.pop() {
            // stale entry, a cheaper route was already expanded
            if closed[current] {
                continue;
            }
            closed[current] = true;
            expanded += 1;

            if current == goal {
                return finish(self.model, &came_from, start, goal, expanded);
            }
            mark(self.model, current, CellState::VisitedCell);

            let tentative = best[current] + 1;
            for next in current.neighbors() {
                if !is_passable(self.model, next) || closed[next] || tentative >= best[next] {
                    continue;
                }

                best[next] = tentative;
                came_from[next] = Some(current);
                mark(self.model, next, CellState::FrontierCell);

                seq += 1;
                let heuristic = next.manhattan(goal);
                visit_list.push(ToVisit {
                    cost: tentative + heuristic,
                    heuristic,
                    seq,
                    point: next,
                });
            }
        }

        debug!("A* exhausted {} cells without reaching {:?}", expanded, goal);
        SolveOutcome::NoPathFound
    }
}
