use hashbrown::HashSet;
use log::{debug, trace};
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{carve, prepare_model, CarveLattice, MazeGenerator, Model, Random};

/// Recursive backtracker: a random walk over the lattice that backs up on dead ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn create(&self, size: usize, model: &mut Model, rng: &mut Random) {
        if !prepare_model(size, model) {
            return;
        }

        let lattice = CarveLattice::new(size);
        let Some(start) = lattice.start() else {
            debug!("Grid of size {} has nothing to carve", size);
            return;
        };

        let cell_count = lattice.cell_count();
        let mut visited = HashSet::with_capacity(cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        carve(model, start);
        visited.insert(start);
        stack.push(start);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = lattice
                .neighbors(current)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&chosen) => {
                    trace!("Carving {:?} -> {:?}", current, chosen);
                    carve(model, current.midpoint(chosen));
                    carve(model, chosen);
                    visited.insert(chosen);
                    stack.push(chosen);
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!("Depth-first carving visited {} of {} cells", visited.len(), cell_count);
    }
}
