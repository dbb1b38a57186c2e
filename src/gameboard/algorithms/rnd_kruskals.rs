use log::debug;
use rand::seq::SliceRandom;

use super::{carve, prepare_model, CarveLattice, CellState, MazeGenerator, Model, Random};
use crate::dims::Indices;

/// Randomized Kruskal's: joins lattice cells through walls taken in random order, skipping
/// any wall whose two sides are already connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn create(&self, size: usize, model: &mut Model, rng: &mut Random) {
        if !prepare_model(size, model) {
            return;
        }

        let lattice = CarveLattice::new(size);

        let mut walls: Vec<(Indices, Indices)> = Vec::new();
        for pos in lattice.cells() {
            for dir in [Indices::RIGHT, Indices::DOWN] {
                let next = pos + dir * 2;
                if lattice.contains(next) {
                    walls.push((pos, next));
                }
            }
        }

        let starter_wall_count = walls.len();
        let mut sets = DisjointSet::new(lattice.cell_count());

        walls.shuffle(rng);
        while let Some((from, to)) = walls.pop() {
            let (Some(a), Some(b)) = (lattice.index_of(from), lattice.index_of(to)) else {
                continue;
            };

            if !sets.union(a, b) {
                continue;
            }

            carve_wall(model, from);
            carve(model, from.midpoint(to));
            carve_wall(model, to);
        }

        // a lattice of one cell has no walls to remove
        for cell in lattice.cells() {
            carve_wall(model, cell);
        }

        debug!(
            "Kruskal's carving removed {} of {} walls",
            lattice.cell_count().saturating_sub(sets.count()),
            starter_wall_count
        );
    }
}

fn carve_wall(model: &mut Model, pos: Indices) {
    if model.get(pos) == Some(CellState::Wall) {
        carve(model, pos);
    }
}

/// Union-find over dense indices, with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl DisjointSet {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            count: len,
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets holding `a` and `b`. Returns `false` if they already were one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.count -= 1;

        true
    }

    /// Number of disjoint sets left.
    pub fn count(&self) -> usize {
        self.count
    }
}
