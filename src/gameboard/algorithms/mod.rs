mod depth_first_search;
mod rnd_kruskals;
mod wall_fill;

use std::fmt;

use clap::ValueEnum;
use log::warn;
use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{CellState, Model};
use crate::{array::Array2D, dims::Indices};

pub use depth_first_search::DepthFirstSearch;
pub use rnd_kruskals::RndKruskals;
pub use wall_fill::WallFill;

/// Maze carving algorithms a controller can pick from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum GeneratorKind {
    #[default]
    #[value(name = "dfs")]
    DepthFirstSearch,
    Kruskal,
}

impl GeneratorKind {
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::DepthFirstSearch => "dfs",
            GeneratorKind::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], falling back to entropy when no seed is given.
pub fn random_from_seed(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}

/// Builds a whole matrix without touching any model.
pub trait BatchGenerator: fmt::Debug {
    fn create(&self, size: usize) -> Array2D<CellState>;
}

/// Carves a maze into a model in place, one cell update at a time.
pub trait MazeGenerator: fmt::Debug {
    fn create(&self, size: usize, model: &mut Model, rng: &mut Random);
}

/// The odd-coordinate cells of a `size × size` grid that can become passages. Every one of
/// them is surrounded by cells that stay walls unless a generator opens them.
#[derive(Debug, Clone, Copy)]
pub struct CarveLattice {
    size: i32,
}

impl CarveLattice {
    pub fn new(size: usize) -> Self {
        Self { size: size as i32 }
    }

    /// Number of lattice cells along one side.
    pub fn side(&self) -> usize {
        ((self.size - 1).max(0) / 2) as usize
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    pub fn contains(&self, pos: Indices) -> bool {
        let inside = |v: i32| v >= 1 && v <= self.size - 2 && v % 2 == 1;
        inside(pos.x) && inside(pos.y)
    }

    pub fn start(&self) -> Option<Indices> {
        let start = Indices::new(1, 1);
        self.contains(start).then_some(start)
    }

    pub fn cells(&self) -> impl Iterator<Item = Indices> {
        let side = self.side() as i32;
        Indices::iter_fill(Indices::ZERO, Indices::new(side, side))
            .map(|p| Indices::new(2 * p.x + 1, 2 * p.y + 1))
    }

    /// Dense index of a lattice cell, row-major.
    pub fn index_of(&self, pos: Indices) -> Option<usize> {
        self.contains(pos)
            .then(|| ((pos.y - 1) / 2) as usize * self.side() + ((pos.x - 1) / 2) as usize)
    }

    /// Lattice cells two steps away, with the wall cell between them at the midpoint.
    pub fn neighbors(&self, pos: Indices) -> SmallVec<[Indices; 4]> {
        Indices::DIRECTIONS
            .into_iter()
            .map(|dir| pos + dir * 2)
            .filter(|&next| self.contains(next))
            .collect()
    }
}

/// Opens a single cell.
pub(crate) fn carve(model: &mut Model, pos: Indices) {
    model.update_model(pos.x, pos.y, CellState::UnvisitedCell);
}

/// Resets the model to solid walls before carving. Returns `false` when the requested size
/// doesn't match the model, in which case nothing should be carved.
pub(crate) fn prepare_model(size: usize, model: &mut Model) -> bool {
    if size != model.size() {
        warn!(
            "Generator asked for size {} but the model has size {}",
            size,
            model.size()
        );
        return false;
    }

    model.regenerate(WallFill.create(size));
    true
}

/// Shape of the passage graph of a matrix: passable cells are nodes, 4-adjacent passable
/// pairs are edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageStats {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
}

impl PassageStats {
    pub fn of(matrix: &Array2D<CellState>) -> Self {
        let passable = |pos: Indices| matrix.get(pos).is_some_and(|s| s.is_passable());

        let mut nodes = 0;
        let mut edges = 0;
        for pos in matrix.iter_pos().filter(|&p| passable(p)) {
            nodes += 1;
            edges += [Indices::RIGHT, Indices::DOWN]
                .into_iter()
                .filter(|&dir| passable(pos + dir))
                .count();
        }

        let mut seen = Array2D::new(false, matrix.width(), matrix.height());
        let mut components = 0;
        let mut stack = Vec::new();
        for pos in matrix.iter_pos() {
            if !passable(pos) || seen[pos] {
                continue;
            }
            components += 1;
            seen[pos] = true;
            stack.push(pos);
            while let Some(current) = stack.pop() {
                for next in current.neighbors() {
                    if passable(next) && !seen[next] {
                        seen[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        PassageStats {
            nodes,
            edges,
            components,
        }
    }

    /// A spanning tree: one connected component without cycles.
    pub fn is_tree(&self) -> bool {
        self.nodes > 0 && self.components == 1 && self.edges + 1 == self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_of_odd_grid() {
        let lattice = CarveLattice::new(7);
        assert_eq!(lattice.side(), 3);
        assert_eq!(lattice.cell_count(), 9);
        assert!(lattice.contains(Indices::new(5, 5)));
        assert!(!lattice.contains(Indices::new(6, 5)));
        assert!(!lattice.contains(Indices::new(7, 1)));
        assert_eq!(lattice.cells().count(), 9);
        assert_eq!(lattice.index_of(Indices::new(5, 3)), Some(5));
        assert_eq!(lattice.index_of(Indices::new(2, 3)), None);
    }

    #[test]
    fn lattice_of_even_grid_leaves_last_row_walled() {
        let lattice = CarveLattice::new(6);
        assert_eq!(lattice.side(), 2);
        assert!(lattice.contains(Indices::new(3, 3)));
        assert!(!lattice.contains(Indices::new(5, 5)));
    }

    #[test]
    fn tiny_lattices() {
        assert_eq!(CarveLattice::new(0).cell_count(), 0);
        assert_eq!(CarveLattice::new(2).start(), None);
        assert_eq!(CarveLattice::new(3).cell_count(), 1);
        assert!(CarveLattice::new(3).neighbors(Indices::new(1, 1)).is_empty());
    }

    #[test]
    fn stats_detect_cycles() {
        let mut matrix = Array2D::new_square(CellState::Wall, 4);
        for pos in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            matrix[Indices::from(pos)] = CellState::UnvisitedCell;
        }
        let stats = PassageStats::of(&matrix);
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.components, 1);
        assert!(!stats.is_tree());

        matrix[Indices::new(2, 2)] = CellState::Wall;
        assert!(PassageStats::of(&matrix).is_tree());
    }
}
