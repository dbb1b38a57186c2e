use super::{BatchGenerator, CellState};
use crate::array::Array2D;

/// Solid block of walls, the substrate every maze is carved out of.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallFill;

impl BatchGenerator for WallFill {
    fn create(&self, size: usize) -> Array2D<CellState> {
        Array2D::new_square(CellState::Wall, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_walls() {
        let matrix = WallFill.create(9);
        assert_eq!((matrix.width(), matrix.height()), (9, 9));
        assert!(matrix.iter().all(|&s| s == CellState::Wall));
    }

    #[test]
    fn fresh_allocation_each_time() {
        let a = WallFill.create(3);
        let b = WallFill.create(3);
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert!(WallFill.create(0).is_empty());
    }
}
