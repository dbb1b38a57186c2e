use std::ops;

use crate::dims::Indices;

/// Dense square storage indexed by [`Indices`].
///
/// Cloning produces an independent copy of the buffer, which is what listeners get on
/// reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Indices {
        Indices::new(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Indices) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Indices> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Indices::new(x as i32, y as i32))
    }

    pub fn get(&self, pos: Indices) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Indices) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Positions in row-major order, matching [`Array2D::iter`].
    pub fn iter_pos(&self) -> impl Iterator<Item = Indices> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }

    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }

    pub fn new_square(item: T, size: usize) -> Self {
        Self::new(item, size, size)
    }
}

impl<T> ops::Index<Indices> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Indices) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Indices> for Array2D<T> {
    fn index_mut(&mut self, index: Indices) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_none() {
        let arr = Array2D::new(0u8, 3, 2);
        assert_eq!(arr.get(Indices::new(2, 1)), Some(&0));
        assert_eq!(arr.get(Indices::new(3, 0)), None);
        assert_eq!(arr.get(Indices::new(0, 2)), None);
        assert_eq!(arr.get(Indices::new(-1, 0)), None);
    }

    #[test]
    fn idx_round_trip() {
        let arr = Array2D::new_square('.', 4);
        for (i, pos) in arr.iter_pos().enumerate() {
            assert_eq!(arr.dim_to_idx(pos), Some(i));
        }
        assert_eq!(arr.idx_to_dim(16), None);
    }

    #[test]
    fn clone_does_not_alias() {
        let mut a = Array2D::new_square(1, 3);
        let b = a.clone();
        a[Indices::new(1, 1)] = 5;
        assert_eq!(b[Indices::new(1, 1)], 1);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }
}
