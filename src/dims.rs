use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Coordinate of a single cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Indices {
    pub x: i32,
    pub y: i32,
}

impl Indices {
    pub const ZERO: Indices = Indices { x: 0, y: 0 };

    pub const LEFT: Indices = Indices { x: -1, y: 0 };
    pub const RIGHT: Indices = Indices { x: 1, y: 0 };
    pub const UP: Indices = Indices { x: 0, y: -1 };
    pub const DOWN: Indices = Indices { x: 0, y: 1 };

    /// Offsets of the 4-connected neighborhood, always in this order.
    pub const DIRECTIONS: [Indices; 4] = [Self::LEFT, Self::RIGHT, Self::UP, Self::DOWN];

    pub const fn new(x: i32, y: i32) -> Self {
        Indices { x, y }
    }

    pub fn manhattan(self, other: Indices) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Neighbors in the 4-connected neighborhood, not bounds checked.
    pub fn neighbors(self) -> impl Iterator<Item = Indices> {
        Self::DIRECTIONS.into_iter().map(move |dir| self + dir)
    }

    /// Cell halfway between `self` and `other`, used to find the wall between two
    /// passage cells that are two steps apart.
    pub fn midpoint(self, other: Indices) -> Indices {
        Indices::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    pub fn iter_fill(from: Indices, to: Indices) -> impl Iterator<Item = Indices> {
        (from.y..to.y).flat_map(move |y| (from.x..to.x).map(move |x| Indices::new(x, y)))
    }
}

impl Add for Indices {
    type Output = Indices;

    fn add(self, other: Indices) -> Indices {
        Indices::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Indices {
    type Output = Indices;

    fn sub(self, other: Indices) -> Indices {
        Indices::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Indices {
    type Output = Indices;

    fn mul(self, other: i32) -> Indices {
        Indices::new(self.x * other, self.y * other)
    }
}

impl From<(i32, i32)> for Indices {
    fn from(tuple: (i32, i32)) -> Self {
        Indices::new(tuple.0, tuple.1)
    }
}

impl From<Indices> for (i32, i32) {
    fn from(val: Indices) -> Self {
        (val.x, val.y)
    }
}
