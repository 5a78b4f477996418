//! Integer grid coordinates.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

/// A 2D integer grid coordinate.
///
/// `GridVec` is an immutable value type; every operation returns a new
/// vector. The derived ordering compares `x` first and `y` second, which
/// is the ordering used for the canonical sorted cell lists in
/// [`Polyomino`](crate::Polyomino).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridVec {
    pub x: i32,
    pub y: i32,
}

impl GridVec {
    pub const ZERO: GridVec = GridVec::new(0, 0);
    pub const ONE: GridVec = GridVec::new(1, 1);
    pub const RIGHT: GridVec = GridVec::new(1, 0);
    pub const UP: GridVec = GridVec::new(0, 1);
    pub const LEFT: GridVec = GridVec::new(-1, 0);
    pub const DOWN: GridVec = GridVec::new(0, -1);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: GridVec) -> i32 {
        self.x * other.x + self.y * other.y
    }

    pub fn manhattan_distance(self, other: GridVec) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn squared_magnitude(self) -> i32 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        f64::from(self.squared_magnitude()).sqrt()
    }

    /// The four orthogonally adjacent coordinates, in the order
    /// +x, +y, -x, -y.
    pub fn neighbors(self) -> [GridVec; 4] {
        [
            self + Self::RIGHT,
            self + Self::UP,
            self + Self::LEFT,
            self + Self::DOWN,
        ]
    }
}

impl Add for GridVec {
    type Output = GridVec;

    fn add(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridVec {
    type Output = GridVec;

    fn sub(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for GridVec {
    type Output = GridVec;

    fn mul(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// Component-wise division. Truncating; panics on a zero component,
/// the same as any other integer division.
impl Div for GridVec {
    type Output = GridVec;

    fn div(self, rhs: GridVec) -> GridVec {
        GridVec::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<i32> for GridVec {
    type Output = GridVec;

    fn mul(self, scalar: i32) -> GridVec {
        GridVec::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<GridVec> for i32 {
    type Output = GridVec;

    fn mul(self, vector: GridVec) -> GridVec {
        vector * self
    }
}

impl Div<i32> for GridVec {
    type Output = GridVec;

    fn div(self, scalar: i32) -> GridVec {
        GridVec::new(self.x / scalar, self.y / scalar)
    }
}

/// Divides the scalar by each component.
impl Div<GridVec> for i32 {
    type Output = GridVec;

    fn div(self, vector: GridVec) -> GridVec {
        GridVec::new(self / vector.x, self / vector.y)
    }
}

impl fmt::Display for GridVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
