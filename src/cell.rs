use std::{
    fmt,
    ops::{Add, Sub},
};

/// A position on the unbounded plane.
///
/// Coordinates are `i64`. Arithmetic wraps at the type bounds, so the plane
/// closes on itself at ±2^63 instead of overflowing.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! cell {
    ($x:expr, $y:expr) => {
        $crate::Cell { x: $x, y: $y }
    };
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        cell!(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        cell!(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Cell {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        cell!(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(cell!(0, 0).offset(-1, 1), cell!(-1, 1));
        assert_eq!(cell!(3, -7) + cell!(1, 1), cell!(4, -6));
        assert_eq!(cell!(3, -7) - cell!(1, 1), cell!(2, -8));
    }

    #[test]
    fn test_offset_wraps_at_bounds() {
        assert_eq!(cell!(i64::MAX, 0).offset(1, 0), cell!(i64::MIN, 0));
        assert_eq!(cell!(0, i64::MIN).offset(0, -1), cell!(0, i64::MAX));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Cell::from((2, -5)), Cell::new(2, -5));
        assert_eq!(cell!(2, -5).to_string(), "(2, -5)");
    }
}
