//! Grid coordinates and the eight compass directions.
//!
//! Rows grow downward and columns grow to the right. A `Direction` is one of
//! the eight unit vectors around a cell; `(0, 0)` is never a direction.

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `steps` cells along `direction`.
    ///
    /// Returns `None` if the result leaves a grid of side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let row = offset(self.row, direction.d_row, steps)?;
        let col = offset(self.col, direction.d_col, steps)?;
        (row < size && col < size).then_some(Self { row, col })
    }

    /// Chebyshev (king-move) distance between two positions.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

fn offset(base: usize, delta: i8, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

/// A unit step between two neighbouring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_WEST: Self = Self::new(-1, -1);
    pub const NORTH_EAST: Self = Self::new(-1, 1);

    /// All eight directions: → ↓ ↘ ↙ ← ↑ ↖ ↗.
    pub const ALL: [Self; 8] = [
        Self::EAST,
        Self::SOUTH,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH,
        Self::NORTH_WEST,
        Self::NORTH_EAST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// The direction leading from `from` to `to`, if they are neighbours.
    ///
    /// ```
    /// use rust_wordsearch::core::{Direction, Position};
    ///
    /// let a = Position::new(3, 3);
    /// assert_eq!(Direction::between(a, Position::new(2, 4)), Some(Direction::NORTH_EAST));
    /// assert_eq!(Direction::between(a, a), None);
    /// assert_eq!(Direction::between(a, Position::new(5, 3)), None);
    /// ```
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        if from.chebyshev(to) != 1 {
            return None;
        }
        Some(Self::new(sign(from.row, to.row), sign(from.col, to.col)))
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }
}

fn sign(from: usize, to: usize) -> i8 {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_within_bounds() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::EAST, 2, 5), Some(Position::new(2, 4)));
        assert_eq!(p.step(Direction::NORTH_WEST, 2, 5), Some(Position::new(0, 0)));
        assert_eq!(p.step(Direction::SOUTH_WEST, 0, 5), Some(p));
    }

    #[test]
    fn test_step_out_of_bounds() {
        let p = Position::new(0, 4);
        assert_eq!(p.step(Direction::NORTH, 1, 5), None);
        assert_eq!(p.step(Direction::EAST, 1, 5), None);
        assert_eq!(p.step(Direction::SOUTH, 5, 5), None);
    }

    #[test]
    fn test_chebyshev() {
        let p = Position::new(4, 4);
        assert_eq!(p.chebyshev(p), 0);
        assert_eq!(p.chebyshev(Position::new(5, 5)), 1);
        assert_eq!(p.chebyshev(Position::new(1, 6)), 3);
    }

    #[test]
    fn test_all_directions_distinct_units() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.d_row.abs() <= 1 && a.d_col.abs() <= 1);
            assert!(a.d_row != 0 || a.d_col != 0);
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_between_round_trips_step() {
        let origin = Position::new(5, 5);
        for dir in Direction::ALL {
            let next = origin.step(dir, 1, 10).unwrap();
            assert_eq!(Direction::between(origin, next), Some(dir));
            assert_eq!(Direction::between(next, origin), Some(dir.reversed()));
        }
    }
}
