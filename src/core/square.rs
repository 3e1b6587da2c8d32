//! Board coordinates and ray directions.
//!
//! A `Square` is a plain coordinate pair. It may hold off-board values while a
//! ray steps past the edge; `in_bounds` separates the two cases.

use serde::{Deserialize, Serialize};

/// Number of files (columns).
pub const BOARD_WIDTH: i8 = 10;

/// Number of ranks (rows).
pub const BOARD_HEIGHT: i8 = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// A board coordinate. `x` is the column, `y` the row (0 = Creationist home row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    /// Create a square. No bounds check.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check whether the square lies on the 10x8 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }

    /// Row-major cell index (`y * 10 + x`), or `None` off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.y as usize * BOARD_WIDTH as usize + self.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Square::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                x: (index % BOARD_WIDTH as usize) as i8,
                y: (index / BOARD_WIDTH as usize) as i8,
            })
        } else {
            None
        }
    }

    /// Step one square in the given direction.
    #[must_use]
    pub const fn offset(self, dir: Direction) -> Self {
        Self {
            x: self.x.saturating_add(dir.dx),
            y: self.y.saturating_add(dir.dy),
        }
    }

    /// Iterate over every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELL_COUNT).filter_map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit step along one of the eight compass rays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub const RIGHT: Direction = Direction::new(1, 0);
    pub const LEFT: Direction = Direction::new(-1, 0);
    pub const UP: Direction = Direction::new(0, 1);
    pub const DOWN: Direction = Direction::new(0, -1);
    pub const UP_RIGHT: Direction = Direction::new(1, 1);
    pub const UP_LEFT: Direction = Direction::new(-1, 1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, -1);
    pub const DOWN_LEFT: Direction = Direction::new(-1, -1);
}
