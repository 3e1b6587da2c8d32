//! The two factions and per-side data storage.
//!
//! ## Side
//!
//! Creationist (human, moves first) or Evolutionist (scripted AI).
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, for rosters and per-side tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing factions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Creationist,
    Evolutionist,
}

impl Side {
    /// Both sides in play order.
    pub const ALL: [Side; 2] = [Side::Creationist, Side::Evolutionist];

    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Creationist => Side::Evolutionist,
            Side::Evolutionist => Side::Creationist,
        }
    }

    /// Storage index (Creationist = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Creationist => 0,
            Side::Evolutionist => 1,
        }
    }

    /// Sign applied to oracle encodings (+1 Creationist, -1 Evolutionist).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Side::Creationist => 1,
            Side::Evolutionist => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Creationist => f.write_str("Creationist"),
            Side::Evolutionist => f.write_str("Evolutionist"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ```
/// use origins_engine::core::{Side, SideMap};
///
/// let mut captured: SideMap<u32> = SideMap::with_default();
/// captured[Side::Evolutionist] += 1;
/// assert_eq!(captured[Side::Creationist], 0);
/// assert_eq!(captured[Side::Evolutionist], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Creationist), factory(Side::Evolutionist)],
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
