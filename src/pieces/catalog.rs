//! Static piece catalog.
//!
//! Every piece variant has one catalog entry: display name, owning side,
//! element, movement pattern and oracle encoding. The table is immutable for
//! the life of the program.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Direction, Side};
use crate::error::{EngineError, EngineResult};

/// Piece variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceVariant {
    Earth,
    Water,
    Fire,
    Air,
    Man,
    Woman,
    EvoEarth,
    EvoWater,
    EvoFire,
    EvoAir,
    ApeMan,
    ApeWoman,
}

/// Elemental affinity of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Earth,
    Water,
    Fire,
    Air,
}

/// Movement pattern class: which rays a piece casts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementPattern {
    /// All eight compass rays.
    Omnidirectional,
    /// Sideways, up, and the two upward diagonals.
    ForwardDiagonal,
    /// Sideways, down, and the two downward diagonals.
    BackwardDiagonal,
}

const OMNIDIRECTIONAL: [Direction; 8] = [
    Direction::RIGHT,
    Direction::UP,
    Direction::UP_RIGHT,
    Direction::LEFT,
    Direction::DOWN,
    Direction::DOWN_LEFT,
    Direction::UP_LEFT,
    Direction::DOWN_RIGHT,
];

const FORWARD_DIAGONAL: [Direction; 5] = [
    Direction::RIGHT,
    Direction::LEFT,
    Direction::UP,
    Direction::UP_RIGHT,
    Direction::UP_LEFT,
];

const BACKWARD_DIAGONAL: [Direction; 5] = [
    Direction::RIGHT,
    Direction::LEFT,
    Direction::DOWN,
    Direction::DOWN_RIGHT,
    Direction::DOWN_LEFT,
];

impl MovementPattern {
    /// Ray directions in emission order.
    ///
    /// The order is significant: the default AI takes the first generated move.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            MovementPattern::Omnidirectional => &OMNIDIRECTIONAL,
            MovementPattern::ForwardDiagonal => &FORWARD_DIAGONAL,
            MovementPattern::BackwardDiagonal => &BACKWARD_DIAGONAL,
        }
    }
}

/// One row of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub variant: PieceVariant,
    pub name: &'static str,
    pub side: Side,
    pub element: Option<Element>,
    pub pattern: MovementPattern,
    pub encoding: i8,
}

const fn entry(
    variant: PieceVariant,
    name: &'static str,
    side: Side,
    element: Option<Element>,
    pattern: MovementPattern,
    magnitude: i8,
) -> CatalogEntry {
    CatalogEntry {
        variant,
        name,
        side,
        element,
        pattern,
        encoding: magnitude * side.sign(),
    }
}

use MovementPattern::{BackwardDiagonal, ForwardDiagonal, Omnidirectional};
use Side::{Creationist, Evolutionist};

/// Catalog rows, indexed by `PieceVariant as usize`.
static CATALOG: [CatalogEntry; 12] = [
    entry(PieceVariant::Earth, "earth", Creationist, Some(Element::Earth), Omnidirectional, 1),
    entry(PieceVariant::Water, "water", Creationist, Some(Element::Water), Omnidirectional, 2),
    entry(PieceVariant::Fire, "fire", Creationist, Some(Element::Fire), Omnidirectional, 3),
    entry(PieceVariant::Air, "air", Creationist, Some(Element::Air), Omnidirectional, 4),
    entry(PieceVariant::Man, "man", Creationist, None, ForwardDiagonal, 5),
    entry(PieceVariant::Woman, "woman", Creationist, None, ForwardDiagonal, 6),
    entry(PieceVariant::EvoEarth, "evolutionist_earth", Evolutionist, Some(Element::Earth), Omnidirectional, 1),
    entry(PieceVariant::EvoWater, "evolutionist_water", Evolutionist, Some(Element::Water), Omnidirectional, 2),
    entry(PieceVariant::EvoFire, "evolutionist_fire", Evolutionist, Some(Element::Fire), Omnidirectional, 3),
    entry(PieceVariant::EvoAir, "evolutionist_air", Evolutionist, Some(Element::Air), Omnidirectional, 4),
    entry(PieceVariant::ApeMan, "ape_man", Evolutionist, None, BackwardDiagonal, 5),
    entry(PieceVariant::ApeWoman, "ape_woman", Evolutionist, None, BackwardDiagonal, 6),
];

/// Read-only access to the piece catalog.
///
/// ```
/// use origins_engine::core::Side;
/// use origins_engine::pieces::{PieceCatalog, PieceVariant};
///
/// let fire = PieceCatalog::variant_of("evolutionist_fire").unwrap();
/// assert_eq!(fire, PieceVariant::EvoFire);
/// assert_eq!(PieceCatalog::side_of(fire), Side::Evolutionist);
/// assert_eq!(PieceCatalog::encoding_of(fire), -3);
/// ```
pub struct PieceCatalog;

impl PieceCatalog {
    /// Look up a variant by its display name.
    pub fn variant_of(name: &str) -> EngineResult<PieceVariant> {
        CATALOG
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.variant)
            .ok_or_else(|| EngineError::UnknownVariant(name.to_string()))
    }

    #[must_use]
    pub fn entry(variant: PieceVariant) -> &'static CatalogEntry {
        &CATALOG[variant as usize]
    }

    #[must_use]
    pub fn side_of(variant: PieceVariant) -> Side {
        Self::entry(variant).side
    }

    #[must_use]
    pub fn pattern_of(variant: PieceVariant) -> MovementPattern {
        Self::entry(variant).pattern
    }

    /// Signed oracle encoding: magnitude 1-6, positive for Creationist.
    #[must_use]
    pub fn encoding_of(variant: PieceVariant) -> i8 {
        Self::entry(variant).encoding
    }

    #[must_use]
    pub fn element_of(variant: PieceVariant) -> Option<Element> {
        Self::entry(variant).element
    }

    #[must_use]
    pub fn name_of(variant: PieceVariant) -> &'static str {
        Self::entry(variant).name
    }

    /// Iterate over every catalog entry.
    pub fn all() -> impl Iterator<Item = &'static CatalogEntry> {
        CATALOG.iter()
    }
}

impl PieceVariant {
    #[must_use]
    pub fn side(self) -> Side {
        PieceCatalog::side_of(self)
    }

    #[must_use]
    pub fn pattern(self) -> MovementPattern {
        PieceCatalog::pattern_of(self)
    }

    #[must_use]
    pub fn encoding(self) -> i8 {
        PieceCatalog::encoding_of(self)
    }

    #[must_use]
    pub fn element(self) -> Option<Element> {
        PieceCatalog::element_of(self)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        PieceCatalog::name_of(self)
    }

    /// Fire variants ignore neutral-square blocks and claim squares they cross.
    #[must_use]
    pub const fn is_fire(self) -> bool {
        matches!(self, PieceVariant::Fire | PieceVariant::EvoFire)
    }

    /// Man, Woman, ApeMan, ApeWoman.
    #[must_use]
    pub fn is_progenitor(self) -> bool {
        self.element().is_none()
    }
}

impl FromStr for PieceVariant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceCatalog::variant_of(s)
    }
}

impl std::fmt::Display for PieceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_rows_match_variant_index() {
        for (i, e) in PieceCatalog::all().enumerate() {
            assert_eq!(e.variant as usize, i, "row {} out of place", e.name);
        }
        assert_eq!(PieceCatalog::all().count(), 12);
    }

    #[test]
    fn test_name_lookup_round_trips() {
        for e in PieceCatalog::all() {
            assert_eq!(PieceCatalog::variant_of(e.name).unwrap(), e.variant);
            assert_eq!(e.variant.to_string(), e.name);
        }
    }

    #[test]
    fn test_unknown_variant() {
        let err = PieceCatalog::variant_of("dragon").unwrap_err();
        assert_eq!(err, EngineError::UnknownVariant("dragon".into()));
        assert!("Fire".parse::<PieceVariant>().is_err());
    }

    #[test]
    fn test_encodings() {
        let expected = [
            ("earth", 1),
            ("water", 2),
            ("fire", 3),
            ("air", 4),
            ("man", 5),
            ("woman", 6),
            ("evolutionist_earth", -1),
            ("evolutionist_water", -2),
            ("evolutionist_fire", -3),
            ("evolutionist_air", -4),
            ("ape_man", -5),
            ("ape_woman", -6),
        ];
        for (name, code) in expected {
            let v: PieceVariant = name.parse().unwrap();
            assert_eq!(v.encoding(), code, "{}", name);
        }
    }

    #[test]
    fn test_sides_and_patterns() {
        assert_eq!(PieceVariant::Air.side(), Side::Creationist);
        assert_eq!(PieceVariant::ApeWoman.side(), Side::Evolutionist);

        assert_eq!(PieceVariant::EvoWater.pattern(), MovementPattern::Omnidirectional);
        assert_eq!(PieceVariant::Woman.pattern(), MovementPattern::ForwardDiagonal);
        assert_eq!(PieceVariant::ApeMan.pattern(), MovementPattern::BackwardDiagonal);
    }

    #[test]
    fn test_direction_order() {
        let dirs: Vec<(i8, i8)> = MovementPattern::Omnidirectional
            .directions()
            .iter()
            .map(|d| (d.dx, d.dy))
            .collect();
        assert_eq!(
            dirs,
            vec![(1, 0), (0, 1), (1, 1), (-1, 0), (0, -1), (-1, -1), (-1, 1), (1, -1)]
        );

        let fwd: Vec<(i8, i8)> = MovementPattern::ForwardDiagonal
            .directions()
            .iter()
            .map(|d| (d.dx, d.dy))
            .collect();
        assert_eq!(fwd, vec![(1, 0), (-1, 0), (0, 1), (1, 1), (-1, 1)]);

        let back: Vec<(i8, i8)> = MovementPattern::BackwardDiagonal
            .directions()
            .iter()
            .map(|d| (d.dx, d.dy))
            .collect();
        assert_eq!(back, vec![(1, 0), (-1, 0), (0, -1), (1, -1), (-1, -1)]);
    }

    #[test]
    fn test_fire_and_progenitor_flags() {
        assert!(PieceVariant::Fire.is_fire());
        assert!(PieceVariant::EvoFire.is_fire());
        assert!(!PieceVariant::Water.is_fire());

        assert!(PieceVariant::Man.is_progenitor());
        assert!(PieceVariant::ApeWoman.is_progenitor());
        assert!(!PieceVariant::EvoEarth.is_progenitor());
        assert_eq!(PieceVariant::EvoEarth.element(), Some(Element::Earth));
    }
}
