//! Piece types, sizes, and baseplates.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, Result};

use super::BrickColour;

/// Catalog reference identifying a mould family (e.g. `3024` for a 1x1 plate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceType(String);

/// Friendly names accepted on the command line.
const NAMED_TYPES: [(&str, &str); 4] = [
    ("plate", "3024"),
    ("plate_round", "4073"),
    ("slope", "54200"),
    ("tile", "3070"),
];

impl PieceType {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn plate() -> Self {
        Self::new("3024")
    }

    pub fn plate_round() -> Self {
        Self::new("4073")
    }

    pub fn slope() -> Self {
        Self::new("54200")
    }

    pub fn tile() -> Self {
        Self::new("3070")
    }

    /// The catalog reference.
    pub fn reference(&self) -> &str {
        &self.0
    }

    /// Friendly name when the reference is a known mould.
    pub fn label(&self) -> Option<&'static str> {
        NAMED_TYPES
            .iter()
            .find(|(_, reference)| *reference == self.0)
            .map(|(name, _)| *name)
    }

    /// Friendly names, for help text.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMED_TYPES.iter().map(|(name, _)| *name)
    }
}

impl FromStr for PieceType {
    type Err = BrickError;

    /// Accepts a friendly name (`plate`, `tile`, ...) or a raw catalog reference.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BrickError::Config {
                message: "Empty piece type".to_string(),
                help: Some(format!(
                    "Use one of: {}, or a catalog reference",
                    Self::names().collect::<Vec<_>>().join(", ")
                )),
            });
        }

        let lower = s.to_lowercase();
        let reference = NAMED_TYPES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, reference)| *reference)
            .unwrap_or(s);
        Ok(Self::new(reference))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Piece footprint in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceSize {
    pub width: u32,
    pub height: u32,
}

impl PieceSize {
    pub const UNIT: Self = Self::new(1, 1);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PieceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Supported baseplate sides and their catalog references.
const BASEPLATES: [(u32, &str); 6] = [
    (14, "bp02b"),
    (16, "3867"),
    (24, "367a"),
    (32, "3811"),
    (40, "bb0040"),
    (48, "4186"),
];

/// A square baseplate the mosaic is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Baseplate {
    side: u32,
    reference: &'static str,
}

impl Baseplate {
    /// Look up a baseplate by side length.
    pub fn from_side(side: u32) -> Result<Self> {
        BASEPLATES
            .iter()
            .find(|(s, _)| *s == side)
            .map(|&(side, reference)| Self { side, reference })
            .ok_or_else(|| BrickError::Config {
                message: format!("No baseplate with size {}x{}", side, side),
                help: Some(format!(
                    "Supported sizes: {}",
                    Self::supported_sides()
                        .map(|s| s.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            })
    }

    pub fn supported_sides() -> impl Iterator<Item = u32> {
        BASEPLATES.iter().map(|(side, _)| *side)
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn size(&self) -> PieceSize {
        PieceSize::new(self.side, self.side)
    }

    pub fn piece_type(&self) -> PieceType {
        PieceType::new(self.reference)
    }
}

/// One physical piece assigned to a grid cell.
///
/// Two pieces are interchangeable when type, colour id, and size match;
/// equality and hashing follow that rule.
#[derive(Debug, Clone)]
pub struct Piece {
    pub piece_type: PieceType,
    pub colour: Arc<BrickColour>,
    pub size: PieceSize,
}

impl Piece {
    pub fn new(piece_type: PieceType, colour: Arc<BrickColour>, size: PieceSize) -> Self {
        Self {
            piece_type,
            colour,
            size,
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.piece_type == other.piece_type
            && self.colour.id() == other.colour.id()
            && self.size == other.size
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece_type.hash(state);
        self.colour.id().hash(state);
        self.size.hash(state);
    }
}
