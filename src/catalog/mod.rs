//! Colour catalogs.
//!
//! A [`CatalogSource`] answers "which colours exist for this piece type, and
//! how many are available". The [`PaletteProvider`] wraps a source, turns its
//! entries into [`BrickColour`](crate::types::BrickColour)s, and caches the
//! result per piece type for the rest of the run.

mod builtin;
mod file;
mod provider;

pub use builtin::BuiltinCatalog;
pub use file::{CatalogDocument, FileCatalog};
pub use provider::{Palette, PaletteCache, PaletteProvider};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PieceType;

/// One colour row as reported by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub hex: String,
    #[serde(default)]
    pub availability: Option<u32>,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hex: impl Into<String>,
        availability: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex: hex.into(),
            availability,
        }
    }
}

/// Failure reported by a catalog collaborator.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog has no colours for piece {0}")]
    UnknownPieceType(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

/// Something that can list the colours available for a piece type.
pub trait CatalogSource: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Fetch the ordered colour list for `piece_type`.
    fn fetch_colors(&self, piece_type: &PieceType) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// In-memory catalog keyed by piece type.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: HashMap<PieceType, Vec<CatalogEntry>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, piece_type: PieceType, entries: Vec<CatalogEntry>) -> Self {
        self.insert(piece_type, entries);
        self
    }

    pub fn insert(&mut self, piece_type: PieceType, entries: Vec<CatalogEntry>) {
        self.entries.insert(piece_type, entries);
    }
}

impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_colors(&self, piece_type: &PieceType) -> Result<Vec<CatalogEntry>, CatalogError> {
        self.entries
            .get(piece_type)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownPieceType(piece_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_lookup() {
        let catalog = StaticCatalog::new().with(
            PieceType::plate(),
            vec![CatalogEntry::new("5", "Red", "#B30006", Some(20))],
        );

        let entries = catalog.fetch_colors(&PieceType::plate()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Red");

        let err = catalog.fetch_colors(&PieceType::tile()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPieceType(ref t) if t == "3070"));
    }

    #[test]
    fn test_entry_availability_is_optional() {
        let entry: CatalogEntry =
            serde_yaml::from_str("{ id: \"1\", name: White, hex: \"#FFFFFF\" }").unwrap();
        assert_eq!(entry.availability, None);
    }
}
