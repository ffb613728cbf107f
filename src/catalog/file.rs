//! Catalog loaded from a YAML or JSON document.
//!
//! ```yaml
//! default:
//!   - { id: "11", name: Black, hex: "#212121", availability: 250 }
//! pieces:
//!   "3024":
//!     - { id: "5", name: Red, hex: "#B30006", availability: 40 }
//! ```
//!
//! Piece types without their own list fall back to `default`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, Result};
use crate::types::PieceType;

use super::{CatalogEntry, CatalogError, CatalogSource};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    /// Colours for piece types that have no list of their own.
    pub default: Vec<CatalogEntry>,

    /// Colours per piece reference.
    pub pieces: BTreeMap<String, Vec<CatalogEntry>>,
}

impl CatalogDocument {
    /// Parse a YAML document (JSON is accepted too, being valid YAML).
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| BrickError::Parse {
            message: format!("Invalid catalog: {}", e),
            help: Some("Expected `default:` and/or `pieces:` lists of {id, name, hex, availability}".to_string()),
        })
    }

    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| BrickError::Parse {
            message: format!("Invalid catalog: {}", e),
            help: Some("Expected `default` and/or `pieces` lists of {id, name, hex, availability}".to_string()),
        })
    }
}

/// Catalog backed by a document on disk, read once at load time.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    name: String,
    document: CatalogDocument,
}

impl FileCatalog {
    /// Load a catalog file; `.json` files are parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrickError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read catalog: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let document = if is_json {
            CatalogDocument::parse_json(&content)?
        } else {
            CatalogDocument::parse_yaml(&content)?
        };

        Ok(Self::from_document(display_name(path), document))
    }

    pub fn from_document(name: impl Into<String>, document: CatalogDocument) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}

impl CatalogSource for FileCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_colors(&self, piece_type: &PieceType) -> std::result::Result<Vec<CatalogEntry>, CatalogError> {
        if let Some(entries) = self.document.pieces.get(piece_type.reference()) {
            return Ok(entries.clone());
        }
        if !self.document.default.is_empty() {
            return Ok(self.document.default.clone());
        }
        Err(CatalogError::UnknownPieceType(piece_type.to_string()))
    }
}
