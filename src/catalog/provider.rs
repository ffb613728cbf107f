//! Per-piece-type palette cache over a catalog source.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::{BrickError, Result};
use crate::types::{BrickColour, PieceType};

use super::{CatalogEntry, CatalogSource};

/// The ordered, non-empty colour list for one piece type.
#[derive(Debug)]
pub struct Palette {
    piece_type: PieceType,
    colours: Vec<Arc<BrickColour>>,
}

impl Palette {
    pub fn piece_type(&self) -> &PieceType {
        &self.piece_type
    }

    /// Colours in catalog order.
    pub fn colours(&self) -> &[Arc<BrickColour>] {
        &self.colours
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<BrickColour>> {
        self.colours.iter()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false for palettes handed out by the provider.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Find a colour by exact display name.
    pub fn by_name(&self, name: &str) -> Option<&Arc<BrickColour>> {
        self.colours.iter().find(|c| c.name() == name)
    }

    /// Find a colour by catalog id.
    pub fn by_id(&self, id: &str) -> Option<&Arc<BrickColour>> {
        self.colours.iter().find(|c| c.id() == id)
    }
}

/// Palettes fetched so far, keyed by piece type.
///
/// Entries are written once and never replaced or evicted.
#[derive(Debug, Default)]
pub struct PaletteCache {
    palettes: RwLock<HashMap<PieceType, Arc<Palette>>>,
}

impl PaletteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, piece_type: &PieceType) -> Option<Arc<Palette>> {
        let palettes = self.palettes.read().unwrap_or_else(PoisonError::into_inner);
        palettes.get(piece_type).cloned()
    }

    /// Store a palette unless one is already cached; returns the cached one.
    fn insert(&self, palette: Palette) -> Arc<Palette> {
        let mut palettes = self.palettes.write().unwrap_or_else(PoisonError::into_inner);
        palettes
            .entry(palette.piece_type.clone())
            .or_insert_with(|| Arc::new(palette))
            .clone()
    }

    pub fn contains(&self, piece_type: &PieceType) -> bool {
        self.get(piece_type).is_some()
    }

    pub fn len(&self) -> usize {
        self.palettes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hands out cached palettes, fetching from the catalog on first use.
pub struct PaletteProvider {
    source: Box<dyn CatalogSource>,
    cache: PaletteCache,
}

impl PaletteProvider {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: PaletteCache::new(),
        }
    }

    /// Name of the underlying catalog.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn cache(&self) -> &PaletteCache {
        &self.cache
    }

    /// The palette for `piece_type`.
    ///
    /// Repeated calls return the same `Arc` without touching the catalog.
    pub fn colors_for(&self, piece_type: &PieceType) -> Result<Arc<Palette>> {
        if let Some(palette) = self.cache.get(piece_type) {
            return Ok(palette);
        }

        debug!(piece = %piece_type, source = self.source.name(), "fetching palette");
        let entries = self
            .source
            .fetch_colors(piece_type)
            .map_err(|e| self.unavailable(piece_type, e.to_string()))?;

        if entries.is_empty() {
            return Err(self.unavailable(piece_type, "catalog returned no colours".to_string()));
        }

        let colours = entries
            .iter()
            .map(|entry| self.convert(piece_type, entry))
            .collect::<Result<Vec<_>>>()?;

        debug!(piece = %piece_type, colours = colours.len(), "palette cached");
        Ok(self.cache.insert(Palette {
            piece_type: piece_type.clone(),
            colours,
        }))
    }

    /// Populate the cache for every given piece type.
    pub fn warm<'a>(&self, piece_types: impl IntoIterator<Item = &'a PieceType>) -> Result<()> {
        for piece_type in piece_types {
            self.colors_for(piece_type)?;
        }
        Ok(())
    }

    /// Look up a colour for `piece_type` by its display name.
    pub fn colour_by_name(&self, piece_type: &PieceType, name: &str) -> Result<Option<Arc<BrickColour>>> {
        Ok(self.colors_for(piece_type)?.by_name(name).cloned())
    }

    fn convert(&self, piece_type: &PieceType, entry: &CatalogEntry) -> Result<Arc<BrickColour>> {
        BrickColour::from_hex(&entry.id, &entry.name, &entry.hex, entry.availability)
            .map(Arc::new)
            .map_err(|_| {
                self.unavailable(
                    piece_type,
                    format!("colour {} ({}) has invalid hex code '{}'", entry.id, entry.name, entry.hex),
                )
            })
    }

    fn unavailable(&self, piece_type: &PieceType, reason: String) -> BrickError {
        BrickError::SourceUnavailable {
            piece_type: piece_type.to_string(),
            source_name: self.source.name().to_string(),
            reason,
        }
    }
}

impl std::fmt::Debug for PaletteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteProvider")
            .field("source", &self.source.name())
            .field("cached", &self.cache.len())
            .finish()
    }
}
