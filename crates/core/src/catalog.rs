//! Tile type catalog - maps type indices to their descriptions
//!
//! Indices are handed out in insertion order and never change; registering a
//! description equal to an existing one returns the existing index. There is no
//! removal. The catalog is shared between the engine's caller and renderers, so it is
//! usable through a shared reference: lookups take a read lock, registration a write
//! lock.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::CatalogError;
use crate::types::{TileDescription, TypeIndex};

/// Largest number of distinct descriptions a catalog can hold.
pub const CATALOG_CAPACITY: usize = TypeIndex::MAX as usize + 1;

#[derive(Debug, Default)]
pub struct TileTypeCatalog {
    inner: RwLock<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    descriptions: Vec<TileDescription>,
    index: HashMap<TileDescription, TypeIndex>,
}

impl TileTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `description`, registering it first if it is new.
    pub fn register(&self, description: TileDescription) -> Result<TypeIndex, CatalogError> {
        let mut entries = self.inner.write();
        if let Some(&existing) = entries.index.get(&description) {
            return Ok(existing);
        }
        let next = entries.descriptions.len();
        if next >= CATALOG_CAPACITY {
            return Err(CatalogError::Full(next));
        }
        let type_index = next as TypeIndex;
        entries.descriptions.push(description);
        entries.index.insert(description, type_index);
        Ok(type_index)
    }

    /// Register several descriptions, returning their indices in the same order.
    pub fn register_all(
        &self,
        descriptions: impl IntoIterator<Item = TileDescription>,
    ) -> Result<Vec<TypeIndex>, CatalogError> {
        descriptions
            .into_iter()
            .map(|description| self.register(description))
            .collect()
    }

    /// Description of `type_index`, or [`TileDescription::default`] (white) when the
    /// index was never registered. Renderers always get something to draw.
    pub fn lookup(&self, type_index: TypeIndex) -> TileDescription {
        self.get(type_index).unwrap_or_default()
    }

    pub fn get(&self, type_index: TypeIndex) -> Option<TileDescription> {
        self.inner.read().descriptions.get(type_index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.read().descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().descriptions.is_empty()
    }

    /// Whether every type in `[0, color_count)` has a registered description.
    pub fn covers(&self, color_count: u16) -> bool {
        self.len() >= color_count as usize
    }
}

/// Catalog with `colors` distinct descriptions, for tests that only need coverage.
#[cfg(test)]
pub(crate) fn test_catalog(colors: u16) -> std::sync::Arc<TileTypeCatalog> {
    use crate::types::Rgb;

    let catalog = TileTypeCatalog::new();
    for i in 0..colors {
        let color = Rgb::new(i as u8, (i >> 8) as u8, 0);
        catalog.register(TileDescription::new(color)).unwrap();
    }
    std::sync::Arc::new(catalog)
}
