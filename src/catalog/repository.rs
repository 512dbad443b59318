//! Holds one or more sound catalogs for lookup by key.
//!
//! The repository lets callers resolve board content using the catalog key
//! stored in exported data, keeping catalog selection explicit even when the
//! builtin boards and on-disk boards are loaded side by side.

use crate::catalog::builtin;
use crate::catalog::identity::{CatalogKey, GroupKey};
use crate::catalog::model::{GroupDef, SoundCatalog};
use std::collections::BTreeMap;

#[derive(Default)]
/// In-memory store for sound catalogs keyed by `CatalogKey`.
pub struct CatalogRepository {
    catalogs: BTreeMap<CatalogKey, SoundCatalog>,
}

impl CatalogRepository {
    /// A repository preloaded with every builtin board.
    pub fn with_builtins() -> Self {
        let mut repo = Self::default();
        for key in builtin::builtin_keys() {
            if let Some(catalog) = builtin::builtin(&key) {
                repo.register(catalog);
            }
        }
        repo
    }

    /// Register a catalog for later lookup.
    pub fn register(&mut self, catalog: SoundCatalog) {
        self.catalogs.insert(catalog.key.clone(), catalog);
    }

    /// Fetch a catalog by key, if present.
    pub fn get(&self, key: &CatalogKey) -> Option<&SoundCatalog> {
        self.catalogs.get(key)
    }

    /// Resolve a group definition inside a registered catalog.
    pub fn find_group(&self, key: &CatalogKey, group: &GroupKey) -> Option<&GroupDef> {
        self.get(key)?.group(group)
    }
}
