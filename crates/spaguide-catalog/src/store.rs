//! The catalog store: an immutable snapshot of spa records behind an
//! atomically swappable handle.
//!
//! Queries clone the current `Arc<Catalog>` and run against that snapshot, so
//! a request observes one consistent view even if the catalog is replaced
//! mid-flight. The lock is only held for the pointer clone/swap, never during
//! query evaluation.

use std::sync::{Arc, PoisonError, RwLock};

use spaguide_core::{CatalogFile, SpaRecord};

/// An immutable collection of spa records. The catalog is the sole owner of
/// record data; query results are cloned out of it.
#[derive(Debug, Clone)]
pub struct Catalog {
    spas: Vec<SpaRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new(spas: Vec<SpaRecord>) -> Self {
        Self { spas }
    }

    #[must_use]
    pub fn spas(&self) -> &[SpaRecord] {
        &self.spas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spas.is_empty()
    }

    /// Exact-match lookup by record id. `None` is the recoverable
    /// "not found" signal callers map to a 404 at the HTTP boundary.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&SpaRecord> {
        self.spas.iter().find(|spa| spa.id == id)
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Self::new(file.spas)
    }
}

/// Shared handle to the current catalog snapshot.
///
/// Cloning the store is cheap; all clones observe the same catalog and any
/// replacement is visible to all of them atomically.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Returns the current snapshot. The snapshot stays valid (and unchanged)
    /// for as long as the caller holds it, regardless of later replacements.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically replace the catalog. In-flight snapshots are unaffected.
    pub fn replace(&self, catalog: Catalog) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(catalog);
    }
}
