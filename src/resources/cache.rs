//! Eager, one-shot resource cache.
//!
//! [`ResourceCache::load_all`] walks every handle of a [`ResourceRegistry`],
//! resolves its path and hands it to a caller supplied decoder. The first
//! decode failure aborts the pass and is returned; there is no retry and no
//! partially filled cache survives. After a successful pass the cache is
//! immutable and never evicts.
//!
//! A lookup for a handle that was never loaded goes through the cache's
//! missing handler, which turns it into the kind-specific [`GameError`]. The
//! per-kind decoders and missing handlers live in
//! [`imagestore`](crate::resources::imagestore) and
//! [`textstore`](crate::resources::textstore).

use log::{debug, info};
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::error::{AssetKind, GameError, GameResult};
use crate::resources::handle::ResourceHandle;
use crate::resources::registry::ResourceRegistry;

/// Builds the error reported when a handle is requested but was never loaded.
pub type MissingHandler = fn(&ResourceHandle) -> GameError;

/// Decoded content keyed by handle.
pub struct ResourceCache<T> {
    entries: FxHashMap<ResourceHandle, T>,
    on_missing: MissingHandler,
}

impl<T> ResourceCache<T> {
    /// Load every handle known to `registry` through `decode`.
    ///
    /// Stops at the first error and returns it; nothing is kept from a
    /// failed pass.
    pub fn load_all<D>(
        registry: &ResourceRegistry,
        mut decode: D,
        on_missing: MissingHandler,
    ) -> GameResult<Self>
    where
        D: FnMut(&ResourceHandle, &Path) -> GameResult<T>,
    {
        let mut entries = FxHashMap::default();
        for handle in registry.iter() {
            let Some(path) = registry.resolve(handle) else {
                return Err(on_missing(handle));
            };
            debug!("Loading {} from {}", handle, path.display());
            let content = decode(handle, path.as_path())?;
            entries.insert(handle.clone(), content);
        }
        info!(
            "Loaded {} resource(s) from {}",
            entries.len(),
            registry.directory()
        );
        Ok(Self {
            entries,
            on_missing,
        })
    }

    /// Cached content for `handle`, or the missing handler's error.
    pub fn get(&self, handle: &ResourceHandle) -> GameResult<&T> {
        self.entries
            .get(handle)
            .ok_or_else(|| (self.on_missing)(handle))
    }

    /// Whether `handle` was loaded.
    pub fn contains(&self, handle: &ResourceHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Iterate over loaded entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceHandle, &T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache-miss error for `kind`, naming the handle.
pub fn cache_miss(kind: AssetKind, handle: &ResourceHandle) -> GameError {
    GameError::CacheMiss {
        kind,
        resource: handle.to_string(),
    }
}
