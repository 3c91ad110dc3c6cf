//! Resource identities.
//!
//! A [`ResourceHandle`] names one file-backed asset (numeric id + file stem),
//! a [`FolderGroup`] names the directory segment a set of handles lives in.
//! Both are immutable once built and are used as map keys by the registry
//! and the caches.

use std::fmt;

/// Immutable identity of one registered asset.
///
/// Ids are unique per resource kind and assigned in registration order by a
/// [`HandleAllocator`]. The name is the file stem, without extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    id: u32,
    name: String,
}

impl ResourceHandle {
    /// Build a handle with an explicit id.
    ///
    /// Prefer [`HandleAllocator::allocate`] so ids stay unique per kind.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Numeric id, unique within one resource kind.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// File stem of the asset.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// Monotonic id source for one resource kind. The first id is 1.
#[derive(Debug, Clone)]
pub struct HandleAllocator {
    next: u32,
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Create the next handle for `name`.
    pub fn allocate(&mut self, name: impl Into<String>) -> ResourceHandle {
        let handle = ResourceHandle::new(self.next, name);
        self.next += 1;
        handle
    }
}

/// Directory segment under which handles are grouped.
///
/// The stored name always ends with exactly one `/`. Groups are flat keys,
/// not a folder tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderGroup {
    name: String,
}

impl FolderGroup {
    /// Create a group, appending the trailing separator when missing.
    pub fn new(name: impl Into<String>) -> Self {
        let mut name: String = name.into();
        while name.ends_with('/') {
            name.pop();
        }
        name.push('/');
        Self { name }
    }

    /// Folder name including the trailing separator (e.g. `"world/"`).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FolderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
