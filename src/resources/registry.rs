//! Folder-grouped registry of file-backed resources.
//!
//! One [`ResourceRegistry`] exists per resource kind (images, text files). It
//! knows the base directory and the single extension of that kind, stores
//! handles grouped by [`FolderGroup`], and resolves a handle to its path:
//!
//! ```text
//! <directory><folder>/<name><extension>
//! assets/images/world/grass.png
//! ```
//!
//! The registry is filled once at startup and read-only afterwards. Lookups
//! return `None` instead of failing; callers decide whether absence is fatal.

use log::debug;
use std::path::PathBuf;

use crate::resources::handle::{FolderGroup, HandleAllocator, ResourceHandle};

/// Registry of handles for one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    directory: String,
    extension: String,
    /// Groups in registration order.
    groups: Vec<(FolderGroup, Vec<ResourceHandle>)>,
    ids: HandleAllocator,
}

impl ResourceRegistry {
    /// Create an empty registry rooted at `directory` for files ending in
    /// `extension` (dot included, e.g. `".png"`).
    pub fn new(directory: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            groups: Vec::new(),
            ids: HandleAllocator::new(),
        }
    }

    /// Base directory of this kind.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Extension shared by every file of this kind.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Allocate the next handle id of this kind for `name`.
    pub fn allocate(&mut self, name: impl Into<String>) -> ResourceHandle {
        self.ids.allocate(name)
    }

    /// Store `handles` verbatim under `folder`.
    ///
    /// A second registration of the same folder replaces the first one and
    /// keeps its position in the registration order.
    pub fn register_group(&mut self, folder: FolderGroup, handles: Vec<ResourceHandle>) {
        debug!(
            "Registering {} handle(s) under {}{}",
            handles.len(),
            self.directory,
            folder
        );
        if let Some(slot) = self.groups.iter_mut().find(|(f, _)| *f == folder) {
            slot.1 = handles;
        } else {
            self.groups.push((folder, handles));
        }
    }

    /// Allocate handles for `names` and register them under `folder`.
    pub fn register_names<S: AsRef<str>>(&mut self, folder: FolderGroup, names: &[S]) {
        let handles = names
            .iter()
            .map(|name| self.allocate(name.as_ref()))
            .collect();
        self.register_group(folder, handles);
    }

    fn owning_folder(&self, handle: &ResourceHandle) -> Option<&FolderGroup> {
        self.groups
            .iter()
            .find(|(_, handles)| handles.contains(handle))
            .map(|(folder, _)| folder)
    }

    /// Full path of `handle`, or `None` when it is not registered.
    pub fn resolve(&self, handle: &ResourceHandle) -> Option<PathBuf> {
        self.owning_folder(handle).map(|folder| {
            PathBuf::from(format!(
                "{}{}{}{}",
                self.directory,
                folder.name(),
                handle.name(),
                self.extension
            ))
        })
    }

    /// File name with extension (e.g. `grass.png`), or `None` when
    /// `handle` is not registered.
    pub fn full_file_name(&self, handle: &ResourceHandle) -> Option<String> {
        self.owning_folder(handle)
            .map(|_| format!("{}{}", handle.name(), self.extension))
    }

    /// First handle with the given id.
    pub fn find_by_id(&self, id: u32) -> Option<&ResourceHandle> {
        self.iter().find(|h| h.id() == id)
    }

    /// First handle with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&ResourceHandle> {
        self.iter().find(|h| h.name() == name)
    }

    /// Handles registered under `folder`; empty when the folder is unknown.
    pub fn folder_handles(&self, folder: &FolderGroup) -> &[ResourceHandle] {
        self.groups
            .iter()
            .find(|(f, _)| f == folder)
            .map(|(_, handles)| handles.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `handle` belongs to any group.
    pub fn contains(&self, handle: &ResourceHandle) -> bool {
        self.owning_folder(handle).is_some()
    }

    /// Every handle, in group registration order then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceHandle> {
        self.groups.iter().flat_map(|(_, handles)| handles.iter())
    }

    /// Owned copy of [`iter`](Self::iter).
    pub fn all_handles(&self) -> Vec<ResourceHandle> {
        self.iter().cloned().collect()
    }

    /// Total number of registered handles.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, handles)| handles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_registry() -> ResourceRegistry {
        let mut r = ResourceRegistry::new("assets/images/", ".png");
        r.register_names(FolderGroup::new("world"), &["grass"]);
        r.register_names(
            FolderGroup::new("main_character"),
            &["back", "front", "left", "right"],
        );
        r
    }

    #[test]
    fn test_resolve_concatenates_path_segments() {
        let r = image_registry();
        let grass = r.find_by_name("grass").cloned().unwrap();
        assert_eq!(
            r.resolve(&grass),
            Some(PathBuf::from("assets/images/world/grass.png"))
        );
        let left = r.find_by_name("left").cloned().unwrap();
        assert_eq!(
            r.resolve(&left),
            Some(PathBuf::from("assets/images/main_character/left.png"))
        );
    }

    #[test]
    fn test_resolve_is_stable() {
        let r = image_registry();
        let front = r.find_by_id(3).cloned().unwrap();
        assert_eq!(r.resolve(&front), r.resolve(&front));
    }

    #[test]
    fn test_unregistered_handle_is_absent() {
        let r = image_registry();
        let stranger = ResourceHandle::new(99, "lava");
        assert_eq!(r.resolve(&stranger), None);
        assert_eq!(r.full_file_name(&stranger), None);
        assert!(!r.contains(&stranger));
    }

    #[test]
    fn test_same_name_with_other_id_is_not_registered() {
        let r = image_registry();
        let fake = ResourceHandle::new(42, "grass");
        assert_eq!(r.resolve(&fake), None);
    }

    #[test]
    fn test_find_by_id_and_name() {
        let r = image_registry();
        assert_eq!(r.find_by_id(1).map(|h| h.name()), Some("grass"));
        assert_eq!(r.find_by_id(5).map(|h| h.name()), Some("right"));
        assert_eq!(r.find_by_name("back").map(|h| h.id()), Some(2));
        assert!(r.find_by_id(0).is_none());
        assert!(r.find_by_id(6).is_none());
        assert!(r.find_by_name("grass.png").is_none());
    }

    #[test]
    fn test_every_handle_found_exactly_once() {
        let r = image_registry();
        for h in r.iter() {
            assert_eq!(r.iter().filter(|o| o.id() == h.id()).count(), 1);
            assert_eq!(r.iter().filter(|o| o.name() == h.name()).count(), 1);
            assert_eq!(r.find_by_id(h.id()), Some(h));
            assert_eq!(r.find_by_name(h.name()), Some(h));
        }
    }

    #[test]
    fn test_all_handles_order() {
        let r = image_registry();
        let names: Vec<String> = r.all_handles().iter().map(|h| h.name().to_string()).collect();
        assert_eq!(names, vec!["grass", "back", "front", "left", "right"]);
        assert_eq!(r.len(), 5);
    }

    #[test]
    fn test_full_file_name() {
        let r = image_registry();
        let grass = r.find_by_name("grass").cloned().unwrap();
        assert_eq!(r.full_file_name(&grass).as_deref(), Some("grass.png"));
    }

    #[test]
    fn test_register_group_overwrites_same_folder() {
        let mut r = image_registry();
        let lava = r.allocate("lava");
        r.register_group(FolderGroup::new("world/"), vec![lava.clone()]);
        assert!(r.find_by_name("grass").is_none());
        assert_eq!(
            r.resolve(&lava),
            Some(PathBuf::from("assets/images/world/lava.png"))
        );
        // Replaced group keeps its slot ahead of main_character.
        assert_eq!(r.all_handles().first(), Some(&lava));
        assert_eq!(r.len(), 5);
    }

    #[test]
    fn test_folder_handles() {
        let r = image_registry();
        assert_eq!(r.folder_handles(&FolderGroup::new("main_character")).len(), 4);
        assert!(r.folder_handles(&FolderGroup::new("items")).is_empty());
    }

    #[test]
    fn test_ids_unique_across_groups() {
        let r = image_registry();
        let mut ids: Vec<u32> = r.iter().map(|h| h.id()).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
