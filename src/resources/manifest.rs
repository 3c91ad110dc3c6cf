//! Asset registration manifest.
//!
//! Describes, per resource kind, the base directory, the extension and the
//! folder groups with their file stems. The built-in manifest registers the
//! assets the game ships with; a JSON file with the same shape can replace
//! it:
//!
//! ```json
//! {
//!   "images": {
//!     "directory": "assets/images/",
//!     "extension": ".png",
//!     "groups": [
//!       { "folder": "world/", "names": ["grass"] },
//!       { "folder": "main_character/", "names": ["back", "front", "left", "right"] }
//!     ]
//!   },
//!   "texts": {
//!     "directory": "assets/",
//!     "extension": ".txt",
//!     "groups": [ { "folder": "maps/", "names": ["main"] } ]
//!   }
//! }
//! ```
//!
//! Handle ids are assigned per kind in the order names appear, starting at 1,
//! so the map file's tile ids follow the image registration order.

use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GameError, GameResult};
use crate::resources::handle::FolderGroup;
use crate::resources::registry::ResourceRegistry;

/// One folder and the file stems registered under it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupManifest {
    pub folder: String,
    pub names: Vec<String>,
}

/// Registration data for one resource kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KindManifest {
    pub directory: String,
    pub extension: String,
    #[serde(default)]
    pub groups: Vec<GroupManifest>,
}

impl KindManifest {
    /// Build the registry, assigning ids in declaration order.
    ///
    /// Fails when a name appears twice, since name lookups require unique
    /// names across the whole registry. `source` only labels the error.
    pub fn build_registry(&self, source: &str) -> GameResult<ResourceRegistry> {
        let mut seen = FxHashSet::default();
        for name in self.groups.iter().flat_map(|g| g.names.iter()) {
            if !seen.insert(name.as_str()) {
                return Err(GameError::InvalidManifest {
                    path: source.to_string(),
                    reason: format!("duplicate resource name '{}' in {}", name, self.directory),
                });
            }
        }

        let mut registry = ResourceRegistry::new(self.directory.clone(), self.extension.clone());
        for group in &self.groups {
            registry.register_names(FolderGroup::new(group.folder.as_str()), group.names.as_slice());
        }
        info!(
            "Registered {} resource(s) under {} ({})",
            registry.len(),
            self.directory,
            self.extension
        );
        Ok(registry)
    }
}

/// Registration data for every resource kind the client uses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub images: KindManifest,
    pub texts: KindManifest,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetManifest {
    /// The assets shipped with the game.
    pub fn builtin() -> Self {
        Self {
            images: KindManifest {
                directory: "assets/images/".into(),
                extension: ".png".into(),
                groups: vec![
                    GroupManifest {
                        folder: "world/".into(),
                        names: vec!["grass".into()],
                    },
                    GroupManifest {
                        folder: "main_character/".into(),
                        names: vec![
                            "back".into(),
                            "front".into(),
                            "left".into(),
                            "right".into(),
                        ],
                    },
                ],
            },
            texts: KindManifest {
                directory: "assets/".into(),
                extension: ".txt".into(),
                groups: vec![GroupManifest {
                    folder: "maps/".into(),
                    names: vec!["main".into()],
                }],
            },
        }
    }

    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str, source: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidManifest {
            path: source.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a manifest file.
    pub fn load_from_file(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| GameError::InvalidManifest {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json, &source)
    }

    /// Rebase both kinds' directories under `root`.
    ///
    /// Relative directories are joined to `root`; absolute ones are left as is.
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        for kind in [&mut self.images, &mut self.texts] {
            if Path::new(&kind.directory).is_relative() {
                let mut joined = root.join(&kind.directory).display().to_string();
                if !joined.ends_with('/') {
                    joined.push('/');
                }
                kind.directory = joined;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_image_ids_follow_registration_order() {
        let images = AssetManifest::builtin().images.build_registry("builtin").unwrap();
        let ids: Vec<(u32, &str)> = images.iter().map(|h| (h.id(), h.name())).collect();
        assert_eq!(
            ids,
            vec![(1, "grass"), (2, "back"), (3, "front"), (4, "left"), (5, "right")]
        );
    }

    #[test]
    fn test_builtin_text_paths() {
        let texts = AssetManifest::builtin().texts.build_registry("builtin").unwrap();
        let main = texts.find_by_name("main").unwrap();
        assert_eq!(main.id(), 1);
        assert_eq!(texts.resolve(main), Some(PathBuf::from("assets/maps/main.txt")));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut manifest = AssetManifest::builtin();
        manifest.images.groups[1].names.push("grass".into());
        let err = manifest.images.build_registry("test.json").unwrap_err();
        assert!(matches!(err, GameError::InvalidManifest { .. }));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn test_json_round_trip_matches_builtin() {
        let builtin = AssetManifest::builtin();
        let json = serde_json::to_string(&builtin).unwrap();
        assert_eq!(AssetManifest::from_json(&json, "inline").unwrap(), builtin);
    }

    #[test]
    fn test_json_groups_default_to_empty() {
        let json = r#"{
            "images": { "directory": "img/", "extension": ".png" },
            "texts": { "directory": "txt/", "extension": ".txt", "groups": [] }
        }"#;
        let manifest = AssetManifest::from_json(json, "inline").unwrap();
        assert!(manifest.images.groups.is_empty());
        assert!(manifest.images.build_registry("inline").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = AssetManifest::from_json("{ not json", "broken.json").unwrap_err();
        match err {
            GameError::InvalidManifest { path, .. } => assert_eq!(path, "broken.json"),
            _ => panic!("Expected InvalidManifest"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = AssetManifest::load_from_file("/nonexistent/tilegame/manifest.json").unwrap_err();
        assert!(matches!(err, GameError::InvalidManifest { .. }));
    }

    #[test]
    fn test_rooted_at() {
        let manifest = AssetManifest::builtin().rooted_at("/opt/game");
        assert_eq!(manifest.images.directory, "/opt/game/assets/images/");
        assert_eq!(manifest.texts.directory, "/opt/game/assets/");
    }
}
