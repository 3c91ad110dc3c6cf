//! Text file decoding for the text cache.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AssetKind, GameError, GameResult};
use crate::resources::cache::{ResourceCache, cache_miss};
use crate::resources::handle::ResourceHandle;
use crate::resources::registry::ResourceRegistry;

/// Cache of text file contents keyed by handle.
pub type TextCache = ResourceCache<String>;

/// Read the UTF-8 text file at `path`.
///
/// Non UTF-8 content is reported as [`GameError::UnsupportedFormat`].
pub fn decode_text(_handle: &ResourceHandle, path: &Path) -> GameResult<String> {
    if !path.is_file() {
        return Err(GameError::ResourceNotFound {
            kind: AssetKind::TextFile,
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => GameError::UnsupportedFormat {
            kind: AssetKind::TextFile,
            path: path.to_path_buf(),
        },
        _ => GameError::DecodeFailure {
            kind: AssetKind::TextFile,
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })
}

fn text_missing(handle: &ResourceHandle) -> GameError {
    cache_miss(AssetKind::TextFile, handle)
}

/// Read every text file registered in `registry`.
pub fn load_texts(registry: &ResourceRegistry) -> GameResult<TextCache> {
    ResourceCache::load_all(registry, decode_text, text_missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::handle::FolderGroup;
    use std::path::PathBuf;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tilegame-text-{}-{}", test, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_decode_reads_content_verbatim() {
        let dir = scratch_dir("verbatim");
        let path = dir.join("main.txt");
        fs::write(&path, "1 1\n1 1\n").unwrap();
        let text = decode_text(&ResourceHandle::new(1, "main"), &path).unwrap();
        assert_eq!(text, "1 1\n1 1\n");
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = scratch_dir("missing");
        let err = decode_text(&ResourceHandle::new(1, "main"), &dir.join("main.txt")).unwrap_err();
        assert!(matches!(err, GameError::ResourceNotFound { kind: AssetKind::TextFile, .. }));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let dir = scratch_dir("utf8");
        let path = dir.join("main.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x31]).unwrap();
        let err = decode_text(&ResourceHandle::new(1, "main"), &path).unwrap_err();
        assert!(matches!(err, GameError::UnsupportedFormat { kind: AssetKind::TextFile, .. }));
    }

    #[test]
    fn test_load_texts_then_miss() {
        let dir = scratch_dir("registry");
        fs::create_dir_all(dir.join("maps")).unwrap();
        fs::write(dir.join("maps/main.txt"), "1").unwrap();
        let mut registry = ResourceRegistry::new(format!("{}/", dir.display()), ".txt");
        registry.register_names(FolderGroup::new("maps"), &["main"]);

        let cache = load_texts(&registry).unwrap();
        let main = registry.find_by_name("main").unwrap();
        assert_eq!(cache.get(main).unwrap(), "1");
        let err = cache.get(&ResourceHandle::new(2, "cave")).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_load_texts_fails_on_missing_file() {
        let dir = scratch_dir("partial");
        let mut registry = ResourceRegistry::new(format!("{}/", dir.display()), ".txt");
        registry.register_names(FolderGroup::new("maps"), &["main"]);
        assert!(load_texts(&registry).is_err());
    }
}
