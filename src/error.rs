//! Fatal error taxonomy.
//!
//! Every failure the client can hit is a startup- or load-time invariant
//! violation: a missing or malformed asset leaves the game unusable. Library
//! code returns these as [`GameError`] values; `main` is the single place that
//! prints the message and terminates with [`GameError::exit_code`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of file-backed resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Decoded images (`.png`).
    Image,
    /// Plain text files (`.txt` maps).
    TextFile,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::TextFile => write!(f, "text file"),
        }
    }
}

/// Errors that terminate the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The display is smaller than the minimum supported size.
    #[error(
        "the display doesn't meet the minimum requirements - {width}x{height} (minimum {min_width}x{min_height})"
    )]
    DisplayTooSmall {
        /// Detected width in pixels.
        width: u32,
        /// Detected height in pixels.
        height: u32,
        /// Required width in pixels.
        min_width: u32,
        /// Required height in pixels.
        min_height: u32,
    },

    /// A registered resource has no file on disk.
    #[error("the {kind} wasn't found - {}", .path.display())]
    ResourceNotFound {
        /// Resource kind.
        kind: AssetKind,
        /// Resolved path that was probed.
        path: PathBuf,
    },

    /// The file exists but is not in a format the decoder understands.
    #[error("the {kind} has an unsupported format - {}", .path.display())]
    UnsupportedFormat {
        /// Resource kind.
        kind: AssetKind,
        /// Offending path.
        path: PathBuf,
    },

    /// The file could not be read or decoded.
    #[error("the {kind}'s file is corrupted - {}: {reason}", .path.display())]
    DecodeFailure {
        /// Resource kind.
        kind: AssetKind,
        /// Offending path.
        path: PathBuf,
        /// Decoder or I/O message.
        reason: String,
    },

    /// A resource was requested that the cache never loaded.
    #[error("the {kind} wasn't loaded - {resource}")]
    CacheMiss {
        /// Resource kind.
        kind: AssetKind,
        /// Human readable identity of the missing resource.
        resource: String,
    },

    /// A map file contains nothing but whitespace.
    #[error("a necessary text file is empty - {0}")]
    EmptyMapFile(String),

    /// A map token is not a non-negative integer tile id.
    #[error("an unrecognized element was found during map loading - {0}")]
    UnrecognizedMapElement(String),

    /// A map row does not have the same number of columns as the first row.
    #[error("map '{map}' is not rectangular - row {row} has {found} columns, expected {expected}")]
    MalformedMap {
        /// Map name.
        map: String,
        /// Zero-based row index.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// The asset manifest could not be read or violates registry invariants.
    #[error("invalid asset manifest - {path}: {reason}")]
    InvalidManifest {
        /// Manifest source (file path or `builtin`).
        path: String,
        /// What was wrong.
        reason: String,
    },
}

impl GameError {
    /// Process exit code identifying the error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::DisplayTooSmall { .. } => 1,
            GameError::ResourceNotFound { kind, .. } | GameError::UnsupportedFormat { kind, .. } => {
                match kind {
                    AssetKind::Image => 2,
                    AssetKind::TextFile => 5,
                }
            }
            GameError::DecodeFailure { kind, .. } => match kind {
                AssetKind::Image => 3,
                AssetKind::TextFile => 6,
            },
            GameError::CacheMiss { kind, .. } => match kind {
                AssetKind::Image => 4,
                AssetKind::TextFile => 7,
            },
            GameError::EmptyMapFile(_) => 8,
            GameError::UnrecognizedMapElement(_) => 9,
            GameError::MalformedMap { .. } => 10,
            GameError::InvalidManifest { .. } => 11,
        }
    }
}

/// Result type for fallible client operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_split_by_asset_kind() {
        let image = GameError::ResourceNotFound {
            kind: AssetKind::Image,
            path: PathBuf::from("assets/images/world/grass.png"),
        };
        let text = GameError::ResourceNotFound {
            kind: AssetKind::TextFile,
            path: PathBuf::from("assets/maps/main.txt"),
        };
        assert_eq!(image.exit_code(), 2);
        assert_eq!(text.exit_code(), 5);
    }

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let errors = [
            GameError::DisplayTooSmall {
                width: 640,
                height: 480,
                min_width: 800,
                min_height: 600,
            },
            GameError::DecodeFailure {
                kind: AssetKind::Image,
                path: PathBuf::from("a.png"),
                reason: "bad".into(),
            },
            GameError::CacheMiss {
                kind: AssetKind::Image,
                resource: "grass".into(),
            },
            GameError::DecodeFailure {
                kind: AssetKind::TextFile,
                path: PathBuf::from("a.txt"),
                reason: "bad".into(),
            },
            GameError::CacheMiss {
                kind: AssetKind::TextFile,
                resource: "main".into(),
            },
            GameError::EmptyMapFile("main.txt".into()),
            GameError::UnrecognizedMapElement("x".into()),
            GameError::MalformedMap {
                map: "main".into(),
                row: 1,
                expected: 3,
                found: 2,
            },
            GameError::InvalidManifest {
                path: "builtin".into(),
                reason: "duplicate".into(),
            },
        ];
        let codes: Vec<i32> = errors.iter().map(GameError::exit_code).collect();
        assert_eq!(codes, vec![1, 3, 4, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_message_names_offending_token() {
        let e = GameError::UnrecognizedMapElement("x".into());
        assert_eq!(
            e.to_string(),
            "an unrecognized element was found during map loading - x"
        );
    }

    #[test]
    fn test_message_names_offending_path() {
        let e = GameError::UnsupportedFormat {
            kind: AssetKind::Image,
            path: PathBuf::from("assets/images/world/grass.png"),
        };
        assert!(e.to_string().contains("assets/images/world/grass.png"));
        assert!(e.to_string().contains("image"));
    }
}
