//! Image decoding for the image cache.
//!
//! Images are decoded to RGBA8 with the `image` crate at startup. The decoded
//! pixels are shared behind an `Rc` so renderers can keep their own
//! tile-id → image table without copying pixel data.

use image::{ImageError, RgbaImage};
use std::path::Path;
use std::rc::Rc;

use crate::error::{AssetKind, GameError, GameResult};
use crate::resources::cache::{ResourceCache, cache_miss};
use crate::resources::handle::ResourceHandle;
use crate::resources::registry::ResourceRegistry;

/// A decoded image together with the handle it was loaded for.
#[derive(Debug, Clone)]
pub struct TileImage {
    handle: ResourceHandle,
    pixels: Rc<RgbaImage>,
}

impl TileImage {
    pub fn new(handle: ResourceHandle, pixels: RgbaImage) -> Self {
        Self {
            handle,
            pixels: Rc::new(pixels),
        }
    }

    /// Handle the image was registered under.
    pub fn handle(&self) -> &ResourceHandle {
        &self.handle
    }

    /// Decoded RGBA pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Cache of decoded images keyed by handle.
pub type ImageCache = ResourceCache<TileImage>;

/// Decode the image file at `path`.
///
/// - missing file → [`GameError::ResourceNotFound`]
/// - format without a decoder → [`GameError::UnsupportedFormat`]
/// - unreadable or corrupted data → [`GameError::DecodeFailure`]
pub fn decode_image(handle: &ResourceHandle, path: &Path) -> GameResult<TileImage> {
    if !path.is_file() {
        return Err(GameError::ResourceNotFound {
            kind: AssetKind::Image,
            path: path.to_path_buf(),
        });
    }
    match image::open(path) {
        Ok(img) => Ok(TileImage::new(handle.clone(), img.to_rgba8())),
        Err(ImageError::Unsupported(_)) => Err(GameError::UnsupportedFormat {
            kind: AssetKind::Image,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(GameError::DecodeFailure {
            kind: AssetKind::Image,
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn image_missing(handle: &ResourceHandle) -> GameError {
    cache_miss(AssetKind::Image, handle)
}

/// Decode every image registered in `registry`.
pub fn load_images(registry: &ResourceRegistry) -> GameResult<ImageCache> {
    ResourceCache::load_all(registry, decode_image, image_missing)
}
