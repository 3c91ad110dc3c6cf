//! Loaded asset library.
//!
//! [`AssetLibrary`] owns the registry and the cache of each resource kind. It
//! is built once by the top-level assembly code (after which it is read-only)
//! and shared by reference with the renderers.

use log::info;

use crate::error::{AssetKind, GameError, GameResult};
use crate::resources::handle::ResourceHandle;
use crate::resources::imagestore::{ImageCache, TileImage, load_images};
use crate::resources::manifest::AssetManifest;
use crate::resources::registry::ResourceRegistry;
use crate::resources::textstore::{TextCache, load_texts};

/// Registries and caches for images and text files.
pub struct AssetLibrary {
    image_registry: ResourceRegistry,
    images: ImageCache,
    text_registry: ResourceRegistry,
    texts: TextCache,
}

impl AssetLibrary {
    /// Register everything in `manifest` and eagerly load it.
    ///
    /// Images are loaded first, then text files. The first failure is
    /// returned and nothing is kept.
    pub fn load(manifest: &AssetManifest, source: &str) -> GameResult<Self> {
        let image_registry = manifest.images.build_registry(source)?;
        let text_registry = manifest.texts.build_registry(source)?;
        let images = load_images(&image_registry)?;
        let texts = load_texts(&text_registry)?;
        info!(
            "Asset library ready: {} image(s), {} text file(s)",
            images.len(),
            texts.len()
        );
        Ok(Self::from_parts(image_registry, images, text_registry, texts))
    }

    /// Assemble a library from already loaded parts.
    pub fn from_parts(
        image_registry: ResourceRegistry,
        images: ImageCache,
        text_registry: ResourceRegistry,
        texts: TextCache,
    ) -> Self {
        Self {
            image_registry,
            images,
            text_registry,
            texts,
        }
    }

    pub fn image_registry(&self) -> &ResourceRegistry {
        &self.image_registry
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    pub fn text_registry(&self) -> &ResourceRegistry {
        &self.text_registry
    }

    pub fn texts(&self) -> &TextCache {
        &self.texts
    }

    /// Decoded image registered under tile id `id`.
    pub fn image_by_id(&self, id: u32) -> GameResult<&TileImage> {
        let handle = self
            .image_registry
            .find_by_id(id)
            .ok_or_else(|| GameError::CacheMiss {
                kind: AssetKind::Image,
                resource: format!("tile id {}", id),
            })?;
        self.images.get(handle)
    }

    /// Handle of the text file called `name`.
    pub fn text_handle(&self, name: &str) -> GameResult<&ResourceHandle> {
        self.text_registry
            .find_by_name(name)
            .ok_or_else(|| GameError::CacheMiss {
                kind: AssetKind::TextFile,
                resource: name.to_string(),
            })
    }

    /// Content of the text file called `name`.
    pub fn text_by_name(&self, name: &str) -> GameResult<&str> {
        let handle = self.text_handle(name)?;
        self.texts.get(handle).map(String::as_str)
    }

    /// `name.ext` of a text file, for error messages.
    pub fn text_file_name(&self, handle: &ResourceHandle) -> String {
        self.text_registry
            .full_file_name(handle)
            .unwrap_or_else(|| handle.name().to_string())
    }
}
