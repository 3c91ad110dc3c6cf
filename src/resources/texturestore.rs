//! GPU textures for the decoded tile images.
//!
//! Uploaded once after the window opens, keyed by image handle id, which is
//! also the tile id used in map files.

use log::{debug, info};
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use std::io::Cursor;

use crate::error::{AssetKind, GameError, GameResult};
use crate::resources::assets::AssetLibrary;
use crate::resources::imagestore::TileImage;

pub struct TextureStore {
    map: FxHashMap<u32, Texture2D>,
}

impl TextureStore {
    /// Upload every cached image of `assets`.
    pub fn upload(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &AssetLibrary,
    ) -> GameResult<Self> {
        let mut map = FxHashMap::default();
        for handle in assets.image_registry().iter() {
            let tile = assets.images().get(handle)?;
            let texture = upload_tile(rl, thread, tile).map_err(|reason| {
                GameError::DecodeFailure {
                    kind: AssetKind::Image,
                    path: assets
                        .image_registry()
                        .resolve(handle)
                        .unwrap_or_else(|| handle.name().into()),
                    reason,
                }
            })?;
            debug!("Uploaded texture for {}", handle);
            map.insert(handle.id(), texture);
        }
        info!("Uploaded {} texture(s)", map.len());
        Ok(Self { map })
    }

    pub fn get(&self, id: u32) -> Option<&Texture2D> {
        self.map.get(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Re-encode the decoded pixels as PNG in memory and hand them to raylib.
fn upload_tile(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    tile: &TileImage,
) -> Result<Texture2D, String> {
    let mut bytes: Vec<u8> = Vec::new();
    tile.pixels()
        .write_to(&mut Cursor::new(&mut bytes), ::image::ImageFormat::Png)
        .map_err(|e| e.to_string())?;
    let image = Image::load_image_from_mem(".png", &bytes).map_err(|e| e.to_string())?;
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| e.to_string())
}
