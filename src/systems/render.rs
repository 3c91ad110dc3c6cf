//! Tile map rendering.
//!
//! [`TileMapRenderer`] turns a loaded text map into draw calls that tile the
//! whole viewport. Cell edges sit on `floor(i * extent / count)` so adjacent
//! cells share an edge and each row (column) of cells adds up to exactly the
//! viewport width (height), whatever the remainder of the division.
//!
//! ```text
//! viewport 10px, 3 columns
//! edges:  0     3     6    10
//!         |--3--|--3--|--4--|
//! ```
//!
//! The renderer only knows a [`DrawSurface`]; the shell implements it on top
//! of raylib and tests implement it with a recorder.

use log::{debug, info};
use rustc_hash::FxHashMap;
use std::rc::Rc;

use crate::error::{GameError, GameResult};
use crate::resources::assets::AssetLibrary;
use crate::resources::imagestore::TileImage;
use crate::resources::tilemap::{cells, distinct_tile_ids, measure, parse_tile_ids};
use crate::resources::windowsize::WindowSize;

/// Pixel rectangle of one map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Something that can draw an image stretched into a rectangle.
pub trait DrawSurface {
    fn draw_image(&mut self, image: &TileImage, dest: CellRect);
}

/// Outcome of [`TileMapRenderer::load_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLoad {
    Loaded,
    /// The map was already the current one; nothing was done.
    AlreadyLoaded,
}

/// Loads a text map, binds its tile ids to cached images and paints it.
pub struct TileMapRenderer {
    assets: Rc<AssetLibrary>,
    /// `None` until the first successful load.
    current_map_name: Option<String>,
    raw_map: String,
    columns: usize,
    rows: usize,
    viewport: WindowSize,
    cell_width: f32,
    cell_height: f32,
    tile_images: FxHashMap<u32, TileImage>,
}

impl TileMapRenderer {
    pub fn new(assets: Rc<AssetLibrary>) -> Self {
        Self {
            assets,
            current_map_name: None,
            raw_map: String::new(),
            columns: 0,
            rows: 0,
            viewport: WindowSize::default(),
            cell_width: 0.0,
            cell_height: 0.0,
            tile_images: FxHashMap::default(),
        }
    }

    /// Load the text map called `name` and every image it references.
    ///
    /// Loading the current map again is a no-op. On failure the previous
    /// state is kept untouched:
    /// - unknown map → [`GameError::CacheMiss`] (text file)
    /// - blank map → [`GameError::EmptyMapFile`]
    /// - non-numeric token → [`GameError::UnrecognizedMapElement`]
    /// - tile id without an image → [`GameError::CacheMiss`] (image)
    /// - rows of different length → [`GameError::MalformedMap`]
    pub fn load_map(&mut self, name: &str) -> GameResult<MapLoad> {
        if self.current_map_name.as_deref() == Some(name) {
            debug!("Map '{}' already loaded", name);
            return Ok(MapLoad::AlreadyLoaded);
        }

        let assets = Rc::clone(&self.assets);
        let handle = assets.text_handle(name)?;
        let text = assets.texts().get(handle)?;
        if text.trim().is_empty() {
            return Err(GameError::EmptyMapFile(assets.text_file_name(handle)));
        }

        let ids = parse_tile_ids(text)?;
        let distinct = distinct_tile_ids(&ids);
        let mut tile_images = FxHashMap::default();
        for id in &distinct {
            tile_images.insert(*id, assets.image_by_id(*id)?.clone());
        }
        let dims = measure(name, text)?;

        self.current_map_name = Some(name.to_string());
        self.raw_map = text.to_string();
        self.columns = dims.columns;
        self.rows = dims.rows;
        self.tile_images = tile_images;
        self.calculate_cell_dimensions();

        info!(
            "Loaded map '{}': {}x{} cells, tile ids {:?}",
            name, self.columns, self.rows, distinct
        );
        Ok(MapLoad::Loaded)
    }

    /// Record the new viewport size.
    ///
    /// Cell dimensions are NOT recomputed; call
    /// [`calculate_cell_dimensions`](Self::calculate_cell_dimensions) next.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        debug!("Viewport set to {}x{}", width, height);
        self.viewport = WindowSize::new(width, height);
    }

    /// Divide the viewport among the map's columns and rows.
    ///
    /// Without a loaded map both dimensions stay at zero.
    pub fn calculate_cell_dimensions(&mut self) {
        if self.columns == 0 || self.rows == 0 {
            self.cell_width = 0.0;
            self.cell_height = 0.0;
            return;
        }
        self.cell_width = self.viewport.w as f32 / self.columns as f32;
        self.cell_height = self.viewport.h as f32 / self.rows as f32;
        debug!(
            "Cell size {}x{} for viewport {}x{}",
            self.cell_width, self.cell_height, self.viewport.w, self.viewport.h
        );
    }

    /// Pixel rectangle of cell (`row`, `column`).
    pub fn cell_rect(&self, row: usize, column: usize) -> CellRect {
        let x0 = boundary(column, self.viewport.w, self.columns);
        let x1 = boundary(column + 1, self.viewport.w, self.columns);
        let y0 = boundary(row, self.viewport.h, self.rows);
        let y1 = boundary(row + 1, self.viewport.h, self.rows);
        CellRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Draw every cell of the current map. Draws nothing when unloaded.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.current_map_name.is_none() {
            return;
        }
        // The stored text was fully validated by load_map.
        for (row, column, token) in cells(&self.raw_map) {
            let Ok(id) = token.parse::<u32>() else {
                continue;
            };
            if let Some(image) = self.tile_images.get(&id) {
                surface.draw_image(image, self.cell_rect(row, column));
            }
        }
    }

    pub fn current_map_name(&self) -> Option<&str> {
        self.current_map_name.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.current_map_name.is_some()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn viewport(&self) -> WindowSize {
        self.viewport
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Image bound to tile `id` by the current map.
    pub fn tile_image(&self, id: u32) -> Option<&TileImage> {
        self.tile_images.get(&id)
    }

    pub fn tile_image_count(&self) -> usize {
        self.tile_images.len()
    }
}

/// Edge `index` of `count` equal parts of `extent`, floored.
fn boundary(index: usize, extent: u32, count: usize) -> i32 {
    if count == 0 {
        return 0;
    }
    (index as u64 * extent as u64 / count as u64) as i32
}
