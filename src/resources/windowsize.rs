//! Window size resource.
//!
//! Tracks the drawable area in pixels. The shell updates it whenever the OS
//! window is resized and the tile map renderer divides it into cells.

use crate::error::{GameError, GameResult};

/// Smallest display the game accepts by default.
pub const DEFAULT_MIN_WIDTH: u32 = 800;
pub const DEFAULT_MIN_HEIGHT: u32 = 600;

/// Current window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl WindowSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Fail with [`GameError::DisplayTooSmall`] when either side is below
    /// the given minimum.
    ///
    /// Checked once at startup against the monitor, not per window.
    pub fn ensure_minimum(&self, min_width: u32, min_height: u32) -> GameResult<()> {
        if self.w < min_width || self.h < min_height {
            return Err(GameError::DisplayTooSmall {
                width: self.w,
                height: self.h,
                min_width,
                min_height,
            });
        }
        Ok(())
    }

    /// Whether there is nothing to draw into.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
