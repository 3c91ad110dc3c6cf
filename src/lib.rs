//! Tile game library.
//!
//! Asset registry and caches, the lifecycle event bus and the tile map
//! renderer, exposed for the binary and for integration tests.

pub mod error;
pub mod events;
pub mod game;
pub mod resources;
#[cfg(feature = "shell")]
pub mod shell;
pub mod systems;
