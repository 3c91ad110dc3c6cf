//! Long-lived data shared by the game.
//!
//! Overview
//! - `handle` – resource and folder identities
//! - `registry` – folder-grouped handles and path resolution
//! - `cache` – eager one-shot loader keyed by handle
//! - `imagestore` / `textstore` – decoders and cache-miss handlers per kind
//! - `manifest` – which assets get registered (built-in or JSON)
//! - `assets` – the registries and caches loaded at startup
//! - `tilemap` – plain-text map parsing
//! - `windowsize` – viewport size and the minimum display check
//! - `gamestate` – which screen is showing
//! - `gameconfig` – INI configuration
//! - `texturestore` – GPU textures (feature `shell`)
pub mod assets;
pub mod cache;
pub mod gameconfig;
pub mod gamestate;
pub mod handle;
pub mod imagestore;
pub mod manifest;
pub mod registry;
pub mod textstore;
#[cfg(feature = "shell")]
pub mod texturestore;
pub mod tilemap;
pub mod windowsize;
