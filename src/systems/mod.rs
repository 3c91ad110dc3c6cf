//! Game systems.
//!
//! - [`render`] – tile map loading and gap-free cell layout

pub mod render;
