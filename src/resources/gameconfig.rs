//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Defaults are always in
//! place, so a missing or unreadable file never prevents startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! title = Tile Game
//!
//! [display]
//! min_width = 800
//! min_height = 600
//!
//! [assets]
//! manifest = ./assets/manifest.json
//! start_map = main
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::windowsize::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Tile Game";
const DEFAULT_START_MAP: &str = "main";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    pub title: String,
    /// Smallest monitor the game accepts.
    pub min_display_width: u32,
    pub min_display_height: u32,
    /// Asset manifest to use instead of the built-in one.
    pub manifest_path: Option<PathBuf>,
    /// Map loaded when a new game starts.
    pub start_map: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            min_display_width: DEFAULT_MIN_WIDTH,
            min_display_height: DEFAULT_MIN_HEIGHT,
            manifest_path: None,
            start_map: DEFAULT_START_MAP.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [display] section
        if let Some(width) = config.getuint("display", "min_width").ok().flatten() {
            self.min_display_width = width as u32;
        }
        if let Some(height) = config.getuint("display", "min_height").ok().flatten() {
            self.min_display_height = height as u32;
        }

        // [assets] section
        if let Some(manifest) = config.get("assets", "manifest") {
            self.manifest_path = Some(PathBuf::from(manifest));
        }
        if let Some(start_map) = config.get("assets", "start_map") {
            self.start_map = start_map;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, min display {}x{}, start map '{}'",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.min_display_width,
            self.min_display_height,
            self.start_map
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        config.set(
            "display",
            "min_width",
            Some(self.min_display_width.to_string()),
        );
        config.set(
            "display",
            "min_height",
            Some(self.min_display_height.to_string()),
        );

        if let Some(manifest) = &self.manifest_path {
            config.set("assets", "manifest", Some(manifest.display().to_string()));
        }
        config.set("assets", "start_map", Some(self.start_map.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tilegame-gameconfig-{}-{}",
            test,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.ini")
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.min_display_width, 800);
        assert_eq!(config.min_display_height, 600);
        assert_eq!(config.start_map, "main");
        assert!(config.manifest_path.is_none());
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/tilegame/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.start_map, "main");
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_config("partial");
        std::fs::write(
            &path,
            "[window]\nwidth = 1024\n\n[assets]\nstart_map = cave\nmanifest = data/manifest.json\n",
        )
        .unwrap();
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.start_map, "cave");
        assert_eq!(
            config.manifest_path,
            Some(PathBuf::from("data/manifest.json"))
        );
        assert_eq!(config.min_display_width, 800);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config("save");
        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 900;
        saved.target_fps = 30;
        saved.min_display_height = 480;
        saved.title = "Grass".into();
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
    }
}
