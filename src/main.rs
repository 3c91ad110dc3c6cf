//! Tile game entry point.
//!
//! A small 2D tile game client:
//! - **image** + **serde_json** for assets and the registration manifest
//! - **configparser** for `config.ini`
//! - **raylib** for the window (feature `shell`)
//!
//! # Startup
//!
//! 1. Load `config.ini` (defaults when missing)
//! 2. Register every asset from the manifest and load it eagerly
//! 3. Either check the start map and exit (`--check-assets`) or open the
//!    window and run the menu/game loop
//!
//! Any fatal error ends up here: its message goes to stderr and the process
//! exits with the error's code.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features shell
//! cargo run -- --check-assets
//! ```

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::rc::Rc;

use tilegame::error::GameResult;
use tilegame::resources::assets::AssetLibrary;
use tilegame::resources::gameconfig::GameConfig;
use tilegame::resources::manifest::AssetManifest;
use tilegame::systems::render::TileMapRenderer;

/// Tile game
#[derive(Parser)]
#[command(version, about = "A small 2D tile game.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Asset manifest (JSON) to use instead of the built-in one.
    /// Overrides `[assets] manifest` from the configuration file.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Load every asset, parse the start map and exit without a window.
    #[arg(long)]
    check_assets: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if !cli.check_assets && !cfg!(feature = "shell") {
        error!("Built without the `shell` feature: only --check-assets is available");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> GameResult<()> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.manifest {
        config.manifest_path = Some(path);
    }

    let (manifest, source) = match &config.manifest_path {
        Some(path) => (
            AssetManifest::load_from_file(path)?,
            path.display().to_string(),
        ),
        None => (AssetManifest::builtin(), "built-in manifest".to_string()),
    };
    info!("Registering assets from {}", source);
    let assets = Rc::new(AssetLibrary::load(&manifest, &source)?);

    if cli.check_assets {
        return check_assets(&config, assets);
    }
    open_window(&config, assets)
}

/// Parse the start map against the loaded assets and report.
fn check_assets(config: &GameConfig, assets: Rc<AssetLibrary>) -> GameResult<()> {
    let images = assets.images().len();
    let texts = assets.texts().len();
    let mut renderer = TileMapRenderer::new(assets);
    renderer.set_viewport_size(config.window_width, config.window_height);
    renderer.load_map(&config.start_map)?;
    println!(
        "Assets OK: {} image(s), {} text file(s); map '{}' is {}x{} cells of {}x{} px",
        images,
        texts,
        config.start_map,
        renderer.columns(),
        renderer.rows(),
        renderer.cell_width(),
        renderer.cell_height()
    );
    Ok(())
}

#[cfg(feature = "shell")]
fn open_window(config: &GameConfig, assets: Rc<AssetLibrary>) -> GameResult<()> {
    tilegame::shell::run(config, assets)
}

#[cfg(not(feature = "shell"))]
fn open_window(_config: &GameConfig, _assets: Rc<AssetLibrary>) -> GameResult<()> {
    Ok(())
}
