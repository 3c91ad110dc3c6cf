//! Raylib window.
//!
//! Opens a resizable window, checks the monitor is large enough, uploads the
//! tile textures and runs the frame loop:
//!
//! 1. forward window resizes to [`Game::resize`]
//! 2. on the menu, Enter or a click on "New Game" calls
//!    [`Game::start_new_game`]
//! 3. draw the menu or let the game draw the map through [`RaylibSurface`]
//!
//! Any error from the game ends the loop and is returned to `main`.

use log::info;
use raylib::ffi;
use raylib::prelude::*;
use std::rc::Rc;

use crate::error::GameResult;
use crate::game::Game;
use crate::resources::assets::AssetLibrary;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameStates;
use crate::resources::imagestore::TileImage;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::systems::render::{CellRect, DrawSurface};

const BUTTON_WIDTH: f32 = 240.0;
const BUTTON_HEIGHT: f32 = 60.0;
const BUTTON_LABEL: &str = "New Game";
const BUTTON_FONT_SIZE: i32 = 30;

/// Draws tile images with their uploaded textures.
pub struct RaylibSurface<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
}

impl DrawSurface for RaylibSurface<'_, '_> {
    fn draw_image(&mut self, image: &TileImage, dest: CellRect) {
        if let Some(tex) = self.textures.get(image.handle().id()) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            let dest = Rectangle {
                x: dest.x as f32,
                y: dest.y as f32,
                width: dest.width as f32,
                height: dest.height as f32,
            };
            self.d
                .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }
}

/// Fail when the current monitor is below the configured minimum.
fn check_display(config: &GameConfig) -> GameResult<()> {
    let monitor: i32 = unsafe { ffi::GetCurrentMonitor() };
    let monitor_width = unsafe { ffi::GetMonitorWidth(monitor) };
    let monitor_height = unsafe { ffi::GetMonitorHeight(monitor) };
    info!("Monitor dimensions: {}x{}", monitor_width, monitor_height);
    WindowSize::new(monitor_width.max(0) as u32, monitor_height.max(0) as u32)
        .ensure_minimum(config.min_display_width, config.min_display_height)
}

fn screen_size(rl: &RaylibHandle) -> WindowSize {
    WindowSize::new(
        rl.get_screen_width().max(0) as u32,
        rl.get_screen_height().max(0) as u32,
    )
}

/// "New Game" button, centered in the window.
fn menu_button(screen: WindowSize) -> Rectangle {
    Rectangle {
        x: (screen.w as f32 - BUTTON_WIDTH) * 0.5,
        y: (screen.h as f32 - BUTTON_HEIGHT) * 0.5,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    }
}

fn draw_menu(d: &mut RaylibDrawHandle, button: Rectangle, hovered: bool) {
    let fill = if hovered { Color::DARKGREEN } else { Color::DARKGRAY };
    d.draw_rectangle_rec(button, fill);
    d.draw_rectangle_lines_ex(button, 2.0, Color::RAYWHITE);
    d.draw_text(
        BUTTON_LABEL,
        button.x as i32 + 52,
        button.y as i32 + 15,
        BUTTON_FONT_SIZE,
        Color::RAYWHITE,
    );
}

/// Open the window and run until it is closed or the game fails.
pub fn run(config: &GameConfig, assets: Rc<AssetLibrary>) -> GameResult<()> {
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);

    check_display(config)?;

    let textures = TextureStore::upload(&mut rl, &thread, &assets)?;
    let game = Game::new(assets, config.start_map.clone(), screen_size(&rl));

    while !rl.window_should_close() {
        if rl.is_window_resized() {
            let size = screen_size(&rl);
            game.resize(size.w, size.h)?;
        }

        let button = menu_button(screen_size(&rl));
        let hovered = button.check_collision_point_rec(rl.get_mouse_position());
        if game.state() == GameStates::Menu {
            let clicked = hovered && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
            if clicked || rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                game.start_new_game()?;
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        match game.state() {
            GameStates::Menu => draw_menu(&mut d, button, hovered),
            GameStates::Playing => {
                let mut surface = RaylibSurface {
                    d: &mut d,
                    textures: &textures,
                };
                game.render(&mut surface);
            }
        }
    }
    info!("Window closed");
    Ok(())
}
