//! Game assembly.
//!
//! [`Game`] owns the event bus and wires the tile map renderer to it:
//!
//! - `NewGame` loads the start map and switches to the game screen
//! - `WindowResized` hands the current viewport to the renderer and
//!   recomputes the cell size
//!
//! The shell drives it through [`Game::start_new_game`], [`Game::resize`]
//! and [`Game::render`]. Nothing here touches a window, so the whole flow
//! runs headless in tests.

use log::info;
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::error::GameResult;
use crate::events::bus::{EventBus, Subscriber};
use crate::events::lifecycle::EventKind;
use crate::resources::assets::AssetLibrary;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::windowsize::WindowSize;
use crate::systems::render::{DrawSurface, TileMapRenderer};

pub struct Game {
    bus: EventBus,
    map: Rc<RefCell<TileMapRenderer>>,
    viewport: Rc<Cell<WindowSize>>,
    state: Rc<RefCell<GameState>>,
}

impl Game {
    /// Build the renderer over `assets` and subscribe it to the bus.
    pub fn new(assets: Rc<AssetLibrary>, start_map: impl Into<String>, viewport: WindowSize) -> Self {
        let start_map = start_map.into();
        let map = Rc::new(RefCell::new(TileMapRenderer::new(assets)));
        let viewport = Rc::new(Cell::new(viewport));
        let state = Rc::new(RefCell::new(GameState::new()));
        let mut bus = EventBus::new();

        let on_new_game: Subscriber = {
            let map = Rc::clone(&map);
            let state = Rc::clone(&state);
            Rc::new(move || {
                map.borrow_mut().load_map(&start_map)?;
                state.borrow_mut().set(GameStates::Playing);
                Ok(())
            })
        };
        bus.subscribe(EventKind::NewGame, on_new_game);

        let on_resize: Subscriber = {
            let map = Rc::clone(&map);
            let viewport = Rc::clone(&viewport);
            Rc::new(move || {
                let size = viewport.get();
                let mut map = map.borrow_mut();
                map.set_viewport_size(size.w, size.h);
                map.calculate_cell_dimensions();
                Ok(())
            })
        };
        bus.subscribe(EventKind::WindowResized, on_resize);

        Self {
            bus,
            map,
            viewport,
            state,
        }
    }

    /// Publish `NewGame` followed by `WindowResized`.
    pub fn start_new_game(&self) -> GameResult<()> {
        info!("Starting a new game");
        self.bus.publish(EventKind::NewGame)?;
        self.bus.publish(EventKind::WindowResized)?;
        Ok(())
    }

    /// Record the new drawable size and publish `WindowResized`.
    pub fn resize(&self, width: u32, height: u32) -> GameResult<()> {
        self.viewport.set(WindowSize::new(width, height));
        self.bus.publish(EventKind::WindowResized)?;
        Ok(())
    }

    /// Draw the map when the game screen is showing.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.state.borrow().is_playing() {
            self.map.borrow().render(surface);
        }
    }

    pub fn state(&self) -> GameStates {
        self.state.borrow().get()
    }

    pub fn viewport(&self) -> WindowSize {
        self.viewport.get()
    }

    pub fn renderer(&self) -> Ref<'_, TileMapRenderer> {
        self.map.borrow()
    }

    /// The bus, for extra subscriptions.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}
