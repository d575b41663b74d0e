//! Browser client for the home run derby
//!
//! Loads the sprites, owns the [`Game`] and a Canvas 2D [`Renderer`], and
//! exposes entry points for the page's timer and DOM events.

mod assets;
mod input;
mod logger;
mod renderer;

use std::cell::RefCell;

use game_core::{Config, Game, Params, Variant};
use glam::IVec2;
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Main client state
pub struct Client {
    game: Game,
    renderer: Renderer,
}

impl Client {
    /// Load assets and set up the game. Missing images abort startup.
    pub async fn new(canvas: HtmlCanvasElement, variant: Variant) -> Result<Self, String> {
        let (bat_sprite, ball_sprite) = assets::load_sprites().await?;

        let config = Config::for_variant(variant)
            .with_sprite_sizes(bat_sprite.natural_size, ball_sprite.natural_size);
        log::info!(
            "Starting {} rules: bat {}x{}, ball {}x{}, foul limit {}",
            variant.name(),
            config.bat_size.x,
            config.bat_size.y,
            config.ball_size.x,
            config.ball_size.y,
            config.foul_limit
        );

        let renderer = Renderer::new(&canvas, bat_sprite, ball_sprite)?;
        let game = Game::new(config, random_seed());

        Ok(Self { game, renderer })
    }

    /// Advance by real elapsed milliseconds and redraw
    pub fn tick_frame(&mut self, dt_ms: f64) -> Result<(), String> {
        self.game.advance((dt_ms / 1000.0) as f32);
        self.render()
    }

    pub fn pointer_moved(&mut self, offset_x: f64, display_width: f64) -> Result<(), String> {
        let x = input::to_arena_x(offset_x, display_width, self.game.config.arena.x);
        self.game.pointer_moved(x);
        self.render()
    }

    pub fn pointer_clicked(&mut self) -> Result<(), String> {
        self.game.click();
        self.render()
    }

    /// Returns true when the key was consumed by the game
    pub fn key_pressed(&mut self, key: &str) -> Result<bool, String> {
        if !input::is_restart_key(key) {
            return Ok(false);
        }
        if self.game.restart_requested() {
            self.render()?;
        }
        Ok(true)
    }

    pub fn render(&self) -> Result<(), String> {
        self.renderer.draw(&self.game.frame())
    }

    pub fn arena(&self) -> IVec2 {
        self.game.config.arena
    }
}

fn random_seed() -> u64 {
    let entropy = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (entropy << 32) ^ js_sys::Date::now() as u64
}

// Global client storage for WASM bindings
thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> Result<R, String>) -> Result<R, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client).map_err(|e| JsValue::from_str(&e)),
        None => Err(JsValue::from_str("Client not initialized")),
    })
}

/// Load assets and start the client. `variant` is "classic" or "arcade".
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement, variant: String) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    wasm_bindgen_futures::future_to_promise(async move {
        let variant = Variant::from_name(&variant).unwrap_or_else(|| {
            log::warn!("Unknown variant {:?}, using classic rules", variant);
            Variant::Classic
        });

        match Client::new(canvas, variant).await {
            Ok(client) => {
                client.render().map_err(|e| JsValue::from_str(&e))?;
                CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => {
                log::error!("Startup failed: {}", e);
                Err(JsValue::from_str(&e))
            }
        }
    })
}

/// Timer callback; `dt_ms` is the real time since the previous call
#[wasm_bindgen]
pub fn tick_frame(dt_ms: f64) -> Result<(), JsValue> {
    with_client(|client| client.tick_frame(dt_ms))
}

#[wasm_bindgen]
pub fn pointer_moved(offset_x: f64, display_width: f64) -> Result<(), JsValue> {
    with_client(|client| client.pointer_moved(offset_x, display_width))
}

#[wasm_bindgen]
pub fn pointer_clicked() -> Result<(), JsValue> {
    with_client(|client| client.pointer_clicked())
}

#[wasm_bindgen]
pub fn key_pressed(key: &str) -> Result<bool, JsValue> {
    with_client(|client| client.key_pressed(key))
}

#[wasm_bindgen]
pub fn render_frame() -> Result<(), JsValue> {
    with_client(|client| client.render())
}

/// Tick length the page timer should use, in milliseconds
#[wasm_bindgen]
pub fn tick_interval_ms() -> u32 {
    (Params::TICK_DT * 1000.0).round() as u32
}

/// Canvas size expected by the client
#[wasm_bindgen]
pub fn arena_size() -> Result<Vec<i32>, JsValue> {
    with_client(|client| {
        let arena = client.arena();
        Ok(vec![arena.x, arena.y])
    })
}
