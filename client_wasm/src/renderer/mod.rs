pub mod draw;
pub mod hud;

use crate::assets::Sprite;
use game_core::{Frame, Params};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D renderer; reads a [`Frame`] and never touches game state
pub struct Renderer {
    pub ctx: CanvasRenderingContext2d,
    pub size: (u32, u32),
    pub bat_sprite: Sprite,
    pub ball_sprite: Sprite,
}

impl Renderer {
    pub fn new(
        canvas: &HtmlCanvasElement,
        bat_sprite: Sprite,
        ball_sprite: Sprite,
    ) -> Result<Self, String> {
        let size = (Params::ARENA_WIDTH as u32, Params::ARENA_HEIGHT as u32);
        canvas.set_width(size.0);
        canvas.set_height(size.1);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        Ok(Self {
            ctx,
            size,
            bat_sprite,
            ball_sprite,
        })
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), String> {
        draw::draw_frame(self, frame)
    }
}
