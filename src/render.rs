//! Canvas2D rendering
//!
//! Draws the whole frame with plain fill primitives: the bird as a filled
//! circle, each pipe as two rectangles around its gap. No assets.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{PIPE_GAP, PIPE_WIDTH};
use crate::sim::GameState;

const BIRD_COLOR: &str = "#FFD700";
const PIPE_COLOR: &str = "#75b855";

/// Presenter that owns the canvas 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Grab the 2D context from the canvas. Field dimensions come from the
    /// canvas's configured width/height attributes, not its CSS size.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Draw one frame. Safe to keep calling after game over; the simulation
    /// stops mutating, so the picture freezes on the final state.
    pub fn draw(&self, state: &GameState) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_bird(state);
        for pipe in &state.pipes {
            self.draw_pipe(pipe.x as f64, pipe.top_height as f64);
        }
    }

    fn draw_bird(&self, state: &GameState) {
        let center = state.bird.center();
        let radius = (state.bird.size / 2.0) as f64;

        self.ctx.set_fill_style_str(BIRD_COLOR);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn draw_pipe(&self, x: f64, top_height: f64) {
        let gap = PIPE_GAP as f64;
        let width = PIPE_WIDTH as f64;

        self.ctx.set_fill_style_str(PIPE_COLOR);
        // Top segment
        self.ctx.fill_rect(x, 0.0, width, top_height);
        // Bottom segment
        self.ctx.fill_rect(
            x,
            top_height + gap,
            width,
            self.height - (top_height + gap),
        );
    }
}
