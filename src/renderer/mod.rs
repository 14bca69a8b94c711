//! Rendering module
//!
//! Game code draws through the [`Surface`] trait. `VertexBatch` turns those
//! calls into triangles and `RenderState` presents them with WebGPU.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use pipeline::{GpuSurface, RenderState};
pub use vertex::Vertex;

use crate::color::Color;
use crate::sim::{Ball, GameState, Paddle};

/// A rectangular raster target, top-left origin, in pixels
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);
}

pub fn draw_paddle<S: Surface>(surface: &mut S, paddle: &Paddle) {
    surface.set_fill(paddle.color);
    surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);
}

pub fn draw_ball<S: Surface>(surface: &mut S, ball: &Ball) {
    surface.set_fill(ball.color);
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius());
}

/// Draw ball, then left and right paddles
pub fn draw_entities<S: Surface>(surface: &mut S, state: &GameState) {
    draw_ball(surface, &state.ball);
    draw_paddle(surface, &state.p1);
    draw_paddle(surface, &state.p2);
}
