//! CPU-side draw list
//!
//! `VertexBatch` is a [`Surface`] that tessellates every draw call into
//! colored triangles. The GPU pipeline uploads the result once per frame;
//! headless runs and tests inspect it directly.

use glam::Vec2;

use super::Surface;
use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use crate::color::Color;

#[derive(Debug, Clone)]
pub struct VertexBatch {
    width: f32,
    height: f32,
    background: Color,
    fill: Color,
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            fill: Color::default(),
            vertices: Vec::new(),
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of triangles drawn since the last full clear
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Surface for VertexBatch {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let covers_all =
            x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height;
        if covers_all {
            self.vertices.clear();
        } else {
            // Partial clear: paint the region with the background
            self.vertices.extend(shapes::rect(
                Vec2::new(x, y),
                Vec2::new(width, height),
                self.background.linear_rgba(),
            ));
        }
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.vertices.extend(shapes::rect(
            Vec2::new(x, y),
            Vec2::new(width, height),
            self.fill.linear_rgba(),
        ));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.vertices.extend(shapes::circle(
            Vec2::new(cx, cy),
            radius,
            self.fill.linear_rgba(),
            CIRCLE_SEGMENTS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clear_drops_vertices() {
        let mut batch = VertexBatch::new(1024.0, 640.0, Color::White);
        batch.fill_rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(batch.triangle_count(), 2);
        batch.clear_rect(0.0, 0.0, 1024.0, 640.0);
        assert!(batch.vertices().is_empty());
    }

    #[test]
    fn test_partial_clear_paints_background() {
        let mut batch = VertexBatch::new(1024.0, 640.0, Color::White);
        batch.clear_rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(batch.triangle_count(), 2);
        assert_eq!(batch.vertices()[0].color, Color::White.linear_rgba());
    }

    #[test]
    fn test_fill_uses_current_color() {
        let mut batch = VertexBatch::new(1024.0, 640.0, Color::White);
        batch.set_fill(Color::Red);
        batch.fill_circle(100.0, 100.0, 5.0);
        assert_eq!(batch.triangle_count(), CIRCLE_SEGMENTS as usize);
        assert!(
            batch
                .vertices()
                .iter()
                .all(|v| v.color == Color::Red.linear_rgba())
        );
    }
}
