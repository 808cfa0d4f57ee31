//! Drawing seam between the simulation and the renderer.
//!
//! The simulation knows nothing about the render target beyond this trait:
//! it issues rectangle and circle commands and the host rasterizes them.
//! Colors are plain RGB triples; the full palette/asset lookup lives on
//! the host side.

use glam::Vec2;

use crate::types::Rect;
use crate::viewport::Viewport;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
pub const DARK_RED: Color = Color::rgb(128, 0, 0);
pub const GOLD: Color = Color::rgb(255, 215, 0);
pub const YELLOW_GREEN: Color = Color::rgb(154, 205, 50);

/// An opaque drawable target. The simulation issues commands; the host
/// decides what a pixel is.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
}

/// Capability shared by everything the world renders.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn DrawSurface, viewport: &Viewport);
}
