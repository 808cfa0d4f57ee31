//! Viewport geometry.
//!
//! An immutable snapshot of the screen dimensions. Everything derived from
//! screen size (road band, shop band, tower and enemy sizes) is a pure
//! function of this value; a resolution change means constructing a new
//! `Viewport` and handing it to the world, never mutating one in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Full window rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The road band: (top y, height), vertically centered.
    pub fn road_band(&self) -> (f32, f32) {
        let h = self.height * ROAD_HEIGHT_FRACTION;
        (self.height / 2.0 - h / 2.0, h)
    }

    /// Road band as a rectangle spanning the full window width.
    pub fn road_rect(&self) -> Rect {
        let (y, h) = self.road_band();
        Rect::new(0.0, y, self.width, h)
    }

    /// Vertical center of the road; the y slot every enemy travels in.
    pub fn road_center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Distance an enemy travels before it exits: the window width.
    pub fn road_length(&self) -> f32 {
        self.width
    }

    /// The shop band at the bottom: (top y, height).
    pub fn shop_band(&self) -> (f32, f32) {
        let h = self.height * SHOP_HEIGHT_FRACTION;
        (self.height - h, h)
    }

    /// The purchasable-tower preview square inside the shop band.
    pub fn shop_preview_rect(&self) -> Rect {
        let (shop_y, shop_h) = self.shop_band();
        let size = self.tower_size();
        Rect::new(
            SHOP_PREVIEW_MARGIN,
            shop_y + (shop_h - size) / 2.0,
            size,
            size,
        )
    }

    /// Tower side length.
    pub fn tower_size(&self) -> f32 {
        self.width.min(self.height) * TOWER_SIZE_FRACTION
    }

    /// Enemy side length.
    pub fn enemy_size(&self) -> f32 {
        self.height * ENEMY_SIZE_FRACTION
    }

    /// Health bar rectangle: centered horizontally near the top edge.
    pub fn health_bar_rect(&self) -> Rect {
        let w = self.width * HEALTH_BAR_WIDTH_FRACTION;
        let h = self.height * HEALTH_BAR_HEIGHT_FRACTION;
        Rect::new((self.width - w) / 2.0, HEALTH_BAR_TOP_MARGIN, w, h)
    }

    /// The point on the road an enemy at `position` occupies.
    pub fn road_point(&self, position: f32) -> Vec2 {
        Vec2::new(position, self.road_center_y())
    }
}
