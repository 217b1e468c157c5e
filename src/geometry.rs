//! Screen-space rectangles.
//!
//! Gameplay runs in **screen space**: origin at the top-left corner of the play
//! area, `+y` pointing down, units in pixels. Bevy's 2D world space has its
//! origin at the window centre with `+y` up; [`Hitbox::world_center`] performs
//! the conversion for rendering only.

use bevy::prelude::*;

/// Axis-aligned bounding rectangle, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Centre of the rectangle in Bevy world space for a screen of `screen` pixels.
    pub fn world_center(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            self.x + self.width * 0.5 - screen.x * 0.5,
            screen.y * 0.5 - (self.y + self.height * 0.5),
        )
    }
}
