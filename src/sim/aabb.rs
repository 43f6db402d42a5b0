//! Axis-aligned bounding boxes
//!
//! Every overlap test in the arena goes through `Aabb`. A box is an origin
//! (top-left corner) plus a size; it covers `[min, min + size)` on each axis,
//! so boxes that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Box of `size` whose top-left corner is at `origin`
    pub fn from_origin(origin: Vec2, size: f32) -> Self {
        Self::new(origin, Vec2::splat(size))
    }

    /// Exclusive bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Finite corners and a span that stays finite and positive on both axes
    /// once computed in f32
    pub fn is_well_formed(&self) -> bool {
        let max = self.max();
        let span = max - self.min;
        self.min.is_finite() && max.is_finite() && span.is_finite() && max.cmpgt(self.min).all()
    }

    /// Standard AABB intersection test
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Whether `point` lies inside the box
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Clamp an origin so that a box of `size` stays inside this one.
    /// If `size` is larger than the box on an axis, the origin pins to `min`.
    pub fn clamp_origin(&self, origin: Vec2, size: Vec2) -> Vec2 {
        let hi = (self.max() - size).max(self.min);
        origin.clamp(self.min, hi)
    }
}
