//! Fundamental geometric and simulation types.
//!
//! Screen space: origin at the top-left corner, +x right, +y down.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Straight up the screen (player shots).
pub const UP: Vec2 = Vec2::new(0.0, -1.0);

/// Straight down the screen. Also the fallback for a zero-length aim vector.
pub const DOWN: Vec2 = Vec2::new(0.0, 1.0);

/// Width and height of an entity in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle, stored as min/max corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

/// Visible play area in pixels. May change between ticks (rotation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulated (unpaused) ticks since level start.
    pub tick: u64,
    /// Elapsed simulation time in seconds since level start.
    pub elapsed_secs: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Same box scaled uniformly (hitbox shrink).
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Larger of the two sides.
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of `size` centred on `center`.
    pub fn from_center(center: Vec2, size: Size) -> Self {
        let half = Vec2::new(size.width / 2.0, size.height / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Half-open containment: `min <= p < max` on both axes.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Strict overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Closed bounds test: a point on the screen edge is still on screen.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_VIEWPORT_WIDTH,
            crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Point-in-rectangle test used for projectile hits.
pub fn rect_contains(rect: &Rect, point: Vec2) -> bool {
    rect.contains(point)
}

/// Rectangle overlap test used for body contact.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Unit vector pointing from `from` towards `to`.
///
/// Coincident points have no direction; [`DOWN`] is returned instead.
pub fn normalize(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON || !length.is_finite() {
        return DOWN;
    }
    delta / length
}

/// Unit vector rotated `degrees` away from straight down (positive = towards +x).
pub fn rotated_down(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), radians.cos())
}
