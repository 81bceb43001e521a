//! Collision tests for circles and axis-aligned rectangles
//!
//! Two deliberately different policies live here: paddles use a band test
//! (horizontal span overlap plus ball *centre* inside the vertical span),
//! while obstacles use a full circle-circle overlap. Keep them separate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (y grows downward, `min` is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

/// Circle-circle overlap (touching counts as a miss)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

/// Full circle-rectangle overlap using the closest point on the rectangle
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = center.clamp(rect.min, rect.max());
    center.distance_squared(closest) <= radius * radius
}

/// Paddle hit test: the ball's horizontal span overlaps the paddle's, and the
/// ball centre lies inside the paddle's vertical span. Ball radius is ignored
/// on the y axis.
pub fn paddle_band_hit(ball_pos: Vec2, ball_radius: f32, paddle: &Rect) -> bool {
    let max = paddle.max();
    ball_pos.x - ball_radius <= max.x
        && ball_pos.x + ball_radius >= paddle.min.x
        && ball_pos.y >= paddle.min.y
        && ball_pos.y <= max.y
}

/// Redirect `velocity` along the ray from `center` through `ball_pos`,
/// preserving its magnitude
pub fn deflect_from(center: Vec2, ball_pos: Vec2, velocity: Vec2) -> Vec2 {
    let away = (ball_pos - center).normalize_or(Vec2::X);
    away * velocity.length()
}

/// Normalized offset of `y` from the centre of `paddle`: 0 at the centre,
/// +-1 at the top/bottom edges
#[inline]
pub fn hit_offset(y: f32, paddle: &Rect) -> f32 {
    let half = paddle.size.y / 2.0;
    (y - paddle.center().y) / half
}
