//! Curved path followed by the prompt icon.

use bevy::prelude::*;

/// Evaluates a quadratic Bézier curve at `t` using de Casteljau's construction.
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    p0.lerp(p1, t).lerp(p1.lerp(p2, t), t)
}

/// Returns `(control, end)` for a path starting at `start`.
///
/// The end point sits `vertical_distance` below and `curve_offset` to the side of the
/// start; the control point is pushed sideways by the same offset at half the height,
/// which bends the path outward.
pub fn prompt_path(start: Vec2, curve_offset: f32, vertical_distance: f32) -> (Vec2, Vec2) {
    let control = Vec2::new(start.x + curve_offset, vertical_distance.mul_add(-0.5, start.y));
    let end = Vec2::new(start.x + curve_offset, start.y - vertical_distance);
    (control, end)
}
