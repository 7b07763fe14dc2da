/*
 * Vector Math Module
 *
 * Small helpers over nannou's Vec2 used throughout the simulation:
 * random placement inside map bounds, clamping to map bounds, flooring
 * to tile coordinates, and finiteness checks.
 */

use nannou::prelude::*;
use rand::Rng;

// A uniformly random point in [0, width) x [0, height)
pub fn random_point(rng: &mut impl Rng, width: f32, height: f32) -> Vec2 {
    vec2(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}

// Clamp a point into [0, width] x [0, height]
pub fn clamp_to_bounds(point: Vec2, width: f32, height: f32) -> Vec2 {
    vec2(point.x.clamp(0.0, width), point.y.clamp(0.0, height))
}

// Floor each component, mapping a continuous position to its tile coordinate
pub fn floor_vec(point: Vec2) -> Vec2 {
    vec2(point.x.floor(), point.y.floor())
}

// True when both components are finite numbers
pub fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

// Component-wise approximate equality for float comparisons in tests
pub fn approx_eq(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
}
