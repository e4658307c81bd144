//! Point and directional lights.

use crate::material::Color;
use ember_math::Vec3;

/// A light source contributing radiance toward shaded points.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    /// Omnidirectional emitter with inverse-square falloff.
    Point {
        position: Vec3,
        intensity: f32,
        color: Color,
    },
    /// Parallel light with constant radiance, defined by the direction the
    /// light travels.
    Directional {
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    /// Unnormalized vector from `target` toward the light. Callers
    /// normalize before feeding BRDF evaluation.
    pub fn direction_to(&self, target: Vec3) -> Vec3 {
        match self {
            Light::Point { position, .. } => *position - target,
            Light::Directional { direction, .. } => -*direction,
        }
    }

    /// Incident radiance arriving at `target`.
    ///
    /// Point lights fall off with squared distance (no square root taken);
    /// directional lights are constant.
    pub fn radiance(&self, target: Vec3) -> Color {
        match self {
            Light::Point {
                position,
                intensity,
                color,
            } => *color * (*intensity / position.distance_squared(target)),
            Light::Directional {
                intensity, color, ..
            } => *color * *intensity,
        }
    }

    /// Distance from `target` to the light, used as the reach of shadow
    /// rays. Directional lights are infinitely far away.
    pub fn distance(&self, target: Vec3) -> f32 {
        match self {
            Light::Point { position, .. } => position.distance(target),
            Light::Directional { .. } => f32::INFINITY,
        }
    }
}
