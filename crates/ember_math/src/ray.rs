use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and the parametric range in
/// which hits are accepted.
///
/// `direction` is expected to be normalized before the ray is used for
/// intersection math; callers must never pass a zero vector. `bounds` is
/// exclusive on both ends, so a hit exactly at `bounds.min` or `bounds.max`
/// is rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub bounds: Interval,
}

impl Ray {
    /// Lower parametric bound used by [`Ray::new`]. Keeps hits from
    /// re-intersecting the surface they start on.
    pub const DEFAULT_MIN: f32 = 1e-4;

    /// Create a ray with the default bounds `(DEFAULT_MIN, +inf)`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            bounds: Interval::new(Self::DEFAULT_MIN, f32::INFINITY),
        }
    }

    /// Create a ray with explicit parametric bounds (used for shadow rays,
    /// where `max` is the distance to the light).
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            bounds: Interval::new(min, max),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
