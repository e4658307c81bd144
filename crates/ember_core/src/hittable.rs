//! Hittable trait and HitRecord for ray-primitive intersection.

use ember_math::{Ray, Vec3};

/// Record of a ray-primitive intersection.
///
/// `normal` is the outward surface normal at the hit point; it is never
/// flipped toward the ray. `material_index` refers into the owning scene's
/// material table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// World-space point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Index into the scene's material table
    pub material_index: usize,
}

impl Default for HitRecord {
    fn default() -> Self {
        // t starts at infinity so minimum-t folds compare correctly before
        // the first hit is found.
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::INFINITY,
            material_index: 0,
        }
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test the ray against this primitive, filling `rec` with the closest
    /// hit inside `ray.bounds`.
    ///
    /// Returns true if a valid hit was found.
    fn closest_hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Occlusion query: does the ray hit this primitive anywhere inside its
    /// bounds? Implementations may return on the first valid hit instead of
    /// searching for the closest one.
    fn any_hit(&self, ray: &Ray) -> bool {
        let mut scratch = HitRecord::default();
        self.closest_hit(ray, &mut scratch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_record_default_t_is_infinite() {
        let rec = HitRecord::default();

        assert_eq!(rec.t, f32::INFINITY);
        assert_eq!(rec.material_index, 0);
        // Any real hit distance must win a minimum-t comparison.
        assert!(5.0 < rec.t);
    }
}
