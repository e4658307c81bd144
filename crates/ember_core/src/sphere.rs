//! Sphere primitive.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material_index: usize,
}

impl Sphere {
    /// Create a new sphere. Radius must be positive.
    pub fn new(center: Vec3, radius: f32, material_index: usize) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material_index,
        }
    }
}

impl Hittable for Sphere {
    fn closest_hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent rays (discriminant == 0) are treated as misses.
        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root; fall back to the far one when the near
        // root lies outside the ray bounds (origin inside the sphere).
        let mut root = (h - sqrtd) / a;
        if !ray.bounds.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray.bounds.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.point = ray.at(root);
        rec.normal = (rec.point - self.center) / self.radius;
        rec.material_index = self.material_index;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_through_center() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 100.0), 50.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(sphere.closest_hit(&ray, &mut rec));
        // Distance to center minus radius.
        assert!((rec.t - 50.0).abs() < 0.001);
        // Normal is collinear with the ray at the entry point.
        assert!((rec.normal.dot(ray.direction).abs() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 100.0), 50.0, 0);
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(!sphere.closest_hit(&ray, &mut rec));
    }

    #[test]
    fn test_sphere_miss_offset_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(!sphere.closest_hit(&ray, &mut rec));
    }

    #[test]
    fn test_sphere_tangent_ray_rejected() {
        // Ray grazing the sphere exactly at its equator: discriminant == 0.
        let sphere = Sphere::new(Vec3::new(0.0, 1.0, 5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(!sphere.closest_hit(&ray, &mut rec));
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, 3);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(sphere.closest_hit(&ray, &mut rec));
        assert!((rec.t - 2.0).abs() < 0.001);
        assert_eq!(rec.material_index, 3);
        // Outward normal, even when hit from inside.
        assert!((rec.normal - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_sphere_respects_max_bound() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1e-4, 5.0);
        let mut rec = HitRecord::default();

        assert!(!sphere.closest_hit(&ray, &mut rec));
    }
}
