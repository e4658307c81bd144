//! Infinite plane primitive.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Ray, Vec3};

/// An infinite plane defined by a point on it and its unit normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: usize,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material_index: usize) -> Self {
        Self {
            origin,
            normal,
            material_index,
        }
    }
}

impl Hittable for Plane {
    fn closest_hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let denom = ray.direction.dot(self.normal);

        // Parallel rays would divide by zero; report a miss instead.
        if denom.abs() < 1e-8 {
            return false;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !ray.bounds.surrounds(t) {
            return false;
        }

        rec.t = t;
        rec.point = ray.at(t);
        rec.normal = self.normal;
        rec.material_index = self.material_index;

        true
    }
}
