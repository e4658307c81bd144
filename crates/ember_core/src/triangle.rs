//! Triangle primitive.
//!
//! Intersection goes through the triangle's supporting plane and an edge
//! sign test against the face normal, so the same code path honors the
//! per-mesh cull mode.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Ray, Vec3};

/// Which side of a triangle is skipped during intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Both sides are hittable; only exactly grazing rays are rejected.
    #[default]
    None,
    /// Reject hits that see the front face (`dot(normal, ray) < 0`).
    FrontFace,
    /// Reject hits that see the back face (`dot(normal, ray) > 0`).
    BackFace,
}

/// A single triangle with a precomputed unit face normal.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Unit face normal; zero when the triangle is degenerate.
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Create a triangle, deriving the face normal from the winding
    /// v0 -> v1 -> v2. A degenerate triangle gets a zero normal and never
    /// reports hits.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: CullMode, material_index: usize) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }

    /// Create a triangle with a caller-supplied unit normal (meshes pass
    /// their precomputed face normals through here).
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }
}

impl Hittable for Triangle {
    fn closest_hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let normal = self.normal;

        // Degenerate faces carry a zero (or NaN) normal; the negated
        // comparison also rejects NaN.
        if !(normal.length_squared() > 0.0) {
            return false;
        }

        let denom = ray.direction.dot(normal);
        match self.cull_mode {
            CullMode::FrontFace => {
                if denom < 0.0 {
                    return false;
                }
            }
            CullMode::BackFace => {
                if denom > 0.0 {
                    return false;
                }
            }
            CullMode::None => {}
        }
        if denom == 0.0 {
            return false;
        }

        let t = (self.v0 - ray.origin).dot(normal) / denom;
        if !ray.bounds.surrounds(t) {
            return false;
        }

        // Inside test: the hit point must sit on the normal side of every
        // directed edge of the winding.
        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            let edge = b - a;
            let to_point = p - a;
            if normal.dot(edge.cross(to_point)) < 0.0 {
                return false;
            }
        }

        rec.t = t;
        rec.point = p;
        rec.normal = normal;
        rec.material_index = self.material_index;

        true
    }
}
