//! Indexed triangle mesh.
//!
//! Structure-of-arrays: local positions, per-face normals, and an index
//! buffer, alongside their world-space counterparts and a world-space AABB
//! that prunes rays before any per-triangle test runs. The transformed
//! arrays are resynced whenever the transform changes.

use crate::hittable::{HitRecord, Hittable};
use crate::triangle::{CullMode, Triangle};
use ember_math::{Aabb, Mat4, Ray, Vec3};

/// An indexed triangle mesh with a shared cull mode and material.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    /// One normal per face, derived from the winding of its index triple.
    normals: Vec<Vec3>,
    indices: Vec<u32>,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    bounds: Aabb,
    transform: Mat4,

    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl TriangleMesh {
    /// Build a mesh from raw position/index arrays.
    ///
    /// Indices are consumed in triples; a trailing partial triple is
    /// ignored. Out-of-range indices and degenerate faces are tolerated
    /// (logged once here, skipped during hit tests).
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Self {
        if indices.len() % 3 != 0 {
            log::warn!(
                "mesh index count {} is not a multiple of 3; trailing indices ignored",
                indices.len()
            );
        }

        let normals = compute_face_normals(&positions, &indices);

        let mut mesh = Self {
            transformed_positions: positions.clone(),
            transformed_normals: normals.clone(),
            bounds: Aabb::from_point_set(&positions),
            transform: Mat4::IDENTITY,
            positions,
            normals,
            indices,
            cull_mode,
            material_index,
        };
        mesh.update_transforms();
        mesh
    }

    /// Replace the mesh's world transform and resync the transformed
    /// positions/normals and the world-space bounds.
    pub fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
        self.update_transforms();
    }

    /// Current world transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn update_transforms(&mut self) {
        let transform = self.transform;
        self.transformed_positions = self
            .positions
            .iter()
            .map(|p| transform.transform_point3(*p))
            .collect();
        self.transformed_normals = self
            .normals
            .iter()
            .map(|n| transform.transform_vector3(*n).normalize_or_zero())
            .collect();
        self.bounds = Aabb::from_point_set(&self.transformed_positions);
    }

    /// Assemble the world-space triangle for a face, or None when its
    /// indices are out of range.
    fn face_triangle(&self, face_index: usize, face: &[u32]) -> Option<Triangle> {
        let v0 = *self.transformed_positions.get(face[0] as usize)?;
        let v1 = *self.transformed_positions.get(face[1] as usize)?;
        let v2 = *self.transformed_positions.get(face[2] as usize)?;
        let normal = *self.transformed_normals.get(face_index)?;
        Some(Triangle::with_normal(
            v0,
            v1,
            v2,
            normal,
            self.cull_mode,
            self.material_index,
        ))
    }
}

impl Hittable for TriangleMesh {
    fn closest_hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        if !self.bounds.hit(ray) {
            return false;
        }

        let mut query = *ray;
        let mut hit_anything = false;
        let mut face_rec = HitRecord::default();

        for (face_index, face) in self.indices.chunks_exact(3).enumerate() {
            let Some(triangle) = self.face_triangle(face_index, face) else {
                continue;
            };
            if triangle.closest_hit(&query, &mut face_rec) {
                hit_anything = true;
                *rec = face_rec;
                // Shrink the window so later faces must be strictly closer.
                query.bounds.max = face_rec.t;
            }
        }

        hit_anything
    }

    fn any_hit(&self, ray: &Ray) -> bool {
        if !self.bounds.hit(ray) {
            return false;
        }

        for (face_index, face) in self.indices.chunks_exact(3).enumerate() {
            let Some(triangle) = self.face_triangle(face_index, face) else {
                continue;
            };
            if triangle.any_hit(ray) {
                return true;
            }
        }

        false
    }
}

/// Derive one unit normal per index triple. Degenerate and out-of-range
/// faces get a zero normal, which the triangle test rejects.
fn compute_face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut degenerate = 0usize;
    let mut invalid = 0usize;

    let normals: Vec<Vec3> = indices
        .chunks_exact(3)
        .map(|face| {
            let (Some(&v0), Some(&v1), Some(&v2)) = (
                positions.get(face[0] as usize),
                positions.get(face[1] as usize),
                positions.get(face[2] as usize),
            ) else {
                invalid += 1;
                return Vec3::ZERO;
            };

            let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
            if normal == Vec3::ZERO {
                degenerate += 1;
            }
            normal
        })
        .collect();

    if invalid > 0 {
        log::warn!("mesh has {invalid} faces with out-of-range indices (skipped)");
    }
    if degenerate > 0 {
        log::warn!("mesh has {degenerate} degenerate faces (skipped)");
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit quad in the XY plane at z = 0, normals facing +Z.
    fn quad() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
            CullMode::None,
            2,
        )
    }

    #[test]
    fn test_mesh_counts() {
        let mesh = quad();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_mesh_closest_hit() {
        let mesh = quad();
        let ray = Ray::new(Vec3::new(0.5, 0.5, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(mesh.closest_hit(&ray, &mut rec));
        assert!((rec.t - 3.0).abs() < 0.001);
        assert_eq!(rec.material_index, 2);
        assert!((rec.normal.dot(Vec3::Z).abs() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_mesh_behind_origin_rejected_by_slab_test() {
        let mesh = quad();
        // The quad sits behind the ray origin; the AABB window collapses
        // before any triangle is examined.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(!mesh.bounds().hit(&ray));
        assert!(!mesh.closest_hit(&ray, &mut rec));
        assert!(!mesh.any_hit(&ray));
    }

    #[test]
    fn test_mesh_any_hit() {
        let mesh = quad();
        let hit_ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        let miss_ray = Ray::new(Vec3::new(5.0, 5.0, -3.0), Vec3::Z);

        assert!(mesh.any_hit(&hit_ray));
        assert!(!mesh.any_hit(&miss_ray));
    }

    #[test]
    fn test_mesh_set_transform_moves_hits() {
        let mut mesh = quad();
        mesh.set_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(mesh.closest_hit(&ray, &mut rec));
        assert!((rec.t - 10.0).abs() < 0.001);

        // The old location no longer hits.
        let old_ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        assert!(!mesh.closest_hit(&old_ray, &mut rec) || rec.t > 10.0);
    }

    #[test]
    fn test_mesh_rotation_rotates_normals() {
        let mut mesh = quad();
        mesh.set_transform(Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2));

        // After a 90-degree yaw the quad lies in the YZ plane; approach
        // along X.
        let ray = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::X);
        let mut rec = HitRecord::default();

        assert!(mesh.closest_hit(&ray, &mut rec));
        assert!((rec.normal.dot(Vec3::X).abs() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_mesh_closest_of_two_faces_wins() {
        // Two parallel quads stacked in z; the nearer one must win in both
        // iteration orders.
        let positions = vec![
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        ];
        let near_first = TriangleMesh::new(
            positions.clone(),
            vec![0, 1, 2, 3, 4, 5],
            CullMode::None,
            0,
        );
        let far_first = TriangleMesh::new(positions, vec![3, 4, 5, 0, 1, 2], CullMode::None, 0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(near_first.closest_hit(&ray, &mut rec));
        assert!((rec.t - 2.0).abs() < 0.001);

        assert!(far_first.closest_hit(&ray, &mut rec));
        assert!((rec.t - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_mesh_tolerates_malformed_input() {
        // Out-of-range index, a degenerate face, and a trailing partial
        // triple: the valid face must still be hittable.
        let mesh = TriangleMesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 2.0),
                Vec3::new(1.0, -1.0, 2.0),
                Vec3::new(0.0, 1.0, 2.0),
            ],
            vec![0, 1, 99, 0, 0, 1, 0, 1, 2, 0],
            CullMode::None,
            0,
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert_eq!(mesh.triangle_count(), 3);
        assert!(mesh.closest_hit(&ray, &mut rec));
        assert!((rec.t - 2.0).abs() < 0.001);
        assert!(rec.t.is_finite());
    }
}
