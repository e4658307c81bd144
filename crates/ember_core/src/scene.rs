//! Scene storage and the closest-hit / any-hit query layer.

use crate::hittable::{HitRecord, Hittable};
use crate::light::Light;
use crate::material::{Color, Material, SolidColor};
use crate::mesh::TriangleMesh;
use crate::plane::Plane;
use crate::sphere::Sphere;
use ember_math::{Ray, Vec3};

/// Owns the primitives, lights, and materials of one renderable world.
///
/// Storage is append-only during setup and read-only during rendering, so a
/// `&Scene` can be shared freely across worker threads. Material index 0 is
/// always a fallback solid red, as a loud default for primitives that were
/// never assigned a real material.
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Box<dyn Material>>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Box::new(SolidColor::new(Color::new(1.0, 0.0, 0.0)))],
        }
    }

    /// Find the closest hit along the ray across all primitives.
    ///
    /// Spheres are tested first, then planes, then meshes; the query ray's
    /// upper bound shrinks to each accepted hit, so later primitives must
    /// be strictly closer to win and ties keep the first hit encountered.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut query = *ray;
        let mut closest = HitRecord::default();
        let mut rec = HitRecord::default();
        let mut hit_anything = false;

        for sphere in &self.spheres {
            if sphere.closest_hit(&query, &mut rec) {
                hit_anything = true;
                closest = rec;
                query.bounds.max = rec.t;
            }
        }
        for plane in &self.planes {
            if plane.closest_hit(&query, &mut rec) {
                hit_anything = true;
                closest = rec;
                query.bounds.max = rec.t;
            }
        }
        for mesh in &self.meshes {
            if mesh.closest_hit(&query, &mut rec) {
                hit_anything = true;
                closest = rec;
                query.bounds.max = rec.t;
            }
        }

        hit_anything.then_some(closest)
    }

    /// Occlusion query: true as soon as anything blocks the ray.
    ///
    /// Same iteration order as [`Scene::closest_hit`], but short-circuits
    /// on the first hit and never touches materials or normals.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.any_hit(ray))
            || self.planes.iter().any(|p| p.any_hit(ray))
            || self.meshes.iter().any(|m| m.any_hit(ray))
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material_index: usize) {
        self.assert_material(material_index);
        self.spheres.push(Sphere::new(center, radius, material_index));
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: usize) {
        self.assert_material(material_index);
        self.planes.push(Plane::new(origin, normal, material_index));
    }

    pub fn add_triangle_mesh(&mut self, mesh: TriangleMesh) {
        self.assert_material(mesh.material_index);
        self.meshes.push(mesh);
    }

    pub fn add_point_light(&mut self, position: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::Point {
            position,
            intensity,
            color,
        });
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::Directional {
            direction,
            intensity,
            color,
        });
    }

    /// Register a material and return its index for primitives to refer to.
    pub fn add_material(&mut self, material: Box<dyn Material>) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Look up a material. An out-of-range index is a scene-construction
    /// bug and panics.
    pub fn material(&self, index: usize) -> &dyn Material {
        &*self.materials[index]
    }

    fn assert_material(&self, material_index: usize) {
        assert!(
            material_index < self.materials.len(),
            "material index {material_index} out of range ({} materials registered)",
            self.materials.len()
        );
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
