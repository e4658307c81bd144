//! Scene and geometry core for Ember.
//!
//! Holds the primitives, the ray-intersection engine, lights, materials,
//! and the scene query layer. Rendering orchestration lives in
//! `ember_renderer`.

pub mod brdf;

mod hittable;
mod light;
mod material;
mod mesh;
mod obj;
mod plane;
mod scene;
mod sphere;
mod triangle;

pub use hittable::{HitRecord, Hittable};
pub use light::Light;
pub use material::{Color, CookTorrance, Lambert, LambertPhong, Material, SolidColor};
pub use mesh::TriangleMesh;
pub use obj::{load_obj, parse_obj, ObjError};
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};

/// Re-export the math types used throughout the public API.
pub use ember_math::{Aabb, Interval, Ray, Vec3};
