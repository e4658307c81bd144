//! Material trait and the built-in surface models.

use crate::brdf;
use crate::hittable::HitRecord;
use ember_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Trait for surfaces evaluated against a single light.
///
/// `light_dir` and `view_dir` are unit vectors pointing away from the
/// surface (toward the light and toward the camera); the renderer
/// normalizes both before calling.
pub trait Material: Send + Sync {
    /// Evaluate the BRDF for the given light/view geometry.
    fn shade(&self, rec: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color;
}

/// Flat color, unaffected by geometry. Useful for debug scenes.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    pub color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for SolidColor {
    fn shade(&self, _rec: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        self.color
    }
}

/// Lambert diffuse material.
#[derive(Debug, Clone, Copy)]
pub struct Lambert {
    pub reflectance: f32,
    pub color: Color,
}

impl Lambert {
    pub fn new(reflectance: f32, color: Color) -> Self {
        Self { reflectance, color }
    }
}

impl Material for Lambert {
    fn shade(&self, _rec: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        brdf::lambert(self.reflectance, self.color)
    }
}

/// Lambert diffuse with a Phong specular lobe on top.
#[derive(Debug, Clone, Copy)]
pub struct LambertPhong {
    pub diffuse_reflectance: f32,
    pub specular_reflectance: f32,
    pub phong_exponent: f32,
    pub color: Color,
}

impl LambertPhong {
    pub fn new(
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
        color: Color,
    ) -> Self {
        Self {
            diffuse_reflectance,
            specular_reflectance,
            phong_exponent,
            color,
        }
    }
}

impl Material for LambertPhong {
    fn shade(&self, rec: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        brdf::lambert(self.diffuse_reflectance, self.color)
            + brdf::phong(
                self.specular_reflectance,
                self.phong_exponent,
                light_dir,
                view_dir,
                rec.normal,
            )
    }
}

/// Cook-Torrance microfacet material (GGX distribution, Smith geometry,
/// Schlick Fresnel) with a Lambert diffuse floor for dielectrics.
#[derive(Debug, Clone, Copy)]
pub struct CookTorrance {
    pub albedo: Color,
    /// 0 = dielectric, 1 = metal.
    pub metallic: f32,
    /// Clamped away from zero at construction so perfectly aligned
    /// half-vectors stay finite.
    pub roughness: f32,
}

impl CookTorrance {
    // f32 cancellation zeroes the GGX denominator once roughness^4 drops
    // below ~1e-6; this floor keeps the distribution spike finite.
    const MIN_ROUGHNESS: f32 = 0.05;

    /// Base reflectivity of dielectric surfaces.
    const DIELECTRIC_F0: f32 = 0.04;

    pub fn new(albedo: Color, metallic: f32, roughness: f32) -> Self {
        Self {
            albedo,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(Self::MIN_ROUGHNESS, 1.0),
        }
    }
}

impl Material for CookTorrance {
    fn shade(&self, rec: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        let n = rec.normal;

        // Half vector degenerates when view and light oppose each other.
        let half = light_dir + view_dir;
        if half.length_squared() < 1e-12 {
            return Color::ZERO;
        }
        let half = half.normalize();

        let f0 = Color::splat(Self::DIELECTRIC_F0).lerp(self.albedo, self.metallic);
        let fresnel = brdf::fresnel_schlick(half, view_dir, f0);
        let distribution = brdf::normal_distribution_ggx(n, half, self.roughness);
        let geometry = brdf::geometry_smith(n, view_dir, light_dir, self.roughness);

        let ndotv = n.dot(view_dir).max(0.0);
        let ndotl = n.dot(light_dir).max(0.0);
        let denom = 4.0 * ndotv * ndotl;
        let specular = if denom > 1e-6 {
            fresnel * (distribution * geometry / denom)
        } else {
            Color::ZERO
        };

        // Energy split: whatever is not reflected specularly diffuses, and
        // metals have no diffuse component at all.
        let kd = (Color::ONE - fresnel) * (1.0 - self.metallic);
        specular + brdf::lambert_rgb(kd, self.albedo)
    }
}
