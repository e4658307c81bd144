//! Reflectance functions.
//!
//! Pure, stateless pieces of the Cook-Torrance model plus Lambert diffuse.
//! Each function takes only the vectors and scalars it needs; materials
//! compose them in [`crate::material`].

use crate::material::Color;
use ember_math::Vec3;
use std::f32::consts::PI;

/// Lambert diffuse reflectance with a scalar reflection coefficient.
///
/// Divides by pi so the reflected energy integrates to `kd * cd` over the
/// hemisphere.
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Lambert diffuse reflectance with a per-channel coefficient (used for the
/// `1 - F` energy split in Cook-Torrance).
pub fn lambert_rgb(kd: Color, cd: Color) -> Color {
    kd * cd / PI
}

/// Phong specular lobe: the light direction mirrored about the normal,
/// raised to the given exponent.
///
/// `l` and `v` point away from the surface, like everywhere else in this
/// module.
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let reflect = 2.0 * n.dot(l) * n - l;
    let angle = reflect.dot(v).max(0.0);
    Color::splat(ks * angle.powf(exponent))
}

/// Schlick approximation of the Fresnel term, componentwise over the base
/// reflectivity `f0`.
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let hdotv = h.dot(v).max(0.0);
    f0 + (Color::ONE - f0) * (1.0 - hdotv).powi(5)
}

/// Trowbridge-Reitz GGX normal distribution (UE4 parameterization:
/// alpha = roughness squared).
///
/// The dot is clamped to zero so backfacing half-vectors contribute nothing
/// instead of going negative.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let ndoth = n.dot(h).max(0.0);

    let denom = ndoth * ndoth * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX geometry term for a single direction (direct lighting `k`).
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let k = (a + 1.0) * (a + 1.0) / 8.0;
    let ndotv = n.dot(v).max(0.0);

    ndotv / (ndotv * (1.0 - k) + k)
}

/// Smith shadowing-masking: the Schlick-GGX term evaluated for both the
/// view and the light direction.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lambert_divides_by_pi() {
        let result = lambert(1.0, Color::ONE);
        assert!((result - Color::splat(1.0 / PI)).length() < 1e-6);

        let rgb = lambert_rgb(Color::ONE, Color::ONE);
        assert!((rgb - Color::splat(1.0 / PI)).length() < 1e-6);
    }

    #[test]
    fn test_phong_peaks_along_mirror_direction() {
        let n = Vec3::Z;
        let l = Vec3::new(0.0, 1.0, 1.0).normalize();
        let mirror = 2.0 * n.dot(l) * n - l;

        let peak = phong(0.5, 60.0, l, mirror, n);
        assert!((peak - Color::splat(0.5)).length() < 1e-5);

        // Looking well away from the mirror direction sees almost nothing.
        let off = phong(0.5, 60.0, l, Vec3::new(0.0, 1.0, 0.2).normalize(), n);
        assert!(off.max_element() < 1e-3);
    }

    #[test]
    fn test_fresnel_at_normal_incidence_is_f0() {
        let f0 = Color::new(0.04, 0.04, 0.04);
        let f = fresnel_schlick(Vec3::Z, Vec3::Z, f0);
        assert!((f - f0).length() < 1e-6);
    }

    #[test]
    fn test_fresnel_at_grazing_approaches_one() {
        let f0 = Color::splat(0.04);
        // h orthogonal to v.
        let f = fresnel_schlick(Vec3::Z, Vec3::X, f0);
        assert!((f - Color::ONE).length() < 1e-6);
    }

    #[test]
    fn test_ggx_stays_finite_for_smooth_aligned_surfaces() {
        // Roughness approaching zero with n == h is the spike of the
        // distribution; it must grow large but stay finite.
        let d = normal_distribution_ggx(Vec3::Z, Vec3::Z, 0.05);
        assert!(d.is_finite());
        assert!(d > 1e4);

        // Off the spike the distribution collapses toward zero.
        let off = normal_distribution_ggx(Vec3::Z, Vec3::new(0.0, 0.6, 0.8), 0.05);
        assert!(off.is_finite());
        assert!(off < d);
    }

    #[test]
    fn test_ggx_backfacing_half_vector_clamped() {
        let d = normal_distribution_ggx(Vec3::Z, -Vec3::Z, 0.5);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_geometry_terms_in_unit_range() {
        let n = Vec3::Z;
        let v = Vec3::new(0.0, 0.6, 0.8);
        let l = Vec3::new(0.6, 0.0, 0.8);

        for roughness in [0.05, 0.3, 0.8, 1.0] {
            let g1 = geometry_schlick_ggx(n, v, roughness);
            let g = geometry_smith(n, v, l, roughness);
            assert!((0.0..=1.0).contains(&g1));
            assert!((0.0..=1.0).contains(&g));
        }
    }

    #[test]
    fn test_geometry_smith_is_product_of_directions() {
        let n = Vec3::Z;
        let v = Vec3::new(0.0, 0.6, 0.8);
        let l = Vec3::new(0.6, 0.0, 0.8);
        let roughness = 0.4;

        let expected = geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness);
        assert!((geometry_smith(n, v, l, roughness) - expected).abs() < 1e-6);
    }
}
