//! Camera for primary ray generation.

use ember_math::{Mat3, Vec3};

/// A pinhole camera: world position, forward direction, and a vertical
/// field of view.
///
/// The camera only supplies a position and an orientation frame; ray
/// construction from pixel coordinates lives in the renderer. Interactive
/// movement is a caller concern and must happen between frames.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    /// Unit forward direction. Must not be collinear with world up (+Y).
    pub forward: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Camera {
    /// Create a camera at `origin` looking down +Z.
    pub fn new(origin: Vec3, fov: f32) -> Self {
        Self {
            origin,
            forward: Vec3::Z,
            fov,
        }
    }

    /// Point the camera at a world-space target.
    pub fn look_at(mut self, target: Vec3) -> Self {
        self.forward = (target - self.origin).normalize_or(Vec3::Z);
        self
    }

    /// Orthonormal camera-to-world rotation, derived from the forward
    /// direction and the fixed world up via cross products. Recomputed once
    /// per frame by the renderer.
    pub fn camera_to_world(&self) -> Mat3 {
        let forward = self.forward.normalize_or(Vec3::Z);
        let right = Vec3::Y.cross(forward).normalize_or(Vec3::X);
        let up = forward.cross(right);
        Mat3::from_cols(right, up, forward)
    }

    /// Half-height of the image plane at unit distance: `tan(fov / 2)`.
    pub fn fov_scale(&self) -> f32 {
        (self.fov.to_radians() / 2.0).tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis_is_orthonormal() {
        let camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0)
            .look_at(Vec3::new(1.0, 0.0, 4.0));
        let basis = camera.camera_to_world();

        let right = basis.x_axis;
        let up = basis.y_axis;
        let forward = basis.z_axis;

        assert!((right.length() - 1.0).abs() < 0.001);
        assert!((up.length() - 1.0).abs() < 0.001);
        assert!((forward.length() - 1.0).abs() < 0.001);
        assert!(right.dot(up).abs() < 0.001);
        assert!(right.dot(forward).abs() < 0.001);
        assert!(up.dot(forward).abs() < 0.001);
    }

    #[test]
    fn test_default_orientation_is_identity() {
        let basis = Camera::new(Vec3::ZERO, 90.0).camera_to_world();

        assert!((basis.x_axis - Vec3::X).length() < 0.001);
        assert!((basis.y_axis - Vec3::Y).length() < 0.001);
        assert!((basis.z_axis - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_basis_transform_keeps_directions_unit() {
        let camera = Camera::new(Vec3::ZERO, 60.0).look_at(Vec3::new(3.0, -1.0, 5.0));
        let basis = camera.camera_to_world();

        let dir = basis * Vec3::new(0.3, -0.2, 1.0).normalize();
        assert!((dir.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_fov_scale() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert!((camera.fov_scale() - 1.0).abs() < 0.001);

        let narrow = Camera::new(Vec3::ZERO, 45.0);
        assert!(narrow.fov_scale() < 0.5);
    }
}
