use crate::{Interval, Ray, Vec3};

/// Axis-aligned bounding box used to prune triangle meshes before
/// per-triangle tests.
///
/// Defined by three intervals, one per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Compute the bounding box of a point set. Empty input yields
    /// [`Aabb::EMPTY`].
    pub fn from_point_set(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::EMPTY;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }

        Self::from_points(min, max)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Test if a ray intersects this AABB within the ray's own bounds.
    ///
    /// Slab method: each axis clips the surviving `[tmin, tmax]` window and
    /// the box is missed once the window collapses. Because `ray.bounds.min`
    /// is positive, a box lying entirely behind the ray origin collapses the
    /// window and is rejected here without any contents being tested.
    pub fn hit(&self, ray: &Ray) -> bool {
        let mut window = ray.bounds;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let (origin, direction) = match axis {
                0 => (ray.origin.x, ray.direction.x),
                1 => (ray.origin.y, ray.direction.y),
                _ => (ray.origin.z, ray.direction.z),
            };

            let inv = 1.0 / direction;
            let mut t0 = (slab.min - origin) * inv;
            let mut t1 = (slab.max - origin) * inv;
            if inv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            window.min = t0.max(window.min);
            window.max = t1.min(window.max);
            if window.max <= window.min {
                return false;
            }
        }

        true
    }

    /// Pad axes to avoid zero-width slabs (flat geometry such as an
    /// axis-aligned quad would otherwise produce a degenerate box).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::new(10.0, 10.0, 10.0));

        assert_eq!(aabb.x.min, 0.0);
        assert_eq!(aabb.x.max, 10.0);
        assert_eq!(aabb.z.max, 10.0);
    }

    #[test]
    fn test_aabb_from_point_set() {
        let aabb = Aabb::from_point_set(&[
            Vec3::new(-1.0, -2.0, -3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::ZERO,
        ]);

        assert_eq!(aabb.x.min, -1.0);
        assert_eq!(aabb.y.max, 5.0);
        assert_eq!(aabb.z.min, -3.0);

        assert!(!Aabb::from_point_set(&[]).hit(&Ray::new(Vec3::ZERO, Vec3::Z)));
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

        // Ray pointing at the box
        assert!(aabb.hit(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z)));

        // Ray pointing away
        assert!(!aabb.hit(&Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::Z)));

        // Ray missing the box
        assert!(!aabb.hit(&Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z)));
    }

    #[test]
    fn test_aabb_behind_origin_rejected() {
        // Box entirely behind the ray origin: both slab distances are
        // negative, so the window collapses against the positive ray min.
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, -5.0), Vec3::new(1.0, 1.0, -3.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_flat_box_is_padded() {
        // A zero-thickness box must still be hittable edge-on thanks to the
        // minimum padding.
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -2.0), Vec3::Z);

        assert!(aabb.z.size() > 0.0);
        assert!(aabb.hit(&ray));
    }
}
