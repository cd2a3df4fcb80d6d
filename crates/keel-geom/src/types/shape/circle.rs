use crate::math::{Transform, Vec2, EPSILON};
use crate::types::aabb::Aabb;
use crate::types::mass::MassData;
use crate::types::raycast::{RayCastInput, RayCastOutput};

/// A solid circle with a local-space center.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    /// Creates a circle at the local origin.
    ///
    /// # Panics
    /// Panics if `radius` is not strictly positive.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self::offset(Vec2::ZERO, radius)
    }

    /// Creates a circle centered at `center` in local coordinates.
    ///
    /// # Panics
    /// Panics if `radius` is not strictly positive.
    #[must_use]
    pub fn offset(center: Vec2, radius: f32) -> Self {
        assert!(radius > 0.0, "circle radius must be positive");
        Self { center, radius }
    }

    /// Local-space center.
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Radius in metres.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Tight AABB of the circle under `xf`.
    #[must_use]
    pub fn compute_aabb(&self, xf: &Transform) -> Aabb {
        let p = xf.apply_point(&self.center);
        Aabb::from_center_half_extents(p, self.radius, self.radius)
    }

    /// Mass properties at `density`; inertia is about the local origin.
    #[must_use]
    pub fn compute_mass(&self, density: f32) -> MassData {
        let mass = density * core::f32::consts::PI * self.radius * self.radius;
        // Parallel-axis shift from the centroid to the local origin.
        let inertia = mass * (0.5 * self.radius * self.radius + self.center.length_squared());
        MassData {
            mass,
            center: self.center,
            inertia,
        }
    }

    /// Point containment under `xf`.
    #[must_use]
    pub fn test_point(&self, xf: &Transform, point: &Vec2) -> bool {
        let center = xf.apply_point(&self.center);
        point.sub(&center).length_squared() <= self.radius * self.radius
    }

    /// Ray cast against the circle under `xf`.
    ///
    /// Solves |s + t·r| = radius for the smallest admissible `t`; rays
    /// starting inside the circle report no hit.
    #[must_use]
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        let center = xf.apply_point(&self.center);
        let s = input.p1.sub(&center);
        let b = s.length_squared() - self.radius * self.radius;

        let r = input.p2.sub(&input.p1);
        let c = s.dot(&r);
        let rr = r.length_squared();
        let sigma = c * c - rr * b;

        // Negative discriminant: the line misses. Short segment: no direction.
        if sigma < 0.0 || rr < EPSILON {
            return None;
        }

        let mut t = -(c + libm::sqrtf(sigma));
        if 0.0 <= t && t <= input.max_fraction * rr {
            t /= rr;
            return Some(RayCastOutput {
                normal: s.add(&r.scale(t)).normalize(),
                fraction: t,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_is_centered_on_transformed_center() {
        let c = Circle::offset(Vec2::new(1.0, 0.0), 2.0);
        let xf = Transform::from_position(Vec2::new(0.0, 3.0));
        let aabb = c.compute_aabb(&xf);
        assert_eq!(aabb.min().to_array(), [-1.0, 1.0]);
        assert_eq!(aabb.max().to_array(), [3.0, 5.0]);
    }

    #[test]
    fn ray_from_left_hits_with_outward_normal() {
        let c = Circle::new(1.0);
        let input = RayCastInput::segment(Vec2::new(-3.0, 0.0), Vec2::new(3.0, 0.0));
        let Some(hit) = c.ray_cast(&input, &Transform::identity()) else {
            panic!("expected a hit");
        };
        // Enter at x = -1: fraction 2/6.
        assert!((hit.fraction - 2.0 / 6.0).abs() < 1.0e-5);
        assert!((hit.normal.x() + 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn ray_past_max_fraction_misses() {
        let c = Circle::new(1.0);
        let input = RayCastInput {
            p1: Vec2::new(-10.0, 0.0),
            p2: Vec2::new(10.0, 0.0),
            max_fraction: 0.1,
        };
        assert!(c.ray_cast(&input, &Transform::identity()).is_none());
    }

    #[test]
    fn point_on_boundary_is_contained() {
        let c = Circle::new(1.0);
        assert!(c.test_point(&Transform::identity(), &Vec2::new(1.0, 0.0)));
        assert!(!c.test_point(&Transform::identity(), &Vec2::new(1.0001, 0.0)));
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn zero_radius_is_rejected() {
        let _ = Circle::new(0.0);
    }
}
