// SPDX-License-Identifier: Apache-2.0

use crate::math::rot::Rot;
use crate::math::vec2::Vec2;

/// Rigid 2D transform used for shape placement and broad-phase sampling.
///
/// Conventions:
/// - `position` in metres (world space).
/// - `rotation` applied before translation: `world = R * local + position`.
///
/// Determinism:
/// - `apply_point` is two multiply-adds per component with `f32` ops; no
///   FMA, to keep results stable across CPUs/targets.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    position: Vec2,
    rotation: Rot,
}

impl Transform {
    /// Identity transform (no translation, no rotation).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: Rot::identity(),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(position: Vec2, rotation: Rot) -> Self {
        Self { position, rotation }
    }

    /// Creates a pure translation.
    #[must_use]
    pub const fn from_position(position: Vec2) -> Self {
        Self {
            position,
            rotation: Rot::identity(),
        }
    }

    /// Translation component.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation component.
    #[must_use]
    pub const fn rotation(&self) -> Rot {
        self.rotation
    }

    /// Maps a local-space point into world space.
    #[must_use]
    pub fn apply_point(&self, p: &Vec2) -> Vec2 {
        self.rotation.apply(p).add(&self.position)
    }

    /// Maps a world-space point into local space.
    #[must_use]
    pub fn apply_inverse_point(&self, p: &Vec2) -> Vec2 {
        self.rotation.apply_inverse(&p.sub(&self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn point_round_trips_through_inverse() {
        let xf = Transform::new(Vec2::new(1.0, -2.0), Rot::from_angle(0.3));
        let p = Vec2::new(4.0, 5.0);
        let back = xf.apply_inverse_point(&xf.apply_point(&p));
        assert!((back.x() - p.x()).abs() < 1.0e-5);
        assert!((back.y() - p.y()).abs() < 1.0e-5);
    }

    #[test]
    fn rotation_applies_before_translation() {
        let xf = Transform::new(Vec2::new(10.0, 0.0), Rot::from_angle(FRAC_PI_2));
        let p = xf.apply_point(&Vec2::UNIT_X);
        assert!((p.x() - 10.0).abs() < 1.0e-6);
        assert!((p.y() - 1.0).abs() < 1.0e-6);
    }
}
