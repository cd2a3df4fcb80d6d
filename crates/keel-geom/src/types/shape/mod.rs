// SPDX-License-Identifier: Apache-2.0

//! Collision shapes as a closed variant type.
//!
//! `Shape` is a tagged enum over the finite set of supported geometries;
//! every capability (`compute_aabb`, `compute_mass`, `test_point`,
//! `ray_cast`) dispatches by match, so adding a variant is a compile-time
//! exhaustiveness event rather than a runtime down-cast.

#[doc = "Solid circles."]
pub mod circle;
#[doc = "Convex polygons (counter-clockwise winding)."]
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::{Transform, Vec2};
use crate::types::aabb::Aabb;
use crate::types::mass::MassData;
use crate::types::raycast::{RayCastInput, RayCastOutput};

/// Discriminant of a [`Shape`] variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Solid circle.
    Circle,
    /// Convex polygon.
    Polygon,
}

/// A collision shape in local coordinates.
///
/// Shapes are plain values: cloning one yields an independent instance, so
/// an attached copy is never aliased by the definition it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Solid circle.
    Circle(Circle),
    /// Convex polygon.
    Polygon(Polygon),
}

impl Shape {
    /// Returns the variant discriminant.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Computes the tight world-space AABB of the shape under `xf`.
    #[must_use]
    pub fn compute_aabb(&self, xf: &Transform) -> Aabb {
        match self {
            Self::Circle(c) => c.compute_aabb(xf),
            Self::Polygon(p) => p.compute_aabb(xf),
        }
    }

    /// Computes mass, centroid, and rotational inertia at `density`.
    #[must_use]
    pub fn compute_mass(&self, density: f32) -> MassData {
        match self {
            Self::Circle(c) => c.compute_mass(density),
            Self::Polygon(p) => p.compute_mass(density),
        }
    }

    /// Tests a world-space point for containment under `xf`.
    #[must_use]
    pub fn test_point(&self, xf: &Transform, point: &Vec2) -> bool {
        match self {
            Self::Circle(c) => c.test_point(xf, point),
            Self::Polygon(p) => p.test_point(xf, point),
        }
    }

    /// Casts a world-space ray against the shape under `xf`.
    #[must_use]
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        match self {
            Self::Circle(c) => c.ray_cast(input, xf),
            Self::Polygon(p) => p.ray_cast(input, xf),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}
