// SPDX-License-Identifier: Apache-2.0

use crate::math::{Transform, Vec2, EPSILON};
use crate::types::aabb::Aabb;
use crate::types::mass::MassData;
use crate::types::raycast::{RayCastInput, RayCastOutput};

/// A convex polygon in local coordinates, counter-clockwise winding.
///
/// Invariants:
/// - At least three vertices, convex, counter-clockwise.
/// - `normals[i]` is the outward unit normal of edge `vertices[i] →
///   vertices[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
    centroid: Vec2,
}

impl Polygon {
    /// Builds a polygon from counter-clockwise convex vertices.
    ///
    /// Normals and the centroid are derived from the vertex ring.
    ///
    /// # Panics
    /// Panics if fewer than three vertices are given, or if the winding is
    /// not counter-clockwise convex (a degenerate edge counts as a
    /// violation).
    #[must_use]
    pub fn new(vertices: &[Vec2]) -> Self {
        assert!(vertices.len() >= 3, "polygon needs at least three vertices");
        let n = vertices.len();
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let edge = vertices[(i + 1) % n].sub(&vertices[i]);
            assert!(
                edge.length_squared() > EPSILON * EPSILON,
                "degenerate polygon edge"
            );
            // Outward normal for CCW winding: edge rotated clockwise.
            normals.push(Vec2::new(edge.y(), -edge.x()).normalize());
        }
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            assert!(
                b.sub(&a).cross(&c.sub(&b)) > 0.0,
                "polygon must be convex and counter-clockwise"
            );
        }
        let centroid = Self::centroid_of(vertices);
        Self {
            vertices: vertices.to_vec(),
            normals,
            centroid,
        }
    }

    /// Builds an axis-aligned box with half-extents `hx, hy` centered at
    /// the local origin.
    ///
    /// # Panics
    /// Panics if either half-extent is not strictly positive.
    #[must_use]
    pub fn boxed(hx: f32, hy: f32) -> Self {
        assert!(hx > 0.0 && hy > 0.0, "box half-extents must be positive");
        Self::new(&[
            Vec2::new(-hx, -hy),
            Vec2::new(hx, -hy),
            Vec2::new(hx, hy),
            Vec2::new(-hx, hy),
        ])
    }

    /// Vertex ring, counter-clockwise.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Outward edge normals, aligned with [`Self::vertices`].
    #[must_use]
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Area centroid in local coordinates.
    #[must_use]
    pub const fn centroid(&self) -> Vec2 {
        self.centroid
    }

    /// Tight AABB over the transformed vertex ring.
    #[must_use]
    pub fn compute_aabb(&self, xf: &Transform) -> Aabb {
        let mut min = xf.apply_point(&self.vertices[0]);
        let mut max = min;
        for v in &self.vertices[1..] {
            let p = xf.apply_point(v);
            min = min.min(&p);
            max = max.max(&p);
        }
        Aabb::new(min, max)
    }

    /// Mass properties at `density`; inertia is about the local origin.
    ///
    /// Integrates over the triangle fan rooted at the first vertex.
    #[must_use]
    pub fn compute_mass(&self, density: f32) -> MassData {
        let inv3 = 1.0 / 3.0;
        let reference = self.vertices[0];
        let mut area = 0.0;
        let mut center = Vec2::ZERO;
        let mut inertia = 0.0;

        for i in 1..self.vertices.len() - 1 {
            let e1 = self.vertices[i].sub(&reference);
            let e2 = self.vertices[i + 1].sub(&reference);
            let d = e1.cross(&e2);
            let triangle_area = 0.5 * d;
            area += triangle_area;

            center = center.add(&e1.add(&e2).scale(triangle_area * inv3));

            let intx2 = e1.x() * e1.x() + e2.x() * e1.x() + e2.x() * e2.x();
            let inty2 = e1.y() * e1.y() + e2.y() * e1.y() + e2.y() * e2.y();
            inertia += (0.25 * inv3 * d) * (intx2 + inty2);
        }

        let mass = density * area;
        center = center.scale(1.0 / area);
        let centroid = center.add(&reference);
        // Inertia was taken about the reference vertex; shift to the local
        // origin through the centroid (parallel axis, both directions).
        let inertia = density * inertia
            + mass * (centroid.length_squared() - center.length_squared());

        MassData {
            mass,
            center: centroid,
            inertia,
        }
    }

    /// Point containment under `xf`: the local point must sit behind every
    /// edge plane.
    #[must_use]
    pub fn test_point(&self, xf: &Transform, point: &Vec2) -> bool {
        let local = xf.apply_inverse_point(point);
        for (v, n) in self.vertices.iter().zip(&self.normals) {
            if n.dot(&local.sub(v)) > 0.0 {
                return false;
            }
        }
        true
    }

    /// Ray cast against the polygon under `xf`.
    ///
    /// Clips the local-space segment against every edge half-plane,
    /// tracking the entering plane; rays starting inside report no hit.
    #[must_use]
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        let p1 = xf.apply_inverse_point(&input.p1);
        let p2 = xf.apply_inverse_point(&input.p2);
        let d = p2.sub(&p1);

        let mut lower = 0.0_f32;
        let mut upper = input.max_fraction;
        let mut entering: Option<usize> = None;

        for (i, (v, n)) in self.vertices.iter().zip(&self.normals).enumerate() {
            let numerator = n.dot(&v.sub(&p1));
            let denominator = n.dot(&d);

            if denominator == 0.0 {
                // Parallel to the plane and outside it: no hit possible.
                if numerator < 0.0 {
                    return None;
                }
            } else {
                let t = numerator / denominator;
                if denominator < 0.0 && t > lower {
                    lower = t;
                    entering = Some(i);
                } else if denominator > 0.0 && t < upper {
                    upper = t;
                }
            }

            if upper < lower {
                return None;
            }
        }

        entering.map(|i| RayCastOutput {
            normal: xf.rotation().apply(&self.normals[i]),
            fraction: lower,
        })
    }

    fn centroid_of(vertices: &[Vec2]) -> Vec2 {
        let inv3 = 1.0 / 3.0;
        let reference = vertices[0];
        let mut area = 0.0;
        let mut center = Vec2::ZERO;
        for i in 1..vertices.len() - 1 {
            let e1 = vertices[i].sub(&reference);
            let e2 = vertices[i + 1].sub(&reference);
            let triangle_area = 0.5 * e1.cross(&e2);
            area += triangle_area;
            center = center.add(&e1.add(&e2).scale(triangle_area * inv3));
        }
        center.scale(1.0 / area).add(&reference)
    }
}
