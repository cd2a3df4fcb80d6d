//! Core geometry types (AABB, shapes, mass, ray casting).
//!
//! Determinism notes:
//! - Overlap semantics are inclusive on faces to avoid pair churn on
//!   contact boundaries.
//! - Shape math uses `f32` without fused multiply-add to preserve
//!   identical results across platforms.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Mass, centroid, and rotational inertia of a shape."]
pub mod mass;
#[doc = "Ray-cast input and hit types."]
pub mod raycast;
#[doc = "Closed shape variant type: circle and convex polygon."]
pub mod shape;
