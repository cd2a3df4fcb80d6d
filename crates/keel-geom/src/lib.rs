// SPDX-License-Identifier: Apache-2.0

//! Geometry leaves for Keel.
//!
//! This crate provides:
//! - Deterministic 2D math (`Vec2`, `Rot`, `Transform`).
//! - Axis-aligned bounding boxes (`Aabb`).
//! - A closed shape variant type (`Shape`: circle, convex polygon) with
//!   AABB, mass, point-containment, and ray-cast capabilities.
//! - The broad-phase seam (`BroadPhase`, `ProxyId`) and a deterministic
//!   reference implementation (`ProxyTable`).
//!
//! Design notes:
//! - Float32 throughout; no FMA, so results are identical across targets.
//! - Overlap semantics are inclusive on faces to avoid pair churn on
//!   contact boundaries.
//! - Rustdoc is treated as part of the contract; public items are
//!   documented.

/// Broad-phase proxy interface and reference implementation.
pub mod broad;
/// Deterministic 2D math primitives.
pub mod math;
/// Foundational geometric types.
pub mod types;

pub use broad::proxy_table::{BroadPhase, ProxyId, ProxyTable, AABB_MARGIN, DISPLACEMENT_SCALE};
pub use math::{Rot, Transform, Vec2};
pub use types::aabb::Aabb;
pub use types::mass::MassData;
pub use types::raycast::{RayCastInput, RayCastOutput};
pub use types::shape::{Circle, Polygon, Shape, ShapeKind};
