// SPDX-License-Identifier: Apache-2.0

//! Deterministic 2D math used throughout Keel.
//!
//! Determinism notes:
//! - All arithmetic is `f32` with explicit named operations; no FMA, so
//!   identical inputs produce identical bits across CPUs/targets.
//! - Transcendentals (`sin`, `cos`, `sqrt`) go through `libm` rather than
//!   the platform intrinsics for the same reason.

#[doc = "2D rotations stored as (sin, cos)."]
pub mod rot;
#[doc = "Rigid 2D transforms (translation + rotation)."]
pub mod transform;
#[doc = "Deterministic 2D vectors."]
pub mod vec2;

pub use rot::Rot;
pub use transform::Transform;
pub use vec2::Vec2;

/// Degeneracy threshold for normalization and division guards.
///
/// This is a policy constant (not machine epsilon): vectors shorter than
/// this are treated as directionless.
pub const EPSILON: f32 = 1.0e-6;
