use crate::math::vec2::Vec2;

/// Input for a ray cast: a segment from `p1` toward `p2`, clipped at
/// `max_fraction` of its length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayCastInput {
    /// Segment start, world space.
    pub p1: Vec2,
    /// Segment end, world space.
    pub p2: Vec2,
    /// Fraction of the segment beyond which hits are ignored, usually `1.0`.
    pub max_fraction: f32,
}

impl RayCastInput {
    /// Convenience constructor for a full-length segment cast.
    #[must_use]
    pub const fn segment(p1: Vec2, p2: Vec2) -> Self {
        Self {
            p1,
            p2,
            max_fraction: 1.0,
        }
    }
}

/// A ray-cast hit.
///
/// The hit point is `p1 + fraction * (p2 - p1)`; `normal` is the outward
/// surface normal at that point, world space, unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayCastOutput {
    /// Outward surface normal at the hit point.
    pub normal: Vec2,
    /// Fraction along the segment at which the hit occurs.
    pub fraction: f32,
}
