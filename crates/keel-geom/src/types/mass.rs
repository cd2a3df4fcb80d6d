use crate::math::vec2::Vec2;

/// Mass properties of a shape at a given density.
///
/// Produced by [`crate::types::shape::Shape::compute_mass`]; the inertia is
/// taken about the shape's local origin, not its centroid.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MassData {
    /// Mass in kilograms.
    pub mass: f32,
    /// Centroid in the shape's local coordinates.
    pub center: Vec2,
    /// Rotational inertia about the local origin, in kg·m².
    pub inertia: f32,
}

impl MassData {
    /// Mass data of a massless shape.
    pub const ZERO: Self = Self {
        mass: 0.0,
        center: Vec2::ZERO,
        inertia: 0.0,
    };
}
