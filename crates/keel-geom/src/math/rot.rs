use crate::math::vec2::Vec2;

/// 2D rotation stored as the sine/cosine pair of its angle.
///
/// Storing `(sin, cos)` instead of the raw angle keeps `apply` a pure
/// multiply-add with no per-call transcendentals, and makes the identity
/// exactly representable.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rot {
    sin: f32,
    cos: f32,
}

impl Rot {
    /// Identity rotation (zero angle).
    #[must_use]
    pub const fn identity() -> Self {
        Self { sin: 0.0, cos: 1.0 }
    }

    /// Creates a rotation from an angle in radians.
    ///
    /// Uses `libm` so the result is identical across targets.
    #[must_use]
    pub fn from_angle(radians: f32) -> Self {
        Self {
            sin: libm::sinf(radians),
            cos: libm::cosf(radians),
        }
    }

    /// Sine of the rotation angle.
    #[must_use]
    pub const fn sin(&self) -> f32 {
        self.sin
    }

    /// Cosine of the rotation angle.
    #[must_use]
    pub const fn cos(&self) -> f32 {
        self.cos
    }

    /// Rotation angle in radians, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f32 {
        libm::atan2f(self.sin, self.cos)
    }

    /// Rotates a vector.
    #[must_use]
    pub fn apply(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.cos * v.x() - self.sin * v.y(),
            self.sin * v.x() + self.cos * v.y(),
        )
    }

    /// Rotates a vector by the inverse rotation.
    #[must_use]
    pub fn apply_inverse(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.cos * v.x() + self.sin * v.y(),
            -self.sin * v.x() + self.cos * v.y(),
        )
    }
}
