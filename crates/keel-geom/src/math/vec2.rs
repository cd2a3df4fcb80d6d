use crate::math::EPSILON;

/// Deterministic 2D vector.
///
/// * Components encode world-space metres and may represent either points
///   or directions depending on the calling context.
/// * Arithmetic uses `f32` so results round like the runtime's float32
///   mode on every target.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        self.data
    }

    /// X component.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Adds two vectors.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Subtracts another vector.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Scales the vector by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// 2D cross product (z component of the 3D cross).
    #[must_use]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Counter-clockwise perpendicular vector.
    #[must_use]
    pub fn perp(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Vector length (magnitude).
    #[must_use]
    pub fn length(&self) -> f32 {
        libm::sqrtf(self.length_squared())
    }

    /// Squared magnitude of the vector.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x().max(other.x()), self.y().max(other.y()))
    }

    /// Normalizes the vector, returning the zero vector if length is below
    /// [`EPSILON`].
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            Self::ZERO
        } else {
            self.scale(1.0 / len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_units_is_one() {
        assert_eq!(Vec2::UNIT_X.cross(&Vec2::UNIT_Y), 1.0);
        assert_eq!(Vec2::UNIT_Y.cross(&Vec2::UNIT_X), -1.0);
    }

    #[test]
    fn perp_is_ccw_quarter_turn() {
        let v = Vec2::new(3.0, 2.0);
        let p = v.perp();
        assert_eq!(p.to_array(), [-2.0, 3.0]);
        assert_eq!(v.dot(&p), 0.0);
    }

    #[test]
    fn normalize_of_degenerate_vector_is_zero() {
        let v = Vec2::new(0.0, 0.0);
        assert_eq!(v.normalize(), Vec2::ZERO);
    }

    #[test]
    fn normalize_preserves_direction() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1.0e-6);
        assert!(n.cross(&v).abs() < 1.0e-6);
    }
}
