use crate::math::vec2::Vec2;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f32` and represent metres in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Degenerate box at the origin.
    ///
    /// Used as the not-yet-meaningful placeholder for cached bounds that
    /// have not been computed; it satisfies the `min <= max` invariant but
    /// carries no geometric meaning.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in
    /// `max`.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(
            min.x() <= max.x() && min.y() <= max.y(),
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, hx: f32, hy: f32) -> Self {
        let he = Vec2::new(hx, hy);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        // Inclusive to treat touching faces as overlap for broad-phase pairing.
        !(self.max.x() < other.min.x()
            || self.min.x() > other.max.x()
            || self.max.y() < other.min.y()
            || self.min.y() > other.max.y())
    }

    /// Returns `true` if `other` lies entirely inside this box (inclusive).
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min.x() <= other.min.x()
            && self.min.y() <= other.min.y()
            && other.max.x() <= self.max.x()
            && other.max.y() <= self.max.y()
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    ///
    /// # Panics
    /// Panics if a negative margin would invert the box.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec2::new(m, m);
        Self::new(self.min.sub(&delta), self.max.add(&delta))
    }

    /// Extends the box along `displacement`, growing only the facing sides.
    ///
    /// Used by broad-phase prediction: the grown side is the one the box is
    /// moving toward.
    #[must_use]
    pub fn extend_by(&self, displacement: &Vec2) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        if displacement.x() < 0.0 {
            min = Vec2::new(min.x() + displacement.x(), min.y());
        } else {
            max = Vec2::new(max.x() + displacement.x(), max.y());
        }
        if displacement.y() < 0.0 {
            min = Vec2::new(min.x(), min.y() + displacement.y());
        } else {
            max = Vec2::new(max.x(), max.y() + displacement.y());
        }
        Self { min, max }
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }
}
