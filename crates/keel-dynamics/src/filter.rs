//! Collision filtering data carried by every fixture.

/// Category/mask/group collision filter.
///
/// Semantics, evaluated by the consuming solver when a contact is
/// (re-)filtered:
/// - Fixtures sharing a positive `group` always collide.
/// - Fixtures sharing a negative `group` never collide.
/// - Otherwise the category/mask test must pass in both directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    /// Category bits: what this fixture is. Conventionally one bit.
    pub category: u16,
    /// Mask bits: categories this fixture accepts.
    pub mask: u16,
    /// Group override: same positive group collides, same negative group
    /// never does, zero defers to category/mask.
    pub group: i16,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            category: 0x0001,
            mask: 0xFFFF,
            group: 0,
        }
    }
}

impl Filter {
    /// Returns whether two fixtures with these filters should collide.
    #[must_use]
    pub fn should_collide(&self, other: &Self) -> bool {
        if self.group == other.group && self.group != 0 {
            return self.group > 0;
        }
        (self.mask & other.category) != 0 && (other.mask & self.category) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_collides_with_itself() {
        let f = Filter::default();
        assert!(f.should_collide(&f));
    }

    #[test]
    fn positive_group_overrides_mask() {
        let a = Filter {
            category: 0x0002,
            mask: 0x0000,
            group: 3,
        };
        let b = Filter {
            category: 0x0004,
            mask: 0x0000,
            group: 3,
        };
        assert!(a.should_collide(&b));
    }

    #[test]
    fn negative_group_overrides_mask() {
        let a = Filter {
            group: -1,
            ..Filter::default()
        };
        let b = Filter {
            group: -1,
            ..Filter::default()
        };
        assert!(!a.should_collide(&b));
    }

    #[test]
    fn mask_test_must_pass_both_ways() {
        let a = Filter {
            category: 0x0001,
            mask: 0x0002,
            group: 0,
        };
        let b = Filter {
            category: 0x0002,
            mask: 0x0004,
            group: 0,
        };
        // a accepts b's category, but b does not accept a's.
        assert!(!a.should_collide(&b));
    }
}
