use crate::math::vec2::Vec2;
use crate::types::aabb::Aabb;
use core::cmp::Ordering;
use std::collections::BTreeMap;

/// Margin added around tight AABBs when storing a proxy.
///
/// The fat box absorbs small jitter so `move_proxy` can skip the index
/// update when the new tight box still fits.
pub const AABB_MARGIN: f32 = 0.1;

/// Scale applied to the displacement hint when predicting motion.
pub const DISPLACEMENT_SCALE: f32 = 2.0;

/// Opaque handle identifying a proxy in a broad-phase index.
///
/// Handles are only meaningful to the index that issued them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProxyId(u32);

impl ProxyId {
    /// Raw handle value, for diagnostics only.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Broad-phase index seam: proxy registration, removal, and movement.
///
/// Implementations may fatten stored boxes and use `displacement` as a
/// movement-direction hint; callers must treat stored bounds as enlarged
/// relative to the tight input.
pub trait BroadPhase {
    /// Registers `aabb` for `owner` and returns the proxy handle.
    fn create_proxy(&mut self, aabb: Aabb, owner: u64) -> ProxyId;

    /// Removes a proxy.
    ///
    /// # Panics
    /// Implementations fail fast on handles they did not issue.
    fn destroy_proxy(&mut self, proxy: ProxyId);

    /// Updates a proxy's bounds after motion.
    ///
    /// `displacement` is the owner's translation over the step, usable for
    /// predictive fattening.
    ///
    /// # Panics
    /// Implementations fail fast on handles they did not issue.
    fn move_proxy(&mut self, proxy: ProxyId, aabb: Aabb, displacement: Vec2);
}

#[derive(Debug, Copy, Clone)]
struct ProxyEntry {
    fat: Aabb,
    owner: u64,
}

/// A minimal deterministic broad-phase backed by an ordered proxy table.
///
/// Why this exists:
/// - Serves as a correctness and determinism baseline for the fixture
///   lifecycle (canonical pair identity and ordering, inclusive face
///   overlap, fat-AABB move semantics).
/// - Keeps the algorithm small and easy to reason about; the pair query is
///   an `O(n^2)` all-pairs sweep over sorted handles.
///
/// A production index (sweep-and-prune, dynamic AABB tree) must preserve
/// the trait contract and the ordering semantics documented on
/// [`ProxyTable::pairs`].
#[derive(Debug, Default)]
pub struct ProxyTable {
    entries: BTreeMap<ProxyId, ProxyEntry>,
    next: u32,
}

impl ProxyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next: 0,
        }
    }

    /// Number of live proxies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no proxies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored (fat) bounds of a proxy, if present.
    #[must_use]
    pub fn fat_aabb(&self, proxy: ProxyId) -> Option<Aabb> {
        self.entries.get(&proxy).map(|e| e.fat)
    }

    /// Returns a canonical, deterministically-ordered list of overlapping
    /// owner pairs.
    ///
    /// Pairs are `(min_owner, max_owner)`, sorted ascending; proxies that
    /// share an owner token are never paired with themselves.
    #[must_use]
    pub fn pairs(&self) -> Vec<(u64, u64)> {
        // BTreeMap iteration is already sorted by handle; copy to a vector
        // for indexed loops.
        let entries: Vec<ProxyEntry> = self.entries.values().copied().collect();
        let mut out: Vec<(u64, u64)> = Vec::new();
        for (i, a) in entries.iter().enumerate() {
            for b in entries.iter().skip(i + 1) {
                if a.owner != b.owner && a.fat.overlaps(&b.fat) {
                    let pair = if a.owner < b.owner {
                        (a.owner, b.owner)
                    } else {
                        (b.owner, a.owner)
                    };
                    out.push(pair);
                }
            }
        }
        out.sort_unstable_by(|x, y| match x.0.cmp(&y.0) {
            Ordering::Equal => x.1.cmp(&y.1),
            o => o,
        });
        out.dedup();
        out
    }
}

impl BroadPhase for ProxyTable {
    fn create_proxy(&mut self, aabb: Aabb, owner: u64) -> ProxyId {
        let id = ProxyId(self.next);
        self.next += 1;
        let fat = aabb.inflate(AABB_MARGIN);
        self.entries.insert(id, ProxyEntry { fat, owner });
        id
    }

    fn destroy_proxy(&mut self, proxy: ProxyId) {
        let removed = self.entries.remove(&proxy);
        assert!(removed.is_some(), "destroy_proxy: unknown handle");
    }

    fn move_proxy(&mut self, proxy: ProxyId, aabb: Aabb, displacement: Vec2) {
        let Some(entry) = self.entries.get_mut(&proxy) else {
            panic!("move_proxy: unknown handle");
        };
        // Still inside the stored fat box: skip the update entirely.
        if entry.fat.contains(&aabb) {
            return;
        }
        entry.fat = aabb
            .inflate(AABB_MARGIN)
            .extend_by(&displacement.scale(DISPLACEMENT_SCALE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32) -> Aabb {
        Aabb::from_center_half_extents(Vec2::new(x, y), 0.5, 0.5)
    }

    #[test]
    fn handles_are_unique_and_stable() {
        let mut table = ProxyTable::new();
        let a = table.create_proxy(unit_box_at(0.0, 0.0), 1);
        let b = table.create_proxy(unit_box_at(10.0, 0.0), 2);
        assert_ne!(a, b);
        table.destroy_proxy(a);
        let c = table.create_proxy(unit_box_at(0.0, 0.0), 3);
        assert_ne!(b, c);
    }

    #[test]
    fn stored_bounds_are_fattened() {
        let mut table = ProxyTable::new();
        let id = table.create_proxy(unit_box_at(0.0, 0.0), 1);
        let fat = table.fat_aabb(id).map(|a| a.min().to_array());
        assert_eq!(fat, Some([-0.5 - AABB_MARGIN, -0.5 - AABB_MARGIN]));
    }

    #[test]
    fn small_moves_inside_the_fat_box_are_skipped() {
        let mut table = ProxyTable::new();
        let id = table.create_proxy(unit_box_at(0.0, 0.0), 1);
        let before = table.fat_aabb(id);
        table.move_proxy(id, unit_box_at(0.01, 0.0), Vec2::new(0.01, 0.0));
        assert_eq!(table.fat_aabb(id), before);
    }

    #[test]
    fn large_moves_extend_along_the_displacement() {
        let mut table = ProxyTable::new();
        let id = table.create_proxy(unit_box_at(0.0, 0.0), 1);
        table.move_proxy(id, unit_box_at(5.0, 0.0), Vec2::new(5.0, 0.0));
        let Some(fat) = table.fat_aabb(id) else {
            panic!("proxy vanished");
        };
        // Tight max is 5.5; margin plus 2x displacement prediction ahead.
        assert!((fat.max().x() - (5.5 + AABB_MARGIN + 10.0)).abs() < 1.0e-5);
        assert!((fat.min().x() - (4.5 - AABB_MARGIN)).abs() < 1.0e-5);
    }

    #[test]
    #[should_panic(expected = "unknown handle")]
    fn destroying_a_foreign_handle_fails_fast() {
        let mut a = ProxyTable::new();
        let mut b = ProxyTable::new();
        let id = a.create_proxy(unit_box_at(0.0, 0.0), 1);
        b.destroy_proxy(id);
    }

    #[test]
    fn pair_order_is_deterministic() {
        let mut table = ProxyTable::new();
        // Insert out of order to exercise canonical ordering.
        table.create_proxy(unit_box_at(100.0, 0.0), 2);
        table.create_proxy(unit_box_at(0.6, 0.0), 1);
        table.create_proxy(unit_box_at(0.0, 0.0), 0);
        assert_eq!(table.pairs(), vec![(0, 1)]);

        table.create_proxy(unit_box_at(0.3, 0.0), 3);
        assert_eq!(table.pairs(), vec![(0, 1), (0, 3), (1, 3)]);
    }
}
