// SPDX-License-Identifier: Apache-2.0

//! Contacts and the per-body contact-edge graph.
//!
//! A contact is a potential or active collision relationship between two
//! fixtures on two different bodies. The graph indexes contacts by body, so
//! per-body walks (notably filter invalidation) never scan the full contact
//! set. Re-filtering itself is deferred: this module only records the
//! explicit `needs_filtering` flag; the consuming solver clears it on the
//! next contact update, and contacts of a sleeping body wait until that
//! body wakes.

use crate::body::BodyId;
use crate::fixture::FixtureId;
use rustc_hash::FxHashMap;

/// Stable handle to a contact slot in a [`ContactGraph`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u32);

impl ContactId {
    /// Raw slot index, for diagnostics only.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A pairwise collision relationship between two fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    fixture_a: FixtureId,
    fixture_b: FixtureId,
    needs_filtering: bool,
}

impl Contact {
    /// First fixture of the pair.
    #[must_use]
    pub const fn fixture_a(&self) -> FixtureId {
        self.fixture_a
    }

    /// Second fixture of the pair.
    #[must_use]
    pub const fn fixture_b(&self) -> FixtureId {
        self.fixture_b
    }

    /// Returns whether either side of the contact is `fixture`.
    #[must_use]
    pub fn involves(&self, fixture: FixtureId) -> bool {
        self.fixture_a == fixture || self.fixture_b == fixture
    }

    /// Marks the contact for re-filtering at its next update.
    pub fn flag_for_filtering(&mut self) {
        self.needs_filtering = true;
    }

    /// Returns whether the contact is marked for re-filtering.
    #[must_use]
    pub const fn needs_filtering(&self) -> bool {
        self.needs_filtering
    }

    /// Clears the re-filtering mark; called by the solver once it has
    /// re-evaluated the pair.
    pub fn clear_filter_flag(&mut self) {
        self.needs_filtering = false;
    }
}

/// One entry in a body's contact-edge list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ContactEdge {
    other: BodyId,
    contact: ContactId,
}

impl ContactEdge {
    /// The body on the far side of the contact.
    #[must_use]
    pub const fn other(&self) -> BodyId {
        self.other
    }

    /// Handle of the contact this edge belongs to.
    #[must_use]
    pub const fn contact(&self) -> ContactId {
        self.contact
    }
}

/// Slot-stored contacts plus a per-body edge index.
///
/// Contact slots are never reused, so a [`ContactId`] stays valid (or
/// resolves to `None` after removal) for the life of the graph.
#[derive(Debug, Default)]
pub struct ContactGraph {
    contacts: Vec<Option<Contact>>,
    edges: FxHashMap<BodyId, Vec<ContactEdge>>,
}

impl ContactGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.iter().filter(|c| c.is_some()).count()
    }

    /// Returns `true` when no contacts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a contact between two fixtures and links an edge into both
    /// bodies' lists.
    ///
    /// # Panics
    /// Panics if both fixtures belong to the same body.
    pub fn add(&mut self, fixture_a: FixtureId, fixture_b: FixtureId) -> ContactId {
        assert!(
            fixture_a.body() != fixture_b.body(),
            "a contact joins fixtures of two distinct bodies"
        );
        let id = ContactId(self.contacts.len() as u32);
        self.contacts.push(Some(Contact {
            fixture_a,
            fixture_b,
            needs_filtering: false,
        }));
        self.edges.entry(fixture_a.body()).or_default().push(ContactEdge {
            other: fixture_b.body(),
            contact: id,
        });
        self.edges.entry(fixture_b.body()).or_default().push(ContactEdge {
            other: fixture_a.body(),
            contact: id,
        });
        id
    }

    /// Removes a contact and unlinks its edges; no-op if already removed.
    pub fn remove(&mut self, id: ContactId) {
        let Some(slot) = self.contacts.get_mut(id.0 as usize) else {
            return;
        };
        let Some(contact) = slot.take() else {
            return;
        };
        for body in [contact.fixture_a.body(), contact.fixture_b.body()] {
            if let Some(list) = self.edges.get_mut(&body) {
                list.retain(|e| e.contact != id);
            }
        }
    }

    /// Resolves a contact handle.
    #[must_use]
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Resolves a contact handle mutably.
    pub fn get_mut(&mut self, id: ContactId) -> Option<&mut Contact> {
        self.contacts.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// The contact-edge list of `body`, in insertion order.
    #[must_use]
    pub fn edges(&self, body: BodyId) -> &[ContactEdge] {
        self.edges.get(&body).map_or(&[], Vec::as_slice)
    }

    /// Flags every contact on `body`'s edge list that references `fixture`
    /// on either side; returns the number of contacts flagged.
    ///
    /// This is the filter-invalidation walk: it only marks, it never
    /// re-runs filtering.
    pub fn flag_matching(&mut self, body: BodyId, fixture: FixtureId) -> usize {
        let mut flagged = 0;
        let Some(list) = self.edges.get(&body) else {
            return 0;
        };
        // `edges` and `contacts` are disjoint fields, so the walk can read
        // one while flagging through the other.
        for edge in list {
            if let Some(contact) = self.contacts.get_mut(edge.contact.0 as usize) {
                if let Some(contact) = contact.as_mut() {
                    if contact.involves(fixture) && !contact.needs_filtering {
                        contact.flag_for_filtering();
                        flagged += 1;
                    }
                }
            }
        }
        flagged
    }
}
