// SPDX-License-Identifier: Apache-2.0

//! The driver-facing body layer.
//!
//! A body owns its fixtures in indexed slots and hands out stable
//! [`FixtureId`]s; slots are never reused, so a handle never silently
//! aliases a later fixture. The body also carries the current world
//! transform that transform-dependent fixture queries resolve against,
//! and drives the per-step proxy synchronization of every fixture it
//! owns. Integration (velocities, sweeps, sleeping) belongs to the world
//! driver, not this layer.

use crate::fixture::{Fixture, FixtureDef, FixtureDefError, FixtureId};
use keel_geom::{BroadPhase, RayCastInput, RayCastOutput, Transform, Vec2};

/// Stable identifier of a body within the caller's registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u32);

impl BodyId {
    /// Creates an identifier from a raw registry index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw registry index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A rigid body as seen by the attachment subsystem: a transform plus
/// fixture slots.
#[derive(Debug)]
pub struct Body {
    id: BodyId,
    transform: Transform,
    fixtures: Vec<Option<Fixture>>,
}

impl Body {
    /// Creates a body at `transform` with no fixtures.
    #[must_use]
    pub fn new(id: BodyId, transform: Transform) -> Self {
        Self {
            id,
            transform,
            fixtures: Vec::new(),
        }
    }

    /// This body's identifier.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// Current world transform.
    #[must_use]
    pub const fn transform(&self) -> Transform {
        self.transform
    }

    /// Replaces the world transform.
    ///
    /// The fixtures' cached AABBs and proxies are not touched; the driver
    /// is expected to call [`Self::synchronize_fixtures`] with the old and
    /// new transforms as part of the step.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Number of live fixtures.
    #[must_use]
    pub fn fixture_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.is_some()).count()
    }

    /// Validates `def` and attaches a new fixture built from it.
    ///
    /// The fixture starts unindexed; call [`Self::create_proxies`] (or
    /// [`Fixture::create_proxy`] on the single fixture) to register it
    /// with a broad-phase index.
    ///
    /// # Errors
    /// Returns [`FixtureDefError`] when the definition fails validation;
    /// nothing is attached in that case.
    pub fn create_fixture(&mut self, def: &FixtureDef) -> Result<FixtureId, FixtureDefError> {
        def.validate()?;
        let id = FixtureId::new(self.id, self.fixtures.len() as u32);
        self.fixtures.push(Some(Fixture::create(id, Some(self.id), def)));
        Ok(id)
    }

    /// Detaches and destroys a fixture, unindexing it first.
    ///
    /// Contacts referencing the fixture are the contact manager's to
    /// remove; this layer only guarantees the proxy-before-destroy
    /// ordering.
    ///
    /// # Panics
    /// Panics if `id` does not name a live fixture of this body.
    pub fn destroy_fixture(&mut self, id: FixtureId, broad_phase: &mut impl BroadPhase) {
        assert!(id.body() == self.id, "fixture belongs to a different body");
        let slot = self
            .fixtures
            .get_mut(id.slot() as usize)
            .and_then(Option::take);
        let Some(mut fixture) = slot else {
            panic!("destroy_fixture: unknown fixture handle");
        };
        fixture.destroy_proxy(broad_phase);
        fixture.destroy();
    }

    /// Resolves a fixture handle.
    #[must_use]
    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        if id.body() != self.id {
            return None;
        }
        self.fixtures.get(id.slot() as usize).and_then(Option::as_ref)
    }

    /// Resolves a fixture handle mutably.
    pub fn fixture_mut(&mut self, id: FixtureId) -> Option<&mut Fixture> {
        if id.body() != self.id {
            return None;
        }
        self.fixtures
            .get_mut(id.slot() as usize)
            .and_then(Option::as_mut)
    }

    /// Iterates over the live fixtures in slot order.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter_map(Option::as_ref)
    }

    /// Registers every fixture with the index under the current transform.
    ///
    /// Supports activation cycles: a deactivated body destroys its proxies
    /// and re-creates them here when it re-enters the simulation.
    ///
    /// # Panics
    /// Panics if any fixture is already indexed.
    pub fn create_proxies(&mut self, broad_phase: &mut impl BroadPhase) {
        let xf = self.transform;
        for fixture in self.fixtures.iter_mut().filter_map(Option::as_mut) {
            fixture.create_proxy(broad_phase, &xf);
        }
    }

    /// Unregisters every fixture from the index; no-op for fixtures that
    /// are not indexed.
    pub fn destroy_proxies(&mut self, broad_phase: &mut impl BroadPhase) {
        for fixture in self.fixtures.iter_mut().filter_map(Option::as_mut) {
            fixture.destroy_proxy(broad_phase);
        }
    }

    /// Per-step driver: re-synchronizes every indexed fixture over the
    /// motion from `xf_start` to `xf_end`.
    pub fn synchronize_fixtures(
        &mut self,
        broad_phase: &mut impl BroadPhase,
        xf_start: &Transform,
        xf_end: &Transform,
    ) {
        for fixture in self.fixtures.iter_mut().filter_map(Option::as_mut) {
            fixture.synchronize(broad_phase, xf_start, xf_end);
        }
    }

    /// Tests a world-space point against a fixture under this body's
    /// current transform.
    ///
    /// # Panics
    /// Panics if `id` does not name a live fixture of this body.
    #[must_use]
    pub fn test_point(&self, id: FixtureId, point: &Vec2) -> bool {
        let Some(fixture) = self.fixture(id) else {
            panic!("test_point: unknown fixture handle");
        };
        fixture.test_point(&self.transform, point)
    }

    /// Casts a ray against a fixture under this body's current transform.
    ///
    /// # Panics
    /// Panics if `id` does not name a live fixture of this body.
    #[must_use]
    pub fn ray_cast(&self, id: FixtureId, input: &RayCastInput) -> Option<RayCastOutput> {
        let Some(fixture) = self.fixture(id) else {
            panic!("ray_cast: unknown fixture handle");
        };
        fixture.ray_cast(input, &self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_geom::{Circle, Shape};

    fn circle_def() -> FixtureDef {
        FixtureDef::new(Shape::from(Circle::new(1.0)))
    }

    #[test]
    fn create_fixture_rejects_invalid_definitions() {
        let mut body = Body::new(BodyId::new(0), Transform::identity());
        let mut def = circle_def();
        def.density = -2.0;
        assert_eq!(
            body.create_fixture(&def),
            Err(FixtureDefError::NegativeDensity(-2.0))
        );
        assert_eq!(body.fixture_count(), 0);
    }

    #[test]
    fn slots_are_never_reused() {
        let mut body = Body::new(BodyId::new(0), Transform::identity());
        let mut table = keel_geom::ProxyTable::new();
        let Ok(a) = body.create_fixture(&circle_def()) else {
            panic!("create failed")
        };
        body.destroy_fixture(a, &mut table);
        let Ok(b) = body.create_fixture(&circle_def()) else {
            panic!("create failed")
        };
        assert_ne!(a, b);
        assert!(body.fixture(a).is_none());
        assert!(body.fixture(b).is_some());
    }

    #[test]
    fn foreign_handles_do_not_resolve() {
        let mut body = Body::new(BodyId::new(0), Transform::identity());
        let Ok(id) = body.create_fixture(&circle_def()) else {
            panic!("create failed")
        };
        let other = Body::new(BodyId::new(1), Transform::identity());
        assert!(other.fixture(id).is_none());
    }

    #[test]
    fn point_queries_use_the_body_transform() {
        let mut body = Body::new(
            BodyId::new(0),
            Transform::from_position(Vec2::new(10.0, 0.0)),
        );
        let Ok(id) = body.create_fixture(&circle_def()) else {
            panic!("create failed")
        };
        assert!(body.test_point(id, &Vec2::new(10.5, 0.0)));
        assert!(!body.test_point(id, &Vec2::new(0.0, 0.0)));
    }
}
