// SPDX-License-Identifier: Apache-2.0

//! Fixture definitions and the fixture lifecycle core.
//!
//! A fixture attaches one shape instance to one rigid body for collision
//! detection and carries the non-geometric data that rides along: material
//! coefficients, the collision filter, the sensor flag, and an opaque user
//! payload. Fixtures own an independent clone of the definition's shape, a
//! cached (possibly enlarged, possibly stale) bounding volume, and — while
//! indexed — an opaque broad-phase proxy handle.
//!
//! Lifecycle: [`Fixture::create`] → zero or more
//! [`Fixture::create_proxy`] / [`Fixture::synchronize`]* /
//! [`Fixture::destroy_proxy`] cycles → [`Fixture::destroy`], which consumes
//! the fixture, so a destroyed fixture cannot be reused.

use crate::body::BodyId;
use crate::contact::ContactGraph;
use crate::filter::Filter;
use keel_geom::{
    Aabb, BroadPhase, MassData, ProxyId, RayCastInput, RayCastOutput, Shape, ShapeKind, Transform,
    Vec2,
};
use thiserror::Error;

/// Stable handle to a fixture slot owned by a body.
///
/// Identity is the pair (owning body, slot index); slots are never reused,
/// so a handle stays unambiguous for the life of the body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixtureId {
    body: BodyId,
    slot: u32,
}

impl FixtureId {
    /// Creates a handle from its parts.
    #[must_use]
    pub const fn new(body: BodyId, slot: u32) -> Self {
        Self { body, slot }
    }

    /// The owning body.
    #[must_use]
    pub const fn body(&self) -> BodyId {
        self.body
    }

    /// Slot index within the owning body.
    #[must_use]
    pub const fn slot(&self) -> u32 {
        self.slot
    }

    /// Packs the handle into the opaque owner token handed to the
    /// broad-phase index. The index never interprets it.
    #[must_use]
    pub const fn owner_token(&self) -> u64 {
        (self.body.raw() as u64) << 32 | self.slot as u64
    }
}

/// Rejected fixture definition.
///
/// Raised at the body boundary before a [`Fixture`] is ever built; inside
/// the core no recoverable errors exist.
#[derive(Debug, Error, PartialEq)]
pub enum FixtureDefError {
    /// Density must be zero or positive.
    #[error("fixture density must be non-negative, got {0}")]
    NegativeDensity(f32),
    /// Material coefficients must be finite numbers.
    #[error("fixture {field} must be finite")]
    NonFiniteMaterial {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Blueprint for a fixture.
///
/// The definition keeps its own shape instance: attaching it clones the
/// shape, so mutating the definition afterwards never affects fixtures
/// already created from it.
#[derive(Debug, Clone)]
pub struct FixtureDef {
    /// Shape to attach; cloned at creation.
    pub shape: Shape,
    /// Opaque user payload copied onto the fixture.
    pub user_data: u64,
    /// Friction coefficient, usually in `[0, 1]`.
    pub friction: f32,
    /// Restitution (bounce), usually in `[0, 1]`.
    pub restitution: f32,
    /// Mass density in kg/m²; must be non-negative.
    pub density: f32,
    /// Collision filter copied onto the fixture.
    pub filter: Filter,
    /// Sensor fixtures are indexed but, by solver convention, produce no
    /// solid response.
    pub sensor: bool,
}

impl FixtureDef {
    /// Creates a definition with default material values for `shape`.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            user_data: 0,
            friction: 0.2,
            restitution: 0.0,
            density: 0.0,
            filter: Filter::default(),
            sensor: false,
        }
    }

    /// Validates the definition at the body boundary.
    ///
    /// # Errors
    /// Returns [`FixtureDefError`] for a negative density or non-finite
    /// material coefficients.
    pub fn validate(&self) -> Result<(), FixtureDefError> {
        if !self.density.is_finite() {
            return Err(FixtureDefError::NonFiniteMaterial { field: "density" });
        }
        if self.density < 0.0 {
            return Err(FixtureDefError::NegativeDensity(self.density));
        }
        if !self.friction.is_finite() {
            return Err(FixtureDefError::NonFiniteMaterial { field: "friction" });
        }
        if !self.restitution.is_finite() {
            return Err(FixtureDefError::NonFiniteMaterial {
                field: "restitution",
            });
        }
        Ok(())
    }
}

/// The attachment of one shape instance to one rigid body.
///
/// See the [module docs](self) for the lifecycle contract. All operations
/// are synchronous and must be driven from the single stepping thread.
#[derive(Debug)]
pub struct Fixture {
    id: FixtureId,
    body: Option<BodyId>,
    shape: Shape,
    density: f32,
    friction: f32,
    restitution: f32,
    filter: Filter,
    sensor: bool,
    user_data: u64,
    aabb: Aabb,
    proxy: Option<ProxyId>,
}

impl Fixture {
    /// Builds a fixture from a definition.
    ///
    /// Copies the material fields, filter, sensor flag, and user payload,
    /// and clones the definition's shape so the fixture owns an
    /// independent instance. The cached AABB starts zeroed and is
    /// meaningful only after the first [`Self::create_proxy`] or
    /// [`Self::synchronize`].
    ///
    /// The body layer always passes `Some(owner)`; a fixture created
    /// without an owner is detached and participates in no contact
    /// bookkeeping until attached storage exists for it.
    #[must_use]
    pub fn create(id: FixtureId, body: Option<BodyId>, def: &FixtureDef) -> Self {
        Self {
            id,
            body,
            shape: def.shape.clone(),
            density: def.density,
            friction: def.friction,
            restitution: def.restitution,
            filter: def.filter,
            sensor: def.sensor,
            user_data: def.user_data,
            aabb: Aabb::ZERO,
            proxy: None,
        }
    }

    /// Destroys the fixture, releasing the owned shape.
    ///
    /// Consuming `self` makes reuse of a destroyed fixture unrepresentable.
    ///
    /// # Panics
    /// Panics if the fixture is still indexed; the proxy must be destroyed
    /// first.
    pub fn destroy(self) {
        assert!(
            self.proxy.is_none(),
            "fixture destroyed while still indexed; call destroy_proxy first"
        );
        drop(self.shape);
    }

    /// Registers the fixture with a broad-phase index.
    ///
    /// Computes the shape's AABB under `xf` into the cache and stores the
    /// handle the index returns. This is the only place the initial AABB
    /// is established.
    ///
    /// # Panics
    /// Panics if the fixture is already indexed.
    pub fn create_proxy(&mut self, broad_phase: &mut impl BroadPhase, xf: &Transform) {
        assert!(self.proxy.is_none(), "fixture is already indexed");
        self.aabb = self.shape.compute_aabb(xf);
        self.proxy = Some(broad_phase.create_proxy(self.aabb, self.id.owner_token()));
    }

    /// Removes the fixture from the broad-phase index.
    ///
    /// No-op when not indexed, so teardown paths may call it
    /// unconditionally.
    pub fn destroy_proxy(&mut self, broad_phase: &mut impl BroadPhase) {
        if let Some(proxy) = self.proxy.take() {
            broad_phase.destroy_proxy(proxy);
        }
    }

    /// Re-synchronizes the cached bounds with one simulation step of
    /// motion.
    ///
    /// No-op when not indexed. Otherwise caches the union of the shape's
    /// AABBs under `xf_start` and `xf_end` — a swept volume sampled at
    /// exactly two poses, which may under-cover pure-rotation sweeps; the
    /// index's own fattening margin is expected to compensate — and moves
    /// the proxy, passing the step displacement as a prediction hint.
    pub fn synchronize(
        &mut self,
        broad_phase: &mut impl BroadPhase,
        xf_start: &Transform,
        xf_end: &Transform,
    ) {
        let Some(proxy) = self.proxy else {
            return;
        };
        let aabb_start = self.shape.compute_aabb(xf_start);
        let aabb_end = self.shape.compute_aabb(xf_end);
        self.aabb = aabb_start.union(&aabb_end);

        let displacement = xf_end.position().sub(&xf_start.position());
        broad_phase.move_proxy(proxy, self.aabb, displacement);
    }

    /// Replaces the collision filter and flags affected contacts.
    ///
    /// The new filter is stored unconditionally. If the fixture is
    /// attached, every contact on the owning body's edge list that
    /// references this fixture on either side is marked for re-filtering;
    /// nothing is re-filtered here, and contacts of a sleeping body are
    /// not reprocessed until it wakes. Filter changes are expected to be
    /// rare, so the cost is deferred into the normal step pipeline.
    pub fn set_filter(&mut self, filter: Filter, contacts: &mut ContactGraph) {
        self.filter = filter;
        let Some(body) = self.body else {
            return;
        };
        contacts.flag_matching(body, self.id);
    }

    /// Tests a world-space point for containment, given the owning body's
    /// current transform.
    #[must_use]
    pub fn test_point(&self, xf: &Transform, point: &Vec2) -> bool {
        self.shape.test_point(xf, point)
    }

    /// Casts a ray against the shape, given the owning body's current
    /// transform.
    #[must_use]
    pub fn ray_cast(&self, input: &RayCastInput, xf: &Transform) -> Option<RayCastOutput> {
        self.shape.ray_cast(input, xf)
    }

    /// Mass properties of the shape at the fixture's density.
    ///
    /// Pure function of shape and density, independent of attachment or
    /// proxy state.
    #[must_use]
    pub fn mass_data(&self) -> MassData {
        self.shape.compute_mass(self.density)
    }

    /// Handle of this fixture.
    #[must_use]
    pub const fn id(&self) -> FixtureId {
        self.id
    }

    /// The owning body, or `None` while detached.
    #[must_use]
    pub const fn body(&self) -> Option<BodyId> {
        self.body
    }

    /// The attached shape.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Mutable access to the attached shape.
    ///
    /// Callers must not change a polygon's vertex count while the fixture
    /// is indexed; cached contact state keyed on the old geometry would go
    /// stale.
    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Variant discriminant of the attached shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Mass density in kg/m².
    #[must_use]
    pub const fn density(&self) -> f32 {
        self.density
    }

    /// Sets the density. Does not automatically adjust the owning body's
    /// mass; the driver recomputes mass when it chooses to.
    ///
    /// # Panics
    /// Panics on a negative density; the value is never silently clamped.
    pub fn set_density(&mut self, density: f32) {
        assert!(density >= 0.0, "fixture density must be non-negative");
        self.density = density;
    }

    /// Friction coefficient.
    #[must_use]
    pub const fn friction(&self) -> f32 {
        self.friction
    }

    /// Sets the friction coefficient. Existing contacts keep their mixed
    /// friction until they are re-evaluated.
    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    /// Restitution coefficient.
    #[must_use]
    pub const fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Sets the restitution coefficient.
    pub fn set_restitution(&mut self, restitution: f32) {
        self.restitution = restitution;
    }

    /// Current collision filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Whether the fixture is a sensor.
    #[must_use]
    pub const fn sensor(&self) -> bool {
        self.sensor
    }

    /// Sets the sensor flag. Takes effect when contacts are next updated.
    pub fn set_sensor(&mut self, sensor: bool) {
        self.sensor = sensor;
    }

    /// Opaque user payload.
    #[must_use]
    pub const fn user_data(&self) -> u64 {
        self.user_data
    }

    /// Replaces the user payload.
    pub fn set_user_data(&mut self, user_data: u64) {
        self.user_data = user_data;
    }

    /// Cached bounding volume.
    ///
    /// May be enlarged and/or stale relative to the tight shape bounds;
    /// callers needing precision should recompute from the shape and the
    /// body's current transform. Zeroed until the first
    /// [`Self::create_proxy`] or [`Self::synchronize`].
    #[must_use]
    pub const fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Broad-phase handle, or `None` while unindexed.
    #[must_use]
    pub const fn proxy(&self) -> Option<ProxyId> {
        self.proxy
    }
}
