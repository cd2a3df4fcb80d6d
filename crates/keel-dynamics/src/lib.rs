// SPDX-License-Identifier: Apache-2.0

//! Dynamics core for Keel: shape-to-body attachment.
//!
//! The central type is [`Fixture`]: the attachment of one shape instance to
//! one rigid body, carrying material and filtering data. A fixture keeps a
//! cached bounding volume synchronized with a broad-phase index across
//! simulation steps and propagates collision-filter changes to the active
//! contacts of its owning body.
//!
//! Layering (leaves first): [`Filter`] → [`contact`] → [`fixture`] (the
//! core) → [`body`] (the driver-facing layer that owns fixture slots).
//!
//! Concurrency: all operations are synchronous and driven from a single
//! stepping thread; nothing here is reentrant-safe against concurrent
//! mutation of the same fixture or contact graph. All intermediate
//! bounding-volume scratch is stack-local, so synchronizing distinct
//! fixtures from distinct threads is safe if the index itself is
//! partitioned.

/// Body layer: fixture slot storage and per-step driving.
pub mod body;
/// Contacts, contact edges, and the per-body contact graph.
pub mod contact;
/// Fixture definitions and the fixture lifecycle core.
pub mod fixture;

mod filter;

pub use body::{Body, BodyId};
pub use contact::{Contact, ContactEdge, ContactGraph, ContactId};
pub use filter::Filter;
pub use fixture::{Fixture, FixtureDef, FixtureDefError, FixtureId};
