// SPDX-License-Identifier: Apache-2.0

//! Broad-phase interfaces and a minimal reference implementation.
//!
//! Determinism contract (applies to all implementations used here):
//! - Pair identity is canonicalized as `(min_owner, max_owner)`.
//! - The emitted pair list is strictly sorted lexicographically by that
//!   tuple.
//! - Overlap is inclusive on faces (touching AABBs are considered
//!   overlapping).
//!
//! The index speaks in opaque tokens: proxies are [`proxy_table::ProxyId`]
//! handles, owners are caller-packed `u64` values the index never
//! interprets.

#[doc = "Reference proxy table and trait definitions."]
pub mod proxy_table;
