#![deny(missing_docs)]

//! Ordered set with an injected comparator, [`collections::NavigableSet`], stored in a
//! sorted growable array, [`store::ArrayStore`].
//!
//! The set answers navigation queries ([`lower`], [`floor`], [`ceiling`], [`higher`]),
//! hands out ascending and descending iterators, and builds independent range and
//! descending copies of itself.
//!
//!# Features
//!
//! This crate supports the following cargo features:
//! - `unsafe-optim` : Enable unsafe optimisations in release mode.
//! - `cap` : Report allocated memory in tests (uses the `cap` allocator instead of `mimalloc`).
//!
//! [`lower`]: collections::NavigableSet::lower
//! [`floor`]: collections::NavigableSet::floor
//! [`ceiling`]: collections::NavigableSet::ceiling
//! [`higher`]: collections::NavigableSet::higher

/// Memory allocation.
pub mod alloc;

/// Containers.
pub mod collections;

/// [`store::ArrayStore`], the sorted set's backing array.
pub mod store;
