//! Fast hash map and hash set type aliases.
//!
//! This module provides type aliases for [`FxHashMap`] and [`FxHashSet`] from
//! the `rustc-hash` crate. The Fx hash algorithm is faster than the standard
//! library's default hasher for the small integer and string keys used here
//! (product ids, category names, validation field keys), and none of these
//! tables hold attacker-controlled keys, so denial-of-service resistance is
//! not required.
//!
//! # Examples
//!
//! ```
//! use sf_core::{FxHashMap, FxHashSet};
//!
//! let mut seen: FxHashSet<u64> = FxHashSet::default();
//! seen.insert(42);
//! assert!(seen.contains(&42));
//!
//! let mut counts: FxHashMap<String, usize> = FxHashMap::default();
//! counts.insert("electronics".to_owned(), 6);
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
///
/// Faster than the standard library's `HashMap` for small keys but without
/// denial-of-service resistance.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
///
/// Faster than the standard library's `HashSet` for small keys but without
/// denial-of-service resistance.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new [`FxHashSet`] with the specified capacity.
///
/// # Examples
///
/// ```
/// use sf_core::hash::fx_hash_set_with_capacity;
///
/// let set: sf_core::FxHashSet<u64> = fx_hash_set_with_capacity(20);
/// assert!(set.capacity() >= 20);
/// ```
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}
