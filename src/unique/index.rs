//! Membership index: the hash side of a unique sequence.
//!
//! [`MembershipIndex`] stores one copy of every element of its container in a
//! `hashbrown` [`HashTable`], hashed with a [`BuildHasher`] and compared with
//! an [`Equivalence`]. The table holds no positions; it only answers "is an
//! equivalent element present?".
//!
//! Insertion is split in two phases. [`MembershipIndex::reserve_slot`] looks
//! the value up and, when it is absent, hands out a [`Reservation`] for the
//! vacant slot without changing membership. [`Reservation::commit`] then
//! stores the copy. Dropping a reservation abandons it.

use std::fmt;
use std::hash::{BuildHasher, Hasher, RandomState};

use hashbrown::HashTable;
use hashbrown::hash_table::{Entry, OccupiedEntry, VacantEntry};

use super::equivalence::{Equivalence, NaturalEquivalence};

/// Hashes `key` with `hash_builder` through `equivalence`.
///
/// Stored elements are hashed with `K = T`.
#[inline]
fn fingerprint<T, K, S, Q>(hash_builder: &S, equivalence: &Q, key: &K) -> u64
where
    T: ?Sized,
    K: ?Sized,
    S: BuildHasher,
    Q: Equivalence<T, K>,
{
    let mut state = hash_builder.build_hasher();
    equivalence.hash(key, &mut state);
    state.finish()
}

/// The set of elements currently held by a unique sequence.
///
/// Only shared references to a `MembershipIndex` ever leave the container,
/// so every public method here is read-only.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `S` - The hash builder
/// * `Q` - The equivalence relation deciding which elements collide
#[derive(Clone)]
pub struct MembershipIndex<T, S = RandomState, Q = NaturalEquivalence> {
    table: HashTable<T>,
    hash_builder: S,
    equivalence: Q,
}

/// A vacant slot in a [`MembershipIndex`] for a value known to be absent.
///
/// Holding a reservation keeps the index mutably borrowed, so membership
/// cannot change between the lookup and the commit.
pub struct Reservation<'a, T> {
    slot: VacantEntry<'a, T>,
}

impl<T> Reservation<'_, T> {
    /// Stores `value` in the reserved slot.
    ///
    /// `value` must be equivalent to the value the slot was reserved for.
    #[inline]
    pub fn commit(self, value: T) {
        self.slot.insert(value);
    }
}

impl<T, S, Q> MembershipIndex<T, S, Q> {
    pub(crate) const fn with_hasher_and_equivalence(hash_builder: S, equivalence: Q) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
            equivalence,
        }
    }

    pub(crate) fn with_capacity_and_hasher_and_equivalence(
        capacity: usize,
        hash_builder: S,
        equivalence: Q,
    ) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
            equivalence,
        }
    }

    /// Returns the number of elements in the index.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the index holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of elements the index can hold without rehashing.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Iterates over the indexed elements in arbitrary order.
    #[inline]
    pub fn iter(&self) -> hashbrown::hash_table::Iter<'_, T> {
        self.table.iter()
    }

    /// Returns the hash builder.
    #[inline]
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the equivalence relation.
    #[inline]
    #[must_use]
    pub const fn equivalence(&self) -> &Q {
        &self.equivalence
    }

    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T, S, Q> MembershipIndex<T, S, Q>
where
    S: BuildHasher,
    Q: Equivalence<T>,
{
    /// Returns `true` if an element equivalent to `key` is indexed.
    ///
    /// `key` may be any type the equivalence accepts as a lookup key, such as
    /// `str` for `String` elements under [`NaturalEquivalence`].
    ///
    /// # Complexity
    ///
    /// O(1) expected.
    #[must_use]
    pub fn contains<K>(&self, key: &K) -> bool
    where
        K: ?Sized,
        Q: Equivalence<T, K>,
    {
        let hash = fingerprint::<T, K, S, Q>(&self.hash_builder, &self.equivalence, key);
        self.table
            .find(hash, |candidate| {
                <Q as Equivalence<T, K>>::equivalent(&self.equivalence, candidate, key)
            })
            .is_some()
    }

    /// Looks `value` up and reserves its slot if it is absent.
    ///
    /// Returns `None` when an equivalent element is already indexed.
    pub(crate) fn reserve_slot(&mut self, value: &T) -> Option<Reservation<'_, T>> {
        let Self {
            table,
            hash_builder,
            equivalence,
        } = self;
        let hash = fingerprint::<T, T, S, Q>(&*hash_builder, &*equivalence, value);
        match table.entry(
            hash,
            |candidate| equivalence.equivalent(candidate, value),
            |candidate| fingerprint::<T, T, S, Q>(&*hash_builder, &*equivalence, candidate),
        ) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => Some(Reservation { slot }),
        }
    }

    /// Inserts `value` if it is absent. Returns `true` if it was inserted.
    #[cfg(test)]
    fn try_insert(&mut self, value: T) -> bool {
        self.reserve_slot(&value)
            .map(|reservation| reservation.commit(value))
            .is_some()
    }

    /// Removes the element equivalent to `value`. Returns `true` if one was present.
    pub(crate) fn erase(&mut self, value: &T) -> bool {
        let hash = fingerprint::<T, T, S, Q>(&self.hash_builder, &self.equivalence, value);
        let equivalence = &self.equivalence;
        self.table
            .find_entry(hash, |candidate| equivalence.equivalent(candidate, value))
            .map(OccupiedEntry::remove)
            .is_ok()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let Self {
            table,
            hash_builder,
            equivalence,
        } = self;
        table.reserve(additional, |candidate| {
            fingerprint::<T, T, S, Q>(&*hash_builder, &*equivalence, candidate)
        });
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        let Self {
            table,
            hash_builder,
            equivalence,
        } = self;
        table.shrink_to_fit(|candidate| {
            fingerprint::<T, T, S, Q>(&*hash_builder, &*equivalence, candidate)
        });
    }
}

impl<T: fmt::Debug, S, Q> fmt::Debug for MembershipIndex<T, S, Q> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.table.iter()).finish()
    }
}

impl<'a, T, S, Q> IntoIterator for &'a MembershipIndex<T, S, Q> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_table::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
