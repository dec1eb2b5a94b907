//! Ordered sequence of unique elements.
//!
//! This module provides [`UniqueSequence`], a mutable sequence that refuses
//! duplicates. Order is insertion order; uniqueness is decided by an
//! [`Equivalence`] and checked in O(1) through a [`MembershipIndex`].
//!
//! # Overview
//!
//! A `UniqueSequence` owns two structures and nothing else:
//!
//! - an ordered store (`VecDeque<T>` or `Vec<T>`) that defines order and
//!   positions
//! - a membership index holding one copy of every stored element
//!
//! After every public call the two hold the same elements, and no two stored
//! elements are equivalent. Neither structure is ever handed out mutably.
//!
//! # Synchronization
//!
//! Insertions go through the index first. The index reserves a vacant slot for
//! the candidate (or reports a duplicate, in which case nothing changes), a
//! copy of the candidate is committed to the slot, and only then is the
//! candidate placed in the store. Anything that can fail, such as a fallible
//! constructor or `Clone`, runs before the commit.
//!
//! Removals go through the store first: the element is read (or taken) from
//! the store, then erased from the index.
//!
//! # Time Complexity
//!
//! | Operation                 | `DequeOfUnique` | `VectorOfUnique` |
//! |---------------------------|-----------------|------------------|
//! | `push_back` / `pop_back`  | O(1)*           | O(1)*            |
//! | `push_front` / `pop_front`| O(1)*           | n/a              |
//! | `insert` / `erase`        | O(n)            | O(n)             |
//! | `get` / `at` / `[]`       | O(1)            | O(1)             |
//! | `contains`                | O(1)*           | O(1)*            |
//! | `find`                    | O(n)            | O(n)             |
//! | `swap`                    | O(1)            | O(1)             |
//!
//! \* expected or amortized.
//!
//! # Examples
//!
//! ```rust
//! use containerofunique::unique::DequeOfUnique;
//!
//! let mut deque: DequeOfUnique<i32> = [3, 1, 2, 3, 4, 5].into_iter().collect();
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2, 4, 5]);
//!
//! assert!(deque.push_front(0));
//! assert!(!deque.push_back(3));
//! assert_eq!(deque.pop_back(), Some(5));
//! assert!(deque.contains(&0));
//! assert_eq!(deque.find(&2), Some(3));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher, RandomState};
use std::ops::{Bound, Index, Range, RangeBounds};

use super::equivalence::{Equivalence, NaturalEquivalence};
use super::error::OutOfRangeError;
use super::index::MembershipIndex;
use super::store::{FrontStore, OrderedStore};

/// An insertion-ordered sequence whose elements are unique.
///
/// # Type Parameters
///
/// * `T` - The element type. Insertion requires `Clone`: the index keeps its
///   own copy of every element.
/// * `C` - The ordered store, an [`OrderedStore<T>`]. Front operations are
///   available when it is also a [`FrontStore<T>`].
/// * `S` - The hash builder used by the index.
/// * `Q` - The [`Equivalence`] that decides which elements are duplicates.
///
/// Most code uses the [`DequeOfUnique`](super::DequeOfUnique) and
/// [`VectorOfUnique`](super::VectorOfUnique) aliases.
///
/// # Examples
///
/// ```rust
/// use containerofunique::unique::VectorOfUnique;
///
/// let mut vector = VectorOfUnique::new();
/// assert!(vector.push_back("apple"));
/// assert!(vector.push_back("banana"));
/// assert!(!vector.push_back("apple"));
///
/// assert_eq!(vector.len(), 2);
/// assert_eq!(vector.as_slice(), &["apple", "banana"]);
/// ```
pub struct UniqueSequence<T, C, S = RandomState, Q = NaturalEquivalence> {
    store: C,
    index: MembershipIndex<T, S, Q>,
}

// =============================================================================
// Construction
// =============================================================================

impl<T, C: OrderedStore<T>> UniqueSequence<T, C, RandomState, NaturalEquivalence> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let deque: DequeOfUnique<i32> = DequeOfUnique::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher_and_equivalence(RandomState::new(), NaturalEquivalence)
    }

    /// Creates an empty sequence with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher_and_equivalence(
            capacity,
            RandomState::new(),
            NaturalEquivalence,
        )
    }
}

impl<T, C: OrderedStore<T>, S> UniqueSequence<T, C, S, NaturalEquivalence> {
    /// Creates an empty sequence whose index hashes with `hash_builder`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_hasher_and_equivalence(hash_builder, NaturalEquivalence)
    }
}

impl<T, C: OrderedStore<T>, Q> UniqueSequence<T, C, RandomState, Q> {
    /// Creates an empty sequence that treats elements as duplicates according
    /// to `equivalence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::{ByKey, VectorOfUnique};
    ///
    /// let mut by_parity: VectorOfUnique<u32, _, _> =
    ///     VectorOfUnique::with_equivalence(ByKey::new(|value: &u32| value % 2));
    /// assert!(by_parity.push_back(1));
    /// assert!(by_parity.push_back(2));
    /// assert!(!by_parity.push_back(3));
    /// assert_eq!(by_parity.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_equivalence(equivalence: Q) -> Self {
        Self::with_hasher_and_equivalence(RandomState::new(), equivalence)
    }
}

impl<T, C: OrderedStore<T>, S, Q> UniqueSequence<T, C, S, Q> {
    /// Creates an empty sequence with the given hash builder and equivalence.
    #[inline]
    #[must_use]
    pub fn with_hasher_and_equivalence(hash_builder: S, equivalence: Q) -> Self {
        Self {
            store: C::default(),
            index: MembershipIndex::with_hasher_and_equivalence(hash_builder, equivalence),
        }
    }

    /// Creates an empty sequence with room for at least `capacity` elements,
    /// using the given hash builder and equivalence.
    #[must_use]
    pub fn with_capacity_and_hasher_and_equivalence(
        capacity: usize,
        hash_builder: S,
        equivalence: Q,
    ) -> Self {
        Self {
            store: C::with_capacity(capacity),
            index: MembershipIndex::with_capacity_and_hasher_and_equivalence(
                capacity,
                hash_builder,
                equivalence,
            ),
        }
    }

    // =========================================================================
    // Read-only access
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns how many elements fit without reallocating either the store or
    /// the index.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity().min(self.index.capacity())
    }

    /// Returns the element at `position`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.store.get(position)
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `position >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let deque: DequeOfUnique<&str> = ["hello", "world"].into();
    /// assert_eq!(deque.at(1), Ok(&"world"));
    /// assert!(deque.at(2).is_err());
    /// ```
    pub fn at(&self, position: usize) -> Result<&T, OutOfRangeError> {
        self.store.get(position).ok_or_else(|| OutOfRangeError {
            index: position,
            length: self.store.len(),
        })
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.store.get(0)
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.store.back()
    }

    /// Iterates over the elements in order. Call `.rev()` for reverse order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let vector: VectorOfUnique<i32> = [1, 2, 3, 4].into();
    /// let reversed: Vec<i32> = vector.iter().rev().copied().collect();
    /// assert_eq!(reversed, vec![4, 3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> C::Iter<'_> {
        self.store.iter()
    }

    /// Returns the ordered store.
    #[inline]
    #[must_use]
    pub const fn sequence(&self) -> &C {
        &self.store
    }

    /// Returns the membership index.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &MembershipIndex<T, S, Q> {
        &self.index
    }

    /// Returns the index's hash builder.
    #[inline]
    #[must_use]
    pub const fn hasher(&self) -> &S {
        self.index.hasher()
    }

    /// Returns the equivalence relation.
    #[inline]
    #[must_use]
    pub const fn equivalence(&self) -> &Q {
        self.index.equivalence()
    }

    /// Consumes the sequence and returns its ordered store.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> C {
        self.store
    }

    // =========================================================================
    // Whole-container operations
    // =========================================================================

    /// Removes every element.
    pub fn clear(&mut self) {
        trace_event!(cleared = self.store.len(), "unique sequence cleared");
        self.store.clear();
        self.index.clear();
    }

    /// Exchanges the contents of `self` and `other`, including their hash
    /// builders and equivalences. No element is touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut left: DequeOfUnique<i32> = [1, 2].into();
    /// let mut right: DequeOfUnique<i32> = [3].into();
    /// left.swap(&mut right);
    /// assert_eq!(left.deque(), &[3]);
    /// assert_eq!(right.deque(), &[1, 2]);
    /// ```
    pub const fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.store, &mut other.store);
        std::mem::swap(&mut self.index, &mut other.index);
    }

    /// Moves the contents out, leaving an empty sequence with the same hash
    /// builder and equivalence in their place.
    ///
    /// Does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut source: VectorOfUnique<i32> = [1, 2, 3].into();
    /// let target = source.take();
    /// assert!(source.is_empty());
    /// assert_eq!(target.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        S: Clone,
        Q: Clone,
    {
        let empty = Self::with_hasher_and_equivalence(
            self.index.hasher().clone(),
            self.index.equivalence().clone(),
        );
        std::mem::replace(self, empty)
    }

    fn assert_insert_position(&self, position: usize) {
        let length = self.store.len();
        assert!(
            position <= length,
            "insertion position {position} is out of range for length {length}"
        );
    }
}

// =============================================================================
// Lookup and removal
// =============================================================================

impl<T, C, S, Q> UniqueSequence<T, C, S, Q>
where
    C: OrderedStore<T>,
    S: BuildHasher,
    Q: Equivalence<T>,
{
    /// Returns `true` if an element equivalent to `key` is present.
    ///
    /// `key` can be a borrowed form of the element, such as `&str` for a
    /// sequence of `String`.
    ///
    /// # Complexity
    ///
    /// O(1) expected: answered by the index alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let deque: DequeOfUnique<String> = ["a", "b"].map(String::from).into();
    /// assert!(deque.contains("a"));
    /// assert!(!deque.contains("c"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<K>(&self, key: &K) -> bool
    where
        K: ?Sized,
        Q: Equivalence<T, K>,
    {
        self.index.contains(key)
    }

    /// Returns the position of the element equivalent to `key`.
    ///
    /// Absent keys are rejected by the index without scanning.
    ///
    /// # Complexity
    ///
    /// O(n) when present, O(1) expected when absent.
    #[must_use]
    pub fn find<K>(&self, key: &K) -> Option<usize>
    where
        K: ?Sized,
        Q: Equivalence<T, K>,
    {
        if !self.index.contains(key) {
            return None;
        }
        let equivalence = self.index.equivalence();
        self.store.iter().position(|candidate| {
            <Q as Equivalence<T, K>>::equivalent(equivalence, candidate, key)
        })
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.store.pop_back()?;
        self.index.erase(&value);
        Some(value)
    }

    /// Removes the element at `position` and returns `position`, which now
    /// holds the element that followed (or equals `len()`).
    ///
    /// Out-of-range positions, including any position in an empty sequence,
    /// are a no-op returning `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector: VectorOfUnique<i32> = [1, 2, 3].into();
    /// assert_eq!(vector.erase(1), 1);
    /// assert_eq!(vector.as_slice(), &[1, 3]);
    /// assert!(!vector.contains(&2));
    ///
    /// let mut empty: VectorOfUnique<i32> = VectorOfUnique::new();
    /// assert_eq!(empty.erase(0), 0);
    /// ```
    pub fn erase(&mut self, position: usize) -> usize {
        let Some(value) = self.store.get(position) else {
            return self.store.len();
        };
        self.index.erase(value);
        self.store.remove(position);
        position
    }

    /// Removes every element in `range` and returns the position of the
    /// element that followed the range.
    ///
    /// An empty range is a no-op returning its end.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if its end is
    /// greater than `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut deque: DequeOfUnique<i32> = [1, 2, 3, 4, 5].into();
    /// assert_eq!(deque.erase_range(1..3), 1);
    /// assert_eq!(deque.deque(), &[1, 4, 5]);
    /// assert_eq!(deque.erase_range(2..2), 2);
    /// ```
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = resolve_range(&range, self.store.len());
        if start == end {
            return end;
        }
        for position in start..end {
            if let Some(value) = self.store.get(position) {
                self.index.erase(value);
            }
        }
        self.store.remove_range(start..end);
        trace_event!(
            start,
            removed = end - start,
            length = self.store.len(),
            "range erased"
        );
        start
    }

    /// Removes the element equivalent to `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector: VectorOfUnique<i32> = [1, 2, 3].into();
    /// assert_eq!(vector.remove(&2), Some(2));
    /// assert_eq!(vector.remove(&2), None);
    ///
    /// let mut words: VectorOfUnique<String> = ["one", "two"].map(String::from).into();
    /// assert_eq!(words.remove("one").as_deref(), Some("one"));
    /// ```
    pub fn remove<K>(&mut self, key: &K) -> Option<T>
    where
        K: ?Sized,
        Q: Equivalence<T, K>,
    {
        let position = self.find(key)?;
        let removed = self.store.remove(position)?;
        self.index.erase(&removed);
        Some(removed)
    }

    /// Removes every element for which `predicate` returns `true` and returns
    /// how many were removed. The remaining elements keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut deque: DequeOfUnique<i32> = (1..=6).collect();
    /// assert_eq!(deque.erase_if(|value| value % 2 == 0), 3);
    /// assert_eq!(deque.deque(), &[1, 3, 5]);
    /// ```
    pub fn erase_if<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.store.len();
        let Self { store, index } = self;
        store.retain(|value| {
            if predicate(value) {
                index.erase(value);
                false
            } else {
                true
            }
        });
        before - self.store.len()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.erase_if(|value| !predicate(value));
    }

    /// Reserves room for at least `additional` more elements in both the
    /// store and the index.
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional);
        self.index.reserve(additional);
    }

    /// Releases unused capacity in both the store and the index.
    pub fn shrink_to_fit(&mut self) {
        self.store.shrink_to_fit();
        self.index.shrink_to_fit();
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl<T, C, S, Q> UniqueSequence<T, C, S, Q>
where
    T: Clone,
    C: OrderedStore<T>,
    S: BuildHasher,
    Q: Equivalence<T>,
{
    /// Admits `value` if no equivalent element is present.
    ///
    /// Phase one reserves a slot in the index; phase two commits a copy to
    /// the slot and hands `value` to `place`. A duplicate stops after phase
    /// one with nothing changed.
    fn admit_with<F>(&mut self, value: T, place: F) -> bool
    where
        F: FnOnce(&mut C, T),
    {
        let Some(reservation) = self.index.reserve_slot(&value) else {
            trace_event!(length = self.store.len(), "duplicate rejected");
            return false;
        };
        reservation.commit(value.clone());
        place(&mut self.store, value);
        true
    }

    /// Appends `value` unless an equivalent element is present.
    ///
    /// Returns `true` if the value was added. A rejected duplicate leaves the
    /// sequence unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector = VectorOfUnique::new();
    /// assert!(vector.push_back(1));
    /// assert!(!vector.push_back(1));
    /// assert_eq!(vector.len(), 1);
    /// ```
    pub fn push_back(&mut self, value: T) -> bool {
        self.admit_with(value, C::push_back)
    }

    /// Inserts `value` at `position` unless an equivalent element is present.
    ///
    /// Returns `(position, true)` when inserted (the new element is at
    /// `position`) and `(position, false)` for a rejected duplicate.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`. The check runs before any change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut deque: DequeOfUnique<i32> = [1, 3].into();
    /// assert_eq!(deque.insert(1, 2), (1, true));
    /// assert_eq!(deque.insert(0, 3), (0, false));
    /// assert_eq!(deque.deque(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, position: usize, value: T) -> (usize, bool) {
        self.assert_insert_position(position);
        let inserted = self.admit_with(value, |store, value| store.insert(position, value));
        (position, inserted)
    }

    /// Inserts the elements of `values` at `position`, skipping every element
    /// equivalent to one already present or to an earlier element of
    /// `values`.
    ///
    /// Inserted elements keep their input order and occupy
    /// `position..position + added`, where `added` is the growth in `len()`.
    /// Returns the position of the first inserted element, which is
    /// `position` whether or not anything was inserted.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`. The check runs before any change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector: VectorOfUnique<i32> = [1, 5].into();
    /// assert_eq!(vector.insert_iter(1, [2, 5, 3, 2, 4]), 1);
    /// assert_eq!(vector.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I>(&mut self, position: usize, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.assert_insert_position(position);
        let mut cursor = position;
        for value in values {
            if self.admit_with(value, |store, value| store.insert(cursor, value)) {
                cursor += 1;
            }
        }
        trace_event!(position, added = cursor - position, "range inserted");
        position
    }

    /// Constructs an element with `make` and inserts it at `position` unless
    /// an equivalent element is present.
    ///
    /// The element is constructed once and cloned into the index.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`, before `make` runs. A panic inside
    /// `make` leaves the sequence unchanged.
    pub fn emplace<F>(&mut self, position: usize, make: F) -> (usize, bool)
    where
        F: FnOnce() -> T,
    {
        self.assert_insert_position(position);
        let value = make();
        self.insert(position, value)
    }

    /// Fallible form of [`emplace`](Self::emplace).
    ///
    /// # Errors
    ///
    /// Returns the error from `make` unchanged; the sequence is then exactly
    /// as it was before the call.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`, before `make` runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector: VectorOfUnique<u8> = [1, 2].into();
    /// let failed = vector.try_emplace(1, || u8::try_from(300_i32));
    /// assert!(failed.is_err());
    /// assert_eq!(vector.as_slice(), &[1, 2]);
    ///
    /// assert_eq!(vector.try_emplace(1, || u8::try_from(7_i32)), Ok((1, true)));
    /// assert_eq!(vector.as_slice(), &[1, 7, 2]);
    /// ```
    pub fn try_emplace<F, E>(&mut self, position: usize, make: F) -> Result<(usize, bool), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.assert_insert_position(position);
        let value = make()?;
        Ok(self.insert(position, value))
    }

    /// Constructs an element with `make` and appends it unless an equivalent
    /// element is present.
    ///
    /// Returns a reference to the stored element, or `None` for a duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::VectorOfUnique;
    ///
    /// let mut vector: VectorOfUnique<String> = VectorOfUnique::new();
    /// assert_eq!(vector.emplace_back(|| "a".repeat(3)).map(String::as_str), Some("aaa"));
    /// assert_eq!(vector.emplace_back(|| "aaa".to_string()), None);
    /// ```
    pub fn emplace_back<F>(&mut self, make: F) -> Option<&T>
    where
        F: FnOnce() -> T,
    {
        let value = make();
        if self.push_back(value) {
            self.store.back()
        } else {
            None
        }
    }

    /// Fallible form of [`emplace_back`](Self::emplace_back).
    ///
    /// # Errors
    ///
    /// Returns the error from `make` unchanged; the sequence is then exactly
    /// as it was before the call.
    pub fn try_emplace_back<F, E>(&mut self, make: F) -> Result<Option<&T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = make()?;
        Ok(if self.push_back(value) {
            self.store.back()
        } else {
            None
        })
    }

    /// Replaces the contents with the unique elements of `values`, first
    /// occurrence first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut deque: DequeOfUnique<i32> = [1, 2, 3].into();
    /// deque.assign([3, 4, 4, 5]);
    /// assert_eq!(deque.deque(), &[3, 4, 5]);
    /// ```
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(values);
    }
}

// =============================================================================
// Front operations
// =============================================================================

impl<T, C, S, Q> UniqueSequence<T, C, S, Q>
where
    C: FrontStore<T>,
    S: BuildHasher,
    Q: Equivalence<T>,
{
    /// Prepends `value` unless an equivalent element is present.
    ///
    /// Returns `true` if the value was added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use containerofunique::unique::DequeOfUnique;
    ///
    /// let mut deque: DequeOfUnique<i32> = [2, 3].into();
    /// assert!(deque.push_front(1));
    /// assert!(!deque.push_front(3));
    /// assert_eq!(deque.deque(), &[1, 2, 3]);
    /// ```
    pub fn push_front(&mut self, value: T) -> bool
    where
        T: Clone,
    {
        self.admit_with(value, C::push_front)
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.store.pop_front()?;
        self.index.erase(&value);
        Some(value)
    }

    /// Constructs an element with `make` and prepends it unless an equivalent
    /// element is present.
    ///
    /// Returns a reference to the stored element, or `None` for a duplicate.
    pub fn emplace_front<F>(&mut self, make: F) -> Option<&T>
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        let value = make();
        if self.push_front(value) {
            self.store.front()
        } else {
            None
        }
    }

    /// Fallible form of [`emplace_front`](Self::emplace_front).
    ///
    /// # Errors
    ///
    /// Returns the error from `make` unchanged; the sequence is then exactly
    /// as it was before the call.
    pub fn try_emplace_front<F, E>(&mut self, make: F) -> Result<Option<&T>, E>
    where
        T: Clone,
        F: FnOnce() -> Result<T, E>,
    {
        let value = make()?;
        Ok(if self.push_front(value) {
            self.store.front()
        } else {
            None
        })
    }
}

// =============================================================================
// Store-specific views
// =============================================================================

impl<T, S, Q> UniqueSequence<T, VecDeque<T>, S, Q> {
    /// Returns the underlying deque.
    #[inline]
    #[must_use]
    pub const fn deque(&self) -> &VecDeque<T> {
        &self.store
    }
}

impl<T, S, Q> UniqueSequence<T, Vec<T>, S, Q> {
    /// Returns the underlying vector.
    #[inline]
    #[must_use]
    pub const fn vector(&self) -> &Vec<T> {
        &self.store
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }
}

/// Converts any `RangeBounds` into a checked half-open range over `length`.
fn resolve_range<R>(range: &R, length: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => length,
    };
    assert!(
        start <= end,
        "range start {start} is greater than range end {end}"
    );
    assert!(
        end <= length,
        "range end {end} is out of range for length {length}"
    );
    start..end
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C, S, Q> Default for UniqueSequence<T, C, S, Q>
where
    C: OrderedStore<T>,
    S: Default,
    Q: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher_and_equivalence(S::default(), Q::default())
    }
}

/// Copies element by element through `push_back`, in source order.
///
/// The source is already duplicate-free, so every push succeeds.
impl<T, C, S, Q> Clone for UniqueSequence<T, C, S, Q>
where
    T: Clone,
    C: OrderedStore<T>,
    S: BuildHasher + Clone,
    Q: Equivalence<T> + Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_and_hasher_and_equivalence(
            self.len(),
            self.index.hasher().clone(),
            self.index.equivalence().clone(),
        );
        for element in self.store.iter() {
            copy.push_back(element.clone());
        }
        copy
    }
}

impl<T, C, S, Q> Index<usize> for UniqueSequence<T, C, S, Q>
where
    C: OrderedStore<T>,
{
    type Output = T;

    /// # Panics
    ///
    /// Panics if `position >= len()`.
    fn index(&self, position: usize) -> &T {
        self.at(position).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<T, C, S, Q> FromIterator<T> for UniqueSequence<T, C, S, Q>
where
    T: Clone,
    C: OrderedStore<T>,
    S: BuildHasher + Default,
    Q: Equivalence<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::default();
        sequence.extend(iter);
        sequence
    }
}

impl<T, C, S, Q, const N: usize> From<[T; N]> for UniqueSequence<T, C, S, Q>
where
    T: Clone,
    C: OrderedStore<T>,
    S: BuildHasher + Default,
    Q: Equivalence<T> + Default,
{
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T, C, S, Q> Extend<T> for UniqueSequence<T, C, S, Q>
where
    T: Clone,
    C: OrderedStore<T>,
    S: BuildHasher,
    Q: Equivalence<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, C, S, Q> Extend<&'a T> for UniqueSequence<T, C, S, Q>
where
    T: Copy + 'a,
    C: OrderedStore<T>,
    S: BuildHasher,
    Q: Equivalence<T>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C, S, Q> IntoIterator for UniqueSequence<T, C, S, Q>
where
    C: OrderedStore<T> + IntoIterator<Item = T>,
{
    type Item = T;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, T, C, S, Q> IntoIterator for &'a UniqueSequence<T, C, S, Q>
where
    C: OrderedStore<T>,
{
    type Item = &'a T;
    type IntoIter = C::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

/// Element-wise comparison in order. The index is fully determined by the
/// store and does not take part.
impl<T, C, S, Q> PartialEq for UniqueSequence<T, C, S, Q>
where
    T: PartialEq,
    C: OrderedStore<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C, S, Q> Eq for UniqueSequence<T, C, S, Q>
where
    T: Eq,
    C: OrderedStore<T>,
{
}

/// Lexicographic comparison of the stores.
impl<T, C, S, Q> PartialOrd for UniqueSequence<T, C, S, Q>
where
    T: PartialOrd,
    C: OrderedStore<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, C, S, Q> Ord for UniqueSequence<T, C, S, Q>
where
    T: Ord,
    C: OrderedStore<T>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, C, S, Q> Hash for UniqueSequence<T, C, S, Q>
where
    T: Hash,
    C: OrderedStore<T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T, C, S, Q> fmt::Debug for UniqueSequence<T, C, S, Q>
where
    T: fmt::Debug,
    C: OrderedStore<T>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C, S, Q> fmt::Display for UniqueSequence<T, C, S, Q>
where
    T: fmt::Display,
    C: OrderedStore<T>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, C, S, Q> serde::Serialize for UniqueSequence<T, C, S, Q>
where
    T: serde::Serialize,
    C: OrderedStore<T>,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

/// Visitor producing a `Target` sequence.
#[cfg(feature = "serde")]
struct UniqueSequenceVisitor<Target> {
    marker: std::marker::PhantomData<fn() -> Target>,
}

#[cfg(feature = "serde")]
impl<Target> UniqueSequenceVisitor<Target> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S, Q> serde::de::Visitor<'de> for UniqueSequenceVisitor<UniqueSequence<T, C, S, Q>>
where
    T: serde::Deserialize<'de> + Clone,
    C: OrderedStore<T>,
    S: BuildHasher + Default,
    Q: Equivalence<T> + Default,
{
    type Value = UniqueSequence<T, C, S, Q>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Duplicates in the input are dropped; the first occurrence keeps its place.
        let mut sequence: UniqueSequence<T, C, S, Q> = UniqueSequence::default();
        while let Some(element) = seq.next_element()? {
            sequence.push_back(element);
        }
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C, S, Q> serde::Deserialize<'de> for UniqueSequence<T, C, S, Q>
where
    T: serde::Deserialize<'de> + Clone,
    C: OrderedStore<T>,
    S: BuildHasher + Default,
    Q: Equivalence<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UniqueSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
