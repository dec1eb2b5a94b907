//! Ordered store adapters.
//!
//! A unique sequence keeps its elements in an ordinary sequence type and
//! never asks it anything about uniqueness. [`OrderedStore`] is the positional
//! surface the container needs from that sequence; [`FrontStore`] adds the
//! constant-time front operations only some sequences provide.
//!
//! | Store         | `OrderedStore` | `FrontStore` | push/pop front | push/pop back  |
//! |---------------|----------------|--------------|----------------|----------------|
//! | `VecDeque<T>` | yes            | yes          | O(1)           | O(1) amortized |
//! | `Vec<T>`      | yes            | no           | n/a            | O(1) amortized |
//!
//! Both provide O(1) random access and O(n) insertion and removal in the
//! middle.

use std::collections::VecDeque;
use std::ops::Range;

/// Positional operations over an ordered sequence of `T`.
///
/// Implementations are plain sequences: they hold whatever they are given,
/// duplicates included.
pub trait OrderedStore<T>: Default {
    /// Borrowing iterator in sequence order.
    type Iter<'a>: DoubleEndedIterator<Item = &'a T> + ExactSizeIterator + Clone
    where
        Self: 'a,
        T: 'a;

    /// Creates an empty store with room for at least `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the store can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Returns the element at `index`, if any.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the last element, if any.
    fn back(&self) -> Option<&T>;

    /// Iterates over the elements in order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Appends `value`.
    fn push_back(&mut self, value: T);

    /// Removes and returns the last element.
    fn pop_back(&mut self) -> Option<T>;

    /// Inserts `value` at `index`, shifting later elements.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, value: T);

    /// Removes and returns the element at `index`, or `None` if out of range.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Removes every element in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or ends past `len`.
    fn remove_range(&mut self, range: Range<usize>);

    /// Keeps only the elements for which `predicate` returns `true`, in order.
    fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool;

    /// Removes every element.
    fn clear(&mut self);

    /// Reserves room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Releases unused capacity.
    fn shrink_to_fit(&mut self);
}

/// An [`OrderedStore`] with constant-time operations at the front.
pub trait FrontStore<T>: OrderedStore<T> {
    /// Returns the first element, if any.
    fn front(&self) -> Option<&T>;

    /// Prepends `value`.
    fn push_front(&mut self, value: T);

    /// Removes and returns the first element.
    fn pop_front(&mut self) -> Option<T>;
}

impl<T> OrderedStore<T> for VecDeque<T> {
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        Self::back(self)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        Self::push_back(self, value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        Self::pop_back(self)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Self::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        Self::remove(self, index)
    }

    #[inline]
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    #[inline]
    fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        Self::retain(self, predicate);
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    #[inline]
    fn shrink_to_fit(&mut self) {
        Self::shrink_to_fit(self);
    }
}

impl<T> FrontStore<T> for VecDeque<T> {
    #[inline]
    fn front(&self) -> Option<&T> {
        Self::front(self)
    }

    #[inline]
    fn push_front(&mut self, value: T) {
        Self::push_front(self, value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        Self::pop_front(self)
    }
}

impl<T> OrderedStore<T> for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        Self::insert(self, index, value);
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        (index < Self::len(self)).then(|| Self::remove(self, index))
    }

    #[inline]
    fn remove_range(&mut self, range: Range<usize>) {
        self.drain(range);
    }

    #[inline]
    fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        Self::retain(self, predicate);
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    #[inline]
    fn shrink_to_fit(&mut self) {
        Self::shrink_to_fit(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn exercise_store<C: OrderedStore<i32>>() -> Vec<i32> {
        let mut store = C::with_capacity(4);
        for value in 1..=5 {
            store.push_back(value);
        }
        store.insert(0, 0);
        assert_eq!(store.remove(10), None);
        assert_eq!(store.remove(1), Some(1));
        store.remove_range(1..3);
        store.retain(|value| *value != 4);
        store.iter().copied().collect()
    }

    #[rstest]
    fn test_vec_store_positional_operations() {
        assert_eq!(exercise_store::<Vec<i32>>(), vec![0, 5]);
    }

    #[rstest]
    fn test_deque_store_positional_operations() {
        assert_eq!(exercise_store::<VecDeque<i32>>(), vec![0, 5]);
    }

    #[rstest]
    fn test_deque_front_operations() {
        let mut store: VecDeque<i32> = VecDeque::new();
        FrontStore::push_front(&mut store, 2);
        FrontStore::push_front(&mut store, 1);
        assert_eq!(FrontStore::front(&store), Some(&1));
        assert_eq!(FrontStore::pop_front(&mut store), Some(1));
        assert_eq!(OrderedStore::back(&store), Some(&2));
    }

    #[rstest]
    fn test_store_iterators_run_in_reverse() {
        let store = vec![1, 2, 3];
        let reversed: Vec<i32> = OrderedStore::iter(&store).rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_pop_back_on_empty_store_is_none() {
        let mut store: Vec<i32> = Vec::new();
        assert_eq!(OrderedStore::pop_back(&mut store), None);
        assert!(OrderedStore::is_empty(&store));
    }
}
