//! Equivalence relations used by the membership index.
//!
//! An [`Equivalence`] bundles the two halves a hash-based index needs: a way
//! to feed a value into a [`Hasher`] and a way to decide whether two values
//! are the same element. The two halves must agree: values that are
//! `equivalent` must hash identically.
//!
//! - [`NaturalEquivalence`] defers to the element's own `Hash` and `Eq`, and
//!   accepts any borrowed form of the element as a lookup key.
//! - [`ByKey`] compares elements through a projected key.
//!
//! # Examples
//!
//! ```rust
//! use containerofunique::unique::{ByKey, DequeOfUnique};
//!
//! let mut names: DequeOfUnique<String, _, _> =
//!     DequeOfUnique::with_equivalence(ByKey::new(|name: &String| name.to_lowercase()));
//!
//! assert!(names.push_back("Alice".to_string()));
//! assert!(!names.push_back("ALICE".to_string()));
//! assert_eq!(names.len(), 1);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An equivalence relation over `T` together with a hash consistent with it.
///
/// `K` is the type of lookup keys and defaults to `T` itself. Insertion only
/// needs `Equivalence<T>`; lookups such as `contains` or `find` with a `&K`
/// need `Equivalence<T, K>`.
///
/// Implementations must uphold `equivalent(a, k) => hash(a) == hash(k)`,
/// where an element is hashed through `Equivalence<T, T>`. Breaking that rule
/// does not cause memory unsafety, but lookups can then miss, and the
/// container can hold two elements it considers equivalent.
pub trait Equivalence<T: ?Sized, K: ?Sized = T> {
    /// Feeds `key` into `state`.
    fn hash<H: Hasher>(&self, key: &K, state: &mut H);

    /// Returns `true` if `element` and `key` denote the same element.
    fn equivalent(&self, element: &T, key: &K) -> bool;
}

/// The element type's own `Hash` and `Eq`.
///
/// Lookups accept any `K` the element borrows as, so a `String` element can
/// be looked up with a `&str`. `Borrow` already requires `K` to hash and
/// compare like `T`.
///
/// # Examples
///
/// ```rust
/// use containerofunique::unique::VectorOfUnique;
///
/// let vector: VectorOfUnique<String> = ["alpha", "beta"].map(String::from).into();
/// assert!(vector.contains("alpha"));
/// assert_eq!(vector.find("beta"), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquivalence;

impl<T, K> Equivalence<T, K> for NaturalEquivalence
where
    T: Borrow<K> + ?Sized,
    K: Hash + Eq + ?Sized,
{
    #[inline]
    fn hash<H: Hasher>(&self, key: &K, state: &mut H) {
        key.hash(state);
    }

    #[inline]
    fn equivalent(&self, element: &T, key: &K) -> bool {
        element.borrow() == key
    }
}

/// Treats two elements as the same when their projected keys are equal.
///
/// The key is recomputed on every hash and comparison, so the projection
/// should be cheap. Lookups take a full `&T`.
///
/// # Examples
///
/// ```rust
/// use containerofunique::unique::{ByKey, Equivalence};
///
/// let by_length = ByKey::new(|word: &&str| word.len());
/// assert!(by_length.equivalent(&"four", &"five"));
/// assert!(!by_length.equivalent(&"one", &"three"));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    projection: F,
}

impl<F> ByKey<F> {
    /// Creates an equivalence that compares elements by `projection`.
    #[inline]
    #[must_use]
    pub const fn new(projection: F) -> Self {
        Self { projection }
    }
}

impl<T, Key, F> Equivalence<T> for ByKey<F>
where
    T: ?Sized,
    Key: Hash + Eq,
    F: Fn(&T) -> Key,
{
    #[inline]
    fn hash<H: Hasher>(&self, key: &T, state: &mut H) {
        (self.projection)(key).hash(state);
    }

    #[inline]
    fn equivalent(&self, element: &T, key: &T) -> bool {
        (self.projection)(element) == (self.projection)(key)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::{BuildHasher, RandomState};

    fn fingerprint<T: ?Sized, K: ?Sized, Q: Equivalence<T, K>>(
        hash_builder: &RandomState,
        equivalence: &Q,
        key: &K,
    ) -> u64 {
        let mut state = hash_builder.build_hasher();
        equivalence.hash(key, &mut state);
        state.finish()
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(1, 2, false)]
    #[case(-7, -7, true)]
    fn test_natural_equivalence_matches_eq(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Equivalence::<i32>::equivalent(&NaturalEquivalence, &left, &right),
            expected
        );
    }

    #[rstest]
    fn test_natural_equivalence_hash_matches_std_hash() {
        let hash_builder = RandomState::new();
        let value = "lambda".to_string();
        assert_eq!(
            fingerprint::<String, String, _>(&hash_builder, &NaturalEquivalence, &value),
            hash_builder.hash_one(&value)
        );
    }

    #[rstest]
    fn test_natural_equivalence_borrowed_key_shares_fingerprint() {
        let hash_builder = RandomState::new();
        let owned = "lambda".to_string();
        assert_eq!(
            fingerprint::<String, String, _>(&hash_builder, &NaturalEquivalence, &owned),
            fingerprint::<String, str, _>(&hash_builder, &NaturalEquivalence, "lambda")
        );
        assert!(Equivalence::<String, str>::equivalent(
            &NaturalEquivalence,
            &owned,
            "lambda"
        ));
        assert!(!Equivalence::<String, str>::equivalent(
            &NaturalEquivalence,
            &owned,
            "lambdas"
        ));
    }

    #[rstest]
    fn test_by_key_equivalent_values_share_fingerprint() {
        let hash_builder = RandomState::new();
        let case_insensitive = ByKey::new(|value: &String| value.to_lowercase());
        let lower = "hello".to_string();
        let upper = "HELLO".to_string();

        assert!(case_insensitive.equivalent(&lower, &upper));
        assert_eq!(
            fingerprint::<String, String, _>(&hash_builder, &case_insensitive, &lower),
            fingerprint::<String, String, _>(&hash_builder, &case_insensitive, &upper)
        );
    }

    #[rstest]
    fn test_by_key_distinguishes_different_keys() {
        let modulo_ten = ByKey::new(|value: &u32| value % 10);
        assert!(modulo_ten.equivalent(&3, &13));
        assert!(!modulo_ten.equivalent(&3, &4));
    }

    #[rstest]
    fn test_by_key_debug_hides_projection() {
        let by_length = ByKey::new(|value: &str| value.len());
        assert_eq!(format!("{by_length:?}"), "ByKey { .. }");
    }
}
