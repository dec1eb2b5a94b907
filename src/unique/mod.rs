//! Ordered sequences of unique elements.
//!
//! This module provides sequence containers that refuse duplicates while
//! keeping insertion order and positional access:
//!
//! - [`DequeOfUnique`]: backed by a `VecDeque`, with O(1) operations at both
//!   ends
//! - [`VectorOfUnique`]: backed by a `Vec`, with O(1) operations at the back
//!   only
//!
//! Both are instantiations of [`UniqueSequence`], which pairs an ordered store
//! ([`OrderedStore`]) with a hash-based [`MembershipIndex`] and keeps the two
//! in step across every mutation. Which elements count as duplicates is
//! decided by an [`Equivalence`]: [`NaturalEquivalence`] by default, or a
//! projected key with [`ByKey`].
//!
//! # Examples
//!
//! ## `DequeOfUnique`
//!
//! ```rust
//! use containerofunique::unique::DequeOfUnique;
//!
//! let mut deque: DequeOfUnique<i32> = [3, 1, 2, 3, 4, 5].into();
//! assert_eq!(deque.deque(), &[3, 1, 2, 4, 5]);
//!
//! // Duplicates are reported, not inserted
//! assert!(!deque.push_front(4));
//! assert!(deque.push_front(0));
//! assert_eq!(deque.front(), Some(&0));
//! ```
//!
//! ## `VectorOfUnique`
//!
//! ```rust
//! use containerofunique::unique::VectorOfUnique;
//!
//! let mut vector: VectorOfUnique<String> = VectorOfUnique::new();
//! vector.extend(["b", "a", "b", "c"].map(String::from));
//! assert_eq!(vector.as_slice(), &["b", "a", "c"]);
//!
//! // Positional access is checked
//! assert!(vector.at(3).is_err());
//! assert_eq!(vector[1], "a");
//! ```

use std::collections::VecDeque;
use std::hash::RandomState;

mod equivalence;
mod error;
mod index;
mod sequence;
mod store;

pub use equivalence::ByKey;
pub use equivalence::Equivalence;
pub use equivalence::NaturalEquivalence;
pub use error::OutOfRangeError;
pub use index::MembershipIndex;
pub use sequence::UniqueSequence;
pub use store::FrontStore;
pub use store::OrderedStore;

/// A unique sequence backed by a `VecDeque`.
///
/// Supports O(1) insertion and removal at both ends.
pub type DequeOfUnique<T, S = RandomState, Q = NaturalEquivalence> =
    UniqueSequence<T, VecDeque<T>, S, Q>;

/// A unique sequence backed by a `Vec`.
///
/// Supports O(1) amortized insertion and removal at the back only.
pub type VectorOfUnique<T, S = RandomState, Q = NaturalEquivalence> =
    UniqueSequence<T, Vec<T>, S, Q>;

// =============================================================================
// Fast Hash Aliases
// =============================================================================

/// A [`DequeOfUnique`] hashed with `rustc-hash`'s `FxHasher`.
///
/// Fast for small keys, not resistant to adversarial input.
#[cfg(feature = "fxhash")]
pub type FxDequeOfUnique<T> = DequeOfUnique<T, rustc_hash::FxBuildHasher>;

/// A [`VectorOfUnique`] hashed with `rustc-hash`'s `FxHasher`.
#[cfg(feature = "fxhash")]
pub type FxVectorOfUnique<T> = VectorOfUnique<T, rustc_hash::FxBuildHasher>;

/// A [`DequeOfUnique`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashDequeOfUnique<T> = DequeOfUnique<T, ahash::RandomState>;

/// A [`VectorOfUnique`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashVectorOfUnique<T> = VectorOfUnique<T, ahash::RandomState>;

// =============================================================================
// Auto Trait Checks
// =============================================================================

static_assertions::assert_impl_all!(DequeOfUnique<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(VectorOfUnique<String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(DequeOfUnique<std::rc::Rc<i32>>: Send, Sync);
