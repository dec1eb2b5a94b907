//! # containerofunique
//!
//! Sequence containers that keep insertion order and reject duplicates.
//!
//! ## Overview
//!
//! The standard library offers ordered sequences (`Vec`, `VecDeque`) and
//! unordered sets (`HashSet`), but no sequence that is also a set. This crate
//! provides one, in two flavors:
//!
//! - **`DequeOfUnique`**: a `VecDeque` paired with a hash index, with O(1)
//!   insertion and removal at both ends
//! - **`VectorOfUnique`**: a `Vec` paired with a hash index, with O(1)
//!   insertion and removal at the back
//!
//! Both report duplicates through their return values instead of inserting
//! them, answer membership queries in O(1), and keep positional access.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for both containers
//! - `fxhash`: aliases hashing with `rustc-hash`
//! - `ahash`: aliases hashing with `ahash`
//! - `tracing`: `trace`-level events for duplicate rejections and bulk
//!   operations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use containerofunique::prelude::*;
//!
//! let mut deque: DequeOfUnique<&str> = DequeOfUnique::new();
//! assert!(deque.push_back("b"));
//! assert!(deque.push_front("a"));
//! assert!(!deque.push_back("a"));
//! assert_eq!(deque.to_string(), "[a, b]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so call sites carry no cost.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($argument)*);
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their building blocks and the error type.
///
/// # Usage
///
/// ```rust
/// use containerofunique::prelude::*;
/// ```
pub mod prelude {
    pub use crate::unique::*;
}

pub mod unique;
