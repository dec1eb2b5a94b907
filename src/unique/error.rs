//! Error types for unique sequences.
//!
//! Rejecting a duplicate is not an error: insertion methods report it through
//! their return value. The only error a unique sequence produces on its own is
//! a positional lookup past the end.

/// Represents a positional access beyond the end of a unique sequence.
///
/// # Examples
///
/// ```rust
/// use containerofunique::unique::{OutOfRangeError, VectorOfUnique};
///
/// let vector: VectorOfUnique<i32> = [1, 2, 3].into();
/// assert_eq!(
///     vector.at(3),
///     Err(OutOfRangeError { index: 3, length: 3 })
/// );
/// assert_eq!(
///     format!("{}", vector.at(5).unwrap_err()),
///     "index 5 is out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeError {
    /// The requested position.
    pub index: usize,
    /// The length of the sequence at the time of the request.
    pub length: usize,
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} is out of range for length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for OutOfRangeError {}
