//! Integration tests for `DequeOfUnique`.
//!
//! Covers the operations shared with `VectorOfUnique` plus the front-end
//! operations only a deque provides.

use containerofunique::unique::{ByKey, DequeOfUnique, OutOfRangeError};
use rstest::{fixture, rstest};
use std::collections::VecDeque;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn sorted_index(deque: &DequeOfUnique<i32>) -> Vec<i32> {
    let mut indexed: Vec<i32> = deque.index().iter().copied().collect();
    indexed.sort_unstable();
    indexed
}

fn assert_consistent(deque: &DequeOfUnique<i32>) {
    let mut stored: Vec<i32> = deque.iter().copied().collect();
    stored.sort_unstable();
    assert_eq!(stored, sorted_index(deque));
}

#[fixture]
fn deque() -> DequeOfUnique<i32> {
    [1, 2, 3, 4].into()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_deque() {
    let deque: DequeOfUnique<i32> = DequeOfUnique::new();
    assert!(deque.is_empty());
    assert_eq!(deque.deque(), &VecDeque::new());
    assert!(deque.index().is_empty());
}

#[rstest]
fn test_from_iter_keeps_first_occurrences() {
    let deque: DequeOfUnique<i32> = vec![3, 1, 2, 3, 4, 5].into_iter().collect();
    assert_eq!(deque.deque(), &[3, 1, 2, 4, 5]);
    assert_eq!(sorted_index(&deque), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_default_matches_new() {
    let deque: DequeOfUnique<i32> = DequeOfUnique::default();
    assert_eq!(deque, DequeOfUnique::new());
}

// =============================================================================
// Front Operations
// =============================================================================

#[rstest]
fn test_push_front_new_and_duplicate(mut deque: DequeOfUnique<i32>) {
    assert!(deque.push_front(0));
    assert!(!deque.push_front(3));
    assert_eq!(deque.deque(), &[0, 1, 2, 3, 4]);
    assert_consistent(&deque);
}

#[rstest]
fn test_push_front_into_empty() {
    let mut deque: DequeOfUnique<String> = DequeOfUnique::new();
    assert!(deque.push_front("only".to_string()));
    assert_eq!(deque.front(), deque.back());
}

#[rstest]
fn test_pop_front_sequential(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.pop_front(), Some(1));
    assert_eq!(deque.pop_front(), Some(2));
    assert_eq!(deque.deque(), &[3, 4]);
    assert_eq!(sorted_index(&deque), vec![3, 4]);
}

#[rstest]
fn test_pop_front_on_empty_is_none() {
    let mut deque: DequeOfUnique<i32> = DequeOfUnique::new();
    assert_eq!(deque.pop_front(), None);
    assert!(deque.index().is_empty());
}

#[rstest]
fn test_pop_front_then_push_back_readmits(mut deque: DequeOfUnique<i32>) {
    let first = deque.pop_front();
    assert_eq!(first, Some(1));
    assert!(deque.push_back(1));
    assert_eq!(deque.deque(), &[2, 3, 4, 1]);
}

#[rstest]
fn test_emplace_front_new_and_duplicate(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.emplace_front(|| 0), Some(&0));
    assert_eq!(deque.emplace_front(|| 4), None);
    assert_eq!(deque.deque(), &[0, 1, 2, 3, 4]);
}

#[rstest]
fn test_try_emplace_front_error_leaves_deque_unchanged(mut deque: DequeOfUnique<i32>) {
    let result = deque.try_emplace_front(|| "x".parse::<i32>());
    assert!(result.is_err());
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
    assert_consistent(&deque);
}

#[rstest]
fn test_alternating_ends() {
    let mut deque: DequeOfUnique<i32> = DequeOfUnique::new();
    for value in 0..6 {
        if value % 2 == 0 {
            deque.push_back(value);
        } else {
            deque.push_front(value);
        }
    }
    assert_eq!(deque.deque(), &[5, 3, 1, 0, 2, 4]);
    assert_eq!(deque.pop_front(), Some(5));
    assert_eq!(deque.pop_back(), Some(4));
    assert_consistent(&deque);
}

// =============================================================================
// Back Operations
// =============================================================================

#[rstest]
fn test_push_back_new_and_duplicate(mut deque: DequeOfUnique<i32>) {
    assert!(deque.push_back(5));
    assert!(!deque.push_back(1));
    assert_eq!(deque.back(), Some(&5));
    assert_consistent(&deque);
}

#[rstest]
fn test_pop_back_until_empty(mut deque: DequeOfUnique<i32>) {
    let mut popped = Vec::new();
    while let Some(value) = deque.pop_back() {
        popped.push(value);
    }
    assert_eq!(popped, vec![4, 3, 2, 1]);
    assert!(deque.index().is_empty());
}

#[rstest]
fn test_emplace_back_returns_stored_element() {
    let mut deque: DequeOfUnique<String> = DequeOfUnique::new();
    let stored = deque.emplace_back(|| format!("{}-{}", "a", 1)).cloned();
    assert_eq!(stored, Some("a-1".to_string()));
    assert_eq!(deque.emplace_back(|| "a-1".to_string()), None);
}

// =============================================================================
// Access and Iteration
// =============================================================================

#[rstest]
fn test_at_and_index(deque: DequeOfUnique<i32>) {
    assert_eq!(deque[2], 3);
    assert_eq!(deque.at(0), Ok(&1));
    assert_eq!(
        deque.at(4),
        Err(OutOfRangeError {
            index: 4,
            length: 4
        })
    );
}

#[rstest]
fn test_iteration_both_directions(deque: DequeOfUnique<i32>) {
    let forward: Vec<i32> = deque.iter().copied().collect();
    let backward: Vec<i32> = deque.iter().rev().copied().collect();
    assert_eq!(forward, vec![1, 2, 3, 4]);
    assert_eq!(backward, vec![4, 3, 2, 1]);
}

#[rstest]
fn test_find_reports_position(deque: DequeOfUnique<i32>) {
    assert_eq!(deque.find(&3), Some(2));
    assert_eq!(deque.find(&9), None);
    assert!(deque.contains(&1));
    assert!(!deque.contains(&0));
}

#[rstest]
fn test_borrowed_str_lookups() {
    let mut deque: DequeOfUnique<String> = DequeOfUnique::new();
    deque.push_back("b".to_string());
    deque.push_front("a".to_string());

    assert!(deque.contains("a"));
    assert_eq!(deque.find("b"), Some(1));
    assert_eq!(deque.remove("a").as_deref(), Some("a"));
    assert!(!deque.contains("a"));
    assert!(deque.push_front("a".to_string()));
    assert!(deque.index().contains("a"));
}

#[rstest]
fn test_into_inner_returns_store(deque: DequeOfUnique<i32>) {
    let store: VecDeque<i32> = deque.into_inner();
    assert_eq!(store, VecDeque::from([1, 2, 3, 4]));
}

// =============================================================================
// Insert and Erase
// =============================================================================

#[rstest]
#[case::front(0, 9, vec![9, 1, 2, 3, 4])]
#[case::middle(2, 9, vec![1, 2, 9, 3, 4])]
#[case::back(4, 9, vec![1, 2, 3, 4, 9])]
fn test_insert_at_position(
    mut deque: DequeOfUnique<i32>,
    #[case] position: usize,
    #[case] value: i32,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(deque.insert(position, value), (position, true));
    assert!(deque.iter().eq(expected.iter()));
    assert_consistent(&deque);
}

#[rstest]
fn test_insert_iter_dedups_against_contents_and_itself(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.insert_iter(0, [7, 1, 7, 8]), 0);
    assert_eq!(deque.deque(), &[7, 8, 1, 2, 3, 4]);
    assert_consistent(&deque);
}

#[rstest]
fn test_erase_and_erase_range(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.erase(0), 0);
    assert_eq!(deque.deque(), &[2, 3, 4]);
    assert_eq!(deque.erase_range(1..), 1);
    assert_eq!(deque.deque(), &[2]);
    assert_eq!(sorted_index(&deque), vec![2]);
}

#[rstest]
fn test_erase_on_empty_is_noop() {
    let mut deque: DequeOfUnique<i32> = DequeOfUnique::new();
    assert_eq!(deque.erase(0), 0);
    assert_eq!(deque.erase_range(..), 0);
    assert!(deque.is_empty());
}

#[rstest]
fn test_erase_if_counts_removed(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.erase_if(|value| *value < 3), 2);
    assert_eq!(deque.deque(), &[3, 4]);
    assert_consistent(&deque);
}

#[rstest]
#[should_panic(expected = "range end 6 is out of range for length 4")]
fn test_erase_range_past_end_panics(mut deque: DequeOfUnique<i32>) {
    deque.erase_range(2..6);
}

// =============================================================================
// Emplace Failure Atomicity
// =============================================================================

#[rstest]
fn test_emplace_panic_leaves_deque_unchanged(mut deque: DequeOfUnique<i32>) {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        deque.emplace(2, || panic!("construction failed"));
    }));
    assert!(outcome.is_err());
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
    assert_consistent(&deque);
}

#[rstest]
fn test_try_emplace_error_leaves_deque_unchanged(mut deque: DequeOfUnique<i32>) {
    let result = deque.try_emplace(1, || Err::<i32, String>("failed".to_string()));
    assert_eq!(result, Err("failed".to_string()));
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_emplace_inserts_at_position(mut deque: DequeOfUnique<i32>) {
    assert_eq!(deque.emplace(1, || 10), (1, true));
    assert_eq!(deque.emplace(1, || 10), (1, false));
    assert_eq!(deque.deque(), &[1, 10, 2, 3, 4]);
}

// =============================================================================
// Whole-Container Operations
// =============================================================================

#[rstest]
fn test_clone_is_independent(deque: DequeOfUnique<i32>) {
    let mut copy = deque.clone();
    copy.push_front(0);
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
    assert_eq!(copy.deque(), &[0, 1, 2, 3, 4]);
}

#[rstest]
fn test_take_then_reuse(mut deque: DequeOfUnique<i32>) {
    let moved = deque.take();
    assert_eq!(moved.deque(), &[1, 2, 3, 4]);
    assert!(deque.is_empty());
    assert!(deque.push_front(4));
    assert_consistent(&deque);
}

#[rstest]
fn test_assign_and_clear(mut deque: DequeOfUnique<i32>) {
    deque.assign([4, 4, 5]);
    assert_eq!(deque.deque(), &[4, 5]);
    deque.clear();
    assert!(deque.is_empty());
    assert!(!deque.contains(&4));
}

#[rstest]
fn test_swap_exchanges_contents_and_membership(mut deque: DequeOfUnique<i32>) {
    let mut other: DequeOfUnique<i32> = [8, 9].into();
    deque.swap(&mut other);
    assert_eq!(deque.deque(), &[8, 9]);
    assert_eq!(other.deque(), &[1, 2, 3, 4]);
    assert!(deque.contains(&8));
    assert!(!deque.contains(&1));

    other.swap(&mut deque);
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_reserve_and_shrink_keep_contents(mut deque: DequeOfUnique<i32>) {
    deque.reserve(100);
    assert!(deque.capacity() >= 104);
    deque.shrink_to_fit();
    assert_eq!(deque.deque(), &[1, 2, 3, 4]);
    assert_consistent(&deque);
}

#[rstest]
fn test_comparisons(deque: DequeOfUnique<i32>) {
    let greater: DequeOfUnique<i32> = [1, 2, 4].into();
    assert!(deque < greater);
    assert_eq!(deque.partial_cmp(&deque.clone()), Some(std::cmp::Ordering::Equal));
    assert_ne!(deque, greater);
}

#[rstest]
fn test_display_and_debug(deque: DequeOfUnique<i32>) {
    assert_eq!(deque.to_string(), "[1, 2, 3, 4]");
    assert_eq!(format!("{deque:?}"), "[1, 2, 3, 4]");
}

#[rstest]
fn test_by_key_equivalence_on_tuples() {
    let mut deque = DequeOfUnique::with_equivalence(ByKey::new(|pair: &(u32, &str)| pair.0));
    assert!(deque.push_back((1, "one")));
    assert!(deque.push_front((2, "two")));
    assert!(!deque.push_back((1, "uno")));
    assert_eq!(deque.deque(), &[(2, "two"), (1, "one")]);
    assert_eq!(deque.find(&(1, "anything")), Some(1));
}
