// VecSource tests
// Tests for the in-memory sorted source and its "strictly after" lookups.

use sorted_merge::{Bound, Element, Error, Source, VecSource, merge_sorted};

// =============================================================================
// Test 1: Lookups return the smallest element strictly after the argument
// =============================================================================
#[test]
fn next_after_is_strict() {
    let source = VecSource::new("s", vec![1u32, 3, 7]).unwrap();

    assert_eq!(source.next_after(&0).unwrap(), Some(1));
    assert_eq!(source.next_after(&1).unwrap(), Some(3));
    assert_eq!(source.next_after(&2).unwrap(), Some(3));
    assert_eq!(source.next_after(&6).unwrap(), Some(7));
}

// =============================================================================
// Test 2: Past the last element → exhausted, not an error
// =============================================================================
#[test]
fn exhausted_is_none() {
    let source = VecSource::new("s", vec![1u32, 3, 7]).unwrap();
    assert_eq!(source.next_after(&7).unwrap(), None);
    assert_eq!(source.next_after(&100).unwrap(), None);

    let empty = VecSource::new("empty", Vec::<u32>::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.next_after(&0).unwrap(), None);
}

// =============================================================================
// Test 3: Out-of-order input is rejected, sorted input is kept as given
// =============================================================================
#[test]
fn construction_requires_sorted_input() {
    let err = VecSource::new(7u64, vec![-4i32, 0, 3, 9, 3]).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let source = VecSource::new(7u64, vec![-4i32, 0, 3, 3, 9]).unwrap();
    assert_eq!(source.elements(), &[-4, 0, 3, 3, 9]);
    assert_eq!(source.len(), 5);
    assert_eq!(source.id(), 7);
}

// =============================================================================
// Test 4: Duplicates inside one source are skipped by strict lookups
// =============================================================================
#[test]
fn duplicates_are_returned_once() {
    let source = VecSource::new("dup", vec![2u32, 2, 2, 5]).unwrap();
    assert_eq!(source.next_after(&1).unwrap(), Some(2));
    assert_eq!(source.next_after(&2).unwrap(), Some(5));
}

// =============================================================================
// Test 5: String elements order lexicographically
// =============================================================================
#[test]
fn string_elements() {
    let source = VecSource::new(
        "words",
        vec!["apple".to_string(), "fig".to_string(), "pear".to_string()],
    )
    .unwrap();
    assert_eq!(source.next_after(&"b".to_string()).unwrap(), Some("fig".to_string()));
    assert_eq!(source.next_after(&"pear".to_string()).unwrap(), None);
}

// =============================================================================
// Test 6: A cyclic "is_before" never panics
// =============================================================================

/// Rock-paper-scissors: each value is before the next one mod 3, so the
/// relation is not transitive.
#[derive(Debug, Clone)]
struct Cyc(u32);

impl Element for Cyc {
    fn is_before(&self, other: &Self) -> bool {
        other.0 == (self.0 + 1) % 3
    }
}

#[test]
fn cyclic_order_does_not_panic() {
    // 0, 1, 2, 0, 1, 2, ... passes the adjacent-pair check
    let cycle: Vec<Cyc> = (0..50).map(|i| Cyc(i % 3)).collect();
    let a = VecSource::new("a", cycle.clone()).unwrap();
    let b = VecSource::new("b", cycle).unwrap();

    for k in 0..3 {
        let _ = a.next_after(&Cyc(k)).unwrap();
    }

    // Results are unspecified under a broken order; the limit keeps the page finite
    let bound = Bound::new().with_size_limit(20);
    let page = merge_sorted(Some(&Cyc(0)), &bound, &[a, b]).unwrap();
    assert!(page.len() <= 20);
}
