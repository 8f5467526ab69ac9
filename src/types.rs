use std::cmp::Reverse;

/// Ordering capability required from merged elements.
///
/// `is_before` must be a strict weak order over every element produced in
/// one merge call: irreflexive, transitive, and "neither before the other"
/// must behave as equality. Violating this gives an unspecified output
/// order, never a panic.
pub trait Element {
    /// True iff `self` sorts strictly before `other`.
    fn is_before(&self, other: &Self) -> bool;
}

macro_rules! impl_element_ord {
    ( $($ty:ty),* $(,)? ) => { $(
        impl Element for $ty {
            fn is_before(&self, other: &Self) -> bool {
                self < other
            }
        }
    )* }
}

impl_element_ord! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    char, bool, String, Vec<u8>,
}

impl Element for &str {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

/// Descending merges: `Reverse(b)` is before `Reverse(a)` when `a` is before `b`.
impl<T: Element> Element for Reverse<T> {
    fn is_before(&self, other: &Self) -> bool {
        other.0.is_before(&self.0)
    }
}

/// One emitted element, tagged with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedItem<I, E> {
    pub source_id: I,
    pub element: E,
}

/// Why a merge call stopped producing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every source ran out of elements.
    Exhausted,
    /// The smallest remaining candidate lies above the upper bound.
    Boundary,
    /// The size limit was reached.
    SizeLimit,
}

/// Result of one merge call: the items in global order plus the
/// pagination flag.
///
/// `has_more` is only ever true when the size limit cut the page short
/// and at least one more acceptable element was waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedPage<I, E> {
    pub items: Vec<SortedItem<I, E>>,
    pub has_more: bool,
    pub stop: StopReason,
}

impl<I, E> SortedPage<I, E> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last emitted element. Feed it back as the next call's initial
    /// element to fetch the following page; lookups are strictly after,
    /// so copies of it held by other sources are not revisited.
    pub fn last(&self) -> Option<&E> {
        self.items.last().map(|item| &item.element)
    }

    /// Drop the source tags, keeping only the elements.
    pub fn into_elements(self) -> Vec<E> {
        self.items.into_iter().map(|item| item.element).collect()
    }
}
