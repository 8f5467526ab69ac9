use crate::types::Element;

/// Limits applied to one merge call: an optional result count and an
/// optional inclusive upper bound.
///
/// Built once with named options and never mutated afterwards, so the same
/// bound can be reused across calls.
///
/// ```
/// use sorted_merge::Bound;
///
/// let bound = Bound::new().with_size_limit(5).with_upper_bound(10u32);
/// assert!(bound.accepts(&10));
/// assert!(!bound.accepts(&11));
/// assert!(bound.is_full(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound<E> {
    size_limit: Option<usize>,
    upper: Option<E>,
}

impl<E> Default for Bound<E> {
    fn default() -> Self {
        Bound {
            size_limit: None,
            upper: None,
        }
    }
}

impl<E: Element> Bound<E> {
    /// No size limit, no upper bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return at most `limit` items. Must be positive; a zero limit is
    /// rejected when the merge validates its inputs.
    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }

    /// Only return elements that are not after `upper` (inclusive ceiling).
    pub fn with_upper_bound(mut self, upper: E) -> Self {
        self.upper = Some(upper);
        self
    }

    pub fn size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    pub fn upper_bound(&self) -> Option<&E> {
        self.upper.as_ref()
    }

    /// True iff there is no upper bound or `e` is not after it.
    pub fn accepts(&self, e: &E) -> bool {
        match &self.upper {
            Some(upper) => !upper.is_before(e),
            None => true,
        }
    }

    /// True iff a size limit is set and `count` has reached it.
    pub fn is_full(&self, count: usize) -> bool {
        self.size_limit.is_some_and(|limit| count >= limit)
    }
}
