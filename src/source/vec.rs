use std::fmt;

use crate::error::{Error, Result};
use crate::source::Source;
use crate::types::Element;

/// In-memory source over a sorted vector.
///
/// Elements must already be in non-decreasing order. Lookups binary-search
/// for the first element strictly after the argument; equal elements
/// within one source are therefore only ever returned once. An `is_before`
/// that is not a strict weak order never panics here, it only makes the
/// lookups return an unspecified element.
#[derive(Debug, Clone)]
pub struct VecSource<I, E> {
    id: I,
    elements: Vec<E>,
}

impl<I, E: Element> VecSource<I, E> {
    /// Create a source with the given id over sorted `elements`.
    ///
    /// Fails with `InvalidInput` if any element is before its predecessor.
    pub fn new(id: I, elements: Vec<E>) -> Result<Self> {
        if let Some(i) = elements.windows(2).position(|w| w[1].is_before(&w[0])) {
            return Err(Error::InvalidInput(format!(
                "element {} is before its predecessor",
                i + 1
            )));
        }
        Ok(VecSource { id, elements })
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the source holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stored elements in sorted order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }
}

impl<I, E> Source<E> for VecSource<I, E>
where
    I: Clone + fmt::Display,
    E: Element + Clone,
{
    type Id = I;

    fn id(&self) -> I {
        self.id.clone()
    }

    fn next_after(&self, after: &E) -> Result<Option<E>> {
        let pos = self.elements.partition_point(|e| !after.is_before(e));
        Ok(self.elements.get(pos).cloned())
    }
}
