mod candidates;

use crate::bound::Bound;
use crate::error::{Error, Result};
use crate::source::Source;
use crate::types::{Element, SortedItem, SortedPage, StopReason};

use candidates::CandidateTable;

/// Merge `sources` into one ordered page of elements strictly after
/// `initial`, limited by `bound`.
///
/// Sources are pulled on demand: one candidate per source is held at a
/// time, the smallest is emitted and only that source is advanced. Equal
/// elements from different sources are all emitted, lower source position
/// first.
///
/// The page stops when every source is exhausted, when the smallest
/// remaining candidate lies above the upper bound, or when the size limit
/// is reached. Only the last case can set `has_more`, and only if another
/// acceptable element was waiting.
///
/// # Errors
/// - `InvalidInput` if `initial` is `None`, lies above the upper bound, or
///   the size limit is zero. No source is touched.
/// - `SourceFailure` if any lookup fails. Nothing is returned for the
///   items gathered before the failure.
///
/// ```
/// use sorted_merge::{Bound, VecSource, merge_sorted};
///
/// # fn main() -> sorted_merge::Result<()> {
/// let sources = vec![
///     VecSource::new("a", vec![1, 4, 7])?,
///     VecSource::new("b", vec![2, 4, 9])?,
/// ];
/// let page = merge_sorted(Some(&0), &Bound::new().with_size_limit(4), &sources)?;
/// assert_eq!(page.into_elements(), vec![1, 2, 4, 4]);
/// # Ok(())
/// # }
/// ```
pub fn merge_sorted<E, S>(
    initial: Option<&E>,
    bound: &Bound<E>,
    sources: &[S],
) -> Result<SortedPage<S::Id, E>>
where
    E: Element,
    S: Source<E>,
{
    let initial = validate(initial, bound)?;
    let mut table = CandidateTable::seed(initial, sources)?;
    let mut items = Vec::new();

    let stop = loop {
        if bound.is_full(items.len()) {
            break StopReason::SizeLimit;
        }
        let (pos, element) = match table.take_lowest(bound) {
            Ok(next) => next,
            Err(stop) => break stop,
        };
        table.refill(pos, &element, sources)?;

        let source_id = sources[pos].id();
        tracing::trace!(source = %source_id, position = pos, "emit");
        items.push(SortedItem { source_id, element });
    };

    let has_more = match stop {
        StopReason::SizeLimit => table.peek_lowest().is_some_and(|e| bound.accepts(e)),
        StopReason::Exhausted | StopReason::Boundary => false,
    };

    tracing::debug!(
        sources = sources.len(),
        live = table.live(),
        items = items.len(),
        ?stop,
        has_more,
        "merge finished"
    );

    Ok(SortedPage {
        items,
        has_more,
        stop,
    })
}

fn validate<'a, E: Element>(initial: Option<&'a E>, bound: &Bound<E>) -> Result<&'a E> {
    let Some(initial) = initial else {
        return Err(Error::InvalidInput("initial element must be present".into()));
    };
    if bound.size_limit() == Some(0) {
        return Err(Error::InvalidInput("size limit must be positive".into()));
    }
    if !bound.accepts(initial) {
        return Err(Error::InvalidInput(
            "upper bound must not be lower than the initial element".into(),
        ));
    }
    Ok(initial)
}
