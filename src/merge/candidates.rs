use crate::bound::Bound;
use crate::error::{Error, Result};
use crate::source::Source;
use crate::types::{Element, StopReason};

/// Per-call candidate state: `(source position, latest pulled element)`.
///
/// Entries stay sorted by position. A source found exhausted simply gets no
/// entry back, so it is dropped for good and never queried again. Scanning
/// in position order is what gives ties to the lower position.
pub(crate) struct CandidateTable<E> {
    live: Vec<(usize, E)>,
}

impl<E: Element> CandidateTable<E> {
    /// Pull the first element after `initial` from every source.
    pub(crate) fn seed<S: Source<E>>(initial: &E, sources: &[S]) -> Result<Self> {
        let mut table = CandidateTable {
            live: Vec::with_capacity(sources.len()),
        };
        for pos in 0..sources.len() {
            table.refill(pos, initial, sources)?;
        }
        Ok(table)
    }

    /// Pull the source's next element after `after` into the table.
    /// Source failures are tagged with the source's id.
    pub(crate) fn refill<S: Source<E>>(
        &mut self,
        pos: usize,
        after: &E,
        sources: &[S],
    ) -> Result<()> {
        let source = &sources[pos];
        let next = source.next_after(after).map_err(|e| {
            tracing::warn!(
                source = %source.id(),
                position = pos,
                error = %e,
                "source lookup failed"
            );
            Error::source_failure(source.id(), e)
        })?;

        match next {
            Some(e) => {
                let at = self.live.partition_point(|&(p, _)| p < pos);
                self.live.insert(at, (pos, e));
            }
            None => {
                tracing::trace!(source = %source.id(), position = pos, "source exhausted");
            }
        }
        Ok(())
    }

    /// Index into `live` of the smallest candidate. Scans ascending and only
    /// replaces the running lowest on a strictly-before comparison.
    fn lowest(&self) -> Option<usize> {
        let mut lowest: Option<usize> = None;
        for (i, (_, e)) in self.live.iter().enumerate() {
            match lowest {
                Some(low) if !e.is_before(&self.live[low].1) => {}
                _ => lowest = Some(i),
            }
        }
        lowest
    }

    /// Smallest candidate, without consuming it.
    pub(crate) fn peek_lowest(&self) -> Option<&E> {
        self.lowest().map(|i| &self.live[i].1)
    }

    /// Remove and return the smallest candidate with its source position,
    /// or the reason the merge has to stop: nothing left, or the smallest
    /// candidate is above the bound (it then stays in the table).
    pub(crate) fn take_lowest(
        &mut self,
        bound: &Bound<E>,
    ) -> std::result::Result<(usize, E), StopReason> {
        let Some(i) = self.lowest() else {
            return Err(StopReason::Exhausted);
        };
        if !bound.accepts(&self.live[i].1) {
            return Err(StopReason::Boundary);
        }
        Ok(self.live.remove(i))
    }

    /// Number of positions not yet found exhausted.
    pub(crate) fn live(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::VecSource;

    fn sources(data: &[&[u32]]) -> Vec<VecSource<String, u32>> {
        data.iter()
            .enumerate()
            .map(|(i, nums)| VecSource::new(format!("s{i}"), nums.to_vec()).unwrap())
            .collect()
    }

    fn positions(table: &CandidateTable<u32>) -> Vec<(usize, u32)> {
        table.live.clone()
    }

    #[test]
    fn seed_pulls_one_candidate_per_source() {
        let srcs = sources(&[&[1, 5], &[2], &[]]);
        let table = CandidateTable::seed(&0, &srcs).unwrap();
        // the empty source is dropped straight away
        assert_eq!(table.live(), 2);
        assert_eq!(positions(&table), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn take_lowest_breaks_ties_by_lower_position() {
        let srcs = sources(&[&[9], &[3], &[3], &[3]]);
        let mut table = CandidateTable::seed(&0, &srcs).unwrap();
        assert_eq!(table.take_lowest(&Bound::new()), Ok((1, 3)));
        assert_eq!(table.take_lowest(&Bound::new()), Ok((2, 3)));
        assert_eq!(table.peek_lowest(), Some(&3));
    }

    #[test]
    fn take_lowest_on_all_exhausted_stops() {
        let srcs = sources(&[&[1], &[2]]);
        let mut table = CandidateTable::seed(&5, &srcs).unwrap();
        assert_eq!(table.live(), 0);
        assert_eq!(table.take_lowest(&Bound::new()), Err(StopReason::Exhausted));
        assert_eq!(table.peek_lowest(), None);
    }

    #[test]
    fn take_lowest_above_bound_leaves_candidate() {
        let srcs = sources(&[&[7], &[4]]);
        let mut table = CandidateTable::seed(&0, &srcs).unwrap();
        let bound = Bound::new().with_upper_bound(3);
        assert_eq!(table.take_lowest(&bound), Err(StopReason::Boundary));
        assert_eq!(table.live(), 2);
        assert_eq!(table.peek_lowest(), Some(&4));
    }

    #[test]
    fn refill_keeps_position_order() {
        let srcs = sources(&[&[1, 2], &[3]]);
        let mut table = CandidateTable::seed(&0, &srcs).unwrap();

        let (pos, taken) = table.take_lowest(&Bound::new()).unwrap();
        assert_eq!((pos, taken), (0, 1));
        assert_eq!(positions(&table), vec![(1, 3)]);

        table.refill(pos, &taken, &srcs).unwrap();
        assert_eq!(positions(&table), vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn refill_after_last_element_drops_source() {
        let srcs = sources(&[&[1], &[3]]);
        let mut table = CandidateTable::seed(&0, &srcs).unwrap();

        let (pos, taken) = table.take_lowest(&Bound::new()).unwrap();
        table.refill(pos, &taken, &srcs).unwrap();
        assert_eq!(positions(&table), vec![(1, 3)]);
    }
}
