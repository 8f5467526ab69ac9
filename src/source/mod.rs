pub mod vec;

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;
use crate::types::Element;

pub use vec::VecSource;

/// An independently ordered sequence the merge pulls from on demand.
///
/// Every sorted data source (an in-memory vector, a run file on disk, a
/// database cursor) implements this trait. The merge only ever borrows a
/// source immutably, so one source can serve many concurrent merges when
/// the implementation is `Sync`.
pub trait Source<E: Element> {
    /// Identifier used to tag emitted items. Never compared by the merge.
    type Id: Clone + fmt::Display;

    /// Stable identifier for the lifetime of a merge call.
    fn id(&self) -> Self::Id;

    /// Smallest element strictly after `after`.
    ///
    /// `Ok(None)` means the source has nothing left past `after`; that is
    /// the normal end of the sequence. `Err` is reserved for genuine
    /// failures (IO, corruption) and aborts the whole merge.
    fn next_after(&self, after: &E) -> Result<Option<E>>;
}

macro_rules! forward_source {
    ( $($ptr:ident)* ) => { $(
        impl<E: Element, S: Source<E> + ?Sized> Source<E> for $ptr<S> {
            type Id = S::Id;

            fn id(&self) -> Self::Id {
                (**self).id()
            }

            fn next_after(&self, after: &E) -> Result<Option<E>> {
                (**self).next_after(after)
            }
        }
    )* }
}

forward_source! { Box Rc Arc }

impl<E: Element, S: Source<E> + ?Sized> Source<E> for &S {
    type Id = S::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn next_after(&self, after: &E) -> Result<Option<E>> {
        (**self).next_after(after)
    }
}
