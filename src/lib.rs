//! # Sorted merge
//!
//! Merges N independently sorted sources into one globally ordered page.
//!
//! ## Core idea
//! Hold one candidate per source, emit the smallest, and advance only the
//! source it came from ("next element strictly after the one just
//! emitted"). Sources are pulled on demand, so a page of 50 items out of
//! millions of stored elements touches roughly 50 + N elements.
//!
//! A [`Bound`] caps the page by item count and/or an inclusive upper
//! element. When the count cap cuts a page short, [`SortedPage::has_more`]
//! says whether another page exists; pass [`SortedPage::last`] back in as
//! the next initial element to fetch it.

pub mod bound;
pub mod codec;
pub mod error;
pub mod merge;
pub mod run;
pub mod source;
pub mod types;

// Public re-exports for the top-level API
pub use bound::Bound;
pub use codec::Codec;
pub use error::{Error, Result};
pub use merge::merge_sorted;
pub use run::{RunFile, RunWriter, SyncPolicy};
pub use source::{Source, VecSource};
pub use types::{Element, SortedItem, SortedPage, StopReason};
