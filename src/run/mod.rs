pub mod reader;
pub mod record;
pub mod writer;

pub use reader::RunFile;
pub use writer::RunWriter;

/// Controls when a run writer fsyncs to disk.
///
/// Trade-off: durability vs throughput.
///   - EveryWrite: every appended element is on disk before `append` returns
///   - EveryNWrites: batched durability
///   - OnFinish: only `finish` (or an explicit `sync`) hits the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// fsync after every record. Safest, slowest.
    EveryWrite,
    /// fsync every N records.
    EveryNWrites(usize),
    /// fsync once when the run is finished.
    OnFinish,
}
