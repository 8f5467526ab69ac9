use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::run::SyncPolicy;
use crate::run::record;
use crate::types::Element;

/// Writes a sorted run file, one CRC-framed record per element.
///
/// Elements must arrive in non-decreasing order; the writer keeps the last
/// appended element and rejects anything before it, so every finished run
/// file is a valid source.
///
/// Two layers of buffering:
///   BufWriter.flush()  → Rust buffer → OS page cache
///   file.sync_all()    → OS page cache → physical disk
pub struct RunWriter<E> {
    writer: BufWriter<File>,
    sync_policy: SyncPolicy,
    writes_since_sync: usize,
    last: Option<E>,
    len: usize,
    scratch: Vec<u8>,
}

impl<E: Element + Codec + Clone> RunWriter<E> {
    /// Create (or truncate) a run file at `path`.
    pub fn create(path: &Path, sync_policy: SyncPolicy) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(RunWriter {
            writer: BufWriter::new(file),
            sync_policy,
            writes_since_sync: 0,
            last: None,
            len: 0,
            scratch: Vec::new(),
        })
    }

    /// Append one element. Fails with `InvalidInput` if it sorts before
    /// the previously appended element or its encoding is too large for a
    /// record. A rejected element leaves the file untouched.
    pub fn append(&mut self, element: &E) -> Result<()> {
        if let Some(last) = &self.last {
            if element.is_before(last) {
                return Err(Error::InvalidInput(format!(
                    "element {} appended out of order",
                    self.len
                )));
            }
        }

        self.scratch.clear();
        element.encode(&mut self.scratch);
        let framed = record::encode(&self.scratch)?;
        self.writer.write_all(&framed)?;
        self.writes_since_sync += 1;
        self.len += 1;
        self.last = Some(element.clone());

        let policy = self.sync_policy;
        match policy {
            SyncPolicy::EveryWrite => self.sync()?,
            SyncPolicy::EveryNWrites(n) if self.writes_since_sync >= n => self.sync()?,
            SyncPolicy::EveryNWrites(_) | SyncPolicy::OnFinish => {}
        }

        Ok(())
    }

    /// Force buffered records to disk.
    pub fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        self.writes_since_sync = 0;
        Ok(())
    }

    /// Flush and fsync, returning the number of records written.
    pub fn finish(mut self) -> Result<usize> {
        self.sync()?;
        Ok(self.len)
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
