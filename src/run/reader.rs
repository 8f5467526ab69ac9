use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::run::record;
use crate::source::Source;
use crate::types::Element;

/// An opened run file, usable as a merge source.
///
/// On open the whole file is read into memory and the start offset of
/// every record is indexed by walking the length headers. Payloads are
/// only CRC-checked and decoded when a lookup touches them, so a damaged
/// record surfaces as a `Corruption` error from `next_after`.
pub struct RunFile<E> {
    id: String,
    /// Path to the run file (for debugging/error messages).
    path: PathBuf,
    data: Vec<u8>,
    offsets: Vec<usize>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Element + Codec> RunFile<E> {
    /// Open the run file at `path`, tagging its items with `id`.
    pub fn open(id: impl Into<String>, path: &Path) -> Result<Self> {
        let data = fs::read(path)?;

        let mut offsets = Vec::new();
        let mut offset = 0usize;
        while offset < data.len() {
            offsets.push(offset);
            offset += record::framed_len(&data[offset..])?;
        }

        Ok(RunFile {
            id: id.into(),
            path: path.to_path_buf(),
            data,
            offsets,
            _marker: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the file.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Decode the record at index `i`.
    pub fn get(&self, i: usize) -> Result<E> {
        let Some(&offset) = self.offsets.get(i) else {
            return Err(Error::InvalidInput(format!(
                "record {i} out of range ({} records)",
                self.offsets.len()
            )));
        };
        let payload = record::decode(&self.data[offset..])?;
        E::decode(payload)
    }

    /// Binary search for the first record strictly after `after`.
    /// Records are sorted, so "not after" holds on a prefix of the file.
    fn first_after(&self, after: &E) -> Result<usize> {
        let (mut lo, mut hi) = (0usize, self.offsets.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if after.is_before(&self.get(mid)?) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Ok(lo)
    }
}

impl<E: Element + Codec> Source<E> for RunFile<E> {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn next_after(&self, after: &E) -> Result<Option<E>> {
        let pos = self.first_after(after)?;
        if pos == self.offsets.len() {
            return Ok(None);
        }
        self.get(pos).map(Some)
    }
}
