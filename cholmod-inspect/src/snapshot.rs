//! Memory-mapped snapshot backend
//!
//! Maps a raw dump of the inspected region (a `gcore` slice, an extracted
//! core-file segment) read-only and exposes it at the base address the
//! region occupied in the process.

use std::{fs::File, path::Path};

use cholmod_inspect_core::{MemoryRead, Result};
use memmap2::Mmap;

use crate::image::read_from_bytes;

/// Raw memory snapshot file mapped read-only
pub struct SnapshotFile {
    map: Mmap,
    base: u64,
}

impl SnapshotFile {
    /// Map `path` and expose its contents starting at `base`
    pub fn open<P: AsRef<Path>>(path: P, base: u64) -> std::io::Result<Self> {
        let file = File::open(path)?;
        // SAFETY: read-only mapping of a snapshot file that is not
        // expected to change while mapped
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self { map, base })
    }

    /// First address covered by the snapshot
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the snapshot covers no bytes
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl MemoryRead for SnapshotFile {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<()> {
        read_from_bytes(&self.map, self.base, addr, buf)
    }
}
