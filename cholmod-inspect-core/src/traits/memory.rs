//! Foreign-memory access trait
//!
//! The decoder never touches the inspected process directly; every byte
//! comes through this seam. Hosts back it with whatever they have: a
//! ptrace channel, a mapped core file, or an in-memory image.

use crate::Result;

/// Read-only accessor over the inspected process's address space
///
/// The inspected process is assumed paused for the duration of a display
/// request, so reads need no synchronization and observe a stable image.
pub trait MemoryRead {
    /// Fill `buf` with bytes starting at virtual address `addr`
    ///
    /// Must either fill the whole buffer or fail; partial reads are
    /// reported as [`InspectError::MemoryRead`](crate::InspectError).
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<()>;
}

impl<M: MemoryRead + ?Sized> MemoryRead for &M {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<()> {
        (**self).read(addr, buf)
    }
}
