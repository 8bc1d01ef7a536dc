//! Owned in-memory address-space image
//!
//! A [`MemoryImage`] holds a contiguous byte buffer exposed at a chosen
//! base address, the simplest [`MemoryRead`] backend: a captured region
//! of a paused process, or a synthetic one built with [`ImageBuilder`]
//! for fixtures and demos.

use bytemuck::Pod;
use cholmod_inspect_core::{validation::align_to_8, InspectError, MemoryRead, Result};

pub(crate) fn read_from_bytes(bytes: &[u8], base: u64, addr: u64, buf: &mut [u8]) -> Result<()> {
    let offset = addr.checked_sub(base).ok_or(InspectError::MemoryRead)?;
    let offset = usize::try_from(offset).map_err(|_| InspectError::MemoryRead)?;
    let end = offset
        .checked_add(buf.len())
        .ok_or(InspectError::MemoryRead)?;
    if end > bytes.len() {
        return Err(InspectError::MemoryRead);
    }
    buf.copy_from_slice(&bytes[offset..end]);
    Ok(())
}

/// Byte buffer exposed as a read-only address range
#[derive(Debug, Clone)]
pub struct MemoryImage {
    base: u64,
    bytes: Vec<u8>,
}

impl MemoryImage {
    /// Expose `bytes` starting at virtual address `base`
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    /// First address covered by the image
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the image covers no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl MemoryRead for MemoryImage {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<()> {
        read_from_bytes(&self.bytes, self.base, addr, buf)
    }
}

/// Incremental builder of a [`MemoryImage`]
///
/// Appends typed arrays on 8-byte boundaries, the alignment the long and
/// double arrays of a real process would have, and hands back the
/// address each array landed on.
#[derive(Debug)]
pub struct ImageBuilder {
    base: u64,
    bytes: Vec<u8>,
}

impl ImageBuilder {
    /// Start an empty image based at `base`
    pub fn new(base: u64) -> Self {
        Self {
            base,
            bytes: Vec::new(),
        }
    }

    fn push_pod<T: Pod>(&mut self, values: &[T]) -> Result<u64> {
        let aligned = align_to_8(self.bytes.len());
        self.bytes.resize(aligned, 0);
        let addr = self
            .base
            .checked_add(aligned as u64)
            .ok_or(InspectError::AddressOverflow)?;
        self.bytes.extend_from_slice(bytemuck::cast_slice(values));
        Ok(addr)
    }

    /// Append a long array, returning its address
    pub fn push_i64s(&mut self, values: &[i64]) -> Result<u64> {
        self.push_pod(values)
    }

    /// Append a double array, returning its address
    pub fn push_f64s(&mut self, values: &[f64]) -> Result<u64> {
        self.push_pod(values)
    }

    /// Finish building and return the image
    pub fn finish(self) -> MemoryImage {
        MemoryImage::new(self.base, self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_image() {
        let image = MemoryImage::new(0x1000, vec![1, 2, 3, 4]);
        let mut buf = [0u8; 2];
        image.read(0x1001, &mut buf).unwrap();
        assert_eq!(buf, [2, 3]);
    }

    #[test]
    fn test_read_outside_image() {
        let image = MemoryImage::new(0x1000, vec![0; 8]);
        let mut buf = [0u8; 4];
        assert_eq!(image.read(0xfff, &mut buf), Err(InspectError::MemoryRead));
        assert_eq!(image.read(0x1006, &mut buf), Err(InspectError::MemoryRead));
    }

    #[test]
    fn test_builder_aligns_and_addresses() {
        let mut builder = ImageBuilder::new(0x4000);
        let a = builder.push_i64s(&[1, 2, 3]).unwrap();
        let b = builder.push_f64s(&[0.5]).unwrap();
        assert_eq!(a, 0x4000);
        assert_eq!(b, 0x4018);

        let image = builder.finish();
        let mut buf = [0u8; 8];
        image.read(b, &mut buf).unwrap();
        assert_eq!(f64::from_ne_bytes(buf), 0.5);
    }
}
