//! Region files: up to 32×32 independently compressed documents in one file.
//!
//! The file starts with two 4096-byte header tables of big-endian `u32`
//! words, indexed by `x + 32 * z`:
//!
//! - locations, packing a sector offset (high 24 bits) and a sector count
//!   (low 8 bits);
//! - last-modified timestamps in seconds.
//!
//! A chunk at sector offset `n` starts at byte `4096 * n` with a `u32`
//! length, a [`CompressionScheme`] id, and `length - 1` bytes of
//! (possibly compressed) big-endian binary NBT.
//!
//! Uncompressed chunks are handled internally; everything else goes
//! through a [`Decompress`] strategy supplied by the caller.

mod compression;
mod reader;

use std::io::{Read, Seek};

use crate::{Error, Nbt, Result, cold_path};

pub use self::{
    compression::{CompressionScheme, Decompress, Uncompressed},
    reader::RegionReader,
};

/// Chunks along each side of a region.
pub const REGION_WIDTH: usize = 32;

/// Chunk slots in a region.
pub const CHUNK_COUNT: usize = REGION_WIDTH * REGION_WIDTH;

/// Bytes per sector.
pub const SECTOR_SIZE: u64 = 4096;

fn slot_index(x: usize, z: usize) -> Result<usize> {
    if x >= REGION_WIDTH || z >= REGION_WIDTH {
        cold_path();
        return Err(Error::ChunkOutOfBounds { x, z });
    }
    Ok(x + REGION_WIDTH * z)
}

/// A decoded location table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SectorLocation {
    /// First sector of the chunk, counted from the start of the file.
    pub offset: u32,
    /// Sectors reserved for the chunk.
    pub count: u8,
}

impl SectorLocation {
    /// An all-zero entry marks a chunk that was never written.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.offset == 0 && self.count == 0
    }

    /// Checks a present entry for use.
    pub fn validate(&self) -> Result<()> {
        if self.offset < 2 {
            cold_path();
            return Err(Error::SectorOverlapsHeader {
                offset: self.offset,
            });
        }
        if self.count == 0 {
            cold_path();
            return Err(Error::EmptySector);
        }
        Ok(())
    }

    #[inline]
    pub const fn byte_offset(&self) -> u64 {
        self.offset as u64 * SECTOR_SIZE
    }
}

impl From<u32> for SectorLocation {
    fn from(word: u32) -> Self {
        Self {
            offset: word >> 8,
            count: word as u8,
        }
    }
}

impl From<SectorLocation> for u32 {
    fn from(location: SectorLocation) -> Self {
        (location.offset << 8) | location.count as u32
    }
}

/// One chunk of a region.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Chunk {
    /// Last modification, in seconds since the Unix epoch.
    pub timestamp: u32,
    pub data: Nbt,
}

/// The 32×32 chunk grid of one region file.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    chunks: Box<[Option<Chunk>]>,
}

impl Region {
    /// A region with every slot empty.
    pub fn new() -> Self {
        Self {
            chunks: std::iter::repeat_with(|| None).take(CHUNK_COUNT).collect(),
        }
    }

    /// The chunk at local coordinates `(x, z)`; `None` if the slot is empty
    /// or the coordinates are outside the grid.
    pub fn get(&self, x: usize, z: usize) -> Option<&Chunk> {
        self.chunks.get(slot_index(x, z).ok()?)?.as_ref()
    }

    pub fn get_mut(&mut self, x: usize, z: usize) -> Option<&mut Chunk> {
        self.chunks.get_mut(slot_index(x, z).ok()?)?.as_mut()
    }

    /// Stores a chunk, returning the one it replaces.
    pub fn insert(&mut self, x: usize, z: usize, chunk: Chunk) -> Result<Option<Chunk>> {
        let slot = slot_index(x, z)?;
        Ok(self.chunks[slot].replace(chunk))
    }

    pub fn remove(&mut self, x: usize, z: usize) -> Result<Option<Chunk>> {
        let slot = slot_index(x, z)?;
        Ok(self.chunks[slot].take())
    }

    /// Number of present chunks.
    pub fn len(&self) -> usize {
        self.chunks.iter().filter(|chunk| chunk.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(Option::is_none)
    }

    /// Present chunks with their coordinates, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Chunk)> {
        self.chunks.iter().enumerate().filter_map(|(slot, chunk)| {
            chunk
                .as_ref()
                .map(|chunk| (slot % REGION_WIDTH, slot / REGION_WIDTH, chunk))
        })
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads chunk `(x, z)` from a region file.
pub fn read_chunk(
    reader: impl Read + Seek,
    decompressor: impl Decompress,
    x: usize,
    z: usize,
) -> Result<Option<Chunk>> {
    RegionReader::with_decompressor(reader, decompressor).read_chunk(x, z)
}

/// Reads every chunk of a region file.
///
/// ```
/// use std::io::Cursor;
/// use lite_nbt::region::{self, Uncompressed};
///
/// let file = vec![0u8; 8192];
/// let region = region::read_region(Cursor::new(file), Uncompressed).unwrap();
/// assert!(region.is_empty());
/// ```
pub fn read_region(reader: impl Read + Seek, decompressor: impl Decompress) -> Result<Region> {
    RegionReader::with_decompressor(reader, decompressor).read_region()
}
