use std::io::{Read, Seek, SeekFrom};

use zerocopy::{FromBytes, byteorder};

use crate::{BigEndian, Error, Nbt, Result, binary, cold_path};

use super::{
    CHUNK_COUNT, Chunk, CompressionScheme, Decompress, Region, SECTOR_SIZE, SectorLocation,
    Uncompressed, slot_index,
};

type U32 = byteorder::U32<BigEndian>;

/// Reads chunks out of a seekable region file.
///
/// Every read seeks to where it needs to be, so calls can be made in any
/// order on the same reader.
pub struct RegionReader<R, D = Uncompressed> {
    reader: R,
    decompressor: D,
}

impl<R: Read + Seek> RegionReader<R> {
    /// A reader that only accepts uncompressed chunks.
    pub fn new(reader: R) -> Self {
        Self::with_decompressor(reader, Uncompressed)
    }
}

impl<R: Read + Seek, D: Decompress> RegionReader<R, D> {
    pub fn with_decompressor(reader: R, decompressor: D) -> Self {
        Self {
            reader,
            decompressor,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_word(&mut self, position: u64) -> Result<u32> {
        self.reader.seek(SeekFrom::Start(position))?;
        let mut buf = [0u8; 4];
        self.reader.read_exact(&mut buf)?;
        Ok(U32::from_bytes(buf).get())
    }

    /// Reads the location entry of chunk `(x, z)`.
    pub fn read_location(&mut self, x: usize, z: usize) -> Result<SectorLocation> {
        let slot = slot_index(x, z)?;
        self.read_word(4 * slot as u64).map(SectorLocation::from)
    }

    /// Reads the last-modified time of chunk `(x, z)`, in seconds.
    pub fn read_timestamp(&mut self, x: usize, z: usize) -> Result<u32> {
        let slot = slot_index(x, z)?;
        self.read_word(SECTOR_SIZE + 4 * slot as u64)
    }

    /// Reads chunk `(x, z)`, or `None` if the file does not hold it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SectorOverlapsHeader`] or [`Error::EmptySector`]
    /// on a malformed location entry, and with the compression and decoding
    /// errors of the payload.
    pub fn read_chunk(&mut self, x: usize, z: usize) -> Result<Option<Chunk>> {
        let location = self.read_location(x, z)?;
        if location.is_absent() {
            return Ok(None);
        }
        location.validate()?;
        let timestamp = self.read_timestamp(x, z)?;
        let data = self.read_chunk_data(location)?;
        Ok(Some(Chunk { timestamp, data }))
    }

    /// Reads every chunk of the file.
    ///
    /// Slots whose location has a sector offset below 2 or a zero sector
    /// count are left empty. The first failing chunk aborts the whole read.
    pub fn read_region(&mut self) -> Result<Region> {
        self.reader.seek(SeekFrom::Start(0))?;
        let mut header = vec![0u8; 2 * SECTOR_SIZE as usize];
        self.reader.read_exact(&mut header)?;
        let words = <[U32]>::ref_from_bytes(&header).map_err(|_| Error::EndOfFile)?;
        let (locations, timestamps) = words.split_at(CHUNK_COUNT);

        let mut region = Region::new();
        for (slot, (location, timestamp)) in locations.iter().zip(timestamps).enumerate() {
            let location = SectorLocation::from(location.get());
            if location.offset < 2 || location.count == 0 {
                continue;
            }
            let data = self.read_chunk_data(location)?;
            region.chunks[slot] = Some(Chunk {
                timestamp: timestamp.get(),
                data,
            });
        }
        tracing::debug!(chunks = region.len(), "read region");
        Ok(region)
    }

    /// Reads `length scheme payload` at the location and decodes it.
    fn read_chunk_data(&mut self, location: SectorLocation) -> Result<Nbt> {
        self.reader.seek(SeekFrom::Start(location.byte_offset()))?;
        let mut head = [0u8; 5];
        self.reader.read_exact(&mut head)?;
        let length = U32::from_bytes([head[0], head[1], head[2], head[3]]).get();
        let scheme = CompressionScheme::try_from(head[4])?;
        if length == 0 {
            cold_path();
            return Err(Error::EmptySector);
        }

        let mut payload = Vec::new();
        (&mut self.reader)
            .take(u64::from(length) - 1)
            .read_to_end(&mut payload)?;
        if payload.len() as u64 != u64::from(length) - 1 {
            cold_path();
            return Err(Error::EndOfFile);
        }
        tracing::trace!(
            offset = location.offset,
            count = location.count,
            ?scheme,
            length,
            "read chunk"
        );

        let payload = match scheme {
            CompressionScheme::Uncompressed => payload,
            scheme if self.decompressor.supports(scheme) => {
                self.decompressor.decompress(scheme, &payload)?
            }
            scheme => {
                cold_path();
                return Err(Error::UnsupportedCompression(scheme));
            }
        };
        binary::read_be(payload.as_slice())
    }
}
