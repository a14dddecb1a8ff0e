use std::io::{self, Cursor, Read, Write};

use flate2::{
    Compression,
    read::{GzDecoder, ZlibDecoder},
    write::{GzEncoder, ZlibEncoder},
};
use lite_nbt::{
    CompoundValue, Error, Nbt, binary,
    region::{self, CompressionScheme, RegionReader, SectorLocation, Uncompressed},
};

struct RawChunk {
    x: usize,
    z: usize,
    timestamp: u32,
    scheme: u8,
    payload: Vec<u8>,
}

/// Lays chunks out one after another, starting right after the header.
fn region_file(chunks: &[RawChunk]) -> Vec<u8> {
    let mut file = vec![0u8; 8192];
    let mut next_sector = 2u32;
    for chunk in chunks {
        let slot = chunk.x + 32 * chunk.z;
        let mut body = Vec::new();
        body.extend_from_slice(&(chunk.payload.len() as u32 + 1).to_be_bytes());
        body.push(chunk.scheme);
        body.extend_from_slice(&chunk.payload);
        let sectors = body.len().div_ceil(4096) as u32;
        body.resize(sectors as usize * 4096, 0);

        let location = (next_sector << 8) | sectors;
        file[4 * slot..4 * slot + 4].copy_from_slice(&location.to_be_bytes());
        file[4096 + 4 * slot..4096 + 4 * slot + 4].copy_from_slice(&chunk.timestamp.to_be_bytes());
        file.extend_from_slice(&body);
        next_sector += sectors;
    }
    file
}

fn set_location(file: &mut [u8], x: usize, z: usize, word: u32) {
    let slot = x + 32 * z;
    file[4 * slot..4 * slot + 4].copy_from_slice(&word.to_be_bytes());
}

fn chunk_nbt(x: i32, z: i32) -> Nbt {
    let mut root = CompoundValue::new();
    root.insert("xPos", x);
    root.insert("zPos", z);
    root.insert("Status", "minecraft:full");
    Nbt::new("", root)
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn inflate(scheme: CompressionScheme, data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match scheme {
        CompressionScheme::Gzip => GzDecoder::new(data).read_to_end(&mut out)?,
        CompressionScheme::Zlib => ZlibDecoder::new(data).read_to_end(&mut out)?,
        _ => return Err(io::Error::from(io::ErrorKind::Unsupported)),
    };
    Ok(out)
}

#[test]
fn test_empty_region() {
    let file = region_file(&[]);
    assert_eq!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 0, 0).unwrap(),
        None
    );
    let region = region::read_region(Cursor::new(&file), Uncompressed).unwrap();
    assert!(region.is_empty());
    assert_eq!(region.len(), 0);
    assert!(region.get(0, 0).is_none());
}

#[test]
fn test_uncompressed_chunk() {
    let nbt = chunk_nbt(1, 2);
    let file = region_file(&[RawChunk {
        x: 1,
        z: 2,
        timestamp: 1_700_000_000,
        scheme: 3,
        payload: binary::to_vec_be(&nbt).unwrap(),
    }]);

    let chunk = region::read_chunk(Cursor::new(&file), Uncompressed, 1, 2)
        .unwrap()
        .unwrap();
    assert_eq!(chunk.timestamp, 1_700_000_000);
    assert_eq!(chunk.data, nbt);

    let region = region::read_region(Cursor::new(&file), Uncompressed).unwrap();
    assert_eq!(region.len(), 1);
    assert_eq!(region.get(1, 2), Some(&chunk));
    assert!(region.get(2, 1).is_none());
}

#[test]
fn test_compressed_chunks() {
    let a = chunk_nbt(0, 0);
    let b = chunk_nbt(31, 31);
    let file = region_file(&[
        RawChunk {
            x: 0,
            z: 0,
            timestamp: 1,
            scheme: 1,
            payload: gzip(&binary::to_vec_be(&a).unwrap()),
        },
        RawChunk {
            x: 31,
            z: 31,
            timestamp: 2,
            scheme: 2,
            payload: zlib(&binary::to_vec_be(&b).unwrap()),
        },
    ]);

    let region = region::read_region(Cursor::new(&file), inflate).unwrap();
    assert_eq!(region.len(), 2);
    assert_eq!(region.get(0, 0).unwrap().data, a);
    assert_eq!(region.get(31, 31).unwrap().data, b);
    assert_eq!(region.get(31, 31).unwrap().timestamp, 2);

    let coords: Vec<_> = region.iter().map(|(x, z, _)| (x, z)).collect();
    assert_eq!(coords, [(0, 0), (31, 31)]);
}

#[test]
fn test_large_chunk_spans_sectors() {
    let mut root = CompoundValue::new();
    root.insert("Heightmap", lite_nbt::TagValue::LongArray(vec![7; 2000]));
    let nbt = Nbt::new("", root);
    let payload = binary::to_vec_be(&nbt).unwrap();
    assert!(payload.len() > 4096);
    let file = region_file(&[RawChunk {
        x: 4,
        z: 0,
        timestamp: 0,
        scheme: 3,
        payload,
    }]);

    let mut reader = RegionReader::new(Cursor::new(&file));
    let location = reader.read_location(4, 0).unwrap();
    assert_eq!(location, SectorLocation { offset: 2, count: 4 });
    assert_eq!(reader.read_chunk(4, 0).unwrap().unwrap().data, nbt);
}

#[test]
fn test_reader_reads_in_any_order() {
    let file = region_file(&[
        RawChunk {
            x: 5,
            z: 5,
            timestamp: 55,
            scheme: 3,
            payload: binary::to_vec_be(&chunk_nbt(5, 5)).unwrap(),
        },
        RawChunk {
            x: 1,
            z: 0,
            timestamp: 10,
            scheme: 3,
            payload: binary::to_vec_be(&chunk_nbt(1, 0)).unwrap(),
        },
    ]);
    let mut reader = RegionReader::new(Cursor::new(file));
    assert_eq!(reader.read_timestamp(1, 0).unwrap(), 10);
    assert_eq!(reader.read_chunk(1, 0).unwrap().unwrap().timestamp, 10);
    assert_eq!(reader.read_chunk(5, 5).unwrap().unwrap().timestamp, 55);
    assert!(reader.read_chunk(0, 0).unwrap().is_none());
    assert_eq!(reader.read_region().unwrap().len(), 2);
}

#[test]
fn test_header_overlap() {
    let mut file = region_file(&[]);
    set_location(&mut file, 3, 0, 0x0000_0101);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 3, 0),
        Err(Error::SectorOverlapsHeader { offset: 1 })
    ));
    set_location(&mut file, 3, 0, 0x0000_0001);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 3, 0),
        Err(Error::SectorOverlapsHeader { offset: 0 })
    ));
    // the whole-region read leaves such slots empty
    let region = region::read_region(Cursor::new(&file), Uncompressed).unwrap();
    assert!(region.is_empty());
}

#[test]
fn test_zero_sector_count() {
    let mut file = region_file(&[]);
    set_location(&mut file, 0, 1, 0x0000_0200);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 0, 1),
        Err(Error::EmptySector)
    ));
    let region = region::read_region(Cursor::new(&file), Uncompressed).unwrap();
    assert!(region.is_empty());
}

#[test]
fn test_unknown_compression_scheme() {
    let file = region_file(&[RawChunk {
        x: 0,
        z: 0,
        timestamp: 0,
        scheme: 9,
        payload: vec![0; 8],
    }]);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), inflate, 0, 0),
        Err(Error::UnknownCompression(9))
    ));
    assert!(matches!(
        region::read_region(Cursor::new(&file), inflate),
        Err(Error::UnknownCompression(9))
    ));
}

#[test]
fn test_compressed_chunk_needs_decompressor() {
    let file = region_file(&[RawChunk {
        x: 0,
        z: 0,
        timestamp: 0,
        scheme: 1,
        payload: gzip(&binary::to_vec_be(&chunk_nbt(0, 0)).unwrap()),
    }]);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 0, 0),
        Err(Error::UnsupportedCompression(CompressionScheme::Gzip))
    ));
}

#[test]
fn test_first_bad_chunk_aborts_region_read() {
    let file = region_file(&[
        RawChunk {
            x: 0,
            z: 0,
            timestamp: 0,
            scheme: 3,
            payload: binary::to_vec_be(&chunk_nbt(0, 0)).unwrap(),
        },
        RawChunk {
            x: 1,
            z: 0,
            timestamp: 0,
            scheme: 3,
            payload: vec![0x0a, 0x00],
        },
    ]);
    assert!(matches!(
        region::read_region(Cursor::new(&file), Uncompressed),
        Err(Error::EndOfFile)
    ));
    assert!(region::read_chunk(Cursor::new(&file), Uncompressed, 0, 0).is_ok());
}

#[test]
fn test_coordinates_out_of_grid() {
    let file = region_file(&[]);
    assert!(matches!(
        region::read_chunk(Cursor::new(&file), Uncompressed, 32, 0),
        Err(Error::ChunkOutOfBounds { x: 32, z: 0 })
    ));
}

#[test]
fn test_truncated_header() {
    let file = vec![0u8; 5000];
    assert!(matches!(
        region::read_region(Cursor::new(&file), Uncompressed),
        Err(Error::EndOfFile)
    ));
}
