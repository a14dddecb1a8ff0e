//! Lists the chunks of a region (`.mca`) file.
//!
//! Run with: cargo run --example list_chunks -- <path_to_region_file>

use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use lite_nbt::region::{self, CompressionScheme};

fn decompress(scheme: CompressionScheme, data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    match scheme {
        CompressionScheme::Gzip => GzDecoder::new(data).read_to_end(&mut out)?,
        CompressionScheme::Zlib => ZlibDecoder::new(data).read_to_end(&mut out)?,
        other => {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("{other:?} is not supported"),
            ));
        }
    };
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: list_chunks <path_to_region_file>");
        std::process::exit(2);
    };

    let region = region::read_region(BufReader::new(File::open(path)?), decompress)?;
    println!("{} chunks", region.len());
    for (x, z, chunk) in region.iter() {
        let status = chunk
            .data
            .get_if_as::<String>("Status")
            .map_or("?", String::as_str);
        println!("({x:2}, {z:2}) timestamp {} status {status}", chunk.timestamp);
    }
    Ok(())
}
