//! Pretty-prints an NBT file as SNBT.
//!
//! Gzip-compressed files (the usual `level.dat`, `*.dat` player files) are
//! detected by their magic bytes and inflated with flate2.
//!
//! Run with: cargo run --example print_nbt -- <path_to_nbt_file> [--compact]

use std::env;
use std::fs;
use std::io::Read;

use flate2::read::GzDecoder;
use lite_nbt::{binary, snbt::SnbtWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: print_nbt <path_to_nbt_file> [--compact]");
        std::process::exit(2);
    };
    let writer = match args.next().as_deref() {
        Some("--compact") => SnbtWriter::COMPACT,
        _ => SnbtWriter::PRETTY,
    };

    let raw = fs::read(&path)?;
    let data = if raw.starts_with(&[0x1f, 0x8b]) {
        let mut data = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut data)?;
        data
    } else {
        raw
    };

    let nbt = binary::read_be(data.as_slice())?;
    if !nbt.name.is_empty() {
        println!("// {}", nbt.name);
    }
    println!("{}", writer.to_string(&nbt.tag)?);
    Ok(())
}
