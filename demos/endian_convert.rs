//! Converts a little-endian (Bedrock Edition) NBT file to big-endian (Java
//! Edition).
//!
//! Run with: cargo run --example endian_convert -- <input> <output>

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use lite_nbt::binary;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: endian_convert <input> <output>");
        std::process::exit(2);
    };

    let nbt = binary::read_le(BufReader::new(File::open(&input)?))?;
    binary::write_be(BufWriter::new(File::create(&output)?), &nbt)?;
    println!("converted {input} -> {output} (root {:?}, {})", nbt.name, nbt.tag_id());
    Ok(())
}
