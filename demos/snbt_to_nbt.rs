//! Reads SNBT from a file (or stdin) and writes it as big-endian binary NBT.
//!
//! Run with: cargo run --example snbt_to_nbt -- <input.snbt|-> <output.nbt> [root name]

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use lite_nbt::{Nbt, binary, snbt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: snbt_to_nbt <input.snbt|-> <output.nbt> [root name]");
        std::process::exit(2);
    }

    let value = if args[0] == "-" {
        snbt::from_reader(io::stdin().lock())?
    } else {
        snbt::from_reader(File::open(&args[0])?)?
    };
    let name = args.get(2).cloned().unwrap_or_default();
    binary::write_be(BufWriter::new(File::create(&args[1])?), &Nbt::new(name, value))?;
    Ok(())
}
