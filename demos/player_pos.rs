//! Prints the single-player position stored in a `level.dat` file.
//!
//! Every step of `Data.Player.Pos` may be missing, so the lookup uses the
//! `get_if` family and stops at the first absent entry.
//!
//! Run with: cargo run --example player_pos -- <path_to_level.dat>

use std::env;
use std::fs::File;

use flate2::read::GzDecoder;
use lite_nbt::{ListValue, Navigate, binary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: player_pos <path_to_level.dat>");
        std::process::exit(2);
    };

    let nbt = binary::read_be(GzDecoder::new(File::open(path)?))?;
    let pos = nbt
        .get_if_at("Data")
        .get_if_at("Player")
        .get_if_as::<ListValue>("Pos");

    match pos.and_then(|pos| pos.iter_as::<f64>()) {
        Some(coords) => {
            let coords: Vec<f64> = coords.copied().collect();
            println!("player position: {coords:?}");
        }
        None => println!("no single-player position in this file"),
    }
    Ok(())
}
