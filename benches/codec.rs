use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lite_nbt::{CompoundValue, ListValue, Nbt, TagValue, binary, snbt};

/// A chunk-like document: a few scalars, packed long arrays and a list of
/// small compounds.
fn sample() -> Nbt {
    let mut sections = ListValue::default();
    for y in -4i8..20 {
        let mut section = CompoundValue::new();
        section.insert("Y", y);
        section.insert("BlockStates", TagValue::LongArray((0..256).collect()));
        section.insert("SkyLight", TagValue::ByteArray(vec![-1; 2048]));
        let palette: ListValue = ["minecraft:stone", "minecraft:dirt", "minecraft:air"]
            .into_iter()
            .map(String::from)
            .collect();
        section.insert("Palette", palette);
        sections.push(section).expect("sections are compounds");
    }

    let mut root = CompoundValue::new();
    root.insert("DataVersion", 3465i32);
    root.insert("xPos", -12i32);
    root.insert("zPos", 7i32);
    root.insert("Status", "minecraft:full");
    root.insert("InhabitedTime", 123_456i64);
    root.insert("sections", sections);
    Nbt::new("", root)
}

fn bench_binary(c: &mut Criterion) {
    let nbt = sample();
    let bytes = binary::to_vec_be(&nbt).unwrap();

    let mut group = c.benchmark_group("binary");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("read_be", |b| {
        b.iter(|| binary::from_slice_be(black_box(&bytes)).unwrap())
    });
    group.bench_function("write_be", |b| {
        b.iter(|| binary::to_vec_be(black_box(&nbt)).unwrap())
    });
    group.bench_function("write_le", |b| {
        b.iter(|| binary::to_vec_le(black_box(&nbt)).unwrap())
    });
    group.finish();
}

fn bench_snbt(c: &mut Criterion) {
    let nbt = sample();
    let text = snbt::SnbtWriter::COMPACT.to_string(&nbt.tag).unwrap();

    let mut group = c.benchmark_group("snbt");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse", |b| b.iter(|| snbt::parse(black_box(&text)).unwrap()));
    group.bench_function("print_compact", |b| {
        b.iter(|| snbt::SnbtWriter::COMPACT.to_string(black_box(&nbt.tag)).unwrap())
    });
    group.bench_function("print_pretty", |b| {
        b.iter(|| snbt::SnbtWriter::PRETTY.to_string(black_box(&nbt.tag)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_binary, bench_snbt);
criterion_main!(benches);
