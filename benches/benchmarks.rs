//! Performance benchmarks for ferro-annotate
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- notation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferro_annotate::query_type::{
    ALTERATION_HEADER, GENOMIC_CHANGE_HEADERS, HGVSG_HEADER, HGVSP_HEADER,
};
use ferro_annotate::{
    convert, genes_from_fusion, get_cna, highest_tx_level, replace_all, resolve_query_type,
    EvidenceLevelMap,
};

// =============================================================================
// Notation benchmarks
// =============================================================================

/// Benchmark amino acid conversion for different input shapes
fn bench_notation(c: &mut Criterion) {
    let inputs = vec![
        ("short", "Val600Glu"),
        ("prefixed", "p.Gly12Asp"),
        ("no_match", "TERT Promoter"),
        ("one_letter", "V600E"),
        ("multi", "p.Arg273His/p.Arg248Gln/p.Gly245Ser"),
    ];

    let mut group = c.benchmark_group("notation");

    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("replace_all", name), input, |b, v| {
            b.iter(|| replace_all(black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("convert", name), input, |b, v| {
            b.iter(|| convert(black_box(v)))
        });
    }

    group.finish();
}

/// Benchmark conversion throughput (values per second)
fn bench_notation_throughput(c: &mut Criterion) {
    let inputs: Vec<&str> = vec![
        "Val600Glu",
        "Gly12Asp",
        "Arg273His",
        "Leu858Arg",
        "Thr790Met",
        "Glu545Lys",
        "His1047Arg",
        "Amplification",
    ];

    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(1000));
    group.bench_function("replace_all_1000", |b| {
        b.iter(|| {
            for _ in 0..1000 / inputs.len() + 1 {
                for input in &inputs {
                    let _ = replace_all(black_box(input));
                }
            }
        })
    });

    group.finish();
}

// =============================================================================
// Parsing and resolution benchmarks
// =============================================================================

fn bench_fusion(c: &mut Criterion) {
    let names = vec![
        ("pair", "EML4-ALK"),
        ("qualified", "BCR-ABL1 fusion - archer"),
        ("intragenic", "MLL2-intragenic"),
        ("single", "ROS1"),
    ];

    let mut group = c.benchmark_group("fusion");
    for (name, input) in &names {
        group.bench_with_input(BenchmarkId::new("genes", name), input, |b, v| {
            b.iter(|| genes_from_fusion(black_box(v)))
        });
    }
    group.finish();
}

fn bench_cna(c: &mut Criterion) {
    let values = vec!["Amplification", "2", "-1.5", "-1", "0", "garbage"];

    let mut group = c.benchmark_group("cna");
    for value in &values {
        group.bench_with_input(BenchmarkId::new("get_cna", value), value, |b, v| {
            b.iter(|| get_cna(black_box(Some(*v)), true))
        });
    }
    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let mut wide_header: Vec<String> = (0..40).map(|i| format!("COLUMN_{}", i)).collect();
    wide_header.push(HGVSG_HEADER.to_string());
    wide_header.push(HGVSP_HEADER.to_string());

    let mut group = c.benchmark_group("resolution");

    group.bench_function("query_type_alteration", |b| {
        b.iter(|| resolve_query_type(None, black_box(&[ALTERATION_HEADER])))
    });
    group.bench_function("query_type_genomic_change", |b| {
        b.iter(|| resolve_query_type(None, black_box(&GENOMIC_CHANGE_HEADERS)))
    });
    group.bench_function("query_type_wide_header", |b| {
        b.iter(|| resolve_query_type(None, black_box(&wide_header)))
    });

    let evidence: EvidenceLevelMap<&str> = [
        "LEVEL_1", "LEVEL_2", "LEVEL_3A", "LEVEL_4", "LEVEL_R1", "LEVEL_R2", "LEVEL_Dx1",
    ]
    .iter()
    .map(|k| (k.to_string(), vec!["drug"]))
    .collect();

    group.bench_function("highest_tx_level", |b| {
        b.iter(|| highest_tx_level(black_box(&evidence), Some("sensitive")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_notation,
    bench_notation_throughput,
    bench_fusion,
    bench_cna,
    bench_resolution,
);

criterion_main!(benches);
