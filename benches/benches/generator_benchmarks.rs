//! Generator Performance Benchmarks
//!
//! Measures header scanning and Fortran emission on the widget fixture and on
//! synthetic headers of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fgen_fortran::{generate_module, EmitOptions};
use fgen_header::parse_header;

const WIDGET_HEADER: &str = include_str!("../../crates/fgen-header/tests/fixtures/widget_api.h");

/// A header with `count` functions, defines and a few enum groups
fn synthetic_header(count: usize) -> String {
    let mut header = String::from("/* synthetic API */\n#ifndef H_SYNTH\n#define H_SYNTH\n\n");
    for i in 0..count {
        header.push_str(&format!("#define SYN_LIMIT_{} {}\n", i, i * 8));
    }
    for group in 0..count / 10 + 1 {
        header.push_str(&format!("enum Group{}\n{{\n", group));
        for member in 0..10 {
            header.push_str(&format!("    G{}_MEMBER_{},\n", group, member));
        }
        header.push_str("};\n\n");
    }
    for i in 0..count {
        header.push_str(&format!(
            "int Syn_Function{}( int handle, const char * name, double *values, char key );\n",
            i
        ));
    }
    header.push_str("#endif\n");
    header
}

fn bench_parse_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_header");

    let inputs = [
        ("widget", WIDGET_HEADER.to_string()),
        ("synthetic_100", synthetic_header(100)),
        ("synthetic_1000", synthetic_header(1000)),
    ];

    for (name, source) in inputs.iter() {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("scan", name), source, |b, source| {
            b.iter(|| black_box(parse_header(black_box(source))))
        });
    }

    group.finish();
}

fn bench_generate_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_module");
    let options = EmitOptions::new("SYNTH", "synth.h");

    for count in [10usize, 100, 1000] {
        let parsed = parse_header(&synthetic_header(count));
        group.throughput(Throughput::Elements(parsed.exported_count() as u64));
        group.bench_with_input(BenchmarkId::new("emit", count), &parsed, |b, parsed| {
            b.iter(|| black_box(generate_module(black_box(parsed), &options)))
        });
    }

    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let options = EmitOptions::new("WIDGET_API", "widget_api.h");
    c.bench_function("widget_end_to_end", |b| {
        b.iter(|| {
            let parsed = parse_header(black_box(WIDGET_HEADER));
            black_box(generate_module(&parsed, &options))
        })
    });
}

criterion_group!(benches, bench_parse_header, bench_generate_module, bench_end_to_end);
criterion_main!(benches);
