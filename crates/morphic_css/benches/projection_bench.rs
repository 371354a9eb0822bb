//! Benchmarks for the derive-and-project path run on every slider edit
//!
//! Run with: cargo bench -p morphic_css

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use morphic_css::{emit_stylesheet, import_stylesheet, EmitOptions, PreviewStyle};
use morphic_style::{compute_derived_style, GlassSettings, Material, ParameterVector};
use std::hint::black_box;

fn designs() -> [(&'static str, ParameterVector); 2] {
    [
        ("matte", ParameterVector::default()),
        (
            "glass",
            ParameterVector {
                material: Material::Glass(GlassSettings::default()),
                ..Default::default()
            },
        ),
    ]
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/preview");
    for (name, params) in designs() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| PreviewStyle::from_derived(&compute_derived_style(black_box(params))))
        });
    }
    group.finish();
}

fn bench_stylesheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection/stylesheet");
    let options = EmitOptions::default();
    for (name, params) in designs() {
        group.bench_with_input(BenchmarkId::new("emit", name), &params, |b, params| {
            b.iter(|| emit_stylesheet(black_box(params), &options))
        });
        let css = emit_stylesheet(&params, &options);
        group.bench_with_input(BenchmarkId::new("import", name), &css, |b, css| {
            b.iter(|| import_stylesheet(black_box(css)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_preview, bench_stylesheet);
criterion_main!(benches);
