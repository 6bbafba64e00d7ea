use std::hint::black_box;

use convertr::{Category, HistoryStore, Session, Side, StandardCatalog, UnitCatalog, summary};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn bench_catalog_convert(c: &mut Criterion) {
    let catalog = StandardCatalog::new();
    let mut group = c.benchmark_group("catalog_convert");

    for (from, to) in [("m", "km"), ("m", "ft"), ("K", "R"), ("MB", "Kb")] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{from}->{to}")),
            &(from, to),
            |b, (from, to)| b.iter(|| catalog.convert(black_box(12.5), from, to)),
        );
    }

    group.finish();
}

fn bench_form_typing(c: &mut Criterion) {
    let mut session = Session::new(StandardCatalog::new());
    session.select_category(Category::Volume);
    session.set_unit(Side::Left, "l");
    session.set_unit(Side::Right, "gal");

    // One set_value per keystroke while typing "1234.5678"
    let prefixes: Vec<String> = (1..=9).map(|n| "1234.5678"[..n].to_string()).collect();

    c.bench_function("form_typing", |b| {
        b.iter(|| {
            for raw in &prefixes {
                session.set_value(Side::Left, black_box(raw));
            }
        })
    });
}

fn bench_history_summaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_summaries");

    for size in [100, 1_000, 10_000] {
        let mut session = Session::new(StandardCatalog::new());
        session.select_category(Category::Length);
        session.set_unit(Side::Left, "mi");
        session.set_unit(Side::Right, "km");

        let mut history = HistoryStore::new();
        for i in 0..size {
            session.set_value(Side::Left, &i.to_string());
            if let Some(record) = session.converter().snapshot() {
                history.save(record);
            }
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| history.iter().map(|e| summary(&e.record).len()).sum::<usize>())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_convert, bench_form_typing, bench_history_summaries);
criterion_main!(benches);
