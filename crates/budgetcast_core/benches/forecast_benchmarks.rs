//! Criterion benchmarks for budgetcast_core
//!
//! Run with: cargo bench -p budgetcast_core

use budgetcast_core::config::ForecastConfig;
use budgetcast_core::engine::{project, reset_entries, summarize};
use budgetcast_core::session::BudgetSession;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn edited_entries(config: &ForecastConfig) -> Vec<budgetcast_core::DayEntry> {
    let mut entries = reset_entries(config);
    for (day, entry) in entries.iter_mut().enumerate().skip(1) {
        if day % 3 == 0 {
            entry.minus = 125.0 + day as f64;
        }
        if day % 7 == 0 {
            entry.plus = 400.0;
        }
    }
    entries
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");

    for day_count in [31usize, 365, 3_650] {
        let config = ForecastConfig::new(15_000.0, 2_500.0, day_count);
        let entries = edited_entries(&config);

        group.bench_with_input(
            BenchmarkId::from_parameter(day_count),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let rows = project(black_box(&config), black_box(entries));
                    summarize(&config, &rows)
                })
            },
        );
    }

    group.finish();
}

fn bench_session_edit(c: &mut Criterion) {
    let config = ForecastConfig::default();

    c.bench_function("session_edit_month", |b| {
        let mut session = BudgetSession::new(config).unwrap();
        let mut day = 1;
        b.iter(|| {
            session.set_minus(day, black_box(250.0)).unwrap();
            day = day % config.day_count + 1;
        })
    });
}

criterion_group!(benches, bench_project, bench_session_edit);
criterion_main!(benches);
