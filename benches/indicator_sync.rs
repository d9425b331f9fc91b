// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for pager–indicator synchronization.
//!
//! Measures the performance of:
//! - Attaching a mediator to an already-positioned pager
//! - Long page-change event streams (with repeats to exercise deduping)
//! - Page-count resizes

use criterion::{criterion_group, criterion_main, Criterion};
use iced_carousel::ui::carousel::{IndicatorMediator, IndicatorState, PagedContent};
use std::hint::black_box;

struct BenchPager {
    count: usize,
    current: usize,
}

impl PagedContent for BenchPager {
    fn page_count(&self) -> usize {
        self.count
    }

    fn current_page(&self) -> usize {
        self.current
    }
}

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_sync");

    let pager = BenchPager {
        count: 32,
        current: 17,
    };

    group.bench_function("attach", |b| {
        b.iter(|| {
            let mut indicator = IndicatorState::new();
            let mediator = IndicatorMediator::attach(&pager, &mut indicator);
            black_box((mediator, indicator));
        });
    });

    group.finish();
}

fn bench_event_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_sync");

    let pager = BenchPager {
        count: 16,
        current: 0,
    };
    // Sweep back and forth; every other event repeats the previous index so
    // the dedup path is measured alongside real moves.
    let events: Vec<usize> = (0..1000).map(|i| (i / 2) % 16).collect();

    group.bench_function("page_changed_stream", |b| {
        b.iter(|| {
            let mut indicator = IndicatorState::new();
            let mut mediator = IndicatorMediator::attach(&pager, &mut indicator);
            for &index in &events {
                let _ = mediator.page_changed(black_box(index), &mut indicator);
            }
            black_box(indicator.render_generation())
        });
    });

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_sync");

    group.bench_function("pages_changed", |b| {
        b.iter(|| {
            let mut pager = BenchPager {
                count: 4,
                current: 3,
            };
            let mut indicator = IndicatorState::new();
            let mut mediator = IndicatorMediator::attach(&pager, &mut indicator);
            for count in [8, 2, 32, 0, 5] {
                pager.count = count;
                pager.current = pager.current.min(count.saturating_sub(1));
                mediator.pages_changed(&pager, &mut indicator);
            }
            black_box(indicator)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_attach, bench_event_stream, bench_resize);
criterion_main!(benches);
