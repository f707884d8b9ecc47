//! 列表搜索/排序性能基准测试

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use linkdeck::listing::{SortKey, SortState, filter_and_sort, parse_expiration};
use linkdeck::models::UrlRecord;

fn sample_records(count: usize) -> Vec<UrlRecord> {
    (0..count)
        .map(|i| {
            let expiration = if i % 3 == 0 {
                String::new()
            } else {
                format!("2026-{:02}-{:02}T12:00:00", i % 12 + 1, i % 28 + 1)
            };
            UrlRecord::new(
                format!("s{:05}", i),
                format!("https://Example-{}.com/path/{}", i % 97, i),
                (i * 7 % 1000).to_string(),
                expiration,
            )
        })
        .collect()
}

// ============== 排序 ==============

fn bench_sort_keys(c: &mut Criterion) {
    let records = sample_records(1000);
    let mut group = c.benchmark_group("listing/sort");
    group.throughput(Throughput::Elements(records.len() as u64));

    for key in [
        SortKey::OriginalUrl,
        SortKey::ShortUrl,
        SortKey::ClickCount,
        SortKey::ExpirationTime,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(key.label()), &key, |b, key| {
            b.iter(|| filter_and_sort(black_box(&records), "", SortState::new(*key, true)));
        });
    }
    group.finish();
}

// ============== 搜索 + 排序 ==============

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing/search");

    for size in [100, 1000, 5000] {
        let records = sample_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| filter_and_sort(black_box(records), "example-4", SortState::default()));
        });
    }
    group.finish();
}

fn bench_parse_expiration(c: &mut Criterion) {
    c.bench_function("listing/parse_expiration", |b| {
        b.iter(|| parse_expiration(black_box("2026-10-18T09:30:00.123")));
    });
}

criterion_group!(benches, bench_sort_keys, bench_search, bench_parse_expiration);
criterion_main!(benches);
