use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use media_vault::bench_support::{synthetic_records, StorageBenchFixture};
use media_vault_quota::{
    calculate_quota_status, calculate_storage_usage, QuotaStatusInput,
    DEFAULT_USER_STORAGE_QUOTA_BYTES,
};

fn bench_storage_usage(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_usage");
    group.measurement_time(Duration::from_secs(5));

    for count in [0usize, 100, 10_000, 1_000_000] {
        let records = synthetic_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| calculate_storage_usage(black_box(records)).expect("valid records"));
        });
    }

    group.finish();
}

fn bench_quota_status(c: &mut Criterion) {
    let quota = DEFAULT_USER_STORAGE_QUOTA_BYTES as i64;
    let mut group = c.benchmark_group("quota_status");

    for (label, used) in [("within", quota / 2), ("over", quota + quota / 5)] {
        group.bench_function(label, |b| {
            b.iter(|| {
                calculate_quota_status(black_box(QuotaStatusInput::new(used, quota)))
                    .expect("valid input")
            });
        });
    }

    group.finish();
}

fn bench_storage_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_summary");
    group.sample_size(50);

    for assets in [10usize, 500] {
        let fixture = StorageBenchFixture::new("bench-owner", assets);
        group.bench_function(BenchmarkId::new("sqlite", assets), |b| {
            b.iter(|| {
                let summary = fixture
                    .service
                    .storage_summary(&fixture.owner_id)
                    .expect("summary");
                black_box(summary)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_storage_usage,
    bench_quota_status,
    bench_storage_summary
);
criterion_main!(benches);
