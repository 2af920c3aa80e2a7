//! 工具函数性能基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortlink::utils::generate_random_code;
use shortlink::utils::url_validator::validate_url;

// ============== generate_random_code 基准测试 ==============

fn bench_generate_random_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/generate_random_code");

    for length in [6, 8, 12, 20] {
        group.bench_with_input(BenchmarkId::new("length", length), &length, |b, &length| {
            b.iter(|| {
                let code = generate_random_code(length);
                assert_eq!(code.len(), length);
            });
        });
    }

    group.finish();
}

// ============== validate_url 基准测试 ==============

fn bench_validate_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("utils/validate_url");

    group.bench_function("valid_https", |b| {
        b.iter(|| {
            assert!(validate_url("https://example.com/path?query=1").is_ok());
        });
    });

    group.bench_function("valid_custom_scheme", |b| {
        b.iter(|| {
            assert!(validate_url("mailto:someone@example.com").is_ok());
        });
    });

    group.bench_function("invalid_relative", |b| {
        b.iter(|| {
            assert!(validate_url("not-a-url").is_err());
        });
    });

    group.bench_function("invalid_whitespace", |b| {
        b.iter(|| {
            assert!(validate_url("https://exa mple.com").is_err());
        });
    });

    group.bench_function("invalid_empty", |b| {
        b.iter(|| {
            assert!(validate_url("").is_err());
        });
    });

    let long_url = format!("https://example.com/{}", "a".repeat(1000));
    group.bench_function("valid_long_url", |b| {
        b.iter(|| {
            assert!(validate_url(&long_url).is_ok());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate_random_code, bench_validate_url);
criterion_main!(benches);
