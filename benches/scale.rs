//! Safe Scaling Benchmarks
//!
//! Measures the cost of overflow-safe scaling against a plain multiply.
//!
//! # Benchmark Categories
//!
//! ## 1. **Vector scaling**
//! - `scal` by -1 (baseline)
//! - `rscl` by -1 (single multiplier)
//! - `rscl` with a subnormal divisor (multi-step path)
//!
//! ## 2. **Matrix scaling**
//! - `lascl` on full, upper triangular and general band storage

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sigscale::linalg::blas::scal;
use sigscale::linalg::lapack::{lascl, rscl, MatrixShape};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Vector lengths, from L1-resident to main-memory bound.
const VECTOR_SIZES: &[usize] = &[1_024, 16_384, 262_144, 1_048_576];

/// Square matrix orders for the shaped scaler.
const MATRIX_ORDERS: &[usize] = &[64, 256, 1_024];

fn generate_vector(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-1.0e-300..1.0e-300)).collect()
}

// ================================================================================================
// VECTOR BENCHMARKS
// ================================================================================================

fn bench_vector_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_scaling");

    for &size in VECTOR_SIZES {
        let data = generate_vector(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scal", size), &data, |b, data| {
            let mut x = data.clone();
            b.iter(|| scal(size, black_box(-1.0), black_box(&mut x), 1))
        });

        group.bench_with_input(BenchmarkId::new("rscl_unit", size), &data, |b, data| {
            let mut x = data.clone();
            b.iter(|| rscl(size, black_box(-1.0), black_box(&mut x), 1))
        });

        group.bench_with_input(BenchmarkId::new("rscl_subnormal", size), &data, |b, data| {
            let mut x = data.clone();
            b.iter(|| {
                rscl(size, black_box(5.0e-324), black_box(&mut x), 1);
                // Undo the blow-up so every iteration sees the same magnitudes.
                x.copy_from_slice(data);
            })
        });
    }

    group.finish();
}

// ================================================================================================
// MATRIX BENCHMARKS
// ================================================================================================

fn bench_matrix_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_scaling");

    for &order in MATRIX_ORDERS {
        let n = order as isize;
        let dense = generate_vector(order * order);
        group.throughput(Throughput::Elements((order * order) as u64));

        for shape in [MatrixShape::Full, MatrixShape::Upper] {
            group.bench_with_input(
                BenchmarkId::new(format!("lascl_{shape}"), order),
                &dense,
                |b, data| {
                    let mut a = data.clone();
                    b.iter(|| {
                        lascl(shape, 0, 0, black_box(1.0e-300), black_box(1.0e300), n, n, &mut a, n)
                            .unwrap();
                        a.copy_from_slice(data);
                    })
                },
            );
        }

        let (kl, ku) = (4, 4);
        let lda = 2 * kl + ku + 1;
        let band = generate_vector(lda * order);
        group.bench_with_input(BenchmarkId::new("lascl_Z", order), &band, |b, data| {
            let mut a = data.clone();
            b.iter(|| {
                lascl(
                    MatrixShape::GeneralBand,
                    kl as isize,
                    ku as isize,
                    black_box(1.0e-300),
                    black_box(1.0e300),
                    n,
                    n,
                    &mut a,
                    lda as isize,
                )
                .unwrap();
                a.copy_from_slice(data);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vector_scaling, bench_matrix_scaling);
criterion_main!(benches);
