//! Reciprocal vector scaling over the full magnitude range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigscale::linalg::blas::scal;
use sigscale::linalg::lapack::rscl;

#[test]
fn test_rscl_matches_division() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let n: usize = rng.random_range(1..32);
        let sa: f64 = rng.random_range(0.01..100.0);
        let original: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0e3..1.0e3)).collect();
        let mut x = original.clone();
        rscl(n, sa, &mut x, 1);
        for (a, b) in original.iter().zip(x.iter()) {
            let expected = a / sa;
            assert!((b - expected).abs() <= 1e-14 * expected.abs().max(1.0));
        }
    }
}

#[test]
fn test_rscl_subnormal_divisor() {
    // 1 / 5e-324 is infinite, but 1e-310 / 5e-324 is not.
    let tiny: f64 = 5.0e-324;
    let mut x: Vec<f64> = vec![1.0e-310];
    rscl(1, tiny, &mut x, 1);
    assert!(x[0].is_finite());
    assert!((x[0] - 1.0e-310 / tiny).abs() / x[0] < 1e-12);
}

#[test]
fn test_rscl_strided() {
    let mut x = vec![10.0, -1.0, 20.0, -1.0, 30.0];
    rscl(3, 10.0, &mut x, 2);
    assert_eq!(x, vec![1.0, -1.0, 2.0, -1.0, 3.0]);
}

#[test]
fn test_rscl_f32() {
    let mut x = vec![3.0e-30f32, 6.0e-30];
    rscl(2, 3.0e-30f32, &mut x, 1);
    assert!((x[0] - 1.0).abs() < 1e-5);
    assert!((x[1] - 2.0).abs() < 1e-5);
}

#[test]
fn test_scal_unit_multiplier_is_noop() {
    let mut x = vec![f64::NAN, 1.0];
    scal(2, 1.0, &mut x, 1);
    assert!(x[0].is_nan());
    assert_eq!(x[1], 1.0);
}

#[test]
#[should_panic(expected = "is insufficient")]
fn test_rscl_short_slice_panics() {
    let mut x = vec![1.0, 2.0];
    rscl(3, 2.0, &mut x, 1);
}
