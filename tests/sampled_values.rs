//! Lookup and interpolation on multi-channel signals.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigscale::{Channel, Sampled, ValueInterpolation};

fn random_signal(ny: usize, nx: usize, seed: u64) -> Sampled {
    let mut rng = StdRng::seed_from_u64(seed);
    let z = Array2::from_shape_fn((ny, nx), |_| rng.random_range(-1.0..1.0));
    Sampled::new(z, 0.5, 0.25).unwrap()
}

#[test]
fn test_out_of_range_sample_is_zero() {
    let s = Sampled::from_channels(&[vec![1.0, 2.0], vec![3.0, 4.0]], 0.0, 1.0).unwrap();
    assert_eq!(s.channel_or_average(Channel::Index(1), 0), 0.0);
    assert_eq!(s.channel_or_average(Channel::Average, 3), 0.0);
    assert_eq!(s.channel_or_average(Channel::Average, -7), 0.0);
    assert_eq!(s.channel_or_average(Channel::Average, 2), 3.0);
}

#[test]
fn test_average_of_many_channels() {
    let s = Sampled::from_channels(&[vec![1.0], vec![2.0], vec![6.0]], 0.0, 1.0).unwrap();
    assert_eq!(s.channel_or_average(Channel::Average, 1), 3.0);
}

#[test]
fn test_linear_lookup_example() {
    // x1 = 0, dx = 1: x = 0.25 lies a quarter of the way from sample 1 to 2.
    let s = Sampled::mono(vec![0.0, 4.0, 8.0], 0.0, 1.0).unwrap();
    assert_eq!(s.interpolated_value_at(Channel::Average, 0.25), Some(1.0));
    assert_eq!(s.interpolated_value_at(Channel::Index(0), 1.5), Some(6.0));
}

#[test]
fn test_lookup_outside_domain_is_undefined() {
    let s = Sampled::mono(vec![0.0, 4.0, 8.0], 0.0, 1.0).unwrap();
    assert_eq!(s.interpolated_value_at(Channel::Average, -0.6), None);
    assert_eq!(s.interpolated_value_at(Channel::Average, 2.6), None);
    assert_eq!(s.value_at_x(Channel::Index(0), 2.6, ValueInterpolation::Sinc70), None);
    assert_eq!(s.value_at_x(Channel::Average, f64::NAN, ValueInterpolation::Linear), None);
}

#[test]
fn test_half_sample_margins() {
    let s = Sampled::mono(vec![2.0, 4.0], 0.0, 1.0).unwrap();
    // Linear lookup fades towards the zero beyond the edge...
    assert_eq!(s.interpolated_value_at(Channel::Index(0), -0.5), Some(1.0));
    // ...while the reconstruction holds the edge sample.
    assert_eq!(s.value_at_x(Channel::Index(0), -0.5, ValueInterpolation::Cubic), Some(2.0));
    assert_eq!(s.value_at_x(Channel::Index(0), 1.5, ValueInterpolation::Sinc700), Some(4.0));
}

#[test]
fn test_linear_orders_agree_inside_samples() {
    // Averaging and linear interpolation commute, so both lookups agree
    // between the first and last sample.
    let s = random_signal(3, 40, 11);
    let mut rng = StdRng::seed_from_u64(12);
    let last = s.index_to_x(s.nx() as f64);
    for _ in 0..200 {
        let x = rng.random_range(s.x1()..last);
        let a = s.interpolated_value_at(Channel::Average, x).unwrap();
        let b = s.value_at_x(Channel::Average, x, ValueInterpolation::Linear).unwrap();
        assert!((a - b).abs() < 1e-12, "x = {x}: {a} vs {b}");
    }
}

#[test]
fn test_reconstruction_hits_samples_exactly() {
    let s = random_signal(2, 25, 3);
    for method in [
        ValueInterpolation::Nearest,
        ValueInterpolation::Linear,
        ValueInterpolation::Cubic,
        ValueInterpolation::Sinc70,
        ValueInterpolation::Sinc700,
    ] {
        for i in 1..=s.nx() {
            let x = s.index_to_x(i as f64);
            let got = s.value_at_x(Channel::Index(1), x, method).unwrap();
            assert_eq!(got, s.channel(1)[i - 1], "{method:?} at sample {i}");
        }
    }
}

#[test]
fn test_nearest_picks_closer_sample() {
    let s = Sampled::mono(vec![1.0, 2.0, 3.0], 1.0, 1.0).unwrap();
    assert_eq!(s.value_at_x(Channel::Index(0), 1.4, ValueInterpolation::Nearest), Some(1.0));
    assert_eq!(s.value_at_x(Channel::Index(0), 2.6, ValueInterpolation::Nearest), Some(3.0));
}

#[test]
fn test_empty_signal_has_no_values() {
    let s = Sampled::mono(vec![], 0.0, 1.0).unwrap();
    assert_eq!(s.interpolated_value_at(Channel::Average, 0.0), None);
    assert_eq!(s.value_at_x(Channel::Average, 0.0, ValueInterpolation::Linear), None);

    // The domain collapses to the single point x1 - dx/2.
    let x = s.xmin();
    assert_eq!(x, s.xmax());
    assert_eq!(s.interpolated_value_at(Channel::Average, x), None);
    assert_eq!(s.interpolated_value_at(Channel::Index(0), x), None);
    assert_eq!(s.value_at_x(Channel::Average, x, ValueInterpolation::Linear), None);
}

#[test]
#[should_panic(expected = "channel index 3 out of range")]
fn test_interpolated_value_checks_channel() {
    let s = Sampled::mono(vec![1.0, 2.0], 0.0, 1.0).unwrap();
    s.interpolated_value_at(Channel::Index(3), 100.0);
}
