//! Stepwise application of a ratio `cto / cfrom` without overflow or underflow.
//!
//! Forming `cto / cfrom` directly can overflow (or flush to zero) even when
//! the scaled operand would be perfectly representable. [`SafeScale`] instead
//! hands out a short sequence of multipliers: while the ratio is out of range
//! it yields `smlnum` or `bignum` and folds that factor into the pending
//! ratio, and once the remainder is safe it yields `cto / cfrom` and stops.
//! Multiplying an operand by every multiplier in order applies the full ratio.

use tracing::trace;

use super::super::machine::{MachineConstants, SafeFloat};

/// One multiplier of a safe-scaling sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep<T> {
    /// Factor to apply to the operand(s) in this pass.
    pub mul: T,
    /// Whether this is the final factor.
    pub done: bool,
}

/// Iterator over the multipliers that together apply `cto / cfrom`.
///
/// No validation is done here: `cfrom` must be non-zero and neither value
/// may be NaN, unless the caller deliberately wants the IEEE result of a
/// division by zero (see [`rscl`](super::rscl)).
///
/// # Examples
///
/// ```
/// use sigscale::linalg::lapack::SafeScale;
///
/// let mut x = 1.0e-300_f64;
/// for mul in SafeScale::new(1.0e-300, 1.0e300) {
///     x *= mul;
/// }
/// assert!((x - 1.0e300).abs() / 1.0e300 < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SafeScale<T: 'static> {
    cfrom: T,
    cto: T,
    constants: &'static MachineConstants<T>,
    finished: bool,
}

impl<T: SafeFloat> SafeScale<T> {
    /// Starts a sequence applying `cto / cfrom`.
    pub fn new(cfrom: T, cto: T) -> Self {
        SafeScale {
            cfrom,
            cto,
            constants: T::machine_constants(),
            finished: false,
        }
    }

    /// Whether the final multiplier has been handed out.
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Upper bound on the number of steps any request can take.
    ///
    /// Every non-final step removes a factor of `smlnum` or `bignum` from the
    /// pending ratio, so the count is bounded by the exponent range.
    pub fn max_steps() -> usize {
        let c = T::machine_constants();
        let range = (T::max_value().log2() - T::min_positive_value().log2()).abs();
        let per_step = c.bignum.log2().abs();
        (range / per_step).ceil().to_usize().unwrap_or(usize::MAX).saturating_add(2)
    }

    /// Computes the next multiplier and updates the pending ratio.
    pub fn step(&mut self) -> ScaleStep<T> {
        let MachineConstants { smlnum, bignum } = *self.constants;

        let cfrom1 = self.cfrom * smlnum;
        let step = if cfrom1 == self.cfrom {
            // cfrom is infinite (or zero): the quotient is already exact.
            ScaleStep {
                mul: self.cto / self.cfrom,
                done: true,
            }
        } else {
            let cto1 = self.cto / bignum;
            if cto1 == self.cto {
                // cto is zero or infinite.
                self.cfrom = T::one();
                ScaleStep {
                    mul: self.cto,
                    done: true,
                }
            } else if cfrom1.abs() > self.cto.abs() && self.cto != T::zero() {
                self.cfrom = cfrom1;
                ScaleStep {
                    mul: smlnum,
                    done: false,
                }
            } else if cto1.abs() > self.cfrom.abs() {
                self.cto = cto1;
                ScaleStep {
                    mul: bignum,
                    done: false,
                }
            } else {
                ScaleStep {
                    mul: self.cto / self.cfrom,
                    done: true,
                }
            }
        };

        trace!(
            mul = step.mul.to_f64().unwrap_or(f64::NAN),
            done = step.done,
            "safe scale step"
        );
        self.finished = step.done;
        step
    }
}

impl<T: SafeFloat> Iterator for SafeScale<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }
        Some(self.step().mul)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(cfrom: f64, cto: f64, x: f64) -> (f64, usize) {
        let mut y = x;
        let mut steps = 0;
        let mut scale = SafeScale::new(cfrom, cto);
        loop {
            let ScaleStep { mul, done } = scale.step();
            y *= mul;
            steps += 1;
            assert!(!y.is_nan(), "NaN after {steps} steps");
            if done {
                break;
            }
        }
        (y, steps)
    }

    #[test]
    fn test_ordinary_ratio_is_single_step() {
        let (y, steps) = apply(2.0, 1.0, 8.0);
        assert_eq!(y, 4.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_huge_to_tiny_underflows_gracefully() {
        let (y, steps) = apply(1.0e300, 1.0e-300, 1.0);
        assert_eq!(y, 0.0);
        assert!(steps > 1);
    }

    #[test]
    fn test_tiny_to_huge_recovers_exact_magnitude() {
        let (y, steps) = apply(1.0e-300, 1.0e300, 1.0e-300);
        assert!(y.is_finite());
        assert!((y - 1.0e300).abs() / 1.0e300 < 1e-12);
        assert!(steps > 1);
    }

    #[test]
    fn test_zero_numerator_terminates_with_zero() {
        let mut scale = SafeScale::new(3.0, 0.0);
        let step = scale.step();
        assert_eq!(step, ScaleStep { mul: 0.0, done: true });
        assert!(scale.is_done());
    }

    #[test]
    fn test_infinite_denominator() {
        let mut scale = SafeScale::new(f64::INFINITY, 5.0);
        let step = scale.step();
        assert_eq!(step.mul, 0.0);
        assert!(step.done);
    }

    #[test]
    fn test_infinite_numerator() {
        let mut scale = SafeScale::new(1.0, f64::INFINITY);
        let step = scale.step();
        assert_eq!(step.mul, f64::INFINITY);
        assert!(step.done);
    }

    #[test]
    fn test_iterator_stops_after_final_step() {
        let muls: Vec<f64> = SafeScale::new(1.0e300, 1.0e-300).collect();
        assert!(muls.len() > 1);
        assert!(muls.len() <= SafeScale::<f64>::max_steps());
        let muls: Vec<f64> = SafeScale::new(4.0, 2.0).collect();
        assert_eq!(muls, vec![0.5]);
    }

    #[test]
    fn test_extreme_requests_stay_within_bound() {
        let extremes = [
            (f64::MAX, f64::MIN_POSITIVE),
            (f64::MIN_POSITIVE, f64::MAX),
            (5e-324, f64::MAX),
            (f64::MAX, 5e-324),
            (-1.0e-200, 1.0e200),
        ];
        for (cfrom, cto) in extremes {
            let n = SafeScale::new(cfrom, cto).count();
            assert!(n <= SafeScale::<f64>::max_steps(), "{cfrom} -> {cto} took {n} steps");
        }
    }

    #[test]
    fn test_f32_sequence() {
        let mut y = 1.0e-30f32;
        for mul in SafeScale::new(1.0e-30f32, 1.0e30f32) {
            y *= mul;
        }
        assert!((y - 1.0e30).abs() / 1.0e30 < 1e-5);
    }
}
