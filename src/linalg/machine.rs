//! Machine parameters for safe scaling.
//!
//! `smlnum` is the smallest magnitude whose reciprocal does not overflow
//! (LAPACK's `dlamch('S')`), and `bignum` is its reciprocal. Both are computed
//! once per floating-point type and then shared read-only by every caller.

use std::sync::OnceLock;

use num::Float;

/// The safe-minimum pair for one floating-point type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConstants<T> {
    /// Smallest safely invertible magnitude.
    pub smlnum: T,
    /// `1 / smlnum`.
    pub bignum: T,
}

impl<T: Float> MachineConstants<T> {
    fn compute() -> Self {
        let mut sfmin = T::min_positive_value();
        let small = T::one() / T::max_value();
        if small >= sfmin {
            // Guard against rounding that would make 1/sfmin overflow.
            sfmin = small * (T::one() + T::epsilon());
        }
        MachineConstants {
            smlnum: sfmin,
            bignum: T::one() / sfmin,
        }
    }
}

/// Floating-point types that carry process-wide safe-scaling constants.
pub trait SafeFloat: Float + Send + Sync + 'static {
    /// Returns the constants for this type, computing them on first use.
    fn machine_constants() -> &'static MachineConstants<Self>;
}

impl SafeFloat for f64 {
    fn machine_constants() -> &'static MachineConstants<f64> {
        static CONSTANTS: OnceLock<MachineConstants<f64>> = OnceLock::new();
        CONSTANTS.get_or_init(MachineConstants::compute)
    }
}

impl SafeFloat for f32 {
    fn machine_constants() -> &'static MachineConstants<f32> {
        static CONSTANTS: OnceLock<MachineConstants<f32>> = OnceLock::new();
        CONSTANTS.get_or_init(MachineConstants::compute)
    }
}
