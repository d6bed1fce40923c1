//! Scalar kernels shared by the sampled-signal analysis.

mod interpolate;
mod minimize;
mod sum;

pub use interpolate::{
    interpolate_sinc, ValueInterpolation, DEPTH_CUBIC, DEPTH_LINEAR, DEPTH_NEAREST, DEPTH_SINC70,
    DEPTH_SINC700,
};
pub use minimize::{minimize_brent, Minimum, MAX_ITERATIONS};
pub use sum::ExtendedSum;
