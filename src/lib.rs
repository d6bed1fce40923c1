//! Overflow-safe rescaling and sampled-signal analysis.
//!
//! Two families of numerics live here:
//!
//! * [`linalg`]: multiplying vectors and shaped matrices by a ratio
//!   `to / from` without intermediate overflow or underflow
//!   ([`lascl`](linalg::lapack::lascl), [`rscl`](linalg::lapack::rscl)).
//! * [`sampled`]: multi-channel, uniformly sampled signals with interpolated
//!   lookup, sub-sample extremum search and windowed statistics.
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

pub mod error;
pub mod linalg;
pub mod numerics;
pub mod sampled;

pub use error::{Parameter, Result, SigscaleError};
pub use numerics::ValueInterpolation;
pub use sampled::{Channel, Direction, Extremum, PeakInterpolation, Sampled};
