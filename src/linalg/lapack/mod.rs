//! LAPACK-style auxiliary scaling routines.

mod lascl;
mod rscl;
mod safe_scale;

pub use lascl::{lascl, lascl_with_code, MatrixShape};
pub use rscl::rscl;
pub use safe_scale::{SafeScale, ScaleStep};
