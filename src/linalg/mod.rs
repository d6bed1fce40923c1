//! Overflow-safe scaling of vectors and shaped matrices.

pub mod blas;
pub mod lapack;
pub mod machine;

pub use machine::{MachineConstants, SafeFloat};
