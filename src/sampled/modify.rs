use super::Sampled;
use crate::error::{invalid_signal, Result};
use crate::linalg::lapack::{lascl, MatrixShape};
use crate::numerics::ExtendedSum;

impl Sampled {
    /// Adds `scalar` to every sample of every channel.
    pub fn add_scalar(&mut self, scalar: f64) {
        self.z.mapv_inplace(|v| v + scalar);
    }

    /// Centres every channel on zero by subtracting its own mean.
    pub fn subtract_mean(&mut self) {
        if self.is_empty() {
            return;
        }
        let nx = self.nx() as f64;
        for mut row in self.z.rows_mut() {
            let sum: ExtendedSum = row.iter().sum();
            let mean = sum.value() / nx;
            row.mapv_inplace(|v| v - mean);
        }
    }

    /// Multiplies every sample of every channel by `scalar`.
    pub fn multiply_by_scalar(&mut self, scalar: f64) {
        self.z.mapv_inplace(|v| v * scalar);
    }

    /// Rescales the signal so that its largest absolute sample becomes `peak`.
    ///
    /// The ratio `peak / extremum` is applied through [`lascl`], so signals
    /// with very large or very small amplitudes are rescaled without
    /// intermediate overflow. An all-zero signal is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the argument error from [`lascl`] if `peak` is NaN.
    pub fn scale_to_peak(&mut self, peak: f64) -> Result<()> {
        let extremum = self.z.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
        if extremum == 0.0 {
            return Ok(());
        }
        let len = self.z.len() as isize;
        let buffer = self
            .z
            .as_slice_memory_order_mut()
            .ok_or_else(|| invalid_signal("sample buffer is not contiguous"))?;
        lascl(MatrixShape::Full, 0, 0, extremum, peak, len, 1, buffer, len)
    }
}
