use tracing::debug;

use super::{Channel, Sampled};
use crate::numerics::ExtendedSum;

impl Sampled {
    /// Mean of the samples whose positions lie in `[xmin, xmax]`.
    ///
    /// An empty or reversed window means the whole domain. For
    /// [`Channel::Average`] this is the mean of the averaged signal. Returns
    /// `None` if the window contains no sample.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is `Index(k)` with `k >= ny`.
    pub fn mean(&self, xmin: f64, xmax: f64, channel: Channel) -> Option<f64> {
        if let Channel::Index(k) = channel {
            self.check_channel(k);
        }
        let (xmin, xmax) = self.autowindow(xmin, xmax);
        let Some((imin, imax)) = self.window_samples(xmin, xmax) else {
            debug!(xmin, xmax, "mean of a window without samples is undefined");
            return None;
        };
        let sum: ExtendedSum = (imin..=imax)
            .map(|i| self.channel_or_average(channel, i as isize))
            .sum();
        Some(sum.value() / (imax - imin + 1) as f64)
    }

    /// Sample standard deviation of the samples whose positions lie in
    /// `[xmin, xmax]`.
    ///
    /// A single channel uses the usual `n - 1` denominator. For
    /// [`Channel::Average`] every channel is centred on its own mean, and the
    /// pooled sum of squares is divided by `n * ny - ny`, one degree of
    /// freedom per channel; a signal whose channels are identical therefore
    /// has the same standard deviation as one of its channels. Returns `None`
    /// when fewer than two samples are in the window.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is `Index(k)` with `k >= ny`.
    pub fn standard_deviation(&self, xmin: f64, xmax: f64, channel: Channel) -> Option<f64> {
        if let Channel::Index(k) = channel {
            self.check_channel(k);
        }
        let (xmin, xmax) = self.autowindow(xmin, xmax);
        let n = self.window_sample_count(xmin, xmax);
        let Some((imin, imax)) = self.window_samples(xmin, xmax).filter(|_| n >= 2) else {
            debug!(xmin, xmax, n, "standard deviation needs at least two samples");
            return None;
        };

        let channels = match channel {
            Channel::Index(k) => k..k + 1,
            Channel::Average => 0..self.ny(),
        };
        let constraints = channels.len();

        let mut sum2 = ExtendedSum::new();
        for k in channels {
            let mean = self.mean(xmin, xmax, Channel::Index(k))?;
            for i in imin..=imax {
                let diff = self.z[[k, i - 1]] - mean;
                sum2.push(diff * diff);
            }
        }
        Some((sum2.value() / (n * constraints - constraints) as f64).sqrt())
    }
}
