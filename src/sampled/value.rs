use super::{Channel, ChannelLayout, Sampled};
use crate::numerics::{interpolate_sinc, ExtendedSum, ValueInterpolation};

impl Sampled {
    /// The sample at column `col` (1-based) of a channel, or of the
    /// cross-channel average.
    ///
    /// Columns outside `[1, nx]` give `0.0`, not an undefined value. A
    /// single-channel signal returns its only channel for either selector.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is `Index(k)` with `k >= ny`.
    pub fn channel_or_average(&self, channel: Channel, col: isize) -> f64 {
        if let Channel::Index(k) = channel {
            self.check_channel(k);
        }
        if col < 1 || col > self.nx() as isize {
            return 0.0;
        }
        let c = (col - 1) as usize;
        match (self.layout, channel) {
            (ChannelLayout::Mono, _) => self.z[[0, c]],
            (_, Channel::Index(k)) => self.z[[k, c]],
            (ChannelLayout::Stereo, Channel::Average) => 0.5 * (self.z[[0, c]] + self.z[[1, c]]),
            (ChannelLayout::Multi(ny), Channel::Average) => {
                let sum: ExtendedSum = self.z.column(c).iter().sum();
                sum.value() / ny as f64
            }
        }
    }

    /// Linearly interpolated value at `x`.
    ///
    /// For [`Channel::Average`] the channels are averaged first and the
    /// average is interpolated. Returns `None` if `x` lies outside the domain
    /// (more than half a sample beyond the first or last sample); within the
    /// outer half samples the missing neighbour counts as `0.0`. An empty
    /// signal has no value anywhere.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is `Index(k)` with `k >= ny`.
    pub fn interpolated_value_at(&self, channel: Channel, x: f64) -> Option<f64> {
        if let Channel::Index(k) = channel {
            self.check_channel(k);
        }
        if self.is_empty() || x.is_nan() || x < self.xmin() || x > self.xmax() {
            return None;
        }
        let rcol = self.x_to_index(x);
        let icol = rcol.floor();
        let dcol = rcol - icol;
        let icol = icol as isize;
        let z1 = self.channel_or_average(channel, icol);
        let z2 = self.channel_or_average(channel, icol + 1);
        Some((1.0 - dcol) * z1 + dcol * z2)
    }

    /// Value at `x` reconstructed with the given interpolation.
    ///
    /// For [`Channel::Average`] every channel is interpolated on its own and
    /// the results are averaged, the reverse order of
    /// [`interpolated_value_at`](Self::interpolated_value_at). Returns `None`
    /// outside the domain and for an empty signal.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is `Index(k)` with `k >= ny`.
    pub fn value_at_x(&self, channel: Channel, x: f64, interpolation: ValueInterpolation) -> Option<f64> {
        if let Channel::Index(k) = channel {
            self.check_channel(k);
        }
        if x.is_nan() || x < self.xmin() || x > self.xmax() {
            return None;
        }
        let index = self.x_to_index(x);
        let depth = interpolation.depth();
        match channel {
            Channel::Index(k) => interpolate_sinc(self.z.row(k), index, depth),
            Channel::Average => {
                let mut sum = ExtendedSum::new();
                for row in self.z.rows() {
                    sum.push(interpolate_sinc(row, index, depth)?);
                }
                Some(sum.value() / self.ny() as f64)
            }
        }
    }
}
