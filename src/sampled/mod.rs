//! Multi-channel, uniformly sampled real signals.
//!
//! A [`Sampled`] holds `ny` channels of `nx` samples on a shared grid: sample
//! number `i` (1-based) sits at `x1 + (i - 1) * dx`, and the signal's domain
//! extends half a sample beyond the first and last sample. Channels are
//! addressed 0-based through [`Channel`].
//!
//! Undefined results (empty windows, interpolation outside the domain) are
//! reported as `None`. A plain sample lookup outside `[1, nx]` is a different
//! thing: it returns exactly `0.0`.

mod extremum;
mod modify;
mod statistics;
mod value;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{invalid_signal, Result};

pub use extremum::{Direction, Extremum, PeakInterpolation};

/// Selects one channel or the average of all channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Cross-channel average.
    Average,
    /// A single channel, 0-based.
    Index(usize),
}

/// How the cross-channel average is formed.
///
/// Chosen once from the channel count so that the mono and stereo shortcuts
/// are explicit rather than re-derived on every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelLayout {
    Mono,
    Stereo,
    Multi(usize),
}

impl ChannelLayout {
    fn for_channels(ny: usize) -> Self {
        match ny {
            1 => ChannelLayout::Mono,
            2 => ChannelLayout::Stereo,
            n => ChannelLayout::Multi(n),
        }
    }
}

/// A sampled signal with one or more channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    /// Samples, one row per channel.
    z: Array2<f64>,
    x1: f64,
    dx: f64,
    layout: ChannelLayout,
}

impl Sampled {
    /// Builds a signal from a `(ny, nx)` sample array.
    ///
    /// # Errors
    ///
    /// [`SigscaleError::InvalidSignal`](crate::SigscaleError::InvalidSignal) if
    /// there are no channels, `dx` is not a positive finite number, or `x1`
    /// is not finite.
    pub fn new(z: Array2<f64>, x1: f64, dx: f64) -> Result<Self> {
        let ny = z.nrows();
        if ny < 1 {
            return Err(invalid_signal("a signal needs at least one channel"));
        }
        if !(dx > 0.0 && dx.is_finite()) {
            return Err(invalid_signal(format!(
                "sampling period must be positive and finite, got {dx}"
            )));
        }
        if !x1.is_finite() {
            return Err(invalid_signal(format!(
                "first sample time must be finite, got {x1}"
            )));
        }
        let z = if z.is_standard_layout() {
            z
        } else {
            z.as_standard_layout().into_owned()
        };
        Ok(Sampled {
            z,
            x1,
            dx,
            layout: ChannelLayout::for_channels(ny),
        })
    }

    /// Builds a signal from equally long channel vectors.
    pub fn from_channels(channels: &[Vec<f64>], x1: f64, dx: f64) -> Result<Self> {
        let ny = channels.len();
        let nx = channels.first().map_or(0, Vec::len);
        if let Some((k, c)) = channels.iter().enumerate().find(|(_, c)| c.len() != nx) {
            return Err(invalid_signal(format!(
                "channel {k} has {} samples, channel 0 has {nx}",
                c.len()
            )));
        }
        let z = Array2::from_shape_fn((ny, nx), |(k, i)| channels[k][i]);
        Self::new(z, x1, dx)
    }

    /// Builds a single-channel signal.
    pub fn mono(samples: Vec<f64>, x1: f64, dx: f64) -> Result<Self> {
        let nx = samples.len();
        let z = Array2::from_shape_vec((1, nx), samples)
            .map_err(|e| invalid_signal(e.to_string()))?;
        Self::new(z, x1, dx)
    }

    /// Number of samples per channel.
    pub fn nx(&self) -> usize {
        self.z.ncols()
    }

    /// Number of channels.
    pub fn ny(&self) -> usize {
        self.z.nrows()
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Left edge of the domain, half a sample before the first sample.
    pub fn xmin(&self) -> f64 {
        self.x1 - 0.5 * self.dx
    }

    /// Right edge of the domain, half a sample after the last sample.
    pub fn xmax(&self) -> f64 {
        self.xmin() + self.nx() as f64 * self.dx
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.nx()
    }

    pub fn is_empty(&self) -> bool {
        self.nx() == 0
    }

    /// All samples, one row per channel.
    pub fn samples(&self) -> ArrayView2<'_, f64> {
        self.z.view()
    }

    /// The samples of one channel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ny`.
    pub fn channel(&self, index: usize) -> ArrayView1<'_, f64> {
        self.check_channel(index);
        self.z.row(index)
    }

    /// Coordinate of the (real-valued, 1-based) sample number `index`.
    pub fn index_to_x(&self, index: f64) -> f64 {
        self.x1 + (index - 1.0) * self.dx
    }

    /// Real-valued, 1-based sample number at coordinate `x`.
    pub fn x_to_index(&self, x: f64) -> f64 {
        (x - self.x1) / self.dx + 1.0
    }

    /// Coordinates of all samples.
    pub fn xs(&self) -> Array1<f64> {
        (0..self.nx())
            .map(|k| self.x1 + self.dx * k as f64)
            .collect()
    }

    /// The `nx + 1` edges of the sample bins.
    pub fn x_grid(&self) -> Array1<f64> {
        (0..=self.nx())
            .map(|k| self.x1 + self.dx * (k as f64 - 0.5))
            .collect()
    }

    /// `(left, right)` bin edges of every sample, one row per sample.
    pub fn x_bins(&self) -> Array2<f64> {
        let grid = self.x_grid();
        Array2::from_shape_fn((self.nx(), 2), |(i, side)| grid[i + side])
    }

    /// Replaces an empty or reversed window by the whole domain.
    pub fn autowindow(&self, xmin: f64, xmax: f64) -> (f64, f64) {
        if xmin >= xmax {
            (self.xmin(), self.xmax())
        } else {
            (xmin, xmax)
        }
    }

    /// First and last sample number (1-based, inclusive) whose position lies
    /// in `[xmin, xmax]`, or `None` if there is no such sample.
    pub fn window_samples(&self, xmin: f64, xmax: f64) -> Option<(usize, usize)> {
        if xmin.is_nan() || xmax.is_nan() {
            return None;
        }
        let rimin = 1.0 + ((xmin - self.x1) / self.dx).ceil();
        let rimax = 1.0 + ((xmax - self.x1) / self.dx).floor();
        let imin = if rimin < 1.0 { 1 } else { rimin as usize };
        let imax = if rimax > self.nx() as f64 {
            self.nx()
        } else if rimax < 0.0 {
            0
        } else {
            rimax as usize
        };
        (imin <= imax).then_some((imin, imax))
    }

    /// Number of samples whose position lies in `[xmin, xmax]`.
    pub fn window_sample_count(&self, xmin: f64, xmax: f64) -> usize {
        self.window_samples(xmin, xmax)
            .map_or(0, |(imin, imax)| imax - imin + 1)
    }

    fn check_channel(&self, index: usize) {
        assert!(
            index < self.ny(),
            "channel index {} out of range for a signal with {} channels",
            index,
            self.ny()
        );
    }
}
