//! Sub-sample localization of minima and maxima.
//!
//! Within a window, both boundary samples seed the search and every interior
//! local extremum is refined between its neighbours; the best refined value
//! wins. A sample is a local minimum when it is strictly below its left
//! neighbour and not above its right neighbour (mirrored for maxima). The
//! asymmetric test reports a flat-bottomed plateau once, at its left end,
//! and is part of the defined behaviour.

use ndarray::ArrayView1;

use super::Sampled;
use crate::numerics::{
    interpolate_sinc, minimize_brent, Minimum, ValueInterpolation, DEPTH_CUBIC, DEPTH_SINC70,
    DEPTH_SINC700,
};

/// Absolute tolerance on the sample index for refinement searches.
const REFINE_TOLERANCE: f64 = 1e-10;

/// Which extremum to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Minimum,
    Maximum,
}

impl Direction {
    /// Whether `candidate` strictly beats `current`.
    fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Direction::Minimum => candidate < current,
            Direction::Maximum => candidate > current,
        }
    }

    fn is_local_extremum(self, left: f64, y: f64, right: f64) -> bool {
        match self {
            Direction::Minimum => y < left && y <= right,
            Direction::Maximum => y > left && y >= right,
        }
    }
}

/// How a local extremum is refined between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PeakInterpolation {
    /// Raw sample value and position.
    None,
    /// Vertex of the parabola through the sample and its two neighbours.
    #[default]
    Parabolic,
    /// Brent search on the cubic reconstruction.
    Cubic,
    /// Brent search on the depth-70 sinc reconstruction.
    Sinc70,
    /// Brent search on the depth-700 sinc reconstruction.
    Sinc700,
}

impl PeakInterpolation {
    /// Interpolation used when the window holds no sample at all: linear for
    /// every refining method, nearest otherwise.
    fn edge_interpolation(self) -> ValueInterpolation {
        match self {
            PeakInterpolation::None => ValueInterpolation::Nearest,
            _ => ValueInterpolation::Linear,
        }
    }
}

/// A located extremum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Extremal value, possibly between samples.
    pub value: f64,
    /// Its position, clipped into the search window.
    pub x: f64,
    /// The channel it was found in.
    pub channel: usize,
}

/// Refines the local extremum at 1-based sample `i` of `y`.
///
/// Returns the refined value and its real-valued sample number.
fn improve_extremum(
    y: ArrayView1<'_, f64>,
    i: usize,
    interpolation: PeakInterpolation,
    direction: Direction,
) -> (f64, f64) {
    let nx = y.len();
    if i <= 1 {
        return (y[0], 1.0);
    }
    if i >= nx {
        return (y[nx - 1], nx as f64);
    }
    let (left, mid, right) = (y[i - 2], y[i - 1], y[i]);

    let depth = match interpolation {
        PeakInterpolation::None => return (mid, i as f64),
        PeakInterpolation::Parabolic => {
            let dy = 0.5 * (right - left);
            let d2y = 2.0 * mid - left - right;
            return (mid + 0.5 * dy * dy / d2y, i as f64 + dy / d2y);
        }
        PeakInterpolation::Cubic => DEPTH_CUBIC,
        PeakInterpolation::Sinc70 => DEPTH_SINC70,
        PeakInterpolation::Sinc700 => DEPTH_SINC700,
    };

    let sign = match direction {
        Direction::Minimum => 1.0,
        Direction::Maximum => -1.0,
    };
    let Minimum { x, fx } = minimize_brent(
        |x| sign * interpolate_sinc(y, x, depth).unwrap_or(f64::NAN),
        i as f64 - 1.0,
        i as f64 + 1.0,
        REFINE_TOLERANCE,
    );
    (sign * fx, x)
}

impl Sampled {
    /// Locates the extremum of one channel inside `[xmin, xmax]`.
    ///
    /// An empty or reversed window means the whole domain. When the window
    /// contains no sample, the (at most linearly) interpolated values at both
    /// ends are compared instead, and a tie is reported at the midpoint.
    /// Returns `None` only if neither end has a defined value.
    ///
    /// # Panics
    ///
    /// Panics if `channel >= ny`.
    pub fn extremum_in_channel(
        &self,
        channel: usize,
        xmin: f64,
        xmax: f64,
        direction: Direction,
        interpolation: PeakInterpolation,
    ) -> Option<Extremum> {
        self.check_channel(channel);
        let (xmin, xmax) = self.autowindow(xmin, xmax);

        let Some((mut imin, mut imax)) = self.window_samples(xmin, xmax) else {
            return self.extremum_between_samples(channel, xmin, xmax, direction, interpolation);
        };

        let y = self.z.row(channel);
        let at = |i: usize| y[i - 1];

        let mut best = at(imin);
        let mut index = imin as f64;
        if direction.improves(at(imax), best) {
            best = at(imax);
            index = imax as f64;
        }

        if imin == 1 {
            imin += 1;
        }
        if imax == self.nx() {
            imax -= 1;
        }
        for i in imin..=imax {
            if direction.is_local_extremum(at(i - 1), at(i), at(i + 1)) {
                let (local, local_index) = improve_extremum(y, i, interpolation, direction);
                if direction.improves(local, best) {
                    best = local;
                    index = local_index;
                }
            }
        }

        let mut x = self.index_to_x(index);
        if x < xmin {
            x = xmin;
        } else if x > xmax {
            x = xmax;
        }
        Some(Extremum {
            value: best,
            x,
            channel,
        })
    }

    fn extremum_between_samples(
        &self,
        channel: usize,
        xmin: f64,
        xmax: f64,
        direction: Direction,
        interpolation: PeakInterpolation,
    ) -> Option<Extremum> {
        let method = interpolation.edge_interpolation();
        let left = self.value_at_x(super::Channel::Index(channel), xmin, method);
        let right = self.value_at_x(super::Channel::Index(channel), xmax, method);
        let (value, x) = match (left, right) {
            (Some(l), Some(r)) if l == r => (l, 0.5 * (xmin + xmax)),
            (Some(l), Some(r)) => {
                if direction.improves(l, r) {
                    (l, xmin)
                } else {
                    (r, xmax)
                }
            }
            (Some(l), None) => (l, xmin),
            (None, Some(r)) => (r, xmax),
            (None, None) => return None,
        };
        Some(Extremum { value, x, channel })
    }

    /// Locates the extremum over all channels.
    ///
    /// Channels are compared with strict inequality, so on a tie the lowest
    /// channel index wins.
    pub fn extremum(
        &self,
        xmin: f64,
        xmax: f64,
        direction: Direction,
        interpolation: PeakInterpolation,
    ) -> Option<Extremum> {
        let mut best = self.extremum_in_channel(0, xmin, xmax, direction, interpolation);
        for channel in 1..self.ny() {
            let candidate = self.extremum_in_channel(channel, xmin, xmax, direction, interpolation);
            best = match (best, candidate) {
                (Some(b), Some(c)) if direction.improves(c.value, b.value) => Some(c),
                (None, c) => c,
                (b, _) => b,
            };
        }
        best
    }

    pub fn minimum(&self, xmin: f64, xmax: f64, interpolation: PeakInterpolation) -> Option<f64> {
        self.extremum(xmin, xmax, Direction::Minimum, interpolation)
            .map(|e| e.value)
    }

    pub fn x_of_minimum(&self, xmin: f64, xmax: f64, interpolation: PeakInterpolation) -> Option<f64> {
        self.extremum(xmin, xmax, Direction::Minimum, interpolation)
            .map(|e| e.x)
    }

    pub fn channel_of_minimum(
        &self,
        xmin: f64,
        xmax: f64,
        interpolation: PeakInterpolation,
    ) -> Option<usize> {
        self.extremum(xmin, xmax, Direction::Minimum, interpolation)
            .map(|e| e.channel)
    }

    pub fn maximum(&self, xmin: f64, xmax: f64, interpolation: PeakInterpolation) -> Option<f64> {
        self.extremum(xmin, xmax, Direction::Maximum, interpolation)
            .map(|e| e.value)
    }

    pub fn x_of_maximum(&self, xmin: f64, xmax: f64, interpolation: PeakInterpolation) -> Option<f64> {
        self.extremum(xmin, xmax, Direction::Maximum, interpolation)
            .map(|e| e.x)
    }

    pub fn channel_of_maximum(
        &self,
        xmin: f64,
        xmax: f64,
        interpolation: PeakInterpolation,
    ) -> Option<usize> {
        self.extremum(xmin, xmax, Direction::Maximum, interpolation)
            .map(|e| e.channel)
    }

    /// Largest magnitude in the window: `max(|minimum|, |maximum|)`.
    pub fn absolute_extremum(
        &self,
        xmin: f64,
        xmax: f64,
        interpolation: PeakInterpolation,
    ) -> Option<f64> {
        let minimum = self.minimum(xmin, xmax, interpolation)?;
        let maximum = self.maximum(xmin, xmax, interpolation)?;
        Some(minimum.abs().max(maximum.abs()))
    }
}
