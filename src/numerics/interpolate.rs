//! Reconstruction of a sampled sequence at a real-valued index.
//!
//! Indices are 1-based sample numbers: `x == 1.0` is the first sample. Inside
//! `(1, n)` the value is reconstructed with a Hann-windowed sinc kernel of
//! the requested depth, or with the nearest/linear/cubic shortcuts; the depth
//! is reduced near either end so that the kernel never reads past the data.

use std::f64::consts::PI;

use ndarray::ArrayView1;

/// Kernel depth of nearest-sample lookup.
pub const DEPTH_NEAREST: usize = 0;
/// Kernel depth of linear interpolation.
pub const DEPTH_LINEAR: usize = 1;
/// Kernel depth of four-point cubic interpolation.
pub const DEPTH_CUBIC: usize = 2;
/// Kernel depth of the short windowed sinc.
pub const DEPTH_SINC70: usize = 70;
/// Kernel depth of the long windowed sinc.
pub const DEPTH_SINC700: usize = 700;

/// How a value between two samples is reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueInterpolation {
    Nearest,
    #[default]
    Linear,
    Cubic,
    Sinc70,
    Sinc700,
}

impl ValueInterpolation {
    /// Maximum number of samples read on each side of the target.
    pub fn depth(self) -> usize {
        match self {
            ValueInterpolation::Nearest => DEPTH_NEAREST,
            ValueInterpolation::Linear => DEPTH_LINEAR,
            ValueInterpolation::Cubic => DEPTH_CUBIC,
            ValueInterpolation::Sinc70 => DEPTH_SINC70,
            ValueInterpolation::Sinc700 => DEPTH_SINC700,
        }
    }
}

/// Interpolates `y` at the 1-based real index `x` with a kernel of at most `max_depth`.
///
/// Beyond either end the edge sample is returned. Returns `None` only for an
/// empty sequence or a NaN index.
pub fn interpolate_sinc(y: ArrayView1<'_, f64>, x: f64, max_depth: usize) -> Option<f64> {
    let nx = y.len();
    if nx < 1 || x.is_nan() {
        return None;
    }
    if x > nx as f64 {
        return Some(y[nx - 1]);
    }
    if x < 1.0 {
        return Some(y[0]);
    }

    let at = |i: isize| y[(i - 1) as usize];
    let midleft = x.floor() as isize;
    let midright = midleft + 1;
    if x == midleft as f64 {
        return Some(at(midleft));
    }

    // 1 < x < nx and x is not a sample position.
    let depth = (max_depth.min(isize::MAX as usize) as isize)
        .min(midright - 1)
        .min(nx as isize - midleft);

    if depth <= DEPTH_NEAREST as isize {
        return Some(at((x + 0.5).floor() as isize));
    }
    if depth == DEPTH_LINEAR as isize {
        return Some(at(midleft) + (x - midleft as f64) * (at(midright) - at(midleft)));
    }
    if depth == DEPTH_CUBIC as isize {
        let yl = at(midleft);
        let yr = at(midright);
        let dyl = 0.5 * (yr - at(midleft - 1));
        let dyr = 0.5 * (at(midright + 1) - yl);
        let fil = x - midleft as f64;
        let fir = midright as f64 - x;
        return Some(
            yl * fir + yr * fil
                - fil * fir * (0.5 * (dyr - dyl) + (fil - 0.5) * (dyl + dyr - 2.0 * (yr - yl))),
        );
    }

    let left = midright - depth;
    let right = midleft + depth;
    let mut result = 0.0;

    // Left half: the sinc phase and the Hann window phase are advanced by
    // rotation instead of calling sin/cos per tap.
    let mut a = PI * (x - midleft as f64);
    let mut halfsina = 0.5 * a.sin();
    let aa = a / (x - left as f64 + 1.0);
    let daa = PI / (x - left as f64 + 1.0);
    let (mut sinaa, mut cosaa) = aa.sin_cos();
    let (sindaa, cosdaa) = daa.sin_cos();
    for ix in (left..=midleft).rev() {
        let d = halfsina / a * (1.0 + cosaa);
        result += at(ix) * d;
        a += PI;
        let help = cosaa * cosdaa - sinaa * sindaa;
        sinaa = cosaa * sindaa + sinaa * cosdaa;
        cosaa = help;
        halfsina = -halfsina;
    }

    let mut a = PI * (midright as f64 - x);
    let mut halfsina = 0.5 * a.sin();
    let aa = a / (right as f64 - x + 1.0);
    let daa = PI / (right as f64 - x + 1.0);
    let (mut sinaa, mut cosaa) = aa.sin_cos();
    let (sindaa, cosdaa) = daa.sin_cos();
    for ix in midright..=right {
        let d = halfsina / a * (1.0 + cosaa);
        result += at(ix) * d;
        a += PI;
        let help = cosaa * cosdaa - sinaa * sindaa;
        sinaa = cosaa * sindaa + sinaa * cosdaa;
        cosaa = help;
        halfsina = -halfsina;
    }

    Some(result)
}
