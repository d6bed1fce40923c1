use super::safe_scale::{SafeScale, ScaleStep};
use crate::linalg::blas::scal;
use crate::linalg::machine::SafeFloat;

/// Multiplies a strided vector by `1 / sa` without forming `1 / sa` unsafely.
///
/// This is the LAPACK `drscl` operation: `x[i] = x[i] / sa`, done through
/// [`SafeScale`] with numerator `1` so that no intermediate product overflows
/// or underflows as long as the final quotient is representable. Every
/// partial multiplier is applied to the whole vector through [`scal`].
///
/// `sa` is expected to be `>= 0`. It is not validated: `sa == 0` divides by
/// zero and leaves `+inf`, `-inf` or NaN in each element according to its sign.
///
/// # Panics
///
/// Under the same conditions as [`scal`]: `incx == 0` with `n > 1`, or a
/// slice too short for `n` elements at stride `incx`.
///
/// # Examples
///
/// ```
/// use sigscale::linalg::lapack::rscl;
///
/// let mut x = vec![2.0, 4.0, 6.0];
/// rscl(3, 2.0, &mut x, 1);
/// assert_eq!(x, vec![1.0, 2.0, 3.0]);
/// ```
pub fn rscl<T: SafeFloat>(n: usize, sa: T, x: &mut [T], incx: isize) {
    if n == 0 {
        return;
    }

    let mut scale = SafeScale::new(sa, T::one());
    loop {
        let ScaleStep { mul, done } = scale.step();
        scal(n, mul, x, incx);
        if done {
            break;
        }
    }
}
