use num::Float;

/// Scales a vector `x` by a scalar `sa`.
///
/// This function performs the operation `x[i] = sa * x[i]` for `n` elements,
/// considering a stride `incx`.
///
/// It mirrors the functionality of the BLAS `dscal`/`sscal` routines.
///
/// # Arguments
///
/// * `n`: The number of elements in vector `x` to scale.
/// * `sa`: The scalar multiplier.
/// * `x`: A mutable slice representing the vector to be scaled.
/// * `incx`: The increment (stride) for accessing elements in `x`.
///   A positive value means forward iteration, negative means backward.
///   Must not be zero if `n > 1`.
///
/// # Panics
///
/// This function will panic if:
/// * `n > 1` and `incx` is zero.
/// * The effective length required to access `n` elements in `x` (considering `incx`)
///   exceeds `x.len()`. This check occurs only if `n > 0`.
///
/// # Examples
///
/// ```
/// use sigscale::linalg::blas::scal;
///
/// let mut x = vec![1.0, 0.0, 2.0, 0.0, 3.0];
/// scal(3, 2.0, &mut x, 2);
/// assert_eq!(x, vec![2.0, 0.0, 4.0, 0.0, 6.0]);
/// ```
pub fn scal<T: Float>(n: usize, sa: T, x: &mut [T], incx: isize) {
    if n == 0 {
        return;
    }

    if n > 1 && incx == 0 {
        panic!("scal: incx is 0 but n > 1, which is ambiguous or an error condition.");
    }

    // 1 + (n - 1) * |incx| elements are touched; for n == 1 that is just x[0].
    let required_len = 1 + (n - 1) * incx.unsigned_abs();

    if x.len() < required_len {
        panic!(
            "scal: x slice length {} is insufficient for n={} and incx={}. Required: {}",
            x.len(),
            n,
            incx,
            required_len
        );
    }

    // Safe only after the length check, so a short slice always panics.
    if sa == T::one() {
        return;
    }

    if incx == 1 {
        x[..n].iter_mut().for_each(|val| *val = *val * sa);
    } else {
        // A negative stride starts from the far end, as in reference BLAS.
        let mut ix: isize = if incx >= 0 {
            0
        } else {
            (-(n as isize) + 1) * incx
        };

        for _ in 0..n {
            x[ix as usize] = x[ix as usize] * sa;
            ix += incx;
        }
    }
}
