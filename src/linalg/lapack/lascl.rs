use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::safe_scale::{SafeScale, ScaleStep};
use crate::error::{invalid_argument, Parameter, Result, SigscaleError};
use crate::linalg::machine::SafeFloat;

/// Which entries of a column-major buffer hold live matrix data.
///
/// Banded shapes refer to LAPACK band storage, where each column of the
/// buffer holds the band of one matrix column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixShape {
    /// Every entry (`G`).
    Full,
    /// Lower triangle, `i >= j` (`L`).
    Lower,
    /// Upper triangle, `i <= j` (`U`).
    Upper,
    /// Upper Hessenberg, `i <= j + 1` (`H`).
    Hessenberg,
    /// Symmetric band, lower half stored (`B`).
    SymBandLower,
    /// Symmetric band, upper half stored (`Q`).
    SymBandUpper,
    /// General band with `kl` sub- and `ku` super-diagonals (`Z`).
    GeneralBand,
}

impl MatrixShape {
    /// Parses a one-letter LAPACK storage code, ignoring case.
    pub fn from_code(code: char) -> Result<Self> {
        match code.to_ascii_uppercase() {
            'G' => Ok(MatrixShape::Full),
            'L' => Ok(MatrixShape::Lower),
            'U' => Ok(MatrixShape::Upper),
            'H' => Ok(MatrixShape::Hessenberg),
            'B' => Ok(MatrixShape::SymBandLower),
            'Q' => Ok(MatrixShape::SymBandUpper),
            'Z' => Ok(MatrixShape::GeneralBand),
            _ => Err(invalid_argument(
                Parameter::Shape,
                format!("unrecognized storage code {code:?}"),
            )),
        }
    }

    /// The one-letter LAPACK storage code.
    pub fn code(self) -> char {
        match self {
            MatrixShape::Full => 'G',
            MatrixShape::Lower => 'L',
            MatrixShape::Upper => 'U',
            MatrixShape::Hessenberg => 'H',
            MatrixShape::SymBandLower => 'B',
            MatrixShape::SymBandUpper => 'Q',
            MatrixShape::GeneralBand => 'Z',
        }
    }

    /// Whether the shape uses band storage and reads `kl`/`ku`.
    pub fn is_banded(self) -> bool {
        matches!(
            self,
            MatrixShape::SymBandLower | MatrixShape::SymBandUpper | MatrixShape::GeneralBand
        )
    }

    fn is_symmetric_band(self) -> bool {
        matches!(self, MatrixShape::SymBandLower | MatrixShape::SymBandUpper)
    }

    /// Buffer rows one column needs: `m` for dense shapes, the band height
    /// otherwise. `None` if the band height overflows `isize`.
    fn rows(self, kl: isize, ku: isize, m: isize) -> Option<isize> {
        match self {
            MatrixShape::SymBandLower => kl.checked_add(1),
            MatrixShape::SymBandUpper => ku.checked_add(1),
            MatrixShape::GeneralBand => kl.checked_mul(2)?.checked_add(ku)?.checked_add(1),
            _ => Some(m),
        }
    }

    /// Half-open row range of column `j` (0-based) that is stored.
    fn column_rows(self, kl: isize, ku: isize, m: isize, n: isize, j: isize) -> (isize, isize) {
        match self {
            MatrixShape::Full => (0, m),
            MatrixShape::Lower => (j, m),
            MatrixShape::Upper => (0, (j + 1).min(m)),
            MatrixShape::Hessenberg => (0, j.saturating_add(2).min(m)),
            MatrixShape::SymBandLower => (0, (kl + 1).min(n - j)),
            MatrixShape::SymBandUpper => ((ku - j).max(0), ku + 1),
            MatrixShape::GeneralBand => (
                (kl + ku - j).max(kl),
                (2 * kl + ku + 1).min(m.saturating_add(kl + ku - j)),
            ),
        }
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MatrixShape {
    type Err = SigscaleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => MatrixShape::from_code(code),
            _ => Err(invalid_argument(
                Parameter::Shape,
                format!("expected a single storage code, got {s:?}"),
            )),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn check_arguments<T: SafeFloat>(
    shape: MatrixShape,
    kl: isize,
    ku: isize,
    cfrom: T,
    cto: T,
    m: isize,
    n: isize,
    len: usize,
    lda: isize,
) -> Result<()> {
    if cfrom == T::zero() || cfrom.is_nan() {
        return Err(invalid_argument(
            Parameter::From,
            "must be non-zero and not NaN",
        ));
    }
    if cto.is_nan() {
        return Err(invalid_argument(Parameter::To, "must not be NaN"));
    }
    if m < 0 {
        return Err(invalid_argument(Parameter::M, format!("must be >= 0, got {m}")));
    }
    if n < 0 {
        return Err(invalid_argument(Parameter::N, format!("must be >= 0, got {n}")));
    }
    if shape.is_symmetric_band() && n != m {
        return Err(invalid_argument(
            Parameter::N,
            format!("symmetric band storage needs n == m, got n={n}, m={m}"),
        ));
    }

    if !shape.is_banded() {
        let min_lda = m.max(1);
        if lda < min_lda {
            return Err(invalid_argument(
                Parameter::Lda,
                format!("must be at least {min_lda}, got {lda}"),
            ));
        }
    } else {
        let max_kl = (m - 1).max(0);
        if kl < 0 || kl > max_kl {
            return Err(invalid_argument(
                Parameter::Kl,
                format!("must lie in [0, {max_kl}], got {kl}"),
            ));
        }
        let max_ku = (n - 1).max(0);
        if ku < 0 || ku > max_ku || (shape.is_symmetric_band() && kl != ku) {
            return Err(invalid_argument(
                Parameter::Ku,
                format!("must lie in [0, {max_ku}] (and equal kl={kl} for symmetric band), got {ku}"),
            ));
        }
        let Some(min_lda) = shape.rows(kl, ku, m) else {
            return Err(invalid_argument(
                Parameter::Lda,
                format!("band height for kl={kl}, ku={ku} overflows"),
            ));
        };
        if lda < min_lda {
            return Err(invalid_argument(
                Parameter::Lda,
                format!("must be at least {min_lda} for {shape} storage, got {lda}"),
            ));
        }
    }

    if m > 0 && n > 0 {
        let required = shape
            .rows(kl, ku, m)
            .and_then(|rows| (n - 1).checked_mul(lda)?.checked_add(rows));
        match required {
            Some(required) if len >= required as usize => {}
            Some(required) => {
                return Err(invalid_argument(
                    Parameter::A,
                    format!("buffer length {len} is insufficient, required {required}"),
                ));
            }
            None => {
                return Err(invalid_argument(
                    Parameter::A,
                    format!("required length for n={n}, lda={lda} overflows"),
                ));
            }
        }
    }
    Ok(())
}

/// Multiplies the stored part of an `m x n` column-major matrix by `cto / cfrom`.
///
/// The product is formed through [`SafeScale`], so the result is exact as long
/// as the final entries are representable; nothing overflows or flushes to
/// zero along the way. Element `(i, j)` lives at `a[i + j * lda]`.
///
/// `kl` and `ku` are only read for the banded shapes.
///
/// # Errors
///
/// Returns [`SigscaleError::InvalidArgument`] naming the first bad argument,
/// checked in the order `cfrom`, `cto`, `m`, `n`, then `lda` (unbanded) or
/// `kl`, `ku`, `lda` (banded), then the buffer length. `a` is not modified
/// when an error is returned.
///
/// # Examples
///
/// ```
/// use sigscale::linalg::lapack::{lascl, MatrixShape};
///
/// let mut a = vec![4.0, 8.0, 6.0, 10.0];
/// lascl(MatrixShape::Full, 0, 0, 2.0, 1.0, 2, 2, &mut a, 2).unwrap();
/// assert_eq!(a, vec![2.0, 4.0, 3.0, 5.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn lascl<T: SafeFloat>(
    shape: MatrixShape,
    kl: isize,
    ku: isize,
    cfrom: T,
    cto: T,
    m: isize,
    n: isize,
    a: &mut [T],
    lda: isize,
) -> Result<()> {
    if let Err(err) = check_arguments(shape, kl, ku, cfrom, cto, m, n, a.len(), lda) {
        debug!(%shape, m, n, lda, kl, ku, error = %err, "lascl rejected arguments");
        return Err(err);
    }

    if m == 0 || n == 0 {
        return Ok(());
    }

    let mut scale = SafeScale::new(cfrom, cto);
    loop {
        let ScaleStep { mul, done } = scale.step();
        for j in 0..n {
            let (lo, hi) = shape.column_rows(kl, ku, m, n, j);
            let base = j * lda;
            for i in lo..hi {
                let idx = (base + i) as usize;
                a[idx] = a[idx] * mul;
            }
        }
        if done {
            return Ok(());
        }
    }
}

/// Same as [`lascl`], with the shape given as its one-letter LAPACK code.
///
/// An unknown code is reported as [`Parameter::Shape`] before anything else
/// is checked.
#[allow(clippy::too_many_arguments)]
pub fn lascl_with_code<T: SafeFloat>(
    code: char,
    kl: isize,
    ku: isize,
    cfrom: T,
    cto: T,
    m: isize,
    n: isize,
    a: &mut [T],
    lda: isize,
) -> Result<()> {
    let shape = MatrixShape::from_code(code).inspect_err(|err| {
        debug!(error = %err, "lascl rejected storage code");
    })?;
    lascl(shape, kl, ku, cfrom, cto, m, n, a, lda)
}
