use tracing::warn;

/// `1 - 1/phi`: the golden-section fraction.
const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Iteration cap of [`minimize_brent`].
pub const MAX_ITERATIONS: usize = 60;

/// Point and function value found by a one-dimensional minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub x: f64,
    pub fx: f64,
}

/// Brent's method: minimizes `f` on `[a, b]` by golden-section steps,
/// switching to parabolic interpolation whenever that is safe.
///
/// Stops when the bracket is within `2 * (sqrt(eps) * |x| + tol / 3)` of the
/// current best point. After [`MAX_ITERATIONS`] a warning is logged and the
/// best point so far is returned.
///
/// # Panics
///
/// Panics if `tol <= 0` or `a >= b`.
pub fn minimize_brent<F>(mut f: F, mut a: f64, mut b: f64, tol: f64) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    assert!(
        tol > 0.0 && a < b,
        "minimize_brent: needs tol > 0 and a < b, got tol={tol}, a={a}, b={b}"
    );
    let sqrt_epsilon = f64::EPSILON.sqrt();

    let mut v = a + GOLDEN * (b - a);
    let mut fv = f(v);
    let mut x = v;
    let mut w = v;
    let mut fx = fv;
    let mut fw = fv;

    for _ in 0..MAX_ITERATIONS {
        let range = b - a;
        let middle_range = 0.5 * (a + b);
        let tol_act = sqrt_epsilon * x.abs() + tol / 3.0;

        if (x - middle_range).abs() + range / 2.0 <= 2.0 * tol_act {
            return Minimum { x, fx };
        }

        let mut new_step = GOLDEN * if x < middle_range { b - x } else { a - x };

        if (x - w).abs() >= tol_act {
            let t = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * t;
            q = 2.0 * (q - t);
            if q > 0.0 {
                p = -p;
            } else {
                q = -q;
            }
            if p.abs() < (new_step * q).abs()
                && p > q * (a - x + 2.0 * tol_act)
                && p < q * (b - x - 2.0 * tol_act)
            {
                new_step = p / q;
            }
        }

        if new_step.abs() < tol_act {
            new_step = if new_step > 0.0 { tol_act } else { -tol_act };
        }

        let t = x + new_step;
        let ft = f(t);
        if ft <= fx {
            if t < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            w = x;
            x = t;
            fv = fw;
            fw = fx;
            fx = ft;
        } else {
            if t < x {
                a = t;
            } else {
                b = t;
            }
            if ft <= fw || w == x {
                v = w;
                w = t;
                fv = fw;
                fw = ft;
            } else if ft <= fv || v == x || v == w {
                v = t;
                fv = ft;
            }
        }
    }

    warn!(
        iterations = MAX_ITERATIONS,
        x, fx, "minimize_brent: maximum number of iterations exceeded"
    );
    Minimum { x, fx }
}
