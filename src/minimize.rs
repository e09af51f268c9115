//! Bounded 1-D scalar minimization.
//!
//! Brent's bounded method: golden-section search combined with successive
//! parabolic interpolation, with the semantics of SciPy's
//! `minimize_scalar(method="bounded")`. Used by the density-based
//! discretization to locate density extrema and the point of maximum
//! deviation from the reference straight line.

/// Absolute tolerance on the minimizer location.
const XATOL: f64 = 1e-5;

/// Maximum number of function evaluations.
const MAX_FUN_EVALS: usize = 500;

/// Minimize `f` over the closed interval `[lower, upper]`.
///
/// Returns `(x_min, f(x_min))`. The function is assumed evaluable on the
/// whole interval. Convergence is to within [`XATOL`] on the location; on
/// pathological functions the search stops after [`MAX_FUN_EVALS`]
/// evaluations and returns the best point found.
pub fn minimize_scalar_bounded<F>(f: F, lower: f64, upper: f64) -> (f64, f64)
where
    F: Fn(f64) -> f64,
{
    debug_assert!(lower <= upper);
    let sqrt_eps = f64::EPSILON.sqrt();
    let golden_mean = 0.5 * (3.0 - 5.0_f64.sqrt());

    let (mut a, mut b) = (lower, upper);
    let mut fulc = a + golden_mean * (b - a);
    let (mut nfc, mut xf) = (fulc, fulc);
    let mut rat = 0.0_f64;
    let mut e = 0.0_f64;
    let mut x = xf;
    let mut fx = f(x);
    let mut num = 1;
    let mut ffulc = fx;
    let mut fnfc = fx;
    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + XATOL / 3.0;
    let mut tol2 = 2.0 * tol1;

    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        let mut golden = true;
        // Check for parabolic fit
        if e.abs() > tol1 {
            golden = false;
            let mut r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = rat;

            // Check for acceptability of parabola
            if (p.abs() < (0.5 * q * r).abs()) && (p > q * (a - xf)) && (p < q * (b - xf)) {
                rat = p / q;
                x = xf + rat;

                if ((x - a) < tol2) || ((b - x) < tol2) {
                    let si = sign_with_tie(xm - xf);
                    rat = tol1 * si;
                }
            } else {
                golden = true;
            }
        }

        if golden {
            // Golden-section step
            e = if xf >= xm { a - xf } else { b - xf };
            rat = golden_mean * e;
        }

        let si = sign_with_tie(rat);
        x = xf + si * rat.abs().max(tol1);
        let fu = f(x);
        num += 1;

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * xf.abs() + XATOL / 3.0;
        tol2 = 2.0 * tol1;

        if num >= MAX_FUN_EVALS {
            break;
        }
    }

    (xf, fx)
}

/// Sign of `v`, treating zero as positive.
#[inline]
fn sign_with_tie(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}
