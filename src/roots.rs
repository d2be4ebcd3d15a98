//! Real roots of real-coefficient polynomials
//!
//! Used by the annuity rate solver, where the cash-flow sequence is the
//! coefficient list of a polynomial in the growth factor `1 + r`.
//!
//! Degrees 1 and 2 use closed forms. Higher degrees run the Aberth-Ehrlich
//! simultaneous iteration on complex estimates, then keep the estimates whose
//! imaginary part is negligible and polish them with Newton steps on the real
//! polynomial.

use crate::error::{FormulaError, FormulaResult};
use log::{debug, trace};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Configuration for the polynomial root finder
#[derive(Debug, Clone, Copy)]
pub struct RootFinderConfig {
    /// Relative step size at which an estimate counts as converged
    pub tolerance: f64,
    /// Maximum Aberth sweeps over all estimates
    pub max_iterations: u32,
    /// Relative imaginary part below which a root is treated as real
    pub imaginary_tolerance: f64,
    /// Newton steps applied to each real root after classification
    pub polish_steps: u32,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-13,
            max_iterations: 500,
            imaginary_tolerance: 1e-6,
            polish_steps: 3,
        }
    }
}

/// All complex roots of the polynomial with `coefficients` (leading
/// coefficient first), with multiplicity.
///
/// Leading zero coefficients are ignored; each trailing zero contributes a
/// root at 0. A constant (or all-zero) polynomial has no roots.
pub fn polynomial_roots(
    coefficients: &[f64],
    config: &RootFinderConfig,
) -> FormulaResult<Vec<Complex64>> {
    if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
        return Err(FormulaError::InvalidInput {
            reason: format!("polynomial coefficient {} is not finite", bad),
        });
    }

    let start = coefficients.iter().position(|&c| c != 0.0);
    let Some(start) = start else {
        return Ok(Vec::new());
    };
    let end = coefficients.iter().rposition(|&c| c != 0.0).unwrap_or(start);

    let zero_roots = coefficients.len() - 1 - end;
    let core = &coefficients[start..=end];

    let mut roots = match core.len() - 1 {
        0 => Vec::new(),
        1 => vec![Complex64::new(-core[1] / core[0], 0.0)],
        2 => quadratic_roots(core[0], core[1], core[2]),
        _ => aberth(core, config)?,
    };

    roots.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(zero_roots));
    Ok(roots)
}

/// Real roots of the polynomial, sorted ascending
pub fn real_roots(coefficients: &[f64], config: &RootFinderConfig) -> FormulaResult<Vec<f64>> {
    let mut real: Vec<f64> = polynomial_roots(coefficients, config)?
        .into_iter()
        .filter(|z| z.im.abs() <= config.imaginary_tolerance * z.norm().max(1.0))
        .map(|z| polish(coefficients, z.re, config.polish_steps))
        .collect();

    real.sort_by(|a, b| a.total_cmp(b));
    Ok(real)
}

/// Largest real root, or `None` when every root is complex
pub fn max_real_root(coefficients: &[f64], config: &RootFinderConfig) -> FormulaResult<Option<f64>> {
    Ok(real_roots(coefficients, config)?.last().copied())
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Complex64> {
    let disc = b * b - 4.0 * a * c;

    // Treat rounding-level negatives as a double root
    if disc < 0.0 && disc.abs() > 1e-14 * b * b {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a);
        return vec![Complex64::new(re, im), Complex64::new(re, -im)];
    }

    let sqrt_disc = disc.max(0.0).sqrt();
    // Avoid cancellation between -b and sqrt_disc
    let q = -0.5 * (b + b.signum() * sqrt_disc);
    if q == 0.0 {
        return vec![Complex64::new(0.0, 0.0); 2];
    }
    vec![Complex64::new(q / a, 0.0), Complex64::new(c / q, 0.0)]
}

fn aberth(coefficients: &[f64], config: &RootFinderConfig) -> FormulaResult<Vec<Complex64>> {
    let degree = coefficients.len() - 1;
    let lead = coefficients[0];
    let constant = coefficients[degree];

    // Start on a circle whose radius is the geometric mean of the root moduli,
    // rotated off the real axis so conjugate pairs can separate
    let radius = (constant / lead).abs().powf(1.0 / degree as f64);
    let mut z: Vec<Complex64> = (0..degree)
        .map(|k| Complex64::from_polar(radius, 2.0 * PI * k as f64 / degree as f64 + 0.4))
        .collect();
    let mut settled = vec![false; degree];

    let mut last_step = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        last_step = 0.0;

        for k in 0..degree {
            if settled[k] {
                continue;
            }

            let (ratio, residual) = newton_ratio(coefficients, z[k]);
            if residual <= 4.0 * f64::EPSILON {
                settled[k] = true;
                continue;
            }

            let repulsion: Complex64 = (0..degree)
                .filter(|&j| j != k)
                .map(|j| (z[k] - z[j]).inv())
                .sum();
            let step = ratio / (Complex64::new(1.0, 0.0) - ratio * repulsion);

            if !step.re.is_finite() || !step.im.is_finite() {
                // Estimate sits on a critical point; nudge it
                z[k] += Complex64::new(radius.max(1.0) * 1e-3, radius.max(1.0) * 1e-3);
                last_step = f64::INFINITY;
                continue;
            }

            z[k] -= step;
            let relative = step.norm() / z[k].norm().max(1.0);
            last_step = last_step.max(relative);
            if relative <= config.tolerance {
                settled[k] = true;
            }
        }

        trace!("aberth sweep {}: max relative step {:.3e}", iteration, last_step);

        if settled.iter().all(|&s| s) {
            debug!("aberth converged in {} sweeps for degree {}", iteration, degree);
            return Ok(z);
        }
    }

    Err(FormulaError::ConvergenceFailed {
        iterations: config.max_iterations,
        residual: last_step,
    })
}

/// Horner evaluation of p(z), p'(z) and the rounding bound sum |c_k| |z|^k
fn horner(coefficients: impl Iterator<Item = f64>, z: Complex64) -> (Complex64, Complex64, f64) {
    let modulus = z.norm();
    let mut p = Complex64::new(0.0, 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    let mut bound = 0.0;

    for c in coefficients {
        dp = dp * z + p;
        p = p * z + c;
        bound = bound * modulus + c.abs();
    }

    (p, dp, bound)
}

/// Newton correction p(z) / p'(z) and the relative residual |p(z)| / sum |c_k| |z|^k.
///
/// Outside the unit disc the polynomial is evaluated reversed at w = 1/z, so
/// high degrees at large estimates never overflow. With p(z) = z^n r(w),
/// p / p' = z r / (n r - w r').
fn newton_ratio(coefficients: &[f64], z: Complex64) -> (Complex64, f64) {
    let (ratio, p, bound) = if z.norm() <= 1.0 {
        let (p, dp, bound) = horner(coefficients.iter().copied(), z);
        (p / dp, p, bound)
    } else {
        let degree = (coefficients.len() - 1) as f64;
        let w = z.inv();
        let (r, dr, bound) = horner(coefficients.iter().rev().copied(), w);
        (z * r / (r * degree - w * dr), r, bound)
    };

    let residual = if p.norm() == 0.0 { 0.0 } else { p.norm() / bound };
    (ratio, residual)
}

/// Newton refinement on the real polynomial, kept only while it reduces the residual
fn polish(coefficients: &[f64], mut x: f64, steps: u32) -> f64 {
    let (mut ratio, mut residual) = newton_ratio(coefficients, Complex64::new(x, 0.0));

    for _ in 0..steps {
        if residual == 0.0 || !ratio.re.is_finite() {
            break;
        }
        let candidate = x - ratio.re;
        let (next_ratio, next_residual) = newton_ratio(coefficients, Complex64::new(candidate, 0.0));
        if !candidate.is_finite() || next_residual >= residual {
            break;
        }
        x = candidate;
        ratio = next_ratio;
        residual = next_residual;
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn roots_of(coefficients: &[f64]) -> Vec<f64> {
        real_roots(coefficients, &RootFinderConfig::default()).unwrap()
    }

    #[test]
    fn test_linear_and_constant() {
        assert_eq!(roots_of(&[2.0, -4.0]), vec![2.0]);
        assert!(roots_of(&[5.0]).is_empty());
        assert!(roots_of(&[0.0, 0.0]).is_empty());
        assert!(roots_of(&[]).is_empty());
    }

    #[test]
    fn test_quadratic() {
        let r = roots_of(&[1.0, -3.0, 2.0]);
        assert_eq!(r.len(), 2);
        assert_abs_diff_eq!(r[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[1], 2.0, epsilon = 1e-12);

        // x^2 + 1 has only complex roots
        assert!(roots_of(&[1.0, 0.0, 1.0]).is_empty());
    }

    #[test]
    fn test_cubic_with_three_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let r = roots_of(&[1.0, -6.0, 11.0, -6.0]);
        assert_eq!(r.len(), 3);
        for (got, want) in r.iter().zip([1.0, 2.0, 3.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_complex_pair_is_discarded() {
        // x^3 - 1: one real root, two complex cube roots of unity
        let all = polynomial_roots(&[1.0, 0.0, 0.0, -1.0], &RootFinderConfig::default()).unwrap();
        assert_eq!(all.len(), 3);
        let r = roots_of(&[1.0, 0.0, 0.0, -1.0]);
        assert_eq!(r.len(), 1);
        assert_abs_diff_eq!(r[0], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_leading_and_trailing_zeros() {
        // 0x^3 + x^2 - x + 0 -> roots 0 and 1
        let r = roots_of(&[0.0, 1.0, -1.0, 0.0]);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0], 0.0);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_double_root() {
        // (x - 1)^2 (x - 3)
        let r = roots_of(&[1.0, -5.0, 7.0, -3.0]);
        assert_abs_diff_eq!(*r.last().unwrap(), 3.0, epsilon = 1e-10);
        for root in &r[..r.len() - 1] {
            assert_abs_diff_eq!(*root, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_bond_like_cashflow_polynomial() {
        // -1000x^4 + 100x^3 + 100x^2 + 100x + 1100 has its positive root at 1.1
        let max = max_real_root(&[-1000.0, 100.0, 100.0, 100.0, 1100.0], &RootFinderConfig::default())
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(max, 1.1, epsilon = 1e-10);
    }

    #[test]
    fn test_long_level_annuity() {
        // 20 paid today against 30 level payments of 1
        let mut coefficients = vec![-20.0];
        coefficients.extend(vec![1.0; 30]);
        let max = max_real_root(&coefficients, &RootFinderConfig::default())
            .unwrap()
            .unwrap();
        let rate = max - 1.0;
        let pv: f64 = (1..=30).map(|t| (1.0 + rate).powi(-t)).sum();
        assert_abs_diff_eq!(pv, 20.0, epsilon = 1e-8);
    }

    #[test]
    fn test_large_root_of_high_degree() {
        // 10 against 360 payments of 100: the growth factor is 11, and 11^360
        // is beyond f64 range
        let mut coefficients = vec![-10.0];
        coefficients.extend(vec![100.0; 360]);
        let max = max_real_root(&coefficients, &RootFinderConfig::default())
            .unwrap()
            .unwrap();
        assert_abs_diff_eq!(max, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let err = real_roots(&[1.0, f64::NAN], &RootFinderConfig::default()).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidInput { .. }));
    }
}
