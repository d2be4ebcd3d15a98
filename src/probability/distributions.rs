//! Discrete distributions: binomial, negative binomial, hypergeometric, Poisson

use super::field::{DistributionSummary, DEFAULT_PROBABILITY_PRECISION};
use crate::error::{FormulaError, FormulaResult};
use crate::rounding::round_to;
use statrs::function::factorial::{binomial as choose, factorial};

/// Number of combinations of size `r` from a population of `n` (0 when r > n)
pub fn n_cr(n: u64, r: u64) -> f64 {
    choose(n, r)
}

/// Number of ordered selections of size `r` from a population of `n`
/// (0 when r > n)
pub fn n_pr(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    choose(n, r) * factorial(r)
}

/// `k` successes in `n` trials with success probability `p`.
///
/// With `cumulative` the probability is P(X <= k). Mean `np`, variance `npq`.
pub fn binomial(
    n: u64,
    k: u64,
    p: f64,
    cumulative: bool,
    precision: Option<u32>,
) -> DistributionSummary {
    let q = 1.0 - p;
    let term = |i: u64| {
        if i > n {
            0.0
        } else {
            n_cr(n, i) * p.powi(i as i32) * q.powi((n - i) as i32)
        }
    };

    let probability = if cumulative { (0..=k).map(term).sum::<f64>() } else { term(k) };
    let mean = p * n as f64;

    DistributionSummary::rounded(
        probability,
        mean,
        mean * q,
        precision.unwrap_or(DEFAULT_PROBABILITY_PRECISION),
    )
}

/// `k` failures before the `r`-th success with success probability `p`.
///
/// Mean `q / p`, variance `q / p^2`. `r` must be at least 1.
pub fn negative_binomial(
    r: u64,
    k: u64,
    p: f64,
    cumulative: bool,
    precision: Option<u32>,
) -> FormulaResult<DistributionSummary> {
    if r == 0 {
        return Err(FormulaError::InvalidInput {
            reason: "negative binomial needs at least one success (r >= 1)".to_string(),
        });
    }

    let q = 1.0 - p;
    let term = |i: u64| n_cr(r + i - 1, r - 1) * p.powi(r as i32) * q.powi(i as i32);

    let probability = if cumulative { (0..=k).map(term).sum::<f64>() } else { term(k) };
    let mean = q / p;

    Ok(DistributionSummary::rounded(
        probability,
        mean,
        mean / p,
        precision.unwrap_or(DEFAULT_PROBABILITY_PRECISION),
    ))
}

/// `k` target items when drawing `n` from a population of `population`
/// containing `targets` target items.
///
/// Mean `n r / N`, variance `mean (1 - r / N) (N - n) / (N - 1)`.
pub fn hypergeometric(
    population: u64,
    n: u64,
    targets: u64,
    k: u64,
    cumulative: bool,
    precision: Option<u32>,
) -> FormulaResult<DistributionSummary> {
    if population == 0 || n > population || targets > population {
        return Err(FormulaError::InvalidInput {
            reason: format!(
                "hypergeometric draws ({}) and targets ({}) must not exceed a non-empty population ({})",
                n, targets, population
            ),
        });
    }

    let draws = n_cr(population, n);
    let term = |i: u64| {
        if i > n {
            0.0
        } else {
            n_cr(targets, i) * n_cr(population - targets, n - i) / draws
        }
    };

    let probability = if cumulative { (0..=k).map(term).sum::<f64>() } else { term(k) };

    let big_n = population as f64;
    let mean = n as f64 * targets as f64 / big_n;
    let variance = mean * (1.0 - targets as f64 / big_n) * ((big_n - n as f64) / (big_n - 1.0));

    Ok(DistributionSummary::rounded(
        probability,
        mean,
        variance,
        precision.unwrap_or(DEFAULT_PROBABILITY_PRECISION),
    ))
}

/// Probability of `k` events (or at most `k` with `cumulative`) when the
/// mean and variance are both `lambda`.
pub fn poisson(lambda: f64, k: u64, cumulative: bool, precision: Option<u32>) -> f64 {
    // Successive terms e^-l l^i / i! built by ratio to stay finite for large k
    let mut term = (-lambda).exp();
    let mut total = if cumulative || k == 0 { term } else { 0.0 };

    for i in 1..=k {
        term *= lambda / i as f64;
        if cumulative || i == k {
            total += term;
        }
    }

    round_to(total, precision.unwrap_or(DEFAULT_PROBABILITY_PRECISION))
}
