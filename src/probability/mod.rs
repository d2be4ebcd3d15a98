//! Counting and discrete probability distributions

mod distributions;
mod field;

pub use distributions::{binomial, hypergeometric, n_cr, n_pr, negative_binomial, poisson};
pub use field::{DistributionSummary, StatField, DEFAULT_PROBABILITY_PRECISION};
