//! Summary statistics of a discrete distribution and their selector tag

use crate::error::{FormulaError, FormulaResult};
use crate::rounding::round_to;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decimal places used when no precision is requested
pub const DEFAULT_PROBABILITY_PRECISION: u32 = 6;

/// Selects one entry of a [`DistributionSummary`]
///
/// Accepted spellings (case-insensitive): `1` or a `p` prefix for the
/// probability, `2` or `m` for the mean, `3` or `v` for the variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatField {
    Probability,
    Mean,
    Variance,
}

impl StatField {
    pub fn from_code(code: u8) -> FormulaResult<Self> {
        match code {
            1 => Ok(StatField::Probability),
            2 => Ok(StatField::Mean),
            3 => Ok(StatField::Variance),
            other => Err(FormulaError::unrecognized(other.to_string(), "statistic")),
        }
    }
}

impl FromStr for StatField {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "1" => Ok(StatField::Probability),
            "2" => Ok(StatField::Mean),
            "3" => Ok(StatField::Variance),
            t if t.starts_with('p') => Ok(StatField::Probability),
            t if t.starts_with('m') => Ok(StatField::Mean),
            t if t.starts_with('v') => Ok(StatField::Variance),
            _ => Err(FormulaError::unrecognized(s, "statistic")),
        }
    }
}

/// Probability of the requested outcome with the distribution's mean and
/// variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    #[serde(rename = "p(x)")]
    pub probability: f64,
    pub mean: f64,
    #[serde(rename = "var")]
    pub variance: f64,
}

impl DistributionSummary {
    pub(crate) fn rounded(probability: f64, mean: f64, variance: f64, precision: u32) -> Self {
        Self {
            probability: round_to(probability, precision),
            mean: round_to(mean, precision),
            variance: round_to(variance, precision),
        }
    }

    pub fn get(&self, field: StatField) -> f64 {
        match field {
            StatField::Probability => self.probability,
            StatField::Mean => self.mean,
            StatField::Variance => self.variance,
        }
    }
}
