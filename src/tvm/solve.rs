//! Solve for the number of periods or the level payment

use crate::rates::{compounding_frequency, rates, RateKind};
use crate::rounding::{round_to, MAX_PRECISION};

pub const DEFAULT_PERIOD_PRECISION: u32 = 10;
pub const DEFAULT_PAYMENT_PRECISION: u32 = 2;

/// Inputs for [`solve_t`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodOptions {
    pub rate_kind: Option<RateKind>,
    /// Present value, defaults to 1
    pub pv: Option<f64>,
    /// Level payment per period
    pub payment: Option<f64>,
    pub fv: Option<f64>,
    pub frequency: Option<f64>,
    pub annuity_due: bool,
    pub precision: Option<u32>,
}

/// Number of periods implied by a rate and a pv with either an fv or a
/// level payment.
///
/// - neither payment nor fv, or pv == fv: one period
/// - fv only: `ln(fv / pv) / ln(1 + i)`
/// - payment only: `-ln(1 - i pv / q) / ln(1 + i)` (d instead of i when due)
/// - payment and fv together are not supported and give 0
pub fn solve_t(r: f64, options: &PeriodOptions) -> f64 {
    let bundle = rates(r, options.rate_kind, options.frequency);
    let denominator = (1.0 + bundle.i).ln();
    let pv = options.pv.unwrap_or(1.0);

    let numerator = match (options.payment, options.fv) {
        (_, Some(fv)) if fv == pv => denominator,
        (None, None) => denominator,
        (None, Some(fv)) => (fv / pv).ln(),
        (Some(q), None) => {
            let rate = if options.annuity_due { bundle.d } else { bundle.i };
            -(1.0 - rate * pv / q).ln()
        }
        (Some(_), Some(_)) => 0.0,
    };

    let precision = options.precision.unwrap_or(DEFAULT_PERIOD_PRECISION);
    round_to(numerator / denominator, precision)
}

/// Inputs for [`solve_q`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentOptions {
    pub rate_kind: Option<RateKind>,
    pub pv: Option<f64>,
    pub fv: Option<f64>,
    /// Payments per rate period; `periods` is scaled by it
    pub frequency: Option<f64>,
    pub annuity_due: bool,
    /// Accumulate payments towards fv instead of discounting them against pv
    pub sinking_fund: bool,
    pub precision: Option<u32>,
}

/// Level payment over `periods` that discounts to pv (net of fv) or, for a
/// sinking fund, accumulates to fv (net of pv).
///
/// With neither pv nor fv the payment per unit of pv is returned to 16
/// places.
pub fn solve_q(r: f64, periods: f64, options: &PaymentOptions) -> f64 {
    let bundle = rates(r, options.rate_kind, options.frequency);
    let t = match compounding_frequency(options.frequency) {
        Some(q) => periods * q,
        None => periods,
    };
    let rate = if options.annuity_due { bundle.d } else { bundle.i };
    let growth = 1.0 + bundle.i;

    let mut precision = options.precision.unwrap_or(DEFAULT_PAYMENT_PRECISION);
    let numerator = match (options.sinking_fund, options.pv, options.fv) {
        (_, None, None) => {
            precision = MAX_PRECISION;
            1.0
        }
        (false, Some(pv), None) => pv,
        (false, Some(pv), Some(fv)) => fv * bundle.v.powf(t) - pv,
        (true, None, Some(fv)) => fv,
        (_, pv, fv) => fv.unwrap_or(0.0) - pv.unwrap_or(0.0) * growth.powf(t),
    };

    let denominator = if options.sinking_fund {
        (growth.powf(t) - 1.0) / rate
    } else {
        (1.0 - bundle.v.powf(t)) / rate
    };

    round_to(numerator / denominator, precision)
}
