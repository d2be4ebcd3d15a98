//! Present and future values of lump sums, level annuities and payment streams

use crate::rates::{compounding_frequency, rates, RateBundle, RateKind};
use crate::rounding::{round_to, MAX_PRECISION};
use crate::schedule::Payments;

/// Decimal places used when no precision is requested
pub const DEFAULT_VALUE_PRECISION: u32 = 2;

/// Options shared by [`present_value`] and [`future_value`]
///
/// No sign checks are made on any amount: the result is simply the signed
/// sum of the discounted (or accumulated) flows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueOptions {
    /// What the input rate is; `None` means an interest rate
    pub rate_kind: Option<RateKind>,

    /// Number of periods. For present value defaults to 1; for future value
    /// defaults to the stream length (or 1 for level payments).
    pub periods: Option<f64>,

    /// Level payment per period or an explicit stream (one element per
    /// period, zeros for periods without payment)
    pub payments: Option<Payments>,

    /// The lump sum on the far side of the valuation: fv for a present
    /// value, pv for a future value
    pub lump_sum: Option<f64>,

    /// Payments per rate period, e.g. `Some(12.0)` for monthly payments
    /// against an annual rate
    pub frequency: Option<f64>,

    /// Payments at the start of each period
    pub annuity_due: bool,

    /// Cash exchanged at the valuation date itself (today for a present
    /// value, at the end for a future value)
    pub extra_cash: Option<f64>,

    /// Decimal places of the answer, capped at 16
    pub precision: Option<u32>,
}

impl ValueOptions {
    pub fn level(payment: f64, periods: f64) -> Self {
        Self {
            payments: Some(Payments::Level(payment)),
            periods: Some(periods),
            ..Default::default()
        }
    }

    pub fn lump(amount: f64, periods: f64) -> Self {
        Self {
            lump_sum: Some(amount),
            periods: Some(periods),
            ..Default::default()
        }
    }
}

/// Per-period rates and the period count scaled by the payment frequency
fn periodic(r: f64, options: &ValueOptions, periods: f64) -> (RateBundle, f64) {
    let bundle = rates(r, options.rate_kind, options.frequency);
    let t = match compounding_frequency(options.frequency) {
        Some(q) => periods * q,
        None => periods,
    };
    (bundle, t)
}

/// Present value of a lump sum, level annuity or payment stream.
///
/// With neither payments nor a lump sum the lump sum is 1 and the result is
/// the discount factor `v^t` to 16 places.
pub fn present_value(r: f64, options: &ValueOptions) -> f64 {
    let (bundle, mut t) = periodic(r, options, options.periods.unwrap_or(1.0));
    let (fv, precision) = lump_and_precision(options);

    let annuity = match &options.payments {
        None => 0.0,
        Some(Payments::Level(q)) => {
            let rate = if options.annuity_due { bundle.d } else { bundle.i };
            q * (1.0 - bundle.v.powf(t)) / rate
        }
        Some(Payments::Stream(qs)) => {
            let first = if options.annuity_due { 0 } else { 1 };
            // fv is discounted from the last payment date
            t = (first + qs.len() as i32 - 1) as f64;
            qs.iter()
                .zip(first..)
                .map(|(q, k)| q * bundle.v.powi(k))
                .sum::<f64>()
        }
    };

    let value = annuity + fv * bundle.v.powf(t) + options.extra_cash.unwrap_or(0.0);
    round_to(value, precision)
}

/// Future value of a lump sum, level annuity or payment stream.
///
/// With neither payments nor a lump sum the lump sum is 1 and the result is
/// the accumulation factor `(1 + i)^t` to 16 places.
pub fn future_value(r: f64, options: &ValueOptions) -> f64 {
    let default_periods = match &options.payments {
        Some(Payments::Stream(qs)) => qs.len() as f64,
        _ => 1.0,
    };
    let (bundle, t) = periodic(r, options, options.periods.unwrap_or(default_periods));
    let (pv, precision) = lump_and_precision(options);
    let growth = 1.0 + bundle.i;

    let annuity = match &options.payments {
        None => 0.0,
        Some(Payments::Level(q)) => {
            let rate = if options.annuity_due { bundle.d } else { bundle.i };
            q * (growth.powf(t) - 1.0) / rate
        }
        Some(Payments::Stream(qs)) => {
            // Last payment accumulates for 0 periods (1 if due)
            let first = if options.annuity_due { 1 } else { 0 };
            qs.iter()
                .rev()
                .zip(first..)
                .map(|(q, k)| q * growth.powi(k))
                .sum::<f64>()
        }
    };

    let value = annuity + pv * growth.powf(t) + options.extra_cash.unwrap_or(0.0);
    round_to(value, precision)
}

fn lump_and_precision(options: &ValueOptions) -> (f64, u32) {
    match (options.lump_sum, &options.payments) {
        (None, None) => (1.0, MAX_PRECISION),
        (lump, _) => (
            lump.unwrap_or(0.0),
            options.precision.unwrap_or(DEFAULT_VALUE_PRECISION),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pv_level_annuity_immediate() {
        let pv = present_value(0.05, &ValueOptions::level(100.0, 10.0));
        assert_eq!(pv, 772.17);
    }

    #[test]
    fn test_pv_level_annuity_due() {
        let options = ValueOptions {
            annuity_due: true,
            ..ValueOptions::level(100.0, 10.0)
        };
        assert_eq!(present_value(0.05, &options), 810.78);
    }

    #[test]
    fn test_pv_discount_factor_only() {
        let v = present_value(0.1, &ValueOptions { periods: Some(2.0), ..Default::default() });
        assert_abs_diff_eq!(v, 1.0 / 1.21, epsilon = 1e-9);
    }

    #[test]
    fn test_pv_stream_matches_level() {
        let stream = ValueOptions {
            payments: Some(Payments::Stream(vec![100.0; 10])),
            ..Default::default()
        };
        assert_eq!(
            present_value(0.05, &stream),
            present_value(0.05, &ValueOptions::level(100.0, 10.0))
        );
    }

    #[test]
    fn test_pv_stream_with_fv_and_cash_today() {
        // Bond: coupons of 5, redemption 100 with the last coupon
        let options = ValueOptions {
            payments: Some(Payments::Stream(vec![5.0, 5.0, 5.0])),
            lump_sum: Some(100.0),
            extra_cash: Some(-100.0),
            precision: Some(8),
            ..Default::default()
        };
        assert_abs_diff_eq!(present_value(0.05, &options), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_pv_monthly_payments_against_annual_rate() {
        let options = ValueOptions {
            frequency: Some(12.0),
            precision: Some(6),
            ..ValueOptions::level(10.0, 1.0)
        };
        let monthly = 1.12_f64.powf(1.0 / 12.0) - 1.0;
        let expected = 10.0 * (1.0 - (1.0 + monthly).powi(-12)) / monthly;
        assert_abs_diff_eq!(present_value(0.12, &options), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_pv_from_discount_rate() {
        let options = ValueOptions {
            rate_kind: Some(RateKind::Discount),
            precision: Some(10),
            ..ValueOptions::lump(100.0, 1.0)
        };
        assert_abs_diff_eq!(present_value(0.1, &options), 90.0, epsilon = 1e-8);
    }

    #[test]
    fn test_fv_level_annuity() {
        let fv = future_value(0.05, &ValueOptions::level(100.0, 10.0));
        assert_eq!(fv, 1257.79);

        let due = ValueOptions {
            annuity_due: true,
            ..ValueOptions::level(100.0, 10.0)
        };
        assert_eq!(future_value(0.05, &due), 1320.68);
    }

    #[test]
    fn test_fv_accumulation_factor() {
        let f = future_value(0.1, &ValueOptions { periods: Some(3.0), ..Default::default() });
        assert_abs_diff_eq!(f, 1.331, epsilon = 1e-9);
    }

    #[test]
    fn test_fv_stream() {
        let options = ValueOptions {
            payments: Some(Payments::Stream(vec![100.0, 0.0, 200.0])),
            ..Default::default()
        };
        // 100 * 1.1^2 + 0 * 1.1 + 200
        assert_eq!(future_value(0.1, &options), 321.0);

        let due = ValueOptions { annuity_due: true, ..options };
        assert_eq!(future_value(0.1, &due), 353.1);
    }

    #[test]
    fn test_fv_stream_with_pv_uses_stream_length() {
        let options = ValueOptions {
            payments: Some(Payments::Stream(vec![10.0, 10.0])),
            lump_sum: Some(100.0),
            ..Default::default()
        };
        // 10 * 1.1 + 10 + 100 * 1.21
        assert_eq!(future_value(0.1, &options), 142.0);
    }

    #[test]
    fn test_pv_fv_consistency() {
        let options = ValueOptions {
            precision: Some(10),
            ..ValueOptions::level(250.0, 20.0)
        };
        let pv = present_value(0.04, &options);
        let fv = future_value(0.04, &options);
        assert_abs_diff_eq!(pv * 1.04_f64.powi(20), fv, epsilon = 1e-4);
    }
}
