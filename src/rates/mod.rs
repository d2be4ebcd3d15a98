//! Interest rate conversion
//!
//! Expands one rate into its interest / discount / discount-factor / force
//! of interest forms and optionally rescales it to another compounding
//! frequency.

mod bundle;
mod kind;

pub use bundle::{RateBundle, RATE_PRECISION};
pub use kind::RateKind;

/// Convert `r` into a full [`RateBundle`].
///
/// * `rate_kind` - what `r` is; `None` means an interest rate
/// * `frequency` - compounding periods per period of `r`. An annual rate
///   with `Some(12.0)` becomes the equivalent monthly effective rate,
///   `i_q = (1 + i)^(1/q) - 1`; `Some(0.5)` gives the biennial rate.
///   `Some(0.0)` is treated as not given.
///
/// Fields are rounded to [`RATE_PRECISION`] places before rescaling, and the
/// rescaled bundle is rebuilt from `i_q` as an interest rate.
pub fn rates(r: f64, rate_kind: Option<RateKind>, frequency: Option<f64>) -> RateBundle {
    let bundle = RateBundle::from_rate(r, rate_kind.unwrap_or_default());

    match compounding_frequency(frequency) {
        Some(q) => {
            let i_q = (1.0 + bundle.i).powf(1.0 / q) - 1.0;
            RateBundle::from_rate(i_q, RateKind::Interest)
        }
        None => bundle,
    }
}

/// A frequency of 0 has no meaning as a rescaling and counts as absent
pub(crate) fn compounding_frequency(frequency: Option<f64>) -> Option<f64> {
    frequency.filter(|&q| q != 0.0)
}

/// Convert `r` and return only the requested `field`
pub fn rate(r: f64, rate_kind: Option<RateKind>, field: RateKind, frequency: Option<f64>) -> f64 {
    rates(r, rate_kind, frequency).get(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::round_to;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_discount_relations_hold() {
        for &i in &[-0.5, -0.01, 0.0, 0.0475, 0.1, 1.0, 3.5] {
            let b = rates(i, None, None);
            assert_eq!(b.d, round_to(i / (1.0 + i), 10), "i = {}", i);
            assert_eq!(b.v, round_to(1.0 - i / (1.0 + i), 10), "i = {}", i);
        }
    }

    #[test]
    fn test_discount_round_trip() {
        for &i in &[-0.9, -0.2, 0.0, 0.03, 0.25, 2.0, 10.0] {
            let d = rates(i, None, None).d;
            let back = rates(d, Some(RateKind::Discount), None).i;
            assert_abs_diff_eq!(back, i, epsilon = 1e-7 * (1.0 + i.abs()));
        }
    }

    #[test]
    fn test_monthly_rescale() {
        let i = 0.12;
        let monthly = rates(i, None, Some(12.0));
        assert_abs_diff_eq!(monthly.i, 1.12_f64.powf(1.0 / 12.0) - 1.0, epsilon = 1e-10);
        // The rescaled bundle is internally consistent
        assert_abs_diff_eq!(monthly.d, monthly.i / (1.0 + monthly.i), epsilon = 1e-10);
    }

    #[test]
    fn test_biennial_rescale() {
        let b = rates(0.1, None, Some(0.5));
        assert_abs_diff_eq!(b.i, 0.21, epsilon = 1e-10);
    }

    #[test]
    fn test_discount_factor_by_full_name() {
        let field: RateKind = "discount factor".parse().unwrap();
        assert_eq!(rate(0.05, None, field, None), 0.952_380_952_4);
    }

    #[test]
    fn test_zero_frequency_is_not_given() {
        assert_eq!(rates(0.05, None, Some(0.0)), rates(0.05, None, None));
    }

    #[test]
    fn test_rescale_from_discount_rate() {
        let b = rates(0.1, Some(RateKind::Discount), Some(4.0));
        let annual_i = round_to(0.1 / 0.9, 10);
        assert_abs_diff_eq!(b.i, (1.0 + annual_i).powf(0.25) - 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_single_field_matches_bundle_for_every_spelling() {
        let bundle = rates(0.06, None, None);
        let spellings: [(&str, RateKind); 12] = [
            ("1", RateKind::Interest),
            ("i", RateKind::Interest),
            ("interest", RateKind::Interest),
            ("2", RateKind::Discount),
            ("d", RateKind::Discount),
            ("discount", RateKind::Discount),
            ("3", RateKind::DiscountFactor),
            ("v", RateKind::DiscountFactor),
            ("4", RateKind::ForceOfInterest),
            ("delta", RateKind::ForceOfInterest),
            ("continuous", RateKind::ForceOfInterest),
            ("force", RateKind::ForceOfInterest),
        ];

        for (tag, kind) in spellings {
            let field: RateKind = tag.parse().unwrap();
            assert_eq!(field, kind);
            assert_eq!(rate(0.06, None, field, None), bundle.get(kind), "tag {:?}", tag);
        }
    }
}
