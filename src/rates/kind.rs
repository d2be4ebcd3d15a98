//! Rate-kind tag and its accepted spellings

use crate::error::{FormulaError, FormulaResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the four equivalent rate forms a value represents
///
/// Accepted spellings (case-insensitive, surrounding whitespace ignored):
///
/// | Kind | Code | Prefix |
/// |------|------|--------|
/// | `Interest` | `1` | `i` |
/// | `Discount` | `2` | `d` (but not `de`) |
/// | `DiscountFactor` | `3` | `v`, full name `discount factor` |
/// | `ForceOfInterest` | `4` | `de`, `c`, `f` |
///
/// The full name of the discount factor may be written with a space, an
/// underscore or nothing between the words (`"discount_factor"`,
/// `"DiscountFactor"`). So `"interest"`, `"I"`, `"discount"`, `"v"`,
/// `"delta"`, `"continuous"` and `"force"` all parse. Anything else is
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateKind {
    /// Periodic interest rate `i`
    #[default]
    Interest,
    /// Periodic discount rate `d`
    Discount,
    /// Per-period discount factor `v`
    DiscountFactor,
    /// Continuously compounded force of interest `delta`
    ForceOfInterest,
}

impl RateKind {
    pub const ALL: [RateKind; 4] = [
        RateKind::Interest,
        RateKind::Discount,
        RateKind::DiscountFactor,
        RateKind::ForceOfInterest,
    ];

    /// Numeric code used by the short-hand spelling (1-4)
    pub fn code(self) -> u8 {
        match self {
            RateKind::Interest => 1,
            RateKind::Discount => 2,
            RateKind::DiscountFactor => 3,
            RateKind::ForceOfInterest => 4,
        }
    }

    pub fn from_code(code: u8) -> FormulaResult<Self> {
        match code {
            1 => Ok(RateKind::Interest),
            2 => Ok(RateKind::Discount),
            3 => Ok(RateKind::DiscountFactor),
            4 => Ok(RateKind::ForceOfInterest),
            other => Err(FormulaError::unrecognized(other.to_string(), "rate kind")),
        }
    }

    /// Canonical key used in serialized bundles
    pub fn key(self) -> &'static str {
        match self {
            RateKind::Interest => "i",
            RateKind::Discount => "d",
            RateKind::DiscountFactor => "v",
            RateKind::ForceOfInterest => "delta",
        }
    }
}

impl FromStr for RateKind {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();

        // Order matters: "discount factor" and "de" must win over the bare "d" prefix
        let kind = match tag.as_str() {
            "1" => RateKind::Interest,
            "2" => RateKind::Discount,
            "3" => RateKind::DiscountFactor,
            "4" => RateKind::ForceOfInterest,
            "discount factor" | "discount_factor" | "discountfactor" => RateKind::DiscountFactor,
            t if t.starts_with('i') => RateKind::Interest,
            t if t.starts_with("de") || t.starts_with('c') || t.starts_with('f') => {
                RateKind::ForceOfInterest
            }
            t if t.starts_with('d') => RateKind::Discount,
            t if t.starts_with('v') => RateKind::DiscountFactor,
            _ => return Err(FormulaError::unrecognized(s, "rate kind")),
        };

        Ok(kind)
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes() {
        for kind in RateKind::ALL {
            assert_eq!(RateKind::from_code(kind.code()).unwrap(), kind);
            assert_eq!(kind.code().to_string().parse::<RateKind>().unwrap(), kind);
        }
        assert!(RateKind::from_code(0).is_err());
        assert!(RateKind::from_code(5).is_err());
    }

    #[test]
    fn test_full_names_and_prefixes() {
        let cases = [
            ("i", RateKind::Interest),
            ("Interest", RateKind::Interest),
            ("d", RateKind::Discount),
            ("DISCOUNT", RateKind::Discount),
            ("discount factor", RateKind::DiscountFactor),
            ("discount_factor", RateKind::DiscountFactor),
            ("DiscountFactor", RateKind::DiscountFactor),
            ("v", RateKind::DiscountFactor),
            ("v_factor", RateKind::DiscountFactor),
            ("delta", RateKind::ForceOfInterest),
            ("De", RateKind::ForceOfInterest),
            ("continuous", RateKind::ForceOfInterest),
            ("force of interest", RateKind::ForceOfInterest),
            ("  i  ", RateKind::Interest),
        ];

        for (tag, expected) in cases {
            assert_eq!(tag.parse::<RateKind>().unwrap(), expected, "tag {:?}", tag);
        }
    }

    #[test]
    fn test_unrecognized_tags() {
        for tag in ["", "  ", "0", "5", "12", "x", "rate"] {
            let err = tag.parse::<RateKind>().unwrap_err();
            assert!(
                matches!(err, FormulaError::UnrecognizedTag { expected: "rate kind", .. }),
                "tag {:?} gave {:?}",
                tag,
                err
            );
        }
    }

    #[test]
    fn test_display_uses_bundle_key() {
        assert_eq!(RateKind::ForceOfInterest.to_string(), "delta");
        assert_eq!(RateKind::default(), RateKind::Interest);
    }
}
