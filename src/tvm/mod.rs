//! Time-value-of-money formulas
//!
//! - [`solve_r`]: implied rate of a cash-flow schedule
//! - [`present_value`] / [`future_value`]: value of lump sums, annuities and streams
//! - [`solve_t`]: number of periods
//! - [`solve_q`]: level payment, discounted or sinking fund

mod rate;
mod solve;
mod value;

pub use rate::{solve_r, solve_r_field, solve_r_with};
pub use solve::{
    solve_q, solve_t, PaymentOptions, PeriodOptions, DEFAULT_PAYMENT_PRECISION,
    DEFAULT_PERIOD_PRECISION,
};
pub use value::{future_value, present_value, ValueOptions, DEFAULT_VALUE_PRECISION};
