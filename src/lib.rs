//! Actuarial Formulas - interest rate, time-value-of-money and discrete probability formulas
//!
//! This library provides:
//! - Interest rate conversion between i, d, v and delta, with compounding rescaling
//! - Implied rate solving for lump sums, annuities and arbitrary cash-flow streams
//! - Present / future values, period and payment solvers
//! - Binomial, negative binomial, hypergeometric and Poisson probabilities

pub mod error;
pub mod rounding;
pub mod rates;
pub mod roots;
pub mod schedule;
pub mod tvm;
pub mod probability;

// Re-export commonly used types
pub use error::{FormulaError, FormulaResult};
pub use rates::{rate, rates, RateBundle, RateKind};
pub use schedule::{CashflowSchedule, Payments};
pub use tvm::{future_value, present_value, solve_q, solve_r, solve_t};
pub use probability::{DistributionSummary, StatField};
