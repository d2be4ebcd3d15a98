//! Implied interest rate of a cash-flow schedule

use crate::error::FormulaResult;
use crate::rates::{compounding_frequency, rates, RateBundle, RateKind};
use crate::roots::{max_real_root, RootFinderConfig};
use crate::schedule::{is_one_sided, CashflowSchedule};
use log::debug;

/// Solve for the periodic rate implied by `schedule`, returned as a full
/// [`RateBundle`].
///
/// Without payments the rate is `(fv / pv)^(1 / t) - 1`, with pv, fv and t
/// defaulting to 1. pv and fv are opposite-signed by convention, so a
/// negative ratio is taken by magnitude.
///
/// With payments, the assembled cash-flow sequence (see
/// [`CashflowSchedule::assemble`]) is read as polynomial coefficients in
/// `1 + r` and the largest real root gives the rate. Two sentinels give a
/// rate of 0:
/// - one-sided sequences (no investment was made against the returns)
/// - polynomials with no real root
///
/// `frequency` converts the solved periodic rate to another compounding
/// period, inversely to [`rates`]: payments that are monthly with an annual
/// rate wanted take `Some(12.0)`, biannual payments take `Some(0.5)`.
/// `Some(0.0)` leaves the periodic rate unchanged.
pub fn solve_r(schedule: &CashflowSchedule, frequency: Option<f64>) -> FormulaResult<RateBundle> {
    solve_r_with(schedule, frequency, &RootFinderConfig::default())
}

/// [`solve_r`] returning only `field`
pub fn solve_r_field(
    schedule: &CashflowSchedule,
    field: RateKind,
    frequency: Option<f64>,
) -> FormulaResult<f64> {
    Ok(solve_r(schedule, frequency)?.get(field))
}

/// [`solve_r`] with an explicit root finder configuration
pub fn solve_r_with(
    schedule: &CashflowSchedule,
    frequency: Option<f64>,
    config: &RootFinderConfig,
) -> FormulaResult<RateBundle> {
    let r = match schedule.assemble() {
        None => lump_sum_rate(schedule),
        Some(flows) => stream_rate(&flows, config)?,
    };

    Ok(rates(r, None, compounding_frequency(frequency).map(|q| 1.0 / q)))
}

fn lump_sum_rate(schedule: &CashflowSchedule) -> f64 {
    let pv = schedule.pv.unwrap_or(1.0);
    let fv = schedule.fv.unwrap_or(1.0);
    let t = schedule.periods.unwrap_or(1);

    let ratio = fv / pv;
    let ratio = if ratio < 0.0 { -ratio } else { ratio };
    ratio.powf(1.0 / t as f64) - 1.0
}

fn stream_rate(flows: &[f64], config: &RootFinderConfig) -> FormulaResult<f64> {
    if is_one_sided(flows) {
        debug!("one-sided cash flows {:?}: no investment, rate 0", flows);
        return Ok(0.0);
    }

    let growth = max_real_root(flows, config)?.unwrap_or_else(|| {
        debug!("no real root for cash flows {:?}: rate 0", flows);
        1.0
    });

    Ok(growth - 1.0)
}
