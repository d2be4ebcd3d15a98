//! Cash-flow schedules described by present value, payments and future value

mod loader;

pub use loader::{load_schedules, ScheduleRecord, DEFAULT_SCHEDULE_PATH};

use serde::{Deserialize, Serialize};

/// A single level payment or an explicit per-period payment stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payments {
    Level(f64),
    Stream(Vec<f64>),
}

impl Payments {
    /// Payments as one period per element
    pub fn to_stream(&self) -> Vec<f64> {
        match self {
            Payments::Level(q) => vec![*q],
            Payments::Stream(qs) => qs.clone(),
        }
    }
}

impl From<f64> for Payments {
    fn from(q: f64) -> Self {
        Payments::Level(q)
    }
}

impl From<Vec<f64>> for Payments {
    fn from(qs: Vec<f64>) -> Self {
        Payments::Stream(qs)
    }
}

/// Cash flows exchanged between two parties over evenly spaced periods
///
/// `pv` and `fv` are taken to flow opposite to the payments: with pv = 3,
/// level payment 1 and 4 periods the stream is `[-3, 1, 1, 1, 1]`.
/// `None` always means "not given"; `Some(0.0)` is a real zero amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashflowSchedule {
    /// Present value, paid opposite to the payments at inception
    pub pv: Option<f64>,

    /// Level payment or payment pattern
    pub payments: Option<Payments>,

    /// Number of times the payment pattern repeats. Without payments, the
    /// number of periods between pv and fv.
    pub periods: Option<u32>,

    /// Future value, paid opposite to the payments at the end
    pub fv: Option<f64>,

    /// Payments at the start of each period rather than the end
    pub annuity_due: bool,
}

impl CashflowSchedule {
    /// pv growing to fv over `periods` with no intermediate payments
    pub fn lump_sum(pv: f64, fv: f64, periods: u32) -> Self {
        Self {
            pv: Some(pv),
            fv: Some(fv),
            periods: Some(periods),
            ..Default::default()
        }
    }

    /// pv exchanged for `periods` repetitions of `payments`
    pub fn annuity(pv: f64, payments: impl Into<Payments>, periods: u32) -> Self {
        Self {
            pv: Some(pv),
            payments: Some(payments.into()),
            periods: Some(periods),
            ..Default::default()
        }
    }

    /// An explicit signed cash-flow stream, first element at period 0
    pub fn stream(flows: Vec<f64>) -> Self {
        Self {
            payments: Some(Payments::Stream(flows)),
            ..Default::default()
        }
    }

    pub fn with_fv(mut self, fv: f64) -> Self {
        self.fv = Some(fv);
        self
    }

    pub fn due(mut self) -> Self {
        self.annuity_due = true;
        self
    }

    /// The full signed cash-flow sequence, or `None` without payments.
    ///
    /// The payment pattern is repeated `periods` times. pv is prepended as
    /// `-pv`, or netted into the first payment for an annuity-due. fv is
    /// netted into the last payment, or appended as `-fv` for an annuity-due.
    pub fn assemble(&self) -> Option<Vec<f64>> {
        let pattern = self.payments.as_ref()?.to_stream();

        let mut flows = match self.periods {
            Some(t) => pattern.repeat(t as usize),
            None => pattern,
        };

        if let Some(pv) = self.pv {
            if self.annuity_due && !flows.is_empty() {
                flows[0] -= pv;
            } else {
                flows.insert(0, -pv);
            }
        }

        if let Some(fv) = self.fv {
            let last = flows.len().checked_sub(1);
            match last {
                Some(n) if !self.annuity_due => flows[n] -= fv,
                _ => flows.push(-fv),
            }
        }

        Some(flows)
    }
}

/// True when no value changes hands in both directions: every flow is
/// non-negative or every flow is non-positive.
pub fn is_one_sided(flows: &[f64]) -> bool {
    flows.iter().all(|&cf| cf >= 0.0) || flows.iter().all(|&cf| cf <= 0.0)
}
