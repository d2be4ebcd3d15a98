//! Actuarial Formulas CLI
//!
//! Command-line access to the rate, time-value-of-money and probability formulas

use actuarial_formulas::probability::{
    binomial, hypergeometric, negative_binomial, poisson, DistributionSummary, StatField,
};
use actuarial_formulas::tvm::{PaymentOptions, PeriodOptions, ValueOptions};
use actuarial_formulas::{
    future_value, present_value, rates, solve_q, solve_r, solve_t, CashflowSchedule, Payments,
    RateBundle, RateKind,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "actuarial_formulas", version, about = "Interest, annuity and probability formulas")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by the rate-consuming commands
#[derive(Args, Debug)]
struct RateArgs {
    /// What the rate is: 1-4, or i / d / v / delta (prefixes accepted)
    #[arg(long)]
    kind: Option<RateKind>,

    /// Compounding periods per rate period (12 for monthly against annual)
    #[arg(long, allow_negative_numbers = true)]
    frequency: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Equivalent i, d, v and delta of a rate
    Rates {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[command(flatten)]
        rate_args: RateArgs,
        /// Return only this rate
        #[arg(long)]
        field: Option<RateKind>,
    },

    /// Rate implied by pv, payments and fv
    SolveR {
        #[arg(long, allow_negative_numbers = true)]
        pv: Option<f64>,
        /// One level payment or a comma-separated payment pattern
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        payment: Vec<f64>,
        /// Repetitions of the payment pattern (periods without payments)
        #[arg(long)]
        periods: Option<u32>,
        #[arg(long, allow_negative_numbers = true)]
        fv: Option<f64>,
        #[arg(long)]
        due: bool,
        /// Payments per wanted rate period (12 annualises a monthly schedule)
        #[arg(long)]
        frequency: Option<f64>,
        #[arg(long)]
        field: Option<RateKind>,
    },

    /// Present value
    Pv {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[command(flatten)]
        rate_args: RateArgs,
        #[arg(long)]
        periods: Option<f64>,
        /// One level payment or a comma-separated payment stream
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        payment: Vec<f64>,
        #[arg(long, allow_negative_numbers = true)]
        fv: Option<f64>,
        #[arg(long)]
        due: bool,
        #[arg(long, allow_negative_numbers = true)]
        cash_today: Option<f64>,
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Future value
    Fv {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[command(flatten)]
        rate_args: RateArgs,
        #[arg(long)]
        periods: Option<f64>,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        payment: Vec<f64>,
        #[arg(long, allow_negative_numbers = true)]
        pv: Option<f64>,
        #[arg(long)]
        due: bool,
        #[arg(long, allow_negative_numbers = true)]
        future_cash: Option<f64>,
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Number of periods
    SolveT {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[command(flatten)]
        rate_args: RateArgs,
        #[arg(long, allow_negative_numbers = true)]
        pv: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        payment: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        fv: Option<f64>,
        #[arg(long)]
        due: bool,
        #[arg(long)]
        precision: Option<u32>,
    },

    /// Level payment
    SolveQ {
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        periods: f64,
        #[command(flatten)]
        rate_args: RateArgs,
        #[arg(long, allow_negative_numbers = true)]
        pv: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        fv: Option<f64>,
        #[arg(long)]
        due: bool,
        #[arg(long)]
        sinking_fund: bool,
        #[arg(long)]
        precision: Option<u32>,
    },

    /// k successes in n trials
    Binomial {
        n: u64,
        k: u64,
        p: f64,
        #[command(flatten)]
        stats: StatArgs,
    },

    /// k failures before the r-th success
    NegativeBinomial {
        r: u64,
        k: u64,
        p: f64,
        #[command(flatten)]
        stats: StatArgs,
    },

    /// k targets when drawing n from a population holding r targets
    Hypergeometric {
        population: u64,
        n: u64,
        r: u64,
        k: u64,
        #[command(flatten)]
        stats: StatArgs,
    },

    /// k events at mean rate lambda
    Poisson {
        lambda: f64,
        k: u64,
        #[arg(long)]
        cumulative: bool,
        #[arg(long)]
        precision: Option<u32>,
    },
}

#[derive(Args, Debug)]
struct StatArgs {
    /// P(X <= k) instead of P(X = k)
    #[arg(long)]
    cumulative: bool,
    /// Return only p(x) / mean / var (or 1 / 2 / 3)
    #[arg(long)]
    field: Option<StatField>,
    #[arg(long)]
    precision: Option<u32>,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Output {
    Rates(RateBundle),
    Distribution(DistributionSummary),
    Value(f64),
}

impl Output {
    fn rates(bundle: RateBundle, field: Option<RateKind>) -> Self {
        match field {
            Some(kind) => Output::Value(bundle.get(kind)),
            None => Output::Rates(bundle),
        }
    }

    fn distribution(summary: DistributionSummary, field: Option<StatField>) -> Self {
        match field {
            Some(stat) => Output::Value(summary.get(stat)),
            None => Output::Distribution(summary),
        }
    }

    fn print_text(&self) {
        match self {
            Output::Rates(b) => {
                println!("i:     {:.10}", b.i);
                println!("d:     {:.10}", b.d);
                println!("v:     {:.10}", b.v);
                println!("delta: {:.10}", b.delta);
            }
            Output::Distribution(s) => {
                println!("p(x): {}", s.probability);
                println!("mean: {}", s.mean);
                println!("var:  {}", s.variance);
            }
            Output::Value(x) => println!("{}", x),
        }
    }
}

fn payments_from(values: Vec<f64>) -> Option<Payments> {
    match values.len() {
        0 => None,
        1 => Some(Payments::Level(values[0])),
        _ => Some(Payments::Stream(values)),
    }
}

fn run(command: Command) -> anyhow::Result<Output> {
    let output = match command {
        Command::Rates { rate, rate_args, field } => {
            Output::rates(rates(rate, rate_args.kind, rate_args.frequency), field)
        }

        Command::SolveR { pv, payment, periods, fv, due, frequency, field } => {
            let schedule = CashflowSchedule {
                pv,
                payments: payments_from(payment),
                periods,
                fv,
                annuity_due: due,
            };
            Output::rates(solve_r(&schedule, frequency)?, field)
        }

        Command::Pv { rate, rate_args, periods, payment, fv, due, cash_today, precision } => {
            let options = ValueOptions {
                rate_kind: rate_args.kind,
                periods,
                payments: payments_from(payment),
                lump_sum: fv,
                frequency: rate_args.frequency,
                annuity_due: due,
                extra_cash: cash_today,
                precision,
            };
            Output::Value(present_value(rate, &options))
        }

        Command::Fv { rate, rate_args, periods, payment, pv, due, future_cash, precision } => {
            let options = ValueOptions {
                rate_kind: rate_args.kind,
                periods,
                payments: payments_from(payment),
                lump_sum: pv,
                frequency: rate_args.frequency,
                annuity_due: due,
                extra_cash: future_cash,
                precision,
            };
            Output::Value(future_value(rate, &options))
        }

        Command::SolveT { rate, rate_args, pv, payment, fv, due, precision } => {
            let options = PeriodOptions {
                rate_kind: rate_args.kind,
                pv,
                payment,
                fv,
                frequency: rate_args.frequency,
                annuity_due: due,
                precision,
            };
            Output::Value(solve_t(rate, &options))
        }

        Command::SolveQ { rate, periods, rate_args, pv, fv, due, sinking_fund, precision } => {
            let options = PaymentOptions {
                rate_kind: rate_args.kind,
                pv,
                fv,
                frequency: rate_args.frequency,
                annuity_due: due,
                sinking_fund,
                precision,
            };
            Output::Value(solve_q(rate, periods, &options))
        }

        Command::Binomial { n, k, p, stats } => Output::distribution(
            binomial(n, k, p, stats.cumulative, stats.precision),
            stats.field,
        ),

        Command::NegativeBinomial { r, k, p, stats } => Output::distribution(
            negative_binomial(r, k, p, stats.cumulative, stats.precision)?,
            stats.field,
        ),

        Command::Hypergeometric { population, n, r, k, stats } => Output::distribution(
            hypergeometric(population, n, r, k, stats.cumulative, stats.precision)?,
            stats.field,
        ),

        Command::Poisson { lambda, k, cumulative, precision } => {
            Output::Value(poisson(lambda, k, cumulative, precision))
        }
    };

    Ok(output)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let output = run(cli.command)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output.print_text();
    }

    Ok(())
}
