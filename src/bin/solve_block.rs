//! Solve implied rates for a block of cash-flow schedules
//!
//! Reads schedules from CSV, solves each in parallel and writes one row of
//! rates per schedule. Supports JSON output to stdout via --json flag.
//! Accepts config via environment variables:
//!   SCHEDULE_PATH, OUTPUT_PATH, RATE_FREQUENCY

use actuarial_formulas::{
    schedule::{load_schedules, DEFAULT_SCHEDULE_PATH},
    solve_r, RateBundle,
};
use anyhow::{anyhow, Context};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Serialize)]
struct SolvedSchedule {
    schedule_id: u32,
    #[serde(flatten)]
    rates: Option<RateBundle>,
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let schedule_path: PathBuf = env::var("SCHEDULE_PATH")
        .unwrap_or_else(|_| DEFAULT_SCHEDULE_PATH.to_string())
        .into();
    let output_path = env::var("OUTPUT_PATH").unwrap_or_else(|_| "implied_rates.csv".to_string());

    // Compounding periods per payment period, e.g. 12 to annualise monthly schedules
    let frequency: Option<f64> = env::var("RATE_FREQUENCY")
        .ok()
        .and_then(|s| s.parse().ok());

    if !json_output {
        println!("Loading schedules from {}...", schedule_path.display());
    }
    let records = load_schedules(&schedule_path)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("Failed to load schedules from {}", schedule_path.display()))?;

    // Solve in parallel
    let mut results: Vec<SolvedSchedule> = records
        .par_iter()
        .map(|record| match solve_r(&record.schedule, frequency) {
            Ok(rates) => SolvedSchedule {
                schedule_id: record.schedule_id,
                rates: Some(rates),
                error: None,
            },
            Err(e) => {
                log::warn!("Schedule {}: {}", record.schedule_id, e);
                SolvedSchedule {
                    schedule_id: record.schedule_id,
                    rates: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();
    results.sort_by_key(|r| r.schedule_id);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let mut file = File::create(&output_path)
        .with_context(|| format!("Unable to create {}", output_path))?;
    writeln!(file, "ScheduleID,i,d,v,delta")?;
    for result in &results {
        match &result.rates {
            Some(b) => writeln!(
                file,
                "{},{:.10},{:.10},{:.10},{:.10}",
                result.schedule_id, b.i, b.d, b.v, b.delta
            )?,
            None => writeln!(file, "{},,,,", result.schedule_id)?,
        }
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!(
        "Solved {} schedules ({} failed) in {:?}",
        results.len(),
        failed,
        start.elapsed()
    );
    println!("Results written to: {}", output_path);

    Ok(())
}
