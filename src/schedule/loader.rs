//! Load cash-flow schedules from CSV
//!
//! Columns: `ScheduleID,PV,Payment,Periods,FV,AnnuityDue`. Blank cells mean
//! "not given". `Payment` holds either one level amount or a `;`-separated
//! payment pattern such as `100;100;1100`.

use super::{CashflowSchedule, Payments};
use csv::Reader;
use log::debug;
use std::error::Error;
use std::path::Path;

/// Default schedule file read by the batch solver
pub const DEFAULT_SCHEDULE_PATH: &str = "data/schedules.csv";

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScheduleID")]
    schedule_id: u32,
    #[serde(rename = "PV")]
    pv: Option<f64>,
    #[serde(rename = "Payment")]
    payment: Option<String>,
    #[serde(rename = "Periods")]
    periods: Option<u32>,
    #[serde(rename = "FV")]
    fv: Option<f64>,
    #[serde(rename = "AnnuityDue", default)]
    annuity_due: Option<String>,
}

impl CsvRow {
    fn to_record(self) -> Result<ScheduleRecord, Box<dyn Error>> {
        let payments = match self.payment.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => {
                let amounts = text
                    .split(';')
                    .map(|part| part.trim().parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| format!("Bad Payment {:?}: {}", text, e))?;
                Some(if amounts.len() == 1 {
                    Payments::Level(amounts[0])
                } else {
                    Payments::Stream(amounts)
                })
            }
        };

        let annuity_due = match self.annuity_due.as_deref().map(str::trim) {
            None | Some("") => false,
            Some(flag) => match flag.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => true,
                "false" | "no" | "n" | "0" => false,
                other => return Err(format!("Unknown AnnuityDue: {}", other).into()),
            },
        };

        Ok(ScheduleRecord {
            schedule_id: self.schedule_id,
            schedule: CashflowSchedule {
                pv: self.pv,
                payments,
                periods: self.periods,
                fv: self.fv,
                annuity_due,
            },
        })
    }
}

/// One schedule and its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRecord {
    pub schedule_id: u32,
    pub schedule: CashflowSchedule,
}

/// Load every schedule in the file.
///
/// Any malformed row is an error: a schedule is never dropped silently.
pub fn load_schedules(path: &Path) -> Result<Vec<ScheduleRecord>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.to_record()?);
    }

    debug!("Loaded {} schedules from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_level_stream_and_lump_sum() {
        let file = write_csv(
            "ScheduleID,PV,Payment,Periods,FV,AnnuityDue\n\
             1,3,1,4,,\n\
             2,,-1000;100;100;100;1100,,,false\n\
             3,-100,,1,110,\n\
             4,10,3,3,2,yes\n",
        );

        let records = load_schedules(file.path()).unwrap();
        assert_eq!(records.len(), 4);

        assert_eq!(records[0].schedule, CashflowSchedule::annuity(3.0, 1.0, 4));
        assert_eq!(
            records[1].schedule,
            CashflowSchedule::stream(vec![-1000.0, 100.0, 100.0, 100.0, 1100.0])
        );
        assert_eq!(records[2].schedule, CashflowSchedule::lump_sum(-100.0, 110.0, 1));
        assert!(records[3].schedule.annuity_due);
        assert_eq!(records[3].schedule_id, 4);
    }

    #[test]
    fn test_bad_payment_is_an_error() {
        let file = write_csv("ScheduleID,PV,Payment,Periods,FV,AnnuityDue\n1,3,abc,4,,\n");
        assert!(load_schedules(file.path()).is_err());
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let file = write_csv(
            "ScheduleID,PV,Payment,Periods,FV,AnnuityDue\n\
             1,3,1,4,,\n\
             2,1O00,1,4,,\n\
             3,3,1,4,,\n",
        );
        assert!(load_schedules(file.path()).is_err());
    }

    #[test]
    fn test_bad_annuity_due_is_an_error() {
        let file = write_csv("ScheduleID,PV,Payment,Periods,FV,AnnuityDue\n1,3,1,4,,maybe\n");
        assert!(load_schedules(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_schedules(Path::new("does/not/exist.csv")).is_err());
    }
}
