//! CSV export of a payment schedule
//!
//! Layout: `;`-separated, `\n`-terminated, one header row followed by one row
//! per period. Amounts use two decimals with `.` as decimal separator.

use super::SchedulePeriod;
use crate::error::Result;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CSV row as written to the schedule file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub parcela: u32,
    pub aluguel_mensal: String,
    pub contrato_parcela: String,
    pub total_mes: String,
    pub data_referencia: String,
}

impl From<&SchedulePeriod> for ScheduleRow {
    fn from(period: &SchedulePeriod) -> Self {
        Self {
            parcela: period.period,
            aluguel_mensal: format!("{:.2}", period.monthly_rent),
            contrato_parcela: format!("{:.2}", period.contract_installment),
            total_mes: format!("{:.2}", period.total),
            data_referencia: period.reference_label.clone(),
        }
    }
}

/// Write the schedule as CSV to any writer
pub fn write_schedule<W: Write>(writer: W, periods: &[SchedulePeriod]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for period in periods {
        wtr.serialize(ScheduleRow::from(period))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the schedule to it
pub fn export_schedule(path: impl AsRef<Path>, periods: &[SchedulePeriod]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_schedule(file, periods)?;
    info!("Schedule with {} periods written to {}", periods.len(), path.display());
    Ok(())
}

/// Append `.csv` to a user-supplied file name unless already present
pub fn schedule_file_name(raw: &str) -> String {
    let name = raw.trim();
    if name.to_lowercase().ends_with(".csv") {
        name.to_string()
    } else {
        format!("{}.csv", name)
    }
}
