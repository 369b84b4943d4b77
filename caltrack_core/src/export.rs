//! CSV export of the intake ledger and progress history.
//!
//! Both tables are written with a header row to any `io::Write`, so the
//! caller picks the destination (a file, stdout, a buffer).

use crate::history::ProgressHistory;
use crate::ledger::IntakeLedger;
use crate::{IntakeEntry, ProgressRecord, Result};
use serde::Serialize;
use std::io::Write;

/// A row in the intake CSV output
#[derive(Debug, Serialize)]
struct IntakeRow<'a> {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Item")]
    item: &'a str,
    #[serde(rename = "Calories")]
    calories: f64,
    #[serde(rename = "Carbs")]
    carbs_g: f64,
    #[serde(rename = "Protein")]
    protein_g: f64,
    #[serde(rename = "Fat")]
    fat_g: f64,
}

impl<'a> From<&'a IntakeEntry> for IntakeRow<'a> {
    fn from(entry: &'a IntakeEntry) -> Self {
        IntakeRow {
            kind: entry.kind.to_string(),
            item: &entry.item,
            calories: entry.calories,
            carbs_g: entry.carbs_g,
            protein_g: entry.protein_g,
            fat_g: entry.fat_g,
        }
    }
}

/// A row in the progress CSV output
#[derive(Debug, Serialize)]
struct ProgressRow {
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Total Calories")]
    total_calories: f64,
    #[serde(rename = "Goal Calories")]
    goal_calories: u32,
    #[serde(rename = "Recorded At")]
    recorded_at: String,
}

impl From<&ProgressRecord> for ProgressRow {
    fn from(record: &ProgressRecord) -> Self {
        ProgressRow {
            day: record.day,
            total_calories: record.total_calories,
            goal_calories: record.goal_calories,
            recorded_at: record.recorded_at.to_rfc3339(),
        }
    }
}

/// Write every ledger entry, in insertion order; returns rows written
pub fn write_intake_csv<W: Write>(ledger: &IntakeLedger, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if ledger.is_empty() {
        // serde-driven headers are only emitted with the first record
        csv_writer.write_record(["Type", "Item", "Calories", "Carbs", "Protein", "Fat"])?;
    }
    for entry in ledger.entries() {
        csv_writer.serialize(IntakeRow::from(entry))?;
    }
    csv_writer.flush()?;

    tracing::debug!("Exported {} intake rows", ledger.len());
    Ok(ledger.len())
}

/// Write the progress series in day order; returns rows written
pub fn write_progress_csv<W: Write>(history: &ProgressHistory, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if history.is_empty() {
        csv_writer.write_record(["Day", "Total Calories", "Goal Calories", "Recorded At"])?;
    }
    for record in history.series() {
        csv_writer.serialize(ProgressRow::from(record))?;
    }
    csv_writer.flush()?;

    tracing::debug!("Exported {} progress rows", history.len());
    Ok(history.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntakeKind;

    #[test]
    fn test_intake_csv_has_header_and_rows() {
        let mut ledger = IntakeLedger::new();
        ledger.append(IntakeEntry {
            kind: IntakeKind::Drink,
            item: "orange juice".into(),
            calories: 110.0,
            carbs_g: 26.0,
            protein_g: 2.0,
            fat_g: 0.5,
        });
        ledger.append(IntakeEntry {
            kind: IntakeKind::Food,
            item: String::new(),
            calories: 50.0,
            carbs_g: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
        });

        let mut buf = Vec::new();
        let rows = write_intake_csv(&ledger, &mut buf).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Type,Item,Calories,Carbs,Protein,Fat");
        assert_eq!(lines[1], "Drink,orange juice,110.0,26.0,2.0,0.5");
        assert_eq!(lines[2], "Food,,50.0,0.0,0.0,0.0");
    }

    #[test]
    fn test_empty_exports_still_have_headers() {
        let mut buf = Vec::new();
        write_intake_csv(&IntakeLedger::new(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            "Type,Item,Calories,Carbs,Protein,Fat"
        );

        let mut buf = Vec::new();
        let rows = write_progress_csv(&ProgressHistory::new(), &mut buf).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(
            String::from_utf8(buf).unwrap().trim_end(),
            "Day,Total Calories,Goal Calories,Recorded At"
        );
    }

    #[test]
    fn test_progress_csv_rows_in_day_order() {
        let mut history = ProgressHistory::new();
        history.record(1800.0, 2000);
        history.record(2100.0, 2000);

        let mut buf = Vec::new();
        write_progress_csv(&history, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let days: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(days, vec!["1", "2"]);
    }
}
