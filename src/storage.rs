use crate::transform::Series;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One exported row of a plotted series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesRow<'a> {
    pub date: &'a str,
    pub value: i64,
    pub moving_average: Option<f64>,
}

fn rows(series: &Series) -> impl Iterator<Item = SeriesRow<'_>> {
    series
        .labels
        .iter()
        .zip(series.values.iter())
        .enumerate()
        .map(|(i, (date, value))| SeriesRow {
            date,
            value: *value,
            moving_average: series
                .moving_average
                .as_ref()
                .and_then(|m| m.get(i).copied().flatten()),
        })
}

/// Neutralize text cells a spreadsheet would evaluate as a formula.
fn csv_safe(cell: &str) -> String {
    if cell.starts_with(['=', '+', '-', '@']) {
        format!("'{cell}")
    } else {
        cell.to_string()
    }
}

/// Save a series as CSV with header `date,value,moving_average`.
pub fn save_csv<P: AsRef<Path>>(series: &Series, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("date", "value", "moving_average"))?;
    for r in rows(series) {
        wtr.serialize((csv_safe(r.date), r.value, r.moving_average))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a series as a pretty JSON array of rows.
pub fn save_json<P: AsRef<Path>>(series: &Series, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let rows: Vec<SeriesRow<'_>> = rows(series).collect();
    let s = serde_json::to_string_pretty(&rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
