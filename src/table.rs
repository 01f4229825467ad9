//! In-memory location tables and the row views used to narrow them.
//!
//! A [`LocationTable`] is one upstream CSV: key columns (country, state,
//! county, coordinates, ...) followed by one cumulative count per date. Tables
//! are immutable once parsed; filtering produces a [`TableView`] holding row
//! indices into the table.

use crate::models::DateColumn;
use csv::ReaderBuilder;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column `{0}`")]
    MissingColumn(String),
    #[error("table has no date columns")]
    NoDateColumns,
    #[error("row {row}: invalid count {value:?} in column `{column}`")]
    BadCount {
        row: usize,
        column: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    /// One entry per key column; empty cells are `None`.
    pub keys: Vec<Option<String>>,
    /// One entry per date column; empty cells are stored as 0.
    pub counts: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationTable {
    key_columns: Vec<String>,
    dates: Vec<DateColumn>,
    rows: Vec<LocationRow>,
}

/// Parse a count cell. Some revisions of the dataset wrote floats (`12.0`).
fn parse_count(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0);
    }
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i64))
}

impl LocationTable {
    /// Build a table from CSV with a header row.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        let headers = reader.headers()?.clone();

        // (is_date, index into key_columns or dates)
        let mut layout: Vec<(bool, usize)> = Vec::with_capacity(headers.len());
        let mut key_columns = Vec::new();
        let mut dates = Vec::new();
        for h in headers.iter() {
            match DateColumn::parse(h) {
                Some(d) => {
                    layout.push((true, dates.len()));
                    dates.push(d);
                }
                None => {
                    layout.push((false, key_columns.len()));
                    key_columns.push(h.trim().to_string());
                }
            }
        }
        if dates.is_empty() {
            return Err(TableError::NoDateColumns);
        }

        let mut rows = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut keys = vec![None; key_columns.len()];
            let mut counts = vec![0i64; dates.len()];
            for (cell, &(is_date, slot)) in record.iter().zip(layout.iter()) {
                if is_date {
                    counts[slot] = parse_count(cell).ok_or_else(|| TableError::BadCount {
                        row: row_idx + 1,
                        column: dates[slot].label.clone(),
                        value: cell.to_string(),
                    })?;
                } else {
                    let v = cell.trim();
                    if !v.is_empty() {
                        keys[slot] = Some(v.to_string());
                    }
                }
            }
            rows.push(LocationRow { keys, counts });
        }

        Ok(Self {
            key_columns,
            dates,
            rows,
        })
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    pub fn dates(&self) -> &[DateColumn] {
        &self.dates
    }

    pub fn rows(&self) -> &[LocationRow] {
        &self.rows
    }

    /// The final date column, i.e. when the table was last updated.
    pub fn last_date(&self) -> &DateColumn {
        // from_reader rejects tables without dates
        &self.dates[self.dates.len() - 1]
    }

    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.key_columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// A view over every row.
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            rows: (0..self.rows.len()).collect(),
        }
    }
}

/// A subset of the rows of one table.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a LocationTable,
    rows: Vec<usize>,
}

impl<'a> TableView<'a> {
    pub fn table(&self) -> &'a LocationTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a LocationRow> + '_ {
        let table = self.table;
        self.rows.iter().map(move |&i| &table.rows[i])
    }

    /// Key values of `column` for each row in the view (nulls included).
    pub fn keys(&self, column: &str) -> Result<Vec<Option<&'a str>>, TableError> {
        let idx = self.table.column_index(column)?;
        Ok(self.rows().map(|r| r.keys[idx].as_deref()).collect())
    }

    /// Non-null values of `column`, in row order.
    pub fn values(&self, column: &str) -> Result<Vec<&'a str>, TableError> {
        Ok(self.keys(column)?.into_iter().flatten().collect())
    }

    fn retain(&self, column: &str, keep: impl Fn(Option<&str>) -> bool) -> Result<Self, TableError> {
        let idx = self.table.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .copied()
            .filter(|&i| keep(self.table.rows[i].keys[idx].as_deref()))
            .collect();
        Ok(Self {
            table: self.table,
            rows,
        })
    }

    /// Rows whose `column` equals `value` exactly.
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Self, TableError> {
        self.retain(column, |k| k == Some(value))
    }

    /// Rows whose `column` is one of `values`.
    pub fn filter_in<S: AsRef<str>>(&self, column: &str, values: &[S]) -> Result<Self, TableError> {
        self.retain(column, |k| {
            k.is_some_and(|k| values.iter().any(|v| v.as_ref() == k))
        })
    }

    /// Rows whose `column` is null.
    pub fn filter_null(&self, column: &str) -> Result<Self, TableError> {
        self.retain(column, |k| k.is_none())
    }

    /// Narrow by one drill-down level.
    ///
    /// With a value, keep the rows matching it. Without one, keep the single
    /// null-keyed row if there is exactly one (the upstream aggregate row);
    /// otherwise keep the view as it is and let the caller sum every row.
    pub fn narrow(&self, column: &str, value: Option<&str>) -> Result<Self, TableError> {
        match value {
            Some(v) => self.filter_eq(column, v),
            None => {
                let nulls = self.filter_null(column)?;
                if nulls.len() == 1 {
                    Ok(nulls)
                } else {
                    Ok(self.clone())
                }
            }
        }
    }

    /// Sum every date column across the view.
    pub fn sum(&self) -> Vec<i64> {
        let mut out = vec![0i64; self.table.dates.len()];
        for row in self.rows() {
            for (acc, v) in out.iter_mut().zip(row.counts.iter()) {
                *acc += *v;
            }
        }
        out
    }
}
