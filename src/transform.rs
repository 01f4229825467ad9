//! Turning a filtered table into the series that gets plotted.

use crate::models::{DateColumn, Transform};
use crate::table::TableView;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Window of the moving average drawn over daily values.
pub const MOVING_AVERAGE_WINDOW: usize = 7;

/// Share of the series maximum that marks the first plotted day.
pub const STARTING_DAY_THRESHOLD: f64 = 0.01;

/// First day the JHU CSSE collection has data for.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 22).expect("valid date")
}

/// Plotted values, one per date label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    /// Only present for daily series; `None` until a full window is available.
    pub moving_average: Option<Vec<Option<f64>>>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last label and value.
    pub fn last(&self) -> Option<(&str, i64)> {
        Some((self.labels.last()?.as_str(), *self.values.last()?))
    }
}

/// First differences: `out[0] = values[0]`, `out[i] = values[i] - values[i - 1]`.
pub fn daily_values(values: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(values.len());
    if let Some(&first) = values.first() {
        out.push(first);
    }
    out.extend(values.windows(2).map(|w| w[1] - w[0]));
    out
}

/// Trailing mean over `window` points; `None` until `window` points are available.
pub fn moving_average(values: &[i64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0i64;
    for (i, v) in values.iter().enumerate() {
        sum += v;
        if i >= window {
            sum -= values[i - window];
        }
        out.push((i + 1 >= window).then(|| sum as f64 / window as f64));
    }
    out
}

/// Index of the first value above 1% of the maximum; 0 if none is.
pub fn starting_index(values: &[i64]) -> usize {
    let Some(&max) = values.iter().max() else {
        return 0;
    };
    let threshold = max as f64 * STARTING_DAY_THRESHOLD;
    values
        .iter()
        .position(|&v| v as f64 > threshold)
        .unwrap_or(0)
}

impl Transform {
    /// Build the plotted series from cumulative `totals` aligned with `dates`.
    ///
    /// Dates before [`earliest_date`] are dropped first; the plotted range then
    /// starts at the first date exceeding 1% of the transformed maximum.
    pub fn apply(self, dates: &[DateColumn], totals: &[i64]) -> Series {
        let first = dates
            .iter()
            .position(|d| d.date >= earliest_date())
            .unwrap_or(dates.len());
        let dates = &dates[first..];
        let totals = &totals[first.min(totals.len())..];

        let values = match self {
            Transform::Total => totals.to_vec(),
            Transform::Daily => daily_values(totals),
        };
        let start = starting_index(&values);
        let values = values[start..].to_vec();
        let labels = dates
            .iter()
            .skip(start)
            .take(values.len())
            .map(|d| d.label.clone())
            .collect();
        let moving_average = match self {
            Transform::Total => None,
            Transform::Daily => Some(moving_average(&values, MOVING_AVERAGE_WINDOW)),
        };

        Series {
            labels,
            values,
            moving_average,
        }
    }

    /// Sum the rows of `view` and transform the result.
    pub fn series(self, view: &TableView<'_>) -> Series {
        self.apply(view.table().dates(), &view.sum())
    }
}
