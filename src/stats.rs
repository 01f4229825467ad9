use crate::transform::Series;
use serde::{Deserialize, Serialize};

/// Summary statistics for a plotted series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Date label of the first occurrence of `max`.
    pub max_label: Option<String>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub latest: Option<i64>,
    pub latest_label: Option<String>,
}

/// Compute summary statistics over the values of `series`.
pub fn summarize(series: &Series) -> Summary {
    let mut vals = series.values.clone();
    vals.sort_unstable();
    let count = vals.len();
    let min = vals.first().copied();
    let max = vals.last().copied();
    let max_label = max.and_then(|m| {
        let i = series.values.iter().position(|v| *v == m)?;
        series.labels.get(i).cloned()
    });
    let mean = if count > 0 {
        Some(vals.iter().map(|v| *v as f64).sum::<f64>() / count as f64)
    } else { None };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2] as f64)
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) as f64 / 2.0)
    };
    let (latest_label, latest) = match series.last() {
        Some((label, value)) => (Some(label.to_string()), Some(value)),
        None => (None, None),
    };
    Summary { count, min, max, max_label, mean, median, latest, latest_label }
}

fn fmt_opt<T: std::fmt::Display>(v: &Option<T>) -> String {
    v.as_ref().map_or_else(|| "NA".to_string(), |x| x.to_string())
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mean = self.mean.map(|m| format!("{m:.1}"));
        write!(
            f,
            "count={}  min={}  max={} ({})  mean={}  median={}  latest={} ({})",
            self.count,
            fmt_opt(&self.min),
            fmt_opt(&self.max),
            fmt_opt(&self.max_label),
            fmt_opt(&mean),
            fmt_opt(&self.median),
            fmt_opt(&self.latest),
            fmt_opt(&self.latest_label),
        )
    }
}
