//! Everything the renderer needs to draw one chart: the series plus its texts.

use crate::drilldown::Selection;
use crate::models::{Mode, Transform};
use crate::transform::Series;
use serde::{Deserialize, Serialize};

pub const X_LABEL: &str = "Date";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Series,
}

/// Metric phrase used as the y-axis label, e.g. `Daily Deaths`.
pub fn metric_phrase(mode: Mode) -> String {
    let prefix = match mode.transform {
        Transform::Total => "Total",
        Transform::Daily => "Daily",
    };
    format!("{prefix} {}", mode.metric.description())
}

impl ChartSpec {
    /// `last_updated` is the header of the source table's final date column.
    pub fn new(selection: &Selection, series: Series, last_updated: &str) -> Self {
        let mode = selection.mode;
        let desc = mode.metric.description();
        let phrase = metric_phrase(mode);
        let title = format!("{phrase} ({})", selection.locations().join(", "));
        let last_value = series.values.last().copied().unwrap_or(0);
        let subtitle = match mode.transform {
            Transform::Total => format!("{phrase}: {last_value} | Last Updated: {last_updated}"),
            Transform::Daily => format!("{desc} on {last_updated}: {last_value}"),
        };
        Self {
            title,
            subtitle,
            x_label: X_LABEL.to_string(),
            y_label: phrase,
            series,
        }
    }
}
