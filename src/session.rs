//! The outer loop: pick a mode, drill down, draw, repeat until `exit`.

use crate::chart::ChartSpec;
use crate::dataset::Datasets;
use crate::drilldown::{Lookups, drill_down};
use crate::prompt::{Console, Reply};
use crate::viz::{self, RenderOptions};
use crate::{stats, storage};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Format for exporting the plotted series next to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    Csv,
    Json,
}

impl SaveFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Csv => "csv",
            SaveFormat::Json => "json",
        }
    }
}

/// What happens to each chart after it is built.
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub render: RenderOptions,
    pub stats: bool,
    pub save: Option<SaveFormat>,
    pub open: bool,
}

pub struct Session<'a, R, W> {
    console: Console<R, W>,
    datasets: &'a Datasets,
    lookups: &'a Lookups,
    output: Output,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        console: Console<R, W>,
        datasets: &'a Datasets,
        lookups: &'a Lookups,
        output: Output,
    ) -> Self {
        Self {
            console,
            datasets,
            lookups,
            output,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Prompt for one chart. `Exit` when the user leaves at any prompt.
    pub fn next_chart(&mut self) -> Result<Reply<ChartSpec>> {
        let Reply::Value(mode) = self.console.choose_mode()? else {
            return Ok(Reply::Exit);
        };
        let Reply::Value((selection, view)) =
            drill_down(&mut self.console, self.datasets, self.lookups, mode)?
        else {
            return Ok(Reply::Exit);
        };
        let series = mode.transform.series(&view);
        let last_updated = &view.table().last_date().label;
        log::debug!("{} points for {:?}", series.len(), selection.locations());
        Ok(Reply::Value(ChartSpec::new(&selection, series, last_updated)))
    }

    /// Write the chart and any extras; returns the chart path.
    pub fn emit(&mut self, chart: &ChartSpec) -> Result<PathBuf> {
        let path = viz::render(chart, &self.output.render)?;
        self.console
            .say(format!("Wrote plot to {}", path.display()))?;

        if self.output.stats {
            let summary = stats::summarize(&chart.series);
            self.console.say(summary.to_string())?;
        }
        if let Some(format) = self.output.save {
            let data_path = path.with_extension(format.extension());
            match format {
                SaveFormat::Csv => storage::save_csv(&chart.series, &data_path)?,
                SaveFormat::Json => storage::save_json(&chart.series, &data_path)?,
            }
            self.console.say(format!(
                "Saved {} rows to {}",
                chart.series.len(),
                data_path.display()
            ))?;
        }
        if self.output.open {
            if let Err(e) = open::that(&path) {
                log::error!("could not open {}: {e}", path.display());
            }
        }
        Ok(path)
    }

    /// Run until the user exits. Returns the number of charts written.
    pub fn run(&mut self) -> Result<usize> {
        let mut written = 0;
        while let Reply::Value(chart) = self.next_chart()? {
            if chart.series.is_empty() {
                self.console.say("No data to plot.")?;
            } else {
                self.emit(&chart)?;
                written += 1;
            }
            self.console.say("")?;
        }
        Ok(written)
    }
}
