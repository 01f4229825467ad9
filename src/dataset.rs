//! The five tables the plotter works from, loaded once at startup.

use crate::api::{Client, table_file_name};
use crate::models::{DateColumn, Metric, Scope};
use crate::table::LocationTable;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tables that exist upstream. There is no US recoveries series.
pub const TABLES: [(Metric, Scope); 5] = [
    (Metric::Confirmed, Scope::Global),
    (Metric::Deaths, Scope::Global),
    (Metric::Recoveries, Scope::Global),
    (Metric::Confirmed, Scope::Us),
    (Metric::Deaths, Scope::Us),
];

#[derive(Debug, Clone)]
pub struct Datasets {
    pub global_confirmed: LocationTable,
    pub global_deaths: LocationTable,
    pub global_recoveries: LocationTable,
    pub us_confirmed: LocationTable,
    pub us_deaths: LocationTable,
}

impl Datasets {
    /// Download every table. Stops at the first failure.
    pub fn fetch(client: &Client) -> Result<Self> {
        Self::load_with(|metric, scope| client.fetch_table(metric, scope))
    }

    /// Read every table from `dir`, using the upstream file names.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Self::load_with(|metric, scope| {
            let path = dir.join(table_file_name(metric, scope));
            log::debug!("reading {}", path.display());
            let file = File::open(&path).with_context(|| format!("open {}", path.display()))?;
            LocationTable::from_reader(BufReader::new(file))
                .with_context(|| format!("parse {}", path.display()))
        })
    }

    fn load_with<F>(mut load: F) -> Result<Self>
    where
        F: FnMut(Metric, Scope) -> Result<LocationTable>,
    {
        Ok(Self {
            global_confirmed: load(Metric::Confirmed, Scope::Global)?,
            global_deaths: load(Metric::Deaths, Scope::Global)?,
            global_recoveries: load(Metric::Recoveries, Scope::Global)?,
            us_confirmed: load(Metric::Confirmed, Scope::Us)?,
            us_deaths: load(Metric::Deaths, Scope::Us)?,
        })
    }

    pub fn global(&self, metric: Metric) -> &LocationTable {
        match metric {
            Metric::Confirmed => &self.global_confirmed,
            Metric::Deaths => &self.global_deaths,
            Metric::Recoveries => &self.global_recoveries,
        }
    }

    /// The US-specific table for `metric`, if upstream publishes one.
    pub fn us(&self, metric: Metric) -> Option<&LocationTable> {
        match metric {
            Metric::Confirmed => Some(&self.us_confirmed),
            Metric::Deaths => Some(&self.us_deaths),
            Metric::Recoveries => None,
        }
    }

    /// Latest final date column across all tables.
    pub fn last_updated(&self) -> &DateColumn {
        [
            &self.global_confirmed,
            &self.global_deaths,
            &self.global_recoveries,
            &self.us_confirmed,
            &self.us_deaths,
        ]
        .into_iter()
        .map(LocationTable::last_date)
        .max_by_key(|d| d.date)
        .unwrap_or_else(|| self.global_confirmed.last_date())
    }
}
