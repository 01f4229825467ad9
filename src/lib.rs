//! covid19_plotter
//!
//! Interactive plotter for the Johns Hopkins CSSE COVID-19 time series.
//! Pairs with the `covid19-plotter` CLI.
//!
//! ### Features
//! - Download the five confirmed/deaths/recovered tables (or read them from a directory)
//! - Drill down country → state/province → region → county at the console
//! - Total or daily series, with a 7-day moving average for daily charts
//! - Generate SVG/PNG line charts; optional summary statistics and CSV/JSON export
//!
//! ### Example
//! ```no_run
//! use covid19_plotter::{Client, Datasets, Metric, Mode, Transform};
//! use covid19_plotter::drilldown::{Selection, country_view};
//! use covid19_plotter::chart::ChartSpec;
//!
//! let datasets = Datasets::fetch(&Client::default())?;
//! let mode = Mode::new(Metric::Deaths, Transform::Daily);
//! let (scope, view) = country_view(&datasets, mode.metric, "France")?;
//! let view = view.narrow(scope.state_column(), None)?;
//! let mut selection = Selection::new(mode);
//! selection.country = Some("France".into());
//! let series = mode.transform.series(&view);
//! let chart = ChartSpec::new(&selection, series, &view.table().last_date().label);
//! covid19_plotter::viz::render(&chart, &Default::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod aliases;
pub mod api;
pub mod chart;
pub mod dataset;
pub mod drilldown;
pub mod models;
pub mod options;
pub mod prompt;
pub mod regions;
pub mod session;
pub mod stats;
pub mod storage;
pub mod table;
pub mod transform;
pub mod viz;

pub use api::Client;
pub use dataset::Datasets;
pub use models::{Metric, Mode, Scope, Transform};
pub use prompt::{Console, Reply};
pub use session::{Output, SaveFormat, Session};
