//! Synchronous client for the **JHU CSSE COVID-19 time series** on GitHub.
//!
//! Every table is a plain CSV file named
//! `time_series_covid19_{confirmed|deaths|recovered}_{global|US}.csv` under one base URL.
//!
//! ### Notes
//! - There is no US recoveries file; callers fall back to the global table.
//! - Failures are not retried. A failed download is a fatal startup error.
//! - Network timeouts use a sane default (60s total) since the US tables are several MB.
//!
//! Typical usage:
//! ```no_run
//! # use covid19_plotter::Client;
//! # use covid19_plotter::models::{Metric, Scope};
//! let client = Client::default();
//! let table = client.fetch_table(Metric::Deaths, Scope::Global)?;
//! println!("last updated {}", table.last_date().label);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::{Metric, Scope};
use crate::table::LocationTable;
use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/csse_covid_19_data/csse_covid_19_time_series";

/// File name of one upstream table.
pub fn table_file_name(metric: Metric, scope: Scope) -> String {
    format!("time_series_covid19_{}_{}.csv", metric.slug(), scope.slug())
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Client {
    /// Client for a mirror of the time series directory.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(60)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("covid19-plotter/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn table_url(&self, metric: Metric, scope: Scope) -> String {
        format!("{}/{}", self.base_url, table_file_name(metric, scope))
    }

    /// Download and parse one table.
    ///
    /// ### Errors
    /// - Network/HTTP error (non-2xx status included)
    /// - CSV decoding error or a file without date columns
    pub fn fetch_table(&self, metric: Metric, scope: Scope) -> Result<LocationTable> {
        let url = self.table_url(metric, scope);
        log::debug!("GET {url}");
        let body = self
            .http
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .with_context(|| format!("GET {url}"))?;
        let table =
            LocationTable::from_reader(body.as_ref()).with_context(|| format!("parse {url}"))?;
        log::debug!(
            "{url}: {} rows, {} dates",
            table.rows().len(),
            table.dates().len()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_upstream_urls() {
        let c = Client::with_base_url("https://example.test/series/");
        assert_eq!(
            c.table_url(Metric::Recoveries, Scope::Global),
            "https://example.test/series/time_series_covid19_recovered_global.csv"
        );
        assert_eq!(
            c.table_url(Metric::Confirmed, Scope::Us),
            "https://example.test/series/time_series_covid19_confirmed_US.csv"
        );
    }
}
