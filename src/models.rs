use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header format used by the date columns of the JHU CSSE time series (`3/9/23`).
pub const DATE_HEADER_FORMAT: &str = "%m/%d/%y";

/// Which counter a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Confirmed,
    Deaths,
    Recoveries,
}

impl Metric {
    /// Name used in the upstream file names (`time_series_covid19_{slug}_{scope}.csv`).
    pub fn slug(self) -> &'static str {
        match self {
            Metric::Confirmed => "confirmed",
            Metric::Deaths => "deaths",
            Metric::Recoveries => "recovered",
        }
    }

    /// Human description used in chart titles.
    pub fn description(self) -> &'static str {
        match self {
            Metric::Confirmed => "Confirmed Cases",
            Metric::Deaths => "Deaths",
            Metric::Recoveries => "Recoveries",
        }
    }
}

/// How the summed series is turned into plotted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    /// Cumulative counts as published.
    Total,
    /// Day-over-day changes plus a trailing moving average.
    Daily,
}

/// Reporting mode picked at the first prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mode {
    pub metric: Metric,
    pub transform: Transform,
}

impl Mode {
    /// Menu order; the menu digit of a mode is its index plus one.
    pub const ALL: [Mode; 6] = [
        Mode::new(Metric::Confirmed, Transform::Total),
        Mode::new(Metric::Confirmed, Transform::Daily),
        Mode::new(Metric::Deaths, Transform::Total),
        Mode::new(Metric::Deaths, Transform::Daily),
        Mode::new(Metric::Recoveries, Transform::Total),
        Mode::new(Metric::Recoveries, Transform::Daily),
    ];

    pub const fn new(metric: Metric, transform: Transform) -> Self {
        Self { metric, transform }
    }

    /// Parse a menu entry such as `"3"`.
    pub fn from_menu_entry(entry: &str) -> Option<Mode> {
        let n = entry.trim().parse::<usize>().ok()?;
        n.checked_sub(1).and_then(|i| Mode::ALL.get(i)).copied()
    }

    pub fn menu_label(self) -> &'static str {
        match (self.transform, self.metric) {
            (Transform::Total, Metric::Confirmed) => "Total confirmed",
            (Transform::Daily, Metric::Confirmed) => "New confirmed",
            (Transform::Total, Metric::Deaths) => "Total deaths",
            (Transform::Daily, Metric::Deaths) => "New deaths",
            (Transform::Total, Metric::Recoveries) => "Total recoveries",
            (Transform::Daily, Metric::Recoveries) => "New recoveries",
        }
    }
}

/// Geographic scope of a table. Also decides which key columns the drill-down
/// walks and whether the region level is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Global,
    Us,
}

impl Scope {
    pub fn slug(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Us => "US",
        }
    }

    pub fn country_column(self) -> &'static str {
        match self {
            Scope::Global => "Country/Region",
            Scope::Us => "Country_Region",
        }
    }

    pub fn state_column(self) -> &'static str {
        match self {
            Scope::Global => "Province/State",
            Scope::Us => "Province_State",
        }
    }

    /// County level only exists in the US tables.
    pub fn county_column(self) -> Option<&'static str> {
        match self {
            Scope::Global => None,
            Scope::Us => Some("Admin2"),
        }
    }

    pub fn has_regions(self) -> bool {
        matches!(self, Scope::Us)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One date column of a table: the parsed date and the header exactly as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    pub date: NaiveDate,
    pub label: String,
}

impl DateColumn {
    /// Returns `None` for headers that are not dates (key columns).
    pub fn parse(header: &str) -> Option<Self> {
        let label = header.trim();
        NaiveDate::parse_from_str(label, DATE_HEADER_FORMAT)
            .ok()
            .map(|date| Self {
                date,
                label: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_entries_map_to_modes() {
        assert_eq!(
            Mode::from_menu_entry("1"),
            Some(Mode::new(Metric::Confirmed, Transform::Total))
        );
        assert_eq!(
            Mode::from_menu_entry(" 6 "),
            Some(Mode::new(Metric::Recoveries, Transform::Daily))
        );
        assert_eq!(Mode::from_menu_entry("0"), None);
        assert_eq!(Mode::from_menu_entry("7"), None);
        assert_eq!(Mode::from_menu_entry("12"), None);
        assert_eq!(Mode::from_menu_entry(""), None);
    }

    #[test]
    fn date_headers_parse_and_keys_do_not() {
        let d = DateColumn::parse("3/9/23").unwrap();
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2023, 3, 9).unwrap());
        assert_eq!(d.label, "3/9/23");
        assert!(DateColumn::parse("Province/State").is_none());
        assert!(DateColumn::parse("Lat").is_none());
    }
}
