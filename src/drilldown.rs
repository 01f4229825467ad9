//! The interactive filter chain: country → state/province → region → county.
//!
//! Each level offers the values still present in the current view, narrows
//! the view by the answer, and the chain stops once a single row is left or a
//! level is skipped.

use crate::aliases::AliasTable;
use crate::dataset::Datasets;
use crate::models::{Metric, Mode, Scope};
use crate::options::OptionSet;
use crate::prompt::{Console, Reply};
use crate::regions::RegionMap;
use crate::table::TableView;
use anyhow::Result;
use std::io::{BufRead, Write};

const COUNTRY_PROMPT: &str = "Which country/region do you want to view? (Just press ENTER to see the whole world, or type OPTIONS to see all available options)";
const STATE_PROMPT: &str = "Which state/province do you want to view? (Just press ENTER to see all states, or type OPTIONS to see all available options)";
const REGION_PROMPT: &str = "Which region do you want to view? (Just press ENTER to see all regions, or type OPTIONS to see all available options)";
const COUNTY_PROMPT: &str = "Which county do you want to view? (Just press ENTER to see all counties, or type OPTIONS to see all available options)";

/// Country name used by the dataset for the United States.
pub const US: &str = "US";

/// Label used when no country is chosen.
pub const WORLD: &str = "World";

/// Read-only lookup data consulted while drilling down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookups {
    pub country_aliases: AliasTable,
    pub state_aliases: AliasTable,
    pub regions: RegionMap,
}

impl Default for Lookups {
    fn default() -> Self {
        Self {
            country_aliases: AliasTable::countries(),
            state_aliases: AliasTable::us_states(),
            regions: RegionMap::builtin(),
        }
    }
}

/// Choices made during one pass through the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub mode: Mode,
    pub scope: Scope,
    pub country: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
    pub county: Option<String>,
}

impl Selection {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            scope: Scope::Global,
            country: None,
            state: None,
            region: None,
            county: None,
        }
    }

    /// Locations from specific to general, e.g. `["Washtenaw County", "Michigan", "US"]`.
    pub fn locations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(county) = &self.county {
            out.push(format!("{county} County"));
        } else if let Some(region) = &self.region {
            out.push(format!("{region} Region"));
        }
        out.extend(self.state.iter().cloned());
        match &self.country {
            Some(country) => out.push(country.clone()),
            None => out.push(WORLD.to_string()),
        }
        out
    }
}

/// Options for a key column of the current view.
fn column_options(view: &TableView<'_>, column: &str) -> Result<OptionSet> {
    Ok(OptionSet::from_values(view.values(column)?))
}

/// Starting table for `country`: the US tables when they exist for the
/// metric, otherwise the global table filtered by country.
pub fn country_view<'a>(
    datasets: &'a Datasets,
    metric: Metric,
    country: &str,
) -> Result<(Scope, TableView<'a>)> {
    if country == US {
        if let Some(us) = datasets.us(metric) {
            return Ok((Scope::Us, us.view()));
        }
    }
    let view = datasets
        .global(metric)
        .view()
        .filter_eq(Scope::Global.country_column(), country)?;
    Ok((Scope::Global, view))
}

/// Walk the chain for `mode`. Returns the selection and the narrowed view.
pub fn drill_down<'a, R, W>(
    console: &mut Console<R, W>,
    datasets: &'a Datasets,
    lookups: &Lookups,
    mode: Mode,
) -> Result<Reply<(Selection, TableView<'a>)>>
where
    R: BufRead,
    W: Write,
{
    let mut selection = Selection::new(mode);
    let global = datasets.global(mode.metric).view();

    let countries = column_options(&global, Scope::Global.country_column())?;
    let Reply::Value(country) =
        console.choose(COUNTRY_PROMPT, &countries, Some(&lookups.country_aliases))?
    else {
        return Ok(Reply::Exit);
    };
    let Some(country) = country else {
        log::debug!("no country chosen, summing {} rows", global.len());
        return Ok(Reply::Value((selection, global)));
    };

    let (scope, mut view) = country_view(datasets, mode.metric, &country)?;
    selection.scope = scope;
    selection.country = Some(country);
    log::debug!("{} scope, {} rows", scope, view.len());
    if view.len() <= 1 {
        return Ok(Reply::Value((selection, view)));
    }

    let state_column = scope.state_column();
    let states = column_options(&view, state_column)?;
    let state_aliases = (scope == Scope::Us).then_some(&lookups.state_aliases);
    let Reply::Value(state) = console.choose(STATE_PROMPT, &states, state_aliases)? else {
        return Ok(Reply::Exit);
    };
    view = view.narrow(state_column, state.as_deref())?;
    log::debug!("state {:?}: {} rows", state, view.len());
    selection.state = state;
    let Some(state) = selection.state.clone() else {
        return Ok(Reply::Value((selection, view)));
    };
    let Some(county_column) = scope.county_column() else {
        return Ok(Reply::Value((selection, view)));
    };

    let state_regions = scope
        .has_regions()
        .then(|| lookups.regions.regions(&state))
        .flatten();
    if let Some(regions) = state_regions {
        if view.len() > 1 {
            let options = OptionSet::from_values(regions.keys());
            let Reply::Value(region) = console.choose(REGION_PROMPT, &options, None)? else {
                return Ok(Reply::Exit);
            };
            if let Some(counties) = region.as_deref().and_then(|r| regions.get(r)) {
                view = view.filter_in(county_column, counties.as_slice())?;
                log::debug!("region {:?}: {} rows", region, view.len());
            }
            selection.region = region;
        }
    }

    let county_allowed = state_regions.is_none() || selection.region.is_some();
    if view.len() > 1 && county_allowed {
        let counties = column_options(&view, county_column)?;
        let Reply::Value(county) = console.choose(COUNTY_PROMPT, &counties, None)? else {
            return Ok(Reply::Exit);
        };
        view = view.narrow(county_column, county.as_deref())?;
        log::debug!("county {:?}: {} rows", county, view.len());
        selection.county = county;
    }

    Ok(Reply::Value((selection, view)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transform;

    #[test]
    fn locations_go_from_specific_to_general() {
        let mut s = Selection::new(Mode::new(Metric::Confirmed, Transform::Total));
        assert_eq!(s.locations(), ["World"]);
        s.country = Some("US".into());
        s.state = Some("Michigan".into());
        s.region = Some("Detroit".into());
        assert_eq!(s.locations(), ["Detroit Region", "Michigan", "US"]);
        s.county = Some("Washtenaw".into());
        assert_eq!(s.locations(), ["Washtenaw County", "Michigan", "US"]);
    }
}
