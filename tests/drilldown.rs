mod common;

use covid19_plotter::chart::ChartSpec;
use covid19_plotter::drilldown::Lookups;
use covid19_plotter::prompt::INVALID_INPUT;
use covid19_plotter::{Console, Datasets, Output, Reply, Session};

/// Feed `input` to one pass of the session; returns the chart (if any) and the console transcript.
fn run_once(datasets: &Datasets, input: &str) -> (Option<ChartSpec>, String) {
    let lookups = Lookups::default();
    let console = Console::new(input.as_bytes(), Vec::new());
    let mut session = Session::new(console, datasets, &lookups, Output::default());
    let chart = match session.next_chart().unwrap() {
        Reply::Value(c) => Some(c),
        Reply::Exit => None,
    };
    let out = String::from_utf8(session.into_console().into_output()).unwrap();
    (chart, out)
}

#[test]
fn us_without_state_sums_every_county() {
    let ds = common::datasets();
    let (chart, _) = run_once(&ds, "1\nUS\n\n");
    let chart = chart.expect("chart");
    assert_eq!(chart.title, "Total Confirmed Cases (US)");
    assert_eq!(chart.series.labels.first().map(String::as_str), Some("1/24/20"));
    assert_eq!(chart.series.values, vec![4, 8, 16, 29, 53, 96, 175, 324]);
    assert_eq!(chart.subtitle, "Total Confirmed Cases: 324 | Last Updated: 1/31/20");
    assert!(chart.series.moving_average.is_none());
}

#[test]
fn michigan_region_and_county_daily_deaths() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "4\nus\nMI\nDetroit\nwashtenaw\n");
    let chart = chart.expect("chart");
    assert_eq!(chart.title, "Daily Deaths (Washtenaw County, Michigan, US)");
    assert_eq!(chart.subtitle, "Deaths on 1/31/20: 7");
    assert_eq!(chart.y_label, "Daily Deaths");
    assert_eq!(chart.series.values, vec![1, 1, 2, 3, 4, 5, 6, 7]);
    let avg = chart.series.moving_average.as_ref().unwrap();
    assert_eq!(avg.len(), chart.series.len());
    assert!(avg[..6].iter().all(Option::is_none));
    assert!((avg[6].unwrap() - 22.0 / 7.0).abs() < 1e-9);
    assert_eq!(avg[7], Some(4.0));
    assert!(out.contains("Which region do you want to view?"));
    assert!(out.contains("Which county do you want to view?"));
}

#[test]
fn state_alias_matches_full_name() {
    let ds = common::datasets();
    let (by_alias, _) = run_once(&ds, "1\nUS\nwa\n\n");
    let (by_name, _) = run_once(&ds, "1\nUS\nWashington\n\n");
    assert_eq!(by_alias.unwrap(), by_name.unwrap());
}

#[test]
fn country_alias_matches_full_name() {
    let ds = common::datasets();
    let (by_alias, _) = run_once(&ds, "1\nSouth Korea\n");
    let (by_name, _) = run_once(&ds, "1\nkorea, south\n");
    let by_alias = by_alias.unwrap();
    assert_eq!(by_alias.title, "Total Confirmed Cases (Korea, South)");
    assert_eq!(by_alias, by_name.unwrap());
}

#[test]
fn region_without_county_sums_the_region() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "1\nUS\nMichigan\nDetroit\n\n");
    let chart = chart.unwrap();
    assert_eq!(chart.title, "Total Confirmed Cases (Detroit Region, Michigan, US)");
    // Washtenaw + Wayne
    assert_eq!(chart.series.values.last(), Some(&285));
    assert!(out.contains("Which county do you want to view?"));
}

#[test]
fn skipped_region_stops_before_county() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "1\nUS\nMichigan\n\n");
    let chart = chart.unwrap();
    assert_eq!(chart.title, "Total Confirmed Cases (Michigan, US)");
    assert_eq!(chart.series.values.last(), Some(&288));
    assert!(!out.contains("Which county do you want to view?"));
}

#[test]
fn states_without_regions_go_straight_to_counties() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "1\nUS\nWashington\nking\n");
    assert_eq!(chart.unwrap().title, "Total Confirmed Cases (King County, Washington, US)");
    assert!(!out.contains("Which region do you want to view?"));
}

#[test]
fn skipped_province_uses_aggregate_row() {
    let ds = common::datasets();
    let (chart, _) = run_once(&ds, "1\nfrance\n\n");
    let chart = chart.unwrap();
    assert_eq!(chart.title, "Total Confirmed Cases (France)");
    assert_eq!(chart.series.values, vec![2, 3, 3, 3, 4, 5, 6]);
    assert_eq!(chart.series.labels[0], "1/25/20");
}

#[test]
fn skipped_province_without_aggregate_row_sums_provinces() {
    let ds = common::datasets();
    let (chart, _) = run_once(&ds, "1\nCanada\n\n");
    assert_eq!(chart.unwrap().series.values, vec![1, 1, 1, 1, 2, 5]);
}

#[test]
fn no_country_is_the_whole_world() {
    let ds = common::datasets();
    let (chart, _) = run_once(&ds, "3\n\n");
    let chart = chart.unwrap();
    assert_eq!(chart.title, "Total Deaths (World)");
    assert_eq!(chart.series.values.last(), Some(&34));
}

#[test]
fn us_recoveries_come_from_the_global_table() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "5\nUS\n");
    let chart = chart.unwrap();
    assert_eq!(chart.title, "Total Recoveries (US)");
    assert_eq!(chart.series.values.last(), Some(&8));
    assert!(!out.contains("Which state/province"));
}

#[test]
fn invalid_mode_reprompts_and_exit_ends() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "7\n\n1\nQUIT \n");
    assert!(chart.is_none());
    assert_eq!(out.matches(INVALID_INPUT).count(), 2);
    assert!(out.contains("Which country/region do you want to view?"));
}

#[test]
fn options_lists_states_then_reprompts() {
    let ds = common::datasets();
    let (chart, out) = run_once(&ds, "1\nUS\nOPTIONS\nOhio\nwashington\n\n");
    assert!(chart.is_some());
    assert!(out.contains("Michigan\nWashington\n"));
    assert_eq!(out.matches(INVALID_INPUT).count(), 1);
}

#[test]
fn end_of_input_is_exit() {
    let ds = common::datasets();
    let (chart, _) = run_once(&ds, "2\nUS\n");
    assert!(chart.is_none());
}
