//! Live download tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use covid19_plotter::{Client, Datasets, Metric, Scope};

#[test]
fn fetch_us_deaths() {
    let table = Client::default().fetch_table(Metric::Deaths, Scope::Us).unwrap();
    assert!(table.key_columns().iter().any(|c| c == "Population"));
    assert!(table.rows().len() > 3000);
}

#[test]
fn fetch_all_tables() {
    let ds = Datasets::fetch(&Client::default()).unwrap();
    let view = ds
        .global(Metric::Confirmed)
        .view()
        .filter_eq(Scope::Global.country_column(), "Germany")
        .unwrap();
    assert!(!view.is_empty());
    assert!(ds.last_updated().date >= chrono::NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
}
