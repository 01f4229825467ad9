//! Small copies of the five upstream tables, written under their real file names.
#![allow(dead_code)]

use covid19_plotter::Datasets;
use covid19_plotter::api::table_file_name;
use covid19_plotter::dataset::TABLES;
use covid19_plotter::models::Scope;
use std::path::Path;

/// 1/21/20 comes before the first reported day and is always dropped.
pub const DATES: &str = "1/21/20,1/22/20,1/23/20,1/24/20,1/25/20,1/26/20,1/27/20,1/28/20,1/29/20,1/30/20,1/31/20";

pub fn global_csv() -> String {
    format!(
        "Province/State,Country/Region,Lat,Long,{DATES}
,France,46.2276,2.2137,0,0,0,0,2,3,3,3,4,5,6
French Guiana,France,3.9339,-53.1258,0,0,0,0,0,0,0,1,1,1,1
Reunion,France,-21.1151,55.5364,0,0,0,0,0,0,0,0,0,0,2
Ontario,Canada,51.2538,-85.3232,0,0,0,0,0,1,1,1,1,1,2
Quebec,Canada,52.9399,-73.5491,0,0,0,0,0,0,0,0,0,1,3
,US,40.0,-100.0,0,1,1,2,2,5,5,6,6,8,8
,\"Korea, South\",35.9078,127.7669,0,1,1,2,2,3,4,4,4,11,12
"
    )
}

const US_ROWS: &[(&str, &str, &str, &str)] = &[
    ("84026161", "Washtenaw", "Michigan", "0,0,0,1,2,4,7,11,16,22,29"),
    ("84026163", "Wayne", "Michigan", "0,0,1,2,4,8,16,32,64,128,256"),
    ("84026103", "Marquette", "Michigan", "0,0,0,0,0,0,0,1,1,2,3"),
    ("84053033", "King", "Washington", "0,1,1,1,2,3,5,8,13,21,34"),
    ("84053053", "Pierce", "Washington", "0,0,0,0,0,1,1,1,2,2,2"),
];

/// US tables; the deaths table carries an extra `Population` column.
pub fn us_csv(with_population: bool) -> String {
    let population = if with_population { "Population," } else { "" };
    let mut out = format!(
        "UID,iso2,iso3,code3,FIPS,Admin2,Province_State,Country_Region,Lat,Long_,Combined_Key,{population}{DATES}\n"
    );
    for &(uid, county, state, counts) in US_ROWS {
        let fips = &uid[3..];
        let population = if with_population { "100000," } else { "" };
        out.push_str(&format!(
            "{uid},US,USA,840,{fips}.0,{county},{state},US,42.0,-84.0,\"{county}, {state}, US\",{population}{counts}\n"
        ));
    }
    out
}

/// Write all five tables into `dir`.
pub fn write_tables(dir: &Path) {
    for (metric, scope) in TABLES {
        let body = match scope {
            Scope::Global => global_csv(),
            Scope::Us => us_csv(metric == covid19_plotter::Metric::Deaths),
        };
        std::fs::write(dir.join(table_file_name(metric, scope)), body).unwrap();
    }
}

pub fn datasets() -> Datasets {
    let dir = tempfile::tempdir().unwrap();
    write_tables(dir.path());
    Datasets::from_dir(dir.path()).unwrap()
}
