//! Named groups of counties inside a US state.

use std::collections::BTreeMap;

const MICHIGAN_REGIONS: &[(&str, &[&str])] = &[
    (
        "Detroit",
        &[
            "Genesee", "Lapeer", "Livingston", "Macomb", "Monroe", "Oakland", "St. Clair",
            "Washtenaw", "Wayne",
        ],
    ),
    (
        "Grand Rapids",
        &[
            "Clare", "Ionia", "Isabella", "Kent", "Lake", "Mason", "Mecosta", "Montcalm",
            "Muskegon", "Newaygo", "Oceana", "Osceola", "Ottawa",
        ],
    ),
    (
        "Kalamazoo",
        &[
            "Allegan", "Barry", "Berrien", "Branch", "Calhoun", "Cass", "Kalamazoo",
            "St. Joseph", "Van Buren",
        ],
    ),
    (
        "Saginaw",
        &[
            "Alcona", "Arenac", "Bay", "Gladwin", "Huron", "Iosco", "Midland", "Ogemaw",
            "Oscoda", "Saginaw", "Sanilac", "Tuscola",
        ],
    ),
    (
        "Lansing",
        &["Clinton", "Eaton", "Gratiot", "Ingham", "Shiawassee"],
    ),
    (
        "Traverse City",
        &[
            "Alpena", "Antrim", "Benzie", "Charlevoix", "Cheboygan", "Crawford", "Emmet",
            "Grand Traverse", "Kalkaska", "Leelanau", "Manistee", "Missaukee", "Montmorency",
            "Otsego", "Presque Isle", "Roscommon", "Wexford",
        ],
    ),
    ("Jackson", &["Hillsdale", "Jackson", "Lenawee"]),
    (
        "Upper Peninsula",
        &[
            "Alger", "Baraga", "Chippewa", "Delta", "Dickinson", "Gogebic", "Houghton", "Iron",
            "Keweenaw", "Luce", "Mackinac", "Marquette", "Menominee", "Ontonagon",
            "Schoolcraft",
        ],
    ),
];

/// state → region → counties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    states: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in map (Michigan regions).
    pub fn builtin() -> Self {
        let mut map = Self::new();
        for (region, counties) in MICHIGAN_REGIONS {
            map.insert("Michigan", region, counties.iter().copied());
        }
        map
    }

    pub fn insert<'a>(
        &mut self,
        state: &str,
        region: &str,
        counties: impl IntoIterator<Item = &'a str>,
    ) {
        self.states
            .entry(state.to_string())
            .or_default()
            .insert(region.to_string(), counties.into_iter().map(str::to_string).collect());
    }

    /// Regions defined for `state`, if any.
    pub fn regions(&self, state: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.states.get(state)
    }

    pub fn counties(&self, state: &str, region: &str) -> Option<&[String]> {
        self.states
            .get(state)
            .and_then(|r| r.get(region))
            .map(Vec::as_slice)
    }
}
