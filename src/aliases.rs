//! Static alias tables: short names users type instead of the names the
//! dataset uses.

use std::collections::HashMap;

/// USPS codes for the states, DC and the territories present in the US tables.
const US_STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("MP", "Northern Mariana Islands"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VI", "Virgin Islands"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Common spellings of countries whose dataset name differs.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("USA", "US"),
    ("UNITED STATES", "US"),
    ("UNITED STATES OF AMERICA", "US"),
    ("UK", "United Kingdom"),
    ("GREAT BRITAIN", "United Kingdom"),
    ("SOUTH KOREA", "Korea, South"),
    ("TAIWAN", "Taiwan*"),
    ("CZECH REPUBLIC", "Czechia"),
    ("IVORY COAST", "Cote d'Ivoire"),
];

/// Case-insensitive alias → canonical name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    by_upper: HashMap<String, String>,
}

impl AliasTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            by_upper: pairs
                .into_iter()
                .map(|(alias, name)| (alias.to_uppercase(), name.to_string()))
                .collect(),
        }
    }

    pub fn us_states() -> Self {
        Self::from_pairs(US_STATE_ABBREVIATIONS.iter().copied())
    }

    pub fn countries() -> Self {
        Self::from_pairs(COUNTRY_ALIASES.iter().copied())
    }

    /// Canonical name for `input`, if it is a known alias.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.by_upper
            .get(&input.trim().to_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_upper.is_empty()
    }
}
