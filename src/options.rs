//! Matching free-text answers against the choices offered at a prompt.

use crate::aliases::AliasTable;
use std::collections::HashSet;

/// Command that lists the current choices.
pub const OPTIONS_COMMAND: &str = "options";

/// Outcome of matching one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty line: keep the whole remaining scope.
    Skip,
    /// A valid choice, in the spelling used by the dataset.
    Selected(String),
    /// The user asked to see every choice.
    ShowOptions,
    Invalid,
}

/// Choices for one prompt, deduplicated case-insensitively and sorted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<String>,
}

impl OptionSet {
    /// Build from raw values. The first spelling of a value wins.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut options: Vec<String> = values
            .into_iter()
            .filter_map(|v| {
                let v = v.as_ref().trim();
                (!v.is_empty() && seen.insert(v.to_lowercase())).then(|| v.to_string())
            })
            .collect();
        options.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Case-insensitive exact lookup, returning the stored spelling.
    pub fn find(&self, input: &str) -> Option<&str> {
        let needle = input.trim().to_lowercase();
        self.iter().find(|o| o.to_lowercase() == needle)
    }

    /// Match one line of input. Aliases are resolved before matching, so an
    /// alias only counts if its canonical name is one of the options.
    pub fn resolve(&self, input: &str, aliases: Option<&AliasTable>) -> Resolution {
        let input = input.trim();
        if input.is_empty() {
            return Resolution::Skip;
        }
        if input.eq_ignore_ascii_case(OPTIONS_COMMAND) {
            return Resolution::ShowOptions;
        }
        let candidate = aliases.and_then(|a| a.resolve(input)).unwrap_or(input);
        match self.find(candidate) {
            Some(o) => Resolution::Selected(o.to_string()),
            None => Resolution::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> OptionSet {
        OptionSet::from_values(["Ohio", "michigan", "Michigan", "", "Alabama"])
    }

    #[test]
    fn dedups_case_insensitively_and_sorts() {
        let o = states();
        assert_eq!(o.iter().collect::<Vec<_>>(), ["Alabama", "michigan", "Ohio"]);
    }

    #[test]
    fn resolves_inputs() {
        let o = OptionSet::from_values(["Michigan", "Ohio"]);
        let a = AliasTable::us_states();
        assert_eq!(o.resolve("", Some(&a)), Resolution::Skip);
        assert_eq!(o.resolve("  ", None), Resolution::Skip);
        assert_eq!(o.resolve("OPTIONS", None), Resolution::ShowOptions);
        assert_eq!(o.resolve("mIcHiGaN", None), Resolution::Selected("Michigan".into()));
        assert_eq!(o.resolve("mi", Some(&a)), Resolution::Selected("Michigan".into()));
        assert_eq!(o.resolve("mi", None), Resolution::Invalid);
        // alias whose state is not offered
        assert_eq!(o.resolve("TX", Some(&a)), Resolution::Invalid);
        assert_eq!(o.resolve("Mich", Some(&a)), Resolution::Invalid);
    }
}
