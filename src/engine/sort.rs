//! Sort specification and stable record ordering.
//!
//! Sorting is total and deterministic: names compare case-folded with a raw
//! tiebreak (the closest analog to the browser's locale-aware comparison for
//! this dataset), population and area compare numerically. The underlying
//! sort is stable, so records with equal keys keep their prior relative
//! order, and descending order reverses only the key comparison.

use std::cmp::Ordering;

use crate::domain::CountrySummary;

/// The record field a list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Population,
    Area,
}

impl SortKey {
    /// Cycles `Name -> Population -> Area -> Name`, used by the sort
    /// keybinding.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Population,
            Self::Population => Self::Area,
            Self::Area => Self::Name,
        }
    }

    /// Display label for the header and sort controls.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Population => "Population",
            Self::Area => "Area",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flips the direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow glyph shown next to the active sort column.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// A complete sort specification: key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Name ascending, matching the initial state of both original views.
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Compares two records under this specification.
    ///
    /// Equal keys return `Ordering::Equal` so a stable sort preserves input
    /// order for ties in both directions.
    #[must_use]
    pub fn compare(&self, a: &CountrySummary, b: &CountrySummary) -> Ordering {
        let key_order = match self.key {
            SortKey::Name => compare_names(&a.common_name, &b.common_name),
            SortKey::Population => a.population.cmp(&b.population),
            SortKey::Area => a.area.total_cmp(&b.area),
        };

        match self.direction {
            SortDirection::Ascending => key_order,
            SortDirection::Descending => key_order.reverse(),
        }
    }
}

/// Case-folded name comparison with a raw tiebreak.
///
/// Keeps "iceland" and "Iceland" adjacent the way locale-aware comparison
/// does, while staying total over arbitrary strings.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stably sorts `records` in place under `spec`.
pub fn sort_records(records: &mut [CountrySummary], spec: SortSpec) {
    records.sort_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, population: u64, area: f64) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            common_name: name.to_string(),
            population,
            area,
            region: String::new(),
            subregion: None,
            flag_svg: String::new(),
        }
    }

    fn sample() -> Vec<CountrySummary> {
        vec![
            country("BRA", "Brazil", 213_000_000, 8_515_767.0),
            country("ISL", "Iceland", 370_000, 103_000.0),
            country("FRA", "France", 67_000_000, 551_695.0),
        ]
    }

    #[test]
    fn population_ascending_matches_expected_order() {
        let mut records = sample();
        let spec = SortSpec {
            key: SortKey::Population,
            direction: SortDirection::Ascending,
        };
        sort_records(&mut records, spec);

        let names: Vec<&str> = records.iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, vec!["Iceland", "France", "Brazil"]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let mut records = vec![
            country("AAA", "zulu", 0, 0.0),
            country("BBB", "Alpha", 0, 0.0),
            country("CCC", "beta", 0, 0.0),
        ];
        sort_records(&mut records, SortSpec::default());

        let names: Vec<&str> = records.iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zulu"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let spec = SortSpec {
            key: SortKey::Area,
            direction: SortDirection::Descending,
        };
        let mut once = sample();
        sort_records(&mut once, spec);
        let mut twice = once.clone();
        sort_records(&mut twice, spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn ties_preserve_prior_relative_order_in_both_directions() {
        let records = vec![
            country("AAA", "First", 5, 1.0),
            country("BBB", "Second", 5, 1.0),
            country("CCC", "Third", 5, 1.0),
        ];

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut sorted = records.clone();
            sort_records(
                &mut sorted,
                SortSpec {
                    key: SortKey::Population,
                    direction,
                },
            );
            let codes: Vec<&str> = sorted.iter().map(|c| c.code.as_str()).collect();
            assert_eq!(codes, vec!["AAA", "BBB", "CCC"]);
        }
    }
}
