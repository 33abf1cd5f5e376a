//! Filter engine: reduces the full country list to matching records.
//!
//! [`CountryFilter`] combines a free-text name query with optional region,
//! subregion, and population-bracket constraints. Filtering is a pure function
//! of its inputs: deterministic, side-effect free, and order preserving (a
//! filtered list keeps the relative order of the input).
//!
//! Facet option lists ([`FacetOptions`]) are derived from the *full unfiltered*
//! catalog, not the currently filtered list, so the available region and
//! subregion choices stay stable while the user narrows results.

use crate::domain::CountrySummary;

/// Population bracket constraint, mapped to half-open numeric ranges.
///
/// `Under1M` is `[0, 1e6)`, `From1MTo10M` is `[1e6, 1e7)`, `From10MTo100M` is
/// `[1e7, 1e8)`, and `Over100M` is `[1e8, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationBracket {
    Under1M,
    From1MTo10M,
    From10MTo100M,
    Over100M,
}

impl PopulationBracket {
    /// All brackets in ascending order, used for cycling through filter
    /// options in the UI.
    pub const ALL: [Self; 4] = [
        Self::Under1M,
        Self::From1MTo10M,
        Self::From10MTo100M,
        Self::Over100M,
    ];

    /// Returns whether `population` falls inside this bracket.
    #[must_use]
    pub fn matches(self, population: u64) -> bool {
        match self {
            Self::Under1M => population < 1_000_000,
            Self::From1MTo10M => (1_000_000..10_000_000).contains(&population),
            Self::From10MTo100M => (10_000_000..100_000_000).contains(&population),
            Self::Over100M => population >= 100_000_000,
        }
    }

    /// Short display label used in the sidebar and filter panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Under1M => "<1M",
            Self::From1MTo10M => "1M-10M",
            Self::From10MTo100M => "10M-100M",
            Self::Over100M => ">100M",
        }
    }
}

/// The combined filter predicate applied to the country list.
///
/// All four constraints are ANDed. An empty query and unset facets match
/// everything, so the default filter is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    /// Free-text name query, matched case-insensitively as a substring of the
    /// common name. Empty matches all.
    pub query: String,

    /// Exact region constraint, `None` matches all.
    pub region: Option<String>,

    /// Exact subregion constraint, `None` matches all.
    pub subregion: Option<String>,

    /// Population bracket constraint, `None` matches all.
    pub population: Option<PopulationBracket>,
}

impl CountryFilter {
    /// Returns whether any constraint is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.region.is_some()
            || self.subregion.is_some()
            || self.population.is_some()
    }

    /// Resets every constraint to its match-all default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether a single record passes all active constraints.
    #[must_use]
    pub fn matches(&self, country: &CountrySummary) -> bool {
        let name_match = self.query.is_empty()
            || country
                .common_name
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        let region_match = self
            .region
            .as_ref()
            .map_or(true, |region| &country.region == region);

        let subregion_match = self
            .subregion
            .as_ref()
            .map_or(true, |subregion| country.subregion.as_ref() == Some(subregion));

        let population_match = self
            .population
            .map_or(true, |bracket| bracket.matches(country.population));

        name_match && region_match && subregion_match && population_match
    }

    /// Applies the filter to a record list, preserving relative order.
    #[must_use]
    pub fn apply(&self, records: &[CountrySummary]) -> Vec<CountrySummary> {
        let _span = tracing::debug_span!(
            "apply_filter",
            total = records.len(),
            query_len = self.query.len(),
            region = ?self.region,
            subregion = ?self.subregion,
            population = ?self.population,
        )
        .entered();

        let filtered: Vec<CountrySummary> = records
            .iter()
            .filter(|country| self.matches(country))
            .cloned()
            .collect();

        tracing::debug!(filtered_count = filtered.len(), "filter applied");
        filtered
    }
}

/// Distinct region and subregion values available as filter facets.
///
/// Derived from the full unfiltered catalog once per fetch; sorted
/// alphabetically so cycling through options is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub regions: Vec<String>,
    pub subregions: Vec<String>,
}

impl FacetOptions {
    /// Collects the distinct non-empty region and subregion values.
    #[must_use]
    pub fn from_records(records: &[CountrySummary]) -> Self {
        let mut regions: Vec<String> = records
            .iter()
            .map(|country| country.region.clone())
            .filter(|region| !region.is_empty())
            .collect();
        regions.sort();
        regions.dedup();

        let mut subregions: Vec<String> = records
            .iter()
            .filter_map(|country| country.subregion.clone())
            .filter(|subregion| !subregion.is_empty())
            .collect();
        subregions.sort();
        subregions.dedup();

        Self {
            regions,
            subregions,
        }
    }
}

/// Advances an optional facet value through `None -> options[0] -> ... -> None`.
///
/// Shared by the region, subregion, and population cycle handlers.
pub fn cycle_option<T: Clone + PartialEq>(current: &Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let position = options.iter().position(|option| option == value);
            position.and_then(|index| options.get(index + 1)).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, population: u64, region: &str, subregion: Option<&str>) -> CountrySummary {
        CountrySummary {
            code: name[..3.min(name.len())].to_uppercase(),
            common_name: name.to_string(),
            population,
            area: 0.0,
            region: region.to_string(),
            subregion: subregion.map(str::to_string),
            flag_svg: String::new(),
        }
    }

    fn sample_records() -> Vec<CountrySummary> {
        vec![
            country("Brazil", 213_000_000, "Americas", Some("South America")),
            country("Iceland", 370_000, "Europe", Some("Northern Europe")),
            country("France", 67_000_000, "Europe", Some("Western Europe")),
        ]
    }

    #[test]
    fn default_filter_matches_everything_in_order() {
        let records = sample_records();
        let filtered = CountryFilter::default().apply(&records);
        assert_eq!(filtered, records);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let records = sample_records();
        let filter = CountryFilter {
            query: "RAN".to_string(),
            ..CountryFilter::default()
        };
        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].common_name, "France");
    }

    #[test]
    fn population_brackets_use_half_open_ranges() {
        let records = sample_records();

        let under = CountryFilter {
            population: Some(PopulationBracket::Under1M),
            ..CountryFilter::default()
        };
        let names: Vec<String> = under
            .apply(&records)
            .into_iter()
            .map(|c| c.common_name)
            .collect();
        assert_eq!(names, vec!["Iceland".to_string()]);

        let over = CountryFilter {
            population: Some(PopulationBracket::Over100M),
            ..CountryFilter::default()
        };
        let over_names: Vec<String> = over
            .apply(&records)
            .into_iter()
            .map(|c| c.common_name)
            .collect();
        assert_eq!(over_names, vec!["Brazil".to_string()]);
    }

    #[test]
    fn bracket_boundaries_are_exact() {
        assert!(PopulationBracket::Under1M.matches(999_999));
        assert!(!PopulationBracket::Under1M.matches(1_000_000));
        assert!(PopulationBracket::From1MTo10M.matches(1_000_000));
        assert!(!PopulationBracket::From1MTo10M.matches(10_000_000));
        assert!(PopulationBracket::From10MTo100M.matches(10_000_000));
        assert!(!PopulationBracket::From10MTo100M.matches(100_000_000));
        assert!(PopulationBracket::Over100M.matches(100_000_000));
    }

    #[test]
    fn predicates_are_conjoined_and_order_preserved() {
        let records = sample_records();
        let filter = CountryFilter {
            region: Some("Europe".to_string()),
            ..CountryFilter::default()
        };
        let filtered = filter.apply(&records);

        // Both European records survive, in their original relative order,
        // and every survivor passes the active predicate.
        let names: Vec<String> = filtered.iter().map(|c| c.common_name.clone()).collect();
        assert_eq!(names, vec!["Iceland".to_string(), "France".to_string()]);
        assert!(filtered.iter().all(|c| filter.matches(c)));
        assert!(records
            .iter()
            .filter(|c| filter.matches(c))
            .all(|c| filtered.contains(c)));
    }

    #[test]
    fn facets_come_from_full_list_sorted_and_deduplicated() {
        let mut records = sample_records();
        records.push(country("Germany", 83_000_000, "Europe", Some("Western Europe")));
        records.push(country("Atlantis", 0, "", None));

        let facets = FacetOptions::from_records(&records);
        assert_eq!(facets.regions, vec!["Americas".to_string(), "Europe".to_string()]);
        assert_eq!(
            facets.subregions,
            vec![
                "Northern Europe".to_string(),
                "South America".to_string(),
                "Western Europe".to_string(),
            ]
        );
    }

    #[test]
    fn cycle_option_walks_through_options_and_wraps_to_none() {
        let options = vec!["a".to_string(), "b".to_string()];
        let first = cycle_option(&None, &options);
        assert_eq!(first, Some("a".to_string()));
        let second = cycle_option(&first, &options);
        assert_eq!(second, Some("b".to_string()));
        assert_eq!(cycle_option(&second, &options), None);
    }
}
