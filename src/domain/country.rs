//! Country domain models.
//!
//! This module defines the core country types: [`CountrySummary`] (one entry
//! in the browsable list), [`CountryDetail`] (the full record shown on the
//! detail page), and [`CountryCatalog`] (the immutable result of one list
//! fetch). Summaries are never mutated after a fetch; filtering and sorting
//! always produce new derived sequences.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// One entry in the full or filtered country list.
///
/// `code` is the three-letter cca3 identifier and is unique across the full
/// list for the lifetime of one fetch; it keys the detail lookup. `area` is
/// in square kilometres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: String,
    pub common_name: String,
    pub population: u64,
    pub area: f64,
    pub region: String,
    pub subregion: Option<String>,
    pub flag_svg: String,
}

/// A currency entry on the detail page, formatted as "name (symbol)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

impl Currency {
    /// Returns the "name (symbol)" display form used on the detail page.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

/// Full record for a single country, shown on the detail page.
///
/// A superset of [`CountrySummary`]; immutable once fetched and never merged
/// back into the summary list. Optional fields are rendered as a fixed
/// placeholder by the detail view binder rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    pub code: String,
    pub common_name: String,
    pub official_name: String,
    pub population: u64,
    pub area: f64,
    pub region: String,
    pub subregion: Option<String>,
    pub flag_svg: String,
    pub coat_of_arms_svg: Option<String>,
    pub capitals: Vec<String>,
    pub languages: Vec<String>,
    pub currencies: Vec<Currency>,
    pub timezones: Vec<String>,
    pub top_level_domains: Vec<String>,
    /// Calling code assembled from the idd root plus its first suffix, or the
    /// root alone when no suffixes exist.
    pub calling_code: Option<String>,
    pub demonym: Option<String>,
    pub map_url: Option<String>,
}

/// The full unfiltered country list produced by one successful fetch.
///
/// Created once per app session (or per explicit refresh) and never mutated;
/// views only ever filter and sort it into new derived sequences. Tracks when
/// the fetch completed so the header can show data freshness.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryCatalog {
    /// All country summaries, in API response order.
    pub records: Vec<CountrySummary>,

    /// Unix timestamp of the fetch that produced `records`, `None` until the
    /// first fetch completes.
    pub fetched_at: Option<i64>,
}

impl CountryCatalog {
    /// Creates a catalog from a fetch result, stamped with the current time.
    #[must_use]
    pub fn new(records: Vec<CountrySummary>) -> Self {
        Self {
            records,
            fetched_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// Returns whether a fetch has completed yet (even an empty one).
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.fetched_at.is_some()
    }

    /// Returns a human-readable string describing how long ago the catalog
    /// was fetched.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// Returns "never" before the first fetch completes.
    #[must_use]
    pub fn time_ago(&self) -> String {
        let Some(fetched_at) = self.fetched_at else {
            return "never".to_string();
        };

        let now = chrono::Utc::now().timestamp();
        let diff = now - fetched_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(code: &str, name: &str) -> CountrySummary {
        CountrySummary {
            code: code.to_string(),
            common_name: name.to_string(),
            population: 0,
            area: 0.0,
            region: "Europe".to_string(),
            subregion: None,
            flag_svg: String::new(),
        }
    }

    #[test]
    fn catalog_time_ago_before_first_fetch() {
        let catalog = CountryCatalog::default();
        assert!(!catalog.is_loaded());
        assert_eq!(catalog.time_ago(), "never");
    }

    #[test]
    fn catalog_time_ago_formats_by_elapsed_time() {
        let mut catalog = CountryCatalog::new(vec![summary("ISL", "Iceland")]);
        assert_eq!(catalog.time_ago(), "just now");

        catalog.fetched_at = Some(chrono::Utc::now().timestamp() - 300);
        assert_eq!(catalog.time_ago(), "5m ago");

        catalog.fetched_at = Some(chrono::Utc::now().timestamp() - 2 * 3600);
        assert_eq!(catalog.time_ago(), "2h ago");

        catalog.fetched_at = Some(chrono::Utc::now().timestamp() - 3 * 86400);
        assert_eq!(catalog.time_ago(), "3d ago");
    }

    #[test]
    fn currency_display_joins_name_and_symbol() {
        let currency = Currency {
            name: "Euro".to_string(),
            symbol: "€".to_string(),
        };
        assert_eq!(currency.display(), "Euro (€)");
    }
}
