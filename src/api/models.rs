//! Raw REST Countries response shapes.
//!
//! These types mirror the subset of the REST Countries v3.1 JSON the app
//! consumes, kept separate from the domain models so wire-format quirks
//! (nested `name` objects, keyed language/currency maps, optional images)
//! stay at the API boundary. Conversion into [`CountrySummary`] and
//! [`CountryDetail`] happens here and nowhere else.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{CountryDetail, CountrySummary, Currency};

/// One country object as returned by `/all` and `/alpha/{code}`.
///
/// Every field beyond `name` and `cca3` is optional or defaulted: records in
/// the wild omit areas, subregions, and most of the detail extras, and a
/// missing field must never fail deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub name: RawName,
    pub cca3: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub region: String,
    pub subregion: Option<String>,
    #[serde(default)]
    pub flags: RawImageSet,
    #[serde(rename = "coatOfArms", default)]
    pub coat_of_arms: RawImageSet,
    pub capital: Option<Vec<String>>,
    /// Language code -> language name.
    pub languages: Option<BTreeMap<String, String>>,
    /// Currency code -> name/symbol pair.
    pub currencies: Option<BTreeMap<String, RawCurrency>>,
    pub timezones: Option<Vec<String>>,
    pub tld: Option<Vec<String>>,
    pub idd: Option<RawIdd>,
    pub demonyms: Option<RawDemonyms>,
    pub maps: Option<RawMaps>,
}

/// Nested `name` object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Image reference set (`flags`, `coatOfArms`). May be an empty object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageSet {
    pub svg: Option<String>,
}

impl RawImageSet {
    /// The SVG reference, treating an empty string as absent.
    fn svg_ref(&self) -> Option<String> {
        self.svg.clone().filter(|svg| !svg.is_empty())
    }
}

/// One currency value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// International direct dialing block.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIdd {
    #[serde(default)]
    pub root: String,
    pub suffixes: Option<Vec<String>>,
}

impl RawIdd {
    /// Assembles the display calling code: root plus the first suffix when
    /// present, the root alone otherwise. An empty root yields `None`.
    fn calling_code(&self) -> Option<String> {
        if self.root.is_empty() {
            return None;
        }
        let suffix = self
            .suffixes
            .as_ref()
            .and_then(|suffixes| suffixes.first())
            .cloned()
            .unwrap_or_default();
        Some(format!("{}{}", self.root, suffix))
    }
}

/// Demonym forms, keyed by language; only the English male form is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDemonyms {
    pub eng: Option<RawDemonym>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDemonym {
    #[serde(default)]
    pub m: String,
}

/// Map links; only the Google Maps URL is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMaps {
    #[serde(rename = "googleMaps")]
    pub google_maps: Option<String>,
}

impl RawCountry {
    /// Projects the list-view subset of the record.
    #[must_use]
    pub fn into_summary(self) -> CountrySummary {
        CountrySummary {
            code: self.cca3,
            common_name: self.name.common,
            population: self.population,
            area: self.area,
            region: self.region,
            subregion: self.subregion.filter(|subregion| !subregion.is_empty()),
            flag_svg: self.flags.svg_ref().unwrap_or_default(),
        }
    }

    /// Projects the full detail-page record.
    #[must_use]
    pub fn into_detail(self) -> CountryDetail {
        let calling_code = self.idd.as_ref().and_then(RawIdd::calling_code);
        let demonym = self
            .demonyms
            .and_then(|demonyms| demonyms.eng)
            .map(|demonym| demonym.m)
            .filter(|demonym| !demonym.is_empty());
        let map_url = self.maps.and_then(|maps| maps.google_maps);

        CountryDetail {
            code: self.cca3,
            common_name: self.name.common,
            official_name: self.name.official,
            population: self.population,
            area: self.area,
            region: self.region,
            subregion: self.subregion.filter(|subregion| !subregion.is_empty()),
            flag_svg: self.flags.svg_ref().unwrap_or_default(),
            coat_of_arms_svg: self.coat_of_arms.svg_ref(),
            capitals: self.capital.unwrap_or_default(),
            languages: self
                .languages
                .map(|languages| languages.into_values().collect())
                .unwrap_or_default(),
            currencies: self
                .currencies
                .map(|currencies| {
                    currencies
                        .into_values()
                        .map(|currency| Currency {
                            name: currency.name,
                            symbol: currency.symbol,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            timezones: self.timezones.unwrap_or_default(),
            top_level_domains: self.tld.unwrap_or_default(),
            calling_code,
            demonym,
            map_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICELAND: &str = r#"{
        "name": { "common": "Iceland", "official": "Iceland" },
        "cca3": "ISL",
        "population": 366425,
        "area": 103000.0,
        "region": "Europe",
        "subregion": "Northern Europe",
        "flags": { "svg": "https://flagcdn.com/is.svg" },
        "coatOfArms": { "svg": "https://mainfacts.com/media/images/coats_of_arms/is.svg" },
        "capital": ["Reykjavik"],
        "languages": { "isl": "Icelandic" },
        "currencies": { "ISK": { "name": "Icelandic króna", "symbol": "kr" } },
        "timezones": ["UTC"],
        "tld": [".is"],
        "idd": { "root": "+3", "suffixes": ["54"] },
        "demonyms": { "eng": { "f": "Icelander", "m": "Icelander" } },
        "maps": { "googleMaps": "https://goo.gl/maps/WxFWSQuc3oamNxoE6" }
    }"#;

    #[test]
    fn full_record_converts_to_summary_and_detail() {
        let raw: RawCountry = serde_json::from_str(ICELAND).unwrap();

        let summary = raw.clone().into_summary();
        assert_eq!(summary.code, "ISL");
        assert_eq!(summary.common_name, "Iceland");
        assert_eq!(summary.population, 366_425);
        assert_eq!(summary.subregion.as_deref(), Some("Northern Europe"));
        assert_eq!(summary.flag_svg, "https://flagcdn.com/is.svg");

        let detail = raw.into_detail();
        assert_eq!(detail.capitals, vec!["Reykjavik".to_string()]);
        assert_eq!(detail.languages, vec!["Icelandic".to_string()]);
        assert_eq!(detail.currencies[0].display(), "Icelandic króna (kr)");
        assert_eq!(detail.calling_code.as_deref(), Some("+354"));
        assert_eq!(detail.demonym.as_deref(), Some("Icelander"));
        assert_eq!(detail.top_level_domains, vec![".is".to_string()]);
    }

    #[test]
    fn minimal_record_deserializes_with_defaults() {
        let raw: RawCountry = serde_json::from_str(
            r#"{ "name": { "common": "Atlantis" }, "cca3": "ATL" }"#,
        )
        .unwrap();

        let detail = raw.into_detail();
        assert_eq!(detail.common_name, "Atlantis");
        assert_eq!(detail.population, 0);
        assert!(detail.subregion.is_none());
        assert!(detail.capitals.is_empty());
        assert!(detail.languages.is_empty());
        assert!(detail.currencies.is_empty());
        assert!(detail.calling_code.is_none());
        assert!(detail.demonym.is_none());
        assert!(detail.coat_of_arms_svg.is_none());
        assert!(detail.flag_svg.is_empty());
    }

    #[test]
    fn calling_code_uses_root_alone_without_suffixes() {
        let idd = RawIdd {
            root: "+1".to_string(),
            suffixes: None,
        };
        assert_eq!(idd.calling_code().as_deref(), Some("+1"));

        let empty = RawIdd {
            root: String::new(),
            suffixes: Some(vec!["54".to_string()]),
        };
        assert!(empty.calling_code().is_none());
    }

    #[test]
    fn empty_coat_of_arms_object_maps_to_absent() {
        let raw: RawCountry = serde_json::from_str(
            r#"{ "name": { "common": "X" }, "cca3": "XXX", "coatOfArms": {} }"#,
        )
        .unwrap();
        assert!(raw.into_detail().coat_of_arms_svg.is_none());
    }
}
