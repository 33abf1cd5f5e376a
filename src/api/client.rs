//! REST Countries API client.
//!
//! Two thin GET wrappers over the public REST Countries v3.1 endpoints, with
//! the failure policy applied at this boundary: any transport or decode
//! failure is logged and converted into an empty list or an absent detail.
//! Nothing downstream of this module ever observes a network error.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::api::models::RawCountry;
use crate::domain::error::Result;
use crate::domain::{CountryDetail, CountrySummary};

/// Default API base URL.
const API_BASE_URL: &str = "https://restcountries.com/v3.1";

/// HTTP request timeout; expiry surfaces as an ordinary fetch failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking client for the country record source.
///
/// Designed to live on the background fetch worker thread; both fetch
/// operations block for up to [`REQUEST_TIMEOUT`].
pub struct CountryApi {
    client: Client,
    base_url: String,
}

impl CountryApi {
    /// Creates a client against the default API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Creates a client against a custom base URL (configuration override).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the full country list.
    ///
    /// On any failure returns an empty list rather than propagating the
    /// error; the worst downstream outcome is an empty grid or table.
    #[must_use]
    pub fn fetch_all_countries(&self) -> Vec<CountrySummary> {
        let _span = tracing::info_span!("fetch_all_countries").entered();

        match self.request_all() {
            Ok(raw) => {
                tracing::info!(count = raw.len(), "country list fetched");
                raw.into_iter().map(RawCountry::into_summary).collect()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch country list");
                Vec::new()
            }
        }
    }

    /// Fetches the full record for one country by its cca3 code.
    ///
    /// A malformed code (anything but exactly three ASCII letters) is
    /// short-circuited locally without a request. Not-found and transport
    /// failures both return `None`.
    #[must_use]
    pub fn fetch_country_details(&self, code: &str) -> Option<CountryDetail> {
        let _span = tracing::info_span!("fetch_country_details", code = %code).entered();

        if !is_valid_code(code) {
            tracing::warn!(code = %code, "invalid country code, skipping request");
            return None;
        }

        match self.request_detail(code) {
            Ok(mut raw) => {
                if raw.is_empty() {
                    tracing::warn!(code = %code, "country not found");
                    return None;
                }
                Some(raw.remove(0).into_detail())
            }
            Err(e) => {
                tracing::error!(code = %code, error = %e, "failed to fetch country details");
                None
            }
        }
    }

    fn request_all(&self) -> Result<Vec<RawCountry>> {
        let url = format!("{}/all", self.base_url);
        let raw = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json::<Vec<RawCountry>>()?;
        Ok(raw)
    }

    /// The alpha endpoint wraps the single record in a one-element array.
    fn request_detail(&self, code: &str) -> Result<Vec<RawCountry>> {
        let url = format!("{}/alpha/{}", self.base_url, code.to_lowercase());
        let raw = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json::<Vec<RawCountry>>()?;
        Ok(raw)
    }
}

/// A well-formed cca3 identifier is exactly three ASCII letters.
fn is_valid_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_validation_accepts_only_three_ascii_letters() {
        assert!(is_valid_code("ISL"));
        assert!(is_valid_code("bra"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("IS"));
        assert!(!is_valid_code("ISLA"));
        assert!(!is_valid_code("I5L"));
        assert!(!is_valid_code("..."));
    }

    #[test]
    fn malformed_code_short_circuits_without_a_request() {
        // Unroutable base URL: a request would fail slowly, a short-circuit
        // returns immediately.
        let api = CountryApi::with_base_url("http://127.0.0.1:0").unwrap();
        assert!(api.fetch_country_details("not-a-code").is_none());
    }
}
