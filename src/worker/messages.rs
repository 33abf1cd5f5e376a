//! Fetch worker message types for cross-thread communication.
//!
//! Defines the request and response protocol between the main event loop and
//! the background fetch thread. Every message carries a `generation` counter:
//! the app bumps its generation whenever a newer fetch supersedes the
//! in-flight one, and responses whose generation no longer matches are
//! dropped on arrival. In-flight requests are never cancelled; their late
//! results are simply ignored.

use crate::domain::{CountryDetail, CountrySummary};

/// Requests sent from the main thread to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerRequest {
    /// Fetch the full country list.
    FetchAllCountries {
        /// Generation of the app state issuing the request.
        generation: u64,
    },

    /// Fetch the full record for one country.
    FetchCountryDetails {
        /// Three-letter cca3 identifier.
        code: String,

        /// Generation of the app state issuing the request.
        generation: u64,
    },
}

/// Responses sent from the fetch worker back to the main thread.
///
/// Failures do not get their own variant: per the boundary policy a failed
/// list fetch arrives as an empty `countries` vec and a failed detail fetch
/// as `detail: None`.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// The full country list (possibly empty on failure).
    CountriesLoaded {
        countries: Vec<CountrySummary>,
        generation: u64,
    },

    /// One country's detail record, absent when not found or failed.
    DetailLoaded {
        code: String,
        detail: Option<Box<CountryDetail>>,
        generation: u64,
    },
}

impl WorkerResponse {
    /// The generation the originating request carried.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Self::CountriesLoaded { generation, .. } | Self::DetailLoaded { generation, .. } => {
                *generation
            }
        }
    }
}
