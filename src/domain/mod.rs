//! Domain layer for atlascope.
//!
//! This module contains the core domain types and the filter engine,
//! independent of terminal, network, or storage concerns. Country records are
//! immutable once fetched; everything downstream produces derived sequences
//! rather than mutating them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`country`]: Country summary/detail models and the fetched catalog
//! - [`filter`]: Filter engine (query, region, subregion, population bracket)

pub mod country;
pub mod error;
pub mod filter;

pub use country::{CountryCatalog, CountryDetail, CountrySummary, Currency};
pub use error::{AtlascopeError, Result};
pub use filter::{CountryFilter, FacetOptions, PopulationBracket};
