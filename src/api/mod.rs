//! Country record source: the REST Countries API boundary.
//!
//! This layer owns everything wire-shaped. Raw response models live in
//! [`models`], the blocking client with the log-and-return-empty failure
//! policy lives in [`client`]. The rest of the app only ever sees valid
//! (possibly empty) domain values.

pub mod client;
pub mod models;

pub use client::CountryApi;
