//! Query modules for the disease.sh SDK.
//!
//! Each module provides a query struct that borrows from an
//! [`ApiClient`](crate::client::ApiClient) and exposes methods returning
//! `Result<T>` with shaped tabular payloads.

pub mod countries;
pub mod global;

pub use countries::CountryQuery;
pub use global::GlobalQuery;
