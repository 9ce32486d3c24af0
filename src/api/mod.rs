//! Resource fetching: transport, pagination and typed endpoints.
//!
//! # Modules
//!
//! - `fetcher`: [`ResourceFetcher`] trait (authenticated GET returning JSON)
//! - `http`: reqwest implementation
//! - `pagination`: page-number walk assembling `data` arrays
//! - `client`: [`ReactorApi`] endpoints (companies, properties, rules, ...)

pub mod client;
pub mod fetcher;
pub mod http;
pub mod pagination;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ReactorApi;
pub use fetcher::ResourceFetcher;
pub use http::HttpFetcher;
pub use pagination::{get_all_pages, page_path, PAGE_SIZE};
