//! Reqwest-backed catalog adapter.

mod dto;
mod http_source;

pub use http_source::CatalogHttpSource;
