//! Reqwest-backed identity provider adapter.

mod dto;
mod http_provider;

pub use http_provider::{Auth0HttpProvider, ProviderInitError, ProviderSettings};
