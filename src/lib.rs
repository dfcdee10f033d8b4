//! Gateway library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds transport-agnostic
//! types, rules, and ports; `inbound` adapts HTTP requests onto the domain;
//! `outbound` implements the ports against the identity provider and the
//! upstream catalog; `server` assembles the application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
