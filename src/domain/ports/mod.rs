//! Driven ports implemented by outbound adapters.
//!
//! The domain owns the request and response contracts so services stay
//! adapter-agnostic; reqwest lives entirely on the other side of these
//! traits.

pub mod catalog;
pub mod identity;

pub use self::catalog::{CatalogError, CatalogSource, FixtureCatalogSource};
pub use self::identity::{FixtureIdentityProvider, IdentityError, IdentityProvider};

#[cfg(test)]
pub use self::catalog::MockCatalogSource;
#[cfg(test)]
pub use self::identity::MockIdentityProvider;
