//! Outbound adapters implementing the domain ports.

pub mod catalog;
pub mod identity;
