//! Clip module: three-layer architecture (domain, repository, service).
//!
//! `ClipService` validates the referenced user and then lists, adds, updates
//! or deletes clips through the `UserDirectory` and `ClipStore` seams.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use errors::ClipError;
pub use service::{ClipService, OwnershipPolicy, UserService};
