//! Service layer for clip synchronization.
//! - Separates business rules from data access behind repository traits.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides typed errors for callers (HTTP layer) to translate.

pub mod clips;
#[cfg(test)]
pub mod test_support;
