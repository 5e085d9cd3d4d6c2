//! Shared building blocks for the clipsync crates.

pub mod types;

pub mod utils {
    pub mod logging;
}
