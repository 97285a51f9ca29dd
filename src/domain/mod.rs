// Domain models
// Pure Rust, no framework dependencies
pub mod models;
