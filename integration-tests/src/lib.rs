//! Shared fixtures for the end-to-end tests.
//!
//! - [`functions`] — reference objectives with known minima
//! - [`experiment`] — a TOML experiment format that configures and runs a
//!   solve, with optional constraint regions

pub mod experiment;
pub mod functions;
