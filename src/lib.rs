//! This crate implements the core of the `github-lookup` terminal
//! application: a lookup form that resolves GitHub users and repositories
//! and accumulates the results in an append-only on-screen list.
//!
//! The actual HTTP client lives in the `github_lookup_client` crate; this
//! crate wires it to the form loop in `src/bin/github-lookup`.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod config;
pub mod lookup;
pub mod models;
pub mod results;
pub mod tasks;
pub mod util;

#[cfg(test)]
mod tests;
