//! Core types and logic for the Gyan study-content browser.
//!
//! This crate is deliberately free of HTTP and database dependencies. Storage
//! backends implement the repository traits in [`store`]; remote IO lives in
//! `gyan-artifacts`.

pub mod artifact;
pub mod catalog;
pub mod clock;
pub mod download;
pub mod error;
pub mod memory;
pub mod nav;
pub mod preferences;
pub mod progress;
pub mod search;
pub mod seed;
pub mod store;
pub mod summary;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
