//! SQLite backend for Gyan's durable local state.
//!
//! Progress, offline-download markers and the theme preference each live
//! under one namespaced key of a small key/value table. The connection is
//! shared behind a mutex; every repository call is a single short statement.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
