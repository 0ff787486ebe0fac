//! Remote and platform IO for Gyan's artifacts.
//!
//! [`ArtifactCache`] fetches a topic's document from remote storage, saves it
//! through whichever [`writer::ArtifactWriter`] the host supports, and keeps
//! the durable "available offline" marker in step with what was saved. The
//! strategies are chosen once, at startup, by [`writer::Strategies::detect`].

pub mod cache;
pub mod error;
pub mod fetch;
pub mod location;
pub mod metadata;
pub mod share;
pub mod writer;

pub use cache::{ArtifactCache, Platform};
pub use error::{AcquisitionError, AcquisitionErrorKind};
pub use fetch::{ArtifactFetcher, HttpFetcher};
pub use location::{ObjectPath, StorageLocation};
pub use metadata::RemoteMetadata;

#[cfg(test)]
mod tests;
